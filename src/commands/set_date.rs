use std::path::Path;

use anyhow::Result;

use crate::prompt;
use crate::render;

pub fn run(data_path: &Path) -> Result<()> {
    let uid = prompt::ask_uid("date item uid")?;
    let event_template_uid = prompt::ask_uid("event template uid")?;

    let mut document = super::open_store(data_path)?;

    if document.set_date_item_template(uid, event_template_uid).is_some() {
        super::save_store(data_path, &document)?;
        log::info!("Date item {} now uses event template {}", uid, event_template_uid);
    } else {
        log::warn!("Date item {} not found", uid);
    }

    println!("{}", render::done());
    Ok(())
}
