use std::path::Path;

use anyhow::Result;

use crate::prompt;
use crate::render;

pub fn run(data_path: &Path) -> Result<()> {
    let date = prompt::ask_date("date")?;
    let event_template_uid = prompt::ask_uid("event template uid")?;

    let mut document = super::open_store(data_path)?;

    if document.find_template(event_template_uid).is_none() {
        log::warn!(
            "Event template {} not found; the date will be skipped on export",
            event_template_uid
        );
    }

    let uid = document.add_date_item(date, event_template_uid).uid;
    super::save_store(data_path, &document)?;

    log::info!("Added date item {}", uid);
    println!("{}", render::done());
    Ok(())
}
