use std::path::Path;

use anyhow::Result;

use crate::prompt;
use crate::render;

pub fn run(data_path: &Path) -> Result<()> {
    let uid = prompt::ask_uid("date item uid")?;

    let mut document = super::open_store(data_path)?;

    // Nothing to save when the uid is unknown
    match document.remove_date_item(uid) {
        Some(removed) => {
            super::save_store(data_path, &document)?;
            log::info!("Deleted date item {} ({})", removed.uid, removed.date);
        }
        None => log::warn!("Date item {} not found", uid),
    }

    println!("{}", render::done());
    Ok(())
}
