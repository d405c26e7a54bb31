use std::path::Path;

use anyhow::Result;

use crate::prompt;
use crate::render;

pub fn run(data_path: &Path) -> Result<()> {
    let uid = prompt::ask_uid("event template uid")?;

    let document = super::open_store(data_path)?;

    match document.find_template(uid) {
        Some(template) => println!("{}", template),
        None => log::warn!("Event template {} not found", uid),
    }

    println!("{}", render::done());
    Ok(())
}
