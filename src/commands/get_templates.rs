use std::path::Path;

use anyhow::Result;

use crate::render::{TEMPLATE_HEADER, print_table};

pub fn run(data_path: &Path) -> Result<()> {
    let document = super::open_store(data_path)?;

    print_table(TEMPLATE_HEADER, &document.event_template_s);

    Ok(())
}
