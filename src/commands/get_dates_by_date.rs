use std::path::Path;

use anyhow::Result;

use crate::prompt;
use crate::render::{DATE_ITEM_HEADER, print_table};

pub fn run(data_path: &Path) -> Result<()> {
    let date = prompt::ask_date("date")?;

    let document = super::open_store(data_path)?;

    print_table(DATE_ITEM_HEADER, document.date_items_on(date));

    Ok(())
}
