pub mod add_date;
pub mod del_date;
pub mod export;
pub mod get_dates_by_date;
pub mod get_dates_by_template;
pub mod get_template;
pub mod get_templates;
pub mod set_date;

use std::path::Path;

use anyhow::{Context, Result};
use datebook_core::{Document, store};

/// Load the store, creating it with default content on first use.
fn open_store(data_path: &Path) -> Result<Document> {
    store::initialize(data_path)
        .with_context(|| format!("Failed to open store at {}", data_path.display()))
}

fn save_store(data_path: &Path, document: &Document) -> Result<()> {
    store::save(data_path, document)
        .with_context(|| format!("Failed to save store at {}", data_path.display()))
}
