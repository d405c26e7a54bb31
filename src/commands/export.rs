use std::path::Path;

use anyhow::{Context, Result};
use datebook_core::ics;

pub fn run(data_path: &Path, ics_path: &Path) -> Result<()> {
    let document = super::open_store(data_path)?;

    ics::write_ics(ics_path, &document)
        .with_context(|| format!("Failed to write calendar to {}", ics_path.display()))?;

    let skipped = document.dangling_date_items().count();
    log::info!(
        "Exported {} events to {}",
        document.date_item_s.len() - skipped,
        ics_path.display()
    );

    Ok(())
}
