//! JSON file holding the whole `Document`.
//!
//! The file is read and written in one go. There is no locking and no atomic
//! replace; concurrent invocations race and the last writer wins.

use std::path::Path;

use chrono::Local;

use crate::document::Document;
use crate::error::{DatebookError, DatebookResult};

/// Load the document at `path`.
pub fn load(path: &Path) -> DatebookResult<Document> {
    let content = std::fs::read_to_string(path)?;

    let document: Document =
        serde_json::from_str(&content).map_err(|e| DatebookError::StoreParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    log::debug!(
        "Loaded {} date items and {} templates from {}",
        document.date_item_s.len(),
        document.event_template_s.len(),
        path.display()
    );

    Ok(document)
}

/// Load the document at `path`, writing the seeded default first if no file
/// exists yet. An existing file is never regenerated.
pub fn initialize(path: &Path) -> DatebookResult<Document> {
    if !path.exists() {
        log::debug!("No store at {}, creating default content", path.display());
        save(path, &Document::seeded(Local::now().date_naive()))?;
    }

    load(path)
}

/// Overwrite the file at `path` with `document` as pretty-printed JSON.
pub fn save(path: &Path, document: &Document) -> DatebookResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(document)
        .map_err(|e| DatebookError::Serialization(e.to_string()))?;

    std::fs::write(path, content)?;

    log::debug!("Saved store to {}", path.display());
    Ok(())
}
