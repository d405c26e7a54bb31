//! A concrete calendar date bound to an event template.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single date, exported as one yearly-recurring event.
///
/// `event_template_uid` is not checked against existing templates; a
/// dangling reference is legal and skipped on export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateItem {
    pub uid: Uuid,
    pub date: NaiveDate,
    pub event_template_uid: Uuid,
}

impl DateItem {
    /// Create a date item with a freshly generated uid.
    pub fn new(date: NaiveDate, event_template_uid: Uuid) -> Self {
        DateItem {
            uid: Uuid::new_v4(),
            date,
            event_template_uid,
        }
    }
}
