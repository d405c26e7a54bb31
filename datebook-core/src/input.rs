//! Parsing of user-typed values (prompt answers).

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{DatebookError, DatebookResult, InputKind};

/// Parse a uid as typed by the user. Surrounding whitespace is ignored.
pub fn parse_uid(input: &str) -> DatebookResult<Uuid> {
    let trimmed = input.trim();
    Uuid::parse_str(trimmed).map_err(|e| DatebookError::InputParse {
        kind: InputKind::Uid,
        input: trimmed.to_string(),
        message: e.to_string(),
    })
}

/// Parse an ISO-8601 calendar date (YYYY-MM-DD).
pub fn parse_date(input: &str) -> DatebookResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| DatebookError::InputParse {
        kind: InputKind::Date,
        input: trimmed.to_string(),
        message: format!("{e}. Expected YYYY-MM-DD"),
    })
}
