//! ICS export.
//!
//! Turns a `Document` into an RFC 5545 calendar: one yearly VEVENT per date
//! item, with a VALARM when its template carries one.

mod generate;

pub use generate::{export, generate_ics, write_ics};
