//! Core types for datebook.
//!
//! This crate provides everything the `datebook` CLI operates on:
//! - `DateItem` / `EventTemplate` and the `Document` holding them
//! - `store` for the JSON file on disk
//! - `ics` for exporting a document as an .ics calendar

pub mod config;
pub mod date_item;
pub mod document;
pub mod duration;
pub mod error;
pub mod event_template;
pub mod ics;
pub mod input;
pub mod placeholder;
pub mod store;

pub use date_item::DateItem;
pub use document::Document;
pub use event_template::{AlarmTemplate, EventTemplate, PlainTemplate};
