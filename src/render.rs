//! Table rows and status lines.
//!
//! Colors are applied only when stdout supports them, so piped output stays
//! plain text.

use datebook_core::{DateItem, EventTemplate};
use owo_colors::{OwoColorize, Stream};

pub const TEMPLATE_HEADER: &str = "uid | summary";
pub const DATE_ITEM_HEADER: &str = "uid | event_template_uid | date";

/// One table row per value.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventTemplate {
    fn render(&self) -> String {
        format!("{} | {}", self.uid(), self.summary())
    }
}

impl Render for DateItem {
    fn render(&self) -> String {
        format!("{} | {} | {}", self.uid, self.event_template_uid, self.date)
    }
}

pub fn header(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

/// Printed at the end of every interactive command, whether or not the
/// target was found.
pub fn done() -> String {
    "Done!"
        .if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Print a header, the rows, and the closing confirmation.
pub fn print_table<'a, T, I>(header_text: &str, rows: I)
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    println!("{}", header(header_text));
    for row in rows {
        println!("{}", row.render());
    }
    println!("{}", done());
}
