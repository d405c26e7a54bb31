//! `{name}` placeholder substitution for template text.
//!
//! Recognized names are the Date Item's fields: `uid`, `date` and
//! `event_template_uid`. `{{` and `}}` produce literal braces. Anything else,
//! including unknown names and unmatched braces, is copied through verbatim.

use crate::date_item::DateItem;

/// Substitute the fields of `item` into `template`.
pub fn render(template: &str, item: &DateItem) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if let Some(after) = tail.strip_prefix('{') {
            match after.find(['{', '}']) {
                Some(end) if after.as_bytes()[end] == b'}' => {
                    let name = &after[..end];
                    match field_value(name, item) {
                        Some(value) => out.push_str(&value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[end + 1..];
                }
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        } else {
            // A lone '}'
            out.push('}');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

fn field_value(name: &str, item: &DateItem) -> Option<String> {
    match name {
        "uid" => Some(item.uid.to_string()),
        "date" => Some(item.date.format("%Y-%m-%d").to_string()),
        "event_template_uid" => Some(item.event_template_uid.to_string()),
        _ => None,
    }
}
