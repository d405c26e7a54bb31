//! ICS file generation.

use std::path::Path;

use chrono::Duration;
use icalendar::{Alarm, Calendar, Component, EventLike, Trigger};

use crate::date_item::DateItem;
use crate::document::Document;
use crate::duration::format_ics_duration;
use crate::error::DatebookResult;
use crate::event_template::{AlarmTemplate, EventTemplate};
use crate::placeholder;

const PRODID: &str = "-//datebook//datebook//EN";

/// Build the calendar for `document`.
///
/// Date items whose template cannot be found are skipped.
pub fn export(document: &Document) -> Calendar {
    let mut cal = Calendar::new();

    for item in &document.date_item_s {
        let Some(template) = document.find_template(item.event_template_uid) else {
            log::warn!(
                "Skipping date item {} ({}): event template {} not found",
                item.uid,
                item.date,
                item.event_template_uid
            );
            continue;
        };

        cal.push(build_event(item, template));
    }

    cal.done()
}

/// Render `document` as .ics text. Identical documents give identical output.
pub fn generate_ics(document: &Document) -> String {
    strip_ics_bloat(&export(document).to_string())
}

/// Export `document` and write the result to `path`.
pub fn write_ics(path: &Path, document: &Document) -> DatebookResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let content = generate_ics(document);
    std::fs::write(path, content)?;

    log::debug!("Wrote calendar to {}", path.display());
    Ok(())
}

fn build_event(item: &DateItem, template: &EventTemplate) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&item.uid.to_string());
    ics_event.summary(&placeholder::render(template.summary(), item));

    // DTSTAMP is required by RFC 5545. Deriving it from the date (instead of
    // the current time) keeps the export reproducible.
    let dtstamp = item.date.format("%Y%m%dT000000Z").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    // Floating local midnight; zero-length event
    let start = item.date.format("%Y%m%dT000000").to_string();
    ics_event.add_property("DTSTART", &start);
    ics_event.add_property("DTEND", &start);

    ics_event.add_property("RRULE", "FREQ=YEARLY");

    if let Some(alarm) = template.alarm() {
        ics_event.alarm(build_alarm(item, alarm));
    }

    ics_event.done()
}

fn build_alarm(item: &DateItem, template: &AlarmTemplate) -> Alarm {
    // The constructor's ACTION and TRIGGER are both replaced below.
    let mut alarm = Alarm::audio(Trigger::before_start(Duration::zero()));

    alarm.add_property("ACTION", &template.alarm_action);
    alarm.add_property("TRIGGER", &format_ics_duration(template.alarm_trigger));

    if let Some(ref desc) = template.alarm_description {
        alarm.add_property("DESCRIPTION", &placeholder::render(desc, item));
    }

    alarm
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own
/// - Remove CALSCALE:GREGORIAN (it's the default)
/// - Remove DTSTAMP and UID inside VALARM sections (not required by RFC 5545,
///   and randomly generated by the crate)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Split the output into VEVENT blocks
    fn vevents(ics: &str) -> Vec<String> {
        ics.split("BEGIN:VEVENT")
            .skip(1)
            .map(|block| block.split("END:VEVENT").next().unwrap().to_string())
            .collect()
    }

    fn count_valarms(block: &str) -> usize {
        block.lines().filter(|l| *l == "BEGIN:VALARM").count()
    }

    #[test]
    fn test_generate_ics_plain_event() {
        let mut doc = Document::default();
        doc.event_template_s.push(EventTemplate::plain("Birthday"));
        let template_uid = doc.event_template_s[0].uid();
        let item_uid = doc.add_date_item(date(1990, 5, 17), template_uid).uid;

        let ics = generate_ics(&doc);
        let events = vevents(&ics);
        assert_eq!(events.len(), 1, "ICS:\n{}", ics);

        let event = &events[0];
        assert!(event.contains(&format!("UID:{}", item_uid)), "{event}");
        assert!(event.contains("SUMMARY:Birthday"), "{event}");
        assert!(event.contains("DTSTART:19900517T000000\r\n"), "{event}");
        assert!(event.contains("DTEND:19900517T000000\r\n"), "{event}");
        assert!(event.contains("RRULE:FREQ=YEARLY"), "{event}");
        assert!(event.contains("DTSTAMP:19900517T000000Z"), "{event}");
        assert_eq!(count_valarms(event), 0);
    }

    #[test]
    fn test_generate_ics_alarm_event() {
        let mut doc = Document::default();
        doc.event_template_s.push(EventTemplate::with_alarm(
            "Wedding anniversary",
            Duration::hours(-24),
            Some("Tomorrow: anniversary ({date})".to_string()),
        ));
        let template_uid = doc.event_template_s[0].uid();
        doc.add_date_item(date(2015, 9, 5), template_uid);

        let ics = generate_ics(&doc);
        let events = vevents(&ics);
        assert_eq!(events.len(), 1);
        assert_eq!(count_valarms(&events[0]), 1, "ICS:\n{}", ics);

        let valarm_section: String = ics
            .split("BEGIN:VALARM")
            .nth(1)
            .unwrap()
            .split("END:VALARM")
            .next()
            .unwrap()
            .to_string();
        assert!(valarm_section.contains("ACTION:DISPLAY"), "{valarm_section}");
        assert!(valarm_section.contains("TRIGGER:-P1D"), "{valarm_section}");
        assert!(
            valarm_section.contains("Tomorrow: anniversary (2015-09-05)"),
            "{valarm_section}"
        );
        assert!(!valarm_section.contains("UID:"), "{valarm_section}");
        assert!(!valarm_section.contains("DTSTAMP:"), "{valarm_section}");
    }

    #[test]
    fn test_alarm_without_description() {
        let mut doc = Document::default();
        doc.event_template_s
            .push(EventTemplate::with_alarm("Quiet", Duration::minutes(-30), None));
        let template_uid = doc.event_template_s[0].uid();
        doc.add_date_item(date(2020, 1, 1), template_uid);

        let ics = generate_ics(&doc);
        let valarm_section = ics.split("BEGIN:VALARM").nth(1).unwrap();
        let valarm_section = valarm_section.split("END:VALARM").next().unwrap();

        assert!(valarm_section.contains("TRIGGER:-PT30M"), "{valarm_section}");
        assert!(!valarm_section.contains("DESCRIPTION"), "{valarm_section}");
    }

    #[test]
    fn test_custom_alarm_action_is_kept() {
        let mut doc = Document::default();
        let mut template = EventTemplate::with_alarm("Call", Duration::zero(), None);
        if let EventTemplate::Alarm(ref mut alarm) = template {
            alarm.alarm_action = "AUDIO".to_string();
        }
        let template_uid = template.uid();
        doc.event_template_s.push(template);
        doc.add_date_item(date(2020, 1, 1), template_uid);

        let ics = generate_ics(&doc);
        assert!(ics.contains("ACTION:AUDIO"), "{ics}");
        assert!(ics.contains("TRIGGER:PT0S"), "{ics}");
        assert!(!ics.contains("ACTION:DISPLAY"), "{ics}");
    }

    #[test]
    fn test_fractional_trigger_is_whole_seconds() {
        let mut doc = Document::default();
        let template =
            EventTemplate::with_alarm("Soon", -Duration::milliseconds(90_500), None);
        let template_uid = template.uid();
        doc.event_template_s.push(template);
        doc.add_date_item(date(2020, 1, 1), template_uid);

        let ics = generate_ics(&doc);
        assert!(ics.contains("TRIGGER:-PT1M30S\r\n"), "{ics}");
    }

    #[test]
    fn test_dangling_reference_is_skipped() {
        let mut doc = Document::default();
        doc.event_template_s.push(EventTemplate::plain("Kept"));
        let template_uid = doc.event_template_s[0].uid();
        doc.add_date_item(date(2001, 1, 1), Uuid::new_v4());
        let kept = doc.add_date_item(date(2002, 2, 2), template_uid).uid;

        let ics = generate_ics(&doc);
        let events = vevents(&ics);
        assert_eq!(events.len(), 1, "ICS:\n{}", ics);
        assert!(events[0].contains(&format!("UID:{}", kept)));
    }

    #[test]
    fn test_empty_document_is_a_valid_calendar() {
        let ics = generate_ics(&Document::default());
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"), "{ics}");
        assert!(ics.ends_with("END:VCALENDAR\r\n"), "{ics}");
        assert!(ics.contains("VERSION:2.0"));
        assert!(ics.contains("PRODID:-//datebook//datebook//EN"));
        assert!(!ics.contains("CALSCALE"));
        assert!(vevents(&ics).is_empty());
    }

    #[test]
    fn test_events_follow_date_item_order() {
        let mut doc = Document::default();
        doc.event_template_s.push(EventTemplate::plain("{date}"));
        let template_uid = doc.event_template_s[0].uid();
        doc.add_date_item(date(2024, 6, 1), template_uid);
        doc.add_date_item(date(2024, 1, 1), template_uid);

        let ics = generate_ics(&doc);
        let events = vevents(&ics);
        assert!(events[0].contains("SUMMARY:2024-06-01"));
        assert!(events[1].contains("SUMMARY:2024-01-01"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let doc = Document::seeded(date(2025, 3, 20));
        assert_eq!(generate_ics(&doc), generate_ics(&doc));
    }

    #[test]
    fn test_seeded_document_plus_alarm_item() {
        let today = date(2025, 3, 20);
        let mut doc = Document::seeded(today);
        let alarm_uid = doc.event_template_s[1].uid();
        let plain_item = doc.date_item_s[0].uid;
        let alarm_item = doc.add_date_item(today, alarm_uid).uid;

        let ics = generate_ics(&doc);
        let events = vevents(&ics);
        assert_eq!(events.len(), 2);

        assert!(events[0].contains(&format!("UID:{}", plain_item)));
        assert!(events[0].contains("SUMMARY:event"));
        assert_eq!(count_valarms(&events[0]), 0);

        assert!(events[1].contains(&format!("UID:{}", alarm_item)));
        assert!(events[1].contains("SUMMARY:event with alarm"));
        assert_eq!(count_valarms(&events[1]), 1);
        assert!(events[1].contains("TRIGGER:-P1D"));
        assert!(events[1].contains("DESCRIPTION:Reminder: Event in 24 hours"));
    }

    #[test]
    fn test_write_ics() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/dates.ics");
        let doc = Document::seeded(date(2025, 3, 20));

        write_ics(&path, &doc).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), generate_ics(&doc));
    }
}
