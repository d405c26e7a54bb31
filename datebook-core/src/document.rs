//! The full set of date items and event templates.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date_item::DateItem;
use crate::event_template::EventTemplate;

/// Everything stored in the JSON file. Both collections keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub date_item_s: Vec<DateItem>,
    #[serde(default)]
    pub event_template_s: Vec<EventTemplate>,
}

impl Document {
    /// First-run content: a plain template, a template reminding 24 hours
    /// ahead, and one date item for `today` bound to the plain one.
    pub fn seeded(today: NaiveDate) -> Self {
        let plain = EventTemplate::plain("event");
        let with_alarm = EventTemplate::with_alarm(
            "event with alarm",
            Duration::hours(-24),
            Some("Reminder: Event in 24 hours".to_string()),
        );

        Document {
            date_item_s: vec![DateItem::new(today, plain.uid())],
            event_template_s: vec![plain, with_alarm],
        }
    }

    pub fn find_template(&self, uid: Uuid) -> Option<&EventTemplate> {
        self.event_template_s.iter().find(|t| t.uid() == uid)
    }

    pub fn find_date_item(&self, uid: Uuid) -> Option<&DateItem> {
        self.date_item_s.iter().find(|d| d.uid == uid)
    }

    /// Append a new date item. The template reference is not validated.
    pub fn add_date_item(&mut self, date: NaiveDate, event_template_uid: Uuid) -> &DateItem {
        self.date_item_s.push(DateItem::new(date, event_template_uid));
        &self.date_item_s[self.date_item_s.len() - 1]
    }

    /// Remove a date item, returning it if it existed.
    pub fn remove_date_item(&mut self, uid: Uuid) -> Option<DateItem> {
        let index = self.date_item_s.iter().position(|d| d.uid == uid)?;
        Some(self.date_item_s.remove(index))
    }

    /// Point a date item at another template, returning the updated item if
    /// it existed.
    pub fn set_date_item_template(
        &mut self,
        uid: Uuid,
        event_template_uid: Uuid,
    ) -> Option<&DateItem> {
        let item = self.date_item_s.iter_mut().find(|d| d.uid == uid)?;
        item.event_template_uid = event_template_uid;
        Some(&*item)
    }

    pub fn date_items_on(&self, date: NaiveDate) -> impl Iterator<Item = &DateItem> {
        self.date_item_s.iter().filter(move |d| d.date == date)
    }

    pub fn date_items_for_template(&self, uid: Uuid) -> impl Iterator<Item = &DateItem> {
        self.date_item_s
            .iter()
            .filter(move |d| d.event_template_uid == uid)
    }

    /// Date items whose template reference resolves to nothing.
    pub fn dangling_date_items(&self) -> impl Iterator<Item = &DateItem> {
        self.date_item_s
            .iter()
            .filter(move |d| self.find_template(d.event_template_uid).is_none())
    }
}
