//! Reusable event descriptions, with or without a reminder alarm.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::duration::{format_duration, serde_duration};

pub const DEFAULT_ALARM_ACTION: &str = "DISPLAY";

/// An event template. Stored with an explicit `kind` discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventTemplate {
    Plain(PlainTemplate),
    Alarm(AlarmTemplate),
}

/// Template without a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTemplate {
    pub uid: Uuid,
    /// May contain `{uid}`, `{date}` and `{event_template_uid}` placeholders
    pub summary: String,
}

/// Template whose events carry one VALARM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmTemplate {
    pub uid: Uuid,
    pub summary: String,

    #[serde(default = "default_alarm_action")]
    pub alarm_action: String,

    /// Offset from the event start; negative means before.
    #[serde(default = "Duration::zero", with = "serde_duration")]
    pub alarm_trigger: Duration,

    #[serde(default)]
    pub alarm_description: Option<String>,
}

fn default_alarm_action() -> String {
    DEFAULT_ALARM_ACTION.to_string()
}

impl EventTemplate {
    pub fn plain(summary: impl Into<String>) -> Self {
        EventTemplate::Plain(PlainTemplate {
            uid: Uuid::new_v4(),
            summary: summary.into(),
        })
    }

    pub fn with_alarm(
        summary: impl Into<String>,
        alarm_trigger: Duration,
        alarm_description: Option<String>,
    ) -> Self {
        EventTemplate::Alarm(AlarmTemplate {
            uid: Uuid::new_v4(),
            summary: summary.into(),
            alarm_action: default_alarm_action(),
            alarm_trigger,
            alarm_description,
        })
    }

    pub fn uid(&self) -> Uuid {
        match self {
            EventTemplate::Plain(t) => t.uid,
            EventTemplate::Alarm(t) => t.uid,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            EventTemplate::Plain(t) => &t.summary,
            EventTemplate::Alarm(t) => &t.summary,
        }
    }

    pub fn alarm(&self) -> Option<&AlarmTemplate> {
        match self {
            EventTemplate::Plain(_) => None,
            EventTemplate::Alarm(t) => Some(t),
        }
    }
}

/// Field-per-line dump, as printed by `get-template`.
impl fmt::Display for EventTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "uid: {}", self.uid())?;
        write!(f, "summary: {}", self.summary())?;

        if let Some(alarm) = self.alarm() {
            writeln!(f)?;
            writeln!(f, "alarm_action: {}", alarm.alarm_action)?;
            writeln!(f, "alarm_trigger: {}", format_duration(alarm.alarm_trigger))?;
            match &alarm.alarm_description {
                Some(desc) => write!(f, "alarm_description: {desc}")?,
                None => write!(f, "alarm_description: None")?,
            }
        }

        Ok(())
    }
}
