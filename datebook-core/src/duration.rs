//! Signed ISO-8601 durations (`-P1D`, `PT30M`, `PT0S`).
//!
//! Used both for `alarm_trigger` in the JSON store and for the `TRIGGER`
//! value of exported alarms, which RFC 5545 defines with the same grammar.

use chrono::Duration;

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse a duration with an optional leading `-` or `+` sign.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let (is_negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    // iso8601 reads oversized numbers as zero instead of failing
    if let Some(digits) = oversized_number(body) {
        return Err(format!("Duration '{}' has an out of range number: {}", value, digits));
    }

    let parsed = iso8601::duration(body)?;
    let std_duration: std::time::Duration = parsed.into();
    let duration = Duration::from_std(std_duration)
        .map_err(|e| format!("Duration '{}' out of range: {}", value, e))?;

    Ok(if is_negative { -duration } else { duration })
}

fn oversized_number(body: &str) -> Option<&str> {
    body.split(|c: char| !c.is_ascii_digit())
        .find(|digits| !digits.is_empty() && digits.parse::<u32>().is_err())
}

/// Format a duration using days, hours, minutes and seconds, omitting
/// zero units. A zero duration is `PT0S`.
///
/// Seconds keep millisecond precision; anything finer is truncated.
pub fn format_duration(duration: Duration) -> String {
    write_duration(duration, true)
}

/// Like [`format_duration`] but truncated to whole seconds, as RFC 5545
/// `dur-second` has no fractional part.
pub fn format_ics_duration(duration: Duration) -> String {
    write_duration(duration, false)
}

fn write_duration(duration: Duration, with_millis: bool) -> String {
    let is_negative = duration < Duration::zero();
    let duration = duration.abs();

    let total_seconds = duration.num_seconds();
    let millis = if with_millis {
        duration.subsec_nanos() / 1_000_000
    } else {
        0
    };
    let sign = if is_negative && (total_seconds > 0 || millis > 0) {
        "-"
    } else {
        ""
    };

    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut out = format!("{sign}P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }

    if hours > 0 || minutes > 0 || seconds > 0 || millis > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if millis > 0 {
            out.push_str(&format!("{seconds}.{millis:03}S"));
        } else if seconds > 0 {
            out.push_str(&format!("{seconds}S"));
        }
    } else if days == 0 {
        out.push_str("T0S");
    }

    out
}

/// `#[serde(with = ...)]` adapter storing a `chrono::Duration` as an
/// ISO-8601 string.
pub mod serde_duration {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_duration(&value).map_err(serde::de::Error::custom)
    }
}
