use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle state of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Completed,
    Current,
    Upcoming,
    Cancelled,
}

impl EventStatus {
    /// Case-insensitive parse; unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Some(EventStatus::Completed),
            "current" => Some(EventStatus::Current),
            "upcoming" => Some(EventStatus::Upcoming),
            "cancelled" | "canceled" => Some(EventStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Completed => "completed",
            EventStatus::Current => "current",
            EventStatus::Upcoming => "upcoming",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

/// One entry of a timeline widget, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    /// Widgets send ids as strings or numbers; both are normalized to a string.
    #[serde(default, deserialize_with = "de_text_lenient")]
    pub id: String,
    /// Raw date text. Numeric input is read as epoch milliseconds and stored as RFC 3339.
    #[serde(default, deserialize_with = "de_date_from_string_or_millis")]
    pub date: String,
    #[serde(default, deserialize_with = "de_text_lenient")]
    pub title: String,
    // Optional text fields never reject the event: numbers are kept as text, other
    // shapes are treated as absent.
    #[serde(default, deserialize_with = "de_opt_text_lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text_lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text_lenient")]
    pub icon: Option<String>,
    /// Unknown status strings are dropped instead of rejecting the whole event.
    #[serde(default, deserialize_with = "de_status_lenient")]
    pub status: Option<EventStatus>,
    #[serde(default, deserialize_with = "de_opt_text_lenient")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de_metadata_lenient")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl TimelineEvent {
    /// Minimal event with the three required fields set.
    pub fn new(id: impl Into<String>, date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            title: title.into(),
            description: None,
            category: None,
            icon: None,
            status: None,
            link: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Parsed instant of `date`, or `None` when the text is not a recognized date.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.date)
    }

    /// Category with blank values treated as absent.
    pub fn category_label(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Parse the date shapes widgets commonly send. Values without an offset are taken as UTC,
/// date-only values as midnight UTC.
///
/// Accepted: RFC 3339, ISO 8601 date-times with or without seconds and with `Z`, `+hh`,
/// `+hhmm` or `+hh:mm` offsets, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DD`, `YYYY/MM/DD`,
/// `Mar 1, 2024`, `March 1, 2024`, `YYYY-MM` and a bare four-digit `YYYY`.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc());
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%b %-d, %Y", "%B %-d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc());
        }
    }
    // chrono needs a day component, so month and year forms are completed by hand.
    if let Some((y, m)) = s.split_once('-')
        && y.len() == 4
        && (1..=2).contains(&m.len())
        && let (Ok(year), Ok(month)) = (y.parse::<i32>(), m.parse::<u32>())
    {
        return NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|ndt| ndt.and_utc());
    }
    if s.len() == 4
        && let Ok(year) = s.parse::<i32>()
    {
        return NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|ndt| ndt.and_utc());
    }
    None
}

/// Text out of a loosely typed JSON value. Numbers and booleans are kept as text.
fn text_from_value(raw: serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match raw {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            log::warn!("ignoring non-text event field value {}", other);
            None
        }
    }
}

/// Serde helper: optional text that degrades to `None` instead of failing.
fn de_opt_text_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(text_from_value(serde_json::Value::deserialize(deserializer)?))
}

/// Serde helper: required text that degrades to an empty string.
fn de_text_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(text_from_value(serde_json::Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Serde helper: metadata must be an object; anything else is dropped.
fn de_metadata_lenient<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        serde_json::Value::Null => BTreeMap::new(),
        other => {
            log::warn!("ignoring non-object event metadata {}", other);
            BTreeMap::new()
        }
    })
}

/// Serde helper: dates arrive as text or as epoch milliseconds.
fn de_date_from_string_or_millis<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct DateVisitor;

    impl DateVisitor {
        fn from_millis(ms: i64) -> String {
            // Out-of-range timestamps keep their digits and simply fail to parse later.
            DateTime::from_timestamp_millis(ms)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| ms.to_string())
        }
    }

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a date string or epoch milliseconds")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::from_millis(i64::try_from(v).unwrap_or(i64::MAX)))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::from_millis(v))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_finite() {
                Ok(Self::from_millis(v as i64))
            } else {
                Ok(String::new())
            }
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(s.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(DateVisitor)
}

/// Serde helper: unknown or non-string statuses become `None`.
fn de_status_lenient<'de, D>(deserializer: D) -> Result<Option<EventStatus>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::String(s) => {
            let parsed = EventStatus::parse(&s);
            if parsed.is_none() {
                log::warn!("ignoring unknown event status {:?}", s);
            }
            parsed
        }
        _ => None,
    })
}
