//! Raw widget options and their one-shot resolution into concrete settings.

use serde::{Deserialize, Serialize};

use super::types::{
    DEFAULT_DATE_FORMAT, DEFAULT_GROUP_BY, DEFAULT_LAYOUT, DEFAULT_ORIENTATION,
    DEFAULT_SORT_ORDER, DateFormat, GroupBy, LayoutMode, Orientation, SortOrder,
};

/// Options exactly as they appear in the widget JSON. Every field is optional and
/// enum values are kept as text so that bad input degrades instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineConfig {
    #[serde(deserialize_with = "de_opt_text")]
    pub orientation: Option<String>,
    #[serde(deserialize_with = "de_opt_text")]
    pub layout: Option<String>,
    #[serde(deserialize_with = "de_opt_text")]
    pub group_by: Option<String>,
    #[serde(deserialize_with = "de_opt_text")]
    pub sort_order: Option<String>,
    #[serde(deserialize_with = "de_opt_bool")]
    pub compact_mode: Option<bool>,
    #[serde(deserialize_with = "de_opt_bool")]
    pub show_connectors: Option<bool>,
    #[serde(deserialize_with = "de_opt_bool")]
    pub show_dates: Option<bool>,
    #[serde(deserialize_with = "de_opt_bool")]
    pub show_icons: Option<bool>,
    #[serde(deserialize_with = "de_opt_bool")]
    pub show_progress: Option<bool>,
    #[serde(deserialize_with = "de_opt_bool")]
    pub interactive: Option<bool>,
    #[serde(deserialize_with = "de_opt_bool")]
    pub animate: Option<bool>,
    #[serde(deserialize_with = "de_opt_text")]
    pub date_format: Option<String>,
}

/// Fully resolved settings. Nothing here is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSettings {
    pub orientation: Orientation,
    pub layout: LayoutMode,
    pub group_by: GroupBy,
    pub sort_order: SortOrder,
    pub compact_mode: bool,
    pub show_connectors: bool,
    pub show_dates: bool,
    pub show_icons: bool,
    pub show_progress: bool,
    pub interactive: bool,
    pub animate: bool,
    pub date_format: DateFormat,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            orientation: DEFAULT_ORIENTATION,
            layout: DEFAULT_LAYOUT,
            group_by: DEFAULT_GROUP_BY,
            sort_order: DEFAULT_SORT_ORDER,
            compact_mode: false,
            show_connectors: true,
            show_dates: true,
            show_icons: true,
            show_progress: false,
            interactive: true,
            animate: true,
            date_format: DEFAULT_DATE_FORMAT,
        }
    }
}

/// Serde helper: keep strings, drop any other JSON type with a warning.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => {
            log::warn!("ignoring non-text option value {}", other);
            None
        }
    })
}

/// Serde helper: booleans, plus the literal strings `"true"` and `"false"`.
/// Any other value is treated as unset.
fn de_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Bool(b) => Some(b),
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
        serde_json::Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
        other => {
            log::warn!("ignoring non-boolean option value {}", other);
            None
        }
    })
}

/// Parse an optional enum field, warning and falling back when the text is unknown.
fn resolve_enum<T: Copy>(
    field: &str,
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(s) => parse(s).unwrap_or_else(|| {
            log::warn!("unknown {} {:?}, using default", field, s);
            default
        }),
    }
}

impl TimelineConfig {
    /// Resolve every option to a concrete value.
    pub fn resolve(&self) -> TimelineSettings {
        let d = TimelineSettings::default();
        TimelineSettings {
            orientation: resolve_enum(
                "orientation",
                self.orientation.as_deref(),
                Orientation::parse,
                d.orientation,
            ),
            layout: resolve_enum("layout", self.layout.as_deref(), LayoutMode::parse, d.layout),
            group_by: resolve_enum("groupBy", self.group_by.as_deref(), GroupBy::parse, d.group_by),
            sort_order: resolve_enum(
                "sortOrder",
                self.sort_order.as_deref(),
                SortOrder::parse,
                d.sort_order,
            ),
            compact_mode: self.compact_mode.unwrap_or(d.compact_mode),
            show_connectors: self.show_connectors.unwrap_or(d.show_connectors),
            show_dates: self.show_dates.unwrap_or(d.show_dates),
            show_icons: self.show_icons.unwrap_or(d.show_icons),
            show_progress: self.show_progress.unwrap_or(d.show_progress),
            interactive: self.interactive.unwrap_or(d.interactive),
            animate: self.animate.unwrap_or(d.animate),
            date_format: resolve_enum(
                "dateFormat",
                self.date_format.as_deref(),
                DateFormat::parse,
                d.date_format,
            ),
        }
    }
}
