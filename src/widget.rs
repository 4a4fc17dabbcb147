//! JSON widget envelope: `{"type": ..., "data": ..., "style": ...}`.
//!
//! Timeline data is either an array of events or an object with `events` and an
//! optional `config`. Chart data is a [`ChartData`] object. The optional `style`
//! block may override theme tokens.
//!
//! ```
//! use jwr_rs::widget::{Widget, parse_widget};
//!
//! let w = parse_widget(r#"{
//!     "type": "timeline",
//!     "data": {
//!         "events": [{"id": "a", "date": "2024-01-01", "title": "Kickoff", "status": "completed"}],
//!         "config": {"showProgress": true}
//!     }
//! }"#)?;
//! let Widget::Timeline(t) = w else { unreachable!() };
//! let view = t.build();
//! assert_eq!(view.progress.unwrap().percent, 100.0);
//! # Ok::<(), jwr_rs::WidgetError>(())
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::chart::ChartData;
use crate::error::{Result, WidgetError};
use crate::models::TimelineEvent;
use crate::theme::ThemeTokens;
use crate::timeline::{TimelineConfig, TimelineView, build_timeline_with_theme};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    widget_type: String,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    style: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct TimelineData {
    #[serde(default)]
    events: Vec<Value>,
    #[serde(default)]
    config: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineWidget {
    pub events: Vec<TimelineEvent>,
    pub config: TimelineConfig,
    pub theme: ThemeTokens,
}

impl TimelineWidget {
    pub fn build(&self) -> TimelineView {
        build_timeline_with_theme(&self.events, &self.config.resolve(), &self.theme)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartWidget {
    pub data: ChartData,
    pub theme: ThemeTokens,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Timeline(TimelineWidget),
    Chart(ChartWidget),
}

/// Parse a widget from JSON text.
pub fn parse_widget(json: &str) -> Result<Widget> {
    let value: Value = serde_json::from_str(json)?;
    widget_from_value(value)
}

/// Parse a widget from an already-decoded JSON value.
pub fn widget_from_value(value: Value) -> Result<Widget> {
    let env: Envelope = serde_json::from_value(value)?;
    let theme = theme_from_style(env.style);
    match env.widget_type.trim().to_ascii_lowercase().as_str() {
        "timeline" => Ok(Widget::Timeline(timeline_from_data(env.data, theme))),
        "chart" => {
            let data: ChartData = serde_json::from_value(env.data).map_err(|source| {
                WidgetError::InvalidData {
                    widget: "chart",
                    source,
                }
            })?;
            Ok(Widget::Chart(ChartWidget { data, theme }))
        }
        _ => Err(WidgetError::UnsupportedType(env.widget_type)),
    }
}

/// Events that fail to decode are skipped rather than failing the widget.
fn timeline_from_data(data: Value, theme: ThemeTokens) -> TimelineWidget {
    let raw: TimelineData = match data {
        Value::Array(events) => TimelineData {
            events,
            config: Value::Null,
        },
        Value::Object(_) => serde_json::from_value(data).unwrap_or_else(|e| {
            log::warn!("timeline data not understood ({}), rendering empty", e);
            TimelineData::default()
        }),
        _ => TimelineData::default(),
    };

    let events = raw
        .events
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value::<TimelineEvent>(v) {
            Ok(ev) => Some(ev),
            Err(e) => {
                log::warn!("skipping timeline event #{}: {}", i, e);
                None
            }
        })
        .collect();

    let config = match raw.config {
        Value::Null => TimelineConfig::default(),
        v => serde_json::from_value(v).unwrap_or_else(|e| {
            log::warn!("timeline config not understood ({}), using defaults", e);
            TimelineConfig::default()
        }),
    };

    TimelineWidget {
        events,
        config,
        theme,
    }
}

fn theme_from_style(style: Option<Value>) -> ThemeTokens {
    match style {
        None | Some(Value::Null) => ThemeTokens::default(),
        Some(v) => serde_json::from_value(v).unwrap_or_else(|e| {
            log::warn!("style block not understood ({}), using default theme", e);
            ThemeTokens::default()
        }),
    }
}
