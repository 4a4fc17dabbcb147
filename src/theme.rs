//! Theme color tokens.
//!
//! Tokens are opaque strings (usually CSS hex colors) that layout copies onto its
//! output. Only the SVG preview renderer ever interprets them.

use serde::{Deserialize, Serialize};

use crate::models::EventStatus;

/// Microsoft Office (2013+) chart series palette, used for chart series by default.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [&str; 10] = [
    "#4472C4", "#ED7D31", "#A5A5A5", "#FFC000", "#5B9BD5", "#70AD47", "#264478", "#9E480E",
    "#636363", "#997300",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeTokens {
    pub marker_completed: String,
    pub marker_current: String,
    pub marker_upcoming: String,
    pub marker_cancelled: String,
    /// Marker color for events without a status.
    pub marker_default: String,
    pub connector: String,
    pub text: String,
    pub muted_text: String,
    pub background: String,
    pub series: Vec<String>,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            marker_completed: "#70AD47".into(),
            marker_current: "#4472C4".into(),
            marker_upcoming: "#A5A5A5".into(),
            marker_cancelled: "#C00000".into(),
            marker_default: "#5B9BD5".into(),
            connector: "#D0D7DE".into(),
            text: "#1F2328".into(),
            muted_text: "#636C76".into(),
            background: "#FFFFFF".into(),
            series: OFFICE10.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ThemeTokens {
    /// Marker token for an event status.
    pub fn marker_for(&self, status: Option<EventStatus>) -> &str {
        match status {
            Some(EventStatus::Completed) => &self.marker_completed,
            Some(EventStatus::Current) => &self.marker_current,
            Some(EventStatus::Upcoming) => &self.marker_upcoming,
            Some(EventStatus::Cancelled) => &self.marker_cancelled,
            None => &self.marker_default,
        }
    }

    /// Series token, cycling through the palette.
    pub fn series_color(&self, idx: usize) -> &str {
        if self.series.is_empty() {
            return OFFICE10[idx % OFFICE10.len()];
        }
        &self.series[idx % self.series.len()]
    }
}
