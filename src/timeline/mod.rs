//! Timeline widgets: sort, group, lay out and summarize events.
//!
//! - Stable chronological sort, undated events last
//! - Grouping by year, month or category in first-appearance order
//! - Vertical (`left`, `right`, `alternating`, `center`) and horizontal layouts
//! - Compact mode, connectors, date labels, icons, progress summary

pub mod format;
pub mod group;
pub mod layout;
pub mod settings;
pub mod types;

pub use group::{EventGroup, group_events, sort_and_group, sort_events};
pub use layout::{
    ContentAlignment, ContentSide, EventLayout, GroupHeader, LayoutMetrics, Point, Segment,
    TimelineLayout, layout_timeline, layout_timeline_with_theme,
};
pub use settings::{TimelineConfig, TimelineSettings};
pub use types::{DateFormat, GroupBy, LayoutMode, Orientation, SortOrder};

use serde::Serialize;

use crate::models::TimelineEvent;
use crate::progress::{ProgressSummary, summarize_progress};
use crate::theme::ThemeTokens;

/// Everything a renderer needs for one timeline pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub settings: TimelineSettings,
    pub groups: Vec<EventGroup>,
    pub layout: TimelineLayout,
    /// Present only when `showProgress` is on.
    pub progress: Option<ProgressSummary>,
}

/// Convenience: resolve `config` and build with the default theme.
pub fn build_timeline(events: &[TimelineEvent], config: &TimelineConfig) -> TimelineView {
    build_timeline_with_theme(events, &config.resolve(), &ThemeTokens::default())
}

/// Sort, group, lay out and summarize in one pass. Nothing is cached between calls.
pub fn build_timeline_with_theme(
    events: &[TimelineEvent],
    settings: &TimelineSettings,
    theme: &ThemeTokens,
) -> TimelineView {
    let groups = sort_and_group(events, settings);
    let layout = layout_timeline_with_theme(&groups, settings, theme);
    let progress = settings.show_progress.then(|| summarize_progress(events));
    TimelineView {
        settings: *settings,
        groups,
        layout,
        progress,
    }
}
