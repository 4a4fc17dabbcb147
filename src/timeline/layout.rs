//! Timeline layout engine: assigns marker, content and connector geometry to every event.
//!
//! Coordinates are pixels with the origin at the top-left and y growing downward.
//! The main axis runs along the track (y for vertical, x for horizontal); the cross axis
//! holds the content columns. Layout is a pure function of `(groups, settings, theme)`.

use serde::Serialize;

use super::format::format_event_date;
use super::group::EventGroup;
use super::settings::TimelineSettings;
use super::types::{LayoutMode, Orientation};
use crate::models::TimelineEvent;
use crate::theme::ThemeTokens;

// Base metrics (px) before the compact multiplier.
const MARKER_SIZE: f64 = 16.0;
const VERTICAL_SPACING: f64 = 96.0;
const HORIZONTAL_SPACING: f64 = 200.0;
const CONTENT_WIDTH: f64 = 280.0;
const CONTENT_HEIGHT: f64 = 72.0;
const CONTENT_GAP: f64 = 24.0;
const GROUP_HEADER: f64 = 40.0;
const PADDING: f64 = 24.0;
const COMPACT_SCALE: f64 = 0.6;
const ANIMATION_STAGGER_MS: u64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Which side of the track an event's content box sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSide {
    Left,
    Right,
    Below,
}

/// Text alignment inside the content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAlignment {
    Left,
    Right,
    Center,
}

/// Scale constants in effect for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    pub marker_size: f64,
    /// Main-axis distance between consecutive markers.
    pub event_spacing: f64,
    pub content_width: f64,
    /// Nominal content height; only horizontal extents depend on it.
    pub content_height: f64,
    pub content_gap: f64,
    pub group_header: f64,
    pub padding: f64,
}

impl LayoutMetrics {
    /// Compact mode shrinks every constant by the same factor.
    pub fn for_settings(settings: &TimelineSettings) -> Self {
        let k = if settings.compact_mode { COMPACT_SCALE } else { 1.0 };
        let (spacing, content_width) = match settings.orientation {
            Orientation::Vertical => (VERTICAL_SPACING, CONTENT_WIDTH),
            // Horizontal content boxes share their slot with the gap between them.
            Orientation::Horizontal => (HORIZONTAL_SPACING, HORIZONTAL_SPACING - CONTENT_GAP),
        };
        Self {
            marker_size: MARKER_SIZE * k,
            event_spacing: spacing * k,
            content_width: content_width * k,
            content_height: CONTENT_HEIGHT * k,
            content_gap: CONTENT_GAP * k,
            group_header: GROUP_HEADER * k,
            padding: PADDING * k,
        }
    }
}

/// Geometry for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLayout {
    /// Position in emission order, continuous across groups.
    pub index: usize,
    pub event_id: String,
    pub group_index: usize,
    /// Marker center.
    pub marker: Point,
    pub marker_size: f64,
    pub marker_color: String,
    pub side: ContentSide,
    pub alignment: ContentAlignment,
    /// Top-left corner of the content box.
    pub content_origin: Point,
    pub content_width: f64,
    pub is_alternate_side: bool,
    /// Short branch from the marker edge to the content box.
    pub connector: Option<Segment>,
    pub date_label: Option<String>,
    pub icon: Option<String>,
    pub interactive: bool,
    pub animation_delay_ms: u64,
}

/// Header placement for a labeled group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupHeader {
    pub group_index: usize,
    pub label: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub orientation: Orientation,
    pub metrics: LayoutMetrics,
    pub events: Vec<EventLayout>,
    pub groups: Vec<GroupHeader>,
    /// The continuous track line beneath all markers.
    pub track: Option<Segment>,
    pub track_color: String,
    pub width: f64,
    pub height: f64,
}

/// Layout with the default theme.
pub fn layout_timeline(groups: &[EventGroup], settings: &TimelineSettings) -> TimelineLayout {
    layout_timeline_with_theme(groups, settings, &ThemeTokens::default())
}

/// Fully-configurable entry point.
pub fn layout_timeline_with_theme(
    groups: &[EventGroup],
    settings: &TimelineSettings,
    theme: &ThemeTokens,
) -> TimelineLayout {
    let m = LayoutMetrics::for_settings(settings);
    let layout = match settings.orientation {
        Orientation::Vertical => layout_vertical(groups, settings, theme, m),
        Orientation::Horizontal => layout_horizontal(groups, settings, theme, m),
    };
    log::debug!(
        "laid out {} event(s) in {} group header(s), extent {}x{}",
        layout.events.len(),
        layout.groups.len(),
        layout.width,
        layout.height
    );
    layout
}

/// Content side and text alignment for the `index`-th event on a vertical track.
pub fn vertical_placement(mode: LayoutMode, index: usize) -> (ContentSide, ContentAlignment, bool) {
    let odd = index % 2 == 1;
    match mode {
        LayoutMode::Left => (ContentSide::Left, ContentAlignment::Left, false),
        LayoutMode::Right => (ContentSide::Right, ContentAlignment::Right, false),
        LayoutMode::Alternating if odd => (ContentSide::Right, ContentAlignment::Right, true),
        LayoutMode::Alternating => (ContentSide::Left, ContentAlignment::Left, false),
        // Text hugs the centered track.
        LayoutMode::Center if odd => (ContentSide::Right, ContentAlignment::Left, true),
        LayoutMode::Center => (ContentSide::Left, ContentAlignment::Right, false),
    }
}

/// Fields shared by both orientations.
struct EventCommon {
    event_id: String,
    marker_color: String,
    date_label: Option<String>,
    icon: Option<String>,
    interactive: bool,
    animation_delay_ms: u64,
}

fn event_common(
    event: &TimelineEvent,
    index: usize,
    settings: &TimelineSettings,
    theme: &ThemeTokens,
) -> EventCommon {
    EventCommon {
        event_id: event.id.clone(),
        marker_color: theme.marker_for(event.status).to_string(),
        date_label: settings
            .show_dates
            .then(|| format_event_date(event, settings.date_format)),
        icon: if settings.show_icons {
            event.icon.clone()
        } else {
            None
        },
        interactive: settings.interactive,
        animation_delay_ms: if settings.animate {
            index as u64 * ANIMATION_STAGGER_MS
        } else {
            0
        },
    }
}

/// Track segment from the first marker's leading edge to the last marker's trailing edge.
/// Without events it degenerates to a zero-length segment at `origin`.
fn track_segment(markers: &[Point], half: f64, origin: Point, vertical: bool) -> Segment {
    match (markers.first(), markers.last()) {
        (Some(first), Some(last)) if vertical => Segment::new(
            Point::new(first.x, first.y - half),
            Point::new(last.x, last.y + half),
        ),
        (Some(first), Some(last)) => Segment::new(
            Point::new(first.x - half, first.y),
            Point::new(last.x + half, last.y),
        ),
        _ => Segment::new(origin, origin),
    }
}

fn layout_vertical(
    groups: &[EventGroup],
    settings: &TimelineSettings,
    theme: &ThemeTokens,
    m: LayoutMetrics,
) -> TimelineLayout {
    let half = m.marker_size / 2.0;
    let column = m.content_width + m.content_gap;

    let (track_x, width) = match settings.layout {
        LayoutMode::Left => {
            let x = m.padding + column + half;
            (x, x + half + m.padding)
        }
        LayoutMode::Right => {
            let x = m.padding + half;
            (x, x + half + column + m.padding)
        }
        LayoutMode::Alternating | LayoutMode::Center => {
            let x = m.padding + column + half;
            (x, 2.0 * (m.padding + column) + m.marker_size)
        }
    };

    let mut events = Vec::new();
    let mut headers = Vec::new();
    let mut markers = Vec::new();
    let mut cursor = m.padding;
    let mut index = 0usize;

    for (group_index, group) in groups.iter().enumerate() {
        if !group.label.is_empty() {
            headers.push(GroupHeader {
                group_index,
                label: group.label.clone(),
                position: Point::new(track_x, cursor),
            });
            cursor += m.group_header;
        }
        for event in &group.events {
            let marker = Point::new(track_x, cursor + half);
            let (side, alignment, is_alternate_side) = vertical_placement(settings.layout, index);
            let (edge_x, content_x, branch_end_x) = match side {
                ContentSide::Right => (
                    track_x + half,
                    track_x + half + m.content_gap,
                    track_x + half + m.content_gap,
                ),
                _ => (
                    track_x - half,
                    track_x - half - m.content_gap - m.content_width,
                    track_x - half - m.content_gap,
                ),
            };
            let c = event_common(event, index, settings, theme);
            events.push(EventLayout {
                index,
                event_id: c.event_id,
                group_index,
                marker,
                marker_size: m.marker_size,
                marker_color: c.marker_color,
                side,
                alignment,
                content_origin: Point::new(content_x, marker.y - half),
                content_width: m.content_width,
                is_alternate_side,
                connector: settings.show_connectors.then(|| {
                    Segment::new(
                        Point::new(edge_x, marker.y),
                        Point::new(branch_end_x, marker.y),
                    )
                }),
                date_label: c.date_label,
                icon: c.icon,
                interactive: c.interactive,
                animation_delay_ms: c.animation_delay_ms,
            });
            markers.push(marker);
            cursor += m.event_spacing;
            index += 1;
        }
    }

    let track = settings
        .show_connectors
        .then(|| track_segment(&markers, half, Point::new(track_x, m.padding), true));

    TimelineLayout {
        orientation: Orientation::Vertical,
        metrics: m,
        events,
        groups: headers,
        track,
        track_color: theme.connector.clone(),
        width,
        height: cursor + m.padding,
    }
}

fn layout_horizontal(
    groups: &[EventGroup],
    settings: &TimelineSettings,
    theme: &ThemeTokens,
    m: LayoutMetrics,
) -> TimelineLayout {
    let half = m.marker_size / 2.0;
    let has_headers = groups.iter().any(|g| !g.label.is_empty());
    let track_y = m.padding + if has_headers { m.group_header } else { 0.0 } + half;

    let mut events = Vec::new();
    let mut headers = Vec::new();
    let mut markers = Vec::new();
    let mut cursor = m.padding;
    let mut index = 0usize;

    for (group_index, group) in groups.iter().enumerate() {
        if !group.label.is_empty() {
            headers.push(GroupHeader {
                group_index,
                label: group.label.clone(),
                position: Point::new(cursor, m.padding),
            });
            cursor += m.group_header;
        }
        for event in &group.events {
            let marker = Point::new(cursor + m.event_spacing / 2.0, track_y);
            let content_top = track_y + half + m.content_gap;
            let c = event_common(event, index, settings, theme);
            events.push(EventLayout {
                index,
                event_id: c.event_id,
                group_index,
                marker,
                marker_size: m.marker_size,
                marker_color: c.marker_color,
                side: ContentSide::Below,
                alignment: ContentAlignment::Center,
                content_origin: Point::new(marker.x - m.content_width / 2.0, content_top),
                content_width: m.content_width,
                is_alternate_side: false,
                connector: settings.show_connectors.then(|| {
                    Segment::new(
                        Point::new(marker.x, track_y + half),
                        Point::new(marker.x, content_top),
                    )
                }),
                date_label: c.date_label,
                icon: c.icon,
                interactive: c.interactive,
                animation_delay_ms: c.animation_delay_ms,
            });
            markers.push(marker);
            cursor += m.event_spacing;
            index += 1;
        }
    }

    let track = settings
        .show_connectors
        .then(|| track_segment(&markers, half, Point::new(m.padding, track_y), false));

    TimelineLayout {
        orientation: Orientation::Horizontal,
        metrics: m,
        events,
        groups: headers,
        track,
        track_color: theme.connector.clone(),
        width: cursor + m.padding,
        height: track_y + half + m.content_gap + m.content_height + m.padding,
    }
}
