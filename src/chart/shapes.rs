//! Shapes a chart render registers for hover lookup.

use serde::{Deserialize, Serialize};

use super::geometry::{distance, rect_contains, sector_contains};

/// Pointer proximity (px) within which a line/scatter point counts as hovered.
pub const POINT_HIT_RADIUS: f64 = 20.0;

/// One drawn element, tagged by kind when it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum PlottedShape {
    /// Line or scatter point.
    Point {
        x: f64,
        y: f64,
        value: f64,
        label: String,
    },
    /// Bar.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        value: f64,
        label: String,
    },
    /// Doughnut or pie slice. Angles in canvas radians, see [`super::geometry`].
    Sector {
        center_x: f64,
        center_y: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        value: f64,
        label: String,
    },
    /// Bubble.
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        value: f64,
        label: String,
    },
}

impl PlottedShape {
    pub fn label(&self) -> &str {
        match self {
            PlottedShape::Point { label, .. }
            | PlottedShape::Rect { label, .. }
            | PlottedShape::Sector { label, .. }
            | PlottedShape::Circle { label, .. } => label,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            PlottedShape::Point { value, .. }
            | PlottedShape::Rect { value, .. }
            | PlottedShape::Sector { value, .. }
            | PlottedShape::Circle { value, .. } => *value,
        }
    }

    pub fn is_sector(&self) -> bool {
        matches!(self, PlottedShape::Sector { .. })
    }

    /// Ranking distance when `(px, py)` hits this shape, `None` otherwise.
    ///
    /// Rects and sectors are binary (0 when hit); circles and points rank by
    /// distance to their center.
    pub fn hit_distance(&self, px: f64, py: f64) -> Option<f64> {
        match self {
            PlottedShape::Point { x, y, .. } => {
                let d = distance(*x, *y, px, py);
                (d <= POINT_HIT_RADIUS).then_some(d)
            }
            PlottedShape::Rect {
                x,
                y,
                width,
                height,
                ..
            } => rect_contains(*x, *y, *width, *height, px, py).then_some(0.0),
            PlottedShape::Sector {
                center_x,
                center_y,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                ..
            } => sector_contains(
                *center_x,
                *center_y,
                *inner_radius,
                *outer_radius,
                *start_angle,
                *end_angle,
                px,
                py,
            )
            .then_some(0.0),
            PlottedShape::Circle { x, y, radius, .. } => {
                let d = distance(*x, *y, px, py);
                (d <= *radius).then_some(d)
            }
        }
    }
}

/// What a tooltip needs from a hovered shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverMatch {
    pub label: String,
    pub value: f64,
}

impl From<&PlottedShape> for HoverMatch {
    fn from(s: &PlottedShape) -> Self {
        Self {
            label: s.label().to_string(),
            value: s.value(),
        }
    }
}
