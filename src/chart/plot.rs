//! Turn chart data into pixel shapes, the same shapes the renderer draws and the
//! hover index tests against.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use super::shapes::PlottedShape;

/// Inset (px) between the canvas edge and the plot area.
pub const PLOT_PADDING: f64 = 40.0;
/// Largest bubble radius (px); other bubbles scale linearly below it.
pub const MAX_BUBBLE_RADIUS: f64 = 30.0;
/// Fraction of each band a bar fills.
const BAR_FILL: f64 = 0.7;
/// Doughnut hole as a fraction of the outer radius.
const DOUGHNUT_CUTOUT: f64 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Bubble,
    Doughnut,
    Pie,
}

impl ChartKind {
    pub fn is_radial(&self) -> bool {
        matches!(self, ChartKind::Doughnut | ChartKind::Pie)
    }
}

/// Free-standing point for scatter and bubble charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    /// Bubble size in data units.
    #[serde(default)]
    pub r: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Chart widget data. Category charts use `labels` + `values`; scatter and bubble use `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(alias = "chartType", alias = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default)]
    pub points: Vec<ChartPoint>,
}

/// Plot area inside the padding.
#[derive(Debug, Clone, Copy)]
struct Area {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Area {
    fn new(width: f64, height: f64) -> Self {
        let pad = PLOT_PADDING.min(width / 4.0).min(height / 4.0).max(0.0);
        Self {
            left: pad,
            top: pad,
            width: (width - 2.0 * pad).max(0.0),
            height: (height - 2.0 * pad).max(0.0),
        }
    }
}

/// `(lo, hi)` of finite values, widened so it is never empty.
fn span(values: impl Iterator<Item = f64>, include_zero: bool) -> (f64, f64) {
    let (mut lo, mut hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    (lo, hi)
}

fn label_at(labels: &[String], i: usize) -> String {
    labels
        .get(i)
        .cloned()
        .unwrap_or_else(|| format!("#{}", i + 1))
}

/// Compute every shape for `data` on a `width` x `height` canvas.
pub fn plot_shapes(data: &ChartData, width: f64, height: f64) -> Vec<PlottedShape> {
    let area = Area::new(width, height);
    let shapes = match data.kind {
        ChartKind::Bar => bar_shapes(data, area),
        ChartKind::Line => line_shapes(data, area),
        ChartKind::Scatter | ChartKind::Bubble => point_shapes(data, area),
        ChartKind::Doughnut => sector_shapes(data, area, DOUGHNUT_CUTOUT),
        ChartKind::Pie => sector_shapes(data, area, 0.0),
    };
    log::debug!("plotted {} {:?} shape(s)", shapes.len(), data.kind);
    shapes
}

fn bar_shapes(data: &ChartData, area: Area) -> Vec<PlottedShape> {
    let n = data.values.len();
    if n == 0 {
        return Vec::new();
    }
    let (lo, hi) = span(data.values.iter().copied(), true);
    let y_of = |v: f64| area.top + (hi - v) / (hi - lo) * area.height;
    let baseline = y_of(0.0);
    let band = area.width / n as f64;
    let bar_w = band * BAR_FILL;

    data.values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| {
            let top = y_of(v);
            PlottedShape::Rect {
                x: area.left + i as f64 * band + (band - bar_w) / 2.0,
                y: top.min(baseline),
                width: bar_w,
                height: (top - baseline).abs(),
                value: v,
                label: label_at(&data.labels, i),
            }
        })
        .collect()
}

fn line_shapes(data: &ChartData, area: Area) -> Vec<PlottedShape> {
    let n = data.values.len();
    if n == 0 {
        return Vec::new();
    }
    let (lo, hi) = span(data.values.iter().copied(), true);
    let band = area.width / n as f64;
    data.values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| PlottedShape::Point {
            x: area.left + (i as f64 + 0.5) * band,
            y: area.top + (hi - v) / (hi - lo) * area.height,
            value: v,
            label: label_at(&data.labels, i),
        })
        .collect()
}

fn point_shapes(data: &ChartData, area: Area) -> Vec<PlottedShape> {
    let pts: Vec<(usize, &ChartPoint)> = data
        .points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.x.is_finite() && p.y.is_finite())
        .collect();
    if pts.is_empty() {
        return Vec::new();
    }
    let (x_lo, x_hi) = span(pts.iter().map(|(_, p)| p.x), false);
    let (y_lo, y_hi) = span(pts.iter().map(|(_, p)| p.y), false);
    let r_max = pts
        .iter()
        .filter_map(|(_, p)| p.r)
        .filter(|r| r.is_finite() && *r > 0.0)
        .fold(0.0_f64, f64::max);

    pts.into_iter()
        .map(|(i, p)| {
            let x = area.left + (p.x - x_lo) / (x_hi - x_lo) * area.width;
            let y = area.top + (y_hi - p.y) / (y_hi - y_lo) * area.height;
            let label = p.label.clone().unwrap_or_else(|| label_at(&data.labels, i));
            match (data.kind, p.r) {
                (ChartKind::Bubble, Some(r)) if r_max > 0.0 && r.is_finite() && r > 0.0 => {
                    PlottedShape::Circle {
                        x,
                        y,
                        radius: r / r_max * MAX_BUBBLE_RADIUS,
                        value: r,
                        label,
                    }
                }
                _ => PlottedShape::Point {
                    x,
                    y,
                    value: p.y,
                    label,
                },
            }
        })
        .collect()
}

/// Slices run clockwise from 12 o'clock. Non-positive values get no slice.
fn sector_shapes(data: &ChartData, area: Area, cutout: f64) -> Vec<PlottedShape> {
    let total: f64 = data
        .values
        .iter()
        .filter(|v| v.is_finite() && **v > 0.0)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let center_x = area.left + area.width / 2.0;
    let center_y = area.top + area.height / 2.0;
    let outer = area.width.min(area.height) / 2.0;
    let inner = outer * cutout;

    let last_positive = data
        .values
        .iter()
        .rposition(|v| v.is_finite() && *v > 0.0);
    let mut start = -FRAC_PI_2;
    let mut out = Vec::new();
    for (i, &v) in data.values.iter().enumerate() {
        if !(v.is_finite() && v > 0.0) {
            continue;
        }
        // Close the ring exactly so no pointer angle falls between the last and first slice.
        let end = if Some(i) == last_positive {
            -FRAC_PI_2 + TAU
        } else {
            start + v / total * TAU
        };
        out.push(PlottedShape::Sector {
            center_x,
            center_y,
            inner_radius: inner,
            outer_radius: outer,
            start_angle: start,
            end_angle: end,
            value: v,
            label: label_at(&data.labels, i),
        });
        start = end;
    }
    out
}
