//! Angle and distance helpers for pointer hit-testing.
//!
//! Angles follow the canvas convention: radians, 0 at 3 o'clock, increasing clockwise
//! on screen (y grows downward). Doughnut slices start drawing at `-PI / 2`, which is
//! 12 o'clock.

use std::f64::consts::TAU;

/// Euclidean distance between two points.
#[inline]
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (bx - ax).hypot(by - ay)
}

/// Map any finite angle into `[0, 2π)`.
pub fn normalize_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    // rem_euclid may round tiny negative inputs up to exactly TAU.
    if r >= TAU { 0.0 } else { r }
}

/// Canvas angle of `(x, y)` seen from the center `(cx, cy)`.
#[inline]
pub fn pointer_angle(cx: f64, cy: f64, x: f64, y: f64) -> f64 {
    (y - cy).atan2(x - cx)
}

/// Sweeps this close to a full turn are treated as a full ring.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Whether `angle` lies in the half-open sweep `[start, end)`.
///
/// `start`, `end` and `angle` are all normalized into `[0, 2π)` before comparing, and
/// the offset of `angle` from `start` is measured clockwise. A slice whose start is
/// numerically greater than its end (after normalization, or as given) crosses the
/// 0 / 2π seam and is handled by the same comparison. Because the boundary test
/// repeats the exact arithmetic used to compute the sweep, a pointer exactly on a
/// shared edge belongs to the slice that starts there and never to both.
///
/// A sweep of (nearly) 2π or more is a full ring; an empty sweep contains nothing.
pub fn angle_in_sweep(angle: f64, start: f64, end: f64) -> bool {
    let raw = end - start;
    if !raw.is_finite() || raw == 0.0 {
        return false;
    }
    if raw >= TAU - FULL_TURN_EPSILON {
        return true;
    }
    let s = normalize_angle(start);
    let mut sweep = normalize_angle(end) - s;
    if sweep < 0.0 {
        sweep += TAU;
    }
    let mut offset = normalize_angle(angle) - s;
    if offset < 0.0 {
        offset += TAU;
    }
    offset < sweep
}

/// Inclusive containment. Negative sizes are measured from the far edge.
pub fn rect_contains(rx: f64, ry: f64, width: f64, height: f64, x: f64, y: f64) -> bool {
    let (x0, x1) = (rx.min(rx + width), rx.max(rx + width));
    let (y0, y1) = (ry.min(ry + height), ry.max(ry + height));
    x >= x0 && x <= x1 && y >= y0 && y <= y1
}

/// Ring sector test: radius inclusive on both bounds, angle half-open.
#[allow(clippy::too_many_arguments)]
pub fn sector_contains(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    x: f64,
    y: f64,
) -> bool {
    let d = distance(cx, cy, x, y);
    if d < inner_radius || d > outer_radius {
        return false;
    }
    // The center itself has no angle; it only counts for a pie (inner radius 0).
    if d == 0.0 {
        return inner_radius == 0.0 && end_angle != start_angle;
    }
    angle_in_sweep(pointer_angle(cx, cy, x, y), start_angle, end_angle)
}
