//! Chart shapes and pointer hover lookup.
//!
//! A render computes [`PlottedShape`]s for the chart data and stores them in the
//! canvas' [`ChartPointIndex`]. Pointer moves then query that index:
//! - doughnut/pie: polar containment, wraparound-safe angle test
//! - bars: inclusive rectangle containment
//! - bubbles: nearest containing circle
//! - line/scatter: nearest point within 20 px

pub mod canvas;
pub mod geometry;
pub mod index;
pub mod plot;
pub mod shapes;

pub use canvas::ChartCanvas;
pub use index::{ChartPointIndex, HitMode, HoverOutcome};
pub use plot::{ChartData, ChartKind, ChartPoint, plot_shapes};
pub use shapes::{HoverMatch, POINT_HIT_RADIUS, PlottedShape};
