//! jwr_rs
//!
//! Geometry core for declarative JSON widgets: timelines and charts. Pairs with the
//! `jwr` CLI.
//!
//! ### Features
//! - Stable chronological sorting and grouping of timeline events (year, month, category)
//! - Vertical and horizontal timeline layout with alternating/center placement and compact mode
//! - Progress summary over event statuses
//! - Chart shape building and pointer hover hit-testing (bars, points, bubbles, doughnut slices)
//! - SVG previews of timelines and charts
//!
//! ### Example
//! ```
//! use jwr_rs::models::{EventStatus, TimelineEvent};
//! use jwr_rs::timeline::{TimelineConfig, build_timeline};
//!
//! let events = vec![
//!     TimelineEvent::new("b", "2024-03-01", "Beta").with_status(EventStatus::Completed),
//!     TimelineEvent::new("a", "2024-01-01", "Alpha").with_status(EventStatus::Upcoming),
//! ];
//! let config = TimelineConfig {
//!     show_progress: Some(true),
//!     ..Default::default()
//! };
//! let view = build_timeline(&events, &config);
//! assert_eq!(view.layout.events[0].event_id, "a");
//! assert_eq!(view.progress.unwrap().percent, 50.0);
//! ```

pub mod chart;
pub mod error;
pub mod models;
pub mod progress;
pub mod render;
pub mod theme;
pub mod timeline;
pub mod widget;

pub use chart::{ChartCanvas, ChartPointIndex, HoverOutcome, PlottedShape};
pub use error::WidgetError;
pub use models::{EventStatus, TimelineEvent};
pub use progress::{ProgressSummary, summarize_progress};
pub use theme::ThemeTokens;
pub use timeline::{TimelineConfig, TimelineSettings, TimelineView, build_timeline};
pub use widget::{Widget, parse_widget};
