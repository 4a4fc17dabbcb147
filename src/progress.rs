use crate::models::{EventStatus, TimelineEvent};
use serde::{Deserialize, Serialize};

/// Completion summary over a set of timeline events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// `completed / total * 100`, or 0 when there are no events.
    pub percent: f64,
    pub current: usize,
    pub upcoming: usize,
    pub cancelled: usize,
    /// Events without a status.
    pub unset: usize,
}

/// Count statuses and compute the completion percentage.
pub fn summarize_progress(events: &[TimelineEvent]) -> ProgressSummary {
    let mut out = ProgressSummary {
        completed: 0,
        total: events.len(),
        percent: 0.0,
        current: 0,
        upcoming: 0,
        cancelled: 0,
        unset: 0,
    };
    for e in events {
        match e.status {
            Some(EventStatus::Completed) => out.completed += 1,
            Some(EventStatus::Current) => out.current += 1,
            Some(EventStatus::Upcoming) => out.upcoming += 1,
            Some(EventStatus::Cancelled) => out.cancelled += 1,
            None => out.unset += 1,
        }
    }
    if out.total > 0 {
        out.percent = out.completed as f64 / out.total as f64 * 100.0;
    }
    out
}
