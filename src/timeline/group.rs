//! Chronological sorting and bucketing of timeline events.
//!
//! Sorting is stable: events with equal instants keep their input order. Events whose
//! date cannot be parsed always sort after every dated event, for both sort orders,
//! and keep their input order among themselves.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::settings::TimelineSettings;
use super::types::{GroupBy, SortOrder, UNCATEGORIZED_LABEL, UNDATED_LABEL};
use crate::models::TimelineEvent;

/// An ordered run of events sharing a label. The label is empty when ungrouped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventGroup {
    pub label: String,
    pub events: Vec<TimelineEvent>,
}

/// Total order on optional instants: dated before undated, dated by `order`.
fn compare_instants(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match order {
            SortOrder::Asc => x.cmp(&y),
            SortOrder::Desc => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort events by date. See the module docs for the tie and undated rules.
pub fn sort_events(events: &[TimelineEvent], order: SortOrder) -> Vec<TimelineEvent> {
    // Parse once; `sort_by` is stable so equal keys keep input order.
    let mut keyed: Vec<(Option<DateTime<Utc>>, &TimelineEvent)> =
        events.iter().map(|e| (e.instant(), e)).collect();

    let undated = keyed.iter().filter(|(k, _)| k.is_none()).count();
    if undated > 0 {
        log::warn!("{} event(s) with unparseable dates sorted last", undated);
    }

    keyed.sort_by(|(a, _), (b, _)| compare_instants(*a, *b, order));
    keyed.into_iter().map(|(_, e)| e.clone()).collect()
}

/// Bucket label for one event under `group_by`.
pub fn group_label(event: &TimelineEvent, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::None => String::new(),
        GroupBy::Year => event
            .instant()
            .map(|d| d.format("%Y").to_string())
            .unwrap_or_else(|| UNDATED_LABEL.to_string()),
        GroupBy::Month => event
            .instant()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| UNDATED_LABEL.to_string()),
        GroupBy::Category => event
            .category_label()
            .unwrap_or(UNCATEGORIZED_LABEL)
            .to_string(),
    }
}

/// Partition already-sorted events. Groups appear in first-occurrence order.
///
/// `GroupBy::None` always yields exactly one group with an empty label, even for
/// empty input. The other modes yield no groups for empty input.
pub fn group_events(sorted: Vec<TimelineEvent>, group_by: GroupBy) -> Vec<EventGroup> {
    if group_by == GroupBy::None {
        return vec![EventGroup {
            label: String::new(),
            events: sorted,
        }];
    }

    let mut groups: Vec<EventGroup> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();
    for event in sorted {
        let label = group_label(&event, group_by);
        let idx = match slot.get(&label) {
            Some(&i) => i,
            None => {
                groups.push(EventGroup {
                    label: label.clone(),
                    events: Vec::new(),
                });
                slot.insert(label, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[idx].events.push(event);
    }
    log::debug!("grouped events into {} {:?} group(s)", groups.len(), group_by);
    groups
}

/// Sort then group according to resolved settings.
pub fn sort_and_group(events: &[TimelineEvent], settings: &TimelineSettings) -> Vec<EventGroup> {
    group_events(sort_events(events, settings.sort_order), settings.group_by)
}

/// Flatten groups back into emission order.
pub fn flatten(groups: &[EventGroup]) -> Vec<&TimelineEvent> {
    groups.iter().flat_map(|g| g.events.iter()).collect()
}
