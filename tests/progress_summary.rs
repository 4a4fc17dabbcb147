use jwr_rs::models::{EventStatus, TimelineEvent};
use jwr_rs::progress::summarize_progress;
use jwr_rs::timeline::{TimelineConfig, build_timeline};

fn ev(id: &str, status: Option<EventStatus>) -> TimelineEvent {
    let mut e = TimelineEvent::new(id, "2024-01-01", id);
    e.status = status;
    e
}

#[test]
fn empty_input_is_zero_not_nan() {
    let p = summarize_progress(&[]);
    assert_eq!(p.total, 0);
    assert_eq!(p.completed, 0);
    assert_eq!(p.percent, 0.0);
    assert!(!p.percent.is_nan());
}

#[test]
fn counts_every_status() {
    let events = vec![
        ev("a", Some(EventStatus::Completed)),
        ev("b", Some(EventStatus::Completed)),
        ev("c", Some(EventStatus::Current)),
        ev("d", Some(EventStatus::Upcoming)),
        ev("e", Some(EventStatus::Cancelled)),
        ev("f", None),
    ];
    let p = summarize_progress(&events);
    assert_eq!(p.total, 6);
    assert_eq!(p.completed, 2);
    assert_eq!(p.current, 1);
    assert_eq!(p.upcoming, 1);
    assert_eq!(p.cancelled, 1);
    assert_eq!(p.unset, 1);
    assert!((p.percent - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn scenario_half_complete() {
    let events: Vec<TimelineEvent> = serde_json::from_str(
        r#"[{"date":"2024-03-01","status":"completed"},{"date":"2024-01-01","status":"upcoming"}]"#,
    )
    .unwrap();
    let p = summarize_progress(&events);
    assert_eq!((p.completed, p.total), (1, 2));
    assert_eq!(p.percent, 50.0);
}

#[test]
fn build_only_attaches_progress_when_enabled() {
    let events = vec![ev("a", Some(EventStatus::Completed))];
    assert!(build_timeline(&events, &TimelineConfig::default()).progress.is_none());
    let cfg = TimelineConfig {
        show_progress: Some(true),
        ..Default::default()
    };
    let view = build_timeline(&events, &cfg);
    assert_eq!(view.progress.unwrap().percent, 100.0);
}
