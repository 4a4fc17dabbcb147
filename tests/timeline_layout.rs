use jwr_rs::models::{EventStatus, TimelineEvent};
use jwr_rs::theme::ThemeTokens;
use jwr_rs::timeline::{
    ContentAlignment, ContentSide, EventGroup, GroupBy, LayoutMode, Orientation, TimelineSettings,
    layout_timeline, layout_timeline_with_theme, sort_and_group,
};

fn events(n: usize) -> Vec<TimelineEvent> {
    (0..n)
        .map(|i| TimelineEvent::new(format!("e{i}"), format!("2024-01-{:02}", i + 1), "Step"))
        .collect()
}

fn settings(orientation: Orientation, layout: LayoutMode) -> TimelineSettings {
    TimelineSettings {
        orientation,
        layout,
        ..TimelineSettings::default()
    }
}

fn grouped(n: usize, s: &TimelineSettings) -> Vec<EventGroup> {
    sort_and_group(&events(n), s)
}

#[test]
fn vertical_left_and_right_keep_one_side() {
    for (mode, side) in [
        (LayoutMode::Left, ContentSide::Left),
        (LayoutMode::Right, ContentSide::Right),
    ] {
        let s = settings(Orientation::Vertical, mode);
        let out = layout_timeline(&grouped(5, &s), &s);
        assert_eq!(out.events.len(), 5);
        for e in &out.events {
            assert_eq!(e.side, side);
            assert!(!e.is_alternate_side);
        }
        // All markers share one vertical line.
        let x0 = out.events[0].marker.x;
        assert!(out.events.iter().all(|e| e.marker.x == x0));
    }
}

#[test]
fn alternating_switches_sides_by_index() {
    let s = settings(Orientation::Vertical, LayoutMode::Alternating);
    let out = layout_timeline(&grouped(4, &s), &s);
    let sides: Vec<ContentSide> = out.events.iter().map(|e| e.side).collect();
    assert_eq!(
        sides,
        [ContentSide::Left, ContentSide::Right, ContentSide::Left, ContentSide::Right]
    );
    let alt: Vec<bool> = out.events.iter().map(|e| e.is_alternate_side).collect();
    assert_eq!(alt, [false, true, false, true]);
    assert_eq!(out.events[0].alignment, ContentAlignment::Left);
    assert_eq!(out.events[1].alignment, ContentAlignment::Right);
}

#[test]
fn center_mirrors_text_alignment_and_centers_track() {
    let s = settings(Orientation::Vertical, LayoutMode::Center);
    let out = layout_timeline(&grouped(2, &s), &s);
    assert_eq!(out.events[0].side, ContentSide::Left);
    assert_eq!(out.events[0].alignment, ContentAlignment::Right);
    assert_eq!(out.events[1].side, ContentSide::Right);
    assert_eq!(out.events[1].alignment, ContentAlignment::Left);
    assert!((out.events[0].marker.x - out.width / 2.0).abs() < 1e-9);
}

#[test]
fn content_boxes_sit_on_their_side_of_the_track() {
    let s = settings(Orientation::Vertical, LayoutMode::Alternating);
    let out = layout_timeline(&grouped(2, &s), &s);
    let left = &out.events[0];
    let right = &out.events[1];
    assert!(left.content_origin.x + left.content_width < left.marker.x);
    assert!(right.content_origin.x > right.marker.x);
    assert!(left.content_origin.x >= 0.0);
    assert!(right.content_origin.x + right.content_width <= out.width);
}

#[test]
fn horizontal_ignores_layout_mode() {
    let mut reference = None;
    for mode in [
        LayoutMode::Left,
        LayoutMode::Right,
        LayoutMode::Alternating,
        LayoutMode::Center,
    ] {
        let s = settings(Orientation::Horizontal, mode);
        let out = layout_timeline(&grouped(3, &s), &s);
        for e in &out.events {
            assert_eq!(e.side, ContentSide::Below);
            assert_eq!(e.alignment, ContentAlignment::Center);
            assert!(!e.is_alternate_side);
            assert!(e.content_origin.y > e.marker.y);
        }
        let y0 = out.events[0].marker.y;
        assert!(out.events.iter().all(|e| e.marker.y == y0));
        match &reference {
            None => reference = Some(out),
            Some(r) => assert_eq!(r.events, out.events),
        }
    }
}

#[test]
fn indices_continue_across_groups() {
    let s = TimelineSettings {
        group_by: GroupBy::Category,
        layout: LayoutMode::Alternating,
        ..TimelineSettings::default()
    };
    let evs = vec![
        TimelineEvent::new("a", "2024-01-01", "A").with_category("x"),
        TimelineEvent::new("b", "2024-02-01", "B").with_category("y"),
        TimelineEvent::new("c", "2024-03-01", "C").with_category("x"),
    ];
    let groups = sort_and_group(&evs, &s);
    let out = layout_timeline(&groups, &s);
    let idx: Vec<(usize, usize, &str)> = out
        .events
        .iter()
        .map(|e| (e.index, e.group_index, e.event_id.as_str()))
        .collect();
    assert_eq!(idx, [(0, 0, "a"), (1, 0, "c"), (2, 1, "b")]);
    assert_eq!(out.groups.len(), 2);
    assert_eq!(out.groups[1].label, "y");
    // The header for "y" sits between the "c" and "b" markers.
    assert!(out.groups[1].position.y > out.events[1].marker.y);
    assert!(out.groups[1].position.y < out.events[2].marker.y);
}

#[test]
fn compact_mode_only_scales() {
    let normal = settings(Orientation::Vertical, LayoutMode::Alternating);
    let compact = TimelineSettings {
        compact_mode: true,
        ..normal
    };
    let a = layout_timeline(&grouped(3, &normal), &normal);
    let b = layout_timeline(&grouped(3, &compact), &compact);
    assert!(b.metrics.marker_size < a.metrics.marker_size);
    let ratio = b.metrics.event_spacing / a.metrics.event_spacing;
    assert!((ratio - b.metrics.marker_size / a.metrics.marker_size).abs() < 1e-12);
    let sides_a: Vec<_> = a.events.iter().map(|e| (e.side, e.alignment)).collect();
    let sides_b: Vec<_> = b.events.iter().map(|e| (e.side, e.alignment)).collect();
    assert_eq!(sides_a, sides_b);
    assert!(b.height < a.height);
}

#[test]
fn track_is_one_segment_spanning_all_markers() {
    let s = settings(Orientation::Vertical, LayoutMode::Left);
    let out = layout_timeline(&grouped(4, &s), &s);
    let track = out.track.expect("connectors on by default");
    let half = out.metrics.marker_size / 2.0;
    assert_eq!(track.start.y, out.events[0].marker.y - half);
    assert_eq!(track.end.y, out.events[3].marker.y + half);
    assert_eq!(track.start.x, track.end.x);
}

#[test]
fn zero_and_one_event_tracks_do_not_fail() {
    let s = settings(Orientation::Vertical, LayoutMode::Left);
    let empty = layout_timeline(&grouped(0, &s), &s);
    assert!(empty.events.is_empty());
    let t = empty.track.unwrap();
    assert_eq!(t.length(), 0.0);

    let one = layout_timeline(&grouped(1, &s), &s);
    let t = one.track.unwrap();
    assert!((t.length() - one.metrics.marker_size).abs() < 1e-9);

    let h = settings(Orientation::Horizontal, LayoutMode::Left);
    let empty = layout_timeline(&grouped(0, &h), &h);
    assert_eq!(empty.track.unwrap().length(), 0.0);
}

#[test]
fn connectors_hidden_when_disabled() {
    let s = TimelineSettings {
        show_connectors: false,
        ..TimelineSettings::default()
    };
    let out = layout_timeline(&grouped(3, &s), &s);
    assert!(out.track.is_none());
    assert!(out.events.iter().all(|e| e.connector.is_none()));
}

#[test]
fn dates_icons_and_animation_follow_settings() {
    let mut evs = events(3);
    evs[1].icon = Some("🚀".into());
    let on = TimelineSettings::default();
    let groups = sort_and_group(&evs, &on);
    let out = layout_timeline(&groups, &on);
    assert_eq!(out.events[0].date_label.as_deref(), Some("Jan 1, 2024"));
    assert_eq!(out.events[1].icon.as_deref(), Some("🚀"));
    let delays: Vec<u64> = out.events.iter().map(|e| e.animation_delay_ms).collect();
    assert_eq!(delays, [0, 80, 160]);

    let off = TimelineSettings {
        show_dates: false,
        show_icons: false,
        animate: false,
        interactive: false,
        ..on
    };
    let out = layout_timeline(&groups, &off);
    assert!(out.events.iter().all(|e| e.date_label.is_none()
        && e.icon.is_none()
        && e.animation_delay_ms == 0
        && !e.interactive));
}

#[test]
fn marker_color_comes_from_theme_by_status() {
    let theme = ThemeTokens {
        marker_completed: "done-token".into(),
        ..ThemeTokens::default()
    };
    let evs = vec![
        TimelineEvent::new("a", "2024-01-01", "A").with_status(EventStatus::Completed),
        TimelineEvent::new("b", "2024-01-02", "B"),
    ];
    let s = TimelineSettings::default();
    let out = layout_timeline_with_theme(&sort_and_group(&evs, &s), &s, &theme);
    assert_eq!(out.events[0].marker_color, "done-token");
    assert_eq!(out.events[1].marker_color, theme.marker_default);
}

#[test]
fn layout_is_idempotent() {
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        let s = TimelineSettings {
            orientation,
            layout: LayoutMode::Center,
            group_by: GroupBy::Month,
            ..TimelineSettings::default()
        };
        let groups = grouped(7, &s);
        let a = layout_timeline(&groups, &s);
        let b = layout_timeline(&groups, &s);
        assert_eq!(a, b);
        let bits = |l: &jwr_rs::timeline::TimelineLayout| -> Vec<u64> {
            l.events
                .iter()
                .flat_map(|e| [e.marker.x.to_bits(), e.marker.y.to_bits()])
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}
