use jwr_rs::chart::{ChartCanvas, ChartData, ChartKind, ChartPoint};
use jwr_rs::models::{EventStatus, TimelineEvent};
use jwr_rs::render::{chart_svg, save_svg, timeline_svg};
use jwr_rs::theme::ThemeTokens;
use jwr_rs::timeline::{TimelineConfig, build_timeline};

fn sample_view(orientation: &str) -> jwr_rs::TimelineView {
    let events = vec![
        TimelineEvent::new("a", "2024-01-01", "Kickoff meeting with every stakeholder")
            .with_status(EventStatus::Completed)
            .with_category("Planning"),
        TimelineEvent::new("b", "2024-02-15", "Build").with_status(EventStatus::Current),
        TimelineEvent::new("c", "someday", "Launch"),
    ];
    let config = TimelineConfig {
        orientation: Some(orientation.into()),
        layout: Some("alternating".into()),
        group_by: Some("category".into()),
        show_progress: Some(true),
        ..Default::default()
    };
    build_timeline(&events, &config)
}

#[test]
fn timeline_preview_is_an_svg_document() {
    for orientation in ["vertical", "horizontal"] {
        let view = sample_view(orientation);
        let svg = timeline_svg(&view, &ThemeTokens::default()).unwrap();
        assert!(svg.contains("<svg"), "{orientation}");
        assert!(svg.contains("Build"));
        assert!(svg.contains("Uncategorized"));
    }
}

#[test]
fn empty_timeline_still_renders() {
    let view = build_timeline(&[], &TimelineConfig::default());
    let svg = timeline_svg(&view, &ThemeTokens::default()).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn every_chart_kind_renders() {
    let theme = ThemeTokens::default();
    for kind in [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Bubble,
        ChartKind::Doughnut,
        ChartKind::Pie,
    ] {
        let data = ChartData {
            kind,
            labels: vec!["a".into(), "b".into(), "c".into()],
            values: vec![3.0, 1.0, 2.0],
            points: vec![
                ChartPoint {
                    x: 1.0,
                    y: 2.0,
                    r: Some(4.0),
                    label: None,
                },
                ChartPoint {
                    x: 3.0,
                    y: 1.0,
                    r: Some(2.0),
                    label: None,
                },
            ],
        };
        let mut canvas = ChartCanvas::new(320, 240);
        let svg = canvas.render_svg(&data, &theme).unwrap();
        assert!(svg.contains("<svg"), "{kind:?}");
        assert!(!canvas.index().is_empty(), "{kind:?}");
    }
}

#[test]
fn chart_without_shapes_renders_background_only() {
    let svg = chart_svg(ChartKind::Pie, &[], 100, 100, &ThemeTokens::default()).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn save_svg_writes_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.svg");
    let svg = chart_svg(ChartKind::Bar, &[], 50, 50, &ThemeTokens::default()).unwrap();
    save_svg(&svg, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, svg);

    let missing = dir.path().join("no-such-dir").join("x.svg");
    let err = save_svg(&svg, &missing).unwrap_err();
    assert!(err.to_string().contains("writing"));
}

#[test]
fn slices_cycle_the_palette_but_bubbles_share_one_color() {
    let theme = ThemeTokens {
        series: vec!["#123456".into(), "#ABCDEF".into()],
        ..ThemeTokens::default()
    };
    let mut canvas = ChartCanvas::new(200, 200);
    let doughnut = ChartData {
        kind: ChartKind::Doughnut,
        labels: Vec::new(),
        values: vec![1.0, 2.0],
        points: Vec::new(),
    };
    let svg = canvas.render_svg(&doughnut, &theme).unwrap().to_lowercase();
    assert!(svg.contains("#123456") && svg.contains("#abcdef"));

    let bubbles = ChartData {
        kind: ChartKind::Bubble,
        labels: Vec::new(),
        values: Vec::new(),
        points: vec![
            ChartPoint {
                x: 0.0,
                y: 0.0,
                r: Some(3.0),
                label: None,
            },
            ChartPoint {
                x: 1.0,
                y: 1.0,
                r: Some(6.0),
                label: None,
            },
        ],
    };
    let svg = canvas.render_svg(&bubbles, &theme).unwrap().to_lowercase();
    assert!(svg.contains("#123456"));
    assert!(!svg.contains("#abcdef"));
}
