use jwr_rs::chart::ChartKind;
use jwr_rs::timeline::{GroupBy, LayoutMode, Orientation};
use jwr_rs::widget::{Widget, parse_widget};
use jwr_rs::{EventStatus, WidgetError};

#[test]
fn unsupported_type_is_an_error() {
    let err = parse_widget(r#"{"type":"gauge","data":{}}"#).unwrap_err();
    assert!(matches!(err, WidgetError::UnsupportedType(ref t) if t == "gauge"));
    assert!(err.to_string().contains("gauge"));
}

#[test]
fn malformed_json_is_an_error() {
    let err = parse_widget("{ not json").unwrap_err();
    assert!(matches!(err, WidgetError::Json(_)));
}

#[test]
fn bad_chart_data_names_the_widget() {
    let err = parse_widget(r#"{"type":"chart","data":{"kind":"radar"}}"#).unwrap_err();
    match err {
        WidgetError::InvalidData { widget, .. } => assert_eq!(widget, "chart"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn timeline_accepts_a_bare_event_array() {
    let w = parse_widget(
        r#"{"type":"timeline","data":[
            {"id":1,"date":"2024-02-01","title":"Two"},
            {"id":"x","date":"2024-01-01","title":"One","status":"Completed"}
        ]}"#,
    )
    .unwrap();
    let Widget::Timeline(t) = w else {
        panic!("expected a timeline");
    };
    assert_eq!(t.events.len(), 2);
    assert_eq!(t.events[0].id, "1");
    assert_eq!(t.events[1].status, Some(EventStatus::Completed));
    let view = t.build();
    assert_eq!(view.layout.events[0].event_id, "x");
    assert!(view.progress.is_none());
}

#[test]
fn broken_events_are_skipped_not_fatal() {
    let w = parse_widget(
        r#"{"type":"timeline","data":{"events":[
            {"id":"ok","date":"2024-01-01","title":"Fine"},
            "not an event",
            {"id":"also-ok","date":"2024-01-02","title":"Fine too","status":"exploded"}
        ]}}"#,
    )
    .unwrap();
    let Widget::Timeline(t) = w else {
        panic!("expected a timeline");
    };
    let ids: Vec<&str> = t.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["ok", "also-ok"]);
    assert_eq!(t.events[1].status, None);
}

#[test]
fn mistyped_optional_fields_keep_the_event() {
    let w = parse_widget(
        r#"{"type":"timeline","data":{"events":[
            {"id":"a","date":"2024-01-01","title":"A"},
            {"id":"b","date":"2024-01-02","title":"B","description":42},
            {"id":"c","date":"2024-01-03","title":"C","category":7,"icon":false,"link":[1]}
        ]}}"#,
    )
    .unwrap();
    let Widget::Timeline(t) = w else {
        panic!("expected a timeline");
    };
    let ids: Vec<&str> = t.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(t.events[1].description.as_deref(), Some("42"));
    assert_eq!(t.events[2].category.as_deref(), Some("7"));
    assert_eq!(t.events[2].link, None);
}

#[test]
fn mistyped_config_flag_keeps_the_other_settings() {
    let w = parse_widget(
        r#"{"type":"timeline","data":{"events":[],"config":{
            "orientation":"horizontal",
            "layout":"center",
            "compactMode":"yes",
            "showDates":0
        }}}"#,
    )
    .unwrap();
    let Widget::Timeline(t) = w else {
        panic!("expected a timeline");
    };
    let s = t.config.resolve();
    assert_eq!(s.orientation, Orientation::Horizontal);
    assert_eq!(s.layout, LayoutMode::Center);
    assert!(!s.compact_mode);
    assert!(s.show_dates);
}

#[test]
fn config_values_resolve_with_fallbacks() {
    let w = parse_widget(
        r#"{"type":"timeline","data":{"events":[],"config":{
            "orientation":"horizontal",
            "layout":"zigzag",
            "groupBy":"month",
            "compactMode":true
        }}}"#,
    )
    .unwrap();
    let Widget::Timeline(t) = w else {
        panic!("expected a timeline");
    };
    let s = t.config.resolve();
    assert_eq!(s.orientation, Orientation::Horizontal);
    assert_eq!(s.layout, LayoutMode::Left);
    assert_eq!(s.group_by, GroupBy::Month);
    assert!(s.compact_mode);
}

#[test]
fn style_block_overrides_theme_tokens() {
    let w = parse_widget(
        r##"{"type":"chart",
             "data":{"kind":"pie","values":[1,1]},
             "style":{"connector":"#000000","series":["#111111"]}}"##,
    )
    .unwrap();
    let Widget::Chart(c) = w else {
        panic!("expected a chart");
    };
    assert_eq!(c.data.kind, ChartKind::Pie);
    assert_eq!(c.theme.connector, "#000000");
    assert_eq!(c.theme.series_color(3), "#111111");
    // Tokens not named in the style block keep their defaults.
    assert_eq!(c.theme.background, "#FFFFFF");
}

#[test]
fn widget_type_is_case_insensitive() {
    assert!(matches!(
        parse_widget(r#"{"type":" Timeline ","data":[]}"#),
        Ok(Widget::Timeline(_))
    ));
}
