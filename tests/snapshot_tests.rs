use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde_json::Value;
use timeline_rs::api::{
    DefaultItemVisualSelector, ItemVisualKind, TimelineConfig, TimelineEngine, TimelineItem,
};
use timeline_rs::core::{Extent, Placement, ScrollViewport};
use timeline_rs::render::NullRenderer;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|day| day.and_hms_opt(h, m, 0))
        .expect("valid date")
}

fn build_engine() -> TimelineEngine<NullRenderer> {
    let config = TimelineConfig::new(ScrollViewport::new(600.0, 40.0))
        .with_date_range(at(10, 0), at(11, 0))
        .with_current_date(at(10, 30))
        .with_time_unit(TimeDelta::minutes(15));
    TimelineEngine::with_collaborators(
        NullRenderer::default(),
        config,
        |_: &str, _: f64| 30.0,
        DefaultItemVisualSelector,
    )
    .expect("engine init")
}

#[test]
fn snapshot_captures_layout_state() {
    let mut engine = build_engine();
    let point = engine.add_item(TimelineItem::at(at(10, 15))).expect("add item");
    let range = engine
        .add_item(TimelineItem::at(at(10, 45)).with_duration(TimeDelta::minutes(5)))
        .expect("add item");
    let parked = engine.add_item(TimelineItem::at(at(9, 0))).expect("add item");

    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.extent,
        Extent::Fixed {
            width: 240.0,
            capped: false
        }
    );
    assert_eq!(snapshot.content_width, 240.0);
    assert_eq!(snapshot.preferred_unit_minutes, Some(15.0));
    assert_eq!(snapshot.actual_unit_minutes, 15.0);
    assert!(!snapshot.invalid_time_unit);
    assert_eq!(snapshot.graduations.ticks.len(), 5);

    let ids: Vec<_> = snapshot.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![point, range, parked]);
    assert_eq!(snapshot.items[0].visual, ItemVisualKind::Point);
    assert_eq!(snapshot.items[1].visual, ItemVisualKind::Range);
    assert_eq!(snapshot.items[2].placement, Placement::OffCanvas);

    let marker = snapshot
        .current_date
        .and_then(Placement::geometry)
        .expect("visible marker");
    assert_eq!(marker.left, 120.0);
}

#[test]
fn snapshot_json_exposes_stable_field_names() {
    let mut engine = build_engine();
    let point = engine.add_item(TimelineItem::at(at(10, 15))).expect("add item");

    let json = engine.snapshot_json().expect("snapshot json");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["extent"]["Fixed"]["width"], 240.0);
    assert_eq!(value["actual_unit_minutes"], 15.0);
    assert_eq!(value["line_range"]["start"], "2024-01-01T10:00:00");
    assert_eq!(value["graduations"]["ticks"][0]["label"], "10:00");
    assert_eq!(value["graduations"]["ticks"][1]["kind"], "Interior");
    assert_eq!(value["items"][0]["id"], point.raw());
    assert_eq!(value["items"][0]["visual"], "Point");
    assert_eq!(value["items"][0]["placement"]["Visible"]["anchor_x"], 60.0);
    assert_eq!(value["current_date"]["Visible"]["left"], 120.0);
}

#[test]
fn snapshot_is_unchanged_by_rendering() {
    let mut engine = build_engine();
    engine.add_item(TimelineItem::at(at(10, 15))).expect("add item");
    let before = engine.snapshot_json().expect("snapshot json");

    engine.render().expect("render");
    let after = engine.snapshot_json().expect("snapshot json");
    assert_eq!(before, after);
}

#[test]
fn inactive_layout_snapshot_is_empty() {
    let mut engine = build_engine();
    engine.add_item(TimelineItem::at(at(10, 15))).expect("add item");
    engine.set_date_range(None, None);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.line_range, None);
    assert_eq!(snapshot.extent, Extent::Unconstrained);
    assert!(snapshot.graduations.ticks.is_empty());
    assert!(
        snapshot
            .items
            .iter()
            .all(|item| item.placement == Placement::OffCanvas)
    );
    assert_eq!(snapshot.current_date, Some(Placement::OffCanvas));
}
