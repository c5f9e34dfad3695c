use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use timeline_rs::api::{
    DefaultItemVisualSelector, ItemVisualKind, TimelineConfig, TimelineEngine, TimelineItem,
    TimelineStyle,
};
use timeline_rs::core::ScrollViewport;
use timeline_rs::render::{Color, NullRenderer, RectRole, RectShape};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|day| day.and_hms_opt(h, m, 0))
        .expect("valid date")
}

/// 3600 px of content under a 600 px viewport, scrolled to 1500 px.
fn build_scrolled_engine() -> TimelineEngine<NullRenderer> {
    let config = TimelineConfig::new(ScrollViewport::new(600.0, 40.0))
        .with_date_range(at(10, 0), at(11, 0))
        .with_current_date(at(10, 25))
        .with_time_unit(TimeDelta::minutes(1));
    let mut engine = TimelineEngine::with_collaborators(
        NullRenderer::default(),
        config,
        |_: &str, _: f64| 30.0,
        DefaultItemVisualSelector,
    )
    .expect("engine init");
    engine.scroll_to(1500.0).expect("scroll");
    engine
}

#[test]
fn frame_is_expressed_in_viewport_coordinates() {
    let engine = build_scrolled_engine();
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.size.width, 600.0);
    assert_eq!(frame.size.height, 40.0);

    let baseline = frame
        .rects_with_role(RectRole::Baseline)
        .next()
        .expect("baseline");
    assert_eq!(baseline.x, 0.0);
    assert_eq!(baseline.y, 4.5);
    assert_eq!(baseline.width, 840.0);

    let ticks: Vec<f64> = frame
        .rects_with_role(RectRole::TickMark)
        .map(|rect| rect.x)
        .collect();
    assert_eq!(ticks.first().copied(), Some(-1500.0));
    assert_eq!(ticks[1], -180.0);
    // The end mark is pulled one tick width inside the content.
    assert_eq!(ticks.last().copied(), Some(2099.0));

    let label = frame
        .texts
        .iter()
        .find(|text| text.text == "10:22")
        .expect("label");
    assert_eq!(label.x, -195.0);
    assert_eq!(label.y, 10.0);
    assert_eq!(label.color, Color::BLACK);
}

#[test]
fn items_are_drawn_with_their_visual_family() {
    let mut engine = build_scrolled_engine();
    engine.add_item(TimelineItem::at(at(10, 26))).expect("add item");
    engine
        .add_item(TimelineItem::at(at(10, 30)).with_duration(TimeDelta::minutes(2)))
        .expect("add item");
    let style = TimelineStyle::default();

    let frame = engine.build_render_frame().expect("frame");
    let items: Vec<_> = frame.rects_with_role(RectRole::Item).collect();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0].shape, RectShape::Ellipse);
    assert_eq!(items[0].x, 57.5);
    assert_eq!(items[0].fill, style.point_item_fill);

    assert_eq!(items[1].shape, RectShape::Rectangle);
    assert_eq!(items[1].x, 300.0);
    assert_eq!(items[1].width, 120.0);
    assert_eq!(items[1].fill, style.range_item_fill);
}

#[test]
fn current_date_marker_uses_its_own_fill() {
    let engine = build_scrolled_engine();
    let frame = engine.build_render_frame().expect("frame");
    let marker = frame
        .rects_with_role(RectRole::CurrentDate)
        .next()
        .expect("marker");
    assert_eq!(marker.x, 0.0);
    assert_eq!(marker.width, 3.0);
    assert_eq!(marker.fill, Color::DARK_ORANGE);
}

#[test]
fn host_drawn_and_hidden_items_are_skipped() {
    let mut engine = build_scrolled_engine();
    engine.add_item(TimelineItem::at(at(10, 26))).expect("add item");
    engine.add_item(TimelineItem::default()).expect("add item");
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.rects_with_role(RectRole::Item).count(), 1);

    engine.set_item_visual_selector(|item: &TimelineItem| {
        if item.event_date.is_some() {
            ItemVisualKind::Custom(1)
        } else {
            ItemVisualKind::Hidden
        }
    });
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.rects_with_role(RectRole::Item).count(), 0);
    assert_eq!(engine.item_placements().filter(|(_, p)| p.is_visible()).count(), 2);
}

#[test]
fn render_validates_and_counts_primitives() {
    let mut engine = build_scrolled_engine();
    engine.add_item(TimelineItem::at(at(10, 26))).expect("add item");
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_item_count, 1);
    // Start, 14 interior ticks around the viewport, end.
    assert_eq!(renderer.last_tick_count, 16);
    assert_eq!(renderer.last_text_count, 16);
}
