use measurekit_controls::{
    AreaControl, CircleControl, MeasureShape, PointerEvent, Shape, ShapeType,
};
use measurekit_core::LngLat;

#[test]
fn test_polygon_bounds_cover_all_vertices() {
    let mut control = AreaControl::default();
    control.start_measuring();
    control.handle_click(LngLat::new(-1.0, 2.0)).unwrap();
    control.handle_click(LngLat::new(3.0, -4.0)).unwrap();
    control.handle_click(LngLat::new(0.5, 0.5)).unwrap();

    let polygon = control.active_polygon().unwrap();
    assert_eq!(polygon.bounds(), Some((-1.0, -4.0, 3.0, 2.0)));
}

#[test]
fn test_empty_polygon_has_no_bounds() {
    let mut control = AreaControl::default();
    control.start_measuring();
    assert_eq!(control.active_polygon().unwrap().bounds(), None);
}

#[test]
fn test_circle_bounds_contain_center() {
    let mut control = CircleControl::default();
    control.start_measuring();
    let center = LngLat::new(2.35, 48.85);
    control.handle_down(center);
    control.handle_move(LngLat::new(2.40, 48.85));

    let (min_lng, min_lat, max_lng, max_lat) = control.active_circle().unwrap().bounds().unwrap();
    assert!(min_lng < center.lng && center.lng < max_lng);
    assert!(min_lat < center.lat && center.lat < max_lat);
}

#[test]
fn test_completion_flags() {
    let mut area = AreaControl::default();
    area.start_measuring();
    for p in [
        LngLat::new(0.0, 0.0),
        LngLat::new(0.01, 0.0),
        LngLat::new(0.01, 0.01),
    ] {
        area.handle_click(p).unwrap();
    }
    assert!(!area.active_polygon().unwrap().is_complete());
    area.handle_marker_click(0).unwrap();
    assert!(area.active_polygon().unwrap().is_complete());

    let mut circle = CircleControl::default();
    circle.start_measuring();
    circle.handle_down(LngLat::new(0.0, 0.0));
    assert!(!circle.active_circle().unwrap().is_complete());
    circle.handle_up(LngLat::new(0.0, 0.0));
    let (_, c) = circle.circles().next().unwrap();
    assert!(c.is_complete());
}

#[test]
fn test_shape_dispatch() {
    let mut control = AreaControl::default();
    control.start_measuring();
    control.handle_click(LngLat::new(1.0, 1.0)).unwrap();
    let polygon = control.active_polygon().unwrap().clone();
    let shape = Shape::Polygon(polygon);
    assert_eq!(shape.shape_type(), ShapeType::Polygon);
    assert!(shape.as_polygon().is_some());
    assert!(shape.as_circle().is_none());
    assert!(!shape.is_complete());
}

#[test]
fn test_pointer_event_display() {
    let event = PointerEvent::Click(LngLat::new(2.0, 48.0));
    assert_eq!(event.to_string(), "click at (2, 48)");
    assert_eq!(PointerEvent::StyleReload.to_string(), "style reload");
}
