use approx::assert_relative_eq;
use measurekit_controls::{CircleControl, ControlConfig, PointerEvent};
use measurekit_core::{distance_meters, DistanceUnit, LngLat};

const CENTER: LngLat = LngLat { lng: 2.35, lat: 48.85 };

#[test]
fn test_down_ignored_while_idle() {
    let mut control = CircleControl::default();
    control.handle_down(CENTER);
    assert_eq!(control.shape_count(), 0);
    assert!(!control.gesture_active());
}

#[test]
fn test_gesture_lifecycle() {
    let mut control = CircleControl::default();
    control.start_measuring();

    control.handle_down(CENTER);
    assert_eq!(control.shape_count(), 1);
    assert!(control.gesture_active());
    let circle = control.active_circle().unwrap();
    assert_eq!(circle.center(), CENTER);
    assert_eq!(circle.radius_km(), 0.0);

    let target = LngLat::new(2.40, 48.85);
    control.handle_move(target);
    let expected_km = distance_meters(CENTER, target) / 1000.0;
    let circle = control.active_circle().unwrap();
    assert_relative_eq!(circle.radius_km(), expected_km, max_relative = 1e-12);

    control.handle_up(target);
    assert!(!control.gesture_active());
    let (_, circle) = control.circles().next().unwrap();
    assert!(!circle.is_active());

    // Moves after the gesture ended leave the radius frozen.
    control.handle_move(LngLat::new(3.0, 49.0));
    let (_, circle) = control.circles().next().unwrap();
    assert_relative_eq!(circle.radius_km(), expected_km, max_relative = 1e-12);
}

#[test]
fn test_radius_never_negative() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_down(CENTER);
    control.handle_move(CENTER);
    assert_eq!(control.active_circle().unwrap().radius_km(), 0.0);
}

#[test]
fn test_second_down_finalizes_stale_gesture() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_down(CENTER);
    control.handle_move(LngLat::new(2.40, 48.85));
    // No pointer-up arrives before the next press.
    control.handle_down(LngLat::new(3.0, 49.0));

    assert_eq!(control.shape_count(), 2);
    let shapes: Vec<_> = control.circles().collect();
    assert!(!shapes[0].1.is_active());
    assert!(shapes[1].1.is_active());
}

#[test]
fn test_each_gesture_yields_one_shape() {
    let mut control = CircleControl::default();
    control.start_measuring();
    for i in 0..3 {
        let center = LngLat::new(i as f64, i as f64);
        control.handle_down(center);
        control.handle_move(LngLat::new(i as f64 + 0.01, i as f64));
        control.handle_up(LngLat::new(i as f64 + 0.01, i as f64));
    }
    assert_eq!(control.shape_count(), 3);
    assert!(control.circles().all(|(_, c)| !c.is_active()));
}

#[test]
fn test_area_label_uses_doubled_formula() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_down(CENTER);
    control.handle_move(LngLat::new(2.40, 48.85));
    let circle = control.active_circle().unwrap();

    let radius_m = circle.radius_km() * 1000.0;
    let expected = (2.0 * std::f64::consts::PI * radius_m * radius_m).round();
    assert_eq!(circle.area_square_meters(), expected);
    assert!(!circle.area_label().is_empty());
}

#[test]
fn test_zero_radius_area_label_is_empty() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_down(CENTER);
    // The gesture never moved: zero radius, zero area, empty label.
    assert_eq!(control.active_circle().unwrap().area_label(), "");
}

#[test]
fn test_radius_label_uses_configured_unit() {
    let config = ControlConfig::default()
        .with_unit(DistanceUnit::Meters)
        .with_label_format(|v| format!("{} m", v.round()));
    let mut control = CircleControl::new(config);
    control.start_measuring();
    control.handle_down(CENTER);
    control.handle_move(LngLat::new(2.40, 48.85));
    control.handle_up(LngLat::new(2.40, 48.85));

    let sources = control.render_sources();
    let label = sources.shapes[0].radius_label.properties.label.as_deref().unwrap();
    assert!(label.ends_with(" m"));
}

#[test]
fn test_render_sources_shape() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_down(CENTER);
    control.handle_move(LngLat::new(2.40, 48.85));
    control.handle_up(LngLat::new(2.40, 48.85));

    let sources = control.render_sources();
    assert_eq!(sources.shapes.len(), 1);
    let shape = &sources.shapes[0];

    match &shape.outline.geometry {
        measurekit_controls::Geometry::Polygon { coordinates } => {
            let ring = &coordinates[0];
            assert_eq!(ring.first(), ring.last());
            assert!(ring.len() > 16);
        }
        other => panic!("expected polygon outline, got {other:?}"),
    }

    match &shape.area_label.geometry {
        measurekit_controls::Geometry::Point { coordinates } => {
            assert_relative_eq!(coordinates[0], CENTER.lng, epsilon = 1e-12);
            assert_relative_eq!(coordinates[1], CENTER.lat, epsilon = 1e-12);
        }
        other => panic!("expected point, got {other:?}"),
    }

    assert!(shape.radius_label.properties.label.is_some());
}

#[test]
fn test_stop_measuring_discards_all_shapes() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_down(CENTER);
    control.handle_up(CENTER);
    assert_eq!(control.shape_count(), 1);

    control.stop_measuring();
    assert!(!control.is_measuring());
    assert_eq!(control.shape_count(), 0);
}

#[test]
fn test_redraw_fires_once_per_reload() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_down(CENTER);
    control.handle_up(CENTER);

    assert!(control.redraw().is_none());
    control.notify_style_reload();
    control.notify_style_reload();
    assert!(control.redraw().is_some());
    assert!(control.redraw().is_none());
}

#[test]
fn test_event_dispatch() {
    let mut control = CircleControl::default();
    control.start_measuring();
    control.handle_event(PointerEvent::Down(CENTER));
    control.handle_event(PointerEvent::Move(LngLat::new(2.36, 48.85)));
    control.handle_event(PointerEvent::Up(LngLat::new(2.36, 48.85)));
    control.handle_event(PointerEvent::StyleReload);

    assert_eq!(control.shape_count(), 1);
    assert!(!control.gesture_active());
    assert!(control.redraw_pending());
}
