use super::{measure_between, screen_center, start_running, tick_drawn, RecordingSink};
use ar_measure::sim::plane_hit;
use ar_measure::{LabelEvent, SimulatedProvider, TrackingState};
use glam::Vec3;

#[test]
fn test_camera_tracking_loss_hides_label_and_restores_same_distance() {
    let mut controller = start_running(SimulatedProvider::new().with_floor(2.0));
    let mut sink = RecordingSink::default();
    let report = measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::Z);
    let shown = report.label.clone();
    assert_eq!(shown.text(), Some("100.0 cm"));

    controller
        .provider_mut()
        .set_camera_tracking(TrackingState::Paused);
    sink.reset();
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.camera_tracking, TrackingState::Paused);
    assert_eq!(report.label, LabelEvent::Hide);
    // Nur Kamerabild und Label, keine Flächen, Linie oder Marker
    assert_eq!(sink.calls, vec!["background", "label"]);
    assert_eq!(controller.anchor_count(), 2);

    controller
        .provider_mut()
        .set_camera_tracking(TrackingState::Tracking);
    sink.reset();
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.label.text(), Some("100.0 cm"));
    assert_eq!(sink.last_label(), Some(&shown));
    assert!(sink.calls.contains(&"line"));
}

#[test]
fn test_lost_anchor_hides_label_line_and_its_marker() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::X);

    controller
        .provider()
        .set_anchor_tracking(1, TrackingState::Paused);
    sink.reset();
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.label, LabelEvent::Hide);
    assert!(sink.lines.is_empty());
    assert_eq!(sink.markers.len(), 1);
    assert_eq!(sink.markers[0].pose.translation, Vec3::X);

    controller
        .provider()
        .set_anchor_tracking(1, TrackingState::Tracking);
    let report = tick_drawn(&mut controller, &mut sink);
    assert!(report.label.is_visible());
}

#[test]
fn test_tap_during_tracking_loss_is_discarded() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    controller
        .provider_mut()
        .set_camera_tracking(TrackingState::Paused);
    controller
        .provider_mut()
        .push_hit_results(vec![plane_hit(Vec3::ZERO, true)]);
    controller.enqueue_tap(screen_center());

    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.placement, None);
    assert_eq!(controller.pending_taps(), 0);
    assert_eq!(controller.anchor_count(), 0);
    assert_eq!(controller.provider().hit_test_calls(), 0);
    assert_eq!(controller.stats().taps_discarded, 1);

    // Nach der Rückkehr des Trackings wartet kein alter Tap mehr
    controller
        .provider_mut()
        .set_camera_tracking(TrackingState::Tracking);
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.anchor_count(), 0);
}

#[test]
fn test_stopped_camera_draws_background_only() {
    let mut controller = start_running(SimulatedProvider::new().with_floor(1.0));
    let mut sink = RecordingSink::default();

    tick_drawn(&mut controller, &mut sink);
    assert!(sink.calls.contains(&"plane"));

    controller
        .provider_mut()
        .set_camera_tracking(TrackingState::Stopped);
    sink.reset();
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(sink.calls, vec!["background", "label"]);
}
