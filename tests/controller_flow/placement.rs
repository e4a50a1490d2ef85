use super::{
    measure_between, screen_center, scripted_tap, start_running, tick_drawn, RecordingSink,
};
use ar_measure::core::{HitResult, PointOrientation, Trackable};
use ar_measure::sim::{plane_hit, SimFeaturePoint};
use ar_measure::{LabelEvent, MeasurementPhase, PlacementOutcome, Pose, SimulatedProvider};
use glam::{Vec2, Vec3};

#[test]
fn test_first_tap_places_single_anchor_without_label() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();

    scripted_tap(&mut controller, Vec3::ZERO);
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.placement, Some(PlacementOutcome::Placed));
    assert_eq!(report.phase, MeasurementPhase::OneAnchor);
    assert_eq!(report.label, LabelEvent::Hide);
    assert_eq!(controller.anchor_count(), 1);
    assert_eq!(sink.markers.len(), 1);
    assert!(sink.lines.is_empty());
}

#[test]
fn test_two_anchors_one_meter_apart_show_100_cm() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();

    let report = measure_between(
        &mut controller,
        &mut sink,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );

    assert_eq!(report.phase, MeasurementPhase::Measuring);
    assert_eq!(report.label.text(), Some("100.0 cm"));
    match &report.label {
        LabelEvent::Show {
            screen_pos,
            distance_m,
            ..
        } => {
            assert!((distance_m - 1.0).abs() < 1e-5);
            // Mittelpunkt liegt unter der Kamera, Richtung +Z = unten im Bild
            assert!((screen_pos.x - screen_center().x).abs() < 1.0);
            assert!(screen_pos.y > screen_center().y);
        }
        LabelEvent::Hide => panic!("Label sollte sichtbar sein"),
    }
    assert_eq!(sink.calls.last(), Some(&"label"));
    assert_eq!(sink.lines.len(), 1);
}

#[test]
fn test_third_tap_replaces_pair_with_single_anchor() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::X);

    scripted_tap(&mut controller, Vec3::new(0.5, 0.0, 0.5));
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.placement, Some(PlacementOutcome::Replaced));
    assert_eq!(report.phase, MeasurementPhase::OneAnchor);
    assert_eq!(report.label, LabelEvent::Hide);
    assert_eq!(controller.anchor_count(), 1);
    assert_eq!(controller.provider().live_anchor_count(), 1);
    assert_eq!(
        controller.anchor_snapshots()[0].pose.translation,
        Vec3::new(0.5, 0.0, 0.5)
    );
    assert_eq!(controller.stats().anchors_replaced, 1);
}

#[test]
fn test_non_qualifying_hits_leave_anchors_unchanged() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    scripted_tap(&mut controller, Vec3::ZERO);
    tick_drawn(&mut controller, &mut sink);
    let before = controller.anchor_snapshots();

    let identity_point = HitResult {
        pose: Pose::from_translation(Vec3::X),
        distance: 1.0,
        trackable: Trackable::Point {
            point_id: 7,
            orientation: PointOrientation::InitializedToIdentity,
        },
    };
    controller
        .provider_mut()
        .push_hit_results(vec![plane_hit(Vec3::Z, false), identity_point]);
    controller.enqueue_tap(screen_center());
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.placement, Some(PlacementOutcome::NoOp));
    assert_eq!(controller.anchor_snapshots(), before);
    assert_eq!(controller.phase(), MeasurementPhase::OneAnchor);
}

#[test]
fn test_first_qualifying_hit_wins() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();

    controller.provider_mut().push_hit_results(vec![
        plane_hit(Vec3::new(9.0, 0.0, 9.0), false),
        plane_hit(Vec3::new(0.2, 0.0, 0.0), true),
        plane_hit(Vec3::new(0.4, 0.0, 0.0), true),
    ]);
    controller.enqueue_tap(screen_center());
    tick_drawn(&mut controller, &mut sink);

    let snapshots = controller.anchor_snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].pose.translation, Vec3::new(0.2, 0.0, 0.0));
}

#[test]
fn test_ray_cast_outside_plane_polygon_creates_no_anchor() {
    let mut controller = start_running(SimulatedProvider::new().with_floor(0.5));
    let mut sink = RecordingSink::default();

    // Oberer Bildrand trifft den Boden ca. 0.85 m vor der Kamera, außerhalb der Fläche
    controller.enqueue_tap(Vec2::new(540.0, 10.0));
    let report = tick_drawn(&mut controller, &mut sink);
    assert_eq!(report.placement, Some(PlacementOutcome::NoOp));
    assert_eq!(controller.anchor_count(), 0);

    controller.enqueue_tap(screen_center());
    let report = tick_drawn(&mut controller, &mut sink);
    assert_eq!(report.placement, Some(PlacementOutcome::Placed));
    let pose = controller.anchor_snapshots()[0].pose;
    assert!(pose.translation.length() < 1e-3);
}

#[test]
fn test_feature_point_with_surface_normal_accepts_anchor() {
    let mut provider = SimulatedProvider::new();
    provider.add_feature_point(SimFeaturePoint {
        point_id: 3,
        position: Vec3::new(0.0, 0.8, 0.0),
        orientation: PointOrientation::EstimatedSurfaceNormal,
    });
    let mut controller = start_running(provider);
    let mut sink = RecordingSink::default();

    controller.enqueue_tap(screen_center());
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.placement, Some(PlacementOutcome::Placed));
    let pose = controller.anchor_snapshots()[0].pose;
    assert!((pose.translation.y - 0.8).abs() < 1e-5);
}

#[test]
fn test_rejected_anchor_keeps_existing_pair() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::Z);

    controller.provider_mut().reject_next_anchor();
    scripted_tap(&mut controller, Vec3::X);
    let report = tick_drawn(&mut controller, &mut sink);

    assert_eq!(report.placement, Some(PlacementOutcome::NoOp));
    assert_eq!(report.label.text(), Some("100.0 cm"));
    assert_eq!(controller.anchor_count(), 2);
    assert_eq!(controller.stats().anchor_rejections, 1);
}

#[test]
fn test_one_tap_per_frame() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    for x in [0.0, 0.5, 1.0] {
        controller
            .provider_mut()
            .push_hit_results(vec![plane_hit(Vec3::new(x, 0.0, 0.0), true)]);
        controller.enqueue_tap(screen_center());
    }

    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.anchor_count(), 1);
    assert_eq!(controller.pending_taps(), 2);

    tick_drawn(&mut controller, &mut sink);
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.pending_taps(), 0);
    assert_eq!(controller.stats().taps_consumed, 3);
    assert_eq!(controller.anchor_count(), 1);
}

#[test]
fn test_queue_stays_short_at_normal_tap_cadence() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();

    for i in 0..20 {
        scripted_tap(&mut controller, Vec3::new(i as f32 * 0.1, 0.0, 0.0));
        assert!(controller.pending_taps() <= 1);
        tick_drawn(&mut controller, &mut sink);
        assert_eq!(controller.pending_taps(), 0);
    }
    assert!(controller.anchor_count() <= 2);
}

#[test]
fn test_taps_from_input_thread_are_processed_in_order() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    controller
        .provider_mut()
        .push_hit_results(vec![plane_hit(Vec3::ZERO, true)]);
    controller
        .provider_mut()
        .push_hit_results(vec![plane_hit(Vec3::X, true)]);

    let sender = controller.tap_sender();
    std::thread::spawn(move || {
        sender.enqueue(Vec2::new(1.0, 1.0));
        sender.enqueue(Vec2::new(2.0, 2.0));
    })
    .join()
    .expect("Input-Thread sollte durchlaufen");

    tick_drawn(&mut controller, &mut sink);
    tick_drawn(&mut controller, &mut sink);

    let translations: Vec<Vec3> = controller
        .anchor_snapshots()
        .iter()
        .map(|s| s.pose.translation)
        .collect();
    assert_eq!(translations, vec![Vec3::ZERO, Vec3::X]);
    // Anker-Posen bleiben über weitere Frames stabil
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.anchor_snapshots()[1].pose.translation, Vec3::X);
}
