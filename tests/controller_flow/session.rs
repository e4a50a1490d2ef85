use super::{
    measure_between, scripted_tap, start_running, tick_drawn, RecordingSink, VIEWPORT_H,
    VIEWPORT_W,
};
use ar_measure::core::{Availability, CameraConfig, CameraFacing, DepthMode, DisplayRotation};
use ar_measure::{
    FrameOutcome, MeasureOptions, MeasurementController, MeasurementPhase, SessionError,
    SimulatedProvider,
};
use glam::Vec3;

#[test]
fn test_unsupported_device_creates_no_session() {
    let provider = SimulatedProvider::new().with_availability(Availability::Unsupported);
    let result = MeasurementController::start(provider, MeasureOptions::default());
    assert!(matches!(result, Err(SessionError::Unsupported)));
}

#[test]
fn test_install_requested_is_retryable() {
    let provider = SimulatedProvider::new().with_availability(Availability::InstallRequested);
    match MeasurementController::start(provider, MeasureOptions::default()) {
        Err(e) => {
            assert_eq!(e, SessionError::InstallRequested);
            assert!(e.is_retryable());
            assert!(!e.user_message().is_empty());
        }
        Ok(_) => panic!("Start sollte zurückgestellt werden"),
    }
}

#[test]
fn test_camera_not_available_on_resume() {
    let provider = SimulatedProvider::new().with_camera_unavailable();
    let mut controller = MeasurementController::start(provider, MeasureOptions::default())
        .expect("Konfiguration sollte funktionieren");
    assert_eq!(controller.resume(), Err(SessionError::CameraNotAvailable));
    assert!(!controller.is_running());
}

#[test]
fn test_start_selects_largest_back_camera_and_applies_config() {
    let controller = start_running(SimulatedProvider::new());
    let camera = controller
        .provider()
        .active_camera_config()
        .expect("Kamera sollte gewählt sein");
    assert_eq!(camera.facing, CameraFacing::Back);
    assert_eq!(camera.image_size, [1920, 1080]);
    assert_eq!(
        controller.provider().applied_config(),
        Some(*controller.session_config())
    );
    assert_eq!(controller.session_config().depth, DepthMode::Automatic);
}

#[test]
fn test_depth_disabled_without_provider_support() {
    let controller = start_running(SimulatedProvider::new().without_depth());
    assert_eq!(controller.session_config().depth, DepthMode::Disabled);
}

#[test]
fn test_front_only_device_keeps_provider_default_camera() {
    let provider = SimulatedProvider::new().with_camera_configs(vec![CameraConfig {
        facing: CameraFacing::Front,
        image_size: [1280, 720],
    }]);
    let controller = start_running(provider);
    assert!(controller.provider().active_camera_config().is_none());
    assert!(controller.is_running());
}

#[test]
fn test_ticks_before_resume_and_after_pause_are_paused() {
    let mut controller =
        MeasurementController::start(SimulatedProvider::new(), MeasureOptions::default())
            .expect("Session-Start sollte funktionieren");
    let mut sink = RecordingSink::default();

    assert_eq!(controller.tick(&mut sink), FrameOutcome::Paused);
    assert!(sink.calls.is_empty());

    controller.resume().expect("Resume sollte funktionieren");
    tick_drawn(&mut controller, &mut sink);

    controller.pause();
    sink.reset();
    assert_eq!(controller.tick(&mut sink), FrameOutcome::Paused);
    assert!(sink.calls.is_empty());
    assert!(!controller.provider().is_running());
}

#[test]
fn test_viewport_is_pushed_once_per_change_and_after_resume() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();

    tick_drawn(&mut controller, &mut sink);
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.provider().display_updates(), 1);

    controller.set_viewport(VIEWPORT_W, VIEWPORT_H, DisplayRotation::Rotation0);
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.provider().display_updates(), 1);

    controller.set_viewport(VIEWPORT_H, VIEWPORT_W, DisplayRotation::Rotation90);
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.provider().display_updates(), 2);
    let geometry = controller
        .provider()
        .display_geometry()
        .expect("Geometrie sollte gesetzt sein");
    assert_eq!(geometry.rotation, DisplayRotation::Rotation90);

    controller.pause();
    controller.resume().expect("Resume sollte funktionieren");
    tick_drawn(&mut controller, &mut sink);
    assert_eq!(controller.provider().display_updates(), 3);
}

#[test]
fn test_faulted_frame_draws_nothing_and_next_frame_recovers() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::Z);

    controller.provider_mut().fail_next_frame();
    sink.reset();
    assert_eq!(controller.tick(&mut sink), FrameOutcome::Faulted);
    assert!(sink.calls.is_empty());
    assert_eq!(controller.stats().faulted_frames, 1);
    assert_eq!(controller.anchor_count(), 2);

    let report = tick_drawn(&mut controller, &mut sink);
    assert_eq!(report.label.text(), Some("100.0 cm"));
    assert!(controller.is_open());
}

#[test]
fn test_externally_closed_provider_ends_session_on_next_tick() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::Z);
    scripted_tap(&mut controller, Vec3::X);

    controller.provider_mut().close_externally();
    sink.reset();

    assert_eq!(controller.tick(&mut sink), FrameOutcome::NoSession);
    assert!(sink.calls.is_empty());
    assert!(!controller.is_open());
    assert_eq!(controller.anchor_count(), 0);
    assert_eq!(controller.pending_taps(), 0);
    assert_eq!(controller.provider().live_anchor_count(), 0);
    assert_eq!(controller.tick(&mut sink), FrameOutcome::NoSession);
}

#[test]
fn test_teardown_detaches_anchors_and_is_idempotent() {
    let mut controller = start_running(SimulatedProvider::new());
    let mut sink = RecordingSink::default();
    measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::X);
    assert_eq!(controller.provider().live_anchor_count(), 2);

    controller.teardown();
    assert_eq!(controller.provider().live_anchor_count(), 0);
    assert!(controller.provider().is_closed());
    assert_eq!(controller.phase(), MeasurementPhase::NoAnchors);

    controller.teardown();
    assert_eq!(controller.tick(&mut sink), FrameOutcome::NoSession);
    assert_eq!(controller.resume(), Err(SessionError::Closed));
}

#[test]
fn test_label_hidden_until_viewport_is_known() {
    let mut controller =
        MeasurementController::start(SimulatedProvider::new(), MeasureOptions::default())
            .expect("Session-Start sollte funktionieren");
    controller.resume().expect("Resume sollte funktionieren");
    let mut sink = RecordingSink::default();

    let report = measure_between(&mut controller, &mut sink, Vec3::ZERO, Vec3::Z);
    assert_eq!(report.phase, MeasurementPhase::Measuring);
    assert!(!report.label.is_visible());
    assert_eq!(controller.provider().display_updates(), 0);

    controller.set_viewport(VIEWPORT_W, VIEWPORT_H, DisplayRotation::Rotation0);
    let report = tick_drawn(&mut controller, &mut sink);
    assert_eq!(report.label.text(), Some("100.0 cm"));
}
