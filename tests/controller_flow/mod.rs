use ar_measure::core::DisplayRotation;
use ar_measure::render::{LineDraw, MarkerDraw, PlaneDraw, RenderSink, SceneCamera};
use ar_measure::sim::plane_hit;
use ar_measure::{
    FrameOutcome, LabelEvent, MeasureOptions, MeasurementController, SimulatedProvider,
};
use glam::{Vec2, Vec3};

mod placement;
mod session;
mod tracking_loss;

pub const VIEWPORT_W: u32 = 1080;
pub const VIEWPORT_H: u32 = 1920;

/// Bildschirmmitte des Test-Viewports.
pub fn screen_center() -> Vec2 {
    Vec2::new(VIEWPORT_W as f32 * 0.5, VIEWPORT_H as f32 * 0.5)
}

/// Sink, der alle Zeichenbefehle in Reihenfolge mitschreibt.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<&'static str>,
    pub labels: Vec<LabelEvent>,
    pub markers: Vec<MarkerDraw>,
    pub lines: Vec<LineDraw>,
}

impl RecordingSink {
    /// Vergisst die bisherigen Aufrufe (zwischen zwei Frames).
    pub fn reset(&mut self) {
        self.calls.clear();
        self.markers.clear();
        self.lines.clear();
    }

    pub fn last_label(&self) -> Option<&LabelEvent> {
        self.labels.last()
    }
}

impl RenderSink for RecordingSink {
    fn draw_background(&mut self) {
        self.calls.push("background");
    }

    fn draw_plane(&mut self, _plane: &PlaneDraw, _camera: &SceneCamera) {
        self.calls.push("plane");
    }

    fn draw_line(&mut self, line: &LineDraw, _camera: &SceneCamera) {
        self.calls.push("line");
        self.lines.push(*line);
    }

    fn draw_marker(&mut self, marker: &MarkerDraw, _camera: &SceneCamera) {
        self.calls.push("marker");
        self.markers.push(*marker);
    }

    fn apply_label(&mut self, label: &LabelEvent) {
        self.calls.push("label");
        self.labels.push(label.clone());
    }
}

/// Startet und setzt eine Session mit Standard-Optionen fort, Viewport 1080x1920.
pub fn start_running(provider: SimulatedProvider) -> MeasurementController<SimulatedProvider> {
    let mut controller = MeasurementController::start(provider, MeasureOptions::default())
        .expect("Session-Start sollte funktionieren");
    controller.resume().expect("Resume sollte funktionieren");
    controller.set_viewport(VIEWPORT_W, VIEWPORT_H, DisplayRotation::Rotation0);
    controller
}

/// Reiht einen Tap ein, dessen Hit-Test genau einen Flächentreffer bei `position` liefert.
pub fn scripted_tap(controller: &mut MeasurementController<SimulatedProvider>, position: Vec3) {
    controller
        .provider_mut()
        .push_hit_results(vec![plane_hit(position, true)]);
    controller.enqueue_tap(screen_center());
}

/// Tickt einen Frame und erwartet, dass gezeichnet wurde.
pub fn tick_drawn(
    controller: &mut MeasurementController<SimulatedProvider>,
    sink: &mut RecordingSink,
) -> ar_measure::FrameReport {
    match controller.tick(sink) {
        FrameOutcome::Drawn(report) => report,
        other => panic!("Gezeichneter Frame erwartet, erhalten: {other:?}"),
    }
}

/// Setzt zwei Anker bei `a` und `b` (je ein Frame pro Tap).
pub fn measure_between(
    controller: &mut MeasurementController<SimulatedProvider>,
    sink: &mut RecordingSink,
    a: Vec3,
    b: Vec3,
) -> ar_measure::FrameReport {
    scripted_tap(controller, a);
    tick_drawn(controller, sink);
    scripted_tap(controller, b);
    tick_drawn(controller, sink)
}
