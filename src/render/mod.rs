//! Übergabe der Frame-Szene an den externen Render-Sink.
//!
//! Shader, Texturen und Draw-Calls leben außerhalb des Kerns. Der Kern
//! legt nur fest, was in welcher Reihenfolge gezeichnet wird.

mod log_sink;

pub use crate::shared::{FrameScene, LabelEvent, LineDraw, MarkerDraw, PlaneDraw, SceneCamera};
pub use log_sink::LogSink;

/// Empfänger der Zeichenbefehle eines Frames.
///
/// `apply_label` darf nicht davon ausgehen, auf dem UI-Thread zu laufen;
/// die Zustellung an den Besitzer des Labels ist Sache der Implementierung.
pub trait RenderSink {
    /// Zeichnet das Kamerabild als Hintergrund.
    fn draw_background(&mut self);

    /// Zeichnet eine erkannte Fläche.
    fn draw_plane(&mut self, plane: &PlaneDraw, camera: &SceneCamera);

    /// Zeichnet die Verbindungslinie zwischen den Ankern.
    fn draw_line(&mut self, line: &LineDraw, camera: &SceneCamera);

    /// Zeichnet einen Anker-Marker.
    fn draw_marker(&mut self, marker: &MarkerDraw, camera: &SceneCamera);

    /// Aktualisiert oder versteckt das Distanz-Label.
    fn apply_label(&mut self, label: &LabelEvent);
}

/// Übergibt die komplette Szene in Schichtreihenfolge an den Sink.
pub fn submit<S: RenderSink + ?Sized>(scene: &FrameScene, sink: &mut S) {
    // 1. Kamerabild immer zuerst
    sink.draw_background();

    if let Some(camera) = scene.camera.as_ref() {
        // 2. Flächen
        for plane in &scene.planes {
            sink.draw_plane(plane, camera);
        }

        // 3. Verbindungslinie (unter den Markern)
        if let Some(line) = scene.line.as_ref() {
            sink.draw_line(line, camera);
        }

        // 4. Anker-Marker (zuoberst)
        for marker in &scene.markers {
            sink.draw_marker(marker, camera);
        }
    }

    // 5. Label zuletzt
    sink.apply_label(&scene.label);
}
