//! Render-Sink ohne GPU: loggt Draw-Calls und reicht Label-Events weiter.

use super::{LabelEvent, LineDraw, MarkerDraw, PlaneDraw, RenderSink, SceneCamera};
use crossbeam_channel::Sender;

/// Headless-Sink für Demo und Diagnose.
///
/// Label-Events gehen optional über einen Channel an den Thread, dem das
/// Label gehört. Unveränderte Events werden nicht erneut gesendet.
#[derive(Default)]
pub struct LogSink {
    label_tx: Option<Sender<LabelEvent>>,
    last_label: Option<LabelEvent>,
    frames: u64,
}

impl LogSink {
    /// Erstellt einen Sink ohne Label-Weiterleitung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leitet Label-Events an den angegebenen Channel weiter.
    pub fn with_label_channel(mut self, tx: Sender<LabelEvent>) -> Self {
        self.label_tx = Some(tx);
        self
    }

    /// Anzahl gezeichneter Hintergründe (= Frames).
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn draw_background(&mut self) {
        self.frames += 1;
        log::trace!("Frame {}: Hintergrund", self.frames);
    }

    fn draw_plane(&mut self, plane: &PlaneDraw, _camera: &SceneCamera) {
        log::trace!(
            "Fläche {} bei {:?}",
            plane.plane_id,
            plane.center_pose.translation
        );
    }

    fn draw_line(&mut self, line: &LineDraw, _camera: &SceneCamera) {
        log::trace!(
            "Linie {:?} → {:?}",
            line.start.translation,
            line.end.translation
        );
    }

    fn draw_marker(&mut self, marker: &MarkerDraw, _camera: &SceneCamera) {
        log::trace!("Marker bei {:?}", marker.pose.translation);
    }

    fn apply_label(&mut self, label: &LabelEvent) {
        if self.last_label.as_ref() == Some(label) {
            return;
        }
        match label {
            LabelEvent::Show {
                text, screen_pos, ..
            } => log::debug!(
                "Label: {} bei ({:.0}, {:.0})",
                text,
                screen_pos.x,
                screen_pos.y
            ),
            LabelEvent::Hide => log::debug!("Label ausgeblendet"),
        }
        if let Some(tx) = self.label_tx.as_ref() {
            if tx.send(label.clone()).is_err() {
                log::warn!("Label-Empfänger nicht mehr verfügbar");
                self.label_tx = None;
            }
        }
        self.last_label = Some(label.clone());
    }
}
