//! Frame-Szene als expliziter Übergabevertrag zwischen Controller und Render-Sink.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::Pose;
use glam::{Mat4, Vec2};

/// Kamera-Matrizen eines getrackten Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    pub view: Mat4,
    pub projection: Mat4,
}

/// Zu zeichnende Fläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneDraw {
    pub plane_id: u64,
    pub center_pose: Pose,
    pub color: [f32; 4],
}

/// Verbindungslinie zwischen den beiden Ankern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDraw {
    pub start: Pose,
    pub end: Pose,
    pub color: [f32; 4],
    pub width_px: f32,
}

/// Marker an einem getrackten Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDraw {
    pub pose: Pose,
    pub color: [f32; 4],
}

/// Anweisung an das schwebende Distanz-Label.
///
/// Der Controller erzeugt nur das Event; die Zustellung an den Thread,
/// dem das Label gehört, übernimmt der Empfänger.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelEvent {
    /// Label anzeigen bzw. aktualisieren
    Show {
        /// Formatierter Text, z.B. "100.0 cm"
        text: String,
        /// Position in Pixeln (Ursprung oben links)
        screen_pos: Vec2,
        /// Gemessene Distanz in Metern
        distance_m: f32,
    },
    /// Label ausblenden
    Hide,
}

impl LabelEvent {
    /// Gibt `true` zurück, wenn das Label sichtbar ist.
    pub fn is_visible(&self) -> bool {
        matches!(self, LabelEvent::Show { .. })
    }

    /// Label-Text, falls sichtbar.
    pub fn text(&self) -> Option<&str> {
        match self {
            LabelEvent::Show { text, .. } => Some(text),
            LabelEvent::Hide => None,
        }
    }
}

/// Read-only Daten für einen Render-Frame, in Zeichenreihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScene {
    /// Kamera-Matrizen (None = Kamera trackt nicht, nur Hintergrund)
    pub camera: Option<SceneCamera>,
    /// Getrackte, nicht subsumierte Flächen
    pub planes: Vec<PlaneDraw>,
    /// Verbindungslinie (nur wenn beide Anker getrackt)
    pub line: Option<LineDraw>,
    /// Marker aller getrackten Anker
    pub markers: Vec<MarkerDraw>,
    /// Label-Anweisung für diesen Frame
    pub label: LabelEvent,
}

impl FrameScene {
    /// Szene, die nur das Kamerabild zeigt und das Label ausblendet.
    pub fn background_only() -> Self {
        Self {
            camera: None,
            planes: Vec::new(),
            line: None,
            markers: Vec::new(),
            label: LabelEvent::Hide,
        }
    }

    /// Gibt zurück, ob in diesem Frame eine Messung angezeigt wird.
    pub fn has_measurement(&self) -> bool {
        self.line.is_some() && self.label.is_visible()
    }
}
