//! Schnittstelle zum externen Tracking-Provider (SLAM, Flächenerkennung).
//!
//! Der Kern implementiert kein Tracking selbst, er konsumiert Posen,
//! Tracking-Zustände und Hit-Tests ausschließlich über diese Traits.

use super::session_config::{Availability, CameraConfig, DisplayGeometry, SessionConfig};
use super::{HitResult, PlaneSnapshot, Pose, TrackingState};
use glam::{Mat4, Vec2};

/// Fehler eines Provider-Aufrufs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Session wurde geschlossen oder nie geöffnet
    #[error("Tracking-Session ist geschlossen")]
    SessionClosed,
    /// Kamera ist belegt oder nicht verfügbar
    #[error("Kamera nicht verfügbar")]
    CameraNotAvailable,
    /// Provider hat die Anker-Erstellung abgelehnt
    #[error("Anker abgelehnt: {0}")]
    AnchorRejected(String),
    /// Sonstiger interner Fehler des Providers
    #[error("Provider-Fehler: {0}")]
    Internal(String),
}

/// Kamera-Zustand eines Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Pose der Kamera (Kamera → Welt)
    pub camera_pose: Pose,
    pub tracking_state: TrackingState,
    /// View-Matrix (Welt → Kamera)
    pub view_matrix: Mat4,
    /// Projektions-Matrix (Kamera → Clip)
    pub projection_matrix: Mat4,
}

/// Handle auf einen Anker im Weltmodell des Providers.
///
/// Pose und Tracking-Zustand werden vom Provider pro Frame aktualisiert.
pub trait AnchorHandle {
    /// Aktuelle Pose des Ankers.
    fn pose(&self) -> Pose;

    /// Aktueller Tracking-Zustand des Ankers.
    fn tracking_state(&self) -> TrackingState;

    /// Löst den Anker vom Provider. Weitere Aufrufe sind wirkungslos.
    fn detach(&mut self);
}

/// Vom Messkern konsumierter Tracking-Provider.
///
/// Alle Aufrufe sind schnell und synchron; ein langsamer Provider verlängert
/// nur den aktuellen Frame.
pub trait TrackingProvider {
    /// Konkreter Anker-Typ des Providers.
    type Anchor: AnchorHandle;

    /// Prüft, ob der Tracking-Dienst auf dem Gerät nutzbar ist.
    fn availability(&mut self) -> Availability;

    /// Gibt `true` zurück, wenn automatische Tiefe unterstützt wird.
    fn supports_depth(&self) -> bool;

    /// Wendet die Session-Konfiguration an.
    fn configure(&mut self, config: &SessionConfig) -> Result<(), ProviderError>;

    /// Liefert alle verfügbaren Kamera-Konfigurationen.
    fn camera_configs(&self) -> Vec<CameraConfig>;

    /// Aktiviert eine Kamera-Konfiguration.
    fn set_camera_config(&mut self, config: &CameraConfig) -> Result<(), ProviderError>;

    /// Startet bzw. setzt das Tracking fort.
    fn resume(&mut self) -> Result<(), ProviderError>;

    /// Pausiert das Tracking.
    fn pause(&mut self);

    /// Teilt Viewport-Größe und Display-Rotation mit.
    fn set_display_geometry(&mut self, geometry: DisplayGeometry);

    /// Aktualisiert den Provider und liefert den Kamera-Zustand des neuen Frames.
    fn current_frame(&mut self, near_clip: f32, far_clip: f32)
        -> Result<CameraFrame, ProviderError>;

    /// Hit-Test am Screen-Punkt (Pixel). Ergebnisse nach Distanz sortiert.
    fn hit_test(&mut self, screen_pos: Vec2) -> Result<Vec<HitResult>, ProviderError>;

    /// Alle bekannten Flächen (inkl. nicht getrackter und subsumierter).
    fn tracked_planes(&self) -> Vec<PlaneSnapshot>;

    /// Erstellt einen Anker am Treffer.
    fn create_anchor(&mut self, hit: &HitResult) -> Result<Self::Anchor, ProviderError>;

    /// Beendet die Session und gibt Provider-Ressourcen frei.
    fn close(&mut self);
}
