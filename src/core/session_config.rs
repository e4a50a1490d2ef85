//! Konfigurationstypen für die Tracking-Session.

use serde::{Deserialize, Serialize};

/// Welche Flächen-Orientierungen der Provider erkennen soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaneFindingMode {
    Disabled,
    Horizontal,
    Vertical,
    #[default]
    HorizontalAndVertical,
}

/// Tiefen-Modus des Providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepthMode {
    #[default]
    Disabled,
    /// Nur wirksam, wenn das Gerät Tiefe unterstützt
    Automatic,
}

/// Fokus-Modus der Kamera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusMode {
    Fixed,
    #[default]
    Auto,
}

/// Gewünschte Session-Konfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub plane_finding: PlaneFindingMode,
    pub depth: DepthMode,
    pub focus: FocusMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            plane_finding: PlaneFindingMode::HorizontalAndVertical,
            depth: DepthMode::Automatic,
            focus: FocusMode::Auto,
        }
    }
}

/// Blickrichtung einer Gerätekamera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Back,
    Front,
}

/// Eine vom Provider angebotene Kamera-Konfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConfig {
    pub facing: CameraFacing,
    /// Bildgröße in Pixeln [Breite, Höhe]
    pub image_size: [u32; 2],
}

impl CameraConfig {
    /// Anzahl Pixel pro Bild.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.image_size[0]) * u64::from(self.image_size[1])
    }
}

/// Verfügbarkeit des Tracking-Dienstes auf dem Gerät.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Installed,
    /// Installation wurde angestoßen, Session später erneut versuchen
    InstallRequested,
    Unsupported,
}

/// Display-Rotation relativ zur natürlichen Geräteorientierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

/// Viewport-Geometrie, die dem Provider mitgeteilt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub rotation: DisplayRotation,
    pub width: u32,
    pub height: u32,
}

impl DisplayGeometry {
    /// Viewport-Größe als `Vec2` (Pixel).
    pub fn size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32, self.height as f32)
    }

    /// Seitenverhältnis Breite / Höhe (1.0 bei leerem Viewport).
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
