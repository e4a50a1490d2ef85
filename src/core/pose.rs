//! Posen und Tracking-Zustand aus dem Tracking-Provider.

use glam::{Mat4, Quat, Vec3};

/// Tracking-Zustand einer Kamera oder eines Ankers.
///
/// Kamera und Anker werden unabhängig voneinander bewertet: ein Anker kann
/// das Tracking verlieren, während die Kamera weiter trackt (und umgekehrt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// Wird aktuell getrackt, Pose ist gültig
    Tracking,
    /// Tracking vorübergehend verloren, kann zurückkehren
    #[default]
    Paused,
    /// Tracking endgültig beendet
    Stopped,
}

impl TrackingState {
    /// Gibt `true` zurück, wenn die zugehörige Pose in diesem Frame gültig ist.
    pub fn is_tracking(self) -> bool {
        self == TrackingState::Tracking
    }
}

/// Unveränderlicher Schnappschuss aus Position (Meter) und Orientierung.
///
/// Posen verschiedener Frames sind nur vergleichbar, solange der Provider
/// ein stabiles Weltkoordinatensystem garantiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Translation in Welt-Koordinaten (Meter)
    pub translation: Vec3,
    /// Orientierung als Quaternion
    pub rotation: Quat,
}

impl Pose {
    /// Identitäts-Pose im Ursprung.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Erstellt eine Pose aus Translation und Rotation.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Reine Translations-Pose ohne Rotation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::IDENTITY)
    }

    /// Model-Matrix (lokal → Welt).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Transformiert einen Punkt aus dem lokalen Frame der Pose in Weltkoordinaten.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.translation
    }

    /// Transformiert einen Weltpunkt in den lokalen Frame der Pose.
    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.translation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
