//! Mess-Zustand: Phase der Messung und Frame-Statistik.

use crate::core::{AnchorHandle, AnchorSet};

/// Phase der Messung, abgeleitet aus dem Anker-Set.
///
/// Zyklus: `NoAnchors → OneAnchor → Measuring → OneAnchor (neu) → Measuring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementPhase {
    /// Noch kein Anker gesetzt
    #[default]
    NoAnchors,
    /// Erster Punkt gesetzt, zweiter fehlt
    OneAnchor,
    /// Zwei Anker gesetzt, Distanz wird angezeigt
    Measuring,
}

impl MeasurementPhase {
    /// Leitet die Phase aus der Anzahl der Anker ab.
    pub fn from_anchor_count(count: usize) -> Self {
        match count {
            0 => MeasurementPhase::NoAnchors,
            1 => MeasurementPhase::OneAnchor,
            _ => MeasurementPhase::Measuring,
        }
    }

    /// Leitet die Phase aus einem Anker-Set ab.
    pub fn of<A: AnchorHandle>(anchors: &AnchorSet<A>) -> Self {
        Self::from_anchor_count(anchors.len())
    }
}

/// Zähler für Beobachtbarkeit und Tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Verarbeitete Ticks mit offener Session
    pub frames: u64,
    /// Frames, die wegen eines Fehlers nichts gezeichnet haben
    pub faulted_frames: u64,
    /// Entnommene Taps (inkl. verworfener)
    pub taps_consumed: u64,
    /// Taps, die ohne Kamera-Tracking verworfen wurden
    pub taps_discarded: u64,
    /// Neu gesetzte Anker ohne Ersetzung
    pub anchors_placed: u64,
    /// Platzierungen, die ein volles Paar ersetzt haben
    pub anchors_replaced: u64,
    /// Vom Provider abgelehnte Anker-Erstellungen
    pub anchor_rejections: u64,
}
