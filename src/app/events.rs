//! Ergebnis-Typen eines Frame-Ticks.

use super::state::MeasurementPhase;
use crate::core::{PlacementOutcome, TrackingState};
use crate::shared::LabelEvent;

/// Was in einem gezeichneten Frame passiert ist.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Tracking-Zustand der Kamera in diesem Frame
    pub camera_tracking: TrackingState,
    /// Ergebnis der Tap-Verarbeitung (None = kein Tap ausgewertet)
    pub placement: Option<PlacementOutcome>,
    /// An das Label gesendete Anweisung
    pub label: LabelEvent,
    /// Phase nach diesem Frame
    pub phase: MeasurementPhase,
}

/// Ergebnis eines `tick`-Aufrufs.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Frame wurde verarbeitet und an den Sink übergeben
    Drawn(FrameReport),
    /// Keine Session (abgebaut oder vom Provider geschlossen)
    NoSession,
    /// Session pausiert, kein Frame verarbeitet
    Paused,
    /// Fehler im Frame, nichts gezeichnet; der nächste Frame läuft normal
    Faulted,
}

impl FrameOutcome {
    /// Report eines gezeichneten Frames.
    pub fn report(&self) -> Option<&FrameReport> {
        match self {
            FrameOutcome::Drawn(report) => Some(report),
            _ => None,
        }
    }

    /// Label-Anweisung dieses Frames (None, wenn nichts gezeichnet wurde).
    pub fn label(&self) -> Option<&LabelEvent> {
        self.report().map(|report| &report.label)
    }
}
