//! Verwaltung der höchstens zwei Mess-Anker.

use super::tracking::{AnchorHandle, ProviderError};
use super::{first_qualifying, HitResult, Pose, TrackingState};

/// Ergebnis eines Platzierungsversuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Kein qualifizierender Treffer oder Anker abgelehnt, Set unverändert
    NoOp,
    /// Neuer Anker ergänzt (Set hatte 0 oder 1 Anker)
    Placed,
    /// Beide alten Anker gelöst, Set enthält nur den neuen
    Replaced,
}

/// Read-only Sicht auf einen Anker im aktuellen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSnapshot {
    pub pose: Pose,
    pub tracking_state: TrackingState,
}

/// Geordnetes Anker-Paar {erster, zweiter} mit 0–2 Einträgen.
///
/// Ein dritter Anker ersetzt beide vorhandenen (kein Sliding-Window).
pub struct AnchorSet<A: AnchorHandle> {
    anchors: Vec<A>,
}

impl<A: AnchorHandle> AnchorSet<A> {
    /// Maximale Anzahl gleichzeitig lebender Anker.
    pub const MAX_ANCHORS: usize = 2;

    /// Erstellt ein leeres Set.
    pub fn new() -> Self {
        Self {
            anchors: Vec::with_capacity(Self::MAX_ANCHORS),
        }
    }

    /// Anzahl der Anker (0, 1 oder 2).
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Gibt `true` zurück, wenn kein Anker gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Sucht den ersten qualifizierenden Treffer und setzt dort einen Anker.
    ///
    /// `create` wird nur für einen qualifizierenden Treffer aufgerufen. Lehnt es
    /// ab, bleibt das Set unverändert. Erst nach erfolgreicher Erstellung werden
    /// bei vollem Set beide alten Anker gelöst.
    pub fn try_place<F>(&mut self, hits: &[HitResult], create: F) -> PlacementOutcome
    where
        F: FnOnce(&HitResult) -> Result<A, ProviderError>,
    {
        let Some(hit) = first_qualifying(hits) else {
            return PlacementOutcome::NoOp;
        };

        let anchor = match create(hit) {
            Ok(anchor) => anchor,
            Err(e) => {
                log::warn!("Anker-Erstellung abgelehnt, Tap verworfen: {}", e);
                return PlacementOutcome::NoOp;
            }
        };

        let outcome = if self.anchors.len() >= Self::MAX_ANCHORS {
            self.release_all();
            PlacementOutcome::Replaced
        } else {
            PlacementOutcome::Placed
        };
        self.anchors.push(anchor);
        outcome
    }

    /// Schnappschüsse aller Anker in Einfüge-Reihenfolge.
    pub fn snapshots(&self) -> Vec<AnchorSnapshot> {
        self.anchors
            .iter()
            .map(|anchor| AnchorSnapshot {
                pose: anchor.pose(),
                tracking_state: anchor.tracking_state(),
            })
            .collect()
    }

    /// Liefert das vollständige Paar, falls zwei Anker existieren.
    pub fn pair(&self) -> Option<(&A, &A)> {
        match self.anchors.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Iteriert über alle Anker.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.anchors.iter()
    }

    /// Löst alle Anker und leert das Set.
    pub fn release_all(&mut self) {
        for mut anchor in self.anchors.drain(..) {
            anchor.detach();
        }
    }
}

impl<A: AnchorHandle> Default for AnchorSet<A> {
    fn default() -> Self {
        Self::new()
    }
}
