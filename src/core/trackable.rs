//! Trackables, Hit-Test-Ergebnisse und die Qualifikationsregel für Anker.

use super::{Pose, TrackingState};

/// Wie die Orientierung eines Feature-Points bestimmt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOrientation {
    /// Orientierung ist nur die Identität (keine Oberflächeninformation)
    InitializedToIdentity,
    /// Orientierung folgt einer geschätzten Oberflächennormale
    EstimatedSurfaceNormal,
}

/// Art des getroffenen Trackables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trackable {
    /// Erkannte planare Fläche
    Plane {
        plane_id: u64,
        /// Liegt der Trefferpunkt innerhalb des begrenzenden Polygons?
        contains_hit: bool,
        /// Fläche wurde von einer anderen Fläche geschluckt
        subsumed: bool,
    },
    /// Einzelner Feature-Point
    Point {
        point_id: u64,
        orientation: PointOrientation,
    },
}

impl Trackable {
    /// Darf auf diesem Treffer ein Anker entstehen?
    ///
    /// Fläche: Treffer im Polygon und nicht subsumiert.
    /// Feature-Point: nur mit geschätzter Oberflächennormale.
    pub fn accepts_anchor(&self) -> bool {
        match *self {
            Trackable::Plane {
                contains_hit,
                subsumed,
                ..
            } => contains_hit && !subsumed,
            Trackable::Point { orientation, .. } => {
                orientation == PointOrientation::EstimatedSurfaceNormal
            }
        }
    }
}

/// Einzelner Kandidat eines Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Pose des Schnittpunkts
    pub pose: Pose,
    /// Abstand Kamera → Schnittpunkt (Meter)
    pub distance: f32,
    /// Getroffenes Trackable
    pub trackable: Trackable,
}

impl HitResult {
    /// Gibt `true` zurück, wenn der Treffer einen Anker tragen darf.
    pub fn qualifies(&self) -> bool {
        self.trackable.accepts_anchor()
    }
}

/// Erster qualifizierender Treffer in Ranking-Reihenfolge.
pub fn first_qualifying(hits: &[HitResult]) -> Option<&HitResult> {
    hits.iter().find(|hit| hit.qualifies())
}

/// Schnappschuss einer vom Provider getrackten Fläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSnapshot {
    pub plane_id: u64,
    /// Mittelpunkt-Pose der Fläche
    pub center_pose: Pose,
    pub tracking_state: TrackingState,
    /// ID der Fläche, die diese subsumiert hat
    pub subsumed_by: Option<u64>,
}

impl PlaneSnapshot {
    /// Wird die Fläche in diesem Frame gezeichnet?
    pub fn is_drawable(&self) -> bool {
        self.tracking_state.is_tracking() && self.subsumed_by.is_none()
    }
}
