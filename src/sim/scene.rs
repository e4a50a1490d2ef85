//! Szenen-Elemente und Ray-Casting des simulierten Providers.

use crate::core::{HitResult, PlaneSnapshot, PointOrientation, Pose, Trackable, TrackingState};
use glam::{Vec2, Vec3};

/// Maximaler Abstand Strahl → Feature-Point für einen Treffer (Meter).
pub const POINT_HIT_RADIUS: f32 = 0.05;

/// Simulierte planare Fläche. Normale ist die lokale +Y-Achse.
#[derive(Debug, Clone, PartialEq)]
pub struct SimPlane {
    pub plane_id: u64,
    pub center_pose: Pose,
    /// Begrenzendes Polygon in der lokalen XZ-Ebene
    pub polygon: Vec<Vec2>,
    pub tracking_state: TrackingState,
    pub subsumed_by: Option<u64>,
}

impl SimPlane {
    /// Horizontale, quadratische Fläche mit halber Kantenlänge `half_extent`.
    pub fn horizontal(plane_id: u64, center: Vec3, half_extent: f32) -> Self {
        let e = half_extent;
        Self {
            plane_id,
            center_pose: Pose::from_translation(center),
            polygon: vec![
                Vec2::new(-e, -e),
                Vec2::new(e, -e),
                Vec2::new(e, e),
                Vec2::new(-e, e),
            ],
            tracking_state: TrackingState::Tracking,
            subsumed_by: None,
        }
    }

    /// Schnappschuss für `tracked_planes`.
    pub fn snapshot(&self) -> PlaneSnapshot {
        PlaneSnapshot {
            plane_id: self.plane_id,
            center_pose: self.center_pose,
            tracking_state: self.tracking_state,
            subsumed_by: self.subsumed_by,
        }
    }

    /// Schneidet den Strahl mit der Flächenebene (Polygon wird nur markiert).
    fn intersect(&self, origin: Vec3, dir: Vec3) -> Option<HitResult> {
        if !self.tracking_state.is_tracking() {
            return None;
        }
        let normal = self.center_pose.rotation * Vec3::Y;
        let denom = normal.dot(dir);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (self.center_pose.translation - origin).dot(normal) / denom;
        if t <= 0.0 {
            return None;
        }
        let hit = origin + dir * t;
        let local = self.center_pose.inverse_transform_point(hit);
        Some(HitResult {
            pose: Pose::new(hit, self.center_pose.rotation),
            distance: t,
            trackable: Trackable::Plane {
                plane_id: self.plane_id,
                contains_hit: point_in_polygon(Vec2::new(local.x, local.z), &self.polygon),
                subsumed: self.subsumed_by.is_some(),
            },
        })
    }
}

/// Simulierter Feature-Point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimFeaturePoint {
    pub point_id: u64,
    pub position: Vec3,
    pub orientation: PointOrientation,
}

impl SimFeaturePoint {
    fn intersect(&self, origin: Vec3, dir: Vec3) -> Option<HitResult> {
        let t = (self.position - origin).dot(dir);
        if t <= 0.0 {
            return None;
        }
        let closest = origin + dir * t;
        if closest.distance(self.position) > POINT_HIT_RADIUS {
            return None;
        }
        Some(HitResult {
            pose: Pose::from_translation(self.position),
            distance: t,
            trackable: Trackable::Point {
                point_id: self.point_id,
                orientation: self.orientation,
            },
        })
    }
}

/// Alle Treffer eines Strahls, nach Distanz sortiert.
pub(crate) fn cast_ray(
    origin: Vec3,
    dir: Vec3,
    planes: &[SimPlane],
    points: &[SimFeaturePoint],
) -> Vec<HitResult> {
    let mut hits: Vec<HitResult> = planes
        .iter()
        .filter_map(|plane| plane.intersect(origin, dir))
        .chain(points.iter().filter_map(|point| point.intersect(origin, dir)))
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    if ab.perp_dot(ap).abs() > 1e-4 {
        return false;
    }
    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, Rand zählt als innen).
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        // Die Straddle-Bedingung garantiert previous.y != current.y
        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x);

        if intersect {
            inside = !inside;
        }

        previous = current;
    }

    inside
}
