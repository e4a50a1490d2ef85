//! Reine Geometrie-Funktionen: Distanz, Mittelpunkt, Welt→Screen-Projektion.
//!
//! Keine Funktion wirft oder loggt. NaN in den Eingaben propagiert ins Ergebnis.

use super::Pose;
use glam::{Mat4, Vec2};

/// Unterhalb dieses |w| gilt ein Punkt als auf/hinter der Kamera.
pub const MIN_CLIP_W: f32 = 1e-6;

/// Euklidischer Abstand der Translationen zweier Posen (Meter).
pub fn distance(a: &Pose, b: &Pose) -> f32 {
    (a.translation - b.translation).length()
}

/// Arithmetisches Mittel der Translationen.
///
/// Die Orientierung ist bedeutungslos und wird auf Identität gesetzt.
pub fn midpoint(a: &Pose, b: &Pose) -> Pose {
    Pose::from_translation((a.translation + b.translation) * 0.5)
}

/// Projiziert die Translation einer Pose in Pixel-Koordinaten (Ursprung oben links).
///
/// Welt → View → Clip, perspektivische Division durch w, NDC [-1, 1] → Pixel
/// mit gespiegelter Y-Achse. Bei w ≈ 0 ist das Ergebnis undefiniert, der
/// Aufrufer muss vorher über den Tracking-Zustand absichern.
pub fn world_to_screen(pose: &Pose, view: &Mat4, projection: &Mat4, viewport: Vec2) -> Vec2 {
    let clip = *projection * (*view * pose.translation.extend(1.0));
    let ndc = Vec2::new(clip.x, clip.y) / clip.w;
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    )
}

/// Wie [`world_to_screen`], liefert aber `None` für Punkte mit w ≤ [`MIN_CLIP_W`].
pub fn try_world_to_screen(
    pose: &Pose,
    view: &Mat4,
    projection: &Mat4,
    viewport: Vec2,
) -> Option<Vec2> {
    let clip = *projection * (*view * pose.translation.extend(1.0));
    if clip.w.is_nan() || clip.w <= MIN_CLIP_W {
        return None;
    }
    Some(world_to_screen(pose, view, projection, viewport))
}

/// Formatiert eine Distanz in Metern als Zentimeter-Text, z.B. `"100.0 cm"`.
pub fn format_distance_cm(distance_m: f32, decimals: usize) -> String {
    format!("{:.*} cm", decimals, distance_m * 100.0)
}
