//! Use-Case: Distanz-Label aus dem Anker-Paar berechnen.

use crate::core::{
    distance, format_distance_cm, midpoint, try_world_to_screen, AnchorHandle, AnchorSet,
    CameraFrame,
};
use crate::shared::{LabelEvent, MeasureOptions};
use glam::Vec2;

/// Berechnet die Label-Anweisung für den aktuellen Frame.
///
/// Sichtbar nur bei getrackter Kamera, bekanntem Viewport und genau zwei
/// getrackten Ankern. Das Label sitzt auf dem in den Screen projizierten Mittelpunkt.
pub fn label_for<A: AnchorHandle>(
    anchors: &AnchorSet<A>,
    frame: &CameraFrame,
    viewport: Option<Vec2>,
    options: &MeasureOptions,
) -> LabelEvent {
    if !frame.tracking_state.is_tracking() {
        return LabelEvent::Hide;
    }
    let Some(viewport) = viewport else {
        return LabelEvent::Hide;
    };
    let Some((first, second)) = anchors.pair() else {
        return LabelEvent::Hide;
    };
    if !first.tracking_state().is_tracking() || !second.tracking_state().is_tracking() {
        return LabelEvent::Hide;
    }

    let (start, end) = (first.pose(), second.pose());
    let distance_m = distance(&start, &end);
    let center = midpoint(&start, &end);

    match try_world_to_screen(
        &center,
        &frame.view_matrix,
        &frame.projection_matrix,
        viewport,
    ) {
        Some(screen_pos) => LabelEvent::Show {
            text: format_distance_cm(distance_m, options.label_decimals),
            screen_pos,
            distance_m,
        },
        None => {
            log::warn!("Mess-Mittelpunkt liegt hinter der Kamera, Label ausgeblendet");
            LabelEvent::Hide
        }
    }
}
