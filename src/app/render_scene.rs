//! Builder für Frame-Szenen aus Kamera-Frame, Flächen und Anker-Set.

use crate::core::{AnchorHandle, AnchorSet, CameraFrame, PlaneSnapshot};
use crate::shared::{
    FrameScene, LabelEvent, LineDraw, MarkerDraw, MeasureOptions, PlaneDraw, SceneCamera,
};

/// Baut die FrameScene für einen Frame.
///
/// Ohne Kamera-Tracking enthält die Szene nur den Hintergrund und blendet
/// das Label aus, unabhängig von `label`.
pub fn build<A: AnchorHandle>(
    frame: &CameraFrame,
    planes: &[PlaneSnapshot],
    anchors: &AnchorSet<A>,
    label: LabelEvent,
    options: &MeasureOptions,
) -> FrameScene {
    if !frame.tracking_state.is_tracking() {
        return FrameScene::background_only();
    }

    let planes = planes
        .iter()
        .filter(|plane| plane.is_drawable())
        .map(|plane| PlaneDraw {
            plane_id: plane.plane_id,
            center_pose: plane.center_pose,
            color: options.plane_color,
        })
        .collect();

    let line = anchors
        .pair()
        .filter(|(a, b)| a.tracking_state().is_tracking() && b.tracking_state().is_tracking())
        .map(|(a, b)| LineDraw {
            start: a.pose(),
            end: b.pose(),
            color: options.line_color,
            width_px: options.line_width_px,
        });

    let markers = anchors
        .iter()
        .filter(|anchor| anchor.tracking_state().is_tracking())
        .map(|anchor| MarkerDraw {
            pose: anchor.pose(),
            color: options.anchor_color,
        })
        .collect();

    FrameScene {
        camera: Some(SceneCamera {
            view: frame.view_matrix,
            projection: frame.projection_matrix,
        }),
        planes,
        line,
        markers,
        label,
    }
}
