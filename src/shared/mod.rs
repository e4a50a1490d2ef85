//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::MeasureOptions;
pub use options::{FAR_CLIP, NEAR_CLIP};
pub use render_scene::{FrameScene, LabelEvent, LineDraw, MarkerDraw, PlaneDraw, SceneCamera};
