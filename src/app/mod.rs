//! Application-Layer: Controller, Session, Tap-Queue und Use-Cases.

pub mod controller;
pub mod events;
pub mod render_scene;
pub mod session;
pub mod state;
pub mod tap_queue;
pub mod use_cases;

pub use controller::MeasurementController;
pub use events::{FrameOutcome, FrameReport};
pub use render_scene::build as build_frame_scene;
pub use session::{select_camera_config, SessionError};
pub use state::{FrameStats, MeasurementPhase};
pub use tap_queue::{QueuedTap, TapQueue, TapSender};
