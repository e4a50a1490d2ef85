//! AR-Messkern: zwei Anker per Tap setzen, Distanz messen und als Label anzeigen.
//! Core-Funktionalität als Library exportiert für Hosts, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod sim;

pub use app::{FrameOutcome, FrameReport, MeasurementController, MeasurementPhase, SessionError};
pub use core::{
    AnchorHandle, AnchorSet, CameraFrame, HitResult, PlacementOutcome, Pose, ProviderError,
    SessionConfig, TrackingProvider, TrackingState,
};
pub use render::{LogSink, RenderSink};
pub use shared::{FrameScene, LabelEvent, MeasureOptions};
pub use sim::SimulatedProvider;
