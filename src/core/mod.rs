//! Core-Domänentypen: Posen, Geometrie, Trackables, Anker-Set, Provider-Schnittstelle.

pub mod anchor_set;
pub mod geometry;
pub mod pose;
pub mod session_config;
pub mod trackable;
pub mod tracking;

pub use anchor_set::{AnchorSet, AnchorSnapshot, PlacementOutcome};
pub use geometry::{distance, format_distance_cm, midpoint, try_world_to_screen, world_to_screen};
pub use pose::{Pose, TrackingState};
pub use session_config::{
    Availability, CameraConfig, CameraFacing, DepthMode, DisplayGeometry, DisplayRotation,
    FocusMode, PlaneFindingMode, SessionConfig,
};
pub use trackable::{first_qualifying, HitResult, PlaneSnapshot, PointOrientation, Trackable};
pub use tracking::{AnchorHandle, CameraFrame, ProviderError, TrackingProvider};
