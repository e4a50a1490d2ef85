//! Anker des simulierten Providers.

use crate::core::{AnchorHandle, Pose, TrackingState};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Zwischen Provider und Anker-Handle geteilter Zustand.
#[derive(Debug)]
pub(crate) struct AnchorShared {
    pub(crate) id: u64,
    pub(crate) pose: Pose,
    state: AtomicU8,
    detached: AtomicBool,
}

impl AnchorShared {
    pub(crate) fn new(id: u64, pose: Pose) -> Self {
        Self {
            id,
            pose,
            state: AtomicU8::new(encode(TrackingState::Tracking)),
            detached: AtomicBool::new(false),
        }
    }

    pub(crate) fn tracking_state(&self) -> TrackingState {
        if self.is_detached() {
            return TrackingState::Stopped;
        }
        decode(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn set_tracking_state(&self, state: TrackingState) {
        self.state.store(encode(state), Ordering::Release);
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }

    pub(crate) fn detach(&self) {
        self.detached.store(true, Ordering::Release);
    }
}

fn encode(state: TrackingState) -> u8 {
    match state {
        TrackingState::Tracking => 0,
        TrackingState::Paused => 1,
        TrackingState::Stopped => 2,
    }
}

fn decode(value: u8) -> TrackingState {
    match value {
        0 => TrackingState::Tracking,
        1 => TrackingState::Paused,
        _ => TrackingState::Stopped,
    }
}

/// Handle auf einen weltfesten simulierten Anker.
#[derive(Debug)]
pub struct SimAnchor {
    shared: Arc<AnchorShared>,
}

impl SimAnchor {
    pub(crate) fn new(shared: Arc<AnchorShared>) -> Self {
        Self { shared }
    }

    /// Provider-weite Anker-ID.
    pub fn id(&self) -> u64 {
        self.shared.id
    }

    /// Gibt `true` zurück, wenn der Anker gelöst wurde.
    pub fn is_detached(&self) -> bool {
        self.shared.is_detached()
    }
}

impl AnchorHandle for SimAnchor {
    fn pose(&self) -> Pose {
        self.shared.pose
    }

    fn tracking_state(&self) -> TrackingState {
        self.shared.tracking_state()
    }

    fn detach(&mut self) {
        self.shared.detach();
    }
}
