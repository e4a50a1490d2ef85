//! Use-Cases der Frame-Verarbeitung.

pub mod measurement;
pub mod placement;
