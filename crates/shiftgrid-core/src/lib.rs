//! Core types and roster assembly for duty-roster grid recognition.
//!
//! This crate is intentionally small and free of any inference backend or
//! image codec. It knows about image *dimensions*, detection centroids, the
//! fixed roster grid and the shift-time table — never raw pixels or model
//! weights.

mod detection;
mod grid;
mod logger;
mod roster;
mod shifts;

pub use detection::Detection;
pub use grid::{GridCell, ImageSize, RosterGrid};
pub use roster::{assemble, RosterEntry};
pub use shifts::{ShiftRegistry, ShiftWindow};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
