//! High-level facade for the `shiftgrid-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the underlying stage crates
//! - end-to-end helpers that turn raw detector output for one roster
//!   photograph into iCalendar text.
//!
//! ## Quickstart
//!
//! ```
//! use shiftgrid::{parse_roster_default, ImageSize, Month, RawBox, RawOutput};
//!
//! let raw = RawOutput::Boxes(vec![RawBox {
//!     x1: 30.0,
//!     y1: 20.0,
//!     x2: 70.0,
//!     y2: 60.0,
//!     class_index: 0,
//!     confidence: 0.93,
//! }]);
//! let image = ImageSize { width: 700, height: 600 };
//! let month = Month::new(2024, 3).expect("valid month");
//!
//! let calendar = parse_roster_default(&raw, image, &["F01".to_string()], month)?;
//! assert!(calendar.contains("SUMMARY:F01"));
//! # Ok::<(), shiftgrid::PipelineError>(())
//! ```
//!
//! ## API map
//! - [`core`](shiftgrid_core): grid geometry, detections, shift registry,
//!   roster assembly.
//! - [`decode`](shiftgrid_decode): raw detector-output decoding.
//! - [`ics`](shiftgrid_ics): month arithmetic and calendar emission.

pub use shiftgrid_core as core;
pub use shiftgrid_decode as decode;
pub use shiftgrid_ics as ics;

pub use shiftgrid_core::{
    assemble, Detection, GridCell, ImageSize, RosterEntry, RosterGrid, ShiftRegistry, ShiftWindow,
};
pub use shiftgrid_decode::{
    DecodeError, FlatTensor, RawBox, RawOutput, DEFAULT_CONFIDENCE_THRESHOLD,
};
pub use shiftgrid_ics::{write_calendar, Month, DEFAULT_TIMEZONE};

mod pipeline;
pub use pipeline::{assemble_roster, parse_roster, parse_roster_default, PipelineError, RosterParams};
