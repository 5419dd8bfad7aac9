//! Raw detector-output decoding.
//!
//! Two upstream detector families are supported: detectors that hand back
//! pre-decoded pixel-space boxes, and detectors that emit a flat prediction
//! tensor with per-class scores. The caller supplies the discriminant via
//! [`RawOutput`]; the decoder never sniffs shapes at runtime.

mod decode;
mod raw;

pub use decode::{decode, DecodeError, DEFAULT_CONFIDENCE_THRESHOLD};
pub use raw::{FlatTensor, RawBox, RawOutput};
