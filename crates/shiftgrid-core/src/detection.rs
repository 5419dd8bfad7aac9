use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One candidate shift-code recognition.
///
/// Produced fresh by the decoder for a single inference run and discarded
/// after assembly. `confidence` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Detection {
    /// Box centroid in pixel coordinates.
    pub center: Point2<f32>,
    /// Index into the model's class-name table.
    pub class_index: usize,
    pub confidence: f32,
}
