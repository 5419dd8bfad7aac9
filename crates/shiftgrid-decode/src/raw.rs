use serde::{Deserialize, Serialize};

/// One pre-decoded box from a detector that does its own box decoding.
///
/// Corner coordinates are pixels; `class_index` points into the model's
/// class-name table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RawBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub class_index: usize,
    pub confidence: f32,
}

/// Flat prediction tensor: rows of `[x, y, w, h, score_0..score_K]` with
/// coordinates normalized to `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatTensor {
    /// Values per row: 4 box fields plus one score per class.
    pub row_len: usize,
    pub data: Vec<f32>,
}

impl FlatTensor {
    /// Iterate complete rows. Callers must have validated `row_len > 0`.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.row_len)
    }
}

/// Raw inference output, tagged by the upstream detector family.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawOutput {
    /// Pixel-space boxes with per-box class id and confidence.
    Boxes(Vec<RawBox>),
    /// One row per candidate, normalized coordinates, argmax class.
    FlatTensor(FlatTensor),
}
