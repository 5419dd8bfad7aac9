use log::trace;
use nalgebra::Point2;

use shiftgrid_core::{Detection, ImageSize};

use crate::raw::{FlatTensor, RawBox, RawOutput};

/// Detections below this confidence are dropped unless the caller overrides
/// the threshold.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Fatal decoding failures: the raw output does not have a shape this
/// decoder understands. Surfaced before any calendar output is written.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("flat tensor rows carry {row_len} values, need at least 5 (x, y, w, h, one class score)")]
    RowTooShort { row_len: usize },

    #[error("flat tensor length {len} is not a multiple of row length {row_len}")]
    RaggedTensor { len: usize, row_len: usize },
}

/// Decode raw detector output into confidence-filtered detections.
///
/// A detection is kept iff `confidence >= threshold`. Output order follows
/// input order; empty input decodes to an empty vec, never an error.
pub fn decode(
    raw: &RawOutput,
    image: ImageSize,
    threshold: f32,
) -> Result<Vec<Detection>, DecodeError> {
    let detections = match raw {
        RawOutput::Boxes(boxes) => decode_boxes(boxes, threshold),
        RawOutput::FlatTensor(tensor) => decode_flat(tensor, image, threshold)?,
    };
    trace!("decoded {} detections above threshold {threshold}", detections.len());
    Ok(detections)
}

fn decode_boxes(boxes: &[RawBox], threshold: f32) -> Vec<Detection> {
    boxes
        .iter()
        .filter(|b| b.confidence >= threshold)
        .map(|b| Detection {
            center: Point2::new((b.x1 + b.x2) * 0.5, (b.y1 + b.y2) * 0.5),
            class_index: b.class_index,
            confidence: b.confidence,
        })
        .collect()
}

fn decode_flat(
    tensor: &FlatTensor,
    image: ImageSize,
    threshold: f32,
) -> Result<Vec<Detection>, DecodeError> {
    if tensor.data.is_empty() {
        return Ok(Vec::new());
    }
    if tensor.row_len < 5 {
        return Err(DecodeError::RowTooShort {
            row_len: tensor.row_len,
        });
    }
    if tensor.data.len() % tensor.row_len != 0 {
        return Err(DecodeError::RaggedTensor {
            len: tensor.data.len(),
            row_len: tensor.row_len,
        });
    }

    let mut detections = Vec::new();
    for row in tensor.rows() {
        let (class_index, confidence) = argmax(&row[4..]);
        if confidence < threshold {
            continue;
        }
        detections.push(Detection {
            center: Point2::new(row[0] * image.width as f32, row[1] * image.height as f32),
            class_index,
            confidence,
        });
    }
    Ok(detections)
}

/// Index and value of the highest score; ties pick the lowest index.
fn argmax(scores: &[f32]) -> (usize, f32) {
    let mut best = (0, scores[0]);
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if score > best.1 {
            best = (idx, score);
        }
    }
    best
}
