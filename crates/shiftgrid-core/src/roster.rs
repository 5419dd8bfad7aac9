use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Detection, GridCell, ImageSize, RosterGrid, ShiftRegistry};

/// One grid-ordered day slot of the recognized roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// 0-based offset from the first day of the month.
    pub day_index: u32,
    /// Recognized shift code; `None` when the detected label is not a
    /// registry key.
    pub shift_code: Option<String>,
    pub confidence: f32,
}

/// Order detections into day slots.
///
/// Detections whose centroid falls outside the grid are dropped. Survivors
/// are sorted row-major (row 0 is the first week, left to right); two
/// detections landing in the same cell keep decoder output order. The
/// result is truncated to `days_in_month` entries, so `day_index` values
/// are contiguous `0..len`.
pub fn assemble(
    detections: &[Detection],
    grid: &RosterGrid,
    image: ImageSize,
    days_in_month: u32,
    class_names: &[String],
    registry: &ShiftRegistry,
) -> Vec<RosterEntry> {
    let mut placed: Vec<(GridCell, &Detection)> = detections
        .iter()
        .filter_map(|det| grid.cell_at(det.center, image).map(|cell| (cell, det)))
        .collect();

    let off_grid = detections.len() - placed.len();
    if off_grid > 0 {
        debug!("discarded {off_grid} off-grid detections");
    }

    placed.sort_by_key(|(cell, _)| *cell);

    if placed.len() > days_in_month as usize {
        debug!(
            "truncating {} on-grid detections to {days_in_month} days",
            placed.len()
        );
        placed.truncate(days_in_month as usize);
    }

    placed
        .into_iter()
        .enumerate()
        .map(|(day, (_, det))| RosterEntry {
            day_index: day as u32,
            shift_code: resolve_code(det.class_index, class_names, registry),
            confidence: det.confidence,
        })
        .collect()
}

fn resolve_code(
    class_index: usize,
    class_names: &[String],
    registry: &ShiftRegistry,
) -> Option<String> {
    let label = class_names.get(class_index)?;
    registry.contains(label).then(|| label.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    const IMAGE: ImageSize = ImageSize {
        width: 700,
        height: 600,
    };

    fn det_in_cell(row: u32, col: u32, class_index: usize, confidence: f32) -> Detection {
        // cell centers for the default 6x7 grid on a 700x600 image
        Detection {
            center: Point2::new(col as f32 * 100.0 + 50.0, row as f32 * 100.0 + 50.0),
            class_index,
            confidence,
        }
    }

    fn names(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sorts_row_major() {
        let detections = vec![det_in_cell(1, 0, 1, 0.9), det_in_cell(0, 3, 0, 0.8)];
        let entries = assemble(
            &detections,
            &RosterGrid::default(),
            IMAGE,
            31,
            &names(&["F01", "S01"]),
            &ShiftRegistry::builtin(),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].day_index, 0);
        assert_eq!(entries[0].shift_code.as_deref(), Some("F01"));
        assert_eq!(entries[1].day_index, 1);
        assert_eq!(entries[1].shift_code.as_deref(), Some("S01"));
    }

    #[test]
    fn truncates_to_month_length() {
        let detections: Vec<Detection> = (0..35)
            .map(|i| det_in_cell(i / 7, i % 7, 0, 0.9))
            .collect();
        let entries = assemble(
            &detections,
            &RosterGrid::default(),
            IMAGE,
            30,
            &names(&["F01"]),
            &ShiftRegistry::builtin(),
        );
        assert_eq!(entries.len(), 30);
        let indices: Vec<u32> = entries.iter().map(|e| e.day_index).collect();
        assert_eq!(indices, (0..30).collect::<Vec<u32>>());
    }

    #[test]
    fn drops_off_grid_detections() {
        let mut off_grid = det_in_cell(0, 0, 0, 0.9);
        off_grid.center = Point2::new(-5.0, 20.0);
        let detections = vec![off_grid, det_in_cell(0, 1, 0, 0.9)];
        let entries = assemble(
            &detections,
            &RosterGrid::default(),
            IMAGE,
            31,
            &names(&["F01"]),
            &ShiftRegistry::builtin(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].day_index, 0);
    }

    #[test]
    fn unrecognized_label_keeps_entry_without_code() {
        let detections = vec![det_in_cell(0, 0, 0, 0.7)];
        let entries = assemble(
            &detections,
            &RosterGrid::default(),
            IMAGE,
            31,
            &names(&["URLAUB"]),
            &ShiftRegistry::builtin(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].shift_code, None);
        assert_eq!(entries[0].confidence, 0.7);
    }

    #[test]
    fn out_of_range_class_index_keeps_entry_without_code() {
        let detections = vec![det_in_cell(0, 0, 7, 0.7)];
        let entries = assemble(
            &detections,
            &RosterGrid::default(),
            IMAGE,
            31,
            &names(&["F01"]),
            &ShiftRegistry::builtin(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].shift_code, None);
    }

    #[test]
    fn same_cell_detections_keep_input_order() {
        let mut first = det_in_cell(2, 2, 0, 0.6);
        let mut second = det_in_cell(2, 2, 1, 0.9);
        // both inside cell (2, 2), at different pixels
        first.center = Point2::new(210.0, 210.0);
        second.center = Point2::new(290.0, 290.0);
        let entries = assemble(
            &[first, second],
            &RosterGrid::default(),
            IMAGE,
            31,
            &names(&["F01", "S01"]),
            &ShiftRegistry::builtin(),
        );
        assert_eq!(entries[0].shift_code.as_deref(), Some("F01"));
        assert_eq!(entries[1].shift_code.as_deref(), Some("S01"));
    }
}
