use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the roster photograph.
///
/// The pipeline never reads pixel data; the dimensions are all it needs to
/// carve the image into grid cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// One cell of the printed roster grid.
///
/// Rows are weeks, columns are weekdays. Ordering is derived field-by-field,
/// so sorting cells yields row-major order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

/// Fixed logical grid printed on the roster sheet.
///
/// The reference layout is six weekly rows by seven weekday columns; 42
/// cells cover any month.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RosterGrid {
    pub rows: u32,
    pub cols: u32,
}

impl Default for RosterGrid {
    fn default() -> Self {
        Self { rows: 6, cols: 7 }
    }
}

impl RosterGrid {
    /// Map a detection centroid to its grid cell.
    ///
    /// Returns `None` for centroids outside the drawn grid; the exact
    /// right/bottom image border already counts as outside.
    pub fn cell_at(&self, center: Point2<f32>, image: ImageSize) -> Option<GridCell> {
        if image.width == 0 || image.height == 0 {
            return None;
        }
        let cell_w = image.width as f32 / self.cols as f32;
        let cell_h = image.height as f32 / self.rows as f32;
        let col = (center.x / cell_w).floor();
        let row = (center.y / cell_h).floor();
        if row < 0.0 || col < 0.0 || row >= self.rows as f32 || col >= self.cols as f32 {
            return None;
        }
        Some(GridCell {
            row: row as u32,
            col: col as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: ImageSize = ImageSize {
        width: 700,
        height: 600,
    };

    #[test]
    fn interior_points_map_into_bounds() {
        let grid = RosterGrid::default();
        for x in (0..700).step_by(35) {
            for y in (0..600).step_by(25) {
                let cell = grid
                    .cell_at(Point2::new(x as f32, y as f32), IMAGE)
                    .expect("interior point must land in a cell");
                assert!(cell.row < grid.rows);
                assert!(cell.col < grid.cols);
            }
        }
    }

    #[test]
    fn cell_indices_follow_centroid() {
        let grid = RosterGrid::default();
        // cell (2, 3) spans x in [300, 400), y in [200, 300)
        let cell = grid.cell_at(Point2::new(350.0, 250.0), IMAGE).unwrap();
        assert_eq!(cell, GridCell { row: 2, col: 3 });
    }

    #[test]
    fn image_border_is_off_grid() {
        let grid = RosterGrid::default();
        assert_eq!(grid.cell_at(Point2::new(700.0, 10.0), IMAGE), None);
        assert_eq!(grid.cell_at(Point2::new(10.0, 600.0), IMAGE), None);
    }

    #[test]
    fn negative_centroids_are_off_grid() {
        let grid = RosterGrid::default();
        assert_eq!(grid.cell_at(Point2::new(-1.0, 10.0), IMAGE), None);
        assert_eq!(grid.cell_at(Point2::new(10.0, -0.5), IMAGE), None);
    }

    #[test]
    fn last_pixel_maps_to_last_cell() {
        let grid = RosterGrid::default();
        let cell = grid.cell_at(Point2::new(699.9, 599.9), IMAGE).unwrap();
        assert_eq!(cell, GridCell { row: 5, col: 6 });
    }
}
