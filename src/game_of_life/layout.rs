//! Screen geometry: field area, cell grid and the inverse point lookup

use crate::error::{WorldError, WorldResult};
use serde::{Deserialize, Serialize};

/// Cells larger than this get a grid outline drawn around them
pub const OUTLINE_MIN_CELL_SIZE: usize = 20;

/// How the screen is carved into a status bar and a grid of square cells.
///
/// The field is the screen minus a status bar along the bottom. Whatever does not
/// divide evenly into cells is the remainder, split evenly on both sides of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub screen_width: usize,
    pub screen_height: usize,
    pub cell_size: usize,
    pub field_width: usize,
    pub field_height: usize,
    pub columns: usize,
    pub rows: usize,
    pub remainder_width: usize,
    pub remainder_height: usize,
}

impl Layout {
    pub fn new(
        screen_width: usize,
        screen_height: usize,
        cell_size: usize,
        status_bar_height: usize,
    ) -> WorldResult<Self> {
        let field_width = screen_width;
        let field_height = screen_height.saturating_sub(status_bar_height);
        let invalid = WorldError::InvalidLayout {
            field_width,
            field_height,
            cell_size,
        };

        if cell_size == 0 {
            return Err(invalid);
        }
        let columns = field_width / cell_size;
        let rows = field_height / cell_size;
        if columns == 0 || rows == 0 {
            return Err(invalid);
        }

        Ok(Self {
            screen_width,
            screen_height,
            cell_size,
            field_width,
            field_height,
            columns,
            rows,
            remainder_width: field_width - columns * cell_size,
            remainder_height: field_height - rows * cell_size,
        })
    }

    /// A layout with exactly `columns x rows` cells and no margins or status bar
    pub fn exact(columns: usize, rows: usize, cell_size: usize) -> WorldResult<Self> {
        Self::new(columns * cell_size, rows * cell_size, cell_size, 0)
    }

    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Top-left screen point of a cell
    pub fn cell_origin(&self, index: usize) -> (usize, usize) {
        let (x, y) = (index % self.columns, index / self.columns);
        (
            x * self.cell_size + self.remainder_width / 2,
            y * self.cell_size + self.remainder_height / 2,
        )
    }

    /// Cell under a screen point, `None` in the margins or the status bar
    pub fn cell_index_from_screen_point(&self, px: i64, py: i64) -> Option<usize> {
        let dx = px - (self.remainder_width / 2) as i64;
        let dy = py - (self.remainder_height / 2) as i64;
        if dx < 0 || dy < 0 {
            return None;
        }

        let x = dx as usize / self.cell_size;
        let y = dy as usize / self.cell_size;
        if x < self.columns && y < self.rows {
            Some(x + y * self.columns)
        } else {
            None
        }
    }

    /// Whether cells are large enough to be outlined
    pub fn draws_outlines(&self) -> bool {
        self.cell_size > OUTLINE_MIN_CELL_SIZE
    }

    /// Baseline of the status bar text
    pub fn status_y(&self) -> usize {
        self.field_height + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_geometry() {
        let layout = Layout::new(1920, 1040, 6, 40).unwrap();
        assert_eq!(layout.field_height, 1000);
        assert_eq!(layout.columns, 320);
        assert_eq!(layout.rows, 166);
        assert_eq!(layout.remainder_width, 0);
        assert_eq!(layout.remainder_height, 4);
        assert_eq!(layout.cell_count(), 53_120);
    }

    #[test]
    fn test_point_lookup_inverts_origin() {
        let layout = Layout::new(103, 90, 10, 20).unwrap();
        assert_eq!((layout.columns, layout.rows), (10, 7));
        for index in [0, 9, 35, 69] {
            let (x, y) = layout.cell_origin(index);
            assert_eq!(layout.cell_index_from_screen_point(x as i64, y as i64), Some(index));
            assert_eq!(layout.cell_index_from_screen_point(x as i64 + 9, y as i64 + 9), Some(index));
        }
    }

    #[test]
    fn test_points_outside_grid() {
        let layout = Layout::new(103, 90, 10, 20).unwrap();
        // margins are 3 wide and 0 high, split 1 / 2
        assert_eq!(layout.cell_index_from_screen_point(0, 5), None);
        assert_eq!(layout.cell_index_from_screen_point(101, 5), None);
        assert_eq!(layout.cell_index_from_screen_point(-40, -40), None);
        // status bar
        assert_eq!(layout.cell_index_from_screen_point(50, 75), None);
        assert_eq!(layout.cell_index_from_screen_point(50, 69), Some(64));
    }

    #[test]
    fn test_rejects_degenerate_layouts() {
        assert!(Layout::new(100, 100, 0, 40).is_err());
        assert!(Layout::new(100, 30, 10, 40).is_err());
        assert!(Layout::new(5, 100, 10, 0).is_err());
    }

    #[test]
    fn test_outlines_only_for_large_cells() {
        assert!(!Layout::exact(4, 4, 20).unwrap().draws_outlines());
        assert!(Layout::exact(4, 4, 21).unwrap().draws_outlines());
    }
}
