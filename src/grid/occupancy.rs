//! Occupancy grid storage.
//!
//! A flat row-major array of cell states derived from one floorplan image.
//! The grid is built fresh per request and never mutated afterwards; it also
//! owns the coordinate mapping between normalized request coordinates, cell
//! indices, and display pixels, since all three are fixed by the same
//! `cell_size` discretization.

use crate::core::{CellState, GridCell, NormalizedPoint, PixelPoint};

/// Traversability grid over a discretized floorplan.
///
/// Cell `(row, col)` covers the pixel block from
/// `(row * cell_size, col * cell_size)` (inclusive) to
/// `((row + 1) * cell_size, (col + 1) * cell_size)` (exclusive).
/// Trailing partial blocks at the image edge are not represented.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    /// Cell states (CellState as u8: Blocked=0, Free=1), row-major
    states: Vec<u8>,
    /// Grid width in cells (columns)
    width: usize,
    /// Grid height in cells (rows)
    height: usize,
    /// Pixels per cell edge
    cell_size: u32,
    /// Source image width in pixels
    image_width: u32,
    /// Source image height in pixels
    image_height: u32,
}

impl OccupancyGrid {
    /// Create a grid with every cell free.
    pub fn new(
        width: usize,
        height: usize,
        cell_size: u32,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        Self {
            states: vec![CellState::Free as u8; width * height],
            width,
            height,
            cell_size,
            image_width,
            image_height,
        }
    }

    /// Build a grid from `.`/`#` rows (free/blocked). Rows must be equal
    /// length. Image dimensions are derived from the cell size.
    pub fn from_rows(rows: &[&str], cell_size: u32) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut grid = Self::new(
            width,
            height,
            cell_size,
            width as u32 * cell_size,
            height as u32 * cell_size,
        );

        for (row, line) in rows.iter().enumerate() {
            debug_assert_eq!(line.len(), width, "ragged grid rows");
            for (col, ch) in line.chars().enumerate() {
                let state = if ch == '#' {
                    CellState::Blocked
                } else {
                    CellState::Free
                };
                grid.set_state(GridCell::new(row as i32, col as i32), state);
            }
        }

        grid
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels per cell edge
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Source image width in pixels
    #[inline]
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Source image height in pixels
    #[inline]
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Check if cell indices are within grid bounds
    #[inline]
    pub fn is_valid_coord(&self, cell: GridCell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    /// State of a cell. Out-of-bounds cells read as `Blocked`.
    #[inline]
    pub fn state(&self, cell: GridCell) -> CellState {
        if !self.is_valid_coord(cell) {
            return CellState::Blocked;
        }
        CellState::from_u8(self.states[cell.row as usize * self.width + cell.col as usize])
    }

    /// Set the state of an in-bounds cell. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_state(&mut self, cell: GridCell, state: CellState) {
        if self.is_valid_coord(cell) {
            self.states[cell.row as usize * self.width + cell.col as usize] = state as u8;
        }
    }

    /// Is the cell in bounds and free?
    #[inline]
    pub fn is_free(&self, cell: GridCell) -> bool {
        self.state(cell).is_free()
    }

    /// Check if line-of-sight is clear between two cells.
    ///
    /// Walks the discrete line with integer Bresenham stepping and returns
    /// `false` on the first blocked (or out-of-bounds) cell, endpoints
    /// included.
    pub fn line_of_sight(&self, from: GridCell, to: GridCell) -> bool {
        let mut row = from.row;
        let mut col = from.col;

        let drow = (to.row - from.row).abs();
        let dcol = (to.col - from.col).abs();
        let srow = if to.row > from.row { 1 } else { -1 };
        let scol = if to.col > from.col { 1 } else { -1 };
        let mut err = dcol - drow;

        loop {
            if !self.is_free(GridCell::new(row, col)) {
                return false;
            }

            if row == to.row && col == to.col {
                break;
            }

            let e2 = 2 * err;
            if e2 > -drow {
                err -= drow;
                col += scol;
            }
            if e2 < dcol {
                err += dcol;
                row += srow;
            }
        }

        true
    }

    /// Resolve a normalized request coordinate to a grid cell.
    ///
    /// The point is clamped into `[0, 1]`, scaled by the image dimensions,
    /// and floor-divided by `cell_size`. The resulting indices are clamped
    /// into grid bounds: an input of exactly 1.0 lands on the last row or
    /// column rather than one past it.
    pub fn to_cell(&self, point: NormalizedPoint) -> GridCell {
        let p = point.clamped();
        let px = p.x * self.image_width as f32;
        let py = p.y * self.image_height as f32;

        let col = ((px / self.cell_size as f32).floor() as i32).clamp(0, self.width as i32 - 1);
        let row = ((py / self.cell_size as f32).floor() as i32).clamp(0, self.height as i32 - 1);
        GridCell::new(row, col)
    }

    /// Pixel position of a cell's center, for the rendering collaborator.
    pub fn cell_center(&self, cell: GridCell) -> PixelPoint {
        PixelPoint::new(
            cell.col as u32 * self.cell_size + self.cell_size / 2,
            cell.row as u32 * self.cell_size + self.cell_size / 2,
        )
    }
}
