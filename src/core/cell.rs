//! Cell types for the traversability grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Traversability state of a single grid cell.
///
/// A cell is `Free` only if its source image block passed the occupancy
/// test during discretization; everything else is `Blocked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Wall or insufficiently free block
    #[default]
    Blocked = 0,

    /// Traversable block
    Free = 1,
}

impl CellState {
    /// Can a route pass through this cell?
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }

    /// Convert from u8 (for raw storage access)
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellState::Free,
            _ => CellState::Blocked,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Blocked => '#',
            CellState::Free => '.',
        }
    }
}

/// Grid coordinates (integer cell indices)
///
/// `row` indexes down the image height, `col` across the image width,
/// matching the row-major layout of the occupancy grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCell {
    /// Row index (0 at the top of the image)
    pub row: i32,
    /// Column index (0 at the left of the image)
    pub col: i32,
}

impl GridCell {
    /// Create a new grid cell coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell shifted by a (row, col) offset
    #[inline]
    pub fn offset(self, drow: i32, dcol: i32) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Chebyshev distance (max of row and col distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCell) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl Add for GridCell {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCell::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCell {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCell::new(self.row - other.row, self.col - other.col)
    }
}
