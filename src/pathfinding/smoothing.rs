//! Path smoothing by line-of-sight waypoint reduction.
//!
//! The raw A* path visits every intermediate cell. A single greedy forward
//! pass drops the cells an unobstructed straight segment can skip: walk the
//! path holding a visibility anchor, and whenever the current cell is no
//! longer visible from the anchor, emit the previous cell and re-anchor
//! there. The pass runs one line-of-sight check per cell, keeps the first
//! and last cells, and never lengthens the path. Consecutive output
//! waypoints are mutually visible by construction.

use crate::core::GridCell;
use crate::grid::OccupancyGrid;
use log::trace;

/// Greedy line-of-sight path smoother.
pub struct PathSmoother<'a> {
    grid: &'a OccupancyGrid,
}

impl<'a> PathSmoother<'a> {
    /// Create a smoother over the grid the path was planned on.
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self { grid }
    }

    /// Reduce a raw cell path to its visibility waypoints.
    ///
    /// Paths of length 2 or less are already minimal and returned as-is.
    pub fn smooth(&self, path: &[GridCell]) -> Vec<GridCell> {
        if path.len() <= 2 {
            return path.to_vec();
        }

        let mut smoothed = vec![path[0]];
        let mut anchor = path[0];

        for i in 2..path.len() {
            if !self.grid.line_of_sight(anchor, path[i]) {
                smoothed.push(path[i - 1]);
                anchor = path[i - 1];
            }
        }
        smoothed.push(path[path.len() - 1]);

        trace!(
            "[Smoother] {} cells -> {} waypoints",
            path.len(),
            smoothed.len()
        );
        smoothed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_paths_unchanged() {
        let grid = OccupancyGrid::from_rows(&["...", "...", "..."], 20);
        let smoother = PathSmoother::new(&grid);

        assert!(smoother.smooth(&[]).is_empty());

        let one = [GridCell::new(1, 1)];
        assert_eq!(smoother.smooth(&one), one.to_vec());

        let two = [GridCell::new(0, 0), GridCell::new(2, 2)];
        assert_eq!(smoother.smooth(&two), two.to_vec());
    }

    #[test]
    fn test_open_grid_collapses_to_endpoints() {
        let grid = OccupancyGrid::from_rows(&[".....", ".....", ".....", ".....", "....."], 20);
        let path: Vec<GridCell> = (0..5).map(|i| GridCell::new(i, i)).collect();

        let smoothed = PathSmoother::new(&grid).smooth(&path);
        assert_eq!(smoothed, vec![GridCell::new(0, 0), GridCell::new(4, 4)]);
    }

    #[test]
    fn test_collinear_run_collapses() {
        let grid = OccupancyGrid::from_rows(&["......"], 20);
        let path: Vec<GridCell> = (0..6).map(|c| GridCell::new(0, c)).collect();

        let smoothed = PathSmoother::new(&grid).smooth(&path);
        assert_eq!(smoothed, vec![GridCell::new(0, 0), GridCell::new(0, 5)]);
    }

    #[test]
    fn test_corner_kept_around_wall() {
        // L-shaped path around a wall block; the corner survives because
        // the endpoints cannot see each other.
        let grid = OccupancyGrid::from_rows(
            &[
                ".....",
                ".###.",
                ".###.",
                ".###.",
                ".....",
            ],
            20,
        );
        let path = vec![
            GridCell::new(0, 0),
            GridCell::new(0, 1),
            GridCell::new(0, 2),
            GridCell::new(0, 3),
            GridCell::new(0, 4),
            GridCell::new(1, 4),
            GridCell::new(2, 4),
            GridCell::new(3, 4),
            GridCell::new(4, 4),
        ];

        let smoothed = PathSmoother::new(&grid).smooth(&path);
        assert_eq!(smoothed.first(), Some(&GridCell::new(0, 0)));
        assert_eq!(smoothed.last(), Some(&GridCell::new(4, 4)));
        assert!(smoothed.len() < path.len());
        for pair in smoothed.windows(2) {
            assert!(grid.line_of_sight(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_never_longer_than_input() {
        let grid = OccupancyGrid::from_rows(&["....", "##..", "....", "..##"], 20);
        let path = vec![
            GridCell::new(0, 0),
            GridCell::new(0, 1),
            GridCell::new(1, 2),
            GridCell::new(2, 1),
            GridCell::new(2, 0),
            GridCell::new(3, 0),
        ];
        let smoothed = PathSmoother::new(&grid).smooth(&path);
        assert!(smoothed.len() <= path.len());
    }
}
