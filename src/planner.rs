//! The per-request planning pipeline.
//!
//! One call runs the whole chain: discretize the floorplan, resolve the
//! normalized endpoints to grid cells, search, smooth, and package the
//! result. The planner holds only configuration; every request builds its
//! own grid and search state, so a planner can be shared freely across
//! requests as long as the caller serializes access per instance.

use crate::config::RouteConfig;
use crate::core::{GridCell, NormalizedPoint, PixelPoint};
use crate::error::{Result, RouteError};
use crate::grid::{GridBuilder, OccupancyGrid};
use crate::pathfinding::{AStarPlanner, PathSmoother};
use image::GrayImage;
use log::{debug, warn};
use serde::Serialize;
use std::path::Path;

/// A computed route through a floorplan.
#[derive(Clone, Debug, Serialize)]
pub struct Route {
    /// Waypoint cells from start to goal. Consecutive waypoints are
    /// mutually visible when smoothing is enabled, 8-adjacent otherwise.
    pub waypoints: Vec<GridCell>,
    /// Centered pixel position of each waypoint, for rendering
    pub pixels: Vec<PixelPoint>,
    /// Length of the raw search path in cells, before smoothing
    pub raw_length: usize,
    /// Accumulated search cost (move costs plus turn penalties)
    pub cost: f32,
}

/// Floorplan route planner.
pub struct RoutePlanner {
    config: RouteConfig,
}

impl RoutePlanner {
    /// Create a planner with configuration.
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RouteConfig::default())
    }

    /// Plan a route across a grayscale floorplan image.
    pub fn plan(
        &self,
        image: &GrayImage,
        start: NormalizedPoint,
        goal: NormalizedPoint,
    ) -> Result<Route> {
        let grid = GridBuilder::new(self.config.grid.clone()).build(image)?;
        self.plan_on_grid(&grid, start, goal)
    }

    /// Load a floorplan image from disk and plan a route across it.
    pub fn plan_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        start: NormalizedPoint,
        goal: NormalizedPoint,
    ) -> Result<Route> {
        let grid = GridBuilder::new(self.config.grid.clone()).build_from_file(path)?;
        self.plan_on_grid(&grid, start, goal)
    }

    /// Plan a route on an already-built occupancy grid.
    pub fn plan_on_grid(
        &self,
        grid: &OccupancyGrid,
        start: NormalizedPoint,
        goal: NormalizedPoint,
    ) -> Result<Route> {
        let start_cell = self.resolve(grid, start, "start")?;
        let goal_cell = self.resolve(grid, goal, "goal")?;
        debug!(
            "[Planner] ({}, {}) -> {:?}, ({}, {}) -> {:?}",
            start.x, start.y, start_cell, goal.x, goal.y, goal_cell
        );

        let planned = AStarPlanner::new(self.config.search.clone())
            .find_path(grid, start_cell, goal_cell)
            .ok_or(RouteError::NoPathFound {
                start: start_cell,
                goal: goal_cell,
                grid_width: grid.width(),
                grid_height: grid.height(),
            })?;

        let raw_length = planned.cells.len();
        let waypoints = if self.config.smooth {
            PathSmoother::new(grid).smooth(&planned.cells)
        } else {
            planned.cells
        };
        let pixels = waypoints.iter().map(|&c| grid.cell_center(c)).collect();

        Ok(Route {
            waypoints,
            pixels,
            raw_length,
            cost: planned.cost,
        })
    }

    /// Resolve a normalized endpoint to its grid cell.
    ///
    /// Out-of-range coordinates clamp with a warning by default; strict
    /// mode rejects them, and additionally rejects endpoints that resolve
    /// to blocked cells.
    fn resolve(
        &self,
        grid: &OccupancyGrid,
        point: NormalizedPoint,
        which: &'static str,
    ) -> Result<GridCell> {
        if !point.in_unit_square() {
            if self.config.strict {
                return Err(RouteError::CoordinateOutOfRange {
                    x: point.x,
                    y: point.y,
                });
            }
            warn!(
                "[Planner] {} coordinate ({}, {}) outside [0, 1], clamping",
                which, point.x, point.y
            );
        }

        let cell = grid.to_cell(point);
        if self.config.strict && !grid.is_free(cell) {
            return Err(RouteError::EndpointBlocked { which, cell });
        }
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_wall() -> OccupancyGrid {
        OccupancyGrid::from_rows(
            &[
                ".....#....",
                ".....#....",
                ".....#....",
                ".....#....",
                ".....#....",
                ".....#....",
                ".....#....",
                ".....#....",
                ".....#....",
                "..........",
            ],
            20,
        )
    }

    #[test]
    fn test_plan_on_grid_detour() {
        let planner = RoutePlanner::with_defaults();
        let route = planner
            .plan_on_grid(
                &grid_with_wall(),
                NormalizedPoint::new(0.05, 0.05),
                NormalizedPoint::new(0.95, 0.05),
            )
            .unwrap();

        assert_eq!(route.raw_length, 19);
        assert_eq!(route.waypoints.first(), Some(&GridCell::new(0, 0)));
        assert_eq!(route.waypoints.last(), Some(&GridCell::new(0, 9)));
        assert!(route.waypoints.len() <= route.raw_length);
        assert_eq!(route.pixels.len(), route.waypoints.len());
        // Cell (0, 0) centers at pixel (10, 10) with 20-pixel cells
        assert_eq!(route.pixels[0], PixelPoint::new(10, 10));
    }

    #[test]
    fn test_smoothing_disabled_keeps_raw_path() {
        let planner = RoutePlanner::new(RouteConfig {
            smooth: false,
            ..Default::default()
        });
        let route = planner
            .plan_on_grid(
                &grid_with_wall(),
                NormalizedPoint::new(0.05, 0.05),
                NormalizedPoint::new(0.95, 0.05),
            )
            .unwrap();
        assert_eq!(route.waypoints.len(), route.raw_length);
    }

    #[test]
    fn test_no_path_error_context() {
        let grid = OccupancyGrid::from_rows(&["..#..", "..#..", "..#..", "..#..", "..#.."], 20);
        let err = RoutePlanner::with_defaults()
            .plan_on_grid(
                &grid,
                NormalizedPoint::new(0.0, 0.0),
                NormalizedPoint::new(1.0, 0.0),
            )
            .unwrap_err();

        match err {
            RouteError::NoPathFound {
                start,
                goal,
                grid_width,
                grid_height,
            } => {
                assert_eq!(start, GridCell::new(0, 0));
                assert_eq!(goal, GridCell::new(0, 4));
                assert_eq!(grid_width, 5);
                assert_eq!(grid_height, 5);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_clamps_by_default() {
        let planner = RoutePlanner::with_defaults();
        let route = planner
            .plan_on_grid(
                &grid_with_wall(),
                NormalizedPoint::new(-0.5, -0.5),
                NormalizedPoint::new(0.25, 0.05),
            )
            .unwrap();
        assert_eq!(route.waypoints.first(), Some(&GridCell::new(0, 0)));
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let planner = RoutePlanner::new(RouteConfig {
            strict: true,
            ..Default::default()
        });
        let err = planner
            .plan_on_grid(
                &grid_with_wall(),
                NormalizedPoint::new(1.5, 0.0),
                NormalizedPoint::new(0.5, 0.5),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RouteError::CoordinateOutOfRange { x, .. } if x == 1.5
        ));
    }

    #[test]
    fn test_strict_rejects_blocked_endpoint() {
        let planner = RoutePlanner::new(RouteConfig {
            strict: true,
            ..Default::default()
        });
        // (0.55, 0.05) resolves to cell (0, 5), inside the wall column
        let err = planner
            .plan_on_grid(
                &grid_with_wall(),
                NormalizedPoint::new(0.05, 0.05),
                NormalizedPoint::new(0.55, 0.05),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RouteError::EndpointBlocked { which: "goal", .. }
        ));
    }
}
