//! Route search over the occupancy grid.
//!
//! [`AStarPlanner`] runs turn-penalized A* and returns the raw cell path;
//! [`PathSmoother`] reduces it to line-of-sight waypoints.

pub mod astar;
pub mod smoothing;

pub use astar::{AStarConfig, AStarPlanner, PlannedPath};
pub use smoothing::PathSmoother;
