//! # Marga-Nav: Floorplan Route Planning Library
//!
//! Converts a rasterized floorplan image into a traversability grid and
//! computes a smoothed, near-shortest route between two normalized (0-1)
//! coordinates.
//!
//! ## Features
//!
//! - **Image Discretization**: Brightness-thresholded binarization and
//!   block sampling turn any grayscale floorplan into an occupancy grid
//! - **Turn-Penalized A***: 8-connected search with an octile heuristic and
//!   a configurable penalty on direction changes, producing straighter,
//!   more natural routes
//! - **Line-of-Sight Smoothing**: A single Bresenham-backed pass reduces
//!   the raw cell path to mutually visible waypoints
//! - **Normalized Coordinates**: Callers address positions as fractions of
//!   the image size, independent of resolution and cell size
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga_nav::{NormalizedPoint, RouteConfig, RoutePlanner};
//!
//! let planner = RoutePlanner::new(RouteConfig::default());
//! let route = planner.plan_from_file(
//!     "floorplan.png",
//!     NormalizedPoint::new(0.1, 0.1),
//!     NormalizedPoint::new(0.9, 0.8),
//! )?;
//! println!(
//!     "{} waypoints, cost {:.2}",
//!     route.waypoints.len(),
//!     route.cost
//! );
//! # Ok::<(), marga_nav::RouteError>(())
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────────┐   GridBuilder    ┌─────────────────┐
//! │ Floorplan image │ ───────────────► │  OccupancyGrid  │
//! │   (GrayImage)   │  binarize + tile │ (Free / Blocked)│
//! └─────────────────┘                  └────────┬────────┘
//!                                               │ to_cell()
//! ┌─────────────────┐                           ▼
//! │ NormalizedPoint │ ────────────────► start / goal cells
//! │  start, goal    │                           │
//! └─────────────────┘                           ▼
//!                                      ┌─────────────────┐
//!                                      │  AStarPlanner   │
//!                                      │ (turn-penalized)│
//!                                      └────────┬────────┘
//!                                               │ raw cell path
//!                                               ▼
//!                                      ┌─────────────────┐
//!                                      │  PathSmoother   │──► Route
//!                                      │ (line of sight) │    (waypoints +
//!                                      └─────────────────┘     pixel centers)
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types ([`GridCell`], [`CellState`],
//!   [`NormalizedPoint`], [`PixelPoint`])
//! - [`grid`]: Occupancy grid storage, line-of-sight checks, coordinate
//!   mapping, and the image-to-grid builder
//! - [`pathfinding`]: A* search and path smoothing
//! - [`planner`]: The per-request pipeline tying it all together
//! - [`config`]: TOML-loadable configuration
//! - [`error`]: Typed errors
//!
//! Requests are independent: each one builds its own grid and search state,
//! so nothing is shared or retained between calls.

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod pathfinding;
pub mod planner;

// Re-export main types at crate root
pub use config::RouteConfig;
pub use crate::core::{CellState, GridCell, NormalizedPoint, PixelPoint};
pub use error::{Result, RouteError};
pub use grid::{GridBuilder, GridBuilderConfig, OccupancyGrid, OccupancyPolicy};
pub use pathfinding::{AStarConfig, AStarPlanner, PathSmoother, PlannedPath};
pub use planner::{Route, RoutePlanner};
