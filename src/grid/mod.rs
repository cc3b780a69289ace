//! Occupancy grid construction and storage.
//!
//! [`GridBuilder`] discretizes a grayscale floorplan into an
//! [`OccupancyGrid`]; the grid owns traversability queries, Bresenham
//! line-of-sight checks, and the normalized/cell/pixel coordinate mapping.

pub mod builder;
pub mod occupancy;

pub use builder::{GridBuilder, GridBuilderConfig, OccupancyPolicy};
pub use occupancy::OccupancyGrid;
