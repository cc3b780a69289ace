//! Error types for MargaNav

use crate::core::GridCell;
use std::path::PathBuf;
use thiserror::Error;

/// MargaNav error type
#[derive(Error, Debug)]
pub enum RouteError {
    /// The floorplan image could not be read or decoded
    #[error("failed to load floorplan image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Discretization produced a grid with zero rows or columns
    #[error(
        "floorplan {image_width}x{image_height} with cell size {cell_size} \
         produces an empty grid"
    )]
    EmptyGrid {
        image_width: u32,
        image_height: u32,
        cell_size: u32,
    },

    /// The search exhausted its frontier (or iteration budget) without
    /// reaching the goal. Expected outcome for disconnected endpoints.
    #[error(
        "no path from {start:?} to {goal:?} in {grid_height}x{grid_width} grid"
    )]
    NoPathFound {
        start: GridCell,
        goal: GridCell,
        grid_width: usize,
        grid_height: usize,
    },

    /// Strict mode only: a request coordinate fell outside `[0, 1]`
    #[error("coordinate ({x}, {y}) outside the [0, 1] unit square")]
    CoordinateOutOfRange { x: f32, y: f32 },

    /// Strict mode only: start or goal resolved to a blocked cell
    #[error("{which} resolved to blocked cell {cell:?}")]
    EndpointBlocked {
        which: &'static str,
        cell: GridCell,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for RouteError {
    fn from(e: toml::de::Error) -> Self {
        RouteError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
