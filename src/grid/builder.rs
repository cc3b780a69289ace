//! Floorplan discretization.
//!
//! Turns a grayscale raster into an [`OccupancyGrid`] in two steps:
//! binarize every pixel against a fixed brightness threshold (white =
//! traversable, black = wall), then block-sample `cell_size × cell_size`
//! tiles under a configurable occupancy policy.

use crate::core::{CellState, GridCell};
use crate::error::{Result, RouteError};
use crate::grid::OccupancyGrid;
use image::GrayImage;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rule deciding whether a pixel block counts as a free cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyPolicy {
    /// Free iff the fraction of free pixels strictly exceeds the threshold
    /// (default: 0.8)
    FreeFraction(f32),

    /// Free iff every pixel in the block is free. Stricter variant that
    /// treats any wall pixel as blocking.
    AllFree,
}

impl Default for OccupancyPolicy {
    fn default() -> Self {
        OccupancyPolicy::FreeFraction(default_free_fraction())
    }
}

impl OccupancyPolicy {
    /// Apply the policy to a block's free-pixel count.
    #[inline]
    fn block_is_free(self, free_pixels: u32, block_pixels: u32) -> bool {
        match self {
            OccupancyPolicy::FreeFraction(fraction) => {
                free_pixels as f32 > fraction * block_pixels as f32
            }
            OccupancyPolicy::AllFree => free_pixels == block_pixels,
        }
    }
}

/// Discretization configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridBuilderConfig {
    /// Pixels per grid cell edge (default: 20)
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Binarization threshold: a pixel is free iff strictly brighter
    /// than this value (default: 128)
    #[serde(default = "default_free_threshold")]
    pub free_threshold: u8,

    /// Block occupancy policy (default: free fraction > 0.8)
    #[serde(default)]
    pub policy: OccupancyPolicy,
}

impl Default for GridBuilderConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            free_threshold: default_free_threshold(),
            policy: OccupancyPolicy::default(),
        }
    }
}

fn default_cell_size() -> u32 {
    20
}
fn default_free_threshold() -> u8 {
    128
}
fn default_free_fraction() -> f32 {
    0.8
}

/// Builds occupancy grids from floorplan images.
pub struct GridBuilder {
    config: GridBuilderConfig,
}

impl GridBuilder {
    /// Create a new grid builder with configuration.
    pub fn new(config: GridBuilderConfig) -> Self {
        Self { config }
    }

    /// Create a new grid builder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GridBuilderConfig::default())
    }

    /// Discretize a grayscale image into an occupancy grid.
    ///
    /// Trailing partial blocks at the right and bottom edges are dropped,
    /// matching the integer floor division of the grid dimensions.
    pub fn build(&self, image: &GrayImage) -> Result<OccupancyGrid> {
        let (image_width, image_height) = image.dimensions();
        let cell_size = self.config.cell_size;

        let empty = RouteError::EmptyGrid {
            image_width,
            image_height,
            cell_size,
        };
        if cell_size == 0 {
            return Err(empty);
        }

        let grid_width = (image_width / cell_size) as usize;
        let grid_height = (image_height / cell_size) as usize;
        if grid_width == 0 || grid_height == 0 {
            return Err(empty);
        }

        let block_pixels = cell_size * cell_size;
        let mut grid = OccupancyGrid::new(
            grid_width,
            grid_height,
            cell_size,
            image_width,
            image_height,
        );

        for row in 0..grid_height {
            for col in 0..grid_width {
                let mut free_pixels = 0u32;
                let base_x = col as u32 * cell_size;
                let base_y = row as u32 * cell_size;

                for dy in 0..cell_size {
                    for dx in 0..cell_size {
                        let pixel = image.get_pixel(base_x + dx, base_y + dy).0[0];
                        if pixel > self.config.free_threshold {
                            free_pixels += 1;
                        }
                    }
                }

                let state = if self.config.policy.block_is_free(free_pixels, block_pixels) {
                    CellState::Free
                } else {
                    CellState::Blocked
                };
                grid.set_state(GridCell::new(row as i32, col as i32), state);
            }
        }

        debug!(
            "[GridBuilder] {}x{} image -> {}x{} grid (cell_size={})",
            image_width, image_height, grid_height, grid_width, cell_size
        );

        Ok(grid)
    }

    /// Load a floorplan image from disk and discretize it.
    pub fn build_from_file<P: AsRef<Path>>(&self, path: P) -> Result<OccupancyGrid> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| RouteError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })?
            .into_luma8();
        self.build(&image)
    }
}
