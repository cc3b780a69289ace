//! Fundamental types shared across the crate.
//!
//! - [`GridCell`] / [`CellState`]: integer cell coordinates and their
//!   traversability state
//! - [`NormalizedPoint`]: request coordinates as fractions of the image size
//! - [`PixelPoint`]: display-space positions consumed by the rendering
//!   collaborator

pub mod cell;
pub mod point;

pub use cell::{CellState, GridCell};
pub use point::{NormalizedPoint, PixelPoint};
