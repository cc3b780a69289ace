//! Request and display coordinate types.

use serde::{Deserialize, Serialize};

/// A location expressed as fractions of the image dimensions.
///
/// `x` runs across the image width, `y` down the image height. Callers
/// nominally supply values in `[0, 1]` but this is not guaranteed; the
/// planner clamps before use unless strict validation is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Fraction of image width (0.0 = left edge, 1.0 = right edge)
    pub x: f32,
    /// Fraction of image height (0.0 = top edge, 1.0 = bottom edge)
    pub y: f32,
}

impl NormalizedPoint {
    /// Create a new normalized point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components clamped into `[0, 1]`
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }

    /// Are both components already within `[0, 1]`?
    #[inline]
    pub fn in_unit_square(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Pixel coordinates in the source image (display space).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Horizontal pixel position
    pub x: u32,
    /// Vertical pixel position
    pub y: u32,
}

impl PixelPoint {
    /// Create a new pixel point
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        let p = NormalizedPoint::new(-0.5, 1.7).clamped();
        assert_eq!(p, NormalizedPoint::new(0.0, 1.0));

        let q = NormalizedPoint::new(0.25, 0.75).clamped();
        assert_eq!(q, NormalizedPoint::new(0.25, 0.75));
    }

    #[test]
    fn test_in_unit_square() {
        assert!(NormalizedPoint::new(0.0, 1.0).in_unit_square());
        assert!(NormalizedPoint::new(0.5, 0.5).in_unit_square());
        assert!(!NormalizedPoint::new(1.001, 0.5).in_unit_square());
        assert!(!NormalizedPoint::new(0.5, -0.001).in_unit_square());
    }
}
