//! Panel footprints derived from source image pixel dimensions.
//!
//! A footprint is the world-unit width and height of an image panel after an
//! aspect-preserving scale that pins the longer pixel side to a configured
//! length. Footprints are derived once per image and immutable afterward.

use log::trace;
use serde::Serialize;
use thiserror::Error;

/// Error for source images whose pixel dimensions cannot produce a footprint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidImageError {
    #[error("image has empty pixel dimensions: {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
}

/// World-unit size of an image panel.
///
/// Both dimensions are strictly positive for footprints produced by
/// [`Footprint::from_pixel_dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    width: f64,
    height: f64,
}

impl Footprint {
    /// Creates a footprint directly from world-unit dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Derives a footprint from pixel dimensions and a fixed long-side length.
    ///
    /// Landscape and square images are pinned to `long_side` in width,
    /// portrait images in height; the other dimension follows the pixel
    /// aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImageError::EmptyDimensions`] if either pixel
    /// dimension is zero.
    pub fn from_pixel_dimensions(
        pixel_width: u32,
        pixel_height: u32,
        long_side: f64,
    ) -> Result<Self, InvalidImageError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(InvalidImageError::EmptyDimensions {
                width: pixel_width,
                height: pixel_height,
            });
        }

        let footprint = if pixel_width >= pixel_height {
            Self {
                width: long_side,
                height: long_side * f64::from(pixel_height) / f64::from(pixel_width),
            }
        } else {
            Self {
                width: long_side * f64::from(pixel_width) / f64::from(pixel_height),
                height: long_side,
            }
        };

        trace!(
            pixel_width,
            pixel_height,
            width = footprint.width,
            height = footprint.height;
            "Derived footprint"
        );

        Ok(footprint)
    }

    /// Returns the world-unit width of the panel
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the world-unit height of the panel
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns half the panel width, the distance from center to either edge
    pub fn half_width(self) -> f64 {
        self.width / 2.0
    }
}
