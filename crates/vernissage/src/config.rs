//! Configuration types for exhibition rooms.
//!
//! This module provides configuration structures that control room
//! dimensions, hanging constraints, and floor-plan styling. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`GalleryConfig`] - Top-level configuration combining room and style settings.
//! - [`RoomConfig`] - Physical room dimensions and hanging constraints.
//! - [`StyleConfig`] - Visual styling options for exported floor plans.
//!
//! # Example
//!
//! ```
//! # use vernissage::config::GalleryConfig;
//! // Use default configuration
//! let config = GalleryConfig::default();
//! assert!(config.room().validate().is_ok());
//! ```

use serde::Deserialize;

use vernissage_core::color::Color;

use crate::{error::ConfigError, layout};

/// Default floor color, the warm ivory of the reference room.
const DEFAULT_BACKGROUND: &str = "#fdf6e3";

/// Top-level gallery configuration combining room and style settings.
///
/// Groups [`RoomConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryConfig {
    /// Room configuration section.
    #[serde(default)]
    room: RoomConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl GalleryConfig {
    /// Creates a new [`GalleryConfig`] with the specified room and style
    /// configurations.
    pub fn new(room: RoomConfig, style: StyleConfig) -> Self {
        Self { room, style }
    }

    /// Returns the room configuration.
    pub fn room(&self) -> &RoomConfig {
        &self.room
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Physical room dimensions and hanging constraints.
///
/// The room is square: every wall shares the same width. Defaults match the
/// reference room record: a 10x10 room with 5-unit walls, panels scaled to a
/// 3-unit long side, a 1-unit margin at each wall end, and 0.5 units between
/// neighboring panels.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomConfig {
    #[serde(default = "default_wall_width")]
    wall_width: f64,

    #[serde(default = "default_wall_height")]
    wall_height: f64,

    #[serde(default = "default_long_side")]
    long_side: f64,

    #[serde(default = "default_min_margin")]
    min_margin: f64,

    #[serde(default = "default_min_spacing")]
    min_spacing: f64,
}

fn default_wall_width() -> f64 {
    10.0
}

fn default_wall_height() -> f64 {
    5.0
}

fn default_long_side() -> f64 {
    3.0
}

fn default_min_margin() -> f64 {
    1.0
}

fn default_min_spacing() -> f64 {
    0.5
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            wall_width: default_wall_width(),
            wall_height: default_wall_height(),
            long_side: default_long_side(),
            min_margin: default_min_margin(),
            min_spacing: default_min_spacing(),
        }
    }
}

impl RoomConfig {
    /// Creates a new [`RoomConfig`] with explicit dimensions.
    ///
    /// # Arguments
    ///
    /// * `wall_width` - Width shared by every wall, in world units.
    /// * `wall_height` - Wall height; panels hang at half this elevation.
    /// * `long_side` - Length the longer pixel side of each image scales to.
    /// * `min_margin` - Clear space kept at both ends of each wall.
    /// * `min_spacing` - Minimum gap between neighboring panels.
    pub fn new(
        wall_width: f64,
        wall_height: f64,
        long_side: f64,
        min_margin: f64,
        min_spacing: f64,
    ) -> Self {
        Self {
            wall_width,
            wall_height,
            long_side,
            min_margin,
            min_spacing,
        }
    }

    /// Returns the width shared by every wall.
    pub fn wall_width(&self) -> f64 {
        self.wall_width
    }

    /// Returns the wall height.
    pub fn wall_height(&self) -> f64 {
        self.wall_height
    }

    /// Returns the long-side length panels are scaled to.
    pub fn long_side(&self) -> f64 {
        self.long_side
    }

    /// Returns the clear space kept at both ends of each wall.
    pub fn min_margin(&self) -> f64 {
        self.min_margin
    }

    /// Returns the minimum gap between neighboring panels.
    pub fn min_spacing(&self) -> f64 {
        self.min_spacing
    }

    /// Checks every dimension against the planning constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the long side or wall height is not
    /// positive, a margin or spacing is negative, or the margins leave no
    /// hanging width on the walls.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_side <= 0.0 {
            return Err(ConfigError::NonPositiveLongSide(self.long_side));
        }
        if self.wall_height <= 0.0 {
            return Err(ConfigError::NonPositiveWallHeight(self.wall_height));
        }
        layout::available_width(self.wall_width, self.min_margin, self.min_spacing)?;
        Ok(())
    }
}

/// Visual styling configuration for exported floor plans.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Floor background color, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the given background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], falling back to the default
    /// ivory when no color is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStyle`] if the configured color string
    /// cannot be parsed into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, ConfigError> {
        match &self.background_color {
            Some(value) => Color::new(value).map_err(ConfigError::InvalidStyle),
            None => Ok(Color::new(DEFAULT_BACKGROUND).unwrap()),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_room_defaults() {
        let room = RoomConfig::default();
        assert_approx_eq!(f64, room.wall_width(), 10.0);
        assert_approx_eq!(f64, room.wall_height(), 5.0);
        assert_approx_eq!(f64, room.long_side(), 3.0);
        assert_approx_eq!(f64, room.min_margin(), 1.0);
        assert_approx_eq!(f64, room.min_spacing(), 0.5);
    }

    #[test]
    fn test_default_room_validates() {
        assert!(RoomConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_narrow_room() {
        let room = RoomConfig::new(2.0, 5.0, 3.0, 1.0, 0.5);
        assert_eq!(
            room.validate(),
            Err(ConfigError::RoomTooNarrow {
                wall_width: 2.0,
                min_margin: 1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_long_side() {
        let room = RoomConfig::new(10.0, 5.0, 0.0, 1.0, 0.5);
        assert_eq!(room.validate(), Err(ConfigError::NonPositiveLongSide(0.0)));
    }

    #[test]
    fn test_validate_rejects_non_positive_wall_height() {
        let room = RoomConfig::new(10.0, -1.0, 3.0, 1.0, 0.5);
        assert_eq!(
            room.validate(),
            Err(ConfigError::NonPositiveWallHeight(-1.0))
        );
    }

    #[test]
    fn test_style_default_background() {
        let style = StyleConfig::default();
        assert!(style.background_color().is_ok());
    }

    #[test]
    fn test_style_rejects_invalid_background() {
        let style = StyleConfig::new(Some("not-a-color".to_string()));
        assert!(style.background_color().is_err());
    }

    #[test]
    fn test_gallery_config_sections() {
        let config = GalleryConfig::new(
            RoomConfig::new(12.0, 4.0, 2.0, 0.5, 0.25),
            StyleConfig::new(Some("#ffffff".to_string())),
        );
        assert_approx_eq!(f64, config.room().wall_width(), 12.0);
        assert!(config.style().background_color().is_ok());
    }
}
