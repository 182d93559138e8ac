//! Error types for Vernissage operations.
//!
//! This module provides the main error type [`VernissageError`] and the
//! configuration error type [`ConfigError`]. Configuration errors are fatal:
//! planning aborts entirely and no partial plan is produced.

use thiserror::Error;

use vernissage_core::wall::Wall;

/// Fatal configuration problems that abort planning entirely.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(
        "room too narrow: wall width {wall_width} leaves no hanging space \
         inside margins of {min_margin}"
    )]
    RoomTooNarrow { wall_width: f64, min_margin: f64 },

    #[error("margin must not be negative, got {0}")]
    NegativeMargin(f64),

    #[error("spacing must not be negative, got {0}")]
    NegativeSpacing(f64),

    #[error("long side must be positive, got {0}")]
    NonPositiveLongSide(f64),

    #[error("wall height must be positive, got {0}")]
    NonPositiveWallHeight(f64),

    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

/// The main error type for Vernissage operations.
#[derive(Debug, Error)]
pub enum VernissageError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("no geometry registered for wall: {0}")]
    MissingGeometry(Wall),
}
