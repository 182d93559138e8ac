//! The wall-by-wall layout plan model.
//!
//! A [`LayoutPlan`] is the planner's sole output: one [`WallPlan`] per wall
//! that received at least one image, in wall-enumeration order, plus the
//! count of images that no wall had capacity for.

use serde::Serialize;

use crate::{footprint::Footprint, wall::Wall};

/// An image assigned to a wall at a concrete position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedImage {
    source_index: usize,
    footprint: Footprint,
    offset: f64,
}

impl PlacedImage {
    /// Creates a new placed image.
    ///
    /// # Arguments
    /// * `source_index` - Index of the image in the planner's input sequence
    /// * `footprint` - World-unit panel size
    /// * `offset` - Distance from the wall origin to the panel center, along
    ///   the wall's placement axis
    pub fn new(source_index: usize, footprint: Footprint, offset: f64) -> Self {
        Self {
            source_index,
            footprint,
            offset,
        }
    }

    /// Returns the index of this image in the planner's input sequence
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Returns the world-unit panel size
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Returns the distance from the wall origin to the panel center
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the offset of the panel's near edge (closer to the wall origin)
    pub fn near_edge(&self) -> f64 {
        self.offset - self.footprint.half_width()
    }

    /// Returns the offset of the panel's far edge
    pub fn far_edge(&self) -> f64 {
        self.offset + self.footprint.half_width()
    }
}

/// The images assigned to a single wall, in visual placement order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallPlan {
    wall: Wall,
    images: Vec<PlacedImage>,
}

impl WallPlan {
    /// Creates a wall plan from a wall and its placed images.
    pub fn new(wall: Wall, images: Vec<PlacedImage>) -> Self {
        Self { wall, images }
    }

    /// Returns the wall this plan covers
    pub fn wall(&self) -> Wall {
        self.wall
    }

    /// Returns the placed images in visual placement order
    pub fn images(&self) -> &[PlacedImage] {
        &self.images
    }
}

/// The full output of the wall layout planner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    walls: Vec<WallPlan>,
    unplaced: usize,
}

impl LayoutPlan {
    /// Creates a layout plan from the non-empty wall plans and the count of
    /// images that did not fit on any wall.
    pub fn new(walls: Vec<WallPlan>, unplaced: usize) -> Self {
        Self { walls, unplaced }
    }

    /// Returns the non-empty wall plans in wall-enumeration order
    pub fn walls(&self) -> &[WallPlan] {
        &self.walls
    }

    /// Returns the number of input images that no wall had capacity for.
    ///
    /// Running out of capacity is not an error: the exhibit is truncated and
    /// the count surfaced so the host application can report it.
    pub fn unplaced(&self) -> usize {
        self.unplaced
    }

    /// Returns the total number of placed images across all walls
    pub fn placed_count(&self) -> usize {
        self.walls.iter().map(|plan| plan.images().len()).sum()
    }

    /// Returns true if no wall received any image
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}
