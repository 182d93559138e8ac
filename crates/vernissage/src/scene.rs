//! Placement of planned layouts into room space.
//!
//! This is the boundary to the rendering subsystem: a [`LayoutPlan`] plus a
//! wall geometry table become concrete positions and rotations, one
//! [`Placement`] per panel. The mapping is deterministic and has no failure
//! modes beyond a missing geometry entry.

use std::f64::consts::{FRAC_PI_2, PI};

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use vernissage_core::{footprint::Footprint, geometry::Point3, plan::LayoutPlan, wall::Wall};

use crate::{config::RoomConfig, error::VernissageError};

/// Distance panels stand off a wall face, toward the room center.
const PANEL_INSET: f64 = 0.1;

/// The room axis along which a wall's offsets run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Z,
}

/// Mounting geometry for a single wall.
///
/// `origin` is the wall's coordinate origin on its placement axis and
/// `lateral` the fixed coordinate on the perpendicular axis. Offsets on an
/// [`Axis::X`] wall grow with `x`; on an [`Axis::Z`] wall they run against
/// `z`, so both side walls read left to right from the room center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallGeometry {
    axis: Axis,
    origin: f64,
    lateral: f64,
    rotation_y: f64,
}

impl WallGeometry {
    /// Creates mounting geometry for a wall.
    pub fn new(axis: Axis, origin: f64, lateral: f64, rotation_y: f64) -> Self {
        Self {
            axis,
            origin,
            lateral,
            rotation_y,
        }
    }

    /// Returns the placement axis of this wall
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the wall origin on the placement axis
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Returns the fixed coordinate on the perpendicular axis
    pub fn lateral(&self) -> f64 {
        self.lateral
    }

    /// Returns the yaw rotation panels on this wall share, in radians
    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    /// World position of a panel center hung at `offset` along this wall.
    pub fn position_at(&self, offset: f64, elevation: f64) -> Point3 {
        match self.axis {
            Axis::X => Point3::new(self.origin + offset, elevation, self.lateral),
            Axis::Z => Point3::new(self.lateral, elevation, self.origin - offset),
        }
    }
}

/// Builds the wall geometry table for a square room.
///
/// Walls face inward and panels stand [`PANEL_INSET`] off the wall face.
/// The table is an explicit value so callers can swap in their own geometry
/// without touching any global state.
pub fn wall_geometry_table(room: &RoomConfig) -> IndexMap<Wall, WallGeometry> {
    let half = room.wall_width() / 2.0;

    IndexMap::from([
        (
            Wall::Front,
            WallGeometry::new(Axis::X, -half, half - PANEL_INSET, PI),
        ),
        (
            Wall::Right,
            WallGeometry::new(Axis::Z, half, -half + PANEL_INSET, FRAC_PI_2),
        ),
        (
            Wall::Left,
            WallGeometry::new(Axis::Z, half, half - PANEL_INSET, -FRAC_PI_2),
        ),
    ])
}

/// A panel placed in room space, ready for the rendering subsystem.
///
/// `source_index` lets the renderer re-attach title and caption metadata by
/// looking up the original input sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    source_index: usize,
    position: Point3,
    rotation_y: f64,
    size: Footprint,
}

impl Placement {
    /// Returns the index of the source image in the original input sequence
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Returns the world position of the panel center
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Returns the yaw rotation of the panel, in radians
    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    /// Returns the world-unit panel size
    pub fn size(&self) -> Footprint {
        self.size
    }
}

/// Maps every planned image to a concrete placement.
///
/// Panels hang centered at half the wall height, facing the room center
/// with their wall's rotation.
///
/// # Errors
///
/// Returns [`VernissageError::MissingGeometry`] if a planned wall has no
/// entry in the geometry table.
pub fn apply_layout(
    plan: &LayoutPlan,
    geometry: &IndexMap<Wall, WallGeometry>,
    wall_height: f64,
) -> Result<Vec<Placement>, VernissageError> {
    let elevation = wall_height / 2.0;
    let mut placements = Vec::with_capacity(plan.placed_count());

    for wall_plan in plan.walls() {
        let wall_geometry = geometry
            .get(&wall_plan.wall())
            .ok_or(VernissageError::MissingGeometry(wall_plan.wall()))?;

        for image in wall_plan.images() {
            placements.push(Placement {
                source_index: image.source_index(),
                position: wall_geometry.position_at(image.offset(), elevation),
                rotation_y: wall_geometry.rotation_y(),
                size: image.footprint(),
            });
        }
    }

    debug!(placements_len = placements.len(); "Layout applied");

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use vernissage_core::plan::{PlacedImage, WallPlan};

    use super::*;

    fn plan_with(wall: Wall, offset: f64) -> LayoutPlan {
        LayoutPlan::new(
            vec![WallPlan::new(
                wall,
                vec![PlacedImage::new(0, Footprint::new(3.0, 2.0), offset)],
            )],
            0,
        )
    }

    #[test]
    fn test_front_wall_position() {
        let room = RoomConfig::default();
        let geometry = wall_geometry_table(&room);

        let placements = apply_layout(&plan_with(Wall::Front, 3.25), &geometry, 5.0).unwrap();

        assert_eq!(placements.len(), 1);
        let placement = &placements[0];
        assert_approx_eq!(f64, placement.position().x(), -1.75);
        assert_approx_eq!(f64, placement.position().y(), 2.5);
        assert_approx_eq!(f64, placement.position().z(), 4.9);
        assert_approx_eq!(f64, placement.rotation_y(), PI);
    }

    #[test]
    fn test_right_wall_position_runs_against_z() {
        let room = RoomConfig::default();
        let geometry = wall_geometry_table(&room);

        let placements = apply_layout(&plan_with(Wall::Right, 5.0), &geometry, 5.0).unwrap();

        let placement = &placements[0];
        assert_approx_eq!(f64, placement.position().x(), -4.9);
        assert_approx_eq!(f64, placement.position().z(), 0.0);
        assert_approx_eq!(f64, placement.rotation_y(), FRAC_PI_2);
    }

    #[test]
    fn test_left_wall_position() {
        let room = RoomConfig::default();
        let geometry = wall_geometry_table(&room);

        let placements = apply_layout(&plan_with(Wall::Left, 2.0), &geometry, 5.0).unwrap();

        let placement = &placements[0];
        assert_approx_eq!(f64, placement.position().x(), 4.9);
        assert_approx_eq!(f64, placement.position().z(), 3.0);
        assert_approx_eq!(f64, placement.rotation_y(), -FRAC_PI_2);
    }

    #[test]
    fn test_panels_hang_at_half_wall_height() {
        let room = RoomConfig::default();
        let geometry = wall_geometry_table(&room);

        let placements = apply_layout(&plan_with(Wall::Front, 1.0), &geometry, 4.0).unwrap();
        assert_approx_eq!(f64, placements[0].position().y(), 2.0);
    }

    #[test]
    fn test_missing_geometry_is_fatal() {
        let geometry = IndexMap::new();

        let result = apply_layout(&plan_with(Wall::Front, 1.0), &geometry, 5.0);
        assert!(matches!(
            result,
            Err(VernissageError::MissingGeometry(Wall::Front))
        ));
    }

    #[test]
    fn test_metadata_link_survives_placement() {
        let room = RoomConfig::default();
        let geometry = wall_geometry_table(&room);

        let plan = LayoutPlan::new(
            vec![WallPlan::new(
                Wall::Front,
                vec![
                    PlacedImage::new(7, Footprint::new(3.0, 2.0), 3.25),
                    PlacedImage::new(4, Footprint::new(3.0, 2.0), 6.75),
                ],
            )],
            0,
        );

        let placements = apply_layout(&plan, &geometry, 5.0).unwrap();
        let indices: Vec<usize> = placements.iter().map(|p| p.source_index()).collect();
        assert_eq!(indices, vec![7, 4]);
    }
}
