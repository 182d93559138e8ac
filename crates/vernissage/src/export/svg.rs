//! Top-down SVG floor plan of a planned exhibition room.
//!
//! This renders the applier's view of a plan: the room footprint with every
//! placed panel drawn on its wall. It is a diagnostic stand-in for the
//! interactive renderer, which consumes the same placements.

use log::debug;
use svg::Document;
use svg::node::element::Rectangle;

use indexmap::IndexMap;

use vernissage_core::{plan::LayoutPlan, wall::Wall};

use crate::{
    config::{RoomConfig, StyleConfig},
    error::VernissageError,
    scene::{Axis, WallGeometry},
};

/// Pixels per world unit in the rendered plan.
const SCALE: f64 = 40.0;

/// Margin around the room footprint, in pixels.
const MARGIN: f64 = 50.0;

/// Drawn thickness of a panel seen from above, in world units.
const PANEL_THICKNESS: f64 = 0.12;

/// Panel frame color.
const PANEL_COLOR: &str = "#333333";

/// Renders the floor plan for a planned room.
pub struct FloorPlan<'a> {
    room: &'a RoomConfig,
    style: &'a StyleConfig,
}

impl<'a> FloorPlan<'a> {
    /// Creates a floor-plan renderer for a room and style.
    pub fn new(room: &'a RoomConfig, style: &'a StyleConfig) -> Self {
        Self { room, style }
    }

    /// Renders the plan against the given wall geometry to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`VernissageError`] if the configured background color is
    /// invalid or a planned wall has no geometry entry.
    pub fn render(
        &self,
        plan: &LayoutPlan,
        geometry: &IndexMap<Wall, WallGeometry>,
    ) -> Result<String, VernissageError> {
        let background = self.style.background_color()?;
        let width = self.room.wall_width();
        let side = MARGIN * 2.0 + width * SCALE;

        let floor = Rectangle::new()
            .set("x", MARGIN)
            .set("y", MARGIN)
            .set("width", width * SCALE)
            .set("height", width * SCALE)
            .set("fill", &background)
            .set("stroke", PANEL_COLOR)
            .set("stroke-width", 2);

        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, side, side))
            .set("width", side)
            .set("height", side)
            .add(floor);

        for wall_plan in plan.walls() {
            let wall_geometry = geometry
                .get(&wall_plan.wall())
                .ok_or(VernissageError::MissingGeometry(wall_plan.wall()))?;

            for image in wall_plan.images() {
                document = document.add(self.panel_rectangle(
                    wall_geometry,
                    image.offset(),
                    image.footprint().width(),
                ));
            }
        }

        debug!(panels_len = plan.placed_count(); "Floor plan rendered");

        Ok(document.to_string())
    }

    /// Rectangle for one panel, seen from above.
    fn panel_rectangle(&self, geometry: &WallGeometry, offset: f64, width: f64) -> Rectangle {
        // The panel's center in room coordinates; elevation is irrelevant
        // from above.
        let center = geometry.position_at(offset, 0.0);

        // Panels extend along their wall's axis and stay thin across it.
        let (panel_width, panel_depth) = match geometry.axis() {
            Axis::X => (width, PANEL_THICKNESS),
            Axis::Z => (PANEL_THICKNESS, width),
        };

        let x = self.to_pixels_x(center.x()) - panel_width * SCALE / 2.0;
        let y = self.to_pixels_y(center.z()) - panel_depth * SCALE / 2.0;

        Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", panel_width * SCALE)
            .set("height", panel_depth * SCALE)
            .set("fill", PANEL_COLOR)
    }

    /// Maps a room x-coordinate to plan pixels.
    fn to_pixels_x(&self, x: f64) -> f64 {
        MARGIN + (x + self.room.wall_width() / 2.0) * SCALE
    }

    /// Maps a room z-coordinate to plan pixels. The front wall lands at the
    /// bottom edge of the plan.
    fn to_pixels_y(&self, z: f64) -> f64 {
        MARGIN + (z + self.room.wall_width() / 2.0) * SCALE
    }
}
