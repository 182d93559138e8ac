//! Vernissage - wall layout planning for virtual exhibition rooms.
//!
//! Given a sequence of source images and a room configuration, Vernissage
//! derives world-unit footprints, partitions them across the room's walls,
//! and maps the resulting plan to concrete positions and rotations for a
//! rendering subsystem. A top-down SVG floor plan is available as a
//! diagnostic view of the result.

pub mod config;
pub mod export;
pub mod metrics;
pub mod scene;

mod error;
mod layout;

pub use vernissage_core::{color, footprint, geometry, plan, wall};

pub use error::{ConfigError, VernissageError};
pub use layout::{available_width, plan_walls};

use log::{debug, info};

use vernissage_core::{
    footprint::Footprint,
    plan::{LayoutPlan, PlacedImage, WallPlan},
};

use config::GalleryConfig;
use metrics::{PreparedImage, SourceImage};
use scene::Placement;

/// Builder for planning and placing exhibition rooms.
///
/// This provides an API for processing an exhibit through the metrics,
/// planning, and placement stages.
///
/// # Examples
///
/// ```
/// use vernissage::{GalleryBuilder, metrics::SourceImage};
///
/// let images = vec![
///     SourceImage::new(1600, 1200).with_title("Dawn"),
///     SourceImage::new(900, 1400),
/// ];
///
/// let builder = GalleryBuilder::default();
/// let prepared = builder.prepare(&images).expect("valid configuration");
/// let plan = builder.plan(&prepared).expect("valid configuration");
///
/// assert_eq!(plan.placed_count() + plan.unplaced(), prepared.len());
/// ```
#[derive(Default)]
pub struct GalleryBuilder {
    config: GalleryConfig,
}

impl GalleryBuilder {
    /// Create a new gallery builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Gallery configuration including room dimensions and
    ///   floor-plan style settings
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }

    /// Returns the gallery configuration.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Derive footprints for a batch of source images.
    ///
    /// Images with invalid pixel dimensions are excluded with a warning and
    /// the batch continues; each surviving image keeps the index of its
    /// source in the original input sequence.
    ///
    /// # Errors
    ///
    /// Returns `VernissageError` if the room configuration is invalid.
    pub fn prepare(&self, images: &[SourceImage]) -> Result<Vec<PreparedImage>, VernissageError> {
        self.config.room().validate()?;

        let prepared = metrics::prepare_images(images, self.config.room().long_side());
        debug!(
            images_len = images.len(),
            prepared_len = prepared.len();
            "Images prepared"
        );

        Ok(prepared)
    }

    /// Plan the wall assignment for a prepared batch.
    ///
    /// The returned plan's image indices refer to the original input
    /// sequence, so metadata lookups survive any exclusions made during
    /// preparation.
    ///
    /// # Errors
    ///
    /// Returns `VernissageError` if the room configuration is invalid; no
    /// partial plan is produced.
    pub fn plan(&self, prepared: &[PreparedImage]) -> Result<LayoutPlan, VernissageError> {
        let room = self.config.room();

        let footprints: Vec<Footprint> = prepared.iter().map(|image| image.footprint()).collect();
        let plan = layout::plan_walls(
            &footprints,
            room.wall_width(),
            room.min_margin(),
            room.min_spacing(),
        )?;

        // The planner indexes its own input sequence; translate back to
        // positions in the original input.
        let walls = plan
            .walls()
            .iter()
            .map(|wall_plan| {
                let images = wall_plan
                    .images()
                    .iter()
                    .map(|image| {
                        PlacedImage::new(
                            prepared[image.source_index()].source_index(),
                            image.footprint(),
                            image.offset(),
                        )
                    })
                    .collect();
                WallPlan::new(wall_plan.wall(), images)
            })
            .collect();
        let plan = LayoutPlan::new(walls, plan.unplaced());

        info!(
            placed = plan.placed_count(),
            unplaced = plan.unplaced(),
            walls_len = plan.walls().len();
            "Layout planned"
        );

        Ok(plan)
    }

    /// Map a plan to concrete placements in room space.
    ///
    /// # Errors
    ///
    /// Returns `VernissageError` if a planned wall has no geometry entry.
    pub fn place(&self, plan: &LayoutPlan) -> Result<Vec<Placement>, VernissageError> {
        let room = self.config.room();
        let geometry = scene::wall_geometry_table(room);
        scene::apply_layout(plan, &geometry, room.wall_height())
    }

    /// Render a top-down SVG floor plan of a planned room.
    ///
    /// # Errors
    ///
    /// Returns `VernissageError` for style or geometry errors.
    pub fn render_svg(&self, plan: &LayoutPlan) -> Result<String, VernissageError> {
        let room = self.config.room();
        let geometry = scene::wall_geometry_table(room);

        let rendered =
            export::svg::FloorPlan::new(room, self.config.style()).render(plan, &geometry)?;

        info!("Floor plan rendered successfully");
        Ok(rendered)
    }
}
