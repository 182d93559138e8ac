//! CLI logic for the Vernissage exhibition layout tool.
//!
//! This module contains the core CLI logic for the Vernissage exhibition
//! layout tool.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod manifest;

pub use args::{Args, OutputFormat};
pub use error::CliError;

use std::fs;

use log::{info, warn};
use serde::Serialize;

use vernissage::{GalleryBuilder, scene::Placement};

use manifest::Exhibit;

/// Serialized layout handed to renderer consumers in JSON mode.
#[derive(Debug, Serialize)]
struct LayoutOutput<'a> {
    title: Option<&'a str>,
    placements: &'a [Placement],
    unplaced: usize,
}

/// Run the Vernissage CLI application
///
/// This function processes the exhibit manifest through the Vernissage
/// pipeline and writes the resulting floor plan or placement list to the
/// output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Manifest parsing errors
/// - Planning and placement errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Planning exhibit"
    );

    // Load configuration and the exhibit manifest
    let gallery_config = config::load_config(args.config.as_ref())?;
    let exhibit = Exhibit::load(&args.input)?;
    info!(
        images_len = exhibit.images().len(),
        title:? = exhibit.title();
        "Manifest loaded"
    );

    // Process the exhibit using the GalleryBuilder API
    let builder = GalleryBuilder::new(gallery_config);
    let prepared = builder.prepare(exhibit.images())?;
    let plan = builder.plan(&prepared)?;

    if plan.unplaced() > 0 {
        warn!(unplaced = plan.unplaced(); "Not every image fit on the walls");
    }

    let output = match args.format {
        OutputFormat::Svg => builder.render_svg(&plan)?,
        OutputFormat::Json => {
            let placements = builder.place(&plan)?;
            serde_json::to_string_pretty(&LayoutOutput {
                title: exhibit.title(),
                placements: &placements,
                unplaced: plan.unplaced(),
            })?
        }
    };

    // Write output file
    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}
