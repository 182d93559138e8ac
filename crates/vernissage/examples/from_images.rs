//! Example: Planning an exhibit from image descriptions
//!
//! This example demonstrates how to programmatically plan and place an
//! exhibit using the builder API, without loading a manifest file.

use vernissage::{GalleryBuilder, metrics::SourceImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Planning exhibit from image descriptions...\n");

    // Describe the images to hang; pixel dimensions drive the panel sizes
    let images = vec![
        SourceImage::new(1600, 1200)
            .with_title("Harbor at Dawn")
            .with_caption("Oil on canvas"),
        SourceImage::new(900, 1400)
            .with_title("Pine Study")
            .with_caption("Charcoal"),
        SourceImage::new(1200, 1200)
            .with_title("Untitled")
            .with_caption("Tempera on wood"),
        SourceImage::new(2000, 800)
            .with_title("Shoreline")
            .with_caption("Watercolor"),
        SourceImage::new(1100, 1500)
            .with_title("Interior with Lamp")
            .with_caption("Oil on panel"),
    ];

    // Plan with the default 10x10 room
    let builder = GalleryBuilder::default();
    let prepared = builder.prepare(&images)?;
    let plan = builder.plan(&prepared)?;

    println!("Planned layout:");
    for wall_plan in plan.walls() {
        println!("  {} wall:", wall_plan.wall());
        for image in wall_plan.images() {
            let title = images[image.source_index()]
                .title()
                .unwrap_or("(untitled)");
            println!(
                "    {:24} {:.2} x {:.2} at offset {:.2}",
                title,
                image.footprint().width(),
                image.footprint().height(),
                image.offset()
            );
        }
    }
    if plan.unplaced() > 0 {
        println!("  ({} image(s) did not fit)", plan.unplaced());
    }
    println!();

    // Map the plan to room-space placements
    let placements = builder.place(&plan)?;
    println!("Placements for the renderer:");
    for placement in &placements {
        let position = placement.position();
        println!(
            "    image #{} at ({:.2}, {:.2}, {:.2}), yaw {:.2} rad",
            placement.source_index(),
            position.x(),
            position.y(),
            position.z(),
            placement.rotation_y()
        );
    }
    println!();

    // Render the floor plan and write it next to the example
    let rendered = builder.render_svg(&plan)?;
    let output_path = "from_images_output.svg";
    std::fs::write(output_path, &rendered)?;
    println!("Floor plan written to: {output_path}");

    Ok(())
}
