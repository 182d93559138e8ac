//! The wall layout planner.
//!
//! Partitions an ordered footprint sequence across the fixed walls: each
//! wall greedily accepts consecutive footprints up to its hanging width,
//! the occupied run is centered between the margins, and offsets are
//! assigned along the wall's placement axis. The planner is a pure function
//! of its inputs and may be called repeatedly or concurrently for different
//! rooms without synchronization.

use log::{debug, info};

use vernissage_core::{
    footprint::Footprint,
    plan::{LayoutPlan, PlacedImage, WallPlan},
    wall::Wall,
};

use crate::{error::ConfigError, layout::positioning};

/// Usable hanging width of a wall after both margins.
///
/// # Errors
///
/// Returns [`ConfigError`] if the margin or spacing is negative, or if the
/// margins consume the entire wall width.
pub fn available_width(
    wall_width: f64,
    min_margin: f64,
    min_spacing: f64,
) -> Result<f64, ConfigError> {
    if min_margin < 0.0 {
        return Err(ConfigError::NegativeMargin(min_margin));
    }
    if min_spacing < 0.0 {
        return Err(ConfigError::NegativeSpacing(min_spacing));
    }

    let available = wall_width - 2.0 * min_margin;
    if available <= 0.0 {
        return Err(ConfigError::RoomTooNarrow {
            wall_width,
            min_margin,
        });
    }

    Ok(available)
}

/// Plans the placement of a footprint sequence across the walls.
///
/// Walls are filled in [`Wall::PLACEMENT_ORDER`]. Starting from a cursor at
/// the first footprint, each wall greedily accepts consecutive footprints
/// while they fit within the hanging width, charging spacing only between
/// accepted neighbors. A wall that cannot fit even the next single footprint
/// is skipped without consuming it, and the next wall is tried with the same
/// cursor; footprints still left after the last wall are dropped and
/// reported through [`LayoutPlan::unplaced`]. Images are never split or
/// shrunk to fit.
///
/// On each wall the occupied run is centered between the margins, and
/// [`Wall::reversed`] decides whether the accepted footprints are placed in
/// forward or reverse input order. Reversal changes only the visual
/// placement order, never which footprints a wall consumes.
///
/// # Errors
///
/// Returns [`ConfigError`] when the margins leave no hanging width or a
/// constraint is negative. Configuration failures are fatal: no partial
/// plan is produced.
pub fn plan_walls(
    footprints: &[Footprint],
    wall_width: f64,
    min_margin: f64,
    min_spacing: f64,
) -> Result<LayoutPlan, ConfigError> {
    let available = available_width(wall_width, min_margin, min_spacing)?;

    let mut walls = Vec::new();
    let mut cursor = 0;

    for wall in Wall::PLACEMENT_ORDER {
        // Greedily accept consecutive footprints while they fit.
        let mut count = 0;
        let mut span = 0.0;
        while cursor + count < footprints.len() {
            let width = footprints[cursor + count].width();
            let spacing = if count > 0 { min_spacing } else { 0.0 };
            if span + spacing + width > available {
                break;
            }
            span += spacing + width;
            count += 1;
        }

        if count == 0 {
            if cursor < footprints.len() {
                debug!(wall = wall.as_str(); "Wall skipped, next footprint does not fit");
            }
            continue;
        }

        // Center the occupied run inside the hanging width.
        let extra_space = available - span;
        let start = min_margin + extra_space / 2.0;

        let order: Vec<usize> = if wall.reversed() {
            (cursor..cursor + count).rev().collect()
        } else {
            (cursor..cursor + count).collect()
        };

        let widths: Vec<f64> = order.iter().map(|&i| footprints[i].width()).collect();
        let offsets = positioning::distribute_along(&widths, start, min_spacing);

        let images = order
            .iter()
            .zip(offsets)
            .map(|(&index, offset)| PlacedImage::new(index, footprints[index], offset))
            .collect();

        debug!(wall = wall.as_str(), count, start; "Wall filled");

        walls.push(WallPlan::new(wall, images));
        cursor += count;
    }

    let unplaced = footprints.len() - cursor;
    if unplaced > 0 {
        info!(unplaced; "Exhibit truncated, walls are out of capacity");
    }

    Ok(LayoutPlan::new(walls, unplaced))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn squares(widths: &[f64]) -> Vec<Footprint> {
        widths.iter().map(|&w| Footprint::new(w, w)).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_plan() {
        let plan = plan_walls(&[], 10.0, 1.0, 0.5).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.unplaced(), 0);
    }

    #[test]
    fn test_rejects_narrow_room() {
        let err = plan_walls(&squares(&[3.0]), 2.0, 1.0, 0.5).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RoomTooNarrow {
                wall_width: 2.0,
                min_margin: 1.0
            }
        );
    }

    #[test]
    fn test_rejects_negative_margin() {
        let err = plan_walls(&squares(&[3.0]), 10.0, -0.5, 0.5).unwrap_err();
        assert_eq!(err, ConfigError::NegativeMargin(-0.5));
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let err = plan_walls(&squares(&[3.0]), 10.0, 1.0, -0.1).unwrap_err();
        assert_eq!(err, ConfigError::NegativeSpacing(-0.1));
    }

    #[test]
    fn test_single_image_centered_without_spacing() {
        // Hanging width 8, one 3-wide panel: extra space 5, so the panel
        // starts at 1 + 2.5 and its center lands on the wall midpoint.
        let plan = plan_walls(&squares(&[3.0]), 10.0, 1.0, 0.5).unwrap();

        assert_eq!(plan.walls().len(), 1);
        let front = &plan.walls()[0];
        assert_eq!(front.wall(), Wall::Front);
        assert_eq!(front.images().len(), 1);
        assert_approx_eq!(f64, front.images()[0].offset(), 5.0);
    }

    #[test]
    fn test_three_squares_spill_to_second_wall() {
        // Hanging width 8: two 3-wide panels occupy 6.5, a third would need
        // 10, so it spills to the right wall and hangs there alone.
        let plan = plan_walls(&squares(&[3.0, 3.0, 3.0]), 10.0, 1.0, 0.5).unwrap();

        assert_eq!(plan.walls().len(), 2);
        assert_eq!(plan.unplaced(), 0);

        let front = &plan.walls()[0];
        assert_eq!(front.wall(), Wall::Front);
        assert_eq!(front.images().len(), 2);
        // Front is reversed: the later image hangs leftmost.
        assert_eq!(front.images()[0].source_index(), 1);
        assert_eq!(front.images()[1].source_index(), 0);
        assert_approx_eq!(f64, front.images()[0].offset(), 3.25, epsilon = 1e-9);
        assert_approx_eq!(f64, front.images()[1].offset(), 6.75, epsilon = 1e-9);

        let right = &plan.walls()[1];
        assert_eq!(right.wall(), Wall::Right);
        assert_eq!(right.images().len(), 1);
        assert_eq!(right.images()[0].source_index(), 2);
        assert_approx_eq!(f64, right.images()[0].offset(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_right_wall_keeps_forward_order() {
        // Fill the front wall exactly, then watch the next three land on
        // the right wall in forward input order.
        let plan = plan_walls(&squares(&[4.0, 3.5, 1.0, 1.5, 2.0]), 10.0, 1.0, 0.5).unwrap();

        assert_eq!(plan.walls().len(), 2);
        let right = &plan.walls()[1];
        assert_eq!(right.wall(), Wall::Right);
        let indices: Vec<usize> = right.images().iter().map(|i| i.source_index()).collect();
        assert_eq!(indices, vec![2, 3, 4]);

        // Forward order means ascending offsets follow ascending indices.
        assert!(right.images()[0].offset() < right.images()[1].offset());
        assert!(right.images()[1].offset() < right.images()[2].offset());
    }

    #[test]
    fn test_left_wall_reverses_its_run() {
        // Two panels fill front, two fill right, the last two land on the
        // left wall in reverse input order.
        let plan = plan_walls(
            &squares(&[4.0, 3.5, 4.0, 3.5, 2.0, 1.0]),
            10.0,
            1.0,
            0.5,
        )
        .unwrap();

        assert_eq!(plan.walls().len(), 3);
        let left = &plan.walls()[2];
        assert_eq!(left.wall(), Wall::Left);
        let indices: Vec<usize> = left.images().iter().map(|i| i.source_index()).collect();
        assert_eq!(indices, vec![5, 4]);
    }

    #[test]
    fn test_oversized_image_yields_empty_plan() {
        let plan = plan_walls(&squares(&[9.0]), 10.0, 1.0, 0.5).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.unplaced(), 1);
    }

    #[test]
    fn test_oversized_image_blocks_the_rest() {
        // The oversized second image fits no wall; because consumption is
        // strictly sequential it truncates everything behind it.
        let plan = plan_walls(&squares(&[3.0, 9.0, 3.0]), 10.0, 1.0, 0.5).unwrap();

        assert_eq!(plan.walls().len(), 1);
        assert_eq!(plan.walls()[0].images().len(), 1);
        assert_eq!(plan.walls()[0].images()[0].source_index(), 0);
        assert_eq!(plan.unplaced(), 2);
    }

    #[test]
    fn test_centering_law_on_front_wall() {
        let plan = plan_walls(&squares(&[3.0, 2.0]), 10.0, 1.0, 0.5).unwrap();

        let front = &plan.walls()[0];
        let span: f64 = positioning::occupied_span(
            &front
                .images()
                .iter()
                .map(|i| i.footprint().width())
                .collect::<Vec<_>>(),
            0.5,
        );
        let first_left_edge = front.images()[0].near_edge();
        assert_approx_eq!(f64, first_left_edge, 1.0 + (8.0 - span) / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_spacing_kept_between_neighbors() {
        let plan = plan_walls(&squares(&[3.0, 3.0]), 10.0, 1.0, 0.5).unwrap();

        let images = plan.walls()[0].images();
        assert_approx_eq!(
            f64,
            images[1].near_edge() - images[0].far_edge(),
            0.5,
            epsilon = 1e-9
        );
    }

    proptest! {
        #[test]
        fn prop_indices_unique_and_exhaustive(
            widths in prop::collection::vec(0.5f64..4.0, 0..12),
            wall_width in 6.0f64..20.0,
            min_margin in 0.0f64..2.0,
            min_spacing in 0.0f64..1.0,
        ) {
            prop_assume!(wall_width - 2.0 * min_margin > 0.0);
            let footprints = squares(&widths);
            let plan = plan_walls(&footprints, wall_width, min_margin, min_spacing).unwrap();

            let mut seen = std::collections::HashSet::new();
            for wall_plan in plan.walls() {
                for image in wall_plan.images() {
                    prop_assert!(image.source_index() < footprints.len());
                    prop_assert!(seen.insert(image.source_index()));
                }
            }
            prop_assert_eq!(plan.placed_count() + plan.unplaced(), footprints.len());
        }

        #[test]
        fn prop_no_wall_overflows(
            widths in prop::collection::vec(0.5f64..4.0, 0..12),
            wall_width in 6.0f64..20.0,
            min_margin in 0.0f64..2.0,
            min_spacing in 0.0f64..1.0,
        ) {
            prop_assume!(wall_width - 2.0 * min_margin > 0.0);
            let available = wall_width - 2.0 * min_margin;
            let footprints = squares(&widths);
            let plan = plan_walls(&footprints, wall_width, min_margin, min_spacing).unwrap();

            for wall_plan in plan.walls() {
                let wall_widths: Vec<f64> = wall_plan
                    .images()
                    .iter()
                    .map(|i| i.footprint().width())
                    .collect();
                let span = positioning::occupied_span(&wall_widths, min_spacing);
                prop_assert!(span <= available + 1e-9);
            }
        }

        #[test]
        fn prop_first_panel_obeys_centering_law(
            widths in prop::collection::vec(0.5f64..4.0, 1..12),
            wall_width in 6.0f64..20.0,
            min_margin in 0.0f64..2.0,
            min_spacing in 0.0f64..1.0,
        ) {
            prop_assume!(wall_width - 2.0 * min_margin > 0.0);
            let available = wall_width - 2.0 * min_margin;
            let footprints = squares(&widths);
            let plan = plan_walls(&footprints, wall_width, min_margin, min_spacing).unwrap();

            for wall_plan in plan.walls() {
                let wall_widths: Vec<f64> = wall_plan
                    .images()
                    .iter()
                    .map(|i| i.footprint().width())
                    .collect();
                let span = positioning::occupied_span(&wall_widths, min_spacing);
                let expected = min_margin + (available - span) / 2.0;
                let actual = wall_plan.images()[0].near_edge();
                prop_assert!((actual - expected).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_neighbors_never_overlap(
            widths in prop::collection::vec(0.5f64..4.0, 0..12),
            wall_width in 6.0f64..20.0,
            min_margin in 0.0f64..2.0,
            min_spacing in 0.0f64..1.0,
        ) {
            prop_assume!(wall_width - 2.0 * min_margin > 0.0);
            let footprints = squares(&widths);
            let plan = plan_walls(&footprints, wall_width, min_margin, min_spacing).unwrap();

            for wall_plan in plan.walls() {
                for pair in wall_plan.images().windows(2) {
                    prop_assert!(
                        pair[0].far_edge() + min_spacing <= pair[1].near_edge() + 1e-9
                    );
                }
            }
        }

        #[test]
        fn prop_planning_is_idempotent(
            widths in prop::collection::vec(0.5f64..4.0, 0..12),
            wall_width in 6.0f64..20.0,
            min_margin in 0.0f64..2.0,
            min_spacing in 0.0f64..1.0,
        ) {
            prop_assume!(wall_width - 2.0 * min_margin > 0.0);
            let footprints = squares(&widths);
            let first = plan_walls(&footprints, wall_width, min_margin, min_spacing).unwrap();
            let second = plan_walls(&footprints, wall_width, min_margin, min_spacing).unwrap();
            // Bit-identical offsets and identical wall assignment.
            prop_assert_eq!(first, second);
        }
    }
}
