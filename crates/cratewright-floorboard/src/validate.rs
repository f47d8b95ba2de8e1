//! Exhaustive invariant checks over a built configuration.
//!
//! An independent second pass for tests and pre-export gates. Unlike
//! the builder, which stops at the first hard failure, this collects
//! every violated invariant so a review surface can show them all.

use cratewright_lumber::{
    is_standard_width, MAX_BOARD_WIDTH, MIN_EDGE_DISTANCE, MIN_NARROW_WIDTH, WIDTH_TOLERANCE,
};

use crate::builder::FloorboardConfiguration;
use crate::CrateDimensions;

/// Check `config` against every floor invariant.
///
/// Returns one human-readable message per violation, with the offending
/// values; an empty vec means the configuration is valid.
pub fn validate(config: &FloorboardConfiguration, dimensions: &CrateDimensions) -> Vec<String> {
    let mut violations = Vec::new();

    let narrow_count = config.floorboards.iter().filter(|b| b.is_narrow).count();
    if narrow_count > 1 {
        violations.push(format!(
            "Only one narrow floorboard is allowed; found {narrow_count}"
        ));
    }

    for board in &config.floorboards {
        if is_standard_width(board.width) {
            continue;
        }
        if board.is_narrow {
            if board.width < MIN_NARROW_WIDTH {
                violations.push(format!(
                    "Narrow floorboard at position {} is {:.2}, less than minimum 2 inches",
                    board.position, board.width
                ));
            }
        } else if board.width <= MIN_NARROW_WIDTH || board.width > MAX_BOARD_WIDTH {
            violations.push(format!(
                "Floorboard at position {} has invalid width {:.2}; \
                 rip cuts must be between {MIN_NARROW_WIDTH} and {MAX_BOARD_WIDTH}",
                board.position, board.width
            ));
        }
    }

    let total_width: f64 = config.floorboards.iter().map(|b| b.width).sum();
    if (total_width - dimensions.width).abs() > WIDTH_TOLERANCE {
        violations.push(format!(
            "Floorboard total width {:.2} does not match crate width {:.2}",
            total_width, dimensions.width
        ));
    }

    for (position, pattern) in &config.nail_patterns {
        if pattern.edge_distance < MIN_EDGE_DISTANCE {
            violations.push(format!(
                "Nail pattern for board {position} has insufficient edge distance \
                 ({} under the {MIN_EDGE_DISTANCE} minimum)",
                pattern.edge_distance
            ));
        }
    }

    violations
}
