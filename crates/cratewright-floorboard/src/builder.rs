//! Floorboard configuration assembly.
//!
//! Runs the layout solver over a crate/skid pair and derives the full
//! fastening plan. This is the engine's outer boundary: it never fails,
//! and a solver failure comes back as data in `errors` so the caller
//! can render an invalid-configuration state instead of crashing.

use std::collections::BTreeMap;

use cratewright_lumber::{Board, FLOORBOARD_THICKNESS, WIDTH_TOLERANCE};
use serde::{Deserialize, Serialize};

use crate::layout;
use crate::nails::{nail_pattern, NailPattern};
use crate::{CrateDimensions, SkidConfiguration};

/// Complete floor plan for one crate, with diagnostics.
///
/// A non-empty `errors` means the layout is unsatisfiable and
/// `floorboards` must not be used. `warnings` flag conditions worth a
/// manufacturing review but do not block use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorboardConfiguration {
    /// Boards in placement order, left to right.
    pub floorboards: Vec<Board>,
    /// Number of boards placed.
    pub total_boards: usize,
    /// Whether the layout needed its one permitted narrow board.
    pub has_narrow_board: bool,
    /// Width of the narrow board, when present.
    pub narrow_board_width: Option<f64>,
    /// Nail pattern per board, keyed by board position.
    pub nail_patterns: BTreeMap<usize, NailPattern>,
    /// Nails across all boards and skids.
    pub total_nails: u32,
    /// Actual board thickness in inches.
    pub floorboard_thickness: f64,
    /// Conditions worth a manufacturing review.
    pub warnings: Vec<String>,
    /// Hard failures; non-empty means the configuration is unusable.
    pub errors: Vec<String>,
}

impl FloorboardConfiguration {
    fn failed(error: String) -> Self {
        Self {
            floorboards: Vec::new(),
            total_boards: 0,
            has_narrow_board: false,
            narrow_board_width: None,
            nail_patterns: BTreeMap::new(),
            total_nails: 0,
            floorboard_thickness: FLOORBOARD_THICKNESS,
            warnings: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Build the floorboard configuration for a crate over its skid layout.
///
/// Tiles `dimensions.width` and derives one nail pattern per board from
/// the skid face width and count. Never fails: an unsatisfiable width
/// is captured in the returned `errors`.
pub fn build(dimensions: &CrateDimensions, skids: &SkidConfiguration) -> FloorboardConfiguration {
    let floorboards = match layout::solve(dimensions.width) {
        Ok(boards) => boards,
        Err(err) => return FloorboardConfiguration::failed(err.to_string()),
    };

    let mut nail_patterns = BTreeMap::new();
    let mut total_nails = 0;
    for board in &floorboards {
        let pattern = nail_pattern(board.width, skids.dimensions.width, skids.count);
        total_nails += pattern.total_nails;
        nail_patterns.insert(board.position, pattern);
    }

    let mut warnings = Vec::new();
    let narrow_board_width = floorboards.iter().find(|b| b.is_narrow).map(|b| b.width);
    if let Some(width) = narrow_board_width {
        warnings.push(format!(
            "Using one narrow board ({width:.2}) to achieve proper fit; \
             a single board under 2.5 is permitted"
        ));
    }

    let total_width: f64 = floorboards.iter().map(|b| b.width).sum();
    let drift = (total_width - dimensions.width).abs();
    if drift > WIDTH_TOLERANCE {
        warnings.push(format!(
            "Floorboard total width {total_width:.2} differs from crate width {:.2} by {drift:.3}",
            dimensions.width
        ));
    }

    FloorboardConfiguration {
        total_boards: floorboards.len(),
        has_narrow_board: narrow_board_width.is_some(),
        narrow_board_width,
        floorboards,
        nail_patterns,
        total_nails,
        floorboard_thickness: FLOORBOARD_THICKNESS,
        warnings,
        errors: Vec::new(),
    }
}
