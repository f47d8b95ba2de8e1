#![warn(missing_docs)]

//! Dimensional-lumber catalog for the cratewright floor engine.
//!
//! Standard board widths, the structural constants the layout and
//! fastening calculations work against, and the [`Board`] value type
//! shared by the solver, validator, and cut-list crates.
//!
//! All dimensions are inches. "Nominal" sizes are lumber trade names;
//! the catalog maps each to its actual dressed width (a nominal 2x6 is
//! 5.5" wide).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal lumber trade size.
///
/// The two custom variants cover rip-cut boards that close out a layout
/// when no exact catalog tiling exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NominalSize {
    /// Nominal 2x4, dressed to 3.5".
    #[serde(rename = "2x4")]
    TwoByFour,
    /// Nominal 2x6, dressed to 5.5".
    #[serde(rename = "2x6")]
    TwoBySix,
    /// Nominal 2x8, dressed to 7.25".
    #[serde(rename = "2x8")]
    TwoByEight,
    /// Nominal 2x10, dressed to 9.25".
    #[serde(rename = "2x10")]
    TwoByTen,
    /// Nominal 2x12, dressed to 11.25".
    #[serde(rename = "2x12")]
    TwoByTwelve,
    /// Rip-cut board at or above the narrow threshold.
    #[serde(rename = "custom")]
    Custom,
    /// The single permitted rip-cut board below the narrow threshold.
    #[serde(rename = "custom-narrow")]
    CustomNarrow,
}

impl NominalSize {
    /// Trade-name string, e.g. `"2x6"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NominalSize::TwoByFour => "2x4",
            NominalSize::TwoBySix => "2x6",
            NominalSize::TwoByEight => "2x8",
            NominalSize::TwoByTen => "2x10",
            NominalSize::TwoByTwelve => "2x12",
            NominalSize::Custom => "custom",
            NominalSize::CustomNarrow => "custom-narrow",
        }
    }

    /// Actual dressed width for catalog sizes; `None` for custom cuts.
    pub fn actual_width(&self) -> Option<f64> {
        STANDARD_BOARDS
            .iter()
            .find(|(nominal, _)| nominal == self)
            .map(|&(_, width)| width)
    }
}

impl fmt::Display for NominalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog of stock floorboard sizes, widest first.
///
/// The layout solver relies on this ordering: it tries the widest board
/// at every step and backtracks toward narrower ones.
pub const STANDARD_BOARDS: [(NominalSize, f64); 5] = [
    (NominalSize::TwoByTwelve, 11.25),
    (NominalSize::TwoByTen, 9.25),
    (NominalSize::TwoByEight, 7.25),
    (NominalSize::TwoBySix, 5.5),
    (NominalSize::TwoByFour, 3.5),
];

/// Widest catalog board. Upper bound for any single floorboard.
pub const MAX_BOARD_WIDTH: f64 = STANDARD_BOARDS[0].1;

/// Narrowest board that can be manufactured at all, standard or custom.
pub const MIN_NARROW_WIDTH: f64 = 2.0;

/// Boards below this width are tagged `custom-narrow`; a layout may
/// contain at most one of them.
pub const NARROW_THRESHOLD: f64 = 2.5;

/// Minimum fastener-to-edge distance, to avoid splitting the board.
pub const MIN_EDGE_DISTANCE: f64 = 0.75;

/// Actual dressed thickness of nominal 2" floorboard stock.
pub const FLOORBOARD_THICKNESS: f64 = 1.5;

/// Nominal thickness used for board-foot volume, per lumber-trade
/// convention for 2x stock.
pub const NOMINAL_THICKNESS: f64 = 2.0;

/// Flush-end tolerance (1/8"). Board runs within this of the crate
/// width count as matching.
pub const WIDTH_TOLERANCE: f64 = 0.125;

/// Epsilon for exact-width float comparisons. Catalog widths are binary
/// quarters, so realistic layouts terminate exactly; this only absorbs
/// accumulated rounding on fractional inputs.
pub const WIDTH_EPSILON: f64 = 1e-6;

/// Is `width` one of the catalog widths (within [`WIDTH_EPSILON`])?
pub fn is_standard_width(width: f64) -> bool {
    STANDARD_BOARDS
        .iter()
        .any(|&(_, standard)| (width - standard).abs() <= WIDTH_EPSILON)
}

/// One floorboard in a layout, placed left to right across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Actual width in inches.
    pub width: f64,
    /// Trade size, or a custom tag for rip-cut boards.
    pub nominal: NominalSize,
    /// Ordinal index from the left edge, 0-based.
    pub position: usize,
    /// True for the single permitted board below [`NARROW_THRESHOLD`].
    pub is_narrow: bool,
}

impl Board {
    /// A catalog board of the given trade size.
    pub fn standard(nominal: NominalSize, width: f64, position: usize) -> Self {
        Self {
            width,
            nominal,
            position,
            is_narrow: false,
        }
    }

    /// A rip-cut board absorbing a non-catalog remainder.
    ///
    /// Tags the board `custom-narrow` below [`NARROW_THRESHOLD`] and
    /// `custom` at or above it.
    pub fn custom(width: f64, position: usize) -> Self {
        let is_narrow = width < NARROW_THRESHOLD;
        Self {
            width,
            nominal: if is_narrow {
                NominalSize::CustomNarrow
            } else {
                NominalSize::Custom
            },
            position,
            is_narrow,
        }
    }
}
