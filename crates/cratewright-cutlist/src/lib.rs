#![warn(missing_docs)]

//! Lumber purchasing output for a floorboard configuration.
//!
//! Aggregates the boards of a built floor into purchasable line items
//! with board-foot volumes, and exposes the fastener purchasing record,
//! both consumed by the bill-of-materials generator.
//!
//! # Example
//!
//! ```
//! use cratewright_cutlist::cut_list;
//! use cratewright_floorboard::{build, CrateDimensions, SkidConfiguration, SkidDimensions};
//!
//! let dimensions = CrateDimensions { length: 48.0, width: 14.75, height: 40.0 };
//! let skids = SkidConfiguration {
//!     count: 3,
//!     spacing: 20.0,
//!     dimensions: SkidDimensions { width: 4.0, height: 4.0 },
//!     requires_rub_strips: false,
//! };
//!
//! let config = build(&dimensions, &skids);
//! let items = cut_list(&config, dimensions.length);
//! assert_eq!(items.len(), 2);
//! ```

use cratewright_floorboard::FloorboardConfiguration;
use cratewright_lumber::{NominalSize, NOMINAL_THICKNESS};
use serde::{Deserialize, Serialize};

/// One purchasable lumber line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumberLineItem {
    /// Trade size to order, or a custom tag for rip-cut stock.
    pub nominal: NominalSize,
    /// Number of boards of this size.
    pub quantity: usize,
    /// Board length in inches; floorboards span the full crate length.
    pub length: f64,
    /// Board-foot volume over the whole group, at nominal thickness.
    pub board_feet: f64,
}

/// Fastener purchasing record for the bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NailSpec {
    /// Fastener type name.
    pub nail_type: String,
    /// Trade size designation.
    pub size: String,
    /// Shank length in inches.
    pub length: f64,
    /// Penny-weight designation.
    pub penny_weight: String,
}

/// Aggregate the floorboards of `config` into lumber line items.
///
/// Boards group by nominal size (each custom tag is its own group) in
/// first-appearance order. Every floorboard spans the full crate
/// length, so `length` is `crate_length` on every line. Board feet use
/// the nominal 2" thickness per lumber-trade convention; an empty
/// configuration or zero length simply yields zero volume.
pub fn cut_list(config: &FloorboardConfiguration, crate_length: f64) -> Vec<LumberLineItem> {
    let mut items: Vec<LumberLineItem> = Vec::new();

    for board in &config.floorboards {
        let board_feet = NOMINAL_THICKNESS * board.width * crate_length / 144.0;
        match items.iter_mut().find(|item| item.nominal == board.nominal) {
            Some(item) => {
                item.quantity += 1;
                item.board_feet += board_feet;
            }
            None => items.push(LumberLineItem {
                nominal: board.nominal,
                quantity: 1,
                length: crate_length,
                board_feet,
            }),
        }
    }

    items
}

/// Fastener specification for floorboard attachment: 10d common nails.
pub fn nail_spec() -> NailSpec {
    NailSpec {
        nail_type: "Common Nail".to_string(),
        size: "10d".to_string(),
        length: 3.0,
        penny_weight: "10d".to_string(),
    }
}
