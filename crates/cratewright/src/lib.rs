#![warn(missing_docs)]

//! Floorboard layout, fastening, and cut-list engine for industrial
//! shipping crates.
//!
//! Facade over the cratewright subcrates. Given a crate's interior
//! dimensions and its skid layout, [`build`] tiles the width with
//! dimensional lumber and derives the nail pattern per board;
//! [`validate`] re-checks every floor invariant; [`cut_list`] turns the
//! result into purchasable lumber line items for the bill of materials.
//!
//! # Example
//!
//! ```
//! use cratewright::{build, cut_list, validate, CrateDimensions, SkidConfiguration, SkidDimensions};
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
//! assert!(config.errors.is_empty());
//! assert!(validate(&config, &dimensions).is_empty());
//!
//! let lumber = cut_list(&config, dimensions.length);
//! assert_eq!(lumber.len(), 2);
//! ```

pub use cratewright_cutlist;
pub use cratewright_floorboard;
pub use cratewright_lumber;

pub use cratewright_cutlist::{cut_list, nail_spec, LumberLineItem, NailSpec};
pub use cratewright_floorboard::{
    build, nail_pattern, solve, validate, CrateDimensions, FloorboardConfiguration, LayoutError,
    NailPattern, SkidConfiguration, SkidDimensions,
};
pub use cratewright_lumber::{
    Board, NominalSize, FLOORBOARD_THICKNESS, MIN_EDGE_DISTANCE, MIN_NARROW_WIDTH,
    NARROW_THRESHOLD, STANDARD_BOARDS,
};
