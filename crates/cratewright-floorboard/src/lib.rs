#![warn(missing_docs)]

//! Floorboard layout and fastening pattern engine for cratewright.
//!
//! Given a crate's interior width and an already-chosen skid layout,
//! this crate tiles the width with standard dimensional lumber (falling
//! back to a single rip-cut board when no exact tiling exists), derives
//! a nail pattern per board, and checks the result against the floor
//! invariants. Everything is a pure function of its inputs with no
//! shared state, so it is safe to re-run on every configuration change.
//!
//! # Example
//!
//! ```
//! use cratewright_floorboard::{build, validate, CrateDimensions, SkidConfiguration, SkidDimensions};
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
//! assert_eq!(config.total_boards, 2);
//! assert!(validate(&config, &dimensions).is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod nails;
pub mod validate;

pub use builder::{build, FloorboardConfiguration};
pub use error::{LayoutError, Result};
pub use layout::solve;
pub use nails::{nail_pattern, NailPattern};
pub use validate::validate;

use serde::{Deserialize, Serialize};

/// Interior crate dimensions in inches, computed upstream from product
/// size, clearances, and panel thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrateDimensions {
    /// Interior length; skids and floorboards run this direction.
    pub length: f64,
    /// Interior width; floorboards tile across it.
    pub width: f64,
    /// Interior height.
    pub height: f64,
}

/// Skid cross-section in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkidDimensions {
    /// Face width the floorboards are nailed into.
    pub width: f64,
    /// Skid height off the ground.
    pub height: f64,
}

/// Skid layout chosen upstream from product weight.
///
/// `spacing` and `requires_rub_strips` ride along for the producers and
/// consumers of this record; the floor engine itself reads only the
/// count and the face width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkidConfiguration {
    /// Number of skids under the crate.
    pub count: usize,
    /// Center-to-center skid spacing in inches.
    pub spacing: f64,
    /// Cross-section of each skid.
    pub dimensions: SkidDimensions,
    /// Whether the base needs rub strips under the skids.
    pub requires_rub_strips: bool,
}
