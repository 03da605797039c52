//! High-level facade crate for the `fridge-scan-*` workspace.
//!
//! Point it at a photo of an open refrigerator and get back a ranked list
//! of likely ingredients plus a handful of recipe suggestions built from
//! them. This crate provides:
//! - stable, convenient re-exports of the underlying pipeline crates
//! - (feature-gated) end-to-end helpers that decode and rescale an image,
//!   tally its colors, detect ingredients, and synthesize recipes in one
//!   call
//!
//! ## Quickstart
//!
//! ```
//! use fridge_scan::scan::scan_image;
//! use fridge_scan::IngredientDetector;
//! use image::{Rgb, RgbImage};
//!
//! # fn main() -> Result<(), fridge_scan::scan::ScanError> {
//! let photo = RgbImage::from_pixel(64, 64, Rgb([255, 0, 0]));
//! let detector = IngredientDetector::new();
//!
//! let report = scan_image(&photo, &detector)?;
//! assert_eq!(report.ingredients[0].name, "tomatoes");
//! assert!(!report.recipes.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `fridge_scan::core`: shared types (buckets, tallies, candidates, clock).
//! - `fridge_scan::color`: pixel classification and bucket tallying.
//! - `fridge_scan::ingredients`: rule catalog and the ingredient detector.
//! - `fridge_scan::recipes`: recipe templates and synthesis.
//! - `fridge_scan::scan` (feature `image`): end-to-end helpers from
//!   `image::RgbImage` or encoded bytes.
//!
//! Detection is a fixed color heuristic, not a vision model: results are
//! deterministic for a given image, and an unreadable image degrades to a
//! canned ingredient set rather than an error.

pub use fridge_scan_color as color;
pub use fridge_scan_core as core;
pub use fridge_scan_ingredients as ingredients;
pub use fridge_scan_recipes as recipes;

pub use fridge_scan_core::{
    Clock, ColorBucket, ColorTally, FixedClock, IngredientCandidate, RgbImageView, SystemClock,
};
pub use fridge_scan_ingredients::IngredientDetector;
pub use fridge_scan_recipes::{synthesize, Difficulty, Recipe, RecipeIngredient, SynthesisError};

mod report;
pub use report::{ReportError, ScanReport};

#[cfg(feature = "image")]
pub mod scan;
