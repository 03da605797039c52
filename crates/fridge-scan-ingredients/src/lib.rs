//! Ingredient detection from color bucket tallies.
//!
//! Maps the analyzer's [`fridge_scan_core::ColorTally`] through a fixed
//! bucket-to-ingredient rule table into ranked
//! [`fridge_scan_core::IngredientCandidate`]s. Detection is deterministic
//! given a tally; only the no-signal fallback path consults the clock, to
//! rotate between three canned ingredient sets.
//!
//! ## Quickstart
//!
//! ```
//! use fridge_scan_core::ColorTally;
//! use fridge_scan_ingredients::IngredientDetector;
//!
//! let tally = ColorTally {
//!     red: 600,
//!     ..Default::default()
//! };
//! let detector = IngredientDetector::new();
//! let found = detector.detect(&tally);
//! assert_eq!(found[0].name, "tomatoes");
//! assert_eq!(found[0].confidence, 92);
//! ```

mod catalog;
mod detector;
mod fallback;

pub use catalog::{BucketRule, CandidateSpec, BUILTIN_CATALOG};
pub use detector::{IngredientDetector, MAX_CANDIDATES};
pub use fallback::FALLBACK_ROTATION_SECS;
