//! Core types and utilities for fridge snapshot scanning.
//!
//! This crate is intentionally small and purely descriptive. It does *not*
//! depend on any concrete image decoder, detection rule set, or recipe
//! logic.

mod bucket;
mod clock;
mod image;
mod ingredient;
mod logger;

pub use bucket::{ColorBucket, ColorTally};
pub use clock::{Clock, FixedClock, SystemClock};
pub use image::RgbImageView;
pub use ingredient::IngredientCandidate;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
