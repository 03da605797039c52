//! Color-region analyzer for fridge snapshots.
//!
//! Walks a decoded RGB raster once and tallies pixels into the eight fixed
//! buckets of [`fridge_scan_core::ColorBucket`]. Near-white and near-black
//! pixels are skipped as background before any bucket rule runs, and the
//! rules themselves are priority ordered, so every pixel lands in at most
//! one bucket.
//!
//! ## Quickstart
//!
//! ```
//! use fridge_scan_color::analyze;
//! use fridge_scan_core::RgbImageView;
//!
//! let pixels = vec![255u8, 0, 0]; // one pure red pixel
//! let view = RgbImageView {
//!     width: 1,
//!     height: 1,
//!     data: &pixels,
//! };
//! let tally = analyze(&view);
//! assert_eq!(tally.red, 1);
//! ```

mod analyze;
mod rules;

pub use analyze::analyze;
pub use rules::{classify_pixel, NEAR_BLACK_MAX, NEAR_WHITE_MIN};
