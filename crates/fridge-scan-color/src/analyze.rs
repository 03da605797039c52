//! Single-pass bucket tallying over an RGB raster.

use fridge_scan_core::{ColorTally, RgbImageView};
use log::debug;

use crate::rules::classify_pixel;

/// Tally every pixel of `image` into color buckets.
///
/// Visits each RGB triple exactly once, in buffer order. Counts are
/// absolute pixel counts, so callers must hold the analysis resolution
/// fixed for downstream thresholds to keep their meaning; the `fridge-scan`
/// facade rescales inputs to a 200 px longest side before calling this.
pub fn analyze(image: &RgbImageView<'_>) -> ColorTally {
    let mut tally = ColorTally::default();
    for [r, g, b] in image.pixels() {
        if let Some(bucket) = classify_pixel(r, g, b) {
            tally.add(bucket);
        }
    }
    debug!(
        "tallied {} of {}x{} px into color buckets: {:?}",
        tally.total(),
        image.width,
        image.height,
        tally
    );
    tally
}
