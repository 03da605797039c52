//! End-to-end scanning helpers built on the `image` crate.
//!
//! This layer owns the resolution policy: every input is rescaled so its
//! longest side equals [`ANALYSIS_MAX_DIMENSION`] before color analysis,
//! with aspect preserved and smaller images scaled up. Downstream bucket
//! thresholds are absolute pixel counts over that canvas.

use fridge_scan_core::{ColorTally, IngredientCandidate, RgbImageView};
use fridge_scan_ingredients::IngredientDetector;
use log::warn;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::report::ScanReport;

/// Longest image side, in pixels, the color analyzer sees.
pub const ANALYSIS_MAX_DIMENSION: u32 = 200;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("invalid RGB image buffer length (expected {expected} bytes, got {got})")]
    InvalidRgbBuffer { expected: usize, got: usize },

    #[error("invalid RGB image dimensions (width={width}, height={height})")]
    InvalidRgbDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Synthesis(#[from] fridge_scan_recipes::SynthesisError),
}

/// Convert an `image::RgbImage` into the lightweight `fridge-scan-core`
/// view type.
pub fn rgb_view(img: &::image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Rescale `img` so its longest side equals [`ANALYSIS_MAX_DIMENSION`].
///
/// Aspect is preserved and rounded to at least one pixel per side. Inputs
/// smaller than the canvas are scaled up, never passed through.
pub fn resize_for_analysis(img: &::image::RgbImage) -> ::image::RgbImage {
    let (width, height) = img.dimensions();
    let longest = width.max(height);
    if longest == ANALYSIS_MAX_DIMENSION {
        return img.clone();
    }
    let scale = f64::from(ANALYSIS_MAX_DIMENSION) / f64::from(longest);
    let target_w = ((f64::from(width) * scale).round() as u32).max(1);
    let target_h = ((f64::from(height) * scale).round() as u32).max(1);
    ::image::imageops::resize(img, target_w, target_h, ::image::imageops::FilterType::Lanczos3)
}

/// Rescale, tally, and detect: the shared step behind
/// [`detect_ingredients`] and [`scan_image`].
fn tally_and_detect(
    img: &::image::RgbImage,
    detector: &IngredientDetector,
) -> (ColorTally, Vec<IngredientCandidate>) {
    let resized = resize_for_analysis(img);
    let tally = fridge_scan_color::analyze(&rgb_view(&resized));
    let ingredients = detector.detect(&tally);
    (tally, ingredients)
}

/// Rescale and tally, returning ranked ingredient candidates.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, detector), fields(width = img.width(), height = img.height()))
)]
pub fn detect_ingredients(
    img: &::image::RgbImage,
    detector: &IngredientDetector,
) -> Vec<IngredientCandidate> {
    tally_and_detect(img, detector).1
}

/// Run the full pipeline on a decoded photo: rescale, tally, detect,
/// synthesize.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, detector), fields(width = img.width(), height = img.height()))
)]
pub fn scan_image(
    img: &::image::RgbImage,
    detector: &IngredientDetector,
) -> Result<ScanReport, ScanError> {
    let (tally, ingredients) = tally_and_detect(img, detector);
    let recipes = fridge_scan_recipes::synthesize(&ingredients)?;
    Ok(ScanReport {
        color_tally: Some(tally),
        ingredients,
        recipes,
    })
}

/// Run the full pipeline on encoded image bytes.
///
/// Decode failures are not surfaced: the rotating fallback ingredients
/// stand in for the unreadable image (with `color_tally` left `None`), so
/// the caller always receives ingredients and recipes.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(bytes, detector), fields(len = bytes.len()))
)]
pub fn scan_image_bytes(
    bytes: &[u8],
    detector: &IngredientDetector,
) -> Result<ScanReport, ScanError> {
    match ::image::load_from_memory(bytes) {
        Ok(decoded) => scan_image(&decoded.to_rgb8(), detector),
        Err(err) => {
            warn!("image decode failed ({err}); serving fallback ingredients");
            let ingredients = detector.fallback_candidates();
            let recipes = fridge_scan_recipes::synthesize(&ingredients)?;
            Ok(ScanReport {
                color_tally: None,
                ingredients,
                recipes,
            })
        }
    }
}

/// Run the full pipeline on a raw interleaved RGB buffer.
pub fn scan_rgb_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
    detector: &IngredientDetector,
) -> Result<ScanReport, ScanError> {
    let img = rgb_image_from_slice(width, height, pixels)?;
    scan_image(&img, detector)
}

/// Build an `image::RgbImage` from a raw interleaved RGB buffer.
pub fn rgb_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<::image::RgbImage, ScanError> {
    if width == 0 || height == 0 {
        return Err(ScanError::InvalidRgbDimensions { width, height });
    }
    let Some(expected) = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
    else {
        return Err(ScanError::InvalidRgbDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(ScanError::InvalidRgbBuffer {
            expected,
            got: pixels.len(),
        });
    }
    ::image::RgbImage::from_raw(width, height, pixels.to_vec())
        .ok_or(ScanError::InvalidRgbDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgb, RgbImage};

    #[test]
    fn resize_hits_the_canvas_on_the_longest_side() {
        let cases = [
            ((400, 100), (200, 50)),  // downscale, landscape
            ((50, 400), (25, 200)),   // downscale, portrait
            ((100, 50), (200, 100)),  // upscale
            ((300, 300), (200, 200)), // square
            ((200, 80), (200, 80)),   // already on the canvas
            ((1000, 1), (200, 1)),    // short side clamps to one pixel
        ];
        for ((w, h), expected) in cases {
            let img = RgbImage::from_pixel(w, h, Rgb([120, 80, 130]));
            let out = resize_for_analysis(&img);
            assert_eq!(out.dimensions(), expected, "input {w}x{h}");
        }
    }

    #[test]
    fn rgb_image_from_slice_validates_len_and_dims() {
        let pixels = vec![0u8; 2 * 2 * 3];
        assert!(rgb_image_from_slice(2, 2, &pixels).is_ok());

        let err = rgb_image_from_slice(2, 2, &pixels[..11]).unwrap_err();
        assert!(matches!(
            err,
            ScanError::InvalidRgbBuffer {
                expected: 12,
                got: 11
            }
        ));

        let err = rgb_image_from_slice(0, 2, &[]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidRgbDimensions { .. }));
    }
}
