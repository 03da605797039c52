//! Priority-ordered pixel classification rules.

use fridge_scan_core::ColorBucket;

/// A pixel whose channels are all strictly above this reads as white
/// background or glare and is skipped before any bucket rule runs.
pub const NEAR_WHITE_MIN: u8 = 200;

/// A pixel whose channels are all strictly below this reads as shadow and
/// is skipped before any bucket rule runs.
pub const NEAR_BLACK_MAX: u8 = 30;

/// Channel predicate for one rule. Channels arrive widened to `i32` so the
/// offset comparisons cannot wrap.
type ChannelRule = fn(i32, i32, i32) -> bool;

/// Bucket rules in priority order; the first match wins and later rules
/// never see the pixel. The bounds are hand-tuned against fridge photos;
/// keep the table as tuned rather than simplifying terms (the orange
/// rule's `g > 60` is shadowed by `g > 80` and stays).
const RULES: [(ColorBucket, ChannelRule); 8] = [
    (ColorBucket::Red, |r, g, b| r > 150 && r > g + 40 && r > b + 40),
    (ColorBucket::Orange, |r, g, b| {
        r > 140 && g > 80 && g > 60 && b < 80
    }),
    (ColorBucket::Yellow, |r, g, b| r > 150 && g > 130 && b < 100),
    (ColorBucket::Green, |r, g, b| {
        g > r + 20 && g > b + 20 && g > 80
    }),
    (ColorBucket::DarkGreen, |r, g, b| {
        g > 40 && g > r && g > b && g < 120
    }),
    (ColorBucket::Purple, |r, g, b| {
        r > 80 && r < 150 && b > r - 40 && g < r - 20
    }),
    (ColorBucket::Brown, |r, g, b| {
        r > 80 && r < 160 && g > 60 && g < r + 30 && b > 40 && b < g
    }),
    (ColorBucket::White, |r, g, b| r > 180 && g > 180 && b > 180),
];

/// Classify one RGB pixel into at most one color bucket.
///
/// The near-white and near-black skips fire first, so a pure white pixel
/// never reaches the `White` bucket; only channels in the `(180, 200]`
/// band on all three components land there. Pixels matching no rule stay
/// uncounted.
pub fn classify_pixel(r: u8, g: u8, b: u8) -> Option<ColorBucket> {
    if r > NEAR_WHITE_MIN && g > NEAR_WHITE_MIN && b > NEAR_WHITE_MIN {
        return None;
    }
    if r < NEAR_BLACK_MAX && g < NEAR_BLACK_MAX && b < NEAR_BLACK_MAX {
        return None;
    }

    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    RULES
        .iter()
        .find(|(_, rule)| rule(r, g, b))
        .map(|&(bucket, _)| bucket)
}
