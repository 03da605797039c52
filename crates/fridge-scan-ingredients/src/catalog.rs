//! Built-in bucket-to-ingredient rules.
//!
//! Thresholds, confidence formulas, and per-bucket candidate order are
//! fixed product behavior, kept as static data rather than a params
//! struct.

use fridge_scan_core::ColorBucket;

/// One candidate ingredient attached to a bucket rule.
///
/// Confidence is `min(cap, base + count / divisor)` with integer division,
/// where `count` is the bucket's pixel tally; `divisor` must be nonzero.
/// `cap == base` pins a flat confidence regardless of count.
#[derive(Clone, Copy, Debug)]
pub struct CandidateSpec {
    pub name: &'static str,
    pub base: u32,
    pub divisor: u32,
    pub cap: u32,
}

impl CandidateSpec {
    /// Confidence for a bucket tally of `count` pixels.
    #[inline]
    pub fn confidence(&self, count: u32) -> u8 {
        self.cap.min(self.base + count / self.divisor) as u8
    }
}

/// Candidates emitted when a bucket's tally clears its threshold.
#[derive(Clone, Copy, Debug)]
pub struct BucketRule {
    pub bucket: ColorBucket,
    /// The rule fires when the bucket count is strictly greater than this.
    pub threshold: u32,
    pub candidates: &'static [CandidateSpec],
}

/// Minimum pixel count for a colored region to be considered significant.
const SIGNAL_THRESHOLD: u32 = 50;

/// The white bucket needs a much larger region before it is trusted; small
/// white patches are indistinguishable from packaging and fridge walls.
const WHITE_THRESHOLD: u32 = 200;

const fn candidate(name: &'static str, base: u32, divisor: u32, cap: u32) -> CandidateSpec {
    CandidateSpec {
        name,
        base,
        divisor,
        cap,
    }
}

/// The built-in rule table, in bucket priority order.
pub const BUILTIN_CATALOG: &[BucketRule] = &[
    BucketRule {
        bucket: ColorBucket::Red,
        threshold: SIGNAL_THRESHOLD,
        candidates: &[
            candidate("tomatoes", 80, 50, 95),
            candidate("red bell peppers", 75, 60, 92),
        ],
    },
    BucketRule {
        bucket: ColorBucket::Orange,
        threshold: SIGNAL_THRESHOLD,
        candidates: &[
            candidate("carrots", 80, 40, 93),
            candidate("orange juice", 75, 50, 88),
        ],
    },
    BucketRule {
        bucket: ColorBucket::Yellow,
        threshold: SIGNAL_THRESHOLD,
        candidates: &[
            candidate("cheese", 75, 45, 90),
            candidate("butter", 72, 50, 87),
        ],
    },
    BucketRule {
        bucket: ColorBucket::Green,
        threshold: SIGNAL_THRESHOLD,
        candidates: &[
            candidate("cucumbers", 82, 45, 94),
            candidate("green peppers", 80, 50, 91),
            candidate("lettuce", 75, 55, 89),
        ],
    },
    BucketRule {
        bucket: ColorBucket::DarkGreen,
        threshold: SIGNAL_THRESHOLD,
        candidates: &[
            candidate("cabbage", 78, 40, 92),
            candidate("broccoli", 75, 45, 88),
        ],
    },
    BucketRule {
        bucket: ColorBucket::Purple,
        threshold: SIGNAL_THRESHOLD,
        candidates: &[
            candidate("eggplants", 85, 35, 96),
            candidate("purple cabbage", 78, 40, 90),
        ],
    },
    BucketRule {
        bucket: ColorBucket::Brown,
        threshold: SIGNAL_THRESHOLD,
        candidates: &[
            candidate("potatoes", 78, 45, 91),
            candidate("onions", 75, 50, 88),
            candidate("mushrooms", 72, 55, 85),
        ],
    },
    BucketRule {
        bucket: ColorBucket::White,
        threshold: WHITE_THRESHOLD,
        // Flat confidences: cap == base.
        candidates: &[candidate("eggs", 92, 1, 92), candidate("milk", 88, 1, 88)],
    },
];
