//! Color buckets and per-bucket pixel tallies.

use serde::{Deserialize, Serialize};

/// One of the eight fixed color categories a pixel can land in.
///
/// Variants are listed in classification priority order: rules are checked
/// top to bottom and the first match wins, so a pixel lands in at most one
/// bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorBucket {
    Red,
    Orange,
    Yellow,
    Green,
    DarkGreen,
    Purple,
    Brown,
    White,
}

impl ColorBucket {
    /// All buckets in classification priority order.
    pub const ALL: [ColorBucket; 8] = [
        ColorBucket::Red,
        ColorBucket::Orange,
        ColorBucket::Yellow,
        ColorBucket::Green,
        ColorBucket::DarkGreen,
        ColorBucket::Purple,
        ColorBucket::Brown,
        ColorBucket::White,
    ];

    /// Wire name of the bucket, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorBucket::Red => "red",
            ColorBucket::Orange => "orange",
            ColorBucket::Yellow => "yellow",
            ColorBucket::Green => "green",
            ColorBucket::DarkGreen => "darkGreen",
            ColorBucket::Purple => "purple",
            ColorBucket::Brown => "brown",
            ColorBucket::White => "white",
        }
    }
}

/// Per-bucket pixel counts from one analysis pass.
///
/// Counts are absolute, never normalized: downstream thresholds assume a
/// stable analysis resolution, which the scanning layer enforces by
/// rescaling inputs before tallying.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTally {
    pub red: u32,
    pub orange: u32,
    pub yellow: u32,
    pub green: u32,
    pub dark_green: u32,
    pub purple: u32,
    pub brown: u32,
    pub white: u32,
}

impl ColorTally {
    /// Count for one bucket.
    #[inline]
    pub fn count(&self, bucket: ColorBucket) -> u32 {
        match bucket {
            ColorBucket::Red => self.red,
            ColorBucket::Orange => self.orange,
            ColorBucket::Yellow => self.yellow,
            ColorBucket::Green => self.green,
            ColorBucket::DarkGreen => self.dark_green,
            ColorBucket::Purple => self.purple,
            ColorBucket::Brown => self.brown,
            ColorBucket::White => self.white,
        }
    }

    /// Add one pixel to a bucket.
    #[inline]
    pub fn add(&mut self, bucket: ColorBucket) {
        match bucket {
            ColorBucket::Red => self.red += 1,
            ColorBucket::Orange => self.orange += 1,
            ColorBucket::Yellow => self.yellow += 1,
            ColorBucket::Green => self.green += 1,
            ColorBucket::DarkGreen => self.dark_green += 1,
            ColorBucket::Purple => self.purple += 1,
            ColorBucket::Brown => self.brown += 1,
            ColorBucket::White => self.white += 1,
        }
    }

    /// Iterate `(bucket, count)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorBucket, u32)> + '_ {
        ColorBucket::ALL.iter().map(move |&b| (b, self.count(b)))
    }

    /// Total number of bucketed pixels.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, c)| u64::from(c)).sum()
    }
}
