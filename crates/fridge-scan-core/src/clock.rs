//! Wall-clock access behind an injectable seam.
//!
//! The ingredient detector's fallback rotation reads ambient time. Routing
//! that read through [`Clock`] keeps library code off `SystemTime` directly
//! and lets tests pin the rotation to a known window.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of Unix wall-clock seconds.
pub trait Clock: Send + Sync {
    /// Whole seconds since the Unix epoch.
    fn unix_seconds(&self) -> u64;
}

/// Production clock backed by [`SystemTime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // clock set before the epoch
    }
}

/// Deterministic clock pinned to a fixed instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    seconds: u64,
}

impl FixedClock {
    /// Clock pinned at `seconds` since the Unix epoch.
    pub fn at(seconds: u64) -> Self {
        Self { seconds }
    }
}

impl Clock for FixedClock {
    fn unix_seconds(&self) -> u64 {
        self.seconds
    }
}
