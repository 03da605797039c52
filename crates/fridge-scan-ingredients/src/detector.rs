//! Ingredient detection over a color bucket tally.

use fridge_scan_core::{Clock, ColorTally, IngredientCandidate, SystemClock};
use log::{debug, warn};

use crate::catalog::{BucketRule, BUILTIN_CATALOG};
use crate::fallback;

/// Maximum number of candidates one detection returns.
pub const MAX_CANDIDATES: usize = 10;

/// Rule-table ingredient detector.
///
/// Holds no per-call state, so one instance may serve concurrent scans.
/// The injected clock is read only when a detection comes up empty and
/// falls back to the canned sets.
pub struct IngredientDetector {
    catalog: &'static [BucketRule],
    clock: Box<dyn Clock>,
}

impl IngredientDetector {
    /// Detector over the built-in catalog and the system clock.
    pub fn new() -> Self {
        Self {
            catalog: BUILTIN_CATALOG,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the rule catalog.
    ///
    /// Every candidate divisor must be nonzero: confidence computation
    /// divides bucket counts by it.
    pub fn with_catalog(mut self, catalog: &'static [BucketRule]) -> Self {
        for rule in catalog {
            for spec in rule.candidates {
                assert!(
                    spec.divisor > 0,
                    "candidate {} has a zero confidence divisor",
                    spec.name
                );
            }
        }
        self.catalog = catalog;
        self
    }

    /// Replace the clock consulted for fallback rotation.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Catalog used by this detector.
    #[inline]
    pub fn catalog(&self) -> &'static [BucketRule] {
        self.catalog
    }

    /// Detect ingredients from a bucket tally.
    ///
    /// Every candidate of every rule whose bucket count strictly exceeds
    /// its threshold is emitted, then ranked: duplicate names keep their
    /// first occurrence, candidates sort by confidence descending (stable,
    /// so equal scores keep emission order), and at most
    /// [`MAX_CANDIDATES`] survive. When no rule fires the rotating
    /// fallback set is returned instead, indistinguishable to the caller
    /// from a real detection.
    pub fn detect(&self, tally: &ColorTally) -> Vec<IngredientCandidate> {
        let mut candidates = Vec::new();
        for rule in self.catalog {
            let count = tally.count(rule.bucket);
            if count <= rule.threshold {
                continue;
            }
            for spec in rule.candidates {
                candidates.push(IngredientCandidate::new(spec.name, spec.confidence(count)));
            }
        }

        if candidates.is_empty() {
            warn!("no color bucket cleared its threshold; serving fallback ingredients");
            return self.fallback_candidates();
        }

        let ranked = rank(candidates);
        debug!("detected {} ingredient candidates", ranked.len());
        ranked
    }

    /// The canned set served when detection has nothing to go on.
    ///
    /// The set in use flips every [`crate::FALLBACK_ROTATION_SECS`] seconds
    /// of wall-clock time; two calls within one window agree.
    pub fn fallback_candidates(&self) -> Vec<IngredientCandidate> {
        rank(fallback::current_set(self.clock.as_ref()))
    }
}

impl Default for IngredientDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicate by name keeping first occurrences, sort by confidence
/// descending (stable), truncate to [`MAX_CANDIDATES`].
fn rank(candidates: Vec<IngredientCandidate>) -> Vec<IngredientCandidate> {
    let mut unique: Vec<IngredientCandidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique.iter().any(|c| c.name == candidate.name) {
            unique.push(candidate);
        }
    }
    unique.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    unique.truncate(MAX_CANDIDATES);
    unique
}
