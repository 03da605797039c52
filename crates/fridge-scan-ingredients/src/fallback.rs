//! Rotating canned fallback sets.
//!
//! Served when detection has nothing to go on (no bucket cleared its
//! threshold, or the image never decoded). The current set is a pure
//! function of wall-clock time, so repeated failed scans cycle through
//! some variety while calls within one window stay consistent.

use fridge_scan_core::{Clock, IngredientCandidate};

/// Seconds each fallback set stays current before rotating to the next.
pub const FALLBACK_ROTATION_SECS: u64 = 10;

/// Canned ingredient entry: name and fixed confidence.
#[derive(Clone, Copy, Debug)]
struct CannedIngredient {
    name: &'static str,
    confidence: u8,
}

const fn canned(name: &'static str, confidence: u8) -> CannedIngredient {
    CannedIngredient { name, confidence }
}

/// The three canned sets in rotation order: produce, dairy, protein.
/// Contents and confidences are fixed product data.
const FALLBACK_SETS: [&[CannedIngredient]; 3] = [
    &[
        canned("tomatoes", 90),
        canned("cucumbers", 88),
        canned("lettuce", 86),
        canned("carrots", 87),
        canned("peppers", 89),
        canned("onions", 85),
    ],
    &[
        canned("eggs", 92),
        canned("milk", 89),
        canned("cheese", 87),
        canned("butter", 85),
        canned("yogurt", 84),
        canned("bread", 86),
    ],
    &[
        canned("chicken", 90),
        canned("broccoli", 88),
        canned("carrots", 87),
        canned("potatoes", 86),
        canned("onions", 85),
        canned("garlic", 84),
    ],
];

/// Index of the set current at `now_unix_seconds`.
pub(crate) fn rotation_index(now_unix_seconds: u64) -> usize {
    ((now_unix_seconds / FALLBACK_ROTATION_SECS) % FALLBACK_SETS.len() as u64) as usize
}

/// Materialize the fallback set current on `clock`, in stored order.
pub(crate) fn current_set(clock: &dyn Clock) -> Vec<IngredientCandidate> {
    FALLBACK_SETS[rotation_index(clock.unix_seconds())]
        .iter()
        .map(|c| IngredientCandidate::new(c.name, c.confidence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridge_scan_core::FixedClock;

    #[test]
    fn rotation_steps_every_window() {
        assert_eq!(rotation_index(0), 0);
        assert_eq!(rotation_index(9), 0);
        assert_eq!(rotation_index(10), 1);
        assert_eq!(rotation_index(25), 2);
        assert_eq!(rotation_index(30), 0);
    }

    #[test]
    fn sets_have_six_entries_each() {
        for set in FALLBACK_SETS {
            assert_eq!(set.len(), 6);
        }
    }

    #[test]
    fn current_set_tracks_the_clock() {
        let produce = current_set(&FixedClock::at(5));
        assert_eq!(produce[0].name, "tomatoes");

        let dairy = current_set(&FixedClock::at(15));
        assert_eq!(dairy[0].name, "eggs");

        let protein = current_set(&FixedClock::at(25));
        assert_eq!(protein[0].name, "chicken");
    }
}
