use crate::seeded::SeededRng;
use serde::{Deserialize, Serialize};

/// Day offsets beyond this use the last forecast day's drift.
pub const MAX_DAY_OFFSET: u32 = 6;

/// Synthetic hazard drivers for one node on one day.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Wind speed in km/h (20..=100)
    pub wind_kmh: f64,
    /// Tide height in metres (0.5..=3.3)
    pub tide_m: f64,
    /// Relative humidity in percent (60..=100)
    pub humidity_pct: f64,
    /// Probability of a storm (0.05..=0.65)
    pub storm_probability: f64,
}

impl FeatureSet {
    /// Derive features from one generator draw.
    ///
    /// `base` mixes the draw with a small offset from the key's length, then
    /// each driver is an affine function of `base` and the day offset.
    pub fn synthesize(key: &str, day_offset: u32, draw: f64) -> FeatureSet {
        let key_len = key.encode_utf16().count() % 4;
        let base = draw * 0.85 + key_len as f64 * 0.05;
        let drift = f64::from(day_offset.min(MAX_DAY_OFFSET)) / f64::from(MAX_DAY_OFFSET);
        FeatureSet {
            wind_kmh: 20.0 + 70.0 * base + 10.0 * drift,
            tide_m: 0.5 + 2.4 * base + 0.4 * drift,
            humidity_pct: 60.0 + 30.0 * base + 10.0 * drift,
            storm_probability: 0.05 + 0.5 * base + 0.1 * drift,
        }
    }

    /// Features for a single day, using the `day_offset`-th draw of the
    /// generator keyed by `key`.
    pub fn for_day(key: &str, day_offset: u32) -> FeatureSet {
        let mut rng = SeededRng::from_key(key);
        for _ in 0..day_offset {
            rng.next_f64();
        }
        let draw = rng.next_f64();
        FeatureSet::synthesize(key, day_offset, draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_ranges(f: &FeatureSet) {
        assert!((20.0..=100.0).contains(&f.wind_kmh), "{:?}", f);
        assert!((0.5..=3.3).contains(&f.tide_m), "{:?}", f);
        assert!((60.0..=100.0).contains(&f.humidity_pct), "{:?}", f);
        assert!((0.05..=0.65).contains(&f.storm_probability), "{:?}", f);
    }

    #[test]
    fn test_ranges_hold_for_extreme_draws() {
        for key in ["a", "ab", "abc", "abcd"] {
            for day in 0..=10 {
                assert_in_ranges(&FeatureSet::synthesize(key, day, 1e-9));
                assert_in_ranges(&FeatureSet::synthesize(key, day, 1.0 - 1e-9));
            }
        }
    }

    #[test]
    fn test_ranges_hold_for_registry_nodes() {
        for node in bb_coast::CoastalNode::get_node_vector() {
            for day in 0..7 {
                assert_in_ranges(&FeatureSet::for_day(&node.node_id, day));
            }
        }
    }

    #[test]
    fn test_for_day_is_deterministic() {
        assert_eq!(FeatureSet::for_day("kochi", 3), FeatureSet::for_day("kochi", 3));
        assert_ne!(FeatureSet::for_day("kochi", 3), FeatureSet::for_day("kochi", 4));
    }

    #[test]
    fn test_for_day_matches_sequential_draws() {
        let mut rng = SeededRng::from_key("mumbai");
        for day in 0..7 {
            let draw = rng.next_f64();
            assert_eq!(
                FeatureSet::synthesize("mumbai", day, draw),
                FeatureSet::for_day("mumbai", day)
            );
        }
    }

    #[test]
    fn test_later_days_drift_upward() {
        let today = FeatureSet::synthesize("puri", 0, 0.5);
        let later = FeatureSet::synthesize("puri", 6, 0.5);
        assert!(later.wind_kmh > today.wind_kmh);
        assert!(later.tide_m > today.tide_m);
        assert_eq!(
            FeatureSet::synthesize("puri", 6, 0.5),
            FeatureSet::synthesize("puri", 60, 0.5)
        );
    }
}
