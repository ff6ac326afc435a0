use crate::features::FeatureSet;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ALERT_THRESHOLD: f64 = 0.66;
pub const WATCH_THRESHOLD: f64 = 0.40;

const WIND_WEIGHT: f64 = 0.4;
const TIDE_WEIGHT: f64 = 0.3;
const HUMIDITY_WEIGHT: f64 = 0.2;
const STORM_WEIGHT: f64 = 0.1;

/// Normalisers for each driver
const WIND_SCALE_KMH: f64 = 100.0;
const TIDE_SCALE_M: f64 = 3.5;
const HUMIDITY_SCALE_PCT: f64 = 100.0;

/// Risk band for the registry forecast, ordered by ascending severity.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Safe,
    Watch,
    Alert,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score >= ALERT_THRESHOLD {
            RiskBand::Alert
        } else if score >= WATCH_THRESHOLD {
            RiskBand::Watch
        } else {
            RiskBand::Safe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Safe => "Safe",
            RiskBand::Watch => "Watch",
            RiskBand::Alert => "Alert",
        }
    }

    /// Class name the presentation layer styles rows and badges with.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskBand::Safe => "band-safe",
            RiskBand::Watch => "band-watch",
            RiskBand::Alert => "band-alert",
        }
    }

    /// Marker fill colour.
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Safe => "#2ecc71",
            RiskBand::Watch => "#f1c40f",
            RiskBand::Alert => "#e74c3c",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Fixed-weight linear score in [0, 1].
pub fn risk_score(features: &FeatureSet) -> f64 {
    let score = WIND_WEIGHT * (features.wind_kmh / WIND_SCALE_KMH)
        + TIDE_WEIGHT * (features.tide_m / TIDE_SCALE_M)
        + HUMIDITY_WEIGHT * (features.humidity_pct / HUMIDITY_SCALE_PCT)
        + STORM_WEIGHT * features.storm_probability;
    score.min(1.0)
}
