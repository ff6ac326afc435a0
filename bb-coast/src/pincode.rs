//! PIN code demo path.
//!
//! A small hand-curated table of postal codes with a predictive 72 hour
//! outlook, scored by its own vulnerability/exposure/trend formula. This
//! path is independent of the registry forecast and uses different
//! thresholds.

use crate::error::{CoastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Embedded demo profiles keyed by PIN code.
pub static DEMO_JSON: &str = include_str!("../../fixtures/pincode_demo.json");

pub const HIGH_THRESHOLD: f64 = 0.75;
pub const MEDIUM_THRESHOLD: f64 = 0.40;

/// Extra weight added when the trend is rising fast.
const TREND_BUMP: f64 = 0.08;
const TREND_BUMP_ABOVE: f64 = 0.6;

/// Threat level used by the PIN demo path.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            ThreatLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            ThreatLevel::Medium
        } else {
            ThreatLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "Low",
            ThreatLevel::Medium => "Medium",
            ThreatLevel::High => "High",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "threat-low",
            ThreatLevel::Medium => "threat-medium",
            ThreatLevel::High => "threat-high",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Inputs to the demo scorer, each expected in [0, 1].
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ThreatInputs {
    pub vulnerability: f64,
    pub exposure: f64,
    pub trend: f64,
}

impl Default for ThreatInputs {
    fn default() -> Self {
        ThreatInputs {
            vulnerability: 0.6,
            exposure: 0.5,
            trend: 0.5,
        }
    }
}

/// Weighted sum with a bump for rising trends, clamped to [0, 1].
pub fn demo_risk_score(inputs: &ThreatInputs) -> f64 {
    let base = 0.5 * inputs.vulnerability + 0.35 * inputs.exposure + 0.15 * inputs.trend;
    let bump = if inputs.trend > TREND_BUMP_ABOVE {
        TREND_BUMP
    } else {
        0.0
    };
    (base + bump).clamp(0.0, 1.0)
}

/// A validated Indian postal code: six digits, not starting with zero.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct PinCode(String);

impl PinCode {
    pub fn parse(input: &str) -> Result<PinCode> {
        let trimmed = input.trim();
        let valid = trimmed.len() == 6
            && trimmed.bytes().all(|b| b.is_ascii_digit())
            && !trimmed.starts_with('0');
        if valid {
            Ok(PinCode(trimmed.to_string()))
        } else {
            Err(CoastError::InvalidPinCode(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One segment of the 72 hour outlook.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OutlookSegment {
    pub window: String,
    pub risk: ThreatLevel,
    pub score: f64,
}

/// Demo profile for a PIN code.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PinProfile {
    pub pin: String,
    pub location: String,
    pub risk: ThreatLevel,
    pub risk_score: f64,
    pub message: String,
    pub population: u64,
    pub similar_zones: Vec<String>,
    pub outlook: Vec<OutlookSegment>,
}

impl PinProfile {
    /// All demo profiles from the embedded table.
    pub fn get_profile_vector() -> Vec<PinProfile> {
        if let Ok(profiles) = PinProfile::parse_profiles(DEMO_JSON) {
            profiles
        } else {
            panic!("failed to parse embedded pincode demo json")
        }
    }

    pub fn parse_profiles(json: &str) -> Result<Vec<PinProfile>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a PIN in the demo table.
    pub fn lookup(pin: &PinCode) -> Result<PinProfile> {
        let profiles = PinProfile::get_profile_vector();
        let known = profiles
            .iter()
            .map(|p| p.pin.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        profiles
            .iter()
            .find(|p| p.pin == pin.as_str())
            .cloned()
            .ok_or_else(|| CoastError::PinNotFound {
                pin: pin.to_string(),
                known,
            })
    }

    /// People inside the high-risk share of the zone.
    pub fn high_risk_population(&self) -> u64 {
        (self.population as f64 * self.risk_score).round() as u64
    }

    /// Tooltip/marker text, e.g. "High Risk - Digha, West Bengal - 0-24H".
    pub fn marker_info(&self) -> String {
        let window = self
            .outlook
            .first()
            .map(|s| s.window.as_str())
            .unwrap_or("0-24H");
        format!("{} Risk - {} - {}", self.risk, self.location, window)
    }
}
