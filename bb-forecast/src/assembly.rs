//! Forecast and history assembly for a selected node.
//!
//! Both are regenerated from the node id on every selection and are never
//! cached.

use crate::features::FeatureSet;
use crate::risk::{risk_score, RiskBand};
use crate::seeded::SeededRng;
use bb_coast::CoastalNode;
use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FORECAST_DAYS: u32 = 7;
pub const HISTORY_WEEKS: u32 = 6;

const EVENT_LABELS: [&str; 6] = [
    "Storm Surge",
    "High Flood Risk",
    "Coastal Erosion",
    "Swell Surge",
    "Cyclonic Circulation",
    "Calm Seas",
];

const EVENT_NOTES: [&str; 6] = [
    "Harbour operations suspended for twelve hours.",
    "Low-lying wards inundated at high tide.",
    "Beach erosion reported along the promenade.",
    "Fishing fleet advised to stay ashore.",
    "Minor waterlogging cleared within a day.",
    "No damage reported.",
];

const STATUSES: [EventStatus; 3] = [
    EventStatus::Open,
    EventStatus::Monitoring,
    EventStatus::Resolved,
];

/// One row of the seven day forecast.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// 0 is today
    pub day_offset: u32,
    pub band: RiskBand,
    pub features: FeatureSet,
    pub score: f64,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    Open,
    Monitoring,
    Resolved,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Open => "Open",
            EventStatus::Monitoring => "Monitoring",
            EventStatus::Resolved => "Resolved",
        };
        f.pad(s)
    }
}

/// A synthetic past event. Unrelated to the forecast rows.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub weeks_ago: u32,
    pub date: NaiveDate,
    pub event: String,
    pub note: String,
    pub severity: RiskBand,
    pub status: EventStatus,
}

/// Seven forecast days for `node_id`, ascending from `today`.
pub fn forecast(node_id: &str, today: NaiveDate) -> Vec<ForecastDay> {
    let mut rng = SeededRng::from_key(node_id);
    (0..FORECAST_DAYS)
        .map(|day_offset| {
            let features = FeatureSet::synthesize(node_id, day_offset, rng.next_f64());
            let score = risk_score(&features);
            ForecastDay {
                date: today + Duration::days(i64::from(day_offset)),
                day_offset,
                band: RiskBand::from_score(score),
                features,
                score,
            }
        })
        .collect()
}

/// Key for the history generator, kept apart from the forecast sequence.
fn history_key(node_id: &str) -> String {
    format!("{}:history", node_id)
}

/// Six weekly history rows for `node_id`, most recent first.
pub fn history(node_id: &str, today: NaiveDate) -> Vec<HistoryRecord> {
    let mut rng = SeededRng::from_key(&history_key(node_id));
    (1..=HISTORY_WEEKS)
        .map(|weeks_ago| HistoryRecord {
            weeks_ago,
            date: today - Duration::weeks(i64::from(weeks_ago)),
            event: EVENT_LABELS[rng.next_index(EVENT_LABELS.len())].to_string(),
            note: EVENT_NOTES[rng.next_index(EVENT_NOTES.len())].to_string(),
            severity: RiskBand::from_score(rng.next_f64()),
            status: STATUSES[rng.next_index(STATUSES.len())],
        })
        .collect()
}

/// Everything rendered for a selected node.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NodeOutlook {
    pub node: CoastalNode,
    pub generated_for: NaiveDate,
    pub forecast: Vec<ForecastDay>,
    pub history: Vec<HistoryRecord>,
}

impl NodeOutlook {
    pub fn assemble(node: &CoastalNode, today: NaiveDate) -> Self {
        debug!("assembling outlook for {} on {}", node.node_id, today);
        NodeOutlook {
            node: node.clone(),
            generated_for: today,
            forecast: forecast(&node.node_id, today),
            history: history(&node.node_id, today),
        }
    }

    /// Today's row.
    pub fn today(&self) -> Option<&ForecastDay> {
        self.forecast.first()
    }

    /// Worst band across the forecast window.
    pub fn peak_band(&self) -> RiskBand {
        self.forecast
            .iter()
            .map(|d| d.band)
            .max()
            .unwrap_or(RiskBand::Safe)
    }
}
