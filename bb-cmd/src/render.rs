//! Text rendering of selections and PIN profiles.
//!
//! The core crates only produce ordered rows; this is where they become
//! tables.

use bb_coast::pincode::{PinProfile, ThreatInputs, ThreatLevel};
use bb_coast::CoastalNode;
use bb_forecast::{ForecastDay, HistoryRecord, SelectionState};
use bb_utils::dates::{day_label, format_date};
use bb_utils::numbers::{format_indian, percent};
use std::fmt::Write;

pub fn nodes_table(nodes: &[CoastalNode]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:<20} {:<16} {:>9} {:>9} {:>14}",
        "ID", "NAME", "REGION", "LAT", "LNG", "POPULATION"
    );
    for n in nodes {
        let _ = writeln!(
            out,
            "{:<20} {:<20} {:<16} {:>9.4} {:>9.4} {:>14}",
            n.node_id,
            n.name,
            n.region,
            n.latitude,
            n.longitude,
            format_indian(n.population)
        );
    }
    out
}

pub fn forecast_table(days: &[ForecastDay]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<11} {:<6} {:>6} {:>9} {:>7} {:>9} {:>6}",
        "DATE", "DAY", "BAND", "SCORE", "WIND", "TIDE", "HUMIDITY", "STORM"
    );
    for d in days {
        let _ = writeln!(
            out,
            "{:<12} {:<11} {:<6} {:>5}% {:>5.1}kmh {:>6.2}m {:>8.0}% {:>5}%",
            format_date(&d.date),
            day_label(&d.date),
            d.band,
            percent(d.score),
            d.features.wind_kmh,
            d.features.tide_m,
            d.features.humidity_pct,
            percent(d.features.storm_probability)
        );
    }
    out
}

pub fn history_table(rows: &[HistoryRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<12} {:<21} {:<6} {:<11} NOTE",
        "WEEK", "DATE", "EVENT", "SEV", "STATUS"
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{:<5} {:<12} {:<21} {:<6} {:<11} {}",
            format!("-{}w", r.weeks_ago),
            format_date(&r.date),
            r.event,
            r.severity.label().to_uppercase(),
            r.status,
            r.note
        );
    }
    out
}

/// Summary, forecast and history for a selection, or its notice.
pub fn selection(state: &SelectionState) -> String {
    let mut out = String::new();
    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "{}", notice);
    }
    let Some(outlook) = &state.outlook else {
        return out;
    };
    let node = &outlook.node;
    let _ = writeln!(out, "{}, {} ({})", node.name, node.region, node.node_id);
    if let Some(distance) = state.distance_km {
        let _ = writeln!(out, "Distance from selection: {:.1} km", distance);
    }
    let _ = writeln!(out, "Population at risk: {}", format_indian(node.population));
    if let Some(marker) = &state.marker {
        let _ = writeln!(
            out,
            "Marker: {} [{} {}]",
            marker.tooltip,
            marker.band.css_class(),
            marker.band.color()
        );
    }
    let _ = writeln!(out, "Peak band (7 days): {}", outlook.peak_band());
    let _ = writeln!(out);
    let _ = writeln!(out, "Forecast");
    out.push_str(&forecast_table(&outlook.forecast));
    let _ = writeln!(out);
    let _ = writeln!(out, "History");
    out.push_str(&history_table(&outlook.history));
    out
}

pub fn pin_profile(profile: &PinProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Localized Prediction: {}", profile.location);
    let _ = writeln!(
        out,
        "Risk: {} ({}%)",
        profile.risk,
        percent(profile.risk_score)
    );
    let _ = writeln!(out, "Message: {}", profile.message);
    let _ = writeln!(out, "Similar Zones: {}", profile.similar_zones.join(", "));
    let _ = writeln!(out, "Population: {}", format_indian(profile.population));
    let _ = writeln!(
        out,
        "High-risk population: {}",
        format_indian(profile.high_risk_population())
    );
    let _ = writeln!(out, "Marker: {} [{}]", profile.marker_info(), profile.risk.css_class());
    let _ = writeln!(out);
    for seg in &profile.outlook {
        let _ = writeln!(
            out,
            "{:<7} Predicted {} Risk ({}%) - {}",
            seg.window,
            seg.risk,
            percent(seg.score),
            profile.location
        );
    }
    out
}

pub fn demo_score(inputs: &ThreatInputs, score: f64, level: ThreatLevel) -> String {
    format!(
        "vulnerability {:.2}, exposure {:.2}, trend {:.2} -> {:.3} ({})\n",
        inputs.vulnerability, inputs.exposure, inputs.trend, score, level
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_coast::pincode::PinCode;
    use bb_coast::GeoPoint;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    #[test]
    fn test_nodes_table_lists_every_node() {
        let nodes = CoastalNode::get_node_vector();
        let table = nodes_table(&nodes);
        assert_eq!(table.lines().count(), nodes.len() + 1);
        assert!(table.contains("71,00,000"));
    }

    #[test]
    fn test_selection_renders_both_tables() {
        let nodes = CoastalNode::get_node_vector();
        let state = SelectionState::new().select_point(&nodes, GeoPoint::new(13.0827, 80.2707), today());
        let text = selection(&state);
        assert!(text.starts_with("Chennai, Tamil Nadu (chennai)"));
        assert!(text.contains("2024-10-18"));
        assert!(text.contains("band-watch"));
        assert!(text.contains("Forecast"));
        assert!(text.contains("History"));
    }

    #[test]
    fn test_outside_buffer_renders_notice_only() {
        let nodes = CoastalNode::get_node_vector();
        let state = SelectionState::new().select_point(&nodes, GeoPoint::new(28.6139, 77.2090), today());
        let text = selection(&state);
        assert!(text.starts_with("Outside coastal buffer"));
        assert!(!text.contains("Forecast"));
    }

    #[test]
    fn test_forecast_table_rows() {
        let days = bb_forecast::assembly::forecast("chennai", today());
        let table = forecast_table(&days);
        assert_eq!(table.lines().count(), 8);
        let first = table.lines().nth(1).unwrap();
        assert!(first.starts_with("2024-10-18   Fri 18 Oct  Watch"));
        assert!(first.contains("51%"));
    }

    #[test]
    fn test_pin_profile_text() {
        let profile = PinProfile::lookup(&PinCode::parse("600001").unwrap()).unwrap();
        let text = pin_profile(&profile);
        assert!(text.contains("Risk: Medium (58%)"));
        assert!(text.contains("Similar Zones: Mahabalipuram, Pondicherry"));
        assert!(text.contains("High-risk population: 41,18,000"));
        assert!(text.contains("24-48H  Predicted Medium Risk (52%) - Chennai Coast, Tamil Nadu"));
    }
}
