//! The "currently displayed" selection.
//!
//! State is passed in and returned, never held globally. A new selection
//! replaces the previous marker; a failure keeps it and only sets a notice.

use crate::assembly::NodeOutlook;
use crate::risk::RiskBand;
use bb_coast::geo::{resolve, Resolution};
use bb_coast::{CoastalNode, GeoPoint, COASTAL_BUFFER_KM};
use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// What the map collaborator draws for the selected node.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub node_id: String,
    pub point: GeoPoint,
    pub band: RiskBand,
    pub tooltip: String,
}

impl Marker {
    fn for_outlook(outlook: &NodeOutlook) -> Marker {
        let band = outlook
            .today()
            .map(|d| d.band)
            .unwrap_or(RiskBand::Safe);
        Marker {
            node_id: outlook.node.node_id.clone(),
            point: outlook.node.location(),
            band,
            tooltip: format!(
                "{}, {} - {} today",
                outlook.node.name, outlook.node.region, band
            ),
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct SelectionState {
    pub marker: Option<Marker>,
    pub outlook: Option<NodeOutlook>,
    /// Informational message for the user, if any
    pub notice: Option<String>,
    /// Distance from the query point to the chosen node, when selected by point
    pub distance_km: Option<f64>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Select a registry node directly.
    pub fn select_node(self, node: &CoastalNode, today: NaiveDate) -> Self {
        info!("Selected node {}", node.node_id);
        let outlook = NodeOutlook::assemble(node, today);
        SelectionState {
            marker: Some(Marker::for_outlook(&outlook)),
            outlook: Some(outlook),
            notice: None,
            distance_km: None,
        }
    }

    /// Select an arbitrary point, such as a map click or geocoded PIN.
    pub fn select_point(self, nodes: &[CoastalNode], point: GeoPoint, today: NaiveDate) -> Self {
        match resolve(nodes, &point) {
            Some(Resolution::Coastal(nearest)) => {
                let distance_km = nearest.distance_km;
                let mut state = self.select_node(&nearest.node, today);
                state.distance_km = Some(distance_km);
                state
            }
            Some(Resolution::OutsideBuffer(nearest)) => {
                info!(
                    "({:.4}, {:.4}) is {:.1} km from {}, outside the coastal buffer",
                    point.latitude, point.longitude, nearest.distance_km, nearest.node.node_id
                );
                SelectionState {
                    marker: None,
                    outlook: None,
                    notice: Some(format!(
                        "Outside coastal buffer: nearest node {} is {:.1} km away (limit {:.0} km).",
                        nearest.node.name, nearest.distance_km, COASTAL_BUFFER_KM
                    )),
                    distance_km: Some(nearest.distance_km),
                }
            }
            None => self.fail("No coastal nodes are registered."),
        }
    }

    /// Record a failure, keeping whatever was displayed before.
    pub fn fail(self, message: impl Into<String>) -> Self {
        let message = message.into();
        warn!("Selection failed: {}", message);
        SelectionState {
            notice: Some(message),
            ..self
        }
    }

    pub fn is_outside_buffer(&self) -> bool {
        self.outlook.is_none() && self.distance_km.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    #[test]
    fn test_select_exact_node_point() {
        let nodes = CoastalNode::get_node_vector();
        let state = SelectionState::new().select_point(&nodes, GeoPoint::new(13.0827, 80.2707), today());
        let marker = state.marker.as_ref().unwrap();
        assert_eq!(marker.node_id, "chennai");
        assert_eq!(marker.band, RiskBand::Watch);
        assert_eq!(state.distance_km, Some(0.0));
        assert_eq!(state.outlook.as_ref().unwrap().forecast.len(), 7);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_new_selection_replaces_marker() {
        let nodes = CoastalNode::get_node_vector();
        let chennai = CoastalNode::find(&nodes, "chennai").unwrap();
        let kochi = CoastalNode::find(&nodes, "kochi").unwrap();
        let state = SelectionState::new()
            .select_node(chennai, today())
            .select_node(kochi, today());
        assert_eq!(state.marker.unwrap().node_id, "kochi");
        assert_eq!(state.outlook.unwrap().node.node_id, "kochi");
    }

    #[test]
    fn test_outside_buffer_suppresses_outlook() {
        let nodes = CoastalNode::get_node_vector();
        let chennai = CoastalNode::find(&nodes, "chennai").unwrap();
        let state = SelectionState::new()
            .select_node(chennai, today())
            .select_point(&nodes, GeoPoint::new(28.6139, 77.2090), today());
        assert!(state.is_outside_buffer());
        assert!(state.marker.is_none());
        assert!(state.notice.unwrap().starts_with("Outside coastal buffer"));
    }

    #[test]
    fn test_failure_preserves_previous_selection() {
        let nodes = CoastalNode::get_node_vector();
        let kochi = CoastalNode::find(&nodes, "kochi").unwrap();
        let before = SelectionState::new().select_node(kochi, today());
        let after = before.clone().fail("Could not locate '999999'");
        assert_eq!(after.marker, before.marker);
        assert_eq!(after.outlook, before.outlook);
        assert_eq!(after.notice.as_deref(), Some("Could not locate '999999'"));
    }

    #[test]
    fn test_empty_registry_is_a_failure() {
        let state = SelectionState::new().select_point(&[], GeoPoint::new(0.0, 0.0), today());
        assert!(state.notice.is_some());
        assert!(!state.is_outside_buffer());
    }
}
