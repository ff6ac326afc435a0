use crate::error::{CoastError, Result};
use crate::geo::GeoPoint;
use csv::ReaderBuilder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Embedded CSV data for the coastal towns tracked by BlueBarrier.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/coastal_nodes.csv");

/// A named coastal location that forecasts and map selections resolve to.
///
/// Nodes are defined once at start-up and never mutated.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CoastalNode {
    /// Stable lower-case identifier, also the generator seed key (e.g. "chennai")
    pub node_id: String,
    /// Human-readable name of the town
    pub name: String,
    /// State or union territory
    pub region: String,
    /// Latitude in decimal degrees (WGS84)
    pub latitude: f64,
    /// Longitude in decimal degrees (WGS84)
    pub longitude: f64,
    /// Population living inside the hazard zone
    pub population: u64,
}

impl CoastalNode {
    /// Get the node vector from the embedded registry, in file order.
    pub fn get_node_vector() -> Vec<CoastalNode> {
        if let Ok(nodes) = CoastalNode::parse_node_csv(CSV_OBJECT) {
            nodes
        } else {
            panic!("failed to parse embedded coastal node csv")
        }
    }

    /// Parse a CSV string of coastal nodes.
    ///
    /// Expected CSV columns: node_id, name, region, latitude, longitude, population
    pub fn parse_node_csv(csv_object: &str) -> Result<Vec<CoastalNode>> {
        let mut node_list: Vec<CoastalNode> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for (idx, row) in rdr.records().enumerate() {
            let record = row?;
            let row_number = idx + 1;
            let field = |i: usize, name: &str| -> Result<String> {
                match record.get(i) {
                    Some(v) if !v.is_empty() => Ok(v.to_string()),
                    _ => Err(CoastError::InvalidNode {
                        row: row_number,
                        reason: format!("missing {}", name),
                    }),
                }
            };
            let number = |i: usize, name: &str| -> Result<f64> {
                field(i, name)?
                    .parse::<f64>()
                    .map_err(|_| CoastError::InvalidNode {
                        row: row_number,
                        reason: format!("{} is not a number", name),
                    })
            };
            let node_id = field(0, "node_id")?.to_lowercase();
            let population = field(5, "population")?
                .parse::<u64>()
                .map_err(|_| CoastError::InvalidNode {
                    row: row_number,
                    reason: "population is not a non-negative integer".to_string(),
                })?;
            let node = CoastalNode {
                name: field(1, "name")?,
                region: field(2, "region")?,
                latitude: number(3, "latitude")?,
                longitude: number(4, "longitude")?,
                population,
                node_id,
            };
            if !seen.insert(node.node_id.clone()) {
                return Err(CoastError::DuplicateNode(node.node_id));
            }
            node_list.push(node);
        }
        debug!("parsed {} coastal nodes", node_list.len());
        Ok(node_list)
    }

    /// Case-insensitive lookup by node id.
    pub fn find<'a>(nodes: &'a [CoastalNode], node_id: &str) -> Option<&'a CoastalNode> {
        let wanted = node_id.trim().to_lowercase();
        nodes.iter().find(|n| n.node_id == wanted)
    }

    /// Like [`CoastalNode::find`], but a miss is an error.
    pub fn require<'a>(nodes: &'a [CoastalNode], node_id: &str) -> Result<&'a CoastalNode> {
        CoastalNode::find(nodes, node_id)
            .ok_or_else(|| CoastError::NodeNotFound(node_id.trim().to_string()))
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
