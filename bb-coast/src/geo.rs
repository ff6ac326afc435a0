use crate::node::CoastalNode;
use serde::{Deserialize, Serialize};

/// Mean earth radius in kilometres, the same radius the map layer measures with.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Selections farther than this from every node are outside the coastal buffer.
pub const COASTAL_BUFFER_KM: f64 = 120.0;

/// A WGS84 position in decimal degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Great-circle (haversine) distance in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let d_phi = (other.latitude - self.latitude).to_radians();
        let d_lambda = (other.longitude - self.longitude).to_radians();
        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// The closest registry node to a query point.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NearestNode {
    pub node: CoastalNode,
    pub distance_km: f64,
}

/// Outcome of resolving an arbitrary point against the registry.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Within the coastal buffer; forecasts may be rendered.
    Coastal(NearestNode),
    /// Too far inland or offshore. Forecast and history stay hidden.
    OutsideBuffer(NearestNode),
}

impl Resolution {
    pub fn nearest(&self) -> &NearestNode {
        match self {
            Resolution::Coastal(n) | Resolution::OutsideBuffer(n) => n,
        }
    }

    pub fn is_coastal(&self) -> bool {
        matches!(self, Resolution::Coastal(_))
    }
}

/// Linear scan for the node minimizing great-circle distance.
///
/// Ties keep the first node in registry order. Returns `None` only for an
/// empty registry.
pub fn nearest_node(nodes: &[CoastalNode], point: &GeoPoint) -> Option<NearestNode> {
    let mut best: Option<(&CoastalNode, f64)> = None;
    for node in nodes {
        let d = point.distance_km(&node.location());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((node, d)),
        }
    }
    best.map(|(node, distance_km)| NearestNode {
        node: node.clone(),
        distance_km,
    })
}

/// Resolve a point to its nearest node and classify it against the buffer.
pub fn resolve(nodes: &[CoastalNode], point: &GeoPoint) -> Option<Resolution> {
    nearest_node(nodes, point).map(|nearest| {
        if nearest.distance_km <= COASTAL_BUFFER_KM {
            Resolution::Coastal(nearest)
        } else {
            Resolution::OutsideBuffer(nearest)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, lat: f64, lng: f64) -> CoastalNode {
        CoastalNode {
            node_id: id.to_string(),
            name: id.to_string(),
            region: "Test".to_string(),
            latitude: lat,
            longitude: lng,
            population: 0,
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(13.0827, 80.2707);
        assert_eq!(p.distance_km(&p), 0.0);
    }

    #[test]
    fn test_distance_chennai_puducherry() {
        let chennai = GeoPoint::new(13.0827, 80.2707);
        let puducherry = GeoPoint::new(11.9416, 79.8083);
        let d = chennai.distance_km(&puducherry);
        assert!(d > 130.0 && d < 140.0, "got {}", d);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = GeoPoint::new(10.0, 80.0);
        let b = GeoPoint::new(11.0, 80.0);
        assert!((a.distance_km(&b) - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_exact_node_coordinates() {
        let nodes = CoastalNode::get_node_vector();
        let nearest = nearest_node(&nodes, &GeoPoint::new(13.0827, 80.2707)).unwrap();
        assert_eq!(nearest.node.node_id, "chennai");
        assert_eq!(nearest.distance_km, 0.0);
    }

    #[test]
    fn test_far_inland_is_outside_buffer() {
        let nodes = CoastalNode::get_node_vector();
        // New Delhi
        let resolution = resolve(&nodes, &GeoPoint::new(28.6139, 77.2090)).unwrap();
        assert!(!resolution.is_coastal());
        assert!(resolution.nearest().distance_km > COASTAL_BUFFER_KM);
    }

    #[test]
    fn test_far_offshore_is_outside_buffer() {
        let nodes = CoastalNode::get_node_vector();
        let resolution = resolve(&nodes, &GeoPoint::new(15.0, 88.0)).unwrap();
        assert!(matches!(resolution, Resolution::OutsideBuffer(_)));
    }

    #[test]
    fn test_near_chennai_is_coastal() {
        let nodes = CoastalNode::get_node_vector();
        let resolution = resolve(&nodes, &GeoPoint::new(13.0, 80.0)).unwrap();
        match resolution {
            Resolution::Coastal(n) => {
                assert_eq!(n.node.node_id, "chennai");
                assert!(n.distance_km < 40.0);
            }
            other => panic!("expected coastal, got {:?}", other),
        }
    }

    #[test]
    fn test_tie_keeps_first_node() {
        let nodes = vec![node("east", 0.0, 1.0), node("west", 0.0, -1.0)];
        let nearest = nearest_node(&nodes, &GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(nearest.node.node_id, "east");
    }

    #[test]
    fn test_buffer_boundary_is_inclusive() {
        let nodes = vec![node("origin", 0.0, 0.0)];
        let buffer_deg = COASTAL_BUFFER_KM / (EARTH_RADIUS_KM * std::f64::consts::PI / 180.0);
        let inside = resolve(&nodes, &GeoPoint::new(buffer_deg - 1e-6, 0.0)).unwrap();
        let outside = resolve(&nodes, &GeoPoint::new(buffer_deg + 1e-6, 0.0)).unwrap();
        assert!(inside.is_coastal());
        assert!((inside.nearest().distance_km - COASTAL_BUFFER_KM).abs() < 1e-3);
        assert!(matches!(outside, Resolution::OutsideBuffer(_)));
    }

    #[test]
    fn test_empty_registry() {
        assert!(nearest_node(&[], &GeoPoint::new(0.0, 0.0)).is_none());
        assert!(resolve(&[], &GeoPoint::new(0.0, 0.0)).is_none());
    }
}
