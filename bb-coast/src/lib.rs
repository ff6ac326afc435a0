//! Coastal registry and lookup primitives for BlueBarrier.
//!
//! Holds the embedded node registry, great-circle resolution against the
//! coastal buffer, the PIN code demo table and the geocoding client.

pub mod error;
pub mod geo;
pub mod geocode;
pub mod node;
pub mod pincode;

pub use error::{CoastError, Result};
pub use geo::{GeoPoint, NearestNode, Resolution, COASTAL_BUFFER_KM};
pub use node::CoastalNode;
