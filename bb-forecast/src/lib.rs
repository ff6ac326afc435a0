//! Synthetic coastal risk outlooks.
//!
//! Every value here is derived from a string-keyed Park-Miller generator, so
//! a node's forecast and history are reproducible run to run. None of it is
//! a prediction.

pub mod assembly;
pub mod features;
pub mod risk;
pub mod seeded;
pub mod selection;

pub use assembly::{EventStatus, ForecastDay, HistoryRecord, NodeOutlook};
pub use features::FeatureSet;
pub use risk::{risk_score, RiskBand};
pub use seeded::SeededRng;
pub use selection::{Marker, SelectionState};
