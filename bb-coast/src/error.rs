/// Error types for the coastal registry and lookups
use thiserror::Error;

/// Main error type for coastal lookups
#[derive(Error, Debug)]
pub enum CoastError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to parse JSON data
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A registry row had a missing or non-numeric field
    #[error("Invalid registry row {row}: {reason}")]
    InvalidNode { row: usize, reason: String },

    /// Two registry rows share an identifier
    #[error("Duplicate coastal node id: {0}")]
    DuplicateNode(String),

    /// Coastal node not found
    #[error("Coastal node not found: {0}")]
    NodeNotFound(String),

    /// Input is not a six digit PIN code
    #[error("'{0}' is not a valid PIN code. Enter a six digit postal code.")]
    InvalidPinCode(String),

    /// PIN code has no demo profile
    #[error("No coastal threat data found for PIN {pin}. Try {known} for the demo.")]
    PinNotFound { pin: String, known: String },

    /// Geocoding failed for any reason
    #[error("Could not locate '{0}'")]
    CouldNotLocate(String),
}

/// Type alias for Results using CoastError
pub type Result<T> = std::result::Result<T, CoastError>;
