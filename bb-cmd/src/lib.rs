//! Command implementations for the BlueBarrier CLI.
//!
//! Each subcommand drives one interaction of the landing page: picking a
//! node, clicking the map, geocoding a search, or the PIN code demo.

use clap::Subcommand;

pub mod pin;
pub mod render;
pub mod select;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the coastal node registry
    Nodes,

    /// Show the seven day forecast and six week history for a node
    Forecast {
        /// Node identifier, e.g. "chennai"
        node_id: String,

        /// Date to treat as today (YYYY-MM-DD); defaults to the local date
        #[arg(long)]
        date: Option<String>,
    },

    /// Select a map coordinate and resolve it to the nearest coastal node
    At {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Geocode a PIN code or place name, then select the nearest coastal node.
    /// One request, no retry; it gives up after --timeout-secs (default 60)
    Locate {
        /// Free-text query, e.g. "600001" or "Mahabalipuram"
        query: String,

        /// Search endpoint
        #[arg(long, default_value = bb_coast::geocode::DEFAULT_SEARCH_URL)]
        geocoder_url: String,

        /// Country the search is restricted to
        #[arg(long, default_value = bb_coast::geocode::DEFAULT_COUNTRY_CODE)]
        country: String,

        /// Seconds to wait for the geocoder before giving up
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Look up a PIN code in the demo table and show its 72 hour outlook
    Pin {
        /// Six digit PIN code; try 721401, 600001 or 682001
        pin: String,
    },

    /// Score vulnerability, exposure and trend with the PIN demo formula
    Score {
        #[arg(long, default_value_t = 0.6)]
        vulnerability: f64,

        #[arg(long, default_value_t = 0.5)]
        exposure: f64,

        #[arg(long, default_value_t = 0.5)]
        trend: f64,
    },
}

pub async fn run(command: Command, output: OutputFormat) -> anyhow::Result<()> {
    match command {
        Command::Nodes => select::run_nodes(output),
        Command::Forecast { node_id, date } => select::run_forecast(&node_id, date.as_deref(), output),
        Command::At { lat, lng, date } => select::run_at(lat, lng, date.as_deref(), output),
        Command::Locate {
            query,
            geocoder_url,
            country,
            timeout_secs,
            date,
        } => {
            let config = bb_coast::geocode::GeocoderConfig {
                base_url: geocoder_url,
                country_code: country,
                timeout: std::time::Duration::from_secs(timeout_secs),
                ..Default::default()
            };
            select::run_locate(&query, config, date.as_deref(), output).await
        }
        Command::Pin { pin } => pin::run_pin(&pin, output),
        Command::Score {
            vulnerability,
            exposure,
            trend,
        } => pin::run_score(vulnerability, exposure, trend, output),
    }
}
