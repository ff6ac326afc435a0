//! Node, map-click and geocoded selections.

use crate::render;
use crate::OutputFormat;
use bb_coast::geocode::{Geocoder, GeocoderConfig};
use bb_coast::{CoastalNode, GeoPoint};
use bb_forecast::SelectionState;
use bb_utils::dates::parse_date;
use chrono::{Local, NaiveDate};
use log::info;

/// The date forecasts start from: `--date` if given, otherwise today.
fn resolve_today(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(d) => parse_date(d),
        None => Ok(Local::now().naive_local().date()),
    }
}

fn emit(state: &SelectionState, output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
        OutputFormat::Text => print!("{}", render::selection(state)),
    }
    Ok(())
}

pub fn run_nodes(output: OutputFormat) -> anyhow::Result<()> {
    let nodes = CoastalNode::get_node_vector();
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&nodes)?),
        OutputFormat::Text => print!("{}", render::nodes_table(&nodes)),
    }
    Ok(())
}

pub fn run_forecast(node_id: &str, date: Option<&str>, output: OutputFormat) -> anyhow::Result<()> {
    let today = resolve_today(date)?;
    let nodes = CoastalNode::get_node_vector();
    let node = CoastalNode::require(&nodes, node_id)?;
    let state = SelectionState::new().select_node(node, today);
    emit(&state, output)
}

pub fn run_at(lat: f64, lng: f64, date: Option<&str>, output: OutputFormat) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        anyhow::bail!("Coordinates out of range: {}, {}", lat, lng);
    }
    let today = resolve_today(date)?;
    let nodes = CoastalNode::get_node_vector();
    let state = SelectionState::new().select_point(&nodes, GeoPoint::new(lat, lng), today);
    emit(&state, output)
}

/// Geocode `query`, then select the nearest node.
///
/// A failed lookup leaves the selection with only a "could not locate"
/// notice, which is emitted before the error is returned.
pub async fn run_locate(
    query: &str,
    config: GeocoderConfig,
    date: Option<&str>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let today = resolve_today(date)?;
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Enter a PIN code or place name to search.");
    }
    let nodes = CoastalNode::get_node_vector();
    let geocoder = Geocoder::new(config)?;
    let point = match geocoder.search(query).await {
        Ok(point) => point,
        Err(e) => {
            let state = SelectionState::new().fail(e.to_string());
            emit(&state, output)?;
            return Err(e.into());
        }
    };
    info!(
        "'{}' geocoded to ({:.4}, {:.4})",
        query, point.latitude, point.longitude
    );
    let state = SelectionState::new().select_point(&nodes, point, today);
    emit(&state, output)
}
