//! PIN code demo commands.

use crate::render;
use crate::OutputFormat;
use bb_coast::pincode::{demo_risk_score, PinCode, PinProfile, ThreatInputs, ThreatLevel};
use bb_coast::CoastError;
use serde::Serialize;

/// Look up a PIN in the demo table.
///
/// Invalid or unknown PINs print an informational message and are not
/// treated as failures.
pub fn run_pin(pin: &str, output: OutputFormat) -> anyhow::Result<()> {
    let profile = match PinCode::parse(pin).and_then(|p| PinProfile::lookup(&p)) {
        Ok(profile) => profile,
        Err(e @ (CoastError::InvalidPinCode(_) | CoastError::PinNotFound { .. })) => {
            log::info!("{}", e);
            println!("No Results: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Text => print!("{}", render::pin_profile(&profile)),
    }
    Ok(())
}

#[derive(Serialize)]
struct ScoreReport {
    inputs: ThreatInputs,
    score: f64,
    level: ThreatLevel,
}

pub fn run_score(
    vulnerability: f64,
    exposure: f64,
    trend: f64,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let inputs = ThreatInputs {
        vulnerability,
        exposure,
        trend,
    };
    let score = demo_risk_score(&inputs);
    let level = ThreatLevel::from_score(score);
    match output {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&ScoreReport {
                inputs,
                score,
                level
            })?
        ),
        OutputFormat::Text => print!("{}", render::demo_score(&inputs, score, level)),
    }
    Ok(())
}
