//! BlueBarrier CLI - synthetic coastal risk outlooks from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bb-cli",
    version,
    about = "BlueBarrier coastal hazard early-warning demo"
)]
struct Cli {
    /// Emit JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: bb_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let output = if cli.json {
        bb_cmd::OutputFormat::Json
    } else {
        bb_cmd::OutputFormat::Text
    };
    log::debug!("output format {:?}", output);
    bb_cmd::run(cli.command, output).await
}
