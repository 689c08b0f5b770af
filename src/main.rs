use anyhow::Result;
use clap::Parser;
use serde_json::json;

use revenue_chart::chart;
use revenue_chart::cli::{self, Cli};
use revenue_chart::logging;

fn main() -> Result<()> {
    let outcome = match Cli::parse().command() {
        cli::Command::Render => chart::run(),
    };

    if let Err(error) = &outcome {
        logging::error(
            "pipeline.failed",
            "Run aborted",
            json!({ "error": format!("{error:#}") }),
        );
    }
    outcome
}
