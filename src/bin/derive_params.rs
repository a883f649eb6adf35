//! Input deck → derived circulation parameters.
//!
//! Loads a TOML well input deck, derives the thermal parameter snapshot for
//! a uniform trajectory discretization, and prints it to stdout for the
//! simulation tooling downstream.
//!
//! # Usage
//! ```bash
//! derive-params --deck well.toml --cell-length 50
//! derive-params --deck well.toml --cell-length 50 --format toml
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use welltherm::{ParameterModel, UniformWellPath, WellInput};

/// Derive wellbore thermal circulation parameters from an input deck.
#[derive(Parser, Debug)]
#[command(name = "derive-params")]
#[command(about = "Derive wellbore thermal circulation parameters from an input deck")]
struct Args {
    /// Path to the TOML input deck.
    #[arg(long, short)]
    deck: PathBuf,

    /// Uniform grid cell length along the trajectory (m).
    #[arg(long)]
    cell_length: f64,

    /// Output format: json or toml.
    #[arg(long, short, default_value = "json")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let input = WellInput::load_from_file(&args.deck)
        .with_context(|| format!("loading input deck {}", args.deck.display()))?;

    let path = UniformWellPath::new(args.cell_length);
    let model = ParameterModel::derive(&input, &path).context("deriving parameters")?;
    info!(
        cell_length_m = model.cell_length,
        riser_cells = model.riser_cells,
        "derived circulation parameters"
    );

    let rendered = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&model).context("serializing parameters")?,
        "toml" => toml::to_string_pretty(&model).context("serializing parameters")?,
        other => bail!("unsupported output format '{other}' (expected json or toml)"),
    };
    println!("{rendered}");

    Ok(())
}
