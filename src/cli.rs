use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hydrosep baseflow separation.
#[derive(Parser)]
#[command(
    name = "hydrosep",
    version,
    about = "Separate streamflow records into baseflow and quickflow"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run baseflow separation on a CSV streamflow record.
    Separate(SeparateArgs),
    /// List the available separation methods.
    Methods,
}

/// Arguments for the `separate` subcommand.
#[derive(clap::Args)]
pub struct SeparateArgs {
    /// Path to input CSV (`date, discharge`).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output CSV.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Methods to run, by label or key (comma-separated). Defaults to all.
    #[arg(short, long, value_delimiter = ',')]
    pub methods: Option<Vec<String>>,

    /// Basin area in km² for the HYSEP interval methods.
    #[arg(long)]
    pub area: Option<f64>,

    /// Override the recession coefficient α.
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Override the Lyne-Hollick parameter β.
    #[arg(long)]
    pub beta: Option<f64>,

    /// Override BFImax for the Eckhardt filter.
    #[arg(long = "bfi-max")]
    pub bfi_max: Option<f64>,

    /// Write a JSON summary (baseflow index per method) to this path.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}
