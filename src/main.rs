use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod app;
mod config;
mod participant;

use app::App;

/// headless fitts' law pointing experiment
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Runs a Fitts' law target selection session with a simulated participant and writes one CSV row per completed trial."
)]
pub struct Cli {
    /// participant name, used for the output file name
    #[clap(short = 'n', long)]
    name: String,

    /// viewport width in pixels
    #[clap(long, default_value_t = 1280.0)]
    width: f64,

    /// viewport height in pixels
    #[clap(long, default_value_t = 800.0)]
    height: f64,

    /// seed for target placement and the simulated participant
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// experiment config file (json)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// directory for the results file (defaults to $FITTS_OUTPUT_DIR, then ./csv)
    #[clap(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// zero-pad milliseconds in the Time column
    #[clap(long)]
    padded_time: bool,

    /// probability that the simulated participant misses before hitting
    #[clap(long, default_value_t = 0.05)]
    misclick_rate: f64,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    App::new(cli)?.run()?;
    Ok(())
}
