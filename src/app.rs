use crate::config::Config;
use crate::participant::{MovementModel, SimulatedParticipant};
use crate::Cli;
use anyhow::{bail, Context, Result};
use fitts_core::Viewport;
use fitts_experiment::{ClickOutcome, ExperimentConfig, TrialSequencer};
use fitts_export::{export_filename, Exporter, FileSink, TimeFormat};
use fitts_timing::{HighPrecisionTimer, ManualTimer, Timer};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub struct App {
    participant_name: String,
    experiment: TrialSequencer<ManualTimer, StdRng>,
    participant: SimulatedParticipant<StdRng>,
    timer: ManualTimer,
    exporter: Exporter,
    sink: FileSink,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        if !(0.0..=1.0).contains(&cli.misclick_rate) {
            bail!("--misclick-rate must be in [0, 1], got {}", cli.misclick_rate);
        }
        let viewport_ok = cli.width.is_finite() && cli.height.is_finite();
        if !viewport_ok || cli.width <= 0.0 || cli.height <= 0.0 {
            bail!("viewport must be positive, got {}x{}", cli.width, cli.height);
        }
        FileSink::check_file_name(&export_filename(cli.name.trim()))
            .with_context(|| format!("Participant name {:?} cannot be used", cli.name))?;

        let config = match &cli.config {
            Some(path) => load_experiment_config(path)?,
            None => ExperimentConfig::default(),
        };
        let output_dir = match cli.output_dir {
            Some(dir) => dir,
            None => Config::from_env()?.output_dir(),
        };

        let seed = cli.seed.unwrap_or_else(rand::random);
        info!("Using seed {seed}");

        let viewport = Viewport::new(cli.width, cli.height);
        let timer = ManualTimer::new(0);
        let experiment = TrialSequencer::new(
            config,
            viewport,
            timer.clone(),
            StdRng::seed_from_u64(seed),
        )
        .context("Invalid experiment configuration")?;

        let participant = SimulatedParticipant::new(
            StdRng::seed_from_u64(seed.wrapping_add(1)),
            cli.misclick_rate,
            MovementModel::default(),
            viewport.center(),
        );
        let format = if cli.padded_time {
            TimeFormat::Padded
        } else {
            TimeFormat::Compat
        };

        Ok(Self {
            participant_name: cli.name,
            experiment,
            participant,
            timer,
            exporter: Exporter::new(format),
            sink: FileSink::new(output_dir),
        })
    }

    pub fn run(mut self) -> Result<PathBuf> {
        info!("=== FITTS' LAW EXPERIMENT ===");
        let viewport = self.experiment.viewport();
        info!("Viewport: {}x{}", viewport.width, viewport.height);
        info!("Output directory: {}", self.sink.output_dir().display());

        let wall = HighPrecisionTimer::new();
        self.experiment
            .start(&self.participant_name)
            .context("Could not start the session")?;

        while !self.experiment.is_complete() {
            let outcome = self
                .participant
                .perform_trial(&mut self.experiment, &self.timer)?;
            if let ClickOutcome::Advanced(record) = &outcome {
                let (done, limit) = self.experiment.progress();
                if done % 50 == 0 {
                    info!("Progress: {done}/{limit}");
                }
                debug!("Trial {} took {} ms", record.trial_id, record.elapsed_ms);
            }
        }

        let session = self.experiment.session();
        let misclicks: u32 = session.trials().iter().map(|t| t.misclicks).sum();
        info!(
            "Experiment complete: {} trials, {} misclicks, {:.1} s simulated in {} ms",
            session.trial_count(),
            misclicks,
            self.timer.now_ms() as f64 / 1000.0,
            wall.now_ms()
        );

        let path = self
            .exporter
            .export(session, &mut self.sink)
            .context("Failed to export results")?;
        info!("Results saved to: {}", path.display());
        Ok(path)
    }
}

fn load_experiment_config(path: &Path) -> Result<ExperimentConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = ExperimentConfig::from_json_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}
