use anyhow::{bail, Result};
use std::{env, path::PathBuf};

const ENV_OUTPUT_DIR: &str = "FITTS_OUTPUT_DIR";
const DEFAULT_OUTPUT_DIR: &str = "csv";

/// Settings read from the environment
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        match env::var(ENV_OUTPUT_DIR) {
            Ok(output_dir) if !output_dir.trim().is_empty() => {
                let path = PathBuf::from(output_dir);

                // If the path already exists but is not a directory, reject early.
                if path.exists() && !path.is_dir() {
                    bail!("Output path is not a directory: {}", path.display());
                }
                config.output_dir = Some(path);
            }
            _ => config.output_dir = Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
        Ok(config)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
