use crate::error::{ExportError, Result};
use crate::table::write_trials;
use crate::time::TimeFormat;
use fitts_core::{Session, TrialRecord};
use log::{debug, info, warn};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Receives a finished dataset
pub trait DataSink {
    type Receipt;

    fn deliver(&mut self, filename: &str, contents: &str) -> Result<Self::Receipt>;
}

/// `<participant>_data.csv`
pub fn export_filename(participant_name: &str) -> String {
    format!("{participant_name}_data.csv")
}

/// Writes deliveries into a directory, creating it on demand
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fails for names that would leave the output directory
    pub fn check_file_name(filename: &str) -> Result<()> {
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || filename == "."
            || filename == ".."
        {
            return Err(ExportError::InvalidFileName(filename.to_string()));
        }
        Ok(())
    }
}

impl DataSink for FileSink {
    type Receipt = PathBuf;

    fn deliver(&mut self, filename: &str, contents: &str) -> Result<PathBuf> {
        Self::check_file_name(filename)?;

        fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::CreateDir {
            path: self.output_dir.clone(),
            source: e,
        })?;
        let file_path = self.output_dir.join(filename);

        let file = File::create(&file_path).map_err(|e| ExportError::CreateFile {
            path: file_path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ExportError::WriteFile {
                path: file_path.clone(),
                source: e,
            })?;

        debug!("Wrote {} bytes to {}", contents.len(), file_path.display());
        Ok(file_path)
    }
}

/// Keeps every delivery in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub deliveries: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&(String, String)> {
        self.deliveries.last()
    }
}

impl DataSink for MemorySink {
    type Receipt = ();

    fn deliver(&mut self, filename: &str, contents: &str) -> Result<()> {
        self.deliveries
            .push((filename.to_string(), contents.to_string()));
        Ok(())
    }
}

/// Serializes a session's trials and hands them to a sink
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter {
    pub format: TimeFormat,
}

impl Exporter {
    pub fn new(format: TimeFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, trials: &[TrialRecord]) -> Result<String> {
        let mut buf = Vec::new();
        write_trials(trials, self.format, &mut buf)?;
        // every field is ASCII
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn export<S: DataSink>(&self, session: &Session, sink: &mut S) -> Result<S::Receipt> {
        if !session.status().is_complete() {
            warn!(
                "Exporting incomplete session for {} ({}/{} trials)",
                session.participant_name(),
                session.trial_count(),
                session.trial_limit()
            );
        }
        let contents = self.render(session.trials())?;
        let filename = export_filename(session.participant_name());
        let receipt = sink.deliver(&filename, &contents)?;
        info!("Exported {} trials as {}", session.trial_count(), filename);
        Ok(receipt)
    }
}
