use crate::error::{FittsError, Result};
use crate::trial::TrialRecord;
use serde::{Deserialize, Serialize};

/// Lifecycle of one experiment run
#[derive(Copy, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    NotStarted,
    Running,
    Complete,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::NotStarted
    }
}

impl SessionStatus {
    pub fn allows_input(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn next(&self) -> Option<Self> {
        use SessionStatus::*;
        Some(match self {
            NotStarted => Running,
            Running => Complete,
            Complete => return None,
        })
    }

    pub fn is_running(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SessionStatus::Complete)
    }
}

/// One participant's run: status plus the append-only trial log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    participant_name: String,
    status: SessionStatus,
    trials: Vec<TrialRecord>,
    trial_limit: usize,
    started_at_ms: Option<u64>,
}

impl Session {
    pub fn new(trial_limit: usize) -> Self {
        Self {
            participant_name: String::new(),
            status: SessionStatus::NotStarted,
            trials: Vec::with_capacity(trial_limit),
            trial_limit,
            started_at_ms: None,
        }
    }

    /// Moves `NotStarted -> Running`. The name is stored trimmed.
    pub fn begin(&mut self, participant_name: &str, started_at_ms: u64) -> Result<()> {
        if self.status != SessionStatus::NotStarted {
            return Err(FittsError::SessionAlreadyStarted);
        }
        let name = participant_name.trim();
        if name.is_empty() {
            return Err(FittsError::EmptyParticipantName);
        }
        self.participant_name = name.to_string();
        self.started_at_ms = Some(started_at_ms);
        self.advance();
        Ok(())
    }

    /// Appends a finished trial and flips to `Complete` once the limit is reached.
    /// Records offered outside `Running` are dropped.
    pub fn append(&mut self, record: TrialRecord) -> SessionStatus {
        if !self.status.is_running() {
            return self.status;
        }
        self.trials.push(record);
        if self.trials.len() >= self.trial_limit {
            self.advance();
        }
        self.status
    }

    fn advance(&mut self) {
        if let Some(next) = self.status.next() {
            self.status = next;
        }
    }

    pub fn participant_name(&self) -> &str {
        &self.participant_name
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn trials(&self) -> &[TrialRecord] {
        &self.trials
    }

    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    pub fn trial_limit(&self) -> usize {
        self.trial_limit
    }

    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }
}
