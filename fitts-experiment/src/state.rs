use super::config::ExperimentConfig;
use super::measurement::{MeasurementRecorder, PlannedTrial};
use super::placement::{check_fits, clamp_to_viewport, project};
use super::quadrant::{choose_heading, split_for};
use super::sampler;
use fitts_core::{Point, Result, Session, SessionStatus, TargetState, TrialRecord, Viewport};
use fitts_timing::Timer;
use log::{debug, info, warn};
use rand::Rng;

/// What a click did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Session not running; nothing changed
    Ignored,
    /// Off-target click, `pending` misclicks in the current trial so far
    Misclick { pending: u32 },
    /// Trial recorded and the target moved
    Advanced(TrialRecord),
    /// Final trial recorded, session is now complete
    Completed(TrialRecord),
}

/// Drives one session: hit-tests clicks, relocates the target, records trials
pub struct TrialSequencer<T, R>
where
    T: Timer,
    R: Rng,
{
    config: ExperimentConfig,
    timer: T,
    rng: R,
    viewport: Viewport,
    session: Session,
    target: TargetState,
    recorder: MeasurementRecorder,
}

impl<T, R> TrialSequencer<T, R>
where
    T: Timer,
    R: Rng,
{
    pub fn new(config: ExperimentConfig, viewport: Viewport, timer: T, rng: R) -> Result<Self> {
        config.validate()?;
        let session = Session::new(config.trial_limit);
        let target = TargetState::new(config.initial_target, config.initial_size);
        Ok(Self {
            config,
            timer,
            rng,
            viewport,
            session,
            target,
            recorder: MeasurementRecorder::new(),
        })
    }

    /// `NotStarted -> Running`. Also places the initial target inside the
    /// padded viewport, so the viewport must hold the largest size category.
    pub fn start(&mut self, participant_name: &str) -> Result<()> {
        let padding = self.config.padding();
        check_fits(self.config.largest_size(), self.viewport, padding)?;
        let initial = clamp_to_viewport(
            self.config.initial_target,
            self.config.initial_size,
            self.viewport,
            padding,
        )?;

        let now_ms = self.timer.now_ms();
        if let Err(e) = self.session.begin(participant_name, now_ms) {
            warn!("Start rejected: {e}");
            return Err(e);
        }

        self.target = TargetState::new(initial, self.config.initial_size);
        self.recorder.reset(now_ms, self.config.first_trial_timing);
        info!(
            "Session started for {} at {} ms ({} trials, viewport {}x{})",
            self.session.participant_name(),
            now_ms,
            self.config.trial_limit,
            self.viewport.width,
            self.viewport.height,
        );
        Ok(())
    }

    /// Routes a click in the experiment area to the target or background handler
    pub fn click(&mut self, at: Point) -> Result<ClickOutcome> {
        if !self.session.status().allows_input() {
            return Ok(ClickOutcome::Ignored);
        }
        if self.target.contains(at) {
            self.target_clicked(at)
        } else {
            Ok(self.background_clicked())
        }
    }

    /// Click outside the target
    pub fn background_clicked(&mut self) -> ClickOutcome {
        if !self.session.status().allows_input() {
            return ClickOutcome::Ignored;
        }
        let pending = self.recorder.register_misclick();
        debug!(
            "Misclick {} during trial {}",
            pending,
            self.session.trial_count()
        );
        ClickOutcome::Misclick { pending }
    }

    /// Click on the target: closes the running trial and relocates the target.
    /// Nothing is mutated if placement fails.
    pub fn target_clicked(&mut self, at: Point) -> Result<ClickOutcome> {
        if !self.session.status().allows_input() {
            return Ok(ClickOutcome::Ignored);
        }

        let plan = self.plan_next()?;
        let now_ms = self.timer.now_ms();
        let record = self.recorder.record(&plan, now_ms, at);
        self.target = TargetState::new(plan.position, plan.size);

        debug!(
            "Trial {} recorded: distance {} size {} direction {} elapsed {} ms travelled {:.1} misclicks {}",
            record.trial_id,
            record.distance,
            record.size,
            record.direction,
            record.elapsed_ms,
            record.distance_travelled,
            record.misclicks,
        );

        match self.session.append(record.clone()) {
            SessionStatus::Complete => {
                info!(
                    "Session complete for {} after {} trials",
                    self.session.participant_name(),
                    self.session.trial_count()
                );
                Ok(ClickOutcome::Completed(record))
            }
            _ => Ok(ClickOutcome::Advanced(record)),
        }
    }

    /// Samples categories, picks a heading and computes the clamped position
    fn plan_next(&mut self) -> Result<PlannedTrial> {
        let distance = sampler::sample(&self.config.distance_categories, &mut self.rng)?.value;
        let size = sampler::sample(&self.config.size_categories, &mut self.rng)?.value;

        let split = split_for(self.viewport, self.config.quadrant_split);
        let heading = choose_heading(self.target.position, split, &mut self.rng);
        let candidate = project(self.target.position, heading.angle_deg, distance as f64);
        let position = clamp_to_viewport(candidate, size, self.viewport, self.config.padding())?;

        Ok(PlannedTrial {
            trial_id: self.session.trial_count(),
            distance,
            size,
            direction: heading.direction,
            position,
        })
    }

    /// Applies a new viewport size and pulls the live target back inside it.
    /// Rejected if the largest target no longer fits.
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        let padding = self.config.padding();
        check_fits(self.config.largest_size(), viewport, padding)?;
        let position =
            clamp_to_viewport(self.target.position, self.target.size, viewport, padding)?;
        self.viewport = viewport;
        self.target.position = position;
        info!("Viewport resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Returns (completed trials, trial limit)
    pub fn progress(&self) -> (usize, usize) {
        (self.session.trial_count(), self.session.trial_limit())
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn is_complete(&self) -> bool {
        self.session.status().is_complete()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn pending_misclicks(&self) -> u32 {
        self.recorder.pending_misclicks()
    }
}
