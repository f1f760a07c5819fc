use crate::config::FirstTrialTiming;
use fitts_core::{Direction, Point, TrialRecord};

/// Everything decided about the next target before the trial is recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedTrial {
    pub trial_id: usize,
    pub distance: u32,
    pub size: u32,
    pub direction: Direction,
    /// Clamped top-left corner of the new target
    pub position: Point,
}

/// Cross-trial measurement state: last click time and pending misclicks
#[derive(Debug, Clone, Default)]
pub struct MeasurementRecorder {
    previous_click_ms: Option<u64>,
    misclicks: u32,
}

impl MeasurementRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both accumulators at session start
    pub fn reset(&mut self, started_at_ms: u64, timing: FirstTrialTiming) {
        self.previous_click_ms = match timing {
            FirstTrialTiming::Zero => None,
            FirstTrialTiming::SinceStart => Some(started_at_ms),
        };
        self.misclicks = 0;
    }

    pub fn register_misclick(&mut self) -> u32 {
        self.misclicks += 1;
        self.misclicks
    }

    pub fn pending_misclicks(&self) -> u32 {
        self.misclicks
    }

    pub fn previous_click_ms(&self) -> Option<u64> {
        self.previous_click_ms
    }

    /// Closes the current trial: consumes the misclick count and moves the
    /// previous-click mark to `now_ms`.
    pub fn record(&mut self, plan: &PlannedTrial, now_ms: u64, click: Point) -> TrialRecord {
        let elapsed_ms = self
            .previous_click_ms
            .map_or(0, |prev| now_ms.saturating_sub(prev));
        self.previous_click_ms = Some(now_ms);

        let misclicks = std::mem::take(&mut self.misclicks);

        TrialRecord {
            trial_id: plan.trial_id,
            distance: plan.distance,
            size: plan.size,
            direction: plan.direction,
            elapsed_ms,
            distance_travelled: click.distance_to(plan.position),
            misclicks,
        }
    }
}
