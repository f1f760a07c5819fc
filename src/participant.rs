use anyhow::Result;
use fitts_core::{Point, TargetState};
use fitts_experiment::{ClickOutcome, TrialSequencer};
use fitts_timing::ManualTimer;
use rand::Rng;

/// Movement time model, `MT = a + b * log2(D / W + 1)` in milliseconds
#[derive(Debug, Clone, Copy)]
pub struct MovementModel {
    pub a_ms: f64,
    pub b_ms: f64,
    pub jitter_ms: f64,
}

impl Default for MovementModel {
    fn default() -> Self {
        Self {
            a_ms: 150.0,
            b_ms: 120.0,
            jitter_ms: 60.0,
        }
    }
}

impl MovementModel {
    #[inline]
    pub fn fitts_time(&self, distance: f64, width: f64) -> f64 {
        self.a_ms + self.b_ms * ((distance / width) + 1.0).log2()
    }
}

/// Headless stand-in for a person clicking the target
pub struct SimulatedParticipant<R: Rng> {
    rng: R,
    misclick_rate: f64,
    model: MovementModel,
    cursor: Point,
}

impl<R: Rng> SimulatedParticipant<R> {
    pub fn new(rng: R, misclick_rate: f64, model: MovementModel, cursor: Point) -> Self {
        Self {
            rng,
            misclick_rate,
            model,
            cursor,
        }
    }

    /// Moves to the target (missing first with `misclick_rate`), advancing
    /// the shared timer by the modelled movement time before every click.
    pub fn perform_trial<S: Rng>(
        &mut self,
        sequencer: &mut TrialSequencer<ManualTimer, S>,
        timer: &ManualTimer,
    ) -> Result<ClickOutcome> {
        let target = *sequencer.target();

        if self.rng.random_bool(self.misclick_rate) {
            let miss = self.near_miss(&target);
            self.move_to(miss, target.size, timer);
            sequencer.click(miss)?;
        }

        let size = target.size as f64;
        let hit = Point::new(
            target.position.x + self.rng.random_range(0.0..=size),
            target.position.y + self.rng.random_range(0.0..=size),
        );
        self.move_to(hit, target.size, timer);
        Ok(sequencer.click(hit)?)
    }

    fn move_to(&mut self, to: Point, width: u32, timer: &ManualTimer) {
        let distance = self.cursor.distance_to(to);
        let jitter = self
            .rng
            .random_range(-self.model.jitter_ms..=self.model.jitter_ms);
        let mt = self.model.fitts_time(distance, width as f64) + jitter;
        timer.advance_ms(mt.max(0.0).round() as u64);
        self.cursor = to;
    }

    /// A point just past one edge of the target
    fn near_miss(&mut self, target: &TargetState) -> Point {
        let size = target.size as f64;
        let overshoot = self.rng.random_range(2.0..20.0);
        let along = self.rng.random_range(0.0..=size);
        let (x, y) = (target.position.x, target.position.y);
        match self.rng.random_range(0..4) {
            0 => Point::new(x - overshoot, y + along),
            1 => Point::new(x + size + overshoot, y + along),
            2 => Point::new(x + along, y - overshoot),
            _ => Point::new(x + along, y + size + overshoot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitts_core::Viewport;
    use fitts_experiment::ExperimentConfig;
    use fitts_timing::Timer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fitts_time() {
        let model = MovementModel {
            a_ms: 100.0,
            b_ms: 200.0,
            jitter_ms: 0.0,
        };
        // log2(448 / 64 + 1) = 3
        assert_eq!(model.fitts_time(448.0, 64.0), 700.0);
        assert_eq!(model.fitts_time(0.0, 64.0), 100.0);
    }

    #[test]
    fn test_near_miss_is_off_target() {
        let mut participant = SimulatedParticipant::new(
            StdRng::seed_from_u64(3),
            0.0,
            MovementModel::default(),
            Point::default(),
        );
        let target = TargetState::new(Point::new(300.0, 300.0), 128);
        for _ in 0..200 {
            assert!(!target.contains(participant.near_miss(&target)));
        }
    }

    #[test]
    fn test_perform_trial_advances_time_and_session() {
        let timer = ManualTimer::new(0);
        let mut seq = TrialSequencer::new(
            ExperimentConfig::default(),
            Viewport::new(1280.0, 800.0),
            timer.clone(),
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        seq.start("Sim").unwrap();

        let model = MovementModel {
            a_ms: 200.0,
            b_ms: 100.0,
            jitter_ms: 0.0,
        };
        let mut participant =
            SimulatedParticipant::new(StdRng::seed_from_u64(2), 1.0, model, Point::default());

        let first = participant.perform_trial(&mut seq, &timer).unwrap();
        let ClickOutcome::Advanced(record) = first else {
            panic!("expected the trial to advance");
        };
        assert_eq!(record.misclicks, 1);
        // two movements of at least `a_ms` each
        assert!(timer.now_ms() >= 400);

        let second = participant.perform_trial(&mut seq, &timer).unwrap();
        let ClickOutcome::Advanced(record) = second else {
            panic!("expected the trial to advance");
        };
        assert!(record.elapsed_ms >= 400);
        assert_eq!(seq.progress().0, 2);
    }
}
