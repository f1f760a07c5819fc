pub mod config;
pub mod measurement;
pub mod placement;
pub mod quadrant;
pub mod sampler;
pub mod state;

pub use config::{Category, ExperimentConfig, FirstTrialTiming, DEFAULT_PADDING, TRIAL_LIMIT};
pub use measurement::{MeasurementRecorder, PlannedTrial};
pub use placement::{clamp_to_viewport, project};
pub use quadrant::{Heading, Quadrant};
pub use state::{ClickOutcome, TrialSequencer};
