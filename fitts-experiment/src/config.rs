use crate::sampler;
use fitts_core::{FittsError, Padding, Point, Result};
use serde::{Deserialize, Serialize};

pub const TRIAL_LIMIT: usize = 200;
pub const DEFAULT_PADDING: f64 = 30.0;

/// One selectable distance or size value and its sampling weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub value: u32,
    pub weight: f64,
}

impl Category {
    pub const fn new(value: u32, weight: f64) -> Self {
        Self { value, weight }
    }

    /// A category whose weight equals its pixel value
    pub const fn proportional(value: u32) -> Self {
        Self {
            value,
            weight: value as f64,
        }
    }
}

impl sampler::Weighted for Category {
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// How the first trial's elapsed time is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstTrialTiming {
    /// First trial always reports 0 ms
    #[default]
    Zero,
    /// First trial is timed from the session start
    SinceStart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub trial_limit: usize,
    pub padding_x: f64,
    pub padding_y: f64,
    pub distance_categories: Vec<Category>,
    pub size_categories: Vec<Category>,
    pub initial_target: Point,
    pub initial_size: u32,
    /// Fixed quadrant thresholds; `None` splits the live viewport in half
    pub quadrant_split: Option<Point>,
    pub first_trial_timing: FirstTrialTiming,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trial_limit: TRIAL_LIMIT,
            padding_x: DEFAULT_PADDING,
            padding_y: DEFAULT_PADDING,
            distance_categories: vec![
                Category::proportional(400),
                Category::proportional(500),
                Category::proportional(600),
            ],
            size_categories: vec![
                Category::proportional(64),
                Category::proportional(128),
                Category::proportional(200),
            ],
            initial_target: Point::new(400.0, 700.0),
            initial_size: 64,
            quadrant_split: None,
            first_trial_timing: FirstTrialTiming::Zero,
        }
    }
}

impl ExperimentConfig {
    /// Parses a JSON document; missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FittsError::InvalidConfiguration(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trial_limit == 0 {
            return Err(FittsError::InvalidConfiguration(
                "trial_limit must be at least 1".to_string(),
            ));
        }
        for (name, value) in [("padding_x", self.padding_x), ("padding_y", self.padding_y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FittsError::InvalidConfiguration(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        sampler::total_weight(&self.distance_categories)?;
        sampler::total_weight(&self.size_categories)?;
        if self.size_categories.iter().any(|c| c.value == 0) || self.initial_size == 0 {
            return Err(FittsError::InvalidConfiguration(
                "target sizes must be positive".to_string(),
            ));
        }
        if let Some(split) = self.quadrant_split {
            if !split.x.is_finite() || !split.y.is_finite() {
                return Err(FittsError::InvalidConfiguration(
                    "quadrant_split must be finite".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn padding(&self) -> Padding {
        Padding::new(self.padding_x, self.padding_y)
    }

    /// Largest target side the experiment can place, including the initial one
    pub fn largest_size(&self) -> u32 {
        self.size_categories
            .iter()
            .map(|c| c.value)
            .chain(std::iter::once(self.initial_size))
            .max()
            .unwrap_or(self.initial_size)
    }
}
