use crate::error::DevMatchError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevMatchConfig {
    pub scoring: Option<ScoringConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<WeightsConfig>,
}

/// Partial weight overrides; missing keys keep their default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightsConfig {
    pub tech_stack: Option<f64>,
    pub activity: Option<f64>,
    pub scope: Option<f64>,
    pub collaboration: Option<f64>,
    pub community: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatConfig {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormatConfig>,
}

/// Factor weights in factor order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub tech_stack: f64,
    pub activity: f64,
    pub scope: f64,
    pub collaboration: f64,
    pub community: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            tech_stack: 0.30,
            activity: 0.20,
            scope: 0.15,
            collaboration: 0.20,
            community: 0.15,
        }
    }
}

impl Weights {
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.tech_stack,
            self.activity,
            self.scope,
            self.collaboration,
            self.community,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl DevMatchConfig {
    pub fn weights(&self) -> Weights {
        let defaults = Weights::default();
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            Some(overrides) => Weights {
                tech_stack: overrides.tech_stack.unwrap_or(defaults.tech_stack),
                activity: overrides.activity.unwrap_or(defaults.activity),
                scope: overrides.scope.unwrap_or(defaults.scope),
                collaboration: overrides.collaboration.unwrap_or(defaults.collaboration),
                community: overrides.community.unwrap_or(defaults.community),
            },
            None => defaults,
        }
    }

    pub fn output_format(&self) -> Option<OutputFormatConfig> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn validate(&self) -> Result<(), DevMatchError> {
        let weights = self.weights();
        if weights
            .as_array()
            .iter()
            .any(|weight| !weight.is_finite() || *weight < 0.0)
        {
            return Err(DevMatchError::InvalidWeights(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        let sum = weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(DevMatchError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum:.4}"
            )));
        }
        Ok(())
    }
}
