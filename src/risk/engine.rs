//! Maps the ensemble probability onto the framing used by the explanation prompt.

use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChurnRisk {
    AtRisk,
    NotAtRisk,
}

/// Probability as a percentage rounded to one decimal, the value prompts show.
pub fn display_percent(probability: f64) -> f64 {
    (probability * 1000.0).round() / 10.0
}

impl ChurnRisk {
    /// Compares the displayed percentage, so a mean of 0.4000000000000001
    /// shown as 40.0% is not framed as over 40%. Exactly on the threshold is not at risk.
    pub fn from_probability(probability: f64, config: &RiskConfig) -> Self {
        if display_percent(probability) > display_percent(config.at_risk_threshold) {
            ChurnRisk::AtRisk
        } else {
            ChurnRisk::NotAtRisk
        }
    }
}

pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, probability: f64) -> ChurnRisk {
        ChurnRisk::from_probability(probability, &self.config)
    }

    /// Threshold as a percentage, for prompt text.
    pub fn threshold_percent(&self) -> f64 {
        display_percent(self.config.at_risk_threshold)
    }
}
