//! Ensemble churn probability: unweighted mean over the predictors that succeed.

mod aggregate;

pub use aggregate::predict;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProbability {
    pub model: String,
    pub probability: f64,
}

/// A predictor excluded from the mean, kept for the warning channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictorFailure {
    pub model: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Successful predictors only, in invocation order
    pub probabilities: Vec<ModelProbability>,
    pub failures: Vec<PredictorFailure>,
    /// Mean of `probabilities`; 0.0 when none succeeded
    pub aggregate: f64,
    pub no_valid_predictions: bool,
}

impl PredictionResult {
    pub fn probability_of(&self, model: &str) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|p| p.model == model)
            .map(|p| p.probability)
    }
}
