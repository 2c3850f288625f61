use super::{ModelProbability, PredictionResult, PredictorFailure};
use crate::error::PredictionError;
use crate::features::FeatureVector;
use crate::model::ChurnPredictor;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Run one predictor; panics and out-of-range outputs count as failures.
fn isolated(predictor: &dyn ChurnPredictor, features: &FeatureVector) -> Result<f64, PredictionError> {
    let p = catch_unwind(AssertUnwindSafe(|| predictor.probability(features)))
        .unwrap_or(Err(PredictionError::Panicked))?;
    if !(0.0..=1.0).contains(&p) {
        return Err(PredictionError::OutOfRange { value: p });
    }
    Ok(p)
}

/// Never fails: each predictor either contributes a probability or a recorded failure.
pub fn predict(features: &FeatureVector, predictors: &[&dyn ChurnPredictor]) -> PredictionResult {
    let mut probabilities = Vec::with_capacity(predictors.len());
    let mut failures = Vec::new();

    for predictor in predictors {
        match isolated(*predictor, features) {
            Ok(probability) => {
                debug!(model = predictor.name(), probability, "model prediction");
                probabilities.push(ModelProbability {
                    model: predictor.name().to_string(),
                    probability,
                });
            }
            Err(e) => {
                warn!(model = predictor.name(), error = %e, "model prediction failed");
                failures.push(PredictorFailure {
                    model: predictor.name().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    let no_valid_predictions = probabilities.is_empty();
    let aggregate = if no_valid_predictions {
        warn!("no valid model predictions available");
        0.0
    } else {
        probabilities.iter().map(|p| p.probability).sum::<f64>() / probabilities.len() as f64
    };

    PredictionResult {
        probabilities,
        failures,
        aggregate,
        no_valid_predictions,
    }
}
