//! ONNX Runtime inference for one exported classifier. Input: [1, 13] f32.
//! Output: the `probabilities` tensor ([1, n_classes]) or, failing that, the last output.

use super::ChurnPredictor;
use crate::error::PredictionError;
use crate::features::{FeatureVector, FEATURE_COUNT};
use ndarray::Array2;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

const PROBABILITY_OUTPUT: &str = "probabilities";

/// A panic during one inference must not disable the model for the session.
fn lock_session<T>(session: &Mutex<T>) -> MutexGuard<'_, T> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

fn inference_error(e: impl std::fmt::Display) -> PredictionError {
    PredictionError::Inference {
        reason: e.to_string(),
    }
}

pub struct OnnxPredictor {
    name: String,
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxPredictor {
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self, PredictionError> {
        let name = name.into();
        let session = Session::builder()
            .map_err(inference_error)?
            .commit_from_file(path)
            .map_err(|e| PredictionError::Unavailable {
                reason: format!("{}: {}", path.display(), e),
            })?;

        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name == PROBABILITY_OUTPUT)
            .or_else(|| session.outputs.last())
            .map(|o| o.name.clone())
            .ok_or_else(|| PredictionError::Unavailable {
                reason: format!("{}: model has no outputs", path.display()),
            })?;

        tracing::debug!(model = %name, output = %output_name, "ONNX session ready");
        Ok(Self {
            name,
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl ChurnPredictor for OnnxPredictor {
    fn name(&self) -> &str {
        &self.name
    }

    fn probability(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let arr = Array2::from_shape_vec((1, FEATURE_COUNT), features.to_f32())
            .map_err(inference_error)?;
        let input = Tensor::from_array(arr).map_err(inference_error)?;

        let mut session = lock_session(&self.session);
        let outputs = session
            .run(ort::inputs![input])
            .map_err(inference_error)?;
        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| inference_error(format!("missing output {}", self.output_name)))?;
        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(inference_error)?;

        // Two-column output is [p(retained), p(churned)].
        let p = match data {
            [_, churn, ..] => *churn,
            [only] => *only,
            [] => return Err(inference_error("empty probability tensor")),
        };
        Ok(p as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn session_lock_recovers_after_panic() {
        let session = Mutex::new(vec![1u32]);
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _guard = lock_session(&session);
            panic!("inference panicked");
        }));
        assert!(result.is_err());
        assert!(session.is_poisoned());

        lock_session(&session).push(2);
        assert_eq!(*lock_session(&session), [1, 2]);
    }
}
