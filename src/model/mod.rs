//! Pre-trained churn classifiers behind a single probability capability.

mod onnx;
mod registry;

pub use onnx::OnnxPredictor;
pub use registry::{ModelRegistry, PredictorHandle};

use crate::error::PredictionError;
use crate::features::FeatureVector;

/// A loaded classifier. Implementations return the positive-class (churn) probability.
pub trait ChurnPredictor: Send + Sync {
    fn name(&self) -> &str;

    fn probability(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}
