//! Named predictors loaded once at startup. Missing or corrupt artifacts degrade
//! to `Unavailable`, except for required models which halt startup.

use super::{ChurnPredictor, OnnxPredictor};
use crate::config::ModelConfig;
use crate::error::{PredictionError, RegistryError};
use crate::features::FeatureVector;
use tracing::{info, warn};

pub enum PredictorHandle {
    Loaded(Box<dyn ChurnPredictor>),
    Unavailable { name: String, reason: String },
}

impl PredictorHandle {
    pub fn is_available(&self) -> bool {
        matches!(self, PredictorHandle::Loaded(_))
    }
}

impl ChurnPredictor for PredictorHandle {
    fn name(&self) -> &str {
        match self {
            PredictorHandle::Loaded(p) => p.name(),
            PredictorHandle::Unavailable { name, .. } => name.as_str(),
        }
    }

    fn probability(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        match self {
            PredictorHandle::Loaded(p) => p.probability(features),
            PredictorHandle::Unavailable { reason, .. } => Err(PredictionError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }
}

struct Entry {
    handle: PredictorHandle,
    ensemble: bool,
}

#[derive(Default)]
pub struct ModelRegistry {
    entries: Vec<Entry>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every configured artifact, in order.
    pub fn load(models: &[ModelConfig]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        let mut missing_required = Vec::new();

        for m in models {
            let handle = if !m.path.exists() {
                warn!(model = %m.name, path = %m.path.display(), "model file not found");
                PredictorHandle::Unavailable {
                    name: m.name.clone(),
                    reason: format!("model file {} not found", m.path.display()),
                }
            } else {
                match OnnxPredictor::load(m.name.clone(), &m.path) {
                    Ok(p) => {
                        info!(model = %m.name, path = %m.path.display(), "model loaded");
                        PredictorHandle::Loaded(Box::new(p))
                    }
                    Err(e) => {
                        warn!(model = %m.name, error = %e, "error loading model");
                        PredictorHandle::Unavailable {
                            name: m.name.clone(),
                            reason: e.to_string(),
                        }
                    }
                }
            };
            if m.required && !handle.is_available() {
                missing_required.push(m.name.clone());
            }
            registry.register(handle, m.ensemble);
        }

        if !missing_required.is_empty() {
            return Err(RegistryError::RequiredUnavailable {
                names: missing_required,
            });
        }
        Ok(registry)
    }

    pub fn register(&mut self, handle: PredictorHandle, ensemble: bool) {
        self.entries.push(Entry { handle, ensemble });
    }

    pub fn get(&self, name: &str) -> Option<&PredictorHandle> {
        self.entries
            .iter()
            .map(|e| &e.handle)
            .find(|h| h.name() == name)
    }

    /// Predictors averaged for the churn probability, in registration order.
    pub fn ensemble(&self) -> Vec<&dyn ChurnPredictor> {
        self.entries
            .iter()
            .filter(|e| e.ensemble)
            .map(|e| &e.handle as &dyn ChurnPredictor)
            .collect()
    }

    /// Names of predictors that failed to load.
    pub fn unavailable(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.handle.is_available())
            .map(|e| e.handle.name())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
