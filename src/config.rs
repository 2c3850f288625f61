//! Dashboard configuration. JSON file, every section optional.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChurnConfig {
    /// Historical customer dataset (CSV with an `Exited` label)
    pub data_path: PathBuf,
    /// Predictor artifacts, in ensemble order
    pub models: Vec<ModelConfig>,
    /// Framing threshold for the explanation prompt
    pub risk: RiskConfig,
    /// Text-generation service
    pub narrative: NarrativeConfig,
    /// Logging
    pub log: LogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub path: PathBuf,
    /// Startup halts when a required model cannot be loaded
    #[serde(default)]
    pub required: bool,
    /// Whether this model contributes to the averaged probability
    #[serde(default)]
    pub ensemble: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Probability strictly above this is framed as "at risk" (0.0–1.0)
    pub at_risk_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// OpenAI-compatible API root, without the `/chat/completions` suffix
    pub base_url: String,
    /// Environment variable holding the bearer token
    pub api_key_env: String,
    pub explanation_model: String,
    pub email_model: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the interaction report as a single JSON line
    pub json: bool,
}

impl ModelConfig {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            required: false,
            ensemble: false,
        }
    }

    /// Counted in the average and required at startup.
    pub fn core(mut self) -> Self {
        self.required = true;
        self.ensemble = true;
        self
    }
}

pub fn default_models() -> Vec<ModelConfig> {
    vec![
        ModelConfig::new("XGBoost", "models/xgb_model.onnx").core(),
        ModelConfig::new("Naive Bayes", "models/nb_model.onnx"),
        ModelConfig::new("Random Forest", "models/rf_model.onnx").core(),
        ModelConfig::new("Decision Tree", "models/dt_model.onnx"),
        ModelConfig::new("SVM", "models/svm_model.onnx"),
        ModelConfig::new("K-Nearest Neighbors", "models/knn_model.onnx").core(),
        ModelConfig::new("Voting Classifier", "models/voting_clf.onnx"),
        ModelConfig::new("XGBoost SMOTE", "models/xgboost-SMOTE.onnx"),
        ModelConfig::new(
            "XGBoost Feature Engineered",
            "models/xgboost-featureEngineered.onnx",
        ),
    ]
}

impl Default for ChurnConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("churn.csv"),
            models: default_models(),
            risk: RiskConfig::default(),
            narrative: NarrativeConfig::default(),
            log: LogConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            at_risk_threshold: 0.4,
        }
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            explanation_model: "llama-3.2-3b-preview".to_string(),
            email_model: "llama-3.1-8b-instant".to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ChurnConfig {
    /// Load from JSON file if present; otherwise return default.
    /// A file that exists but does not parse is an error rather than a silent fallback.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
