//! Churn dashboard — ensemble churn prediction with LLM-written explanations.
//!
//! Modular structure:
//! - [`customers`] — Customer records, field edits, historical dataset
//! - [`features`] — One-hot feature encoding, importance table, population statistics
//! - [`model`] — ONNX classifiers and the model registry
//! - [`ensemble`] — Failure-isolated probability averaging
//! - [`risk`] — Risk framing threshold
//! - [`narrative`] — Prompt construction and the text-generation client
//! - [`interaction`] — One synchronous pipeline run per user interaction
//! - [`logging`] — Structured logging

pub mod config;
pub mod customers;
pub mod ensemble;
pub mod error;
pub mod features;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod narrative;
pub mod report;
pub mod risk;

pub use config::ChurnConfig;
pub use customers::{CustomerRecord, Dataset, FieldEdit};
pub use ensemble::PredictionResult;
pub use features::{encode, FeatureVector};
pub use interaction::Dashboard;
pub use logging::StructuredLogger;
pub use model::{ChurnPredictor, ModelRegistry, OnnxPredictor};
pub use narrative::{ChatCompletionClient, NarrativeRequest, TextGenerator};
pub use report::InteractionReport;
pub use risk::{ChurnRisk, RiskEngine};
