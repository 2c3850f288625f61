//! Churn risk framing.

mod engine;

pub use engine::{display_percent, ChurnRisk, RiskEngine};
