//! Text and JSON rendering of an interaction's outputs.

use crate::customers::CustomerRecord;
use crate::ensemble::PredictionResult;
use crate::features::FeatureVector;
use crate::narrative::Narratives;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub features: FeatureVector,
    pub result: PredictionResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionReport {
    pub interaction_id: Uuid,
    pub ts: DateTime<Utc>,
    pub customer: CustomerRecord,
    pub prediction: Prediction,
    pub narratives: Narratives,
}

const RULE: &str = "---";

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        if r.no_valid_predictions {
            writeln!(f, "No valid model predictions available.")?;
        }
        writeln!(
            f,
            "The customer has a {:.2}% chance of churning.",
            r.aggregate * 100.0
        )?;
        writeln!(f)?;
        writeln!(f, "Churn probability by model:")?;
        for p in &r.probabilities {
            writeln!(f, "  {:<24} {:>6.2}%", p.model, p.probability * 100.0)?;
        }
        for failure in &r.failures {
            writeln!(f, "  {:<24} unavailable ({})", failure.model, failure.error)?;
        }
        Ok(())
    }
}

impl fmt::Display for InteractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer Churn Prediction: {}", self.customer.option_label())?;
        writeln!(f)?;
        write!(f, "{}", self.prediction)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Explanation of Prediction")?;
        writeln!(f)?;
        writeln!(f, "{}", self.narratives.explanation.text.trim_end())?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Personalized Email to Customer")?;
        writeln!(f)?;
        writeln!(f, "{}", self.narratives.email.trim_end())
    }
}
