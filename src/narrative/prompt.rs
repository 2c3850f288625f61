//! Prompt templates. The risk framing is picked here; sentence count, person and
//! the ban on mentioning the model are instructions to the generator only.

use super::{NarrativeKind, NarrativeRequest};
use crate::config::NarrativeConfig;
use crate::customers::CustomerRecord;
use crate::ensemble::PredictionResult;
use crate::features::{FeatureVector, PopulationStats, FEATURE_IMPORTANCES};
use crate::risk::{display_percent, ChurnRisk, RiskEngine};
use std::fmt::Write;

/// Everything a prompt says about the customer.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    pub record: &'a CustomerRecord,
    pub features: &'a FeatureVector,
    pub prediction: &'a PredictionResult,
}

impl NarrativeContext<'_> {
    /// Ensemble probability as a percentage with one decimal, e.g. `40.0`.
    fn percent(&self) -> String {
        format!("{:.1}", display_percent(self.prediction.aggregate))
    }
}

pub fn render_importance_table() -> String {
    let mut out = format!("{:>20} | Importance\n", "Feature");
    out.push_str(&"-".repeat(36));
    for fi in FEATURE_IMPORTANCES.iter() {
        let _ = write!(out, "\n{:>20} | {:.6}", fi.feature, fi.importance);
    }
    out
}

pub struct PromptBuilder {
    explanation_model: String,
    email_model: String,
    risk: RiskEngine,
}

impl PromptBuilder {
    pub fn new(config: &NarrativeConfig, risk: RiskEngine) -> Self {
        Self {
            explanation_model: config.explanation_model.clone(),
            email_model: config.email_model.clone(),
            risk,
        }
    }

    pub fn explanation(&self, ctx: &NarrativeContext<'_>, stats: &PopulationStats) -> NarrativeRequest {
        let framing = self.risk.classify(ctx.prediction.aggregate);
        let threshold = self.risk.threshold_percent();
        let task = match framing {
            ChurnRisk::AtRisk => format!(
                "The customer has over a {threshold}% risk of churning. Generate a 3 sentence \
                 explanation of why they are at risk of churning."
            ),
            ChurnRisk::NotAtRisk => format!(
                "The customer has at most a {threshold}% risk of churning. Generate a 3 sentence \
                 explanation of why they might not be at risk of churning."
            ),
        };

        let prompt = format!(
            "You are an expert data scientist at a bank, specializing in interpreting and explaining \
predictions of machine learning models.

Your machine learning model has predicted that a customer named {surname} has a {percent}% \
probability of churning, based on the information provided below.

Here is the customer's information:
{features}

Here are the machine learning model's most important features for predicting churn:

{importances}

Here are summary statistics for churned customers:
{churned}

Here are summary statistics for non-churned customers:
{retained}

- {task}
- Base the explanation on the customer's information, the summary statistics of churned and \
non-churned customers, and the feature importances provided.

Don't mention the probability of churning, or the machine learning model, or say anything like \
\"Based on the machine learning model's prediction and top 10 most important features.\" \
Just explain the prediction neatly (NO FIRST PERSON).
",
            surname = ctx.record.surname,
            percent = ctx.percent(),
            features = ctx.features,
            importances = render_importance_table(),
            churned = stats.churned,
            retained = stats.retained,
            task = task,
        );

        NarrativeRequest {
            kind: NarrativeKind::Explanation,
            model: self.explanation_model.clone(),
            prompt,
            framing: Some(framing),
        }
    }

    pub fn email(&self, ctx: &NarrativeContext<'_>, explanation: &str) -> NarrativeRequest {
        let prompt = format!(
            "You are a manager at SL Bank. You are responsible for ensuring that customers stay \
with the bank and are incentivized with various offers.

You noticed a customer named {surname} who has a {percent}% probability of churning.

Here is the customer's information:
{features}

Here is some explanation as to why the customer might be at risk of churning:
{explanation}

Generate an email to the customer based on their information, asking them to stay if they are \
at risk of churning, or offering them incentives so that they stay with the bank.

Make sure to list out a set of incentives tailored to the customer's situation in a neat bullet \
point list format. Don't ever mention the probability of churning, or the machine learning model, \
to the customer.
",
            surname = ctx.record.surname,
            percent = ctx.percent(),
            features = ctx.features,
            explanation = explanation,
        );

        NarrativeRequest {
            kind: NarrativeKind::Email,
            model: self.email_model.clone(),
            prompt,
            framing: None,
        }
    }
}
