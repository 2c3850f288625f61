//! Natural-language explanation and retention email, generated by an external
//! text-completion service from rendered prompts.

mod client;
mod pipeline;
mod prompt;

pub use client::ChatCompletionClient;
pub use pipeline::{Explanation, NarrativePipeline, Narratives};
pub use prompt::{render_importance_table, NarrativeContext, PromptBuilder};

use crate::error::NarrativeError;
use crate::risk::ChurnRisk;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeKind {
    Explanation,
    Email,
}

/// A fully rendered prompt bound to the model that should answer it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeRequest {
    pub kind: NarrativeKind,
    pub model: String,
    pub prompt: String,
    /// Framing chosen for explanation prompts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framing: Option<ChurnRisk>,
}

/// Single-shot text completion. The response is opaque text.
pub trait TextGenerator {
    fn complete(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}
