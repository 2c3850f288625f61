//! Two sequential generations: explanation first, then the email built from it.

use super::{NarrativeContext, NarrativeRequest, PromptBuilder, TextGenerator};
use crate::error::NarrativeError;
use crate::features::PopulationStats;
use serde::Serialize;

/// Output of the first step; the only input the email step takes from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub request: NarrativeRequest,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narratives {
    pub explanation: Explanation,
    pub email_request: NarrativeRequest,
    pub email: String,
}

pub struct NarrativePipeline<'g> {
    generator: &'g dyn TextGenerator,
    prompts: PromptBuilder,
}

impl<'g> NarrativePipeline<'g> {
    pub fn new(generator: &'g dyn TextGenerator, prompts: PromptBuilder) -> Self {
        Self { generator, prompts }
    }

    pub fn explain(
        &self,
        ctx: &NarrativeContext<'_>,
        stats: &PopulationStats,
    ) -> Result<Explanation, NarrativeError> {
        let request = self.prompts.explanation(ctx, stats);
        let text = self.generator.complete(&request)?;
        Ok(Explanation { request, text })
    }

    pub fn write_email(
        &self,
        ctx: &NarrativeContext<'_>,
        explanation: &Explanation,
    ) -> Result<(NarrativeRequest, String), NarrativeError> {
        let request = self.prompts.email(ctx, &explanation.text);
        let text = self.generator.complete(&request)?;
        Ok((request, text))
    }

    /// Any failure aborts; nothing partial is returned.
    pub fn run(
        &self,
        ctx: &NarrativeContext<'_>,
        stats: &PopulationStats,
    ) -> Result<Narratives, NarrativeError> {
        let explanation = self.explain(ctx, stats)?;
        let (email_request, email) = self.write_email(ctx, &explanation)?;
        Ok(Narratives {
            explanation,
            email_request,
            email,
        })
    }
}
