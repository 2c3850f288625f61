//! One user interaction: encode → ensemble → explanation → email, synchronously.
//! Only the dataset and the loaded predictors are shared between runs, read-only.

use crate::config::ChurnConfig;
use crate::customers::{CustomerRecord, Dataset};
use crate::ensemble;
use crate::error::{EncodingError, InteractionError};
use crate::features::{encode, PopulationStats};
use crate::model::ModelRegistry;
use crate::narrative::{NarrativeContext, NarrativePipeline, PromptBuilder, TextGenerator};
use crate::report::{InteractionReport, Prediction};
use crate::risk::RiskEngine;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    registry: &'a ModelRegistry,
    config: &'a ChurnConfig,
}

impl<'a> Dashboard<'a> {
    pub fn new(dataset: &'a Dataset, registry: &'a ModelRegistry, config: &'a ChurnConfig) -> Self {
        Self {
            dataset,
            registry,
            config,
        }
    }

    /// Encode and aggregate. Predictor failures are reported inside the result.
    pub fn predict(&self, record: &CustomerRecord) -> Result<Prediction, EncodingError> {
        let features = encode(record)?;
        let result = ensemble::predict(&features, &self.registry.ensemble());
        info!(
            customer_id = record.customer_id,
            probability = result.aggregate,
            models = result.probabilities.len(),
            failed = result.failures.len(),
            "ensemble prediction"
        );
        Ok(Prediction { features, result })
    }

    /// Full pipeline. A text-generation failure fails the whole interaction.
    pub fn run(
        &self,
        record: &CustomerRecord,
        generator: &dyn TextGenerator,
    ) -> Result<InteractionReport, InteractionError> {
        let interaction_id = Uuid::new_v4();
        let ts = Utc::now();
        info!(%interaction_id, customer_id = record.customer_id, surname = %record.surname, "interaction started");

        let prediction = self.predict(record)?;
        let stats = PopulationStats::from_dataset(self.dataset);
        let prompts = PromptBuilder::new(
            &self.config.narrative,
            RiskEngine::new(self.config.risk.clone()),
        );
        let pipeline = NarrativePipeline::new(generator, prompts);
        let ctx = NarrativeContext {
            record,
            features: &prediction.features,
            prediction: &prediction.result,
        };
        let narratives = pipeline.run(&ctx, &stats)?;

        info!(%interaction_id, "interaction complete");
        Ok(InteractionReport {
            interaction_id,
            ts,
            customer: record.clone(),
            prediction,
            narratives,
        })
    }
}
