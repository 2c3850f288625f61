//! Churn dashboard entrypoint.
//!
//! `churn-dashboard` lists selectable customers.
//! `churn-dashboard <id | "id - surname"> [Field=value ...]` runs one interaction for that
//! customer, with optional field edits applied first.

use churn_dashboard::{
    config::ChurnConfig,
    customers::{parse_selection, Dataset, FieldEdit},
    interaction::Dashboard,
    logging::StructuredLogger,
    model::ModelRegistry,
    narrative::ChatCompletionClient,
};
use std::io::Write;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("CHURN_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ChurnConfig::load(&config_path)?;

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(config = %config_path.display(), "churn dashboard starting");

    let dataset = Dataset::load(&config.data_path)?;

    let mut args = std::env::args().skip(1);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let Some(selection) = args.next() else {
        for option in dataset.options() {
            writeln!(out, "{}", option)?;
        }
        return Ok(());
    };

    let customer_id = parse_selection(&selection)?;
    let edits = args
        .map(|a| FieldEdit::parse(&a))
        .collect::<Result<Vec<_>, _>>()?;
    let record = dataset.find(customer_id)?.apply_all(&edits)?;
    info!(customer_id, surname = %record.surname, edits = edits.len(), "customer selected");

    // Models load only once a customer is selected; listing needs none.
    let registry = ModelRegistry::load(&config.models)?;
    let unavailable = registry.unavailable();
    if !unavailable.is_empty() {
        info!(models = ?unavailable, "running without some models");
    }

    let dashboard = Dashboard::new(&dataset, &registry, &config);

    let client = match ChatCompletionClient::from_env(&config.narrative) {
        Ok(c) => c,
        Err(e) => {
            // Still show the numbers before failing.
            let prediction = dashboard.predict(&record)?;
            if config.output.json {
                StructuredLogger::emit_json(&prediction, &mut out)?;
            } else {
                write!(out, "{}", prediction)?;
            }
            error!(error = %e, "text generation unavailable");
            return Err(e.into());
        }
    };

    let report = dashboard.run(&record, &client).map_err(|e| {
        error!(error = %e, "interaction failed");
        e
    })?;
    if config.output.json {
        StructuredLogger::emit_json(&report, &mut out)?;
    } else {
        write!(out, "{}", report)?;
    }
    Ok(())
}
