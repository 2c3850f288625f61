//! Population statistics + explanation prompt rendering over a synthetic dataset.

use churn_dashboard::config::{NarrativeConfig, RiskConfig};
use churn_dashboard::customers::{CustomerRecord, Dataset, HistoricalCustomer};
use churn_dashboard::features::PopulationStats;
use churn_dashboard::narrative::{NarrativeContext, PromptBuilder};
use churn_dashboard::{encode, PredictionResult, RiskEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic(n: usize) -> Dataset {
    let geos = ["France", "Germany", "Spain"];
    let customers = (0..n)
        .map(|i| HistoricalCustomer {
            record: CustomerRecord {
                customer_id: 15_000_000 + i as u64,
                surname: format!("Customer{}", i),
                credit_score: 350 + (i % 500) as u32,
                geography: geos[i % 3].to_string(),
                gender: if i % 2 == 0 { "Male" } else { "Female" }.to_string(),
                age: 18 + (i % 70) as u32,
                tenure: (i % 11) as u32,
                balance: (i % 7) as f64 * 25_000.0,
                num_of_products: 1 + (i % 4) as u32,
                has_cr_card: i % 3 != 0,
                is_active_member: i % 2 == 1,
                estimated_salary: 10_000.0 + (i % 1000) as f64 * 150.0,
            },
            exited: i % 5 == 0,
        })
        .collect();
    Dataset::from_customers(customers)
}

fn bench_stats(c: &mut Criterion) {
    let ds = synthetic(10_000);
    c.bench_function("population_stats_10k", |b| {
        b.iter(|| PopulationStats::from_dataset(black_box(&ds)))
    });
}

fn bench_explanation_prompt(c: &mut Criterion) {
    let ds = synthetic(10_000);
    let stats = PopulationStats::from_dataset(&ds);
    let record = ds.customers()[7].record.clone();
    let features = encode(&record).unwrap();
    let prediction = PredictionResult {
        probabilities: Vec::new(),
        failures: Vec::new(),
        aggregate: 0.42,
        no_valid_predictions: false,
    };
    let ctx = NarrativeContext {
        record: &record,
        features: &features,
        prediction: &prediction,
    };
    let prompts = PromptBuilder::new(&NarrativeConfig::default(), RiskEngine::new(RiskConfig::default()));

    c.bench_function("explanation_prompt", |b| {
        b.iter(|| prompts.explanation(black_box(&ctx), &stats))
    });
}

criterion_group!(benches, bench_stats, bench_explanation_prompt);
criterion_main!(benches);
