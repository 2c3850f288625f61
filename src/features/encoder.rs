//! Customer record → feature vector. No scaling: the models were trained on raw values.

use super::{FeatureVector, FEATURE_COUNT};
use crate::customers::{CustomerRecord, Gender, Geography};
use crate::error::EncodingError;

fn one_hot(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}

/// Pure function of the record; fails only on an unknown geography or gender.
pub fn encode(record: &CustomerRecord) -> Result<FeatureVector, EncodingError> {
    let geography: Geography = record.geography.parse()?;
    let gender: Gender = record.gender.parse()?;

    let values: [f64; FEATURE_COUNT] = [
        record.credit_score as f64,
        record.age as f64,
        record.tenure as f64,
        record.balance,
        record.num_of_products as f64,
        one_hot(record.has_cr_card),
        one_hot(record.is_active_member),
        record.estimated_salary,
        one_hot(geography == Geography::France),
        one_hot(geography == Geography::Germany),
        one_hot(geography == Geography::Spain),
        one_hot(gender == Gender::Male),
        one_hot(gender == Gender::Female),
    ];
    Ok(FeatureVector::from_values(values))
}
