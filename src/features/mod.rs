//! Model inputs: one-hot encoding of customer records, the fixed importance
//! table, and population statistics for the explanation prompt.

mod encoder;
mod importance;
mod stats;

pub use encoder::encode;
pub use importance::{FeatureImportance, FEATURE_IMPORTANCES};
pub use stats::{ColumnSummary, DescriptiveStats, PopulationStats, STAT_COLUMNS};

use serde::{Serialize, Serializer};
use std::fmt;

pub const FEATURE_COUNT: usize = 13;

/// Column order the classifiers were trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
    "Geography_France",
    "Geography_Germany",
    "Geography_Spain",
    "Gender_Male",
    "Gender_Female",
];

/// Features holding money amounts; everything else is integral.
const CONTINUOUS: [&str; 2] = ["Balance", "EstimatedSalary"];

/// Fixed-order, unscaled model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Tensor input for the ONNX graphs.
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|v| *v as f32).collect()
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if CONTINUOUS.contains(&name) {
                write!(f, "'{}': {:?}", name, value)?;
            } else {
                write!(f, "'{}': {}", name, value as i64)?;
            }
        }
        f.write_str("}")
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = s.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
