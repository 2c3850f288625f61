//! Customer records: the historical dataset and operator field edits.

mod dataset;
mod edit;

pub use dataset::{parse_selection, Dataset, HistoricalCustomer};
pub use edit::{Field, FieldEdit};

use crate::error::EncodingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Snapshot of one bank customer. Categorical fields are kept as text and
/// checked when the record is encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: u64,
    pub surname: String,
    pub credit_score: u32,
    pub geography: String,
    pub gender: String,
    pub age: u32,
    pub tenure: u32,
    pub balance: f64,
    pub num_of_products: u32,
    pub has_cr_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geography {
    France,
    Germany,
    Spain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Geography {
    pub const ALL: [Geography; 3] = [Geography::France, Geography::Germany, Geography::Spain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Geography::France => "France",
            Geography::Germany => "Germany",
            Geography::Spain => "Spain",
        }
    }
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Geography {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Geography::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| EncodingError::UnknownGeography {
                value: s.to_string(),
            })
    }
}

impl FromStr for Gender {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| EncodingError::UnknownGender {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CustomerRecord {
    /// Label used in the customer picker: `"{id} - {surname}"`.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.customer_id, self.surname)
    }
}
