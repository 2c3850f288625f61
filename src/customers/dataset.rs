//! Historical customers loaded once at startup from CSV. Read-only afterwards.

use super::CustomerRecord;
use crate::error::DatasetError;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

/// A past customer and whether they churned (`Exited == 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalCustomer {
    pub record: CustomerRecord,
    pub exited: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Row {
    customer_id: u64,
    surname: String,
    credit_score: u32,
    geography: String,
    gender: String,
    age: u32,
    tenure: u32,
    balance: f64,
    num_of_products: u32,
    #[serde(deserialize_with = "flag")]
    has_cr_card: bool,
    #[serde(deserialize_with = "flag")]
    is_active_member: bool,
    estimated_salary: f64,
    #[serde(deserialize_with = "flag")]
    exited: bool,
}

/// Accepts `0`/`1` as written by the export, and `true`/`false`.
fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(d)?;
    match raw.trim() {
        "1" | "1.0" | "true" | "True" => Ok(true),
        "0" | "0.0" | "false" | "False" => Ok(false),
        other => Err(serde::de::Error::custom(format!("expected 0 or 1, got {:?}", other))),
    }
}

impl From<Row> for HistoricalCustomer {
    fn from(r: Row) -> Self {
        Self {
            record: CustomerRecord {
                customer_id: r.customer_id,
                surname: r.surname,
                credit_score: r.credit_score,
                geography: r.geography,
                gender: r.gender,
                age: r.age,
                tenure: r.tenure,
                balance: r.balance,
                num_of_products: r.num_of_products,
                has_cr_card: r.has_cr_card,
                is_active_member: r.is_active_member,
                estimated_salary: r.estimated_salary,
            },
            exited: r.exited,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    customers: Vec<HistoricalCustomer>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_csv_reader(reader)?;
        tracing::info!(path = %path.display(), customers = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Parse CSV with a header row. Extra columns (`RowNumber`, ...) are ignored.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, DatasetError> {
        Self::from_csv_reader(csv::Reader::from_reader(rdr))
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let mut customers = Vec::new();
        for (i, row) in reader.deserialize::<Row>().enumerate() {
            let row = row.map_err(|source| DatasetError::Row {
                // header is line 1
                row: i as u64 + 2,
                source,
            })?;
            customers.push(row.into());
        }
        Ok(Self { customers })
    }

    pub fn from_customers(customers: Vec<HistoricalCustomer>) -> Self {
        Self { customers }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn customers(&self) -> &[HistoricalCustomer] {
        &self.customers
    }

    /// Picker entries in file order.
    pub fn options(&self) -> Vec<String> {
        self.customers.iter().map(|c| c.record.option_label()).collect()
    }

    /// First customer with the given id.
    pub fn find(&self, customer_id: u64) -> Result<&CustomerRecord, DatasetError> {
        self.customers
            .iter()
            .map(|c| &c.record)
            .find(|r| r.customer_id == customer_id)
            .ok_or(DatasetError::CustomerNotFound { id: customer_id })
    }

    /// Customers whose outcome label matches `exited`.
    pub fn with_outcome(&self, exited: bool) -> impl Iterator<Item = &CustomerRecord> {
        self.customers
            .iter()
            .filter(move |c| c.exited == exited)
            .map(|c| &c.record)
    }
}

/// Accepts a picker label (`"15634602 - Hargrave"`) or a bare id.
pub fn parse_selection(input: &str) -> Result<u64, DatasetError> {
    let id = input.split(" - ").next().unwrap_or_default().trim();
    id.parse().map_err(|_| DatasetError::InvalidSelection {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
RowNumber,CustomerId,Surname,CreditScore,Geography,Gender,Age,Tenure,Balance,NumOfProducts,HasCrCard,IsActiveMember,EstimatedSalary,Exited
1,15634602,Hargrave,619,France,Female,42,2,0.0,1,1,1,101348.88,1
2,15647311,Hill,608,Spain,Female,41,1,83807.86,1,0,1,112542.58,0
";

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let ds = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
        let hill = ds.find(15647311).unwrap();
        assert_eq!(hill.surname, "Hill");
        assert!(!hill.has_cr_card);
        assert!(ds.customers()[0].exited);
    }

    #[test]
    fn bad_flag_reports_line_number() {
        let csv = CSV.replace("83807.86,1,0,1", "83807.86,1,maybe,1");
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Row { row: 3, .. }));
    }

    #[test]
    fn selection_accepts_label_or_id() {
        assert_eq!(parse_selection("15634602 - Hargrave").unwrap(), 15634602);
        assert_eq!(parse_selection(" 42 ").unwrap(), 42);
        assert!(parse_selection("Hargrave").is_err());
    }
}
