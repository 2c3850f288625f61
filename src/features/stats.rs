//! Descriptive statistics of churned vs retained customers, in the familiar
//! `describe()` layout (count, mean, std, min, quartiles, max).

use crate::customers::{CustomerRecord, Dataset};
use serde::Serialize;
use std::fmt;

/// Numeric columns summarized for each subpopulation.
pub const STAT_COLUMNS: [&str; 8] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
];

fn column_value(record: &CustomerRecord, column: usize) -> f64 {
    match column {
        0 => record.credit_score as f64,
        1 => record.age as f64,
        2 => record.tenure as f64,
        3 => record.balance,
        4 => record.num_of_products as f64,
        5 => record.has_cr_card as u8 as f64,
        6 => record.is_active_member as u8 as f64,
        _ => record.estimated_salary,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: &'static str,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); NaN below two rows
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

/// Linear interpolation between closest ranks. `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl ColumnSummary {
    pub fn from_values(name: &'static str, mut values: Vec<f64>) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                name,
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                q50: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }
        values.sort_by(|a, b| a.total_cmp(b));
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        };
        Self {
            name,
            count,
            mean,
            std,
            min: values[0],
            q25: quantile(&values, 0.25),
            q50: quantile(&values, 0.5),
            q75: quantile(&values, 0.75),
            max: values[count - 1],
        }
    }

    fn row(&self, stat: usize) -> f64 {
        match stat {
            0 => self.count as f64,
            1 => self.mean,
            2 => self.std,
            3 => self.min,
            4 => self.q25,
            5 => self.q50,
            6 => self.q75,
            _ => self.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub columns: Vec<ColumnSummary>,
}

impl DescriptiveStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a CustomerRecord>) -> Self {
        let records: Vec<&CustomerRecord> = records.into_iter().collect();
        let columns = STAT_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values = records.iter().map(|r| column_value(r, i)).collect();
                ColumnSummary::from_values(*name, values)
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

const ROW_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl fmt::Display for DescriptiveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.columns.iter().map(|c| c.name.len().max(14)).collect();
        write!(f, "{:<6}", "")?;
        for (c, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", c.name, w = w)?;
        }
        for (stat, label) in ROW_LABELS.iter().enumerate() {
            write!(f, "\n{:<6}", label)?;
            for (c, w) in self.columns.iter().zip(&widths) {
                let v = c.row(stat);
                if v.is_nan() {
                    write!(f, "  {:>w$}", "NaN", w = w)?;
                } else {
                    write!(f, "  {:>w$.6}", v, w = w)?;
                }
            }
        }
        Ok(())
    }
}

/// Statistics for both outcome groups of the historical dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationStats {
    pub churned: DescriptiveStats,
    pub retained: DescriptiveStats,
}

impl PopulationStats {
    /// Recomputed from the full dataset on every call.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            churned: DescriptiveStats::from_records(dataset.with_outcome(true)),
            retained: DescriptiveStats::from_records(dataset.with_outcome(false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_interpolate_linearly() {
        let s = ColumnSummary::from_values("Age", vec![40.0, 10.0, 30.0, 20.0]);
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 25.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.q25, 17.5);
        assert_eq!(s.q50, 25.0);
        assert_eq!(s.q75, 32.5);
        assert_eq!(s.max, 40.0);
        assert!((s.std - 12.909944487358056).abs() < 1e-12);
    }

    #[test]
    fn degenerate_columns_are_nan() {
        let single = ColumnSummary::from_values("Age", vec![7.0]);
        assert_eq!(single.q75, 7.0);
        assert!(single.std.is_nan());
        let empty = ColumnSummary::from_values("Age", vec![]);
        assert_eq!(empty.count, 0);
        assert!(empty.mean.is_nan());
    }

    #[test]
    fn table_has_header_and_eight_rows() {
        let stats = DescriptiveStats::from_records(std::iter::empty());
        let text = stats.to_string();
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().next().unwrap().contains("EstimatedSalary"));
        assert!(text.contains("NaN"));
    }
}
