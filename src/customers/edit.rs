//! Operator edits to a selected customer, bounded the same way as the input form.

use super::CustomerRecord;
use crate::error::RecordError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CreditScore,
    Geography,
    Gender,
    Age,
    Tenure,
    Balance,
    NumOfProducts,
    HasCrCard,
    IsActiveMember,
    EstimatedSalary,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::CreditScore,
        Field::Geography,
        Field::Gender,
        Field::Age,
        Field::Tenure,
        Field::Balance,
        Field::NumOfProducts,
        Field::HasCrCard,
        Field::IsActiveMember,
        Field::EstimatedSalary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::CreditScore => "CreditScore",
            Field::Geography => "Geography",
            Field::Gender => "Gender",
            Field::Age => "Age",
            Field::Tenure => "Tenure",
            Field::Balance => "Balance",
            Field::NumOfProducts => "NumOfProducts",
            Field::HasCrCard => "HasCrCard",
            Field::IsActiveMember => "IsActiveMember",
            Field::EstimatedSalary => "EstimatedSalary",
        }
    }

    /// Inclusive numeric bounds as `(min, max)`; money fields have no maximum.
    /// `None` for text and boolean fields.
    pub fn bounds(&self) -> Option<(f64, Option<f64>)> {
        match self {
            Field::CreditScore => Some((300.0, Some(850.0))),
            Field::Age => Some((18.0, Some(100.0))),
            Field::Tenure => Some((0.0, Some(50.0))),
            Field::NumOfProducts => Some((1.0, Some(10.0))),
            Field::Balance | Field::EstimatedSalary => Some((0.0, None)),
            _ => None,
        }
    }
}

impl FromStr for Field {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RecordError::UnknownField {
                field: s.to_string(),
            })
    }
}

/// One `Field=value` change.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub field: Field,
    pub value: String,
}

impl FieldEdit {
    pub fn parse(input: &str) -> Result<Self, RecordError> {
        let (field, value) = input
            .split_once('=')
            .ok_or_else(|| RecordError::MalformedEdit {
                input: input.to_string(),
            })?;
        Ok(Self {
            field: field.trim().parse()?,
            value: value.trim().to_string(),
        })
    }

    fn number(&self) -> Result<f64, RecordError> {
        let value: f64 = self.value.parse().map_err(|_| self.invalid())?;
        if !value.is_finite() {
            return Err(self.invalid());
        }
        let field = self.field.name();
        match self.field.bounds() {
            Some((min, Some(max))) if value < min || value > max => {
                return Err(RecordError::OutOfBounds {
                    field,
                    value,
                    min,
                    max,
                });
            }
            Some((min, None)) if value < min => {
                return Err(RecordError::BelowMinimum { field, value, min });
            }
            _ => {}
        }
        Ok(value)
    }

    fn whole(&self) -> Result<u32, RecordError> {
        let value = self.number()?;
        if value.fract() != 0.0 {
            return Err(self.invalid());
        }
        Ok(value as u32)
    }

    fn flag(&self) -> Result<bool, RecordError> {
        match self.value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(self.invalid()),
        }
    }

    fn invalid(&self) -> RecordError {
        RecordError::InvalidValue {
            field: self.field.name(),
            value: self.value.clone(),
        }
    }
}

impl CustomerRecord {
    /// Returns an edited copy. Geography and gender are stored verbatim; the
    /// encoder rejects values outside the known categories.
    pub fn apply(&self, edit: &FieldEdit) -> Result<CustomerRecord, RecordError> {
        let mut next = self.clone();
        match edit.field {
            Field::CreditScore => next.credit_score = edit.whole()?,
            Field::Geography => next.geography = edit.value.clone(),
            Field::Gender => next.gender = edit.value.clone(),
            Field::Age => next.age = edit.whole()?,
            Field::Tenure => next.tenure = edit.whole()?,
            Field::Balance => next.balance = edit.number()?,
            Field::NumOfProducts => next.num_of_products = edit.whole()?,
            Field::HasCrCard => next.has_cr_card = edit.flag()?,
            Field::IsActiveMember => next.is_active_member = edit.flag()?,
            Field::EstimatedSalary => next.estimated_salary = edit.number()?,
        }
        Ok(next)
    }

    pub fn apply_all<'a>(
        &self,
        edits: impl IntoIterator<Item = &'a FieldEdit>,
    ) -> Result<CustomerRecord, RecordError> {
        edits
            .into_iter()
            .try_fold(self.clone(), |record, edit| record.apply(edit))
    }
}
