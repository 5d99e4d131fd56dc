// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories;
use crate::errors::ValidationError;

/// Largest amount or budget limit accepted from a submission.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x38D7E, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "INCOME",
            RecordKind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(RecordKind::Income),
            "expense" => Ok(RecordKind::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid kind '{}', expected income|expense",
                other
            )),
        }
    }
}

/// Recurrence tag stored with a record. Descriptive only; nothing expands it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    #[default]
    Once,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Once => "ONCE",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl FromStr for Frequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(Frequency::Once),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(anyhow::anyhow!(
                "Invalid frequency '{}', expected once|weekly|monthly|yearly",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: RecordKind,
    #[serde(default, with = "lenient_amount")]
    pub amount: Decimal,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
}

impl Record {
    /// Amount as it enters any sum: non-positive values count as zero.
    pub fn counted_amount(&self) -> Decimal {
        if self.amount > Decimal::ZERO {
            self.amount
        } else {
            Decimal::ZERO
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }

    /// Display text: the description, or the category when there is none.
    pub fn label(&self) -> &str {
        match self.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => &self.category,
        }
    }
}

/// A submitted record before it has an id.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub kind: RecordKind,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub frequency: Frequency,
}

impl RecordDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(self.amount));
        }
        if !categories::is_consistent(self.kind, &self.category) {
            return Err(ValidationError::CategoryKindMismatch {
                category: self.category.clone(),
                kind: self.kind,
            });
        }
        Ok(())
    }

    pub fn into_record(self, id: String) -> Record {
        Record {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            frequency: self.frequency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGoal {
    pub category: String,
    #[serde(default, with = "lenient_amount")]
    pub limit: Decimal,
}

impl BudgetGoal {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if !categories::is_expense_category(&self.category) {
            return Err(ValidationError::NotAnExpenseCategory(self.category.clone()));
        }
        if self.limit <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.limit));
        }
        if self.limit > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(self.limit));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// The whole persisted aggregate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default, alias = "transactions")]
    pub records: Vec<Record>,
    #[serde(default)]
    pub budgets: Vec<BudgetGoal>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl AppState {
    /// Sample data used when nothing has been persisted yet.
    pub fn seed(today: NaiveDate) -> Self {
        let record = |id: &str, kind, amount: i64, category: &str, description: &str| Record {
            id: id.to_string(),
            kind,
            amount: Decimal::from(amount),
            category: category.to_string(),
            date: today,
            description: Some(description.to_string()),
            frequency: Frequency::Once,
        };
        let budget = |category: &str, limit: i64| BudgetGoal {
            category: category.to_string(),
            limit: Decimal::from(limit),
        };
        AppState {
            records: vec![
                record("1", RecordKind::Income, 5000, "Salary", "Monthly Salary"),
                record("2", RecordKind::Expense, 1200, "Housing", "Rent payment"),
                record("3", RecordKind::Expense, 150, "Food & Dining", "Groceries"),
            ],
            budgets: vec![
                budget("Food & Dining", 500),
                budget("Housing", 1500),
                budget("Transportation", 300),
            ],
            user: None,
        }
    }
}

/// Serde adapter for money values: written as JSON numbers, read leniently.
///
/// Missing, `null`, boolean or unparsable values read as zero; numeric
/// strings are parsed.
pub mod lenient_amount {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::{Number, Value};

    /// Writes the exact decimal text as a JSON number; whole values carry no fraction.
    pub fn serialize<S: Serializer>(v: &Decimal, s: S) -> Result<S::Ok, S::Error> {
        Number::from_str(&v.normalize().to_string())
            .map_err(serde::ser::Error::custom)?
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(coerce(&value))
    }

    pub fn coerce(value: &Value) -> Decimal {
        match value {
            Value::Number(n) => parse(&n.to_string()),
            Value::String(s) => parse(s.trim()),
            _ => Decimal::ZERO,
        }
    }

    fn parse(s: &str) -> Decimal {
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amounts_coerce_to_zero_when_not_numeric() {
        assert_eq!(lenient_amount::coerce(&json!("abc")), Decimal::ZERO);
        assert_eq!(lenient_amount::coerce(&json!(null)), Decimal::ZERO);
        assert_eq!(lenient_amount::coerce(&json!(true)), Decimal::ZERO);
        assert_eq!(lenient_amount::coerce(&json!(" 12.50 ")), Decimal::new(1250, 2));
        assert_eq!(lenient_amount::coerce(&json!(1e3)), Decimal::from(1000));
    }

    #[test]
    fn label_falls_back_to_category() {
        let mut r = AppState::seed(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).records[0].clone();
        assert_eq!(r.label(), "Monthly Salary");
        r.description = Some("  ".into());
        assert_eq!(r.label(), "Salary");
        r.description = None;
        assert_eq!(r.label(), "Salary");
    }

    #[test]
    fn long_fractions_serialize_without_loss() {
        let goal = BudgetGoal {
            category: "Housing".into(),
            limit: Decimal::from_str("1234567.123456789012").unwrap(),
        };
        let text = serde_json::to_string(&goal).unwrap();
        assert_eq!(text, r#"{"category":"Housing","limit":1234567.123456789012}"#);
        let back: BudgetGoal = serde_json::from_str(&text).unwrap();
        assert_eq!(back, goal);
    }

    #[test]
    fn whole_amounts_serialize_as_integers() {
        let goal = BudgetGoal {
            category: "Housing".into(),
            limit: Decimal::from(1500),
        };
        assert_eq!(
            serde_json::to_string(&goal).unwrap(),
            r#"{"category":"Housing","limit":1500}"#
        );
    }
}
