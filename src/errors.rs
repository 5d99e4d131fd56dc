// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::RecordKind;

/// Rejections raised before a submission touches persisted state.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("Amount {0} exceeds the maximum of {max}", max = crate::models::MAX_AMOUNT)]
    AmountTooLarge(Decimal),
    #[error("Category '{category}' is not a {kind} category")]
    CategoryKindMismatch { category: String, kind: RecordKind },
    #[error("Budgets can only be set on expense categories, got '{0}'")]
    NotAnExpenseCategory(String),
    #[error("Invalid email '{0}'")]
    InvalidEmail(String),
}
