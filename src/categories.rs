// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::RecordKind;

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Housing",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Shopping",
    "Health",
    "Education",
    "Miscellaneous",
];

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Bonus",
    "Freelance",
    "Investment",
    "Gift",
    "Other",
];

/// Expense categories followed by income categories.
pub fn all_categories() -> impl Iterator<Item = &'static str> {
    EXPENSE_CATEGORIES
        .iter()
        .chain(INCOME_CATEGORIES.iter())
        .copied()
}

pub fn categories_for(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Income => INCOME_CATEGORIES,
        RecordKind::Expense => EXPENSE_CATEGORIES,
    }
}

pub fn is_expense_category(name: &str) -> bool {
    EXPENSE_CATEGORIES.contains(&name)
}

/// The kind whose list contains `name`, if any.
pub fn kind_of(name: &str) -> Option<RecordKind> {
    if EXPENSE_CATEGORIES.contains(&name) {
        Some(RecordKind::Expense)
    } else if INCOME_CATEGORIES.contains(&name) {
        Some(RecordKind::Income)
    } else {
        None
    }
}

pub fn is_consistent(kind: RecordKind, name: &str) -> bool {
    categories_for(kind).contains(&name)
}
