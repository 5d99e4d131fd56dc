// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{is_consistent, is_expense_category, kind_of};
use crate::models::AppState;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(state: &AppState) -> Result<()> {
    let rows = find_issues(state);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// One `[issue, detail]` row per problem. Read-only.
pub fn find_issues(state: &AppState) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for r in &state.records {
        match kind_of(&r.category) {
            None => rows.push(vec![
                "unknown_category".into(),
                format!("record {} uses '{}'", r.id, r.category),
            ]),
            Some(_) if !is_consistent(r.kind, &r.category) => rows.push(vec![
                "kind_mismatch".into(),
                format!("record {} is {} in '{}'", r.id, r.kind, r.category),
            ]),
            Some(_) => {}
        }
        if r.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("record {} has amount {}", r.id, r.amount),
            ]);
        }
    }

    for b in &state.budgets {
        if !is_expense_category(&b.category) {
            rows.push(vec!["budget_not_expense_category".into(), b.category.clone()]);
        }
        if b.limit <= Decimal::ZERO {
            rows.push(vec![
                "budget_non_positive_limit".into(),
                format!("{} = {}", b.category, b.limit),
            ]);
        }
    }
    rows
}
