// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{day, expense, income, seed};
use fintrack::commands::doctor::find_issues;
use fintrack::models::BudgetGoal;
use rust_decimal::Decimal;

#[test]
fn seed_data_is_clean() {
    assert!(find_issues(&seed()).is_empty());
}

#[test]
fn reports_each_kind_of_issue() {
    let mut state = seed();
    let d = day(2025, 2, 2);
    state.records.push(expense("u1", 10, "Crypto", d));
    state.records.push(income("k1", 10, "Housing", d));
    state.records.push(expense("z1", 0, "Health", d));
    state.budgets.push(BudgetGoal {
        category: "Salary".into(),
        limit: Decimal::from(10),
    });
    state.budgets.push(BudgetGoal {
        category: "Health".into(),
        limit: Decimal::ZERO,
    });

    let kinds: Vec<String> = find_issues(&state).into_iter().map(|r| r[0].clone()).collect();
    assert_eq!(
        kinds,
        vec![
            "unknown_category",
            "kind_mismatch",
            "non_positive_amount",
            "budget_not_expense_category",
            "budget_non_positive_limit",
        ]
    );
}
