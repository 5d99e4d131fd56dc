// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::memory_store;
use fintrack::analytics::compute_budget_stats;
use fintrack::{cli, commands::budgets};
use rust_decimal::Decimal;

fn run(store: &mut fintrack::store::Store<rusqlite::Connection>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fintrack", "budget"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("budget", m)) = matches.subcommand() {
        budgets::handle(store, m)
    } else {
        panic!("no budget subcommand");
    }
}

#[test]
fn set_via_cli_replaces_existing_goal() {
    let mut store = memory_store();
    run(&mut store, &["set", "--category", "Housing", "--limit", "1000"]).unwrap();

    // handle refreshes after a successful write
    let state = store.state();
    let housing: Vec<_> = state
        .budgets
        .iter()
        .filter(|b| b.category == "Housing")
        .collect();
    assert_eq!(housing.len(), 1);
    assert_eq!(housing[0].limit, Decimal::from(1000));

    let stats = compute_budget_stats(&state.records, &state.budgets);
    let h = stats.iter().find(|s| s.category == "Housing").unwrap();
    assert_eq!(h.percentage, Decimal::from(100));
    assert!(h.is_over);
}

#[test]
fn set_rejects_income_category_and_bad_limit() {
    let mut store = memory_store();
    assert!(run(&mut store, &["set", "--category", "Salary", "--limit", "10"]).is_err());
    assert!(run(&mut store, &["set", "--category", "Health", "--limit", "ten"]).is_err());
    assert!(run(&mut store, &["set", "--category", "Health", "--limit=-5"]).is_err());
    assert_eq!(store.state().budgets.len(), 3);
}

#[test]
fn rm_missing_category_is_not_an_error() {
    let mut store = memory_store();
    run(&mut store, &["rm", "--category", "Education"]).unwrap();
    run(&mut store, &["rm", "--category", "Transportation"]).unwrap();
    let cats: Vec<&str> = store
        .state()
        .budgets
        .iter()
        .map(|b| b.category.as_str())
        .collect();
    assert_eq!(cats, vec!["Food & Dining", "Housing"]);
}
