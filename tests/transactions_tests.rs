// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{day, expense, income, memory_store};
use fintrack::models::{AppState, Frequency, RecordKind};
use fintrack::{cli, commands::transactions};
use rust_decimal::Decimal;

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["fintrack", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => tx_m.clone(),
        _ => panic!("no tx subcommand"),
    }
}

fn leaf(m: &clap::ArgMatches) -> &clap::ArgMatches {
    m.subcommand().map(|(_, sub)| sub).expect("leaf subcommand")
}

fn state() -> AppState {
    let mut note = expense("3", 12, "Food & Dining", day(2025, 1, 3));
    note.description = Some("Lunch with team".into());
    AppState {
        records: vec![
            note,
            income("2", 2500, "Freelance", day(2025, 1, 2)),
            expense("1", 40, "Transportation", day(2025, 1, 1)),
        ],
        budgets: vec![],
        user: None,
    }
}

#[test]
fn list_limit_respected() {
    let m = sub_matches(&["list", "--limit", "2"]);
    let rows = transactions::query_rows(&state(), leaf(&m)).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_filters_and_labels() {
    let m = sub_matches(&["list", "--kind", "expense", "--search", "TEAM"]);
    let rows = transactions::query_rows(&state(), leaf(&m)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Lunch with team");
    assert_eq!(rows[0].amount, "12.00");

    let m = sub_matches(&["list", "--category", "Transportation"]);
    let rows = transactions::query_rows(&state(), leaf(&m)).unwrap();
    assert_eq!(rows.len(), 1);
    // No description: the category stands in
    assert_eq!(rows[0].description, "Transportation");
}

#[test]
fn list_rejects_unknown_kind() {
    let m = sub_matches(&["list", "--kind", "transfer"]);
    assert!(transactions::query_rows(&state(), leaf(&m)).is_err());
}

#[test]
fn draft_parses_arguments() {
    let m = sub_matches(&[
        "add",
        "--kind",
        "income",
        "--amount",
        "1250.75",
        "--category",
        "Bonus",
        "--date",
        "2025-03-31",
        "--frequency",
        "yearly",
    ]);
    let d = transactions::draft_from_args(leaf(&m)).unwrap();
    assert_eq!(d.kind, RecordKind::Income);
    assert_eq!(d.amount, Decimal::new(125075, 2));
    assert_eq!(d.date, day(2025, 3, 31));
    assert_eq!(d.frequency, Frequency::Yearly);
    assert!(d.description.is_none());
}

#[test]
fn draft_rejects_non_numeric_amount_and_bad_date() {
    let m = sub_matches(&["add", "--amount", "lots", "--category", "Health"]);
    assert!(transactions::draft_from_args(leaf(&m)).is_err());
    let m = sub_matches(&["add", "--amount", "5", "--category", "Health", "--date", "31/03/2025"]);
    assert!(transactions::draft_from_args(leaf(&m)).is_err());
}

#[test]
fn add_and_rm_through_handler() {
    let mut store = memory_store();
    let m = sub_matches(&[
        "add",
        "--amount",
        "60",
        "--category",
        "Entertainment",
        "--date",
        "2025-08-11",
        "--description",
        "Concert",
    ]);
    transactions::handle(&mut store, &m).unwrap();
    let added = store.state().records[0].clone();
    assert_eq!(added.category, "Entertainment");
    assert_eq!(added.kind, RecordKind::Expense);
    assert_eq!(store.state().records.len(), 4);

    let m = sub_matches(&["rm", added.id.as_str()]);
    transactions::handle(&mut store, &m).unwrap();
    assert_eq!(store.state().records.len(), 3);

    // Second delete is a no-op
    transactions::handle(&mut store, &m).unwrap();
    assert_eq!(store.state().records.len(), 3);
}

#[test]
fn add_with_mismatched_category_is_rejected() {
    let mut store = memory_store();
    let m = sub_matches(&["add", "--kind", "income", "--amount", "10", "--category", "Housing"]);
    assert!(transactions::handle(&mut store, &m).is_err());
    assert_eq!(store.refresh().unwrap().records.len(), 3);
}
