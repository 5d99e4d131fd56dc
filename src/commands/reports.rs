// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    self, CategoryTotal, DEFAULT_TREND_WINDOW, TrendBucket, compute_budget_stats,
    compute_category_distribution, compute_monthly_trend, compute_totals, percent_of,
};
use crate::commands::budgets::stat_rows;
use crate::models::AppState;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(state, sub)?,
        Some(("categories", sub)) => categories(state, sub)?,
        Some(("trend", sub)) => trend(state, sub)?,
        Some(("budgets", sub)) => budgets(state, sub)?,
        Some(("dashboard", sub)) => dashboard(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn flags(sub: &clap::ArgMatches) -> (bool, bool) {
    (sub.get_flag("json"), sub.get_flag("jsonl"))
}

fn summary(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = flags(sub);
    let totals = compute_totals(&state.records);
    let v = json!({
        "income": totals.income,
        "expense": totals.expense,
        "balance": totals.balance(),
    });
    if !maybe_print_json(json_flag, jsonl_flag, &v)? {
        println!(
            "{}",
            pretty_table(
                &["Balance", "Income", "Expense"],
                vec![vec![
                    fmt_money(&totals.balance()),
                    fmt_money(&totals.income),
                    fmt_money(&totals.expense),
                ]],
            )
        );
    }
    Ok(())
}

/// Distribution rows with each category's share of total expense.
pub fn share_rows(items: &[CategoryTotal], expense: Decimal) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|c| {
            let share = if expense > Decimal::ZERO {
                percent_of(c.total, expense).unwrap_or(Decimal::ONE_HUNDRED)
            } else {
                Decimal::ZERO
            };
            vec![
                c.category.clone(),
                fmt_money(&c.total),
                format!("{:.1}%", share),
            ]
        })
        .collect()
}

fn categories(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = flags(sub);
    let mut items = compute_category_distribution(&state.records);
    if let Some(n) = sub.get_one::<usize>("top") {
        items.truncate(*n);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let expense = compute_totals(&state.records).expense;
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Share"], share_rows(&items, expense))
        );
    }
    Ok(())
}

fn trend_rows(buckets: &[TrendBucket]) -> Vec<Vec<String>> {
    buckets
        .iter()
        .map(|b| {
            vec![
                b.label.clone(),
                fmt_money(&b.income),
                fmt_money(&b.expense),
            ]
        })
        .collect()
}

fn trend(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = flags(sub);
    let window = sub
        .get_one::<usize>("window")
        .copied()
        .unwrap_or(DEFAULT_TREND_WINDOW);
    let buckets = compute_monthly_trend(&state.records, window);
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense"], trend_rows(&buckets))
        );
    }
    Ok(())
}

fn budgets(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = flags(sub);
    let stats = compute_budget_stats(&state.records, &state.budgets);
    if !maybe_print_json(json_flag, jsonl_flag, &stats)? {
        println!(
            "{}",
            pretty_table(
                &["Category", "Limit", "Spent", "Left", "Used", "Status"],
                stat_rows(&stats),
            )
        );
    }
    Ok(())
}

fn dashboard(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = flags(sub);
    let d = analytics::dashboard(state);
    if maybe_print_json(json_flag, jsonl_flag, &d)? {
        return Ok(());
    }
    if let Some(user) = &state.user {
        println!("Welcome, {}!", crate::auth::first_name(user));
    }
    println!(
        "{}",
        pretty_table(
            &["Current Balance", "Total Earnings", "Total Spending"],
            vec![vec![
                fmt_money(&d.balance),
                fmt_money(&d.totals.income),
                fmt_money(&d.totals.expense),
            ]],
        )
    );
    println!("Cash flow trend");
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expense"], trend_rows(&d.trend))
    );
    println!("Top categories");
    println!(
        "{}",
        pretty_table(
            &["Category", "Spent", "Share"],
            share_rows(&d.legend, d.totals.expense)
        )
    );
    println!("Goals & budgets");
    if d.budgets.is_empty() {
        println!("No budgets set yet.");
    } else {
        println!(
            "{}",
            pretty_table(
                &["Category", "Limit", "Spent", "Left", "Used", "Status"],
                stat_rows(&d.budgets),
            )
        );
    }
    Ok(())
}
