// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{BudgetStat, compute_budget_stats};
use crate::db::BlobStore;
use crate::models::AppState;
use crate::store::Store;
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle<B: BlobStore>(store: &mut Store<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("list", sub)) => list(store.state(), sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set<B: BlobStore>(store: &mut Store<B>, sub: &clap::ArgMatches) -> Result<()> {
    let cat = sub.get_one::<String>("category").unwrap();
    let limit = parse_decimal(sub.get_one::<String>("limit").unwrap())?;
    let goal = store.upsert_budget(cat, limit)?;
    store.refresh()?;
    println!("Budget set for {} = {}", goal.category, fmt_money(&goal.limit));
    Ok(())
}

fn rm<B: BlobStore>(store: &mut Store<B>, sub: &clap::ArgMatches) -> Result<()> {
    let cat = sub.get_one::<String>("category").unwrap();
    if store.delete_budget(cat)? {
        store.refresh()?;
        println!("Removed budget for '{}'", cat);
    } else {
        println!("No budget for '{}'", cat);
    }
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let stats = compute_budget_stats(&state.records, &state.budgets);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stats)? {
        if stats.is_empty() {
            println!("No budgets set yet.");
            return Ok(());
        }
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

pub fn stat_rows(stats: &[BudgetStat]) -> Vec<Vec<String>> {
    stats
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                fmt_money(&s.limit),
                fmt_money(&s.actual),
                fmt_money(&s.remaining()),
                fmt_pct(&s.percentage),
                if s.is_over { "OVER" } else { "ok" }.to_string(),
            ]
        })
        .collect()
}
