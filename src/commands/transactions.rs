// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{RecordFilter, filter_records};
use crate::db::BlobStore;
use crate::models::{AppState, Frequency, RecordDraft, RecordKind};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle<B: BlobStore>(store: &mut Store<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store.state(), sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds a draft from `tx add` arguments. Nothing is validated beyond parsing.
pub fn draft_from_args(sub: &clap::ArgMatches) -> Result<RecordDraft> {
    let kind: RecordKind = sub
        .get_one::<String>("kind")
        .map(String::as_str)
        .unwrap_or("expense")
        .parse()?;
    let amount = parse_decimal(required(sub, "amount")?)?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    let frequency: Frequency = sub
        .get_one::<String>("frequency")
        .map(String::as_str)
        .unwrap_or("once")
        .parse()?;
    Ok(RecordDraft {
        kind,
        amount,
        category: required(sub, "category")?.trim().to_string(),
        date,
        description: sub.get_one::<String>("description").cloned(),
        frequency,
    })
}

fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .ok_or_else(|| anyhow::anyhow!("Missing --{}", name))
}

fn add<B: BlobStore>(store: &mut Store<B>, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from_args(sub)?;
    let record = store.add_record(draft)?;
    store.refresh()?;
    println!(
        "Recorded {} {} ({}) on {} [id {}]",
        record.kind.as_str().to_lowercase(),
        fmt_money(&record.amount),
        record.category,
        record.date,
        record.id
    );
    Ok(())
}

fn rm<B: BlobStore>(store: &mut Store<B>, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    if store.delete_record(id)? {
        store.refresh()?;
        println!("Removed record '{}'", id);
    } else {
        println!("No record with id '{}'", id);
    }
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(state, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Kind", "Category", "Amount", "Description", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct RecordRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<RecordFilter> {
    let kind = match sub.get_one::<String>("kind") {
        Some(k) => Some(k.parse::<RecordKind>()?),
        None => None,
    };
    Ok(RecordFilter {
        search: sub.get_one::<String>("search").cloned(),
        kind,
        category: sub.get_one::<String>("category").cloned(),
        limit: sub.get_one::<usize>("limit").copied(),
    })
}

pub fn query_rows(state: &AppState, sub: &clap::ArgMatches) -> Result<Vec<RecordRow>> {
    let filter = filter_from_args(sub)?;
    Ok(filter_records(&state.records, &filter)
        .into_iter()
        .map(|r| RecordRow {
            id: r.id.clone(),
            date: r.date.to_string(),
            kind: r.kind.to_string(),
            category: r.category.clone(),
            amount: fmt_money(&r.amount),
            description: r.label().to_string(),
        })
        .collect())
}
