// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AppState, Record};
use anyhow::{Result, bail};

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("records", sub)) => export_records(state, sub),
        _ => Ok(()),
    }
}

fn export_records(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut rows: Vec<&Record> = state.records.iter().collect();
    rows.sort_by_key(|r| r.date);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "kind",
                "category",
                "amount",
                "description",
                "frequency",
            ])?;
            for r in rows {
                let date = r.date.to_string();
                let amount = r.amount.to_string();
                wtr.write_record([
                    r.id.as_str(),
                    date.as_str(),
                    r.kind.as_str(),
                    r.category.as_str(),
                    amount.as_str(),
                    r.description.as_deref().unwrap_or_default(),
                    r.frequency.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        // Same shape and number encoding as the persisted records
        "json" => std::fs::write(out, serde_json::to_string_pretty(&rows)?)?,
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    tracing::info!(out = %out, format = %fmt, "records exported");
    println!("Exported records to {}", out);
    Ok(())
}
