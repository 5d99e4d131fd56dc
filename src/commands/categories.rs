// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, categories_for};
use crate::models::RecordKind;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let data = match sub.get_one::<String>("kind") {
            Some(k) => {
                let kind: RecordKind = k.parse()?;
                categories_for(kind)
                    .iter()
                    .map(|c| vec![c.to_string(), kind.to_string()])
                    .collect()
            }
            None => list_all(),
        };
        println!("{}", pretty_table(&["Category", "Kind"], data));
    }
    Ok(())
}

fn list_all() -> Vec<Vec<String>> {
    let expense = EXPENSE_CATEGORIES
        .iter()
        .map(|c| vec![c.to_string(), RecordKind::Expense.to_string()]);
    let income = INCOME_CATEGORIES
        .iter()
        .map(|c| vec![c.to_string(), RecordKind::Income.to_string()]);
    expense.chain(income).collect()
}
