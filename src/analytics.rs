// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the record and budget collections.
//!
//! Every function here is pure: it borrows the collections, never mutates
//! them, and is recomputed from scratch on each read.

use std::cmp::Reverse;
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AppState, BudgetGoal, Record, RecordKind};

pub const DEFAULT_TREND_WINDOW: usize = 20;
pub const LEGEND_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    pub fn balance(&self) -> Decimal {
        self.income.saturating_sub(self.expense)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBucket {
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStat {
    pub category: String,
    pub limit: Decimal,
    pub actual: Decimal,
    /// Percent of the limit consumed, capped at 100.
    pub percentage: Decimal,
    /// Compared on the uncapped values.
    pub is_over: bool,
}

impl BudgetStat {
    pub fn remaining(&self) -> Decimal {
        self.limit.saturating_sub(self.actual)
    }
}

pub fn compute_totals(records: &[Record]) -> Totals {
    records.iter().fold(Totals::default(), |mut acc, r| {
        let slot = match r.kind {
            RecordKind::Income => &mut acc.income,
            RecordKind::Expense => &mut acc.expense,
        };
        *slot = slot.saturating_add(r.counted_amount());
        acc
    })
}

/// Expense totals per category, largest first. Ties keep first-seen order.
pub fn compute_category_distribution(records: &[Record]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for r in records.iter().filter(|r| r.is_expense()) {
        let slot = *index.entry(r.category.as_str()).or_insert_with(|| {
            groups.push(CategoryTotal {
                category: r.category.clone(),
                total: Decimal::ZERO,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.total = group.total.saturating_add(r.counted_amount());
    }
    groups.sort_by_key(|g| Reverse(g.total));
    groups
}

pub fn top_categories(records: &[Record], n: usize) -> Vec<CategoryTotal> {
    let mut all = compute_category_distribution(records);
    all.truncate(n);
    all
}

/// Income and expense per month over the last `window_size` records by date.
///
/// The window counts records, not calendar months, so a month at the edge of
/// the window may be partial. Buckets are keyed by short month name only:
/// the same month in different years lands in one bucket.
pub fn compute_monthly_trend(records: &[Record], window_size: usize) -> Vec<TrendBucket> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);
    let start = sorted.len().saturating_sub(window_size);

    let mut buckets: Vec<TrendBucket> = Vec::new();
    for r in &sorted[start..] {
        let label = month_label(r);
        let pos = match buckets.iter().position(|b| b.label == label) {
            Some(pos) => pos,
            None => {
                buckets.push(TrendBucket {
                    label,
                    income: Decimal::ZERO,
                    expense: Decimal::ZERO,
                });
                buckets.len() - 1
            }
        };
        let bucket = &mut buckets[pos];
        let slot = match r.kind {
            RecordKind::Income => &mut bucket.income,
            RecordKind::Expense => &mut bucket.expense,
        };
        *slot = slot.saturating_add(r.counted_amount());
    }
    buckets
}

fn month_label(r: &Record) -> String {
    r.date.format("%b").to_string()
}

pub fn compute_budget_stats(records: &[Record], budgets: &[BudgetGoal]) -> Vec<BudgetStat> {
    budgets
        .iter()
        .map(|b| {
            let actual: Decimal = records
                .iter()
                .filter(|r| r.is_expense() && r.category == b.category)
                .map(Record::counted_amount)
                .fold(Decimal::ZERO, Decimal::saturating_add);
            let (percentage, is_over) = consumption(actual, b.limit);
            BudgetStat {
                category: b.category.clone(),
                limit: b.limit,
                actual,
                percentage,
                is_over,
            }
        })
        .collect()
}

fn consumption(actual: Decimal, limit: Decimal) -> (Decimal, bool) {
    let hundred = Decimal::ONE_HUNDRED;
    if limit <= Decimal::ZERO {
        let over = actual > Decimal::ZERO;
        return (if over { hundred } else { Decimal::ZERO }, over);
    }
    // Unrepresentable quotients read as full
    let pct = percent_of(actual, limit).map_or(hundred, |p| p.min(hundred));
    (pct, actual > limit)
}

/// `part / whole * 100`, or `None` when the result does not fit a `Decimal`.
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)
        .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
}

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub search: Option<String>,
    pub kind: Option<RecordKind>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

impl RecordFilter {
    pub fn matches(&self, r: &Record) -> bool {
        let search_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                r.description
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&term)
                    || r.category.to_lowercase().contains(&term)
            }
        };
        let kind_ok = self.kind.is_none_or(|k| k == r.kind);
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| c == r.category);
        search_ok && kind_ok && category_ok
    }
}

/// Records matching `filter`, in collection order.
pub fn filter_records<'a>(records: &'a [Record], filter: &RecordFilter) -> Vec<&'a Record> {
    let matched = records.iter().filter(|r| filter.matches(r));
    match filter.limit {
        Some(n) => matched.take(n).collect(),
        None => matched.collect(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub totals: Totals,
    pub balance: Decimal,
    pub distribution: Vec<CategoryTotal>,
    pub legend: Vec<CategoryTotal>,
    pub trend: Vec<TrendBucket>,
    pub budgets: Vec<BudgetStat>,
}

pub fn dashboard(state: &AppState) -> Dashboard {
    let totals = compute_totals(&state.records);
    let distribution = compute_category_distribution(&state.records);
    let legend = distribution.iter().take(LEGEND_SIZE).cloned().collect();
    Dashboard {
        totals,
        balance: totals.balance(),
        distribution,
        legend,
        trend: compute_monthly_trend(&state.records, DEFAULT_TREND_WINDOW),
        budgets: compute_budget_stats(&state.records, &state.budgets),
    }
}
