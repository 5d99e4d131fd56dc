// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use fintrack::db;
use fintrack::models::{AppState, Frequency, Record, RecordKind};
use fintrack::store::Store;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(id: &str, kind: RecordKind, amount: i64, category: &str, date: NaiveDate) -> Record {
    Record {
        id: id.to_string(),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        date,
        description: None,
        frequency: Frequency::Once,
    }
}

pub fn expense(id: &str, amount: i64, category: &str, date: NaiveDate) -> Record {
    record(id, RecordKind::Expense, amount, category, date)
}

pub fn income(id: &str, amount: i64, category: &str, date: NaiveDate) -> Record {
    record(id, RecordKind::Income, amount, category, date)
}

pub fn seed() -> AppState {
    AppState::seed(day(2025, 8, 10))
}

pub fn memory_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

pub fn memory_store() -> Store<Connection> {
    Store::with_seed(memory_conn(), seed()).unwrap()
}
