// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application state store.
//!
//! The persisted aggregate is read and written whole. Mutations go straight
//! to the backend; the in-memory snapshot only changes on [`Store::refresh`].

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::db::BlobStore;
use crate::models::{AppState, BudgetGoal, Record, RecordDraft, UserProfile};

pub const STATE_KEY: &str = "fintrack_data";

pub struct Store<B: BlobStore> {
    backend: B,
    seed: AppState,
    snapshot: AppState,
}

impl<B: BlobStore> Store<B> {
    /// Opens the store, seeding with today's sample data when nothing is persisted.
    pub fn open(backend: B) -> Result<Self> {
        let seed = AppState::seed(chrono::Local::now().date_naive());
        Self::with_seed(backend, seed)
    }

    pub fn with_seed(backend: B, seed: AppState) -> Result<Self> {
        let snapshot = load(&backend, &seed)?;
        Ok(Store {
            backend,
            seed,
            snapshot,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.snapshot
    }

    pub fn refresh(&mut self) -> Result<&AppState> {
        self.snapshot = load(&self.backend, &self.seed)?;
        Ok(&self.snapshot)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validates and prepends a new record; returns it with its fresh id.
    pub fn add_record(&self, draft: RecordDraft) -> Result<Record> {
        draft.validate()?;
        let record = draft.into_record(Uuid::new_v4().to_string());
        let mut data = self.read()?;
        data.records.insert(0, record.clone());
        self.write(&data)?;
        info!(id = %record.id, kind = %record.kind, amount = %record.amount, "record added");
        Ok(record)
    }

    /// Removes the record with `id`. Returns whether one was removed.
    pub fn delete_record(&self, id: &str) -> Result<bool> {
        let mut data = self.read()?;
        let before = data.records.len();
        data.records.retain(|r| r.id != id);
        if data.records.len() == before {
            debug!(id, "no record to delete");
            return Ok(false);
        }
        self.write(&data)?;
        info!(id, "record deleted");
        Ok(true)
    }

    /// Sets the limit for `category`, replacing any existing goal for it.
    pub fn upsert_budget(&self, category: &str, limit: Decimal) -> Result<BudgetGoal> {
        let goal = BudgetGoal {
            category: category.trim().to_string(),
            limit,
        };
        goal.validate()?;
        let mut data = self.read()?;
        data.budgets.retain(|b| b.category != goal.category);
        data.budgets.push(goal.clone());
        self.write(&data)?;
        info!(category = %goal.category, limit = %goal.limit, "budget set");
        Ok(goal)
    }

    pub fn delete_budget(&self, category: &str) -> Result<bool> {
        let mut data = self.read()?;
        let before = data.budgets.len();
        data.budgets.retain(|b| b.category != category);
        if data.budgets.len() == before {
            debug!(category, "no budget to delete");
            return Ok(false);
        }
        self.write(&data)?;
        info!(category, "budget deleted");
        Ok(true)
    }

    pub fn set_user(&self, user: UserProfile) -> Result<()> {
        let mut data = self.read()?;
        info!(email = %user.email, "user signed in");
        data.user = Some(user);
        self.write(&data)
    }

    pub fn clear_user(&self) -> Result<()> {
        let mut data = self.read()?;
        data.user = None;
        self.write(&data)?;
        info!("user signed out");
        Ok(())
    }

    /// Drops the persisted aggregate so the next read starts from the seed.
    pub fn reset(&self) -> Result<()> {
        self.backend.remove_blob(STATE_KEY)?;
        info!("state reset to seed data");
        Ok(())
    }

    fn read(&self) -> Result<AppState> {
        load(&self.backend, &self.seed)
    }

    fn write(&self, data: &AppState) -> Result<()> {
        let blob = serde_json::to_string(data).context("Serialize application state")?;
        debug!(bytes = blob.len(), "writing state");
        self.backend.put_blob(STATE_KEY, &blob)
    }
}

fn load<B: BlobStore>(backend: &B, seed: &AppState) -> Result<AppState> {
    match backend.get_blob(STATE_KEY)? {
        Some(blob) => {
            debug!(bytes = blob.len(), "reading state");
            serde_json::from_str(&blob)
                .with_context(|| format!("Corrupt state blob under key '{}'", STATE_KEY))
        }
        None => {
            debug!("no persisted state, using seed data");
            Ok(seed.clone())
        }
    }
}
