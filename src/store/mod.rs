// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Where ledger entries are kept. The analytics never touch a store; they
//! receive the resolved list.

pub mod demo;
pub mod local;
pub mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::analytics::trend::date_sort_key;
use crate::config::{AppConfig, Mode};
use crate::errors::{StoreError, StoreResult};
use crate::models::{LedgerEntry, amount_in_range};
use chrono::{SecondsFormat, Utc};
use rusqlite::Connection;
use std::cmp::Reverse;

pub trait EntryStore {
    /// All entries, newest date first.
    fn fetch(&self) -> StoreResult<Vec<LedgerEntry>>;
    /// Persist a new entry and return it with its final id.
    fn add(&self, entry: LedgerEntry) -> StoreResult<LedgerEntry>;
    fn update(&self, entry: &LedgerEntry) -> StoreResult<()>;
    fn delete(&self, id: &str) -> StoreResult<()>;
}

/// Store selected by the configured mode.
pub fn open<'c>(conn: &'c Connection, cfg: &AppConfig) -> StoreResult<Box<dyn EntryStore + 'c>> {
    match cfg.mode {
        Mode::Demo => Ok(Box::new(LocalStore::new(conn).seeded(true))),
        Mode::Live => Ok(Box::new(RemoteStore::new(&cfg.remote_url, &cfg.api_token)?)),
    }
}

/// Fill a missing id with a fresh UUID.
pub fn with_id(mut entry: LedgerEntry) -> LedgerEntry {
    if !entry.has_id() {
        entry.id = uuid::Uuid::new_v4().to_string();
    }
    entry
}

pub fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reject amounts beyond `MAX_AMOUNT` so aggregates keep their precision.
pub(crate) fn check_amount(entry: &LedgerEntry) -> StoreResult<()> {
    if !amount_in_range(&entry.amount) {
        return Err(StoreError::Amount(entry.amount.to_string()));
    }
    Ok(())
}

pub(crate) fn require_id(id: &str) -> StoreResult<()> {
    if id.trim().is_empty() {
        return Err(StoreError::MissingId);
    }
    Ok(())
}

/// Delete every entry that has an id; legacy rows are skipped. Returns the
/// number deleted.
pub fn delete_many(store: &dyn EntryStore, entries: &[LedgerEntry]) -> StoreResult<usize> {
    let mut deleted = 0;
    for e in entries.iter().filter(|e| e.has_id()) {
        store.delete(&e.id)?;
        deleted += 1;
    }
    let skipped = entries.len() - deleted;
    if skipped > 0 {
        tracing::warn!(skipped, "skipped entries without id");
    }
    Ok(deleted)
}

/// Newest first, the order the stores hand entries out in.
pub fn sort_newest_first(entries: &mut [LedgerEntry]) {
    entries.sort_by_cached_key(|e| {
        let (invalid, date) = date_sort_key(&e.date);
        (invalid, Reverse(date))
    });
}
