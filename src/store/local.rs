// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{EntryStore, check_amount, demo, now_stamp, require_id, sort_newest_first, with_id};
use crate::errors::{StoreError, StoreResult};
use crate::models::LedgerEntry;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

/// Entries in the local SQLite database.
pub struct LocalStore<'c> {
    conn: &'c Connection,
    seed: bool,
}

impl<'c> LocalStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn, seed: false }
    }

    /// Seed the sample month the first time an empty table is read.
    pub fn seeded(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    fn count(&self) -> StoreResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))?)
    }

    fn insert(&self, e: &LedgerEntry) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO entries(id, date, description, amount, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                e.id,
                e.date,
                e.description,
                e.amount.to_string(),
                e.category,
                e.created_at
            ],
        )?;
        Ok(())
    }

    fn seed_if_empty(&self) -> StoreResult<()> {
        if !self.seed || self.count()? > 0 {
            return Ok(());
        }
        let today = chrono::Local::now().date_naive();
        let stamp = now_stamp();
        for e in demo::sample_entries(today, &stamp) {
            self.insert(&e)?;
        }
        tracing::info!("seeded local store with sample entries");
        Ok(())
    }
}

impl EntryStore for LocalStore<'_> {
    fn fetch(&self) -> StoreResult<Vec<LedgerEntry>> {
        self.seed_if_empty()?;
        let mut stmt = self.conn.prepare(
            "SELECT id, date, description, amount, category, created_at FROM entries ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, Option<String>>(5)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, date, description, amount_raw, category, created_at) = row?;
            let amount = amount_raw
                .parse::<Decimal>()
                .map_err(|_| StoreError::Amount(amount_raw.clone()))?;
            let entry = LedgerEntry {
                id,
                date,
                description,
                amount,
                category,
                created_at,
            };
            check_amount(&entry)?;
            out.push(entry);
        }
        sort_newest_first(&mut out);
        tracing::debug!(count = out.len(), "fetched local entries");
        Ok(out)
    }

    fn add(&self, entry: LedgerEntry) -> StoreResult<LedgerEntry> {
        check_amount(&entry)?;
        let mut entry = with_id(entry);
        entry.created_at = Some(now_stamp());
        self.insert(&entry)?;
        tracing::debug!(id = %entry.id, "added local entry");
        Ok(entry)
    }

    fn update(&self, entry: &LedgerEntry) -> StoreResult<()> {
        require_id(&entry.id)?;
        check_amount(entry)?;
        let n = self.conn.execute(
            "UPDATE entries SET date=?2, description=?3, amount=?4, category=?5 WHERE id=?1",
            params![
                entry.id,
                entry.date,
                entry.description,
                entry.amount.to_string(),
                entry.category
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound(entry.id.clone()));
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        require_id(id)?;
        let n = self
            .conn
            .execute("DELETE FROM entries WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
