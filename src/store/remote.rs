// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spreadsheet-backed row store reached over plain HTTP.
//!
//! `GET <url>?token=..` answers with a JSON array of rows. Mutations are a
//! `POST` of `{action, entry, token}` sent as `text/plain`, which the
//! endpoint requires to skip a CORS preflight. Errors come back as
//! `{"error": ..}` or `{"status": "error", "message": ..}` with a 200.

use super::{EntryStore, check_amount, require_id, sort_newest_first, with_id};
use crate::analytics::trend::date_sort_key;
use crate::errors::{StoreError, StoreResult};
use crate::models::{LedgerEntry, amount_in_range};
use crate::utils::http_client;
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};

pub struct RemoteStore {
    client: Client,
    url: String,
    token: String,
}

#[derive(Serialize)]
struct Mutation<'a, E: Serialize> {
    action: &'a str,
    entry: E,
    token: &'a str,
}

impl RemoteStore {
    pub fn new(url: &str, token: &str) -> StoreResult<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StoreError::NotConfigured);
        }
        Ok(Self {
            client: http_client()?,
            url: url.to_string(),
            token: token.to_string(),
        })
    }

    fn post<E: Serialize>(&self, action: &str, entry: E) -> StoreResult<Option<String>> {
        let body = serde_json::to_string(&Mutation {
            action,
            entry,
            token: &self.token,
        })?;
        let text = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()?
            .error_for_status()?
            .text()?;
        tracing::debug!(action, "remote mutation sent");
        parse_mutation_body(&text)
    }
}

impl EntryStore for RemoteStore {
    fn fetch(&self) -> StoreResult<Vec<LedgerEntry>> {
        let bust = Utc::now().timestamp_millis().to_string();
        let text = self
            .client
            .get(&self.url)
            .query(&[("token", self.token.as_str()), ("t", bust.as_str())])
            .send()?
            .error_for_status()?
            .text()?;
        let mut entries = parse_fetch_body(&text)?;
        sort_newest_first(&mut entries);
        tracing::debug!(count = entries.len(), "fetched remote entries");
        Ok(entries)
    }

    fn add(&self, entry: LedgerEntry) -> StoreResult<LedgerEntry> {
        check_amount(&entry)?;
        let mut entry = with_id(entry);
        if let Some(id) = self.post("create", &entry)? {
            entry.id = id;
        }
        Ok(entry)
    }

    fn update(&self, entry: &LedgerEntry) -> StoreResult<()> {
        require_id(&entry.id)?;
        check_amount(entry)?;
        self.post("update", entry)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        require_id(id)?;
        self.post("delete", json!({ "id": id }))?;
        Ok(())
    }
}

fn remote_error(v: &Value) -> Option<String> {
    if let Some(err) = v.get("error").filter(|e| !e.is_null()) {
        return Some(value_text(err));
    }
    if v.get("status").and_then(Value::as_str) == Some("error") {
        return Some(
            v.get("message")
                .map(value_text)
                .unwrap_or_else(|| "unknown error".to_string()),
        );
    }
    None
}

fn value_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Spreadsheet cells holding dates arrive as timestamps; keep the day.
fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn parse_amount(v: &Value) -> StoreResult<Decimal> {
    let raw = match v {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        Value::Null => return Ok(Decimal::ZERO),
        other => other.to_string(),
    };
    // exponent form shows up for very small floats
    match raw
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&raw))
    {
        Ok(d) if amount_in_range(&d) => Ok(d),
        _ => Err(StoreError::Amount(raw)),
    }
}

fn parse_row(row: &Value) -> StoreResult<Option<LedgerEntry>> {
    let field = |k: &str| row.get(k).map(value_text).unwrap_or_default();
    let date = normalize_date(&field("date"));
    if date.is_empty() {
        return Ok(None);
    }
    if date_sort_key(&date).0 {
        tracing::warn!(%date, "remote row has an unparseable date");
    }
    let created_at = Some(field("createdAt")).filter(|s| !s.is_empty());
    Ok(Some(LedgerEntry {
        id: field("id"),
        date,
        description: field("description"),
        amount: parse_amount(row.get("amount").unwrap_or(&Value::Null))?,
        category: field("category"),
        created_at,
    }))
}

/// Decode the body of a fetch. Rows without a date are dropped, ids missing
/// on legacy rows become empty strings.
pub fn parse_fetch_body(text: &str) -> StoreResult<Vec<LedgerEntry>> {
    let v: Value = serde_json::from_str(text)?;
    if let Some(msg) = remote_error(&v) {
        return Err(StoreError::Remote(msg));
    }
    let Some(rows) = v.as_array() else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(e) = parse_row(row)? {
            out.push(e);
        }
    }
    Ok(out)
}

/// Decode the body of a mutation, returning the id the endpoint assigned if
/// it reported one. Bodies that are not JSON are accepted as success.
pub fn parse_mutation_body(text: &str) -> StoreResult<Option<String>> {
    let Ok(v) = serde_json::from_str::<Value>(text) else {
        tracing::debug!("non-JSON mutation response ignored");
        return Ok(None);
    };
    if let Some(msg) = remote_error(&v) {
        return Err(StoreError::Remote(msg));
    }
    Ok(v.get("id").map(value_text).filter(|s| !s.is_empty()))
}
