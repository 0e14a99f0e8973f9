// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::filter_entries;
use crate::config::AppConfig;
use crate::errors::StoreError;
use crate::models::LedgerEntry;
use crate::store::{EntryStore, delete_many};
use crate::utils::{
    arg, criteria_from, fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::{Context, Result};

pub fn handle(store: &dyn EntryStore, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("list", sub)) => list(store, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(arg(sub, "date")?)?;
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let description = arg(sub, "description")?.trim();
    let category = sub.get_one::<String>("category").map(|s| s.trim()).unwrap_or("");

    let mut entry = LedgerEntry::new(&date.to_string(), description, amount, category);
    if let Some(id) = sub.get_one::<String>("id") {
        entry.id = id.trim().to_string();
    }
    let saved = store.add(entry).context("Error saving entry")?;
    tracing::info!(id = %saved.id, "entry added");
    println!(
        "Recorded {} on {} '{}' (id {})",
        saved.amount, saved.date, saved.description, saved.id
    );
    Ok(())
}

fn edit(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = arg(sub, "id")?.trim();
    let mut entry = store
        .fetch()?
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

    if let Some(d) = sub.get_one::<String>("date") {
        entry.date = parse_date(d)?.to_string();
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        entry.amount = parse_decimal(a)?;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        entry.description = d.trim().to_string();
    }
    if let Some(c) = sub.get_one::<String>("category") {
        entry.category = c.trim().to_string();
    }
    store.update(&entry).context("Error saving entry")?;
    println!("Updated entry {}", entry.id);
    Ok(())
}

fn remove(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("filtered") {
        let criteria = criteria_from(sub)?;
        let all = store.fetch()?;
        let doomed: Vec<LedgerEntry> = filter_entries(&all, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let n = delete_many(store, &doomed).context("Error during bulk delete")?;
        println!("Deleted {} of {} entries", n, doomed.len());
        return Ok(());
    }
    let ids: Vec<&String> = sub
        .get_many::<String>("ids")
        .map(|v| v.collect())
        .unwrap_or_default();
    for id in ids {
        store
            .delete(id)
            .with_context(|| format!("Error deleting entry {}", id))?;
        println!("Deleted entry {}", id);
    }
    Ok(())
}

fn list(store: &dyn EntryStore, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.date.clone(),
                    e.description.clone(),
                    e.category_or_default().to_string(),
                    fmt_money(&e.amount, &cfg.currency, &cfg.locale),
                    e.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Amount", "ID"], rows)
        );
    }
    Ok(())
}

/// Filtered entries, newest first, cut to `--limit`.
pub fn query_rows(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<Vec<LedgerEntry>> {
    let criteria = criteria_from(sub)?;
    let all = store.fetch()?;
    let mut rows: Vec<LedgerEntry> = filter_entries(&all, &criteria)
        .into_iter()
        .cloned()
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}
