// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::filter_entries;
use crate::store::EntryStore;
use crate::utils::{arg, criteria_from};
use anyhow::{Context, Result, anyhow};
use csv::{QuoteStyle, WriterBuilder};

pub fn handle(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = arg(sub, "format")?.to_lowercase();
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.trim().to_string(),
        None => format!(
            "ledger_export_{}.{}",
            chrono::Local::now().date_naive().format("%Y-%m-%d"),
            fmt
        ),
    };

    let criteria = criteria_from(sub)?;
    let all = store.fetch()?;
    let rows = filter_entries(&all, &criteria);
    if rows.is_empty() {
        return Err(anyhow!("No entries to export"));
    }

    match fmt.as_str() {
        "csv" => {
            let mut wtr = WriterBuilder::new()
                .quote_style(QuoteStyle::NonNumeric)
                .from_path(&out)
                .with_context(|| format!("Create {}", out))?;
            wtr.write_record(["ID", "Date", "Description", "Category", "Amount", "Created At"])?;
            for e in &rows {
                wtr.write_record([
                    e.id.as_str(),
                    e.date.as_str(),
                    e.description.as_str(),
                    e.category.as_str(),
                    e.amount.to_string().as_str(),
                    e.created_at.as_deref().unwrap_or(""),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(&out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    tracing::info!(count = rows.len(), path = %out, "exported entries");
    println!("Exported {} entries to {}", rows.len(), out);
    Ok(())
}
