// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ChartDataPoint, LedgerEntry};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Sort key for an entry date. Unparseable dates order after every valid one.
pub fn date_sort_key(date: &str) -> (bool, Option<NaiveDate>) {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok();
    (parsed.is_none(), parsed)
}

/// Cumulative running balance per distinct date, oldest first.
///
/// The accumulator starts at zero for the given slice: this is the movement
/// of the current view, not the account's absolute balance, because entries
/// excluded by a filter are never carried in. Same-day entries collapse into
/// one point holding the balance after the last of them. The running
/// balance saturates at the bounds of `Decimal`.
pub fn daily_trend<'a, I>(entries: I) -> Vec<ChartDataPoint>
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let mut sorted: Vec<&LedgerEntry> = entries.into_iter().collect();
    if sorted.is_empty() {
        return Vec::new();
    }
    // stable: same-date entries keep input order
    sorted.sort_by_cached_key(|e| date_sort_key(&e.date));

    let mut points: Vec<ChartDataPoint> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut running = Decimal::ZERO;
    for e in sorted {
        running = running.saturating_add(e.amount);
        match slot.get(e.date.as_str()) {
            Some(&i) => points[i].val = running,
            None => {
                slot.insert(e.date.as_str(), points.len());
                points.push(ChartDataPoint {
                    date: e.date.clone(),
                    val: running,
                });
            }
        }
    }
    points
}
