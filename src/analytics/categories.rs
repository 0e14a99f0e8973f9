// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryDataPoint, LedgerEntry};
use rust_decimal::Decimal;
use std::collections::HashMap;

pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Expense magnitude per category with its share of total expense, largest
/// first. Income and zero entries are ignored.
///
/// Equal totals keep the order in which their categories were first seen.
/// Totals saturate at `Decimal::MAX`.
pub fn expense_breakdown<'a, I>(entries: I) -> Vec<CategoryDataPoint>
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let mut totals: Vec<(&str, Decimal)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut grand = Decimal::ZERO;

    for e in entries {
        if e.amount >= Decimal::ZERO {
            continue;
        }
        let cat = e.category_or_default();
        let out = e.amount.abs();
        match slot.get(cat) {
            Some(&i) => totals[i].1 = totals[i].1.saturating_add(out),
            None => {
                slot.insert(cat, totals.len());
                totals.push((cat, out));
            }
        }
        grand = grand.saturating_add(out);
    }

    let mut items: Vec<CategoryDataPoint> = totals
        .into_iter()
        .map(|(cat, total)| CategoryDataPoint {
            category: cat.to_string(),
            total,
            pct: if grand > Decimal::ZERO {
                total / grand * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            },
        })
        .collect();
    items.sort_by(|a, b| b.total.cmp(&a.total));
    items
}

/// The `limit` largest expense categories.
pub fn top_expense_categories<'a, I>(entries: I, limit: usize) -> Vec<CategoryDataPoint>
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let mut items = expense_breakdown(entries);
    items.truncate(limit);
    items
}
