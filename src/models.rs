// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Largest amount magnitude a store accepts (one quadrillion). Sums of many
/// such amounts stay far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2764472320, 232830, 0, false, 0);

pub fn amount_in_range(amount: &Decimal) -> bool {
    amount.abs() <= MAX_AMOUNT
}

/// One dated income (positive) or expense (negative) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Empty for legacy rows that were written before ids existed.
    #[serde(default)]
    pub id: String,
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl LedgerEntry {
    pub fn new(date: &str, description: &str, amount: Decimal, category: &str) -> Self {
        Self {
            id: String::new(),
            date: date.to_string(),
            description: description.to_string(),
            amount,
            category: category.to_string(),
            created_at: None,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Category label used for aggregation.
    pub fn category_or_default(&self) -> &str {
        if self.category.is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub balance: Decimal,
    pub income: Decimal,
    /// Sum of negative amounts; stays negative.
    pub expense: Decimal,
    pub count: usize,
}

impl Add for MetricSummary {
    type Output = MetricSummary;

    fn add(self, rhs: MetricSummary) -> MetricSummary {
        MetricSummary {
            balance: self.balance.saturating_add(rhs.balance),
            income: self.income.saturating_add(rhs.income),
            expense: self.expense.saturating_add(rhs.expense),
            count: self.count + rhs.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub date: String,
    pub val: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDataPoint {
    pub category: String,
    pub total: Decimal,
    pub pct: Decimal,
}
