// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{LedgerEntry, MetricSummary};
use rust_decimal::Decimal;

/// Balance, income, expense and count over the given entries.
///
/// Zero amounts move only `balance` (trivially) and `count`. Sums saturate
/// at the bounds of `Decimal` instead of overflowing.
pub fn summarize<'a, I>(entries: I) -> MetricSummary
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    entries
        .into_iter()
        .fold(MetricSummary::default(), |mut acc, e| {
            acc.balance = acc.balance.saturating_add(e.amount);
            if e.amount > Decimal::ZERO {
                acc.income = acc.income.saturating_add(e.amount);
            } else if e.amount < Decimal::ZERO {
                acc.expense = acc.expense.saturating_add(e.amount);
            }
            acc.count += 1;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(amount: &str) -> LedgerEntry {
        LedgerEntry::new("2024-01-01", "x", amount.parse().unwrap(), "")
    }

    #[test]
    fn empty_is_zero() {
        let entries: Vec<LedgerEntry> = Vec::new();
        let s = summarize(&entries);
        assert_eq!(s, MetricSummary::default());
        assert_eq!(s.count, 0);
    }

    #[test]
    fn splits_income_and_expense() {
        let entries = vec![entry("100"), entry("-30"), entry("-0.50")];
        let s = summarize(&entries);
        assert_eq!(s.balance, Decimal::new(6950, 2));
        assert_eq!(s.income, Decimal::from(100));
        assert_eq!(s.expense, Decimal::new(-3050, 2));
        assert_eq!(s.count, 3);
    }

    #[test]
    fn zero_amount_counts_but_is_neither() {
        let entries = vec![entry("0"), entry("-0.00")];
        let s = summarize(&entries);
        assert_eq!(s.income, Decimal::ZERO);
        assert_eq!(s.expense, Decimal::ZERO);
        assert_eq!(s.balance, Decimal::ZERO);
        assert_eq!(s.count, 2);
    }

    #[test]
    fn extreme_amounts_saturate() {
        let entries = vec![
            LedgerEntry::new("2024-01-01", "x", Decimal::MAX, ""),
            entry("1"),
            LedgerEntry::new("2024-01-02", "y", Decimal::MIN, ""),
            LedgerEntry::new("2024-01-03", "z", Decimal::MIN, ""),
        ];
        let s = summarize(&entries);
        assert_eq!(s.income, Decimal::MAX);
        assert_eq!(s.expense, Decimal::MIN);
        assert_eq!(s.count, 4);
    }
}
