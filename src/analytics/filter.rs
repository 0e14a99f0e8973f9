// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::LedgerEntry;
use serde::{Deserialize, Serialize};

/// Search/category/month predicates. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_query: String,
    pub selected_category: String,
    pub selected_month: String, // YYYY-MM
}

/// Criteria with the search needle lowered once per filter run.
struct Matcher<'c> {
    needle: String,
    criteria: &'c FilterCriteria,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            needle: criteria.search_query.to_lowercase(),
            criteria,
        }
    }

    fn matches(&self, entry: &LedgerEntry) -> bool {
        let search_ok =
            self.needle.is_empty() || entry.description.to_lowercase().contains(&self.needle);
        let category_ok = self.criteria.selected_category.is_empty()
            || entry.category == self.criteria.selected_category;
        let month_ok = self.criteria.selected_month.is_empty()
            || entry.date.starts_with(&self.criteria.selected_month);
        search_ok && category_ok && month_ok
    }
}

/// Entries passing every active predicate, in input order.
///
/// Accepts anything yielding `&LedgerEntry`, so a filtered view can be fed
/// back in unchanged.
pub fn filter_entries<'a, I>(entries: I, criteria: &FilterCriteria) -> Vec<&'a LedgerEntry>
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let matcher = Matcher::new(criteria);
    entries.into_iter().filter(|e| matcher.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn entry(date: &str, desc: &str, amount: i64, cat: &str) -> LedgerEntry {
        LedgerEntry::new(date, desc, Decimal::from(amount), cat)
    }

    fn sample() -> Vec<LedgerEntry> {
        vec![
            entry("2024-01-01", "Stripe Payout", 100, "Income"),
            entry("2024-01-02", "Corner Grocer", -30, "Food"),
            entry("2024-02-10", "Metro card", -15, "Transport"),
            entry("2024-02-11", "grocer delivery", -12, "food"),
        ]
    }

    #[test]
    fn empty_criteria_keeps_everything_in_order() {
        let entries = sample();
        let out = filter_entries(&entries, &FilterCriteria::default());
        let dates: Vec<_> = out.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(
            dates,
            ["2024-01-01", "2024-01-02", "2024-02-10", "2024-02-11"]
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let entries = sample();
        let criteria = FilterCriteria {
            search_query: "GROCER".into(),
            ..Default::default()
        };
        let out = filter_entries(&entries, &criteria);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let entries = sample();
        let criteria = FilterCriteria {
            selected_category: "Food".into(),
            ..Default::default()
        };
        let out = filter_entries(&entries, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].description, "Corner Grocer");
    }

    #[test]
    fn month_is_a_literal_prefix() {
        let entries = sample();
        let criteria = FilterCriteria {
            selected_month: "2024-02".into(),
            ..Default::default()
        };
        assert_eq!(filter_entries(&entries, &criteria).len(), 2);

        let none = FilterCriteria {
            selected_month: "2024-03".into(),
            ..Default::default()
        };
        assert!(filter_entries(&entries, &none).is_empty());
    }

    #[test]
    fn malformed_date_never_matches_a_month() {
        let entries = vec![entry("01/02/2024", "odd", -1, "Food")];
        let criteria = FilterCriteria {
            selected_month: "2024-01".into(),
            ..Default::default()
        };
        assert!(filter_entries(&entries, &criteria).is_empty());
    }

    #[test]
    fn predicates_combine() {
        let entries = sample();
        let criteria = FilterCriteria {
            search_query: "grocer".into(),
            selected_category: "food".into(),
            selected_month: "2024-02".into(),
        };
        let out = filter_entries(&entries, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, "2024-02-11");
        assert!(Matcher::new(&criteria).matches(out[0]));
    }
}
