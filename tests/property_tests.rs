// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Invariants of the analytics pipeline over arbitrary ledgers.

use ledgerlens::analytics::{
    FilterCriteria, PlotArea, area_path, daily_trend, expense_breakdown, filter_entries,
    project_points, summarize, top_expense_categories,
};
use ledgerlens::models::LedgerEntry;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_date() -> impl Strategy<Value = String> {
    (2023u32..2025u32, 1u32..13u32, 1u32..29u32)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Food".to_string()),
        Just("Transport".to_string()),
        Just("Income".to_string()),
        Just("Utilities".to_string()),
    ]
}

fn arb_entry() -> impl Strategy<Value = LedgerEntry> {
    (arb_date(), "[a-zA-Z ]{0,12}", arb_amount(), arb_category()).prop_map(
        |(date, description, amount, category)| LedgerEntry {
            id: String::new(),
            date,
            description,
            amount,
            category,
            created_at: None,
        },
    )
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,2}"],
        prop_oneof![Just(String::new()), arb_category()],
        prop_oneof![
            Just(String::new()),
            (2023u32..2025u32, 1u32..13u32).prop_map(|(y, m)| format!("{:04}-{:02}", y, m))
        ],
    )
        .prop_map(|(search_query, selected_category, selected_month)| FilterCriteria {
            search_query,
            selected_category,
            selected_month,
        })
}

fn arb_area() -> impl Strategy<Value = PlotArea> {
    (50.0f64..1000.0, 50.0f64..500.0, 0.0f64..20.0).prop_map(|(width, height, padding)| {
        PlotArea {
            width,
            height,
            padding,
        }
    })
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        entries in prop::collection::vec(arb_entry(), 0..40),
        criteria in arb_criteria(),
    ) {
        let once = filter_entries(&entries, &criteria);
        let twice = filter_entries(once.iter().copied(), &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn metrics_are_additive(
        a in prop::collection::vec(arb_entry(), 0..30),
        b in prop::collection::vec(arb_entry(), 0..30),
    ) {
        let joined: Vec<LedgerEntry> = a.iter().chain(b.iter()).cloned().collect();
        prop_assert_eq!(summarize(&joined), summarize(&a) + summarize(&b));
    }

    #[test]
    fn trend_dates_ascend(entries in prop::collection::vec(arb_entry(), 0..40)) {
        let trend = daily_trend(&entries);
        for pair in trend.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
        if let Some(last) = trend.last() {
            prop_assert_eq!(last.val, summarize(&entries).balance);
        }
    }

    #[test]
    fn category_shares_sum_to_hundred(entries in prop::collection::vec(arb_entry(), 0..40)) {
        let all = expense_breakdown(&entries);
        let total: Decimal = all.iter().map(|c| c.pct).sum();
        if all.is_empty() {
            prop_assert_eq!(total, Decimal::ZERO);
        } else {
            prop_assert!((total - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 6));
        }
    }

    #[test]
    fn top_categories_are_bounded_and_ordered(
        entries in prop::collection::vec(arb_entry(), 0..40),
        limit in 0usize..8,
    ) {
        let top = top_expense_categories(&entries, limit);
        prop_assert!(top.len() <= limit);
        for pair in top.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn projected_points_stay_inside_the_padding(
        entries in prop::collection::vec(arb_entry(), 0..40),
        area in arb_area(),
    ) {
        let trend = daily_trend(&entries);
        let points = project_points(&trend, &area);
        let eps = 1e-9;
        for p in &points {
            prop_assert!(p.x >= area.padding - eps && p.x <= area.width - area.padding + eps);
            prop_assert!(p.y >= area.padding - eps && p.y <= area.height - area.padding + eps);
        }
        let path = area_path(&points, &area);
        if !points.is_empty() {
            prop_assert_eq!(path.len(), points.len() + 2);
            prop_assert_eq!(path[path.len() - 1].y, area.height);
            prop_assert_eq!(path[path.len() - 2].y, area.height);
        }
    }
}
