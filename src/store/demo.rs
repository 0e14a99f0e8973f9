// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::LedgerEntry;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

const SAMPLE: &[(&str, u32, &str, i64, &str)] = &[
    ("init-1", 1, "Client Retainer - Alpha", 500000, "Income"),
    ("init-2", 15, "Digital Product Sales", 125000, "Income"),
    ("exp-1", 2, "Vercel Pro", -2000, "Software/SaaS"),
    ("exp-2", 3, "Supabase Database", -2500, "Software/SaaS"),
    ("exp-3", 5, "Anthropic API Credits", -5000, "Operations"),
    ("exp-4", 10, "Office Internet Fiber", -8999, "Utilities"),
    ("exp-5", 12, "Local Coffee Roasters", -2450, "Lifestyle"),
    ("exp-6", 18, "Uber to Airport", -4500, "Transport"),
    ("exp-7", 20, "Gym Membership", -6000, "Health"),
    ("exp-8", 22, "Cursor AI Subscription", -2000, "Software/SaaS"),
    ("exp-9", 25, "Whole Foods Market", -14520, "Lifestyle"),
    ("exp-10", 28, "Domain Renewals", -3500, "Operations"),
];

/// Sample month of income and expenses dated within `today`'s month.
pub fn sample_entries(today: NaiveDate, created_at: &str) -> Vec<LedgerEntry> {
    SAMPLE
        .iter()
        .filter_map(|&(id, day, desc, cents, cat)| {
            let date = NaiveDate::from_ymd_opt(today.year(), today.month(), day)?;
            Some(LedgerEntry {
                id: id.to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                description: desc.to_string(),
                amount: Decimal::new(cents, 2),
                category: cat.to_string(),
                created_at: Some(created_at.to_string()),
            })
        })
        .collect()
}
