// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlens::config::AppConfig;
use ledgerlens::models::{LedgerEntry, MetricSummary};
use ledgerlens::store::LocalStore;
use ledgerlens::{cli, commands::reports, db};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn entries() -> Vec<LedgerEntry> {
    vec![
        LedgerEntry::new("2024-01-01", "Salary", Decimal::from(100), "Income"),
        LedgerEntry::new("2024-01-02", "Groceries", Decimal::from(-30), "Food"),
        LedgerEntry::new("2024-01-02", "Bus", Decimal::from(-10), ""),
        LedgerEntry::new("2024-02-01", "Groceries", Decimal::from(-20), "Food"),
    ]
}

fn report_matches(args: &[&str]) -> (String, clap::ArgMatches) {
    let mut argv = vec!["ledgerlens", "report"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("report", m)) => match m.subcommand() {
            Some((name, sub)) => (name.to_string(), sub.clone()),
            None => panic!("no report kind"),
        },
        _ => panic!("no report subcommand"),
    }
}

#[test]
fn summary_over_a_month() {
    let data = entries();
    let (_, sub) = report_matches(&["summary", "--month", "2024-01"]);
    let a = reports::analyze(&data, &sub).unwrap();
    assert_eq!(
        a.metrics,
        MetricSummary {
            balance: Decimal::from(60),
            income: Decimal::from(100),
            expense: Decimal::from(-40),
            count: 3,
        }
    );
}

#[test]
fn trend_collapses_same_day_entries() {
    let data = entries();
    let (_, sub) = report_matches(&["trend"]);
    let a = reports::analyze(&data, &sub).unwrap();
    let got: Vec<(&str, Decimal)> = a.trend.iter().map(|p| (p.date.as_str(), p.val)).collect();
    assert_eq!(
        got,
        vec![
            ("2024-01-01", Decimal::from(100)),
            ("2024-01-02", Decimal::from(60)),
            ("2024-02-01", Decimal::from(40)),
        ]
    );
}

#[test]
fn categories_limit_flag() {
    let data = entries();
    let (_, sub) = report_matches(&["categories", "--limit", "1"]);
    let a = reports::analyze(&data, &sub).unwrap();
    assert_eq!(a.top_categories.len(), 1);
    assert_eq!(a.top_categories[0].category, "Food");
    assert_eq!(a.top_categories[0].total, Decimal::from(50));
    assert_eq!(a.top_categories[0].pct.round_dp(2), Decimal::new(8333, 2));
}

#[test]
fn chart_area_from_flags() {
    let (_, sub) = report_matches(&["chart", "--width", "100", "--height", "50", "--padding", "5"]);
    let area = reports::plot_area(&sub).unwrap();
    assert_eq!((area.width, area.height, area.padding), (100.0, 50.0, 5.0));

    let (_, bad) = report_matches(&["chart", "--width", "100", "--padding", "60"]);
    assert!(reports::plot_area(&bad).is_err());
}

#[test]
fn handle_runs_every_report_against_the_local_store() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let store = LocalStore::new(&conn).seeded(true);
    let cfg = AppConfig::default();
    for kind in ["summary", "trend", "categories", "chart"] {
        let matches = cli::build_cli().get_matches_from(["ledgerlens", "report", kind, "--json"]);
        if let Some(("report", m)) = matches.subcommand() {
            reports::handle(&store, &cfg, m).unwrap();
        } else {
            panic!("no report subcommand");
        }
    }
}
