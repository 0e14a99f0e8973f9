// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlens::models::LedgerEntry;
use ledgerlens::store::{EntryStore, LocalStore};
use ledgerlens::{cli, commands::exporter, db};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn seed(conn: &Connection) {
    let store = LocalStore::new(conn);
    let mut a = LedgerEntry::new("2025-01-02", "Corner Shop", Decimal::new(-1234, 2), "Groceries");
    a.id = "a".into();
    let mut b = LedgerEntry::new("2025-02-03", "Invoice \"42\"", Decimal::from(900), "Income");
    b.id = "b".into();
    store.add(a).unwrap();
    store.add(b).unwrap();
}

fn run(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["ledgerlens", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&LocalStore::new(conn), export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_filtered_view_as_json() {
    let conn = base_conn();
    seed(&conn);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run(&conn, &["--format", "json", "--month", "2025-01", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    parsed[0].as_object_mut().unwrap().remove("createdAt");
    assert_eq!(
        parsed,
        json!([
            {
                "id": "a",
                "date": "2025-01-02",
                "description": "Corner Shop",
                "amount": -12.34,
                "category": "Groceries"
            }
        ])
    );
}

#[test]
fn export_csv_quotes_text_fields() {
    let conn = base_conn();
    seed(&conn);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run(&conn, &["--out", &out_str]).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        ["ID", "Date", "Description", "Category", "Amount", "Created At"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "Invoice \"42\"");
    assert_eq!(&rows[1][4], "-12.34");

    let raw = std::fs::read_to_string(&out_path).unwrap();
    assert!(raw.contains("\"Corner Shop\""));
    assert!(raw.contains("\"Invoice \"\"42\"\"\""));
}

#[test]
fn export_rejects_unknown_format() {
    let conn = base_conn();
    seed(&conn);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run(&conn, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}

#[test]
fn export_of_empty_view_writes_nothing() {
    let conn = base_conn();
    seed(&conn);
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("empty.csv");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run(&conn, &["--category", "Travel", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}
