// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::sync::Once;

use crate::analytics::FilterCriteria;
use crate::config::currency_option;
use crate::models::{MAX_AMOUNT, amount_in_range};

const UA: &str = concat!(
    "ledgerlens/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/ledgerlens)"
);

static TRACING_INIT: Once = Once::new();

/// Install the stderr `fmt` subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ledgerlens=warn"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    if s.len() != 7 {
        return Err(anyhow!("Invalid month '{}', expected YYYY-MM", s));
    }
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    let d = s
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))?;
    if !amount_in_range(&d) {
        return Err(anyhow!("Amount '{}' exceeds {}", s, MAX_AMOUNT));
    }
    Ok(d)
}

/// Required clap argument as `&str`.
pub fn arg<'m>(sub: &'m clap::ArgMatches, name: &str) -> Result<&'m str> {
    sub.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("--{} is required", name))
}

/// Filter flags shared by `entry list`, `report *` and `export`.
pub fn criteria_from(sub: &clap::ArgMatches) -> Result<FilterCriteria> {
    let selected_month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m.trim())?,
        None => String::new(),
    };
    Ok(FilterCriteria {
        search_query: sub.get_one::<String>("search").cloned().unwrap_or_default(),
        selected_category: sub
            .get_one::<String>("category")
            .cloned()
            .unwrap_or_default(),
        selected_month,
    })
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Display an amount with the currency symbol and the locale's separators.
/// Minor-unit digits follow the currency (none for JPY). Unknown currencies
/// fall back to the ISO code as a prefix and two digits.
pub fn fmt_money(d: &Decimal, ccy: &str, locale: &str) -> String {
    let opt = currency_option(ccy);
    let digits = opt.map_or(2, |o| o.fraction_digits);
    let rounded = d.round_dp(digits);
    let plain = format!("{:.*}", digits as usize, rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let comma_decimal = matches!(
        locale.split('-').next(),
        Some("de" | "fr" | "es" | "it" | "nl")
    );
    let (group, dec) = if comma_decimal { ('.', ',') } else { (',', '.') };
    let mut number = group_thousands(int_part, group);
    if !frac_part.is_empty() {
        number.push(dec);
        number.push_str(frac_part);
    }
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    match opt {
        Some(opt) if comma_decimal => format!("{}{} {}", sign, number, opt.symbol),
        Some(opt) => format!("{}{}{}", sign, opt.symbol, number),
        None => format!("{}{} {}", sign, ccy, number),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
