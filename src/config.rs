// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub struct CurrencyOption {
    pub code: &'static str,
    pub locale: &'static str,
    pub symbol: &'static str,
    pub label: &'static str,
    /// Minor-unit digits shown when formatting.
    pub fraction_digits: u32,
}

pub const CURRENCY_OPTIONS: &[CurrencyOption] = &[
    CurrencyOption {
        code: "USD",
        locale: "en-US",
        symbol: "$",
        label: "United States Dollar",
        fraction_digits: 2,
    },
    CurrencyOption {
        code: "PHP",
        locale: "en-PH",
        symbol: "₱",
        label: "Philippine Peso",
        fraction_digits: 2,
    },
    CurrencyOption {
        code: "EUR",
        locale: "de-DE",
        symbol: "€",
        label: "Euro",
        fraction_digits: 2,
    },
    CurrencyOption {
        code: "GBP",
        locale: "en-GB",
        symbol: "£",
        label: "British Pound",
        fraction_digits: 2,
    },
    CurrencyOption {
        code: "JPY",
        locale: "ja-JP",
        symbol: "¥",
        label: "Japanese Yen",
        fraction_digits: 0,
    },
    CurrencyOption {
        code: "CAD",
        locale: "en-CA",
        symbol: "CA$",
        label: "Canadian Dollar",
        fraction_digits: 2,
    },
    CurrencyOption {
        code: "AUD",
        locale: "en-AU",
        symbol: "A$",
        label: "Australian Dollar",
        fraction_digits: 2,
    },
    CurrencyOption {
        code: "SGD",
        locale: "en-SG",
        symbol: "S$",
        label: "Singapore Dollar",
        fraction_digits: 2,
    },
];

static LOCALE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{2}-[A-Z]{2}$").unwrap());

pub fn currency_option(code: &str) -> Option<&'static CurrencyOption> {
    CURRENCY_OPTIONS
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Where entries live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local SQLite store, seeded with sample data.
    Demo,
    /// Remote spreadsheet endpoint.
    #[default]
    Live,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Demo => write!(f, "demo"),
            Mode::Live => write!(f, "live"),
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Ok(Mode::Demo),
            "live" => Ok(Mode::Live),
            other => Err(anyhow!("Unknown mode '{}' (use demo|live)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub mode: Mode,
    pub remote_url: String,
    pub api_token: String,
    pub currency: String,
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Live,
            remote_url: String::new(),
            api_token: String::new(),
            currency: "USD".to_string(),
            locale: "en-US".to_string(),
        }
    }
}

fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Partial update applied by `config set`.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub mode: Option<Mode>,
    pub remote_url: Option<String>,
    pub api_token: Option<String>,
    pub currency: Option<String>,
    pub locale: Option<String>,
}

impl AppConfig {
    /// Stored settings layered over the defaults.
    pub fn load(conn: &Connection) -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Some(m) = get_setting(conn, "mode")? {
            match m.parse() {
                Ok(mode) => cfg.mode = mode,
                Err(err) => tracing::warn!(%err, "ignoring stored mode"),
            }
        }
        if let Some(v) = get_setting(conn, "remote_url")? {
            cfg.remote_url = v;
        }
        if let Some(v) = get_setting(conn, "api_token")? {
            cfg.api_token = v;
        }
        if let Some(v) = get_setting(conn, "currency")? {
            cfg.currency = v;
        }
        if let Some(v) = get_setting(conn, "locale")? {
            cfg.locale = v;
        }
        Ok(cfg)
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        set_setting(conn, "mode", &self.mode.to_string())?;
        set_setting(conn, "remote_url", &self.remote_url)?;
        set_setting(conn, "api_token", &self.api_token)?;
        set_setting(conn, "currency", &self.currency)?;
        set_setting(conn, "locale", &self.locale)?;
        Ok(())
    }

    /// Validate and apply an update. A new currency without an explicit
    /// locale brings its default locale along.
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<()> {
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
        if let Some(url) = update.remote_url {
            let url = url.trim();
            if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("Remote URL must start with http:// or https://"));
            }
            self.remote_url = url.to_string();
        }
        if let Some(token) = update.api_token {
            self.api_token = token.trim().to_string();
        }
        if let Some(code) = update.currency {
            let opt = currency_option(&code).ok_or_else(|| {
                let known: Vec<_> = CURRENCY_OPTIONS.iter().map(|c| c.code).collect();
                anyhow!("Unsupported currency '{}' (use one of {})", code, known.join(", "))
            })?;
            self.currency = opt.code.to_string();
            if update.locale.is_none() {
                self.locale = opt.locale.to_string();
            }
        }
        if let Some(locale) = update.locale {
            if !LOCALE_RE.is_match(&locale) {
                return Err(anyhow!("Invalid locale '{}', expected e.g. en-US", locale));
            }
            self.locale = locale;
        }
        Ok(())
    }
}
