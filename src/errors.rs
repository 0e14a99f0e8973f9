// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by the entry stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response from server: {0}")]
    Json(#[from] serde_json::Error),
    #[error("remote URL not configured (run `ledgerlens config set --url <URL>` or `--mode demo`)")]
    NotConfigured,
    #[error("entry has no id; legacy rows cannot be edited or deleted")]
    MissingId,
    #[error("entry '{0}' not found")]
    NotFound(String),
    #[error("remote store error: {0}")]
    Remote(String),
    #[error("invalid amount '{0}' in store")]
    Amount(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
