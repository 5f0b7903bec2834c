// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for dataset ingestion.

use pitwall_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a CSV dataset into memory.
///
/// Malformed rows are rejected with their file, row, and field named, never
/// silently dropped: a dropped row would corrupt every aggregate computed
/// from the table.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A dataset file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's header row lacks required columns.
    #[error("{file}: missing required headers: {missing}")]
    MissingHeaders {
        file: &'static str,
        missing: String,
    },

    /// A file's CSV syntax could not be parsed.
    #[error("{file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A row carries a value the dataset cannot accept.
    #[error("{file} row {row}: {field}: {message}")]
    InvalidField {
        file: &'static str,
        row: usize,
        field: &'static str,
        message: String,
    },

    /// The parsed tables violate a dataset integrity rule.
    #[error(transparent)]
    Integrity(#[from] DomainError),
}
