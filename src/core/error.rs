//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::core::color::ColorError;

/// Precise frame-configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("y_min {low} must be < y_max {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum EdaError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("cannot open dataset `{}`: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("column `{0}` not found in catalog")]
    MissingColumn(String),

    #[error("column `{column}` has type {found}, expected {expected}")]
    ColumnType {
        column: String,
        found: String,
        expected: &'static str,
    },

    #[error("row {row}: invalid release year `{text}`")]
    BadYear { row: usize, text: String },

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },

    #[error("no interactive terminal available to display charts")]
    NoDisplay,
}
