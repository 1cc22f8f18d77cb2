//! Error type shared by configuration, session bookkeeping and the window loop.

use std::path::PathBuf;

/// Errors raised by `timeplot`.
///
/// Configuration errors (everything except [`TimePlotError::Source`] and
/// [`TimePlotError::Gui`]) are reported before a window is opened.
#[derive(thiserror::Error, Debug)]
pub enum TimePlotError {
    #[error("{field} has {found} entries but the first sample has {expected} lines")]
    LineCountMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("sample has no values; at least one line is required")]
    EmptySample,
    #[error("sample has {found} values but the plot was set up for {expected} lines")]
    ArityChanged { expected: usize, found: usize },
    #[error("unknown update style '{0}' (expected 'jump', 'cont' or 'frozen')")]
    UnknownUpdateStyle(String),
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("unknown line style '{0}'")]
    UnknownLineStyle(String),
    #[error("period and padding must be finite, at most 100 years, period > 0 and padding >= 0 (got {0})")]
    InvalidPeriod(f64),
    #[error("time range overflows the calendar near {0}")]
    TimeOverflow(chrono::NaiveDateTime),
    #[error("sample source failed: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported settings file format: {0:?}")]
    UnsupportedFormat(PathBuf),
    #[error("gui error: {0}")]
    Gui(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, TimePlotError>;
