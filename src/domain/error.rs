//! Error taxonomy for the counter services and the reset job.
//!
//! Handlers map these onto HTTP status codes: `Validation` → 400,
//! `NotFound` → 404, `Store` → 500. `Internal` never crosses the HTTP
//! boundary; it is surfaced to whatever scheduled the reset job.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Caller input is missing or malformed. Never retried.
    #[error("{0}")]
    Validation(&'static str),

    /// The requested counter has never been written.
    #[error("{0}")]
    NotFound(&'static str),

    /// The underlying counter store failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),

    /// The reset job failed; fatal for that run, no in-process retry.
    #[error("Error resetting game stats: {0}")]
    Internal(#[source] anyhow::Error),
}
