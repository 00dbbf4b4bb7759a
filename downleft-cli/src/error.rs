//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Grid construction failed
    #[error("grid error: {0}")]
    Grid(#[from] downleft::GridError),

    /// Map preset options do not fit the grid
    #[error("invalid map option: {0}")]
    InvalidMap(String),

    /// The strategies produced different counts for the same layout
    #[error("strategies disagree: linear={linear}, queue={queue}, threaded={threaded}")]
    StrategyMismatch {
        linear: i64,
        queue: i64,
        threaded: i64,
    },
}
