use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    /// Ticker not found, delisted, or no bars in the requested range.
    /// The only error that aborts the pipeline before scoring.
    #[error("No price data available: {0}")]
    DataUnavailable(String),

    /// The provider handed back a malformed series (unsorted or
    /// duplicate dates). Missing history within a well-formed series is
    /// not an error; indicators degrade to unknown instead.
    #[error("Invalid price series: {0}")]
    InvalidSeries(String),
}
