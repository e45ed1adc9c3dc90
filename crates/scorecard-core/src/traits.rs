use crate::{FundamentalsSnapshot, PriceSeries, ScoreError};
use async_trait::async_trait;

/// Seam to the external market-data source. Implementations handle their
/// own transport, timeouts, and retries; the scoring core only sees the
/// resulting series and snapshot.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars covering the trailing `lookback_days` calendar days.
    /// Fails with `DataUnavailable` for unknown tickers or empty ranges.
    async fn fetch_price_series(
        &self,
        ticker: &str,
        lookback_days: u32,
    ) -> Result<PriceSeries, ScoreError>;

    /// Fundamental snapshot for a ticker. Individual fields may be absent.
    async fn fetch_fundamentals(&self, ticker: &str) -> Result<FundamentalsSnapshot, ScoreError>;
}
