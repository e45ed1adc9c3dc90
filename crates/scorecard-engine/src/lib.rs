pub mod aggregate;
pub mod blocks;
pub mod thresholds;

use scorecard_core::{
    FundamentalsSnapshot, MarketDataProvider, PriceSeries, Recommendation, ScoreCard, ScoreError,
};
use scorecard_indicators::IndicatorSet;
use serde_json::json;

/// The deterministic scoring pipeline: series and fundamentals in,
/// scorecard out. Holds no state; identical inputs always produce an
/// identical scorecard.
pub struct ScorecardEngine;

impl ScorecardEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a ticker from an already-fetched series and snapshot.
    ///
    /// Fails only when the series is empty; indicators the series is too
    /// short for degrade to neutral block scores with an explanatory
    /// rationale line.
    pub fn score(
        &self,
        series: &PriceSeries,
        fundamentals: &FundamentalsSnapshot,
    ) -> Result<ScoreCard, ScoreError> {
        let last = series.last_bar().ok_or_else(|| {
            ScoreError::DataUnavailable(format!("no price history for {}", series.ticker()))
        })?;

        tracing::info!("Scoring {} over {} bars", series.ticker(), series.len());

        let indicators = IndicatorSet::compute(series);
        let blocks = blocks::score_all(&indicators, fundamentals);

        let raw_score = aggregate::raw_score(&blocks);
        let normalized_score = aggregate::normalize(raw_score);
        let recommendation = Recommendation::from_normalized(normalized_score);

        for block in &blocks {
            tracing::debug!("{}: {:+}", block.block.label(), block.value);
        }
        tracing::info!(
            "{}: raw {:+}, normalized {:+.2}, {}",
            series.ticker(),
            raw_score,
            normalized_score,
            recommendation.label()
        );

        let metrics = json!({
            "close": indicators.close,
            "ma_fast": indicators.ma_fast,
            "ma_slow": indicators.ma_slow,
            "momentum_20d": indicators.momentum,
            "performance_50d": indicators.performance,
            "win_rate": indicators.win_rate,
            "range_position": indicators.range_position,
            "volatility": indicators.volatility,
            "volatility_zscore": indicators.volatility_zscore,
            "volume_trend": indicators.volume_trend,
            "volume_ratio": indicators.volume_ratio,
            "daily_range": indicators.daily_range,
        });

        Ok(ScoreCard {
            ticker: series.ticker().to_string(),
            as_of: last.date,
            raw_score,
            normalized_score,
            recommendation,
            blocks,
            metrics,
        })
    }

    /// Fetch-and-score convenience over a data provider.
    ///
    /// A failed price fetch aborts; a failed fundamentals fetch degrades
    /// to the empty snapshot so the price-driven blocks still score.
    pub async fn analyze<P>(
        &self,
        provider: &P,
        ticker: &str,
        lookback_days: u32,
    ) -> Result<ScoreCard, ScoreError>
    where
        P: MarketDataProvider + ?Sized,
    {
        let series = provider.fetch_price_series(ticker, lookback_days).await?;

        let fundamentals = match provider.fetch_fundamentals(ticker).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Fundamentals unavailable for {}: {}", ticker, e);
                FundamentalsSnapshot::default()
            }
        };

        self.score(&series, &fundamentals)
    }
}

impl Default for ScorecardEngine {
    fn default() -> Self {
        Self::new()
    }
}
