use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// OHLCV bar for one trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Time-ordered daily price history for one ticker.
/// Immutable once built; the constructor rejects unsorted or duplicate dates.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSeries {
    ticker: String,
    bars: Vec<Bar>,
}

impl PriceSeries {
    pub fn new(ticker: impl Into<String>, bars: Vec<Bar>) -> Result<Self, ScoreError> {
        let ticker = ticker.into();
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ScoreError::InvalidSeries(format!(
                    "bars for {} not strictly ascending at {}",
                    ticker, pair[1].date
                )));
            }
        }
        Ok(Self { ticker, bars })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last_bar(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

/// Point-in-time fundamental fields for a ticker.
/// Any field may be absent; scorers treat missing fields as neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    /// Trailing twelve-month price/earnings ratio
    #[serde(default)]
    pub trailing_pe: Option<f64>,
    /// Trailing P/E of the market benchmark used as the valuation reference
    #[serde(default)]
    pub benchmark_pe: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub average_volume: Option<f64>,
}

/// The seven scoring categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    TrendMomentum,
    BreadthQuality,
    SentimentFlows,
    ValuationMacro,
    VolatilityRegime,
    Liquidity,
    PricePosition,
}

impl Block {
    /// Fixed block order used for summing and display
    pub const ALL: [Block; 7] = [
        Block::TrendMomentum,
        Block::BreadthQuality,
        Block::SentimentFlows,
        Block::ValuationMacro,
        Block::VolatilityRegime,
        Block::Liquidity,
        Block::PricePosition,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Block::TrendMomentum => "Trend & Momentum",
            Block::BreadthQuality => "Breadth & Quality",
            Block::SentimentFlows => "Sentiment & Flows",
            Block::ValuationMacro => "Valuation & Macro",
            Block::VolatilityRegime => "Volatility Regime",
            Block::Liquidity => "Liquidity Conditions",
            Block::PricePosition => "Price Position",
        }
    }
}

/// Scorecard-table status for a single block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    Favorable,
    Neutral,
    Unfavorable,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Standing::Favorable => "FAVORABLE",
            Standing::Neutral => "NEUTRAL",
            Standing::Unfavorable => "UNFAVORABLE",
        }
    }
}

/// One block's contribution: a value clamped to [-2, +2] plus the
/// rationale lines for each condition that fired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockScore {
    pub block: Block,
    pub value: i32,
    pub rationale: Vec<String>,
}

impl BlockScore {
    pub fn standing(&self) -> Standing {
        if self.value > 0 {
            Standing::Favorable
        } else if self.value < 0 {
            Standing::Unfavorable
        } else {
            Standing::Neutral
        }
    }
}

/// Final verdict classified from the normalized score.
///
/// | Normalized score | Recommendation             |
/// |------------------|----------------------------|
/// | >= +3            | Strong Buy                 |
/// | >= +1            | Buy / Hold Full Position   |
/// | >= -1            | Hold / Reduce to 50%       |
/// | >= -3            | Reduce / Consider Exit     |
/// | <  -3            | Strong Sell                |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Reduce,
    StrongSell,
}

impl Recommendation {
    /// Classify a normalized score. Boundaries are inclusive on the lower
    /// bound, and the outer buckets absorb anything beyond [-5, +5].
    pub fn from_normalized(score: f64) -> Self {
        match score {
            s if s >= 3.0 => Recommendation::StrongBuy,
            s if s >= 1.0 => Recommendation::Buy,
            s if s >= -1.0 => Recommendation::Hold,
            s if s >= -3.0 => Recommendation::Reduce,
            _ => Recommendation::StrongSell,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy / Hold Full Position",
            Recommendation::Hold => "Hold / Reduce to 50%",
            Recommendation::Reduce => "Reduce / Consider Exit",
            Recommendation::StrongSell => "Strong Sell",
        }
    }

    /// One-line reading of the verdict for the scorecard footer
    pub fn guidance(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => {
                "Favorable across most indicators. Technicals and flows suggest upside."
            }
            Recommendation::Buy => {
                "Generally positive setup. Macro support outweighs near-term weakness."
            }
            Recommendation::Hold => {
                "Mixed signals. Scale back pending clarity on momentum and flows."
            }
            Recommendation::Reduce => {
                "Unfavorable conditions. Risk-reward tilted down. Preserve capital."
            }
            Recommendation::StrongSell => {
                "Major headwinds across blocks. Wait for capitulation signals."
            }
        }
    }
}

/// Terminal artifact of the scoring pipeline, consumed by presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub ticker: String,
    /// Date of the last bar the score was computed from
    pub as_of: NaiveDate,
    /// Sum of the seven block values, in [-14, +14]
    pub raw_score: i32,
    /// Raw score rescaled into [-5, +5]
    pub normalized_score: f64,
    pub recommendation: Recommendation,
    /// All seven blocks in `Block::ALL` order
    pub blocks: Vec<BlockScore>,
    /// Current indicator readings for the metrics panel
    pub metrics: serde_json::Value,
}
