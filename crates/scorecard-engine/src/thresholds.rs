//! Threshold tables for the seven scoring blocks.
//!
//! Every tunable lives here as a named constant, one module per block,
//! so the branch logic in `blocks` stays declarative and the tables can
//! be reviewed and tested on their own.

/// Symmetric bound applied to every block's sub-score sum
pub const BLOCK_BOUND: i32 = 2;
/// Raw score domain: seven blocks at `BLOCK_BOUND` each
pub const RAW_SCORE_MAX: i32 = 14;
/// Display domain for the normalized score
pub const DISPLAY_MAX: f64 = 5.0;

pub mod trend_momentum {
    /// 20-day rate of change above this, while accelerating, scores +1
    pub const STRONG_MOMENTUM_PCT: f64 = 5.0;
    /// 20-day rate of change below this scores -1
    pub const WEAK_MOMENTUM_PCT: f64 = -5.0;
    /// Points of 20-day momentum lost in a day at or below which the
    /// name is losing steam
    pub const DECELERATION_PTS: f64 = -2.0;
    /// Win rate above this fraction scores +1
    pub const HIGH_WIN_RATE: f64 = 0.60;
    /// Win rate below this fraction scores -1
    pub const LOW_WIN_RATE: f64 = 0.40;
}

pub mod breadth_quality {
    /// Volume-trend ratio above this reads as expanding interest
    pub const EXPANDING_VOLUME: f64 = 1.05;
    /// Volume-trend ratio below this reads as interest drying up
    pub const DRYING_VOLUME: f64 = 0.90;
}

pub mod sentiment_flows {
    /// 50-day performance above this percent scores +1
    pub const STRONG_PERFORMANCE_PCT: f64 = 10.0;
    /// 50-day performance below this percent scores -1
    pub const WEAK_PERFORMANCE_PCT: f64 = -10.0;
    /// Volume-trend ratio above this reads as inflows
    pub const INFLOW_RATIO: f64 = 1.05;
    /// Volume-trend ratio below this reads as outflows
    pub const OUTFLOW_RATIO: f64 = 0.90;
}

pub mod valuation_macro {
    /// Benchmark trailing P/E assumed when the snapshot has none
    pub const MARKET_AVERAGE_PE: f64 = 20.0;
    /// Relative P/E premium (percent) at or below which the name is
    /// deeply discounted
    pub const DEEP_DISCOUNT_PCT: f64 = -30.0;
    pub const DISCOUNT_PCT: f64 = -15.0;
    pub const PREMIUM_PCT: f64 = 25.0;
    /// Premium at or above which the name is richly valued
    pub const RICH_PREMIUM_PCT: f64 = 60.0;
}

pub mod volatility_regime {
    /// Volatility z-score at or above this is extreme market stress
    pub const EXTREME_STRESS_Z: f64 = 2.5;
    pub const HIGH_STRESS_Z: f64 = 1.5;
    /// z-score at or below this is suspicious calm
    pub const COMPLACENCY_Z: f64 = -1.0;
}

pub mod liquidity {
    /// 5d/50d volume ratio below this is a liquidity collapse
    pub const COLLAPSE_RATIO: f64 = 0.5;
    /// Volume-trend ratio below this is liquidity stress
    pub const STRESSED_VOLUME_TREND: f64 = 0.90;
    /// Daily range (percent of close) above this is erratic pricing
    pub const ERRATIC_RANGE_PCT: f64 = 2.5;
    /// Win rate below this, combined with an erratic range, is stress
    pub const CHOPPY_WIN_RATE: f64 = 0.40;
    /// Volume-trend ratio at or above this supports healthy trading
    pub const STABLE_VOLUME_TREND: f64 = 0.97;
    /// 5d/50d volume ratio above this supports healthy trading
    pub const HEALTHY_VOLUME_RATIO: f64 = 0.90;
}

pub mod price_position {
    /// Range position at or above this fraction is an overbought extreme
    pub const EXTREME_TOP: f64 = 0.95;
    pub const OVERBOUGHT: f64 = 0.80;
    pub const OVERSOLD: f64 = 0.20;
    /// Range position at or below this fraction is washed out
    pub const EXTREME_BOTTOM: f64 = 0.05;
}
