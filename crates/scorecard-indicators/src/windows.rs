//! Lookback windows shared by the indicator set and its consumers.
//! All windows are in trading days.

pub const TREND_FAST_WINDOW: usize = 50;
pub const TREND_SLOW_WINDOW: usize = 200;

pub const MOMENTUM_LOOKBACK: usize = 20;
pub const PERFORMANCE_LOOKBACK: usize = 50;
pub const CONSISTENCY_LOOKBACK: usize = 20;

/// 52 weeks of trading days for the range-position percentile
pub const RANGE_LOOKBACK: usize = 252;
/// Range position degrades to the available history down to this floor
pub const RANGE_MIN_BARS: usize = 20;

pub const VOLATILITY_WINDOW: usize = 20;
pub const VOLATILITY_BASELINE_WINDOW: usize = 60;

pub const VOLUME_MA_WINDOW: usize = 20;
pub const VOLUME_SHORT_WINDOW: usize = 5;
pub const VOLUME_BASELINE_WINDOW: usize = 50;
