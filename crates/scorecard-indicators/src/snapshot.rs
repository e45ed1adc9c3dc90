use scorecard_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::indicators::*;
use crate::windows::*;

/// Relationship between the last close and its moving averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendState {
    Up,
    Down,
    Mixed,
}

/// Everything the block scorers read, computed once per series.
///
/// Scalar fields are `None` when the series is too short for their
/// lookback window; scorers treat `None` as a neutral unknown. The two
/// moving-average lines are kept so the presentation adapter can draw
/// the price chart without recomputing them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// Last close of the series
    pub close: f64,
    pub ma_fast: Option<f64>,
    pub ma_slow: Option<f64>,
    pub trend: Option<TrendState>,
    /// 20-day rate of change, percent
    pub momentum: Option<f64>,
    /// One-day change of the 20-day rate of change, percentage points
    pub momentum_accel: Option<f64>,
    /// 50-day rate of change, percent
    pub performance: Option<f64>,
    /// Fraction of up days over the consistency window, in [0, 1]
    pub win_rate: Option<f64>,
    /// Close as a fraction of the 52-week high/low range, in [0, 1]
    pub range_position: Option<f64>,
    /// Annualized 20-day realized volatility, percent
    pub volatility: Option<f64>,
    /// Current volatility against its 60-day baseline
    pub volatility_zscore: Option<f64>,
    /// 20-day average volume over the 50-day baseline
    pub volume_trend: Option<f64>,
    /// 5-day average volume over the 50-day baseline
    pub volume_ratio: Option<f64>,
    /// Intraday range of the last bar, percent of close
    pub daily_range: Option<f64>,
    pub ma_fast_line: Vec<f64>,
    pub ma_slow_line: Vec<f64>,
}

impl IndicatorSet {
    pub fn compute(series: &PriceSeries) -> Self {
        let bars = series.bars();
        let last = match bars.last() {
            Some(bar) => bar,
            None => return Self::default(),
        };

        let closes = series.closes();
        let volumes = series.volumes();

        let ma_fast_line = sma(&closes, TREND_FAST_WINDOW);
        let ma_slow_line = sma(&closes, TREND_SLOW_WINDOW);
        let ma_fast = ma_fast_line.last().copied();
        let ma_slow = ma_slow_line.last().copied();

        let trend = match (ma_fast, ma_slow) {
            (Some(fast), Some(slow)) => {
                if last.close > fast && fast > slow {
                    Some(TrendState::Up)
                } else if last.close < fast && fast < slow {
                    Some(TrendState::Down)
                } else {
                    Some(TrendState::Mixed)
                }
            }
            _ => None,
        };

        let vol_series = volatility_series(&closes, VOLATILITY_WINDOW);

        Self {
            close: last.close,
            ma_fast,
            ma_slow,
            trend,
            momentum: rate_of_change(&closes, MOMENTUM_LOOKBACK),
            momentum_accel: momentum_acceleration(&closes, MOMENTUM_LOOKBACK),
            performance: rate_of_change(&closes, PERFORMANCE_LOOKBACK),
            win_rate: win_rate(&closes, CONSISTENCY_LOOKBACK),
            range_position: range_position(bars, RANGE_LOOKBACK),
            volatility: vol_series.last().copied(),
            volatility_zscore: zscore_last(&vol_series, VOLATILITY_BASELINE_WINDOW),
            volume_trend: volume_ratio(&volumes, VOLUME_MA_WINDOW, VOLUME_BASELINE_WINDOW),
            volume_ratio: volume_ratio(&volumes, VOLUME_SHORT_WINDOW, VOLUME_BASELINE_WINDOW),
            daily_range: Some(daily_range_pct(last)),
            ma_fast_line,
            ma_slow_line,
        }
    }
}
