use scorecard_core::Bar;
use statrs::statistics::Statistics;

use crate::windows::RANGE_MIN_BARS;

/// Trading days per year, used to annualize daily volatility
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Simple Moving Average
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }

    let mut result = Vec::with_capacity(data.len() - period + 1);
    for i in period - 1..data.len() {
        let sum: f64 = data[i + 1 - period..=i].iter().sum();
        result.push(sum / period as f64);
    }
    result
}

/// Day-over-day simple returns
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Percent change over the trailing `lookback` sessions
pub fn rate_of_change(closes: &[f64], lookback: usize) -> Option<f64> {
    if lookback == 0 || closes.len() < lookback + 1 {
        return None;
    }
    let last = closes[closes.len() - 1];
    let base = closes[closes.len() - 1 - lookback];
    if base <= 0.0 {
        return None;
    }
    Some((last - base) / base * 100.0)
}

/// One-day change of the trailing `lookback` rate of change, in
/// percentage points. Positive means momentum is still building.
pub fn momentum_acceleration(closes: &[f64], lookback: usize) -> Option<f64> {
    if closes.len() < lookback + 2 {
        return None;
    }
    let today = rate_of_change(closes, lookback)?;
    let yesterday = rate_of_change(&closes[..closes.len() - 1], lookback)?;
    Some(today - yesterday)
}

/// Fraction of up days over the trailing `lookback` sessions, in [0, 1]
pub fn win_rate(closes: &[f64], lookback: usize) -> Option<f64> {
    if lookback == 0 || closes.len() < lookback + 1 {
        return None;
    }
    let tail = &closes[closes.len() - (lookback + 1)..];
    let ups = tail.windows(2).filter(|w| w[1] > w[0]).count();
    Some(ups as f64 / lookback as f64)
}

/// Last close as a fraction of the high/low range over up to `lookback`
/// bars. Uses whatever history is available above `RANGE_MIN_BARS`; a
/// flat range reads as the midpoint.
pub fn range_position(bars: &[Bar], lookback: usize) -> Option<f64> {
    if lookback == 0 || bars.len() < RANGE_MIN_BARS {
        return None;
    }
    let window = &bars[bars.len() - lookback.min(bars.len())..];
    let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let close = bars[bars.len() - 1].close;

    if highest == lowest {
        return Some(0.5);
    }
    Some(((close - lowest) / (highest - lowest)).clamp(0.0, 1.0))
}

/// Annualized standard deviation of daily returns over the trailing
/// `window` sessions, as a percentage
pub fn realized_volatility(closes: &[f64], window: usize) -> Option<f64> {
    if window < 2 || closes.len() < window + 1 {
        return None;
    }
    let returns = daily_returns(&closes[closes.len() - (window + 1)..]);
    let std_dev = returns.std_dev();
    Some(std_dev * TRADING_DAYS_PER_YEAR.sqrt() * 100.0)
}

/// Rolling annualized volatility, one value per complete `window` of
/// daily returns
pub fn volatility_series(closes: &[f64], window: usize) -> Vec<f64> {
    if window < 2 || closes.len() < window + 1 {
        return vec![];
    }
    let returns = daily_returns(closes);
    let mut result = Vec::with_capacity(returns.len() - window + 1);
    for i in window..=returns.len() {
        let std_dev = returns[i - window..i].std_dev();
        result.push(std_dev * TRADING_DAYS_PER_YEAR.sqrt() * 100.0);
    }
    result
}

/// z-score of the last value against the mean and standard deviation of
/// the trailing `window` values (the last value included, matching a
/// rolling-window baseline). A numerically flat baseline reads as 0.
pub fn zscore_last(values: &[f64], window: usize) -> Option<f64> {
    if window < 2 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    let mean = tail.mean();
    let std_dev = tail.std_dev();
    let last = values[values.len() - 1];

    if std_dev <= 1e-9 * mean.abs().max(1.0) {
        return Some(0.0);
    }
    Some((last - mean) / std_dev)
}

/// Mean volume over the trailing `window` bars
pub fn average_volume(volumes: &[f64], window: usize) -> Option<f64> {
    if window == 0 || volumes.len() < window {
        return None;
    }
    Some(volumes[volumes.len() - window..].mean())
}

/// Recent average volume relative to a longer baseline average
pub fn volume_ratio(volumes: &[f64], short: usize, baseline: usize) -> Option<f64> {
    let recent = average_volume(volumes, short)?;
    let base = average_volume(volumes, baseline)?;
    if base <= 0.0 {
        return None;
    }
    Some(recent / base)
}

/// Intraday range as a percentage of the close
pub fn daily_range_pct(bar: &Bar) -> f64 {
    if bar.close <= 0.0 {
        return 0.0;
    }
    (bar.high - bar.low) / bar.close * 100.0
}
