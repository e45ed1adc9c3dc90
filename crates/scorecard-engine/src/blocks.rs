//! The seven block scorers.
//!
//! Each scorer is a pure function from the indicator set (and, for the
//! valuation block, the fundamentals snapshot) to a `BlockScore`. Every
//! threshold branch that fires appends one rationale line; unknown
//! indicators contribute 0 with an "Insufficient data" line instead of
//! failing the pipeline.

use scorecard_core::{Block, BlockScore, FundamentalsSnapshot};
use scorecard_indicators::{IndicatorSet, TrendState};

use crate::thresholds::BLOCK_BOUND;

fn finish(block: Block, sum: i32, rationale: Vec<String>) -> BlockScore {
    BlockScore {
        block,
        value: sum.clamp(-BLOCK_BOUND, BLOCK_BOUND),
        rationale,
    }
}

fn insufficient(rationale: &mut Vec<String>, what: &str) {
    rationale.push(format!(
        "Insufficient data: {} unknown, treated as neutral",
        what
    ));
}

/// Block 1: trend state, 20-day momentum, and day-to-day consistency
pub fn score_trend_momentum(ind: &IndicatorSet) -> BlockScore {
    use crate::thresholds::trend_momentum::*;

    let mut sum = 0;
    let mut rationale = Vec::new();

    match ind.trend {
        Some(TrendState::Up) => {
            sum += 1;
            rationale.push("Uptrend confirmed: price above both moving averages".to_string());
        }
        Some(TrendState::Down) => {
            sum -= 1;
            rationale.push("Downtrend: price below both moving averages".to_string());
        }
        Some(TrendState::Mixed) => {
            rationale.push("Mixed trend: no clear direction".to_string());
        }
        None => insufficient(&mut rationale, "trend"),
    }

    match (ind.momentum, ind.momentum_accel) {
        (Some(roc), Some(accel)) => {
            if roc > STRONG_MOMENTUM_PCT && accel > 0.0 {
                sum += 1;
                rationale.push(format!(
                    "Strong momentum: up {:.1}% in 20 days and accelerating",
                    roc
                ));
            } else if roc < WEAK_MOMENTUM_PCT || accel < DECELERATION_PTS {
                sum -= 1;
                rationale.push(format!(
                    "Weak momentum: {:+.1}% in 20 days and losing steam",
                    roc
                ));
            } else {
                rationale.push(format!("Neutral momentum: sideways movement ({:+.1}%)", roc));
            }
        }
        _ => insufficient(&mut rationale, "momentum"),
    }

    match ind.win_rate {
        Some(rate) if rate > HIGH_WIN_RATE => {
            sum += 1;
            rationale.push(format!(
                "High consistency: {:.0}% of days closed positive",
                rate * 100.0
            ));
        }
        Some(rate) if rate < LOW_WIN_RATE => {
            sum -= 1;
            rationale.push(format!(
                "Low consistency: only {:.0}% of days closed positive",
                rate * 100.0
            ));
        }
        Some(rate) => {
            rationale.push(format!(
                "Moderate consistency: {:.0}% positive days",
                rate * 100.0
            ));
        }
        None => insufficient(&mut rationale, "win rate"),
    }

    finish(Block::TrendMomentum, sum, rationale)
}

/// Block 2: participation proxies, volume trend plus win rate
pub fn score_breadth_quality(ind: &IndicatorSet) -> BlockScore {
    use crate::thresholds::breadth_quality::*;
    use crate::thresholds::trend_momentum::{HIGH_WIN_RATE, LOW_WIN_RATE};

    let mut sum = 0;
    let mut rationale = Vec::new();

    match ind.volume_trend {
        Some(ratio) if ratio > EXPANDING_VOLUME => {
            sum += 1;
            rationale.push(format!(
                "Volume expanding: trading activity {:.0}% above baseline",
                (ratio - 1.0) * 100.0
            ));
        }
        Some(ratio) if ratio < DRYING_VOLUME => {
            sum -= 1;
            rationale.push(format!(
                "Volume drying up: trading activity {:.0}% below baseline",
                (1.0 - ratio) * 100.0
            ));
        }
        Some(_) => rationale.push("Stable volume: normal activity".to_string()),
        None => insufficient(&mut rationale, "volume trend"),
    }

    match ind.win_rate {
        Some(rate) if rate > HIGH_WIN_RATE => {
            sum += 1;
            rationale.push(format!(
                "Broad participation: {:.0}% of sessions advancing",
                rate * 100.0
            ));
        }
        Some(rate) if rate < LOW_WIN_RATE => {
            sum -= 1;
            rationale.push(format!(
                "Weak participation: only {:.0}% of sessions advancing",
                rate * 100.0
            ));
        }
        Some(_) => rationale.push("Mixed participation across sessions".to_string()),
        None => insufficient(&mut rationale, "win rate"),
    }

    finish(Block::BreadthQuality, sum, rationale)
}

/// Block 3: 50-day performance plus volume-flow direction
pub fn score_sentiment_flows(ind: &IndicatorSet) -> BlockScore {
    use crate::thresholds::sentiment_flows::*;

    let mut sum = 0;
    let mut rationale = Vec::new();

    match ind.performance {
        Some(perf) if perf > STRONG_PERFORMANCE_PCT => {
            sum += 1;
            rationale.push(format!("Strong performance: up {:.1}% over 50 days", perf));
        }
        Some(perf) if perf < WEAK_PERFORMANCE_PCT => {
            sum -= 1;
            rationale.push(format!("Weak performance: down {:.1}% over 50 days", perf.abs()));
        }
        Some(perf) => {
            rationale.push(format!("Neutral performance: flat over 50 days ({:+.1}%)", perf));
        }
        None => insufficient(&mut rationale, "50-day performance"),
    }

    match ind.volume_trend {
        Some(ratio) if ratio > INFLOW_RATIO => {
            sum += 1;
            rationale.push("Flows supportive: volume building behind the move".to_string());
        }
        Some(ratio) if ratio < OUTFLOW_RATIO => {
            sum -= 1;
            rationale.push("Flows fading: volume leaking away from the name".to_string());
        }
        Some(_) => rationale.push("Flows balanced: no directional volume signal".to_string()),
        None => insufficient(&mut rationale, "volume flows"),
    }

    finish(Block::SentimentFlows, sum, rationale)
}

/// Block 4: trailing P/E against the market benchmark multiple
pub fn score_valuation_macro(fundamentals: &FundamentalsSnapshot) -> BlockScore {
    use crate::thresholds::valuation_macro::*;

    let mut sum = 0;
    let mut rationale = Vec::new();

    match fundamentals.trailing_pe {
        Some(pe) if pe > 0.0 => {
            let benchmark = match fundamentals.benchmark_pe {
                Some(b) if b > 0.0 => b,
                _ => MARKET_AVERAGE_PE,
            };
            let premium = (pe / benchmark - 1.0) * 100.0;

            if premium <= DEEP_DISCOUNT_PCT {
                sum += 2;
                rationale.push(format!(
                    "Deeply discounted: trading {:.0}% below the market multiple",
                    premium.abs()
                ));
            } else if premium <= DISCOUNT_PCT {
                sum += 1;
                rationale.push(format!(
                    "Attractive valuation: trading {:.0}% cheaper than the market",
                    premium.abs()
                ));
            } else if premium >= RICH_PREMIUM_PCT {
                sum -= 2;
                rationale.push(format!(
                    "Richly valued: trading {:.0}% above the market multiple",
                    premium
                ));
            } else if premium >= PREMIUM_PCT {
                sum -= 1;
                rationale.push(format!(
                    "Expensive: trading {:.0}% above the market multiple",
                    premium
                ));
            } else {
                rationale.push(format!(
                    "Fair value: within {:.0}% of the market multiple",
                    premium.abs()
                ));
            }
        }
        _ => insufficient(&mut rationale, "trailing P/E"),
    }

    finish(Block::ValuationMacro, sum, rationale)
}

/// Block 5: realized volatility against its own 60-day baseline
pub fn score_volatility_regime(ind: &IndicatorSet) -> BlockScore {
    use crate::thresholds::volatility_regime::*;

    let mut sum = 0;
    let mut rationale = Vec::new();

    match ind.volatility_zscore {
        Some(z) if z >= EXTREME_STRESS_Z => {
            sum -= 2;
            rationale.push(format!(
                "Extreme stress: volatility {:.1} standard deviations above normal",
                z
            ));
        }
        Some(z) if z >= HIGH_STRESS_Z => {
            sum -= 1;
            rationale.push(format!(
                "High stress: volatility {:.1} standard deviations above normal",
                z
            ));
        }
        Some(z) if z <= COMPLACENCY_Z => {
            rationale.push(
                "Complacency warning: volatility unusually low, reversal risk".to_string(),
            );
        }
        Some(z) => {
            sum += 1;
            rationale.push(format!(
                "Normal regime: volatility at healthy levels (z-score {:.2})",
                z
            ));
        }
        None => insufficient(&mut rationale, "volatility regime"),
    }

    finish(Block::VolatilityRegime, sum, rationale)
}

/// Block 6: tradability from volume levels, volume trend, and price behavior
pub fn score_liquidity(ind: &IndicatorSet) -> BlockScore {
    use crate::thresholds::liquidity::*;

    let mut sum = 0;
    let mut rationale = Vec::new();

    match (ind.volume_ratio, ind.volume_trend) {
        (Some(ratio), Some(trend)) => {
            let erratic = matches!(
                (ind.daily_range, ind.win_rate),
                (Some(range), Some(rate)) if range > ERRATIC_RANGE_PCT && rate < CHOPPY_WIN_RATE
            );

            if ratio < COLLAPSE_RATIO {
                sum -= 2;
                rationale.push(
                    "Volume collapse: recent turnover under half its baseline".to_string(),
                );
            } else if trend < STRESSED_VOLUME_TREND || erratic {
                sum -= 1;
                rationale.push("Liquidity stress: thinning volume or erratic prices".to_string());
            } else if trend >= STABLE_VOLUME_TREND && ratio > HEALTHY_VOLUME_RATIO {
                sum += 1;
                rationale.push("Healthy liquidity: stable volume, easy to trade".to_string());
            } else {
                rationale.push("Normal liquidity: standard trading conditions".to_string());
            }
        }
        _ => insufficient(&mut rationale, "volume"),
    }

    finish(Block::Liquidity, sum, rationale)
}

/// Block 7: where the close sits in the 52-week range
pub fn score_price_position(ind: &IndicatorSet) -> BlockScore {
    use crate::thresholds::price_position::*;

    let mut sum = 0;
    let mut rationale = Vec::new();

    match ind.range_position {
        Some(pos) if pos >= EXTREME_TOP => {
            sum -= 2;
            rationale.push(format!(
                "Overbought extreme: at {:.0}% of the 52-week range",
                pos * 100.0
            ));
        }
        Some(pos) if pos >= OVERBOUGHT => {
            sum -= 1;
            rationale.push(format!(
                "Overbought: at {:.0}% of the 52-week range, limited upside",
                pos * 100.0
            ));
        }
        Some(pos) if pos <= EXTREME_BOTTOM => {
            sum += 2;
            rationale.push(format!(
                "Washed out: at {:.0}% of the 52-week range",
                pos * 100.0
            ));
        }
        Some(pos) if pos <= OVERSOLD => {
            sum += 1;
            rationale.push(format!(
                "Oversold: at {:.0}% of the 52-week range, potential opportunity",
                pos * 100.0
            ));
        }
        Some(pos) => {
            rationale.push(format!("Mid-range: at {:.0}% of the 52-week range", pos * 100.0));
        }
        None => insufficient(&mut rationale, "range position"),
    }

    finish(Block::PricePosition, sum, rationale)
}

/// Score one block against the shared inputs
pub fn score_block(
    block: Block,
    indicators: &IndicatorSet,
    fundamentals: &FundamentalsSnapshot,
) -> BlockScore {
    match block {
        Block::TrendMomentum => score_trend_momentum(indicators),
        Block::BreadthQuality => score_breadth_quality(indicators),
        Block::SentimentFlows => score_sentiment_flows(indicators),
        Block::ValuationMacro => score_valuation_macro(fundamentals),
        Block::VolatilityRegime => score_volatility_regime(indicators),
        Block::Liquidity => score_liquidity(indicators),
        Block::PricePosition => score_price_position(indicators),
    }
}

/// Score all seven blocks in display order
pub fn score_all(indicators: &IndicatorSet, fundamentals: &FundamentalsSnapshot) -> Vec<BlockScore> {
    Block::ALL
        .iter()
        .map(|block| score_block(*block, indicators, fundamentals))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullish_indicators() -> IndicatorSet {
        IndicatorSet {
            close: 120.0,
            ma_fast: Some(110.0),
            ma_slow: Some(100.0),
            trend: Some(TrendState::Up),
            momentum: Some(8.0),
            momentum_accel: Some(0.5),
            performance: Some(15.0),
            win_rate: Some(0.70),
            range_position: Some(0.55),
            volatility: Some(18.0),
            volatility_zscore: Some(0.2),
            volume_trend: Some(1.10),
            volume_ratio: Some(1.05),
            daily_range: Some(1.5),
            ..Default::default()
        }
    }

    #[test]
    fn test_trend_momentum_caps_at_positive_bound() {
        let score = score_trend_momentum(&bullish_indicators());

        // Three sub-scores fire but the block clamps to the shared bound
        assert_eq!(score.value, 2);
        assert!(score.rationale.iter().any(|r| r.contains("Uptrend confirmed")));
        assert!(score.rationale.iter().any(|r| r.contains("Strong momentum")));
    }

    #[test]
    fn test_trend_momentum_caps_at_negative_bound() {
        let ind = IndicatorSet {
            trend: Some(TrendState::Down),
            momentum: Some(-12.0),
            momentum_accel: Some(-3.0),
            win_rate: Some(0.25),
            ..Default::default()
        };
        let score = score_trend_momentum(&ind);

        assert_eq!(score.value, -2);
        assert!(score.rationale.iter().any(|r| r.contains("Downtrend")));
    }

    #[test]
    fn test_trend_momentum_unknown_is_neutral() {
        let score = score_trend_momentum(&IndicatorSet::default());

        assert_eq!(score.value, 0);
        assert_eq!(score.rationale.len(), 3);
        assert!(score.rationale.iter().all(|r| r.contains("Insufficient data")));
    }

    #[test]
    fn test_momentum_deceleration_scores_negative() {
        let ind = IndicatorSet {
            trend: Some(TrendState::Mixed),
            momentum: Some(3.0),
            momentum_accel: Some(-4.0),
            win_rate: Some(0.5),
            ..Default::default()
        };
        let score = score_trend_momentum(&ind);

        assert_eq!(score.value, -1);
        assert!(score.rationale.iter().any(|r| r.contains("losing steam")));
    }

    #[test]
    fn test_breadth_quality_expanding_volume() {
        let score = score_breadth_quality(&bullish_indicators());

        assert_eq!(score.value, 2);
        assert!(score.rationale.iter().any(|r| r.contains("Volume expanding")));
    }

    #[test]
    fn test_breadth_quality_drying_volume() {
        let ind = IndicatorSet {
            volume_trend: Some(0.80),
            win_rate: Some(0.5),
            ..Default::default()
        };
        let score = score_breadth_quality(&ind);

        assert_eq!(score.value, -1);
        assert!(score.rationale.iter().any(|r| r.contains("Volume drying up")));
    }

    #[test]
    fn test_sentiment_flows_both_directions() {
        let bullish = score_sentiment_flows(&bullish_indicators());
        assert_eq!(bullish.value, 2);

        let bearish = score_sentiment_flows(&IndicatorSet {
            performance: Some(-20.0),
            volume_trend: Some(0.85),
            ..Default::default()
        });
        assert_eq!(bearish.value, -2);
        assert!(bearish.rationale.iter().any(|r| r.contains("Weak performance")));
    }

    #[test]
    fn test_valuation_tiers() {
        let score = |pe: f64| {
            score_valuation_macro(&FundamentalsSnapshot {
                trailing_pe: Some(pe),
                benchmark_pe: Some(20.0),
                ..Default::default()
            })
            .value
        };

        assert_eq!(score(10.0), 2); // -50% premium
        assert_eq!(score(16.0), 1); // -20%
        assert_eq!(score(20.0), 0); // at the market multiple
        assert_eq!(score(26.0), -1); // +30%
        assert_eq!(score(36.0), -2); // +80%
    }

    #[test]
    fn test_valuation_missing_pe_is_neutral() {
        let score = score_valuation_macro(&FundamentalsSnapshot::default());

        assert_eq!(score.value, 0);
        assert!(score.rationale[0].contains("Insufficient data"));
    }

    #[test]
    fn test_valuation_falls_back_to_market_average() {
        // P/E 14 against the assumed market average of 20 is a -30% premium
        let score = score_valuation_macro(&FundamentalsSnapshot {
            trailing_pe: Some(14.0),
            ..Default::default()
        });

        assert_eq!(score.value, 2);
    }

    #[test]
    fn test_volatility_regime_tiers() {
        let score = |z: f64| {
            score_volatility_regime(&IndicatorSet {
                volatility_zscore: Some(z),
                ..Default::default()
            })
        };

        assert_eq!(score(3.0).value, -2);
        assert_eq!(score(1.8).value, -1);
        assert_eq!(score(0.0).value, 1);

        let complacent = score(-1.5);
        assert_eq!(complacent.value, 0);
        assert!(complacent.rationale[0].contains("Complacency warning"));
    }

    #[test]
    fn test_liquidity_healthy() {
        let score = score_liquidity(&bullish_indicators());

        assert_eq!(score.value, 1);
        assert!(score.rationale[0].contains("Healthy liquidity"));
    }

    #[test]
    fn test_liquidity_collapse() {
        let ind = IndicatorSet {
            volume_ratio: Some(0.3),
            volume_trend: Some(0.95),
            ..Default::default()
        };
        let score = score_liquidity(&ind);

        assert_eq!(score.value, -2);
        assert!(score.rationale[0].contains("Volume collapse"));
    }

    #[test]
    fn test_liquidity_erratic_prices() {
        let ind = IndicatorSet {
            volume_ratio: Some(1.0),
            volume_trend: Some(1.0),
            daily_range: Some(4.0),
            win_rate: Some(0.30),
            ..Default::default()
        };
        let score = score_liquidity(&ind);

        assert_eq!(score.value, -1);
        assert!(score.rationale[0].contains("Liquidity stress"));
    }

    #[test]
    fn test_price_position_tiers() {
        let score = |pos: f64| {
            score_price_position(&IndicatorSet {
                range_position: Some(pos),
                ..Default::default()
            })
        };

        assert_eq!(score(0.97).value, -2);
        assert_eq!(score(0.85).value, -1);
        assert_eq!(score(0.50).value, 0);
        assert_eq!(score(0.15).value, 1);
        assert_eq!(score(0.02).value, 2);

        assert!(score(0.97).rationale[0].contains("Overbought"));
        assert!(score(0.15).rationale[0].contains("Oversold"));
    }

    #[test]
    fn test_score_all_returns_blocks_in_display_order() {
        let blocks = score_all(&bullish_indicators(), &FundamentalsSnapshot::default());

        assert_eq!(blocks.len(), 7);
        for (score, block) in blocks.iter().zip(Block::ALL) {
            assert_eq!(score.block, block);
            assert!(score.value.abs() <= 2);
            assert!(!score.rationale.is_empty());
        }
    }
}
