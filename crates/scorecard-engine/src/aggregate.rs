//! Raw-score summation and normalization into the display range.

use scorecard_core::{BlockScore, Recommendation};

use crate::thresholds::{DISPLAY_MAX, RAW_SCORE_MAX};

/// Sum of block values, taken in the order the blocks were scored
pub fn raw_score(blocks: &[BlockScore]) -> i32 {
    blocks.iter().map(|b| b.value).sum()
}

/// Linear map from the raw domain [-14, +14] into the display domain
/// [-5, +5]. No clamping: the raw score cannot leave its domain.
pub fn normalize(raw: i32) -> f64 {
    raw as f64 * DISPLAY_MAX / RAW_SCORE_MAX as f64
}

/// Classify a raw block sum into the final recommendation
pub fn classify(raw: i32) -> Recommendation {
    Recommendation::from_normalized(normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_core::Block;

    fn block(value: i32) -> BlockScore {
        BlockScore {
            block: Block::TrendMomentum,
            value,
            rationale: vec![],
        }
    }

    #[test]
    fn test_raw_score_is_exact_sum() {
        let blocks: Vec<BlockScore> = [2, -1, 0, 1, -2, 1, 0].into_iter().map(block).collect();
        assert_eq!(raw_score(&blocks), 1);
    }

    #[test]
    fn test_normalize_endpoints() {
        assert!((normalize(14) - 5.0).abs() < 1e-9);
        assert!((normalize(-14) + 5.0).abs() < 1e-9);
        assert!((normalize(0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_is_linear() {
        // Doubling the raw distance from zero doubles the normalized distance
        assert!((normalize(8) - 2.0 * normalize(4)).abs() < 1e-9);
        assert!((normalize(-6) - 2.0 * normalize(-3)).abs() < 1e-9);
    }

    #[test]
    fn test_classify_covers_whole_raw_domain() {
        for raw in -14..=14 {
            let label = classify(raw).label();
            assert!(!label.is_empty());
        }
        assert_eq!(classify(14), Recommendation::StrongBuy);
        assert_eq!(classify(-14), Recommendation::StrongSell);
        assert_eq!(classify(0), Recommendation::Hold);
    }

    #[test]
    fn test_classify_monotonic_in_raw_score() {
        // Walking the raw domain upward never downgrades the verdict
        let order = |r: Recommendation| match r {
            Recommendation::StrongSell => 0,
            Recommendation::Reduce => 1,
            Recommendation::Hold => 2,
            Recommendation::Buy => 3,
            Recommendation::StrongBuy => 4,
        };
        let mut prev = order(classify(-14));
        for raw in -13..=14 {
            let current = order(classify(raw));
            assert!(current >= prev);
            prev = current;
        }
    }
}
