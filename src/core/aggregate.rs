//! Priority-weighted aggregation of factor scores.

use std::collections::BTreeMap;

use crate::models::{Factor, FactorWeights, Tier};

/// Overall score plus the per-tier summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOutcome {
    pub overall_score: u8,
    pub priority_breakdown: BTreeMap<Tier, u8>,
}

/// Combine factor scores into one weighted overall score and a tiered
/// summary.
///
/// Factors absent from `scores` are excluded from both the numerator and
/// the denominator - missing data is not a forced zero. If no factor is
/// present at all, the overall score is 0 and callers should read that as
/// "insufficient data". The tier breakdown is the unweighted mean of the
/// scored factors in each tier, defaulting to 50 for an empty tier, so a
/// caller can explain *why* the overall score landed where it did.
pub fn aggregate(scores: &BTreeMap<Factor, u8>, weights: &FactorWeights) -> AggregateOutcome {
    let mut weighted_sum = 0.0f64;
    let mut weight_present = 0u32;

    for (factor, score) in scores {
        let weight = weights.weight(*factor);
        weighted_sum += f64::from(*score) * f64::from(weight);
        weight_present += weight;
    }

    let overall_score = if weight_present == 0 {
        0
    } else {
        (weighted_sum / f64::from(weight_present)).round() as u8
    };

    let mut priority_breakdown = BTreeMap::new();
    for tier in Tier::ALL {
        let tier_scores: Vec<u32> = scores
            .iter()
            .filter(|(factor, _)| factor.tier() == tier)
            .map(|(_, score)| u32::from(*score))
            .collect();

        let tier_score = if tier_scores.is_empty() {
            50
        } else {
            let sum: u32 = tier_scores.iter().sum();
            ((sum as f64) / (tier_scores.len() as f64)).round() as u8
        };
        priority_breakdown.insert(tier, tier_score);
    }

    AggregateOutcome { overall_score, priority_breakdown }
}
