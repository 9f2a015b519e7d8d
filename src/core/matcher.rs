use thiserror::Error;

use crate::config::Settings;
use crate::core::{
    aggregate::aggregate,
    dealbreakers::check_deal_breakers,
    factors::score_all,
    flags::generate_flags,
};
use crate::models::{
    CompatibilityResult, FactorWeights, FlagThresholds, Profile, RankOptions, RankOutcome,
    ScoredCandidate,
};
use validator::Validate;

/// Version tag stamped on every result so callers can invalidate cached
/// scores when the algorithm changes
pub const ALGORITHM_VERSION: &str = "3.2.0";

/// Errors from the matching surface.
///
/// Data quality never lands here - malformed profiles degrade inside the
/// normalizer and scorers. These are configuration and caller errors.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid rank options: {0}")]
    InvalidOptions(#[from] validator::ValidationErrors),

    #[error("factor weights must sum to 100, got {total}")]
    InvalidWeights { total: u32 },
}

/// Compatibility evaluation orchestrator.
///
/// Owns the weight and threshold tables and runs the full pipeline:
/// factor scorers, aggregation, deal-breaker evaluation, flag generation.
/// One `Matcher` is cheap to clone and safe to share across threads -
/// every evaluation is pure.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: FactorWeights,
    thresholds: FlagThresholds,
}

impl Matcher {
    /// Create a matcher with explicit tables, validating the weight total
    pub fn new(weights: FactorWeights, thresholds: FlagThresholds) -> Result<Self, MatchError> {
        let total = weights.total();
        if total != 100 {
            return Err(MatchError::InvalidWeights { total });
        }
        Ok(Self { weights, thresholds })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: FactorWeights::default(),
            thresholds: FlagThresholds::default(),
        }
    }

    /// Build a matcher from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self, MatchError> {
        Self::new(settings.scoring.weights.to_factor_weights(), FlagThresholds::default())
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Evaluate one pair of normalized profiles.
    ///
    /// Pure and deterministic: identical inputs produce identical results,
    /// which keeps ranking order stable and results cacheable.
    pub fn evaluate(&self, a: &Profile, b: &Profile) -> CompatibilityResult {
        let scores = score_all(a, b);
        let outcome = aggregate(&scores, &self.weights);
        let report = check_deal_breakers(a, b);
        let flags = generate_flags(a, b, &scores, &report, &self.thresholds);

        tracing::debug!(
            subject = %a.user_id,
            candidate = %b.user_id,
            score = outcome.overall_score,
            absolute_deal_breakers = report.absolute.len(),
            "evaluated pair"
        );

        CompatibilityResult {
            overall_score: outcome.overall_score,
            score_breakdown: scores,
            priority_breakdown: outcome.priority_breakdown,
            green_flags: flags.green,
            yellow_flags: flags.yellow,
            red_flags: flags.red,
            deal_breakers: report,
            algorithm_version: ALGORITHM_VERSION.to_string(),
        }
    }

    /// Rank a candidate pool against a subject profile.
    ///
    /// Pipeline: validate options, drop inactive/self/excluded candidates,
    /// evaluate each remaining pair, apply the absolute deal-breaker veto
    /// and the minimum score cut, then sort by score descending with a
    /// user-id tie-break so equal scores rank deterministically.
    pub fn rank_candidates(
        &self,
        subject: &Profile,
        candidates: Vec<Profile>,
        options: &RankOptions,
    ) -> Result<RankOutcome, MatchError> {
        options.validate()?;

        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.is_active)
            .filter(|candidate| candidate.user_id != subject.user_id)
            .filter(|candidate| !options.exclude_user_ids.contains(&candidate.user_id))
            .filter_map(|candidate| {
                let result = self.evaluate(subject, &candidate);

                if options.apply_deal_breakers && result.deal_breakers.has_absolute() {
                    tracing::trace!(candidate = %candidate.user_id, "excluded by deal breaker");
                    return None;
                }
                if result.overall_score < options.min_score {
                    return None;
                }

                Some(ScoredCandidate {
                    user_id: candidate.user_id,
                    first_name: candidate.first_name,
                    compatibility: result,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.compatibility
                .overall_score
                .cmp(&a.compatibility.overall_score)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        matches.truncate(options.limit as usize);

        Ok(RankOutcome { matches, total_candidates })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DealBreakers, RecoveryStage};

    fn candidate(id: &str, budget_max: u32) -> Profile {
        Profile {
            user_id: id.to_string(),
            first_name: format!("User {}", id),
            primary_city: Some("Portland".to_string()),
            primary_state: Some("OR".to_string()),
            primary_location: Some("Portland, OR".to_string()),
            budget_max: Some(budget_max),
            recovery_stage: Some(RecoveryStage::Stable),
            ..Profile::default()
        }
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let weights = FactorWeights { location: 50, ..FactorWeights::default() };
        let result = Matcher::new(weights, FlagThresholds::default());
        assert!(matches!(result, Err(MatchError::InvalidWeights { total: 130 })));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let matcher = Matcher::with_default_weights();
        let a = candidate("a", 800);
        let b = candidate("b", 900);

        assert_eq!(matcher.evaluate(&a, &b), matcher.evaluate(&a, &b));
    }

    #[test]
    fn test_evaluate_stamps_version() {
        let matcher = Matcher::with_default_weights();
        let result = matcher.evaluate(&candidate("a", 800), &candidate("b", 800));
        assert_eq!(result.algorithm_version, ALGORITHM_VERSION);
    }

    #[test]
    fn test_rank_excludes_self_and_inactive() {
        let matcher = Matcher::with_default_weights();
        let subject = candidate("subject", 800);

        let mut inactive = candidate("inactive", 800);
        inactive.is_active = false;

        let pool = vec![candidate("subject", 800), inactive, candidate("other", 820)];
        let outcome = matcher
            .rank_candidates(&subject, pool, &RankOptions::default())
            .unwrap();

        assert_eq!(outcome.total_candidates, 3);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].user_id, "other");
    }

    #[test]
    fn test_rank_respects_exclude_list() {
        let matcher = Matcher::with_default_weights();
        let subject = candidate("subject", 800);
        let options = RankOptions {
            exclude_user_ids: vec!["blocked".to_string()],
            ..RankOptions::default()
        };

        let outcome = matcher
            .rank_candidates(&subject, vec![candidate("blocked", 800)], &options)
            .unwrap();
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_rank_sorted_with_stable_tie_break() {
        let matcher = Matcher::with_default_weights();
        let subject = candidate("subject", 800);

        // Identical candidates except for id: tie broken by id ascending
        let pool = vec![candidate("zeta", 800), candidate("alpha", 800), candidate("mid", 1500)];
        let outcome = matcher
            .rank_candidates(&subject, pool, &RankOptions::default())
            .unwrap();

        assert_eq!(outcome.matches[0].user_id, "alpha");
        assert_eq!(outcome.matches[1].user_id, "zeta");
        assert_eq!(outcome.matches[2].user_id, "mid");
    }

    #[test]
    fn test_rank_applies_absolute_veto() {
        let matcher = Matcher::with_default_weights();
        let subject = Profile {
            deal_breakers: DealBreakers { substance_use: true, ..DealBreakers::default() },
            ..candidate("subject", 800)
        };
        let mut conflicting = candidate("conflicting", 800);
        conflicting.substance_free_home_required = false;

        let outcome = matcher
            .rank_candidates(&subject, vec![conflicting.clone()], &RankOptions::default())
            .unwrap();
        assert!(outcome.matches.is_empty());

        // Veto off: the candidate ranks, with the verdict still reported
        let options = RankOptions { apply_deal_breakers: false, ..RankOptions::default() };
        let outcome = matcher
            .rank_candidates(&subject, vec![conflicting], &options)
            .unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert!(outcome.matches[0].compatibility.deal_breakers.has_absolute());
    }

    #[test]
    fn test_rank_rejects_invalid_options() {
        let matcher = Matcher::with_default_weights();
        let options = RankOptions { limit: 0, ..RankOptions::default() };
        let result = matcher.rank_candidates(&candidate("s", 800), vec![], &options);
        assert!(matches!(result, Err(MatchError::InvalidOptions(_))));
    }

    #[test]
    fn test_rank_min_score_cut() {
        let matcher = Matcher::with_default_weights();
        let subject = candidate("subject", 800);
        let options = RankOptions { min_score: 99, ..RankOptions::default() };

        let outcome = matcher
            .rank_candidates(&subject, vec![candidate("far", 5000)], &options)
            .unwrap();
        assert!(outcome.matches.is_empty());
    }
}
