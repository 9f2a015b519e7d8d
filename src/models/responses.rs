use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::domain::{Factor, Tier};

/// A rule that one profile's veto flags raised against the other profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealBreakerRule {
    SubstanceUse,
    FinancialReliability,
    Pets,
    Smoking,
    Loudness,
    Uncleanliness,
}

impl DealBreakerRule {
    pub fn key(self) -> &'static str {
        match self {
            DealBreakerRule::SubstanceUse => "substance_use",
            DealBreakerRule::FinancialReliability => "financial_reliability",
            DealBreakerRule::Pets => "pets",
            DealBreakerRule::Smoking => "smoking",
            DealBreakerRule::Loudness => "loudness",
            DealBreakerRule::Uncleanliness => "uncleanliness",
        }
    }

    /// Human-readable description used when the rule surfaces as a red flag
    pub fn description(self) -> &'static str {
        match self {
            DealBreakerRule::SubstanceUse => {
                "Substance-free home requirement is not met"
            }
            DealBreakerRule::FinancialReliability => {
                "Financial reliability requirement is not met"
            }
            DealBreakerRule::Pets => "One roommate owns pets the other cannot live with",
            DealBreakerRule::Smoking => "Smoking conflicts with a stated deal breaker",
            DealBreakerRule::Loudness => "Noise habits conflict with a stated deal breaker",
            DealBreakerRule::Uncleanliness => {
                "Cleanliness habits conflict with a stated deal breaker"
            }
        }
    }
}

impl fmt::Display for DealBreakerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Violated deal-breaker rules for one pairing.
///
/// Advisory output: `absolute` entries are intended to fully exclude a
/// pairing, `strong` entries surface as red flags. The caller decides
/// whether to act on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealBreakerReport {
    #[serde(default)]
    pub absolute: Vec<DealBreakerRule>,
    #[serde(default)]
    pub strong: Vec<DealBreakerRule>,
}

impl DealBreakerReport {
    pub fn is_clear(&self) -> bool {
        self.absolute.is_empty() && self.strong.is_empty()
    }

    pub fn has_absolute(&self) -> bool {
        !self.absolute.is_empty()
    }
}

/// Green/yellow/red explanation strings for one pairing, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    pub green: Vec<String>,
    pub yellow: Vec<String>,
    pub red: Vec<String>,
}

/// Full output of one pairwise compatibility evaluation. Ephemeral - created
/// fresh per pair and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub overall_score: u8,
    pub score_breakdown: BTreeMap<Factor, u8>,
    pub priority_breakdown: BTreeMap<Tier, u8>,
    pub green_flags: Vec<String>,
    pub yellow_flags: Vec<String>,
    pub red_flags: Vec<String>,
    pub deal_breakers: DealBreakerReport,
    pub algorithm_version: String,
}

impl CompatibilityResult {
    /// Breakdown keyed by the canonical string names.
    pub fn breakdown_by_key(&self) -> BTreeMap<&'static str, u8> {
        self.score_breakdown.iter().map(|(f, s)| (f.key(), *s)).collect()
    }

    /// Adapter for consumers still reading the pre-rewrite duplicate keys:
    /// `recovery` aliases `recovery_core` and `lifestyle` aliases
    /// `lifestyle_core`. New code should use `breakdown_by_key`.
    pub fn breakdown_with_legacy_keys(&self) -> BTreeMap<&'static str, u8> {
        let mut map = self.breakdown_by_key();
        if let Some(score) = self.score_breakdown.get(&Factor::RecoveryCore) {
            map.insert("recovery", *score);
        }
        if let Some(score) = self.score_breakdown.get(&Factor::LifestyleCore) {
            map.insert("lifestyle", *score);
        }
        map
    }
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub user_id: String,
    pub first_name: String,
    pub compatibility: CompatibilityResult,
}

/// Result of ranking a candidate pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankOutcome {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}
