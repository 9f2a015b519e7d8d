//! Haven Match - roommate compatibility scoring engine for the Haven
//! recovery-housing platform.
//!
//! This library implements the full compatibility pipeline: tolerant
//! normalization of raw profile records, thirteen independent factor
//! scorers, priority-weighted aggregation, deal-breaker evaluation, and
//! human-readable flag generation. The core is pure and synchronous -
//! evaluating candidates in parallel needs no coordination.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize, normalize_at, MatchError, Matcher, ALGORITHM_VERSION};
pub use crate::models::{
    CompatibilityResult, DealBreakerReport, DealBreakerRule, Factor, FactorWeights,
    FlagThresholds, Profile, RankOptions, RankOutcome, ScoredCandidate, Tier,
};
