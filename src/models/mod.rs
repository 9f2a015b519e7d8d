// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DealBreakers, Factor, FactorWeights, FlagBand, FlagThresholds, Profile, RecoveryStage,
    SmokingStatus, Tier,
};
pub use requests::RankOptions;
pub use responses::{
    CompatibilityResult, DealBreakerReport, DealBreakerRule, FlagSet, RankOutcome,
    ScoredCandidate,
};
