//! The fixed set of factor scorers.
//!
//! Every scorer is a pure function of two normalized profiles returning an
//! integer in [0, 100]. Scorers are symmetric and substitute a documented
//! neutral default (usually 50) for any missing comparison data. Veto
//! logic lives in the deal-breaker evaluator, never here.

pub mod lifestyle;
pub mod logistics;
pub mod recovery;
pub mod safety;
pub mod social;

use std::collections::BTreeMap;

use crate::models::{Factor, Profile};

pub use lifestyle::{score_lifestyle_core, score_schedule};
pub use logistics::{score_budget, score_location, score_timing};
pub use recovery::{score_recovery_core, score_recovery_environment};
pub use safety::{score_gender_preferences, score_housing_safety};
pub use social::{score_communication, score_extended, score_goals, score_shared_interests};

/// Score one factor for a pair of profiles
pub fn score_factor(factor: Factor, a: &Profile, b: &Profile) -> u8 {
    match factor {
        Factor::Location => score_location(a, b),
        Factor::Budget => score_budget(a, b),
        Factor::RecoveryCore => score_recovery_core(a, b),
        Factor::LifestyleCore => score_lifestyle_core(a, b),
        Factor::RecoveryEnvironment => score_recovery_environment(a, b),
        Factor::GenderPreferences => score_gender_preferences(a, b),
        Factor::Schedule => score_schedule(a, b),
        Factor::Communication => score_communication(a, b),
        Factor::HousingSafety => score_housing_safety(a, b),
        Factor::SharedInterests => score_shared_interests(a, b),
        Factor::Timing => score_timing(a, b),
        Factor::Goals => score_goals(a, b),
        Factor::Extended => score_extended(a, b),
    }
}

/// Run every factor scorer for a pair of profiles
pub fn score_all(a: &Profile, b: &Profile) -> BTreeMap<Factor, u8> {
    Factor::ALL
        .iter()
        .map(|factor| (*factor, score_factor(*factor, a, b)))
        .collect()
}
