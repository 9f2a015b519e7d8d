//! Human-readable flag generation.
//!
//! Flags come from three sources, emitted in this order: per-factor score
//! thresholds (factors in priority order), deal-breaker verdicts, and
//! point-in-time checks against raw profile fields for higher specificity
//! (exact age gap, shared methods by name, dollar budget delta). The
//! specific flags supplement the score-derived ones; no single condition
//! emits the same text twice.

use std::collections::BTreeMap;

use crate::core::similarity::shared_items;
use crate::models::{
    DealBreakerReport, Factor, FlagSet, FlagThresholds, Profile,
};

/// Age gap at or below this earns a green flag
const AGE_GAP_GREEN_YEARS: u8 = 3;
/// Age gap at or above this earns a yellow flag
const AGE_GAP_YELLOW_YEARS: u8 = 15;
/// Budget ceilings within this many dollars earn a green flag
const BUDGET_DELTA_GREEN: u32 = 100;
/// Budget ceilings this far apart earn a yellow flag
const BUDGET_DELTA_YELLOW: u32 = 800;

/// Generate green/yellow/red explanation strings for one scored pairing
pub fn generate_flags(
    a: &Profile,
    b: &Profile,
    scores: &BTreeMap<Factor, u8>,
    report: &DealBreakerReport,
    thresholds: &FlagThresholds,
) -> FlagSet {
    let mut flags = FlagSet::default();

    // Score-derived flags, factors in priority order
    for factor in Factor::ALL {
        let band = match thresholds.band(factor) {
            Some(band) => band,
            None => continue,
        };
        let score = match scores.get(&factor) {
            Some(score) => *score,
            None => continue,
        };

        if score >= band.green_min {
            if let Some(message) = green_message(factor) {
                flags.green.push(message.to_string());
            }
        } else if score <= band.red_max {
            if let Some(message) = red_message(factor) {
                flags.red.push(message.to_string());
            }
        } else if let Some(message) = yellow_message(factor) {
            flags.yellow.push(message.to_string());
        }
    }

    // Deal-breaker verdicts become red flags unconditionally
    for rule in &report.absolute {
        flags.red.push(format!("INCOMPATIBLE: {}", rule.description()));
    }
    for rule in &report.strong {
        flags.red.push(rule.description().to_string());
    }

    // Specific point-in-time flags from raw fields
    push_specific_flags(a, b, &mut flags);

    flags
}

fn push_specific_flags(a: &Profile, b: &Profile, flags: &mut FlagSet) {
    if let (Some(age_a), Some(age_b)) = (a.age, b.age) {
        let gap = age_a.abs_diff(age_b);
        if gap <= AGE_GAP_GREEN_YEARS {
            flags.green.push(format!("Very similar ages ({} years apart)", gap));
        } else if gap >= AGE_GAP_YELLOW_YEARS {
            flags.yellow.push(format!("Significant age difference ({} years)", gap));
        }
    }

    let shared_methods = shared_items(&a.recovery_methods, &b.recovery_methods);
    if !shared_methods.is_empty() {
        flags
            .green
            .push(format!("Shared recovery methods: {}", shared_methods.join(", ")));
    }

    if let (Some(stage_a), Some(stage_b)) = (a.recovery_stage, b.recovery_stage) {
        if stage_a == stage_b {
            flags
                .green
                .push(format!("Both in the {} recovery stage", stage_a.as_str()));
        }
    }

    if let (Some(max_a), Some(max_b)) = (a.budget_max, b.budget_max) {
        let delta = max_a.abs_diff(max_b);
        if delta <= BUDGET_DELTA_GREEN {
            flags.green.push(format!("Budgets within ${} of each other", delta));
        } else if delta >= BUDGET_DELTA_YELLOW {
            flags.yellow.push(format!("Budgets are ${} apart", delta));
        }
    }
}

fn green_message(factor: Factor) -> Option<&'static str> {
    Some(match factor {
        Factor::Location => "Excellent location match - same area, easy logistics",
        Factor::Budget => "Budget expectations line up well",
        Factor::RecoveryCore => "Strong recovery alignment - similar stage and approach",
        Factor::LifestyleCore => "Very compatible day-to-day lifestyles",
        Factor::RecoveryEnvironment => "Agree on what a recovery-supportive home looks like",
        Factor::GenderPreferences => "Gender preferences are a mutual match",
        Factor::Schedule => "Daily schedules mesh well",
        Factor::Communication => "Communication styles complement each other",
        Factor::HousingSafety => "No smoking or pet conflicts",
        Factor::SharedInterests => "Plenty of shared interests to build on",
        Factor::Timing => "Move-in timelines line up",
        Factor::Goals => "Both articulate clear housing goals",
        Factor::Extended => return None,
    })
}

fn yellow_message(factor: Factor) -> Option<&'static str> {
    Some(match factor {
        Factor::Location => "Different areas - commuting or relocating needs discussion",
        Factor::Budget => "Budget expectations differ somewhat",
        Factor::RecoveryCore => "Recovery approaches differ - worth talking through",
        Factor::LifestyleCore => "Some lifestyle differences to negotiate",
        Factor::RecoveryEnvironment => "Different pictures of a recovery-supportive home",
        Factor::Schedule => "Schedules overlap imperfectly",
        Factor::Communication => "Communication styles may need effort",
        Factor::HousingSafety => "Review smoking and pet arrangements together",
        Factor::SharedInterests => "Few obvious shared interests",
        Factor::Timing => "Move-in timelines are weeks apart",
        Factor::Goals => "Housing goals are unclear on one side",
        Factor::GenderPreferences | Factor::Extended => return None,
    })
}

fn red_message(factor: Factor) -> Option<&'static str> {
    Some(match factor {
        Factor::Location => "Locations are far apart",
        Factor::Budget => "Budget expectations are far apart",
        Factor::RecoveryCore => "Recovery stages and approaches conflict",
        Factor::LifestyleCore => "Day-to-day lifestyles clash",
        Factor::RecoveryEnvironment => "Conflicting needs for a substance-free home",
        Factor::GenderPreferences => "Incompatible gender preferences",
        Factor::Schedule => "Daily schedules conflict",
        Factor::Communication => "Communication styles clash",
        Factor::HousingSafety => "Serious smoking or pet conflict",
        Factor::SharedInterests => "No shared interests found",
        Factor::Timing => "Move-in timelines do not align",
        Factor::Goals => "Housing goals appear incompatible",
        Factor::Extended => return None,
    })
}
