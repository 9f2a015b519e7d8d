//! Deal-breaker evaluation - an independent veto layer.
//!
//! Kept separate from scoring on purpose: a deal breaker is an exclusion
//! decision, not a graded score. The evaluator only reports violated rules;
//! whether an `absolute` entry actually excludes a pairing is the caller's
//! call (analytics, for one, wants scores without the veto applied).

use crate::models::{DealBreakerReport, DealBreakerRule, Profile, SmokingStatus};

/// Evaluate every deal-breaker rule in both directions.
///
/// "Absolute" rules mark complete incompatibility; "strong" rules are
/// serious conflicts surfaced as red flags. A rule appears at most once in
/// the report even when both directions trip it.
pub fn check_deal_breakers(a: &Profile, b: &Profile) -> DealBreakerReport {
    let mut report = DealBreakerReport::default();

    for (holder, other) in [(a, b), (b, a)] {
        check_direction(holder, other, &mut report);
    }

    report
}

/// Apply `holder`'s veto flags against `other`'s attributes
fn check_direction(holder: &Profile, other: &Profile, report: &mut DealBreakerReport) {
    let flags = &holder.deal_breakers;

    if flags.substance_use && !other.substance_free_home_required {
        push_unique(&mut report.absolute, DealBreakerRule::SubstanceUse);
    }
    if flags.financial_issues && other.financially_stable == Some(false) {
        push_unique(&mut report.absolute, DealBreakerRule::FinancialReliability);
    }

    if flags.pets && other.pets_owned {
        push_unique(&mut report.strong, DealBreakerRule::Pets);
    }
    if flags.smoking && smokes(other) {
        push_unique(&mut report.strong, DealBreakerRule::Smoking);
    }
    // High noise tolerance is the stored proxy for a loud household
    if flags.loudness && other.noise_tolerance >= 4 {
        push_unique(&mut report.strong, DealBreakerRule::Loudness);
    }
    if flags.uncleanliness && other.cleanliness_level <= 2 {
        push_unique(&mut report.strong, DealBreakerRule::Uncleanliness);
    }
}

fn smokes(profile: &Profile) -> bool {
    matches!(
        profile.smoking_status,
        Some(SmokingStatus::OutsideOnly)
            | Some(SmokingStatus::Occasional)
            | Some(SmokingStatus::Regular)
    )
}

fn push_unique(rules: &mut Vec<DealBreakerRule>, rule: DealBreakerRule) {
    if !rules.contains(&rule) {
        rules.push(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DealBreakers;

    #[test]
    fn test_clear_by_default() {
        let report = check_deal_breakers(&Profile::default(), &Profile::default());
        assert!(report.is_clear());
    }

    #[test]
    fn test_pets_strong_rule() {
        let a = Profile {
            deal_breakers: DealBreakers { pets: true, ..DealBreakers::default() },
            ..Profile::default()
        };
        let b = Profile { pets_owned: true, ..Profile::default() };

        let report = check_deal_breakers(&a, &b);
        assert_eq!(report.strong, vec![DealBreakerRule::Pets]);
        assert!(report.absolute.is_empty());
    }

    #[test]
    fn test_substance_use_absolute_rule() {
        let a = Profile {
            deal_breakers: DealBreakers { substance_use: true, ..DealBreakers::default() },
            ..Profile::default()
        };
        let b = Profile { substance_free_home_required: false, ..Profile::default() };

        let report = check_deal_breakers(&a, &b);
        assert_eq!(report.absolute, vec![DealBreakerRule::SubstanceUse]);
        assert!(report.has_absolute());
    }

    #[test]
    fn test_financial_rule_needs_explicit_instability() {
        let a = Profile::default(); // financial_issues defaults true
        let unstable = Profile { financially_stable: Some(false), ..Profile::default() };
        let unknown = Profile::default();

        assert_eq!(
            check_deal_breakers(&a, &unstable).absolute,
            vec![DealBreakerRule::FinancialReliability]
        );
        // Unknown stability is not a violation
        assert!(check_deal_breakers(&a, &unknown).is_clear());
    }

    #[test]
    fn test_bidirectional_single_entry() {
        // Both sides flag pets and both own pets: one entry, not two
        let a = Profile {
            pets_owned: true,
            deal_breakers: DealBreakers { pets: true, ..DealBreakers::default() },
            ..Profile::default()
        };
        let report = check_deal_breakers(&a, &a.clone());
        assert_eq!(report.strong, vec![DealBreakerRule::Pets]);
    }

    #[test]
    fn test_direction_matters() {
        // B owns pets but has no pet deal breaker; A has the deal breaker
        // but no pets. Only A's flag against B's attribute trips.
        let a = Profile {
            deal_breakers: DealBreakers { pets: true, ..DealBreakers::default() },
            ..Profile::default()
        };
        let b = Profile { pets_owned: true, ..Profile::default() };

        assert!(!check_deal_breakers(&a, &b).is_clear());

        // Reverse the attribute: nobody owns pets, nothing trips
        let c = Profile {
            deal_breakers: DealBreakers { pets: true, ..DealBreakers::default() },
            ..Profile::default()
        };
        assert!(check_deal_breakers(&c, &Profile::default()).is_clear());
    }

    #[test]
    fn test_loudness_and_uncleanliness_thresholds() {
        let strict = Profile {
            deal_breakers: DealBreakers {
                loudness: true,
                uncleanliness: true,
                ..DealBreakers::default()
            },
            ..Profile::default()
        };
        let loud_and_messy = Profile {
            noise_tolerance: 4,
            cleanliness_level: 2,
            ..Profile::default()
        };
        let moderate = Profile::default(); // 3 / 3

        let report = check_deal_breakers(&strict, &loud_and_messy);
        assert!(report.strong.contains(&DealBreakerRule::Loudness));
        assert!(report.strong.contains(&DealBreakerRule::Uncleanliness));

        assert!(check_deal_breakers(&strict, &moderate).is_clear());
    }

    #[test]
    fn test_smoking_rule_covers_any_smoking() {
        let a = Profile {
            deal_breakers: DealBreakers { smoking: true, ..DealBreakers::default() },
            ..Profile::default()
        };
        let outside = Profile {
            smoking_status: Some(SmokingStatus::OutsideOnly),
            ..Profile::default()
        };
        let non_smoker = Profile {
            smoking_status: Some(SmokingStatus::NonSmoker),
            ..Profile::default()
        };

        assert_eq!(check_deal_breakers(&a, &outside).strong, vec![DealBreakerRule::Smoking]);
        assert!(check_deal_breakers(&a, &non_smoker).is_clear());
    }
}
