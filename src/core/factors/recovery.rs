//! Recovery-journey factors: stage/method alignment and home environment.

use crate::core::similarity::{fold, overlap_ratio, weighted_blend};
use crate::models::Profile;

/// Recovery core: stage proximity (40%), shared recovery methods (35%),
/// shared primary issues (25%).
///
/// Stage proximity walks the fixed stage ordering - same stage scores 100
/// and each step apart costs 25 points. Set overlaps use the shared/union
/// ratio; a side with no data leaves that component at the neutral 50.
pub fn score_recovery_core(a: &Profile, b: &Profile) -> u8 {
    let stage_score = match (a.recovery_stage, b.recovery_stage) {
        (Some(sa), Some(sb)) => {
            let diff = sa.ordinal().abs_diff(sb.ordinal()) as u32;
            100u32.saturating_sub(25 * diff) as u8
        }
        _ => 50,
    };

    let methods_score = ratio_score(overlap_ratio(&a.recovery_methods, &b.recovery_methods));
    let issues_score = ratio_score(overlap_ratio(&a.primary_issues, &b.primary_issues));

    weighted_blend(&[(stage_score, 40), (methods_score, 35), (issues_score, 25)])
}

/// Recovery environment: substance-free-home agreement (50%), spiritual
/// affiliation (30%), support preference flags (20%).
///
/// The substance-free component is a near-hard requirement - agreement
/// scores 100, disagreement 0.
pub fn score_recovery_environment(a: &Profile, b: &Profile) -> u8 {
    let substance_free_score =
        if a.substance_free_home_required == b.substance_free_home_required {
            100
        } else {
            0
        };

    let spiritual_score = match (&a.spiritual_affiliation, &b.spiritual_affiliation) {
        (Some(sa), Some(sb)) => {
            if fold(sa) == fold(sb) {
                100
            } else {
                40
            }
        }
        _ => 50,
    };

    let support_pairs = [
        (a.open_to_home_meetings, b.open_to_home_meetings),
        (a.prefers_sober_social, b.prefers_sober_social),
        (a.wants_accountability_partner, b.wants_accountability_partner),
    ];
    let support_total: u32 = support_pairs
        .iter()
        .map(|(fa, fb)| if fa == fb { 100u32 } else { 50 })
        .sum();
    let support_score = (support_total / support_pairs.len() as u32) as u8;

    weighted_blend(&[
        (substance_free_score, 50),
        (spiritual_score, 30),
        (support_score, 20),
    ])
}

fn ratio_score(ratio: Option<f64>) -> u8 {
    match ratio {
        Some(r) => (r * 100.0).round() as u8,
        None => 50,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecoveryStage;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recovery_core_identical() {
        let a = Profile {
            recovery_stage: Some(RecoveryStage::Stable),
            recovery_methods: list(&["AA", "therapy"]),
            primary_issues: list(&["alcohol"]),
            ..Profile::default()
        };
        assert_eq!(score_recovery_core(&a, &a.clone()), 100);
    }

    #[test]
    fn test_recovery_core_stage_distance() {
        let a = Profile {
            recovery_stage: Some(RecoveryStage::Early),
            ..Profile::default()
        };
        let b = Profile {
            recovery_stage: Some(RecoveryStage::LongTerm),
            ..Profile::default()
        };
        // stage 25, methods 50, issues 50: 25*.4 + 50*.35 + 50*.25 = 40
        assert_eq!(score_recovery_core(&a, &b), 40);
    }

    #[test]
    fn test_recovery_core_adjacent_stages() {
        let a = Profile {
            recovery_stage: Some(RecoveryStage::Stabilizing),
            ..Profile::default()
        };
        let b = Profile {
            recovery_stage: Some(RecoveryStage::Stable),
            ..Profile::default()
        };
        // stage 75, methods 50, issues 50 = 60
        assert_eq!(score_recovery_core(&a, &b), 60);
    }

    #[test]
    fn test_recovery_core_no_data_neutral() {
        assert_eq!(score_recovery_core(&Profile::default(), &Profile::default()), 50);
    }

    #[test]
    fn test_recovery_core_symmetric() {
        let a = Profile {
            recovery_stage: Some(RecoveryStage::Early),
            recovery_methods: list(&["AA", "NA", "therapy"]),
            ..Profile::default()
        };
        let b = Profile {
            recovery_stage: Some(RecoveryStage::Stable),
            recovery_methods: list(&["AA"]),
            ..Profile::default()
        };
        assert_eq!(score_recovery_core(&a, &b), score_recovery_core(&b, &a));
    }

    #[test]
    fn test_environment_substance_free_mismatch_dominates() {
        let a = Profile {
            substance_free_home_required: true,
            ..Profile::default()
        };
        let b = Profile {
            substance_free_home_required: false,
            ..Profile::default()
        };
        // substance 0*.5 + spiritual 50*.3 + support 100*.2 = 35
        assert_eq!(score_recovery_environment(&a, &b), 35);
    }

    #[test]
    fn test_environment_full_agreement() {
        let a = Profile {
            spiritual_affiliation: Some("Christian".to_string()),
            open_to_home_meetings: true,
            ..Profile::default()
        };
        assert_eq!(score_recovery_environment(&a, &a.clone()), 100);
    }

    #[test]
    fn test_environment_spiritual_mismatch() {
        let a = Profile {
            spiritual_affiliation: Some("Christian".to_string()),
            ..Profile::default()
        };
        let b = Profile {
            spiritual_affiliation: Some("Buddhist".to_string()),
            ..Profile::default()
        };
        // substance 100*.5 + spiritual 40*.3 + support 100*.2 = 82
        assert_eq!(score_recovery_environment(&a, &b), 82);
    }

    #[test]
    fn test_environment_support_flag_differences() {
        let a = Profile {
            open_to_home_meetings: true,
            prefers_sober_social: true,
            ..Profile::default()
        };
        let b = Profile::default();
        // support flags: 50, 50, 100 -> 66; 100*.5 + 50*.3 + 66*.2 = 78
        assert_eq!(score_recovery_environment(&a, &b), 78);
    }
}
