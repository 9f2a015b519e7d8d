//! Housing safety and the gender preference hard filter.

use crate::core::similarity::{fold, weighted_blend};
use crate::models::{Profile, SmokingStatus};

/// Housing safety: smoking compatibility (50%) and the pet
/// ownership/comfort cross-check in each direction (25% + 25%).
pub fn score_housing_safety(a: &Profile, b: &Profile) -> u8 {
    let smoking_score = match (a.smoking_status, b.smoking_status) {
        (Some(sa), Some(sb)) => smoking_compatibility(sa, sb),
        _ => 50,
    };

    let a_pets_ok = pet_direction(a, b);
    let b_pets_ok = pet_direction(b, a);

    weighted_blend(&[(smoking_score, 50), (a_pets_ok, 25), (b_pets_ok, 25)])
}

/// Can `other` live with `owner`'s pets?
fn pet_direction(owner: &Profile, other: &Profile) -> u8 {
    if !owner.pets_owned {
        return 100;
    }
    if other.pets_comfortable {
        100
    } else {
        0
    }
}

fn smoking_compatibility(a: SmokingStatus, b: SmokingStatus) -> u8 {
    use SmokingStatus::*;

    if a == b {
        return 100;
    }

    let pair = if a as u8 <= b as u8 { (a, b) } else { (b, a) };
    match pair {
        (NonSmoker, OutsideOnly) => 60,
        (NonSmoker, Occasional) => 35,
        // A non-smoker next to a regular smoker is the worst pairing here
        (NonSmoker, Regular) => 10,
        (OutsideOnly, Occasional) => 75,
        (OutsideOnly, Regular) => 55,
        (Occasional, Regular) => 80,
        _ => 50,
    }
}

/// Gender preference compatibility - a HARD filter.
///
/// If either side's stated roommate-gender preference excludes the other's
/// identity, the factor scores 0 no matter what, and the aggregate reflects
/// it through this factor's weight plus a red flag. Mutually compatible
/// stated preferences score 100, with a +10 bonus (capped) when both sides
/// are gender-inclusive. Indeterminate pairings (a concrete preference
/// against an unknown identity) stay at the neutral 50.
pub fn score_gender_preferences(a: &Profile, b: &Profile) -> u8 {
    let a_accepts_b = accepts(&a.preferred_roommate_gender, &b.gender_identity);
    let b_accepts_a = accepts(&b.preferred_roommate_gender, &a.gender_identity);

    match (a_accepts_b, b_accepts_a) {
        (Some(false), _) | (_, Some(false)) => 0,
        (Some(true), Some(true)) => {
            let mut score = 100u8;
            if a.gender_inclusive && b.gender_inclusive {
                score = score.saturating_add(10).min(100);
            }
            score
        }
        _ => 50,
    }
}

/// `None` = indeterminate (no stated preference is treated as accepting;
/// a concrete preference against an unknown identity cannot be decided)
fn accepts(preference: &Option<String>, identity: &Option<String>) -> Option<bool> {
    let pref = match preference {
        Some(p) => fold(p),
        None => return Some(true),
    };
    if matches!(pref.as_str(), "any" | "no_preference" | "no-preference") {
        return Some(true);
    }

    let identity = match identity {
        Some(i) => fold(i),
        None => return None,
    };
    Some(pref == identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gendered(identity: &str, preference: &str) -> Profile {
        Profile {
            gender_identity: Some(identity.to_string()),
            preferred_roommate_gender: Some(preference.to_string()),
            ..Profile::default()
        }
    }

    #[test]
    fn test_gender_hard_filter() {
        let a = gendered("female", "female");
        let b = gendered("male", "any");
        // A's preference excludes B even though B accepts A
        assert_eq!(score_gender_preferences(&a, &b), 0);
        assert_eq!(score_gender_preferences(&b, &a), 0);
    }

    #[test]
    fn test_gender_mutual_match() {
        let a = gendered("female", "female");
        let b = gendered("female", "female");
        assert_eq!(score_gender_preferences(&a, &b), 100);
    }

    #[test]
    fn test_gender_any_preference() {
        let a = gendered("non-binary", "any");
        let b = gendered("male", "no_preference");
        assert_eq!(score_gender_preferences(&a, &b), 100);
    }

    #[test]
    fn test_gender_no_stated_preference_accepts() {
        let a = Profile {
            gender_identity: Some("male".to_string()),
            ..Profile::default()
        };
        let b = gendered("female", "any");
        assert_eq!(score_gender_preferences(&a, &b), 100);
    }

    #[test]
    fn test_gender_unknown_identity_indeterminate() {
        let a = gendered("female", "female");
        let b = Profile {
            preferred_roommate_gender: Some("any".to_string()),
            ..Profile::default()
        };
        assert_eq!(score_gender_preferences(&a, &b), 50);
    }

    #[test]
    fn test_smoking_nonsmoker_vs_regular_heavily_penalized() {
        let a = Profile {
            smoking_status: Some(SmokingStatus::NonSmoker),
            ..Profile::default()
        };
        let b = Profile {
            smoking_status: Some(SmokingStatus::Regular),
            ..Profile::default()
        };
        // smoking 10*.5 + pets 100*.25 + 100*.25 = 55
        assert_eq!(score_housing_safety(&a, &b), 55);
    }

    #[test]
    fn test_smoking_same_status() {
        let a = Profile {
            smoking_status: Some(SmokingStatus::OutsideOnly),
            ..Profile::default()
        };
        assert_eq!(score_housing_safety(&a, &a.clone()), 100);
    }

    #[test]
    fn test_pet_owner_vs_uncomfortable() {
        let owner = Profile {
            pets_owned: true,
            smoking_status: Some(SmokingStatus::NonSmoker),
            ..Profile::default()
        };
        let uncomfortable = Profile {
            pets_comfortable: false,
            smoking_status: Some(SmokingStatus::NonSmoker),
            ..Profile::default()
        };
        // smoking 100*.5 + owner-direction 0*.25 + other-direction 100*.25 = 75
        assert_eq!(score_housing_safety(&owner, &uncomfortable), 75);
    }

    #[test]
    fn test_pets_symmetric_weighting() {
        let owner = Profile {
            pets_owned: true,
            ..Profile::default()
        };
        let uncomfortable = Profile::default();
        assert_eq!(
            score_housing_safety(&owner, &uncomfortable),
            score_housing_safety(&uncomfortable, &owner)
        );
    }

    #[test]
    fn test_safety_missing_smoking_neutral() {
        assert_eq!(score_housing_safety(&Profile::default(), &Profile::default()), 75);
    }
}
