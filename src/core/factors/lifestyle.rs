//! Day-to-day living factors: lifestyle scales and schedules.

use crate::core::similarity::{fold, scale_closeness, weighted_blend};
use crate::models::Profile;

/// Lifestyle core: social level (35%), cleanliness (35%), noise tolerance
/// (30%). Each 1-5 scale difference converts via `100 - 25 * |diff|`.
pub fn score_lifestyle_core(a: &Profile, b: &Profile) -> u8 {
    weighted_blend(&[
        (scale_closeness(a.social_level, b.social_level), 35),
        (scale_closeness(a.cleanliness_level, b.cleanliness_level), 35),
        (scale_closeness(a.noise_tolerance, b.noise_tolerance), 30),
    ])
}

/// Daily schedule: bedtime preference (40%), work schedule (35%),
/// sleep-pattern flags (25%)
pub fn score_schedule(a: &Profile, b: &Profile) -> u8 {
    let bedtime_score = match (&a.bedtime_preference, &b.bedtime_preference) {
        (Some(pa), Some(pb)) => bedtime_compatibility(&fold(pa), &fold(pb)),
        _ => 50,
    };

    let work_score = match (&a.work_schedule, &b.work_schedule) {
        (Some(wa), Some(wb)) => work_compatibility(&fold(wa), &fold(wb)),
        _ => 50,
    };

    let flags_matching = [
        a.early_riser == b.early_riser,
        a.night_owl == b.night_owl,
    ]
    .iter()
    .filter(|m| **m)
    .count();
    let flags_score = match flags_matching {
        2 => 100,
        1 => 75,
        _ => 50,
    };

    weighted_blend(&[(bedtime_score, 40), (work_score, 35), (flags_score, 25)])
}

/// Exact match 100, one step apart on the early/moderate/late ordering (or
/// a "varies" answer) 75, opposite ends 25
fn bedtime_compatibility(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a == "varies" || b == "varies" {
        return 75;
    }

    let order = ["early", "moderate", "late"];
    match (
        order.iter().position(|v| *v == a),
        order.iter().position(|v| *v == b),
    ) {
        (Some(ia), Some(ib)) if ia.abs_diff(ib) == 1 => 75,
        _ => 25,
    }
}

/// Exact match 100, workable combination 75, everything else 50
fn work_compatibility(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }

    // Flexible arrangements combine well with anything; a night shift next
    // to a standard day job means the home is rarely crowded but sleep
    // schedules clash.
    let flexible = ["flexible", "remote", "part_time"];
    if flexible.contains(&a) || flexible.contains(&b) {
        return 75;
    }

    let pair = if a < b { (a, b) } else { (b, a) };
    match pair {
        ("rotating", "standard") | ("night", "rotating") => 75,
        _ => 50,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scales(social: u8, clean: u8, noise: u8) -> Profile {
        Profile {
            social_level: social,
            cleanliness_level: clean,
            noise_tolerance: noise,
            ..Profile::default()
        }
    }

    #[test]
    fn test_lifestyle_identical() {
        let a = scales(4, 5, 2);
        assert_eq!(score_lifestyle_core(&a, &a.clone()), 100);
    }

    #[test]
    fn test_lifestyle_one_step_each() {
        let a = scales(3, 3, 3);
        let b = scales(4, 4, 4);
        assert_eq!(score_lifestyle_core(&a, &b), 75);
    }

    #[test]
    fn test_lifestyle_opposites() {
        let a = scales(1, 1, 1);
        let b = scales(5, 5, 5);
        assert_eq!(score_lifestyle_core(&a, &b), 0);
    }

    #[test]
    fn test_lifestyle_symmetric() {
        let a = scales(2, 5, 1);
        let b = scales(4, 2, 3);
        assert_eq!(score_lifestyle_core(&a, &b), score_lifestyle_core(&b, &a));
    }

    #[test]
    fn test_bedtime_exact_and_adjacent() {
        assert_eq!(bedtime_compatibility("early", "early"), 100);
        assert_eq!(bedtime_compatibility("early", "moderate"), 75);
        assert_eq!(bedtime_compatibility("early", "late"), 25);
        assert_eq!(bedtime_compatibility("varies", "late"), 75);
    }

    #[test]
    fn test_work_compatibility_table() {
        assert_eq!(work_compatibility("standard", "standard"), 100);
        assert_eq!(work_compatibility("standard", "flexible"), 75);
        assert_eq!(work_compatibility("night", "standard"), 50);
        assert_eq!(work_compatibility("night", "rotating"), 75);
    }

    #[test]
    fn test_schedule_full_match() {
        let a = Profile {
            bedtime_preference: Some("early".to_string()),
            work_schedule: Some("standard".to_string()),
            early_riser: true,
            night_owl: false,
            ..Profile::default()
        };
        assert_eq!(score_schedule(&a, &a.clone()), 100);
    }

    #[test]
    fn test_schedule_clash() {
        let a = Profile {
            bedtime_preference: Some("early".to_string()),
            work_schedule: Some("standard".to_string()),
            early_riser: true,
            night_owl: false,
            ..Profile::default()
        };
        let b = Profile {
            bedtime_preference: Some("late".to_string()),
            work_schedule: Some("night".to_string()),
            early_riser: false,
            night_owl: true,
            ..Profile::default()
        };
        // bedtime 25*.4 + work 50*.35 + flags 50*.25 = 40
        assert_eq!(score_schedule(&a, &b), 40);
    }

    #[test]
    fn test_schedule_missing_data_neutral() {
        // bedtime 50*.4 + work 50*.35 + flags 100*.25 = 62.5 -> 63
        assert_eq!(score_schedule(&Profile::default(), &Profile::default()), 63);
    }
}
