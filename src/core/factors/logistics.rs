//! Location, budget and timing factors.

use crate::core::similarity::{fold, weighted_blend};
use crate::models::Profile;

/// Location compatibility.
///
/// Exact location string or same city+state scores 100; a substring
/// containment either way is treated as a metro-area match (85); same state
/// alone scores 75; two known but unrelated locations score 40. Either side
/// missing scores the neutral 50.
pub fn score_location(a: &Profile, b: &Profile) -> u8 {
    let (loc_a, loc_b) = match (&a.primary_location, &b.primary_location) {
        (Some(la), Some(lb)) => (fold(la), fold(lb)),
        _ => return 50,
    };

    if loc_a == loc_b {
        return 100;
    }

    let same_city = match (&a.primary_city, &b.primary_city) {
        (Some(ca), Some(cb)) => fold(ca) == fold(cb),
        _ => false,
    };
    let same_state = match (&a.primary_state, &b.primary_state) {
        (Some(sa), Some(sb)) => sa == sb,
        _ => false,
    };

    if same_city && same_state {
        return 100;
    }

    // Metro-area heuristic: "Austin" vs "Austin, TX" or a suburb naming the
    // anchor city.
    if loc_a.contains(&loc_b) || loc_b.contains(&loc_a) {
        return 85;
    }

    if same_state {
        return 75;
    }

    40
}

/// Budget alignment, from the gap between the two budget ceilings
pub fn score_budget(a: &Profile, b: &Profile) -> u8 {
    let (max_a, max_b) = match (a.budget_max, b.budget_max) {
        (Some(ma), Some(mb)) => (ma, mb),
        _ => return 50,
    };

    match max_a.abs_diff(max_b) {
        0..=50 => 100,
        51..=150 => 85,
        151..=300 => 70,
        301..=600 => 50,
        _ => 30,
    }
}

/// Move-in timing: date proximity (60%) blended with lease-duration
/// agreement (40%)
pub fn score_timing(a: &Profile, b: &Profile) -> u8 {
    let date_score = match (a.move_in_date, b.move_in_date) {
        (Some(da), Some(db)) => {
            let days = (da - db).num_days().unsigned_abs();
            match days {
                0..=7 => 100,
                8..=30 => 80,
                31..=60 => 60,
                _ => 40,
            }
        }
        _ => 50,
    };

    let lease_score = match (&a.lease_duration, &b.lease_duration) {
        (Some(la), Some(lb)) => {
            if fold(la) == fold(lb) {
                100
            } else {
                30
            }
        }
        _ => 50,
    };

    weighted_blend(&[(date_score, 60), (lease_score, 40)])
}
