//! Interpersonal factors: communication styles, shared interests, and the
//! low-weight free-text heuristics.

use crate::core::similarity::{fold, overlap_ratio, weighted_blend};
use crate::models::Profile;

/// Communication compatibility: communication style (40%), conflict
/// resolution style (35%), chore sharing style (25%).
///
/// Each component maps the style pair through a fixed compatibility matrix
/// rather than raw equality - some differing styles work well together,
/// others grind.
pub fn score_communication(a: &Profile, b: &Profile) -> u8 {
    let communication = style_component(
        &a.communication_style,
        &b.communication_style,
        communication_matrix,
    );
    let conflict = style_component(
        &a.conflict_resolution_style,
        &b.conflict_resolution_style,
        conflict_matrix,
    );
    let chores = style_component(&a.chore_sharing_style, &b.chore_sharing_style, chore_matrix);

    weighted_blend(&[(communication, 40), (conflict, 35), (chores, 25)])
}

/// Shared interests: interests overlap (60%), important qualities overlap
/// (40%)
pub fn score_shared_interests(a: &Profile, b: &Profile) -> u8 {
    let interests = ratio_score(overlap_ratio(&a.interests, &b.interests));
    let qualities = ratio_score(overlap_ratio(&a.important_qualities, &b.important_qualities));
    weighted_blend(&[(interests, 60), (qualities, 40)])
}

/// Goals presence heuristic: both wrote housing goals 75, one did 60,
/// neither 50. Intentionally coarse - no text analysis.
pub fn score_goals(a: &Profile, b: &Profile) -> u8 {
    presence_score(a.housing_goals.is_some(), b.housing_goals.is_some())
}

/// Extended-profile presence heuristic over the free-text about section
pub fn score_extended(a: &Profile, b: &Profile) -> u8 {
    presence_score(a.about_me.is_some(), b.about_me.is_some())
}

fn presence_score(a: bool, b: bool) -> u8 {
    match (a, b) {
        (true, true) => 75,
        (true, false) | (false, true) => 60,
        (false, false) => 50,
    }
}

fn ratio_score(ratio: Option<f64>) -> u8 {
    match ratio {
        Some(r) => (r * 100.0).round() as u8,
        None => 50,
    }
}

fn style_component(
    a: &Option<String>,
    b: &Option<String>,
    matrix: fn(&str, &str) -> Option<u8>,
) -> u8 {
    match (a, b) {
        (Some(sa), Some(sb)) => {
            let (fa, fb) = (fold(sa), fold(sb));
            // Order-insensitive lookup keeps every matrix symmetric
            let pair = if fa <= fb { (fa, fb) } else { (fb, fa) };
            matrix(&pair.0, &pair.1).unwrap_or(50)
        }
        _ => 50,
    }
}

fn communication_matrix(a: &str, b: &str) -> Option<u8> {
    Some(match (a, b) {
        ("direct", "direct")
        | ("diplomatic", "diplomatic")
        | ("expressive", "expressive")
        | ("reserved", "reserved") => 100,
        ("diplomatic", "direct") | ("direct", "diplomatic") => 80,
        ("direct", "expressive") => 75,
        ("direct", "reserved") => 55,
        ("diplomatic", "expressive") | ("diplomatic", "reserved") => 80,
        ("expressive", "reserved") => 50,
        _ => return None,
    })
}

fn conflict_matrix(a: &str, b: &str) -> Option<u8> {
    Some(match (a, b) {
        ("avoid", "avoid")
        | ("cool_off", "cool_off")
        | ("mediator", "mediator")
        | ("talk_it_out", "talk_it_out") => 100,
        ("cool_off", "talk_it_out") => 75,
        ("mediator", "talk_it_out") => 80,
        ("avoid", "talk_it_out") => 40,
        ("cool_off", "mediator") => 75,
        ("avoid", "cool_off") => 60,
        ("avoid", "mediator") => 55,
        _ => return None,
    })
}

fn chore_matrix(a: &str, b: &str) -> Option<u8> {
    Some(match (a, b) {
        ("as_needed", "as_needed")
        | ("flexible", "flexible")
        | ("hire_out", "hire_out")
        | ("schedule", "schedule") => 100,
        ("flexible", "schedule") => 85,
        ("as_needed", "flexible") => 85,
        ("as_needed", "schedule") => 60,
        ("hire_out", "schedule") => 70,
        ("as_needed", "hire_out") => 65,
        ("flexible", "hire_out") => 80,
        _ => return None,
    })
}
