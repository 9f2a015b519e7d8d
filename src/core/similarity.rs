//! Shared similarity primitives used by the factor scorers.

/// Case-insensitive fold used for all string comparisons
#[inline]
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Overlap ratio of two string sets: shared / union, in [0.0, 1.0].
///
/// Comparison is case-insensitive. Returns `None` when either side is empty,
/// which scorers map to their neutral default - an empty list means the
/// user never answered, not that nothing overlaps.
pub fn overlap_ratio(a: &[String], b: &[String]) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let left: Vec<String> = a.iter().map(|s| fold(s)).collect();
    let right: Vec<String> = b.iter().map(|s| fold(s)).collect();

    let shared = left.iter().filter(|item| right.contains(item)).count();
    let mut union = left.clone();
    for item in &right {
        if !union.contains(item) {
            union.push(item.clone());
        }
    }

    Some(shared as f64 / union.len() as f64)
}

/// Items present in both lists, preserving the first list's order and casing
pub fn shared_items(a: &[String], b: &[String]) -> Vec<String> {
    let right: Vec<String> = b.iter().map(|s| fold(s)).collect();
    a.iter()
        .filter(|item| right.contains(&fold(item)))
        .cloned()
        .collect()
}

/// Score for two 1-5 scale values: 100 for equal, minus 25 per step apart
#[inline]
pub fn scale_closeness(a: u8, b: u8) -> u8 {
    let diff = a.abs_diff(b) as u32;
    100u32.saturating_sub(25 * diff) as u8
}

/// Weighted blend of (score, weight) components, rounded to an integer.
/// Components are on the 0-100 scale; weights need not sum to anything in
/// particular.
pub fn weighted_blend(components: &[(u8, u32)]) -> u8 {
    let total_weight: u32 = components.iter().map(|(_, w)| *w).sum();
    if total_weight == 0 {
        return 50;
    }
    let sum: f64 = components
        .iter()
        .map(|(score, weight)| f64::from(*score) * f64::from(*weight))
        .sum();
    (sum / f64::from(total_weight)).round() as u8
}
