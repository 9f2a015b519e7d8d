//! Tolerant normalization of raw store records into canonical [`Profile`]s.
//!
//! Store records arrive with inconsistent key naming (snake_case and
//! camelCase), stringified numbers and booleans, and list fields stored
//! either as arrays or comma-separated strings. All of that reconciliation
//! happens here and only here - scorers see canonical field names and
//! validated values.
//!
//! Normalization never fails on data quality. A bad field degrades to its
//! documented default; the whole record is rejected (`None`) only when the
//! input is not a JSON object or carries no usable user id.

use chrono::{Datelike, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::models::{DealBreakers, Profile, RecoveryStage, SmokingStatus};

type Obj = Map<String, Value>;

/// Normalize a raw store record, deriving age against today's date.
pub fn normalize(raw: &Value) -> Option<Profile> {
    normalize_at(raw, Utc::now().date_naive())
}

/// Normalize a raw store record against an explicit `today`.
///
/// Age derivation is the only clock-dependent step; pinning `today` makes
/// the whole function pure and repeatable.
pub fn normalize_at(raw: &Value, today: NaiveDate) -> Option<Profile> {
    let obj = raw.as_object()?;

    let user_id = str_field(obj, &["userId", "user_id", "$id", "id"])?;

    let mut profile = Profile {
        user_id,
        ..Profile::default()
    };

    profile.first_name = str_field(obj, &["firstName", "first_name", "name"]).unwrap_or_default();

    // Age: prefer a date of birth; fall back to a stored age value.
    profile.age = date_field(obj, &["dateOfBirth", "date_of_birth", "dob"])
        .and_then(|dob| age_on(dob, today))
        .or_else(|| {
            int_field(obj, &["age"]).and_then(|n| u8::try_from(n).ok()).filter(|n| *n > 0)
        });

    profile.primary_city = str_field(obj, &["primaryCity", "primary_city", "city"]);
    profile.primary_state =
        str_field(obj, &["primaryState", "primary_state", "state"]).and_then(valid_state);
    profile.primary_location = str_field(obj, &["primaryLocation", "primary_location"])
        .or_else(|| compose_location(&profile.primary_city, &profile.primary_state));
    if let Some(radius) = int_field(obj, &["searchRadiusMiles", "search_radius_miles"]) {
        if let Ok(radius) = u16::try_from(radius) {
            if radius > 0 {
                profile.search_radius_miles = radius;
            }
        }
    }

    profile.budget_min = money_field(obj, &["budgetMin", "budget_min"]);
    profile.budget_max = money_field(obj, &["budgetMax", "budget_max"]);
    if let (Some(min), Some(max)) = (profile.budget_min, profile.budget_max) {
        // Transposed bounds are treated as swapped input, not discarded.
        if min > max {
            profile.budget_min = Some(max);
            profile.budget_max = Some(min);
        }
    }

    profile.recovery_stage = str_field(obj, &["recoveryStage", "recovery_stage"])
        .and_then(|s| RecoveryStage::parse(&s));
    profile.recovery_methods = list_field(obj, &["recoveryMethods", "recovery_methods"]);
    profile.program_types = list_field(obj, &["programTypes", "program_types"]);
    profile.primary_issues = list_field(obj, &["primaryIssues", "primary_issues"]);
    profile.spiritual_affiliation =
        str_field(obj, &["spiritualAffiliation", "spiritual_affiliation"]);
    profile.substance_free_home_required =
        bool_field(obj, &["substanceFreeHomeRequired", "substance_free_home_required"])
            .unwrap_or(true);

    profile.social_level = scale_field(obj, &["socialLevel", "social_level"]);
    profile.cleanliness_level = scale_field(obj, &["cleanlinessLevel", "cleanliness_level"]);
    profile.noise_tolerance = scale_field(obj, &["noiseTolerance", "noise_tolerance"]);

    profile.work_schedule = str_field(obj, &["workSchedule", "work_schedule"]);
    profile.bedtime_preference = str_field(obj, &["bedtimePreference", "bedtime_preference"]);
    profile.early_riser = bool_field(obj, &["earlyRiser", "early_riser"]).unwrap_or(false);
    profile.night_owl = bool_field(obj, &["nightOwl", "night_owl"]).unwrap_or(false);

    profile.communication_style = str_field(obj, &["communicationStyle", "communication_style"]);
    profile.conflict_resolution_style =
        str_field(obj, &["conflictResolutionStyle", "conflict_resolution_style"]);
    profile.chore_sharing_style = str_field(obj, &["choreSharingStyle", "chore_sharing_style"]);

    profile.smoking_status =
        str_field(obj, &["smokingStatus", "smoking_status"]).and_then(|s| SmokingStatus::parse(&s));
    profile.pets_owned = bool_field(obj, &["petsOwned", "pets_owned"]).unwrap_or(false);
    profile.pets_comfortable =
        bool_field(obj, &["petsComfortable", "pets_comfortable"]).unwrap_or(false);

    profile.interests = list_field(obj, &["interests"]);
    profile.important_qualities = list_field(obj, &["importantQualities", "important_qualities"]);

    profile.move_in_date = date_field(obj, &["moveInDate", "move_in_date"]);
    profile.lease_duration = str_field(obj, &["leaseDuration", "lease_duration"]);

    profile.gender_identity = str_field(obj, &["genderIdentity", "gender_identity"]);
    profile.preferred_roommate_gender =
        str_field(obj, &["preferredRoommateGender", "preferred_roommate_gender"]);
    profile.gender_inclusive =
        bool_field(obj, &["genderInclusive", "gender_inclusive"]).unwrap_or(false);

    profile.open_to_home_meetings =
        bool_field(obj, &["openToHomeMeetings", "open_to_home_meetings"]).unwrap_or(false);
    profile.prefers_sober_social =
        bool_field(obj, &["prefersSoberSocial", "prefers_sober_social"]).unwrap_or(false);
    profile.wants_accountability_partner =
        bool_field(obj, &["wantsAccountabilityPartner", "wants_accountability_partner"])
            .unwrap_or(false);

    profile.housing_goals = str_field(obj, &["housingGoals", "housing_goals", "goals"]);
    profile.about_me = str_field(obj, &["aboutMe", "about_me", "bio"]);
    profile.financially_stable = bool_field(obj, &["financiallyStable", "financially_stable"]);

    profile.deal_breakers = deal_breakers(obj);

    profile.is_active = bool_field(obj, &["isActive", "is_active"]).unwrap_or(true);
    profile.profile_completed =
        bool_field(obj, &["profileCompleted", "profile_completed"]).unwrap_or(false);
    profile.completion_percentage =
        int_field(obj, &["completionPercentage", "completion_percentage"])
            .map(|n| n.clamp(0, 100) as u8)
            .unwrap_or(0);

    tracing::trace!(user_id = %profile.user_id, "normalized profile record");
    Some(profile)
}

/// Calendar-aware age. `None` for future dates or implausible results.
fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u8> {
    if dob > today {
        return None;
    }
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    u8::try_from(age).ok()
}

/// A state code must be exactly two ASCII letters; anything else is absent
fn valid_state(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}

fn compose_location(city: &Option<String>, state: &Option<String>) -> Option<String> {
    match (city, state) {
        (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
        (Some(city), None) => Some(city.clone()),
        _ => None,
    }
}

fn deal_breakers(obj: &Obj) -> DealBreakers {
    // A nested dealBreakers object wins; flat dealBreakerX keys are the
    // legacy shape.
    if let Some(nested) = field(obj, &["dealBreakers", "deal_breakers"]).and_then(Value::as_object)
    {
        return DealBreakers {
            substance_use: bool_field(nested, &["substanceUse", "substance_use"])
                .unwrap_or(false),
            pets: bool_field(nested, &["pets"]).unwrap_or(false),
            smoking: bool_field(nested, &["smoking"]).unwrap_or(false),
            loudness: bool_field(nested, &["loudness"]).unwrap_or(false),
            uncleanliness: bool_field(nested, &["uncleanliness"]).unwrap_or(false),
            financial_issues: bool_field(nested, &["financialIssues", "financial_issues"])
                .unwrap_or(true),
        };
    }

    DealBreakers {
        substance_use: bool_field(obj, &["dealBreakerSubstanceUse", "deal_breaker_substance_use"])
            .unwrap_or(false),
        pets: bool_field(obj, &["dealBreakerPets", "deal_breaker_pets"]).unwrap_or(false),
        smoking: bool_field(obj, &["dealBreakerSmoking", "deal_breaker_smoking"]).unwrap_or(false),
        loudness: bool_field(obj, &["dealBreakerLoudness", "deal_breaker_loudness"])
            .unwrap_or(false),
        uncleanliness: bool_field(obj, &["dealBreakerUncleanliness", "deal_breaker_uncleanliness"])
            .unwrap_or(false),
        financial_issues: bool_field(
            obj,
            &["dealBreakerFinancialIssues", "deal_breaker_financial_issues"],
        )
        .unwrap_or(true),
    }
}

fn field<'a>(obj: &'a Obj, names: &[&str]) -> Option<&'a Value> {
    names.iter().filter_map(|name| obj.get(*name)).find(|v| !v.is_null())
}

/// Non-empty trimmed string
fn str_field(obj: &Obj, names: &[&str]) -> Option<String> {
    field(obj, names)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Integer, accepting native numbers and stringified numbers
fn int_field(obj: &Obj, names: &[&str]) -> Option<i64> {
    let value = field(obj, names)?;
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    }
}

/// Boolean, accepting native booleans, "true"/"false" strings and 0/1
fn bool_field(obj: &Obj, names: &[&str]) -> Option<bool> {
    let value = field(obj, names)?;
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Non-negative dollar amount
fn money_field(obj: &Obj, names: &[&str]) -> Option<u32> {
    int_field(obj, names).and_then(|n| u32::try_from(n).ok())
}

/// 1-5 scale with a neutral default of 3, clamped
fn scale_field(obj: &Obj, names: &[&str]) -> u8 {
    int_field(obj, names).map(|n| n.clamp(1, 5) as u8).unwrap_or(3)
}

/// List field: accepts a JSON array (non-string entries skipped) or a
/// comma-separated string. Entries are trimmed, empties dropped, and
/// duplicates removed case-insensitively keeping first occurrence.
fn list_field(obj: &Obj, names: &[&str]) -> Vec<String> {
    let raw: Vec<String> = match field(obj, names) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for item in raw {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        let folded = trimmed.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        out.push(trimmed.to_string());
    }
    out
}

/// Date in `YYYY-MM-DD` form, or the date part of an RFC 3339 timestamp
fn date_field(obj: &Obj, names: &[&str]) -> Option<NaiveDate> {
    let s = str_field(obj, names)?;
    let date_part = s.split('T').next().unwrap_or(&s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
