use serde::{Deserialize, Serialize};

/// Recovery stage, ordered from newest to most established.
///
/// The ordering matters: stage proximity scoring uses the ordinal distance
/// between two stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStage {
    Early,
    Stabilizing,
    Stable,
    LongTerm,
}

impl RecoveryStage {
    /// Position in the stage ordering (early = 0 .. long-term = 3)
    pub fn ordinal(self) -> u8 {
        match self {
            RecoveryStage::Early => 0,
            RecoveryStage::Stabilizing => 1,
            RecoveryStage::Stable => 2,
            RecoveryStage::LongTerm => 3,
        }
    }

    /// Parse a stored stage value, tolerating common naming variants
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "early" | "early_recovery" | "early-recovery" => Some(RecoveryStage::Early),
            "stabilizing" => Some(RecoveryStage::Stabilizing),
            "stable" => Some(RecoveryStage::Stable),
            "long_term" | "long-term" | "longterm" => Some(RecoveryStage::LongTerm),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecoveryStage::Early => "early",
            RecoveryStage::Stabilizing => "stabilizing",
            RecoveryStage::Stable => "stable",
            RecoveryStage::LongTerm => "long-term",
        }
    }
}

/// Smoking status as stored on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    NonSmoker,
    OutsideOnly,
    Occasional,
    Regular,
}

impl SmokingStatus {
    /// Parse a stored smoking value, tolerating common naming variants
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "non_smoker" | "non-smoker" | "nonsmoker" | "none" | "no" => {
                Some(SmokingStatus::NonSmoker)
            }
            "outside_only" | "outside-only" | "outside" => Some(SmokingStatus::OutsideOnly),
            "occasional" | "occasionally" | "social" => Some(SmokingStatus::Occasional),
            "regular" | "daily" | "smoker" | "yes" => Some(SmokingStatus::Regular),
            _ => None,
        }
    }
}

/// Per-dimension veto flags a user can set on their profile.
///
/// `financial_issues` defaults to true: financial reliability is treated as
/// a baseline expectation unless the user opts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealBreakers {
    #[serde(default)]
    pub substance_use: bool,
    #[serde(default)]
    pub pets: bool,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub loudness: bool,
    #[serde(default)]
    pub uncleanliness: bool,
    #[serde(default = "default_true")]
    pub financial_issues: bool,
}

impl Default for DealBreakers {
    fn default() -> Self {
        Self {
            substance_use: false,
            pets: false,
            smoking: false,
            loudness: false,
            uncleanliness: false,
            financial_issues: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Canonical normalized profile used for all compatibility computation.
///
/// Constructed by the normalizer from a raw store record; immutable for the
/// duration of one calculation. Option-typed fields double as the presence
/// map: `None` means the underlying data was absent or failed validation,
/// and every scorer substitutes its documented neutral default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,

    /// Derived from dateOfBirth at normalization time
    #[serde(default)]
    pub age: Option<u8>,
    /// Stored location string, or composed from city + state
    #[serde(default)]
    pub primary_location: Option<String>,

    #[serde(default)]
    pub primary_city: Option<String>,
    /// Exactly two ASCII letters, uppercased
    #[serde(default)]
    pub primary_state: Option<String>,
    pub search_radius_miles: u16,

    #[serde(default)]
    pub budget_min: Option<u32>,
    #[serde(default)]
    pub budget_max: Option<u32>,

    #[serde(default)]
    pub recovery_stage: Option<RecoveryStage>,
    #[serde(default)]
    pub recovery_methods: Vec<String>,
    #[serde(default)]
    pub program_types: Vec<String>,
    #[serde(default)]
    pub primary_issues: Vec<String>,
    #[serde(default)]
    pub spiritual_affiliation: Option<String>,
    pub substance_free_home_required: bool,

    // 1-5 scales, clamped by the normalizer
    pub social_level: u8,
    pub cleanliness_level: u8,
    pub noise_tolerance: u8,

    #[serde(default)]
    pub work_schedule: Option<String>,
    #[serde(default)]
    pub bedtime_preference: Option<String>,
    #[serde(default)]
    pub early_riser: bool,
    #[serde(default)]
    pub night_owl: bool,

    #[serde(default)]
    pub communication_style: Option<String>,
    #[serde(default)]
    pub conflict_resolution_style: Option<String>,
    #[serde(default)]
    pub chore_sharing_style: Option<String>,

    #[serde(default)]
    pub smoking_status: Option<SmokingStatus>,
    #[serde(default)]
    pub pets_owned: bool,
    #[serde(default)]
    pub pets_comfortable: bool,

    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub important_qualities: Vec<String>,

    #[serde(default)]
    pub move_in_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub lease_duration: Option<String>,

    #[serde(default)]
    pub gender_identity: Option<String>,
    #[serde(default)]
    pub preferred_roommate_gender: Option<String>,
    #[serde(default)]
    pub gender_inclusive: bool,

    // Recovery support preferences consulted by the environment factor
    #[serde(default)]
    pub open_to_home_meetings: bool,
    #[serde(default)]
    pub prefers_sober_social: bool,
    #[serde(default)]
    pub wants_accountability_partner: bool,

    #[serde(default)]
    pub housing_goals: Option<String>,
    #[serde(default)]
    pub about_me: Option<String>,

    /// Self-reported; `Some(false)` triggers the financial reliability rule
    #[serde(default)]
    pub financially_stable: Option<bool>,

    pub deal_breakers: DealBreakers,

    pub is_active: bool,
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub completion_percentage: u8,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            first_name: String::new(),
            age: None,
            primary_location: None,
            primary_city: None,
            primary_state: None,
            search_radius_miles: 30,
            budget_min: None,
            budget_max: None,
            recovery_stage: None,
            recovery_methods: Vec::new(),
            program_types: Vec::new(),
            primary_issues: Vec::new(),
            spiritual_affiliation: None,
            substance_free_home_required: true,
            social_level: 3,
            cleanliness_level: 3,
            noise_tolerance: 3,
            work_schedule: None,
            bedtime_preference: None,
            early_riser: false,
            night_owl: false,
            communication_style: None,
            conflict_resolution_style: None,
            chore_sharing_style: None,
            smoking_status: None,
            pets_owned: false,
            pets_comfortable: false,
            interests: Vec::new(),
            important_qualities: Vec::new(),
            move_in_date: None,
            lease_duration: None,
            gender_identity: None,
            preferred_roommate_gender: None,
            gender_inclusive: false,
            open_to_home_meetings: false,
            prefers_sober_social: false,
            wants_accountability_partner: false,
            housing_goals: None,
            about_me: None,
            financially_stable: None,
            deal_breakers: DealBreakers::default(),
            is_active: true,
            profile_completed: false,
            completion_percentage: 0,
        }
    }
}

/// Compatibility factor. Declaration order is priority order and drives the
/// ordering of `BTreeMap<Factor, _>` breakdowns and flag emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Location,
    Budget,
    RecoveryCore,
    LifestyleCore,
    RecoveryEnvironment,
    GenderPreferences,
    Schedule,
    Communication,
    HousingSafety,
    SharedInterests,
    Timing,
    Goals,
    Extended,
}

impl Factor {
    pub const ALL: [Factor; 13] = [
        Factor::Location,
        Factor::Budget,
        Factor::RecoveryCore,
        Factor::LifestyleCore,
        Factor::RecoveryEnvironment,
        Factor::GenderPreferences,
        Factor::Schedule,
        Factor::Communication,
        Factor::HousingSafety,
        Factor::SharedInterests,
        Factor::Timing,
        Factor::Goals,
        Factor::Extended,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Factor::Location => "location",
            Factor::Budget => "budget",
            Factor::RecoveryCore => "recovery_core",
            Factor::LifestyleCore => "lifestyle_core",
            Factor::RecoveryEnvironment => "recovery_environment",
            Factor::GenderPreferences => "gender_preferences",
            Factor::Schedule => "schedule",
            Factor::Communication => "communication",
            Factor::HousingSafety => "housing_safety",
            Factor::SharedInterests => "shared_interests",
            Factor::Timing => "timing",
            Factor::Goals => "goals",
            Factor::Extended => "extended",
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Factor::Location | Factor::Budget | Factor::RecoveryCore | Factor::LifestyleCore => {
                Tier::Core
            }
            Factor::RecoveryEnvironment
            | Factor::GenderPreferences
            | Factor::Schedule
            | Factor::Communication
            | Factor::HousingSafety => Tier::High,
            Factor::SharedInterests | Factor::Timing | Factor::Goals => Tier::Medium,
            Factor::Extended => Tier::Low,
        }
    }
}

/// Priority tier for the aggregated breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Core,
    High,
    Medium,
    Low,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Core, Tier::High, Tier::Medium, Tier::Low];

    pub fn key(self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

/// Per-factor aggregation weights. The defaults sum to 100 and put roughly
/// 70% of the total on the core tier, 25% on high, 4% on medium and 1% on
/// low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub location: u32,
    pub budget: u32,
    pub recovery_core: u32,
    pub lifestyle_core: u32,
    pub recovery_environment: u32,
    pub gender_preferences: u32,
    pub schedule: u32,
    pub communication: u32,
    pub housing_safety: u32,
    pub shared_interests: u32,
    pub timing: u32,
    pub goals: u32,
    pub extended: u32,
}

impl FactorWeights {
    pub fn weight(&self, factor: Factor) -> u32 {
        match factor {
            Factor::Location => self.location,
            Factor::Budget => self.budget,
            Factor::RecoveryCore => self.recovery_core,
            Factor::LifestyleCore => self.lifestyle_core,
            Factor::RecoveryEnvironment => self.recovery_environment,
            Factor::GenderPreferences => self.gender_preferences,
            Factor::Schedule => self.schedule,
            Factor::Communication => self.communication,
            Factor::HousingSafety => self.housing_safety,
            Factor::SharedInterests => self.shared_interests,
            Factor::Timing => self.timing,
            Factor::Goals => self.goals,
            Factor::Extended => self.extended,
        }
    }

    /// Sum over all factors; a valid table totals exactly 100
    pub fn total(&self) -> u32 {
        Factor::ALL.iter().map(|f| self.weight(*f)).sum()
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            location: 20,
            budget: 18,
            recovery_core: 18,
            lifestyle_core: 14,
            recovery_environment: 6,
            gender_preferences: 6,
            schedule: 5,
            communication: 4,
            housing_safety: 4,
            shared_interests: 2,
            timing: 1,
            goals: 1,
            extended: 1,
        }
    }
}

/// Green-flag minimum and red-flag maximum for one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagBand {
    pub green_min: u8,
    pub red_max: u8,
}

/// Per-factor flag thresholds. `Extended` carries no band and never emits
/// score-derived flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagThresholds {
    pub location: FlagBand,
    pub budget: FlagBand,
    pub recovery_core: FlagBand,
    pub lifestyle_core: FlagBand,
    pub recovery_environment: FlagBand,
    pub gender_preferences: FlagBand,
    pub schedule: FlagBand,
    pub communication: FlagBand,
    pub housing_safety: FlagBand,
    pub shared_interests: FlagBand,
    pub timing: FlagBand,
    pub goals: FlagBand,
}

impl FlagThresholds {
    pub fn band(&self, factor: Factor) -> Option<FlagBand> {
        match factor {
            Factor::Location => Some(self.location),
            Factor::Budget => Some(self.budget),
            Factor::RecoveryCore => Some(self.recovery_core),
            Factor::LifestyleCore => Some(self.lifestyle_core),
            Factor::RecoveryEnvironment => Some(self.recovery_environment),
            Factor::GenderPreferences => Some(self.gender_preferences),
            Factor::Schedule => Some(self.schedule),
            Factor::Communication => Some(self.communication),
            Factor::HousingSafety => Some(self.housing_safety),
            Factor::SharedInterests => Some(self.shared_interests),
            Factor::Timing => Some(self.timing),
            Factor::Goals => Some(self.goals),
            Factor::Extended => None,
        }
    }
}

impl Default for FlagThresholds {
    fn default() -> Self {
        Self {
            location: FlagBand { green_min: 85, red_max: 35 },
            budget: FlagBand { green_min: 80, red_max: 40 },
            recovery_core: FlagBand { green_min: 80, red_max: 45 },
            lifestyle_core: FlagBand { green_min: 80, red_max: 40 },
            recovery_environment: FlagBand { green_min: 75, red_max: 35 },
            gender_preferences: FlagBand { green_min: 90, red_max: 30 },
            schedule: FlagBand { green_min: 75, red_max: 35 },
            communication: FlagBand { green_min: 75, red_max: 40 },
            housing_safety: FlagBand { green_min: 80, red_max: 30 },
            shared_interests: FlagBand { green_min: 70, red_max: 30 },
            timing: FlagBand { green_min: 75, red_max: 35 },
            goals: FlagBand { green_min: 70, red_max: 35 },
        }
    }
}
