use serde::{Deserialize, Serialize};
use validator::Validate;

/// Options for ranking a candidate pool against a subject profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankOptions {
    /// Maximum number of ranked candidates to return
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    /// Candidates scoring below this are dropped from the result
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub min_score: u8,
    /// User ids to skip (already connected or pending, per the caller)
    #[serde(default)]
    pub exclude_user_ids: Vec<String>,
    /// When true, candidates with an absolute deal-breaker verdict are
    /// excluded from the ranking entirely
    #[serde(default = "default_true")]
    pub apply_deal_breakers: bool,
}

fn default_limit() -> u16 {
    20
}

fn default_true() -> bool {
    true
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_score: 0,
            exclude_user_ids: Vec::new(),
            apply_deal_breakers: true,
        }
    }
}

impl RankOptions {
    /// Deterministic fingerprint of the filter set, used in cache keys.
    /// Excluded ids are sorted so logically equal option sets collide.
    pub fn fingerprint(&self) -> String {
        let mut excluded = self.exclude_user_ids.clone();
        excluded.sort();
        format!(
            "l{}-s{}-d{}-x{}",
            self.limit,
            self.min_score,
            u8::from(self.apply_deal_breakers),
            excluded.join("+"),
        )
    }
}
