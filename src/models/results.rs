use serde::{Deserialize, Serialize};
use crate::models::domain::Profile;

/// Bullseye ring a candidate lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceTier {
    MustHave,
    Preferred,
    Acceptable,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Outside,
    Dealbreaker,
    Minor,
    Important,
}

/// One preference dimension the candidate falls short on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub field: &'static str,
    pub severity: Severity,
}

/// Outcome of evaluating one candidate against one viewer's preferences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceMatchResult {
    pub tier: PreferenceTier,
    pub score: f64,
    pub mismatches: Vec<Mismatch>,
}

impl PreferenceMatchResult {
    pub fn has_mismatch(&self, field: &str) -> bool {
        self.mismatches.iter().any(|m| m.field == field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Poor,
    Good,
    Great,
    Perfect,
}

/// Per-component scores, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityBreakdown {
    pub preferences: i64,
    pub personality: i64,
    pub interests: i64,
    pub communication: i64,
}

/// Pairwise compatibility between two profiles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// Weighted sum rounded half up; not clamped, so ideal pairs exceed 100
    pub score: i64,
    /// Unrounded weighted sum; tier and match flag are derived from it
    pub raw_score: f64,
    pub breakdown: CompatibilityBreakdown,
    pub is_match: bool,
    pub tier: MatchTier,
}

/// A ranked candidate in a generated feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub profile: Profile,
    pub compatibility: CompatibilityResult,
    pub fringe_boost: f64,
    pub display_probability: f64,
    pub show_in_feed: bool,
}

/// Population-wide visibility recompute output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRecompute {
    pub profiles: Vec<Profile>,
    pub platform_average_likes_per_week: f64,
}

/// Visibility and engagement view of one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityStats {
    pub user_id: String,
    pub visibility_score: f64,
    pub likes_received_this_week: u32,
    pub likes_given_this_week: u32,
    pub swipes_this_week: u32,
    pub total_matches: u32,
    pub platform_average_likes_per_week: f64,
}
