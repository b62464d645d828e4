use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Relationship intent a profile can flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionMode {
    #[default]
    Dating,
    Casual,
    Professional,
    Platonic,
}

impl ConnectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionMode::Dating => "dating",
            ConnectionMode::Casual => "casual",
            ConnectionMode::Professional => "professional",
            ConnectionMode::Platonic => "platonic",
        }
    }
}

impl std::str::FromStr for ConnectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dating" => Ok(ConnectionMode::Dating),
            "casual" => Ok(ConnectionMode::Casual),
            "professional" => Ok(ConnectionMode::Professional),
            "platonic" => Ok(ConnectionMode::Platonic),
            other => Err(format!(
                "unknown connection mode '{}', expected one of: dating, casual, professional, platonic",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "occasionally")]
    Occasionally,
    #[serde(rename = "regularly")]
    Regularly,
    #[serde(rename = "trying to quit")]
    TryingToQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkingFrequency {
    Never,
    Socially,
    Regularly,
    Rarely,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrugUse {
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "occasionally")]
    Occasionally,
    #[serde(rename = "cannabis only")]
    CannabisOnly,
    #[serde(rename = "prefer not to say")]
    PreferNotToSay,
}

/// How strongly a viewer objects to a lifestyle habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    Dealbreaker,
    PreferNot,
    Neutral,
    Ok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildrenPreference {
    DealbreakerNo,
    PreferNo,
    Neutral,
    PreferYes,
    MustHave,
}

/// Education levels in ordinal order.
///
/// `TradeSchool` sorts after `Doctorate`. That is the historical ordering of
/// the level table and comparisons depend on it; do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "high school")]
    HighSchool,
    #[serde(rename = "some college")]
    SomeCollege,
    #[serde(rename = "associate degree")]
    AssociateDegree,
    #[serde(rename = "bachelor degree")]
    BachelorDegree,
    #[serde(rename = "master degree")]
    MasterDegree,
    #[serde(rename = "doctorate")]
    Doctorate,
    #[serde(rename = "trade school")]
    TradeSchool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerImportance {
    NotImportant,
    Somewhat,
    Important,
    VeryImportant,
}

/// Big-Five personality scores, each on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BigFiveScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

/// Lifestyle and personality details attached to a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    #[serde(default)]
    pub height_cm: Option<u16>,
    #[serde(default)]
    pub smoking_status: Option<SmokingStatus>,
    #[serde(default)]
    pub drinking_frequency: Option<DrinkingFrequency>,
    #[serde(default)]
    pub drug_use: Option<DrugUse>,
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub children_count: u32,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub political_views: Option<String>,
    #[serde(default)]
    pub personality: Option<BigFiveScores>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub communication_style: Option<String>,
}

impl ProfileDetails {
    pub fn has_children(&self) -> bool {
        self.children_count > 0
    }
}

/// Inclusive age range; bounds may be fractional
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: f64,
    pub max: f64,
}

impl AgeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, age: f64) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Tiered matching preferences of one viewer.
///
/// The three age bands are expected to nest (must-have inside preferred inside
/// acceptable) but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    pub age_must_have: AgeRange,
    pub age_preferred: AgeRange,
    pub age_acceptable: AgeRange,
    #[serde(default)]
    pub seeking_genders: BTreeSet<String>,
    #[serde(default)]
    pub height_min_cm: Option<u16>,
    #[serde(default)]
    pub height_max_cm: Option<u16>,
    #[serde(default = "default_tolerance")]
    pub smoking_tolerance: Tolerance,
    #[serde(default = "default_tolerance")]
    pub drinking_tolerance: Tolerance,
    #[serde(default = "default_tolerance")]
    pub drugs_tolerance: Tolerance,
    #[serde(default = "default_children_preference")]
    pub children_preference: ChildrenPreference,
    #[serde(default)]
    pub education_level_min: Option<EducationLevel>,
    #[serde(default)]
    pub career_importance: Option<CareerImportance>,
    #[serde(default)]
    pub religion_importance: Option<String>,
    #[serde(default)]
    pub religion_compatibility_required: bool,
    #[serde(default)]
    pub political_importance: Option<String>,
    #[serde(default)]
    pub political_compatibility_required: bool,
}

fn default_tolerance() -> Tolerance {
    Tolerance::Neutral
}

fn default_children_preference() -> ChildrenPreference {
    ChildrenPreference::Neutral
}

/// A user profile snapshot as handed to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub age: Option<u32>,
    pub gender: String,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub details: ProfileDetails,
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
    #[serde(default)]
    pub connection_modes: BTreeSet<ConnectionMode>,
    #[serde(default)]
    pub likes_received_this_week: u32,
    #[serde(default)]
    pub likes_given_this_week: u32,
    #[serde(default)]
    pub swipes_this_week: u32,
    #[serde(default)]
    pub total_matches: u32,
    #[serde(default = "default_visibility")]
    pub visibility_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_average_likes_per_week: Option<f64>,
}

impl Profile {
    /// Whether the profile flags interest in the given connection mode
    pub fn seeks(&self, mode: ConnectionMode) -> bool {
        self.connection_modes.contains(&mode)
    }
}

fn default_visibility() -> f64 {
    1.0
}
