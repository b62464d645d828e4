use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::ConnectionMode;

/// Query string of the feed endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    #[serde(default)]
    pub connection_mode: Option<ConnectionMode>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub include_outside_preferences: Option<bool>,
}

/// Pairwise compatibility lookup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityQuery {
    #[validate(length(min = 1))]
    pub user1_id: String,
    #[validate(length(min = 1))]
    pub user2_id: String,
}

/// Directional preference diagnostic: how `candidate_id` fits `viewer_id`'s preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateQuery {
    #[validate(length(min = 1))]
    pub viewer_id: String,
    #[validate(length(min = 1))]
    pub candidate_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchProbabilityQuery {
    #[serde(default)]
    pub swipes: u32,
    #[serde(default)]
    pub likes_waiting: u32,
}
