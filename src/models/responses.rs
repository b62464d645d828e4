use serde::{Deserialize, Serialize};
use crate::models::domain::ConnectionMode;
use crate::models::results::{CompatibilityResult, FeedEntry, PreferenceMatchResult};

/// Response for the feed endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub feed: Vec<FeedEntry>,
    pub count: usize,
    pub connection_mode: ConnectionMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityResponse {
    pub compatibility: CompatibilityResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub viewer_id: String,
    pub candidate_id: String,
    pub result: PreferenceMatchResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRecomputeResponse {
    pub success: bool,
    pub users_updated: usize,
    pub platform_average_likes_per_week: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchProbabilityResponse {
    pub match_probability: u8,
    pub likes_waiting: u32,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub profiles: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
