// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod results;
pub mod weights;

pub use domain::{
    AgeRange, BigFiveScores, CareerImportance, ChildrenPreference, ConnectionMode, DrinkingFrequency,
    DrugUse, EducationLevel, PreferenceSet, Profile, ProfileDetails, SmokingStatus, Tolerance,
};
pub use requests::{CompatibilityQuery, EvaluateQuery, FeedQuery, MatchProbabilityQuery};
pub use responses::{
    CompatibilityResponse, ErrorResponse, EvaluateResponse, FeedResponse, HealthResponse,
    MatchProbabilityResponse, VisibilityRecomputeResponse,
};
pub use results::{
    CompatibilityBreakdown, CompatibilityResult, FeedEntry, MatchTier, Mismatch,
    PreferenceMatchResult, PreferenceTier, Severity, VisibilityRecompute, VisibilityStats,
};
pub use weights::{CompatibilityWeights, MatchingConfig, PreferenceWeights};
