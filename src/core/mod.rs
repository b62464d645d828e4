// Core algorithm exports
pub mod compatibility;
pub mod error;
pub mod feed;
pub mod fringe;
pub mod preferences;
pub mod probability;
pub mod random;
pub mod visibility;

#[cfg(test)]
pub(crate) mod fixtures;

pub use compatibility::{interest_overlap, personality_compatibility, CompatibilityScorer};
pub use error::MatchError;
pub use feed::{median_likes_received, FeedAssembler, FeedOptions};
pub use fringe::FringeBoost;
pub use preferences::{age_tier, PreferenceEvaluator};
pub use probability::estimate_match_probability;
pub use random::{shuffle_head, RandomSource};
pub use visibility::{average_likes_received, VisibilityModel};
