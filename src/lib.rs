//! Crystal Algo - feed ranking service for the Crystal social-matching app
//!
//! The `core` module is the pure ranking engine: inverse-popularity visibility,
//! fringe boosts, bullseye preference tiers, compatibility scoring and feed
//! assembly. `routes` and `services` are a thin actix-web shell around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    CompatibilityScorer, FeedAssembler, FeedOptions, FringeBoost, MatchError, PreferenceEvaluator,
    RandomSource, VisibilityModel, estimate_match_probability,
};
pub use models::{
    CompatibilityResult, ConnectionMode, FeedEntry, MatchingConfig, PreferenceMatchResult,
    PreferenceSet, PreferenceTier, Profile,
};
