use serde::{Deserialize, Serialize};

/// Signed contribution of each preference tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceWeights {
    pub must_have: f64,
    pub preferred: f64,
    pub acceptable: f64,
    pub outside: f64,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            must_have: 100.0,
            preferred: 50.0,
            acceptable: 25.0,
            outside: -10.0,
        }
    }
}

/// Weights of the four compatibility components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityWeights {
    pub preferences: f64,
    pub personality: f64,
    pub interests: f64,
    pub communication: f64,
}

impl CompatibilityWeights {
    pub fn sum(&self) -> f64 {
        self.preferences + self.personality + self.interests + self.communication
    }
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            preferences: 0.4,
            personality: 0.3,
            interests: 0.2,
            communication: 0.1,
        }
    }
}

/// Immutable tuning table shared by every engine component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub visibility_base: f64,
    pub fringe_multiplier: f64,
    pub min_visibility: f64,
    pub max_visibility: f64,
    pub preference_weights: PreferenceWeights,
    pub compatibility_weights: CompatibilityWeights,
    pub match_threshold: f64,
    pub great_match_threshold: f64,
    pub perfect_match_threshold: f64,
    /// Number of head entries reshuffled on every feed generation
    pub shuffle_window: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            visibility_base: 1.0,
            fringe_multiplier: 1.5,
            min_visibility: 0.1,
            max_visibility: 3.0,
            preference_weights: PreferenceWeights::default(),
            compatibility_weights: CompatibilityWeights::default(),
            match_threshold: 60.0,
            great_match_threshold: 80.0,
            perfect_match_threshold: 95.0,
            shuffle_window: 10,
        }
    }
}
