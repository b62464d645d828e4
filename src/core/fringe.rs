use crate::core::error::MatchError;
use crate::core::preferences::PreferenceEvaluator;
use crate::models::{MatchingConfig, PreferenceTier, Profile};

/// Extra exposure for below-median candidates who strongly fit a viewer
#[derive(Debug, Clone, Copy)]
pub struct FringeBoost {
    evaluator: PreferenceEvaluator,
    multiplier: f64,
    ceiling: f64,
}

impl FringeBoost {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            evaluator: PreferenceEvaluator::new(config),
            multiplier: config.fringe_multiplier,
            ceiling: config.max_visibility,
        }
    }

    /// Boost multiplier for showing `candidate` to `viewer`, always >= 1.0.
    ///
    /// Only candidates under `median_popularity` that land in the viewer's
    /// must-have or preferred tier are boosted; the further below the median,
    /// the larger the boost, capped at the visibility ceiling.
    ///
    /// # Errors
    /// `MatchError::MalformedInput` if the viewer has no preferences or the
    /// candidate has no age.
    pub fn boost(
        &self,
        candidate: &Profile,
        viewer: &Profile,
        median_popularity: f64,
    ) -> Result<f64, MatchError> {
        let likes = candidate.likes_received_this_week as f64;
        if likes >= median_popularity {
            return Ok(1.0);
        }

        let preferences = viewer
            .preferences
            .as_ref()
            .ok_or_else(|| MatchError::missing(&viewer.user_id, "preferences"))?;

        let result = self.evaluator.evaluate(candidate, preferences)?;
        match result.tier {
            PreferenceTier::MustHave | PreferenceTier::Preferred => {
                let popularity_ratio = likes / median_popularity;
                let boost = 1.0 + (1.0 - popularity_ratio) * self.multiplier;
                Ok(boost.min(self.ceiling))
            }
            _ => Ok(1.0),
        }
    }
}

impl Default for FringeBoost {
    fn default() -> Self {
        Self::new(&MatchingConfig::default())
    }
}
