use crate::models::{MatchingConfig, Profile, VisibilityRecompute, VisibilityStats};

/// Inverse-popularity exposure model.
///
/// Profiles liked more than the platform average are shown less, profiles
/// liked less are shown more, within `[min_visibility, max_visibility]`.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityModel {
    config: MatchingConfig,
}

impl VisibilityModel {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Visibility multiplier for one profile.
    ///
    /// Returns the neutral baseline when either input is zero so that new
    /// accounts without signal are not penalized.
    #[inline]
    pub fn visibility(&self, user_likes: f64, average_likes: f64) -> f64 {
        if user_likes == 0.0 || average_likes == 0.0 {
            return self.config.visibility_base;
        }

        let raw = self.config.visibility_base * (average_likes / user_likes);
        raw.clamp(self.config.min_visibility, self.config.max_visibility)
    }

    /// Recompute every profile's visibility against the population average.
    ///
    /// Inputs are left untouched; each output record is a copy carrying the
    /// new score and the shared average.
    pub fn recompute_all(&self, profiles: &[Profile]) -> VisibilityRecompute {
        let average = average_likes_received(profiles);

        let profiles = profiles
            .iter()
            .map(|profile| Profile {
                visibility_score: self
                    .visibility(profile.likes_received_this_week as f64, average),
                platform_average_likes_per_week: Some(average),
                ..profile.clone()
            })
            .collect();

        VisibilityRecompute {
            profiles,
            platform_average_likes_per_week: average,
        }
    }

    /// Engagement summary of `profile` relative to `population`
    pub fn stats(&self, profile: &Profile, population: &[Profile]) -> VisibilityStats {
        VisibilityStats {
            user_id: profile.user_id.clone(),
            visibility_score: profile.visibility_score,
            likes_received_this_week: profile.likes_received_this_week,
            likes_given_this_week: profile.likes_given_this_week,
            swipes_this_week: profile.swipes_this_week,
            total_matches: profile.total_matches,
            platform_average_likes_per_week: average_likes_received(population),
        }
    }
}

impl Default for VisibilityModel {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

/// Mean weekly likes received; 0 for an empty population
pub fn average_likes_received(profiles: &[Profile]) -> f64 {
    if profiles.is_empty() {
        return 0.0;
    }

    let total: u64 = profiles
        .iter()
        .map(|p| p.likes_received_this_week as u64)
        .sum();
    total as f64 / profiles.len() as f64
}
