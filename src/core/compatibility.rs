use crate::core::error::MatchError;
use crate::core::preferences::PreferenceEvaluator;
use crate::models::{
    BigFiveScores, CompatibilityBreakdown, CompatibilityResult, CompatibilityWeights, MatchTier,
    MatchingConfig, Profile,
};
use std::collections::BTreeSet;

/// Pairwise compatibility scorer.
///
/// Combines four components by fixed weights:
/// - preferences (both directions, averaged)
/// - Big-Five personality fit
/// - interest overlap
/// - communication style
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityScorer {
    evaluator: PreferenceEvaluator,
    weights: CompatibilityWeights,
    match_threshold: f64,
    great_match_threshold: f64,
    perfect_match_threshold: f64,
}

impl CompatibilityScorer {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            evaluator: PreferenceEvaluator::new(config),
            weights: config.compatibility_weights,
            match_threshold: config.match_threshold,
            great_match_threshold: config.great_match_threshold,
            perfect_match_threshold: config.perfect_match_threshold,
        }
    }

    /// Score `a` and `b` against each other.
    ///
    /// # Errors
    /// `MatchError::MalformedInput` when either side lacks preferences, an
    /// age, or Big-Five scores.
    pub fn score(&self, a: &Profile, b: &Profile) -> Result<CompatibilityResult, MatchError> {
        let preferences = self.preference_component(a, b)?;

        let personality = personality_compatibility(&big_five(a)?, &big_five(b)?);
        let interests = interest_overlap(&a.details.interests, &b.details.interests);
        let communication = if a.details.communication_style == b.details.communication_style {
            100.0
        } else {
            50.0
        };

        let raw_score = preferences * self.weights.preferences
            + personality * self.weights.personality
            + interests * self.weights.interests
            + communication * self.weights.communication;

        Ok(CompatibilityResult {
            score: round_half_up(raw_score) as i64,
            raw_score,
            breakdown: CompatibilityBreakdown {
                preferences: round_half_up(preferences) as i64,
                personality: round_half_up(personality) as i64,
                interests: round_half_up(interests) as i64,
                communication: communication as i64,
            },
            is_match: raw_score >= self.match_threshold,
            tier: self.tier(raw_score),
        })
    }

    /// Mutual preference fit as a percentage of three must-have hits.
    ///
    /// Not clamped: strong mutual fits exceed 100 and dealbreakers go negative.
    pub fn preference_component(&self, a: &Profile, b: &Profile) -> Result<f64, MatchError> {
        let a_prefs = a
            .preferences
            .as_ref()
            .ok_or_else(|| MatchError::missing(&a.user_id, "preferences"))?;
        let b_prefs = b
            .preferences
            .as_ref()
            .ok_or_else(|| MatchError::missing(&b.user_id, "preferences"))?;

        let a_to_b = self.evaluator.evaluate(b, a_prefs)?;
        let b_to_a = self.evaluator.evaluate(a, b_prefs)?;
        let average = (a_to_b.score + b_to_a.score) / 2.0;

        Ok(average / (self.evaluator.weights().must_have * 3.0) * 100.0)
    }

    fn tier(&self, raw_score: f64) -> MatchTier {
        if raw_score >= self.perfect_match_threshold {
            MatchTier::Perfect
        } else if raw_score >= self.great_match_threshold {
            MatchTier::Great
        } else if raw_score >= self.match_threshold {
            MatchTier::Good
        } else {
            MatchTier::Poor
        }
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(&MatchingConfig::default())
    }
}

fn big_five(profile: &Profile) -> Result<BigFiveScores, MatchError> {
    profile
        .details
        .personality
        .ok_or_else(|| MatchError::missing(&profile.user_id, "personality"))
}

/// Big-Five compatibility on a 0-100 scale.
///
/// Rewards high shared agreeableness, similar openness and conscientiousness,
/// a moderate extraversion gap, and low combined neuroticism.
pub fn personality_compatibility(a: &BigFiveScores, b: &BigFiveScores) -> f64 {
    let mut score = 0.0;

    score += (a.agreeableness + b.agreeableness) / 2.0 * 5.0;

    score += (10.0 - (a.openness - b.openness).abs()) * 2.0;
    score += (10.0 - (a.conscientiousness - b.conscientiousness).abs()) * 2.0;

    let extraversion_gap = (a.extraversion - b.extraversion).abs();
    score += if extraversion_gap > 3.0 && extraversion_gap < 7.0 {
        15.0
    } else {
        10.0
    };

    score += (10.0 - (a.neuroticism + b.neuroticism) / 2.0) * 3.0;

    score.clamp(0.0, 100.0)
}

/// Jaccard similarity of two interest sets, times 100; 0 when both are empty
pub fn interest_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }

    let shared = a.intersection(b).count();
    shared as f64 / union as f64 * 100.0
}

/// Round half toward positive infinity, so -2.5 becomes -2 and 2.5 becomes 3
#[inline]
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
