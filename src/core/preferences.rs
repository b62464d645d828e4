use crate::core::error::MatchError;
use crate::models::{
    CareerImportance, ChildrenPreference, DrinkingFrequency, DrugUse, MatchingConfig, Mismatch,
    PreferenceMatchResult, PreferenceSet, PreferenceTier, PreferenceWeights, Profile,
    ProfileDetails, Severity, SmokingStatus, Tolerance,
};

/// Scores one candidate against one viewer's tiered preferences.
///
/// Each dimension adds a signed weight from the tier table; the total is then
/// classified into a bullseye tier. The relation is directional: evaluating
/// A against B's preferences says nothing about B against A's.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceEvaluator {
    weights: PreferenceWeights,
}

impl PreferenceEvaluator {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            weights: config.preference_weights,
        }
    }

    pub fn weights(&self) -> &PreferenceWeights {
        &self.weights
    }

    /// Evaluate `candidate` against `preferences`.
    ///
    /// # Errors
    /// `MatchError::MalformedInput` when the candidate has no age.
    pub fn evaluate(
        &self,
        candidate: &Profile,
        preferences: &PreferenceSet,
    ) -> Result<PreferenceMatchResult, MatchError> {
        let age = candidate
            .age
            .ok_or_else(|| MatchError::missing(&candidate.user_id, "age"))?;

        let mut score = 0.0;
        let mut mismatches = Vec::new();

        // Age bullseye
        let age_tier = age_tier(age as f64, preferences);
        score += self.tier_weight(age_tier);
        if age_tier == PreferenceTier::Outside {
            mismatches.push(mismatch("age", Severity::Outside));
        }

        // Gender
        if preferences.seeking_genders.contains(&candidate.gender) {
            score += self.weights.must_have;
        } else {
            score += self.weights.outside * 2.0;
            mismatches.push(mismatch("gender", Severity::Dealbreaker));
        }

        // Height, only when both sides state it; 0 means unset
        if let (Some(height), Some(min), Some(max)) = (
            stated(candidate.details.height_cm),
            stated(preferences.height_min_cm),
            stated(preferences.height_max_cm),
        ) {
            if height >= min && height <= max {
                score += self.weights.preferred;
            } else {
                score += self.weights.outside / 2.0;
                mismatches.push(mismatch("height", Severity::Minor));
            }
        }

        score += self.lifestyle(&candidate.details, preferences, &mut mismatches);
        score += self.children(&candidate.details, preferences, &mut mismatches);
        score += self.education(&candidate.details, preferences, &mut mismatches);
        score += self.beliefs(&candidate.details, preferences, &mut mismatches);

        Ok(PreferenceMatchResult {
            tier: self.classify(score),
            score,
            mismatches,
        })
    }

    /// Map a summed score onto a tier
    pub fn classify(&self, score: f64) -> PreferenceTier {
        if score >= self.weights.must_have * 2.0 {
            PreferenceTier::MustHave
        } else if score >= self.weights.preferred {
            PreferenceTier::Preferred
        } else if score >= self.weights.acceptable {
            PreferenceTier::Acceptable
        } else {
            PreferenceTier::Outside
        }
    }

    #[inline]
    pub fn tier_weight(&self, tier: PreferenceTier) -> f64 {
        match tier {
            PreferenceTier::MustHave => self.weights.must_have,
            PreferenceTier::Preferred => self.weights.preferred,
            PreferenceTier::Acceptable => self.weights.acceptable,
            PreferenceTier::Outside => self.weights.outside,
        }
    }

    fn lifestyle(
        &self,
        details: &ProfileDetails,
        preferences: &PreferenceSet,
        mismatches: &mut Vec<Mismatch>,
    ) -> f64 {
        let mut score = 0.0;

        let never_smokes = details.smoking_status == Some(SmokingStatus::Never);
        if preferences.smoking_tolerance == Tolerance::Dealbreaker && !never_smokes {
            score += self.weights.outside;
            mismatches.push(mismatch("smoking", Severity::Dealbreaker));
        } else if preferences.smoking_tolerance == Tolerance::Ok || never_smokes {
            score += self.weights.acceptable;
        }

        // Only regular drinking trips a drinking dealbreaker
        let drinks_regularly = details.drinking_frequency == Some(DrinkingFrequency::Regularly);
        if preferences.drinking_tolerance == Tolerance::Dealbreaker && drinks_regularly {
            score += self.weights.outside;
            mismatches.push(mismatch("drinking", Severity::Dealbreaker));
        } else if preferences.drinking_tolerance == Tolerance::Ok {
            score += self.weights.acceptable;
        }

        let never_uses = details.drug_use == Some(DrugUse::Never);
        if preferences.drugs_tolerance == Tolerance::Dealbreaker && !never_uses {
            score += self.weights.outside;
            mismatches.push(mismatch("drugs", Severity::Dealbreaker));
        } else if preferences.drugs_tolerance == Tolerance::Ok {
            score += self.weights.acceptable;
        }

        score
    }

    fn children(
        &self,
        details: &ProfileDetails,
        preferences: &PreferenceSet,
        mismatches: &mut Vec<Mismatch>,
    ) -> f64 {
        let has_children = details.has_children();

        match preferences.children_preference {
            ChildrenPreference::DealbreakerNo if has_children => {
                mismatches.push(mismatch("children", Severity::Dealbreaker));
                self.weights.outside
            }
            ChildrenPreference::MustHave if !has_children => {
                mismatches.push(mismatch("children", Severity::Dealbreaker));
                self.weights.outside
            }
            ChildrenPreference::Neutral => self.weights.acceptable,
            _ => self.weights.preferred,
        }
    }

    fn education(
        &self,
        details: &ProfileDetails,
        preferences: &PreferenceSet,
        mismatches: &mut Vec<Mismatch>,
    ) -> f64 {
        // Unknown levels compare as None, below every known level
        let meets_minimum = details.education_level >= preferences.education_level_min;
        let career_irrelevant = preferences.career_importance == Some(CareerImportance::NotImportant);

        if meets_minimum || career_irrelevant {
            return self.weights.acceptable;
        }

        mismatches.push(mismatch("education", Severity::Minor));
        self.weights.outside / 2.0
    }

    fn beliefs(
        &self,
        details: &ProfileDetails,
        preferences: &PreferenceSet,
        mismatches: &mut Vec<Mismatch>,
    ) -> f64 {
        self.belief(
            "religion",
            preferences.religion_compatibility_required,
            &details.religion,
            &preferences.religion_importance,
            mismatches,
        ) + self.belief(
            "politics",
            preferences.political_compatibility_required,
            &details.political_views,
            &preferences.political_importance,
            mismatches,
        )
    }

    fn belief(
        &self,
        field: &'static str,
        required: bool,
        held: &Option<String>,
        wanted: &Option<String>,
        mismatches: &mut Vec<Mismatch>,
    ) -> f64 {
        if !required {
            return self.weights.acceptable / 2.0;
        }

        if held == wanted {
            self.weights.preferred
        } else {
            mismatches.push(mismatch(field, Severity::Important));
            self.weights.outside
        }
    }
}

impl Default for PreferenceEvaluator {
    fn default() -> Self {
        Self::new(&MatchingConfig::default())
    }
}

/// Place an age into the viewer's bands, checking must-have first.
///
/// Bands are tested in priority order without validating that they nest, so
/// an inconsistent set resolves to whichever band matches first.
pub fn age_tier(age: f64, preferences: &PreferenceSet) -> PreferenceTier {
    if preferences.age_must_have.contains(age) {
        PreferenceTier::MustHave
    } else if preferences.age_preferred.contains(age) {
        PreferenceTier::Preferred
    } else if preferences.age_acceptable.contains(age) {
        PreferenceTier::Acceptable
    } else {
        PreferenceTier::Outside
    }
}

#[inline]
fn stated(height_cm: Option<u16>) -> Option<u16> {
    height_cm.filter(|&h| h > 0)
}

#[inline]
fn mismatch(field: &'static str, severity: Severity) -> Mismatch {
    Mismatch { field, severity }
}
