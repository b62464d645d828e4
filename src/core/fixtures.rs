//! Shared builders for the engine's unit tests

use crate::models::{
    AgeRange, BigFiveScores, ChildrenPreference, ConnectionMode, DrinkingFrequency, DrugUse,
    EducationLevel, PreferenceSet, Profile, ProfileDetails, SmokingStatus, Tolerance,
};
use std::collections::BTreeSet;

/// Bands centred on 30: must-have [28,32], preferred [25,35], acceptable [20,40]
pub fn create_preferences() -> PreferenceSet {
    PreferenceSet {
        age_must_have: AgeRange::new(28.0, 32.0),
        age_preferred: AgeRange::new(25.0, 35.0),
        age_acceptable: AgeRange::new(20.0, 40.0),
        seeking_genders: ["female".to_string()].into_iter().collect(),
        height_min_cm: Some(160),
        height_max_cm: Some(180),
        smoking_tolerance: Tolerance::Neutral,
        drinking_tolerance: Tolerance::Neutral,
        drugs_tolerance: Tolerance::Neutral,
        children_preference: ChildrenPreference::Neutral,
        education_level_min: None,
        career_importance: None,
        religion_importance: None,
        religion_compatibility_required: false,
        political_importance: None,
        political_compatibility_required: false,
    }
}

pub fn create_personality() -> BigFiveScores {
    BigFiveScores {
        openness: 5.0,
        conscientiousness: 5.0,
        extraversion: 5.0,
        agreeableness: 5.0,
        neuroticism: 5.0,
    }
}

/// A 170cm non-smoking female dating candidate who is seeking men
pub fn create_candidate(id: &str, age: u32) -> Profile {
    let mut preferences = create_preferences();
    preferences.seeking_genders = ["male".to_string()].into_iter().collect();

    Profile {
        user_id: id.to_string(),
        age: Some(age),
        gender: "female".to_string(),
        location_city: Some("Portland".to_string()),
        details: ProfileDetails {
            height_cm: Some(170),
            smoking_status: Some(SmokingStatus::Never),
            drinking_frequency: Some(DrinkingFrequency::Socially),
            drug_use: Some(DrugUse::Never),
            education_level: Some(EducationLevel::BachelorDegree),
            occupation: Some("nurse".to_string()),
            children_count: 0,
            religion: None,
            political_views: None,
            personality: Some(create_personality()),
            interests: ["hiking", "music"].iter().map(|s| s.to_string()).collect(),
            communication_style: Some("texting".to_string()),
        },
        preferences: Some(preferences),
        connection_modes: [ConnectionMode::Dating].into_iter().collect(),
        likes_received_this_week: 10,
        likes_given_this_week: 5,
        swipes_this_week: 20,
        total_matches: 1,
        visibility_score: 1.0,
        platform_average_likes_per_week: None,
    }
}

/// A 30-year-old male viewer seeking women
pub fn create_viewer(id: &str) -> Profile {
    Profile {
        gender: "male".to_string(),
        preferences: Some(create_preferences()),
        ..create_candidate(id, 30)
    }
}

pub fn string_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
