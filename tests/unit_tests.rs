// Unit tests for Crystal Algo

use crystal_algo::core::{
    age_tier, estimate_match_probability, interest_overlap, personality_compatibility,
    shuffle_head, CompatibilityScorer, MatchError, PreferenceEvaluator, VisibilityModel,
};
use crystal_algo::models::{
    AgeRange, BigFiveScores, ChildrenPreference, ConnectionMode, DrinkingFrequency, DrugUse,
    EducationLevel, MatchTier, PreferenceSet, PreferenceTier, Profile, ProfileDetails, Severity,
    SmokingStatus, Tolerance,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

fn strings(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_preferences(seeking: &str) -> PreferenceSet {
    PreferenceSet {
        age_must_have: AgeRange::new(28.0, 32.0),
        age_preferred: AgeRange::new(25.0, 35.0),
        age_acceptable: AgeRange::new(20.0, 40.0),
        seeking_genders: strings(&[seeking]),
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

fn midpoint_personality() -> BigFiveScores {
    BigFiveScores {
        openness: 5.0,
        conscientiousness: 5.0,
        extraversion: 5.0,
        agreeableness: 5.0,
        neuroticism: 5.0,
    }
}

fn create_profile(id: &str, age: u32, gender: &str, seeking: &str) -> Profile {
    Profile {
        user_id: id.to_string(),
        age: Some(age),
        gender: gender.to_string(),
        location_city: None,
        details: ProfileDetails {
            height_cm: Some(170),
            smoking_status: Some(SmokingStatus::Never),
            drinking_frequency: Some(DrinkingFrequency::Socially),
            drug_use: Some(DrugUse::Never),
            education_level: Some(EducationLevel::BachelorDegree),
            personality: Some(midpoint_personality()),
            interests: strings(&["hiking", "music"]),
            communication_style: Some("texting".to_string()),
            ..ProfileDetails::default()
        },
        preferences: Some(create_preferences(seeking)),
        connection_modes: [ConnectionMode::Dating].into_iter().collect(),
        likes_received_this_week: 10,
        likes_given_this_week: 0,
        swipes_this_week: 0,
        total_matches: 0,
        visibility_score: 1.0,
        platform_average_likes_per_week: None,
    }
}

#[test]
fn test_visibility_zero_guard() {
    let model = VisibilityModel::default();
    assert_eq!(model.visibility(0.0, 10.0), 1.0);
    assert_eq!(model.visibility(10.0, 0.0), 1.0);
    assert_eq!(model.visibility(0.0, 0.0), 1.0);
}

#[test]
fn test_visibility_is_inverse_and_bounded() {
    let model = VisibilityModel::default();
    assert_eq!(model.visibility(10.0, 10.0), 1.0);
    assert_eq!(model.visibility(20.0, 10.0), 0.5);
    assert_eq!(model.visibility(5.0, 10.0), 2.0);
    assert_eq!(model.visibility(1.0, 10.0), 3.0);
    assert_eq!(model.visibility(1000.0, 10.0), 0.1);

    for likes in [0.5, 1.0, 3.0, 17.0, 250.0, 9000.0] {
        for average in [0.25, 2.0, 10.0, 400.0] {
            let v = model.visibility(likes, average);
            assert!((0.1..=3.0).contains(&v), "visibility({likes}, {average}) = {v}");
        }
    }
}

#[test]
fn test_recompute_population() {
    let model = VisibilityModel::default();
    let mut population = vec![
        create_profile("a", 30, "female", "male"),
        create_profile("b", 30, "female", "male"),
        create_profile("c", 30, "female", "male"),
    ];
    population[0].likes_received_this_week = 0;
    population[1].likes_received_this_week = 10;
    population[2].likes_received_this_week = 20;

    let result = model.recompute_all(&population);

    assert_eq!(result.platform_average_likes_per_week, 10.0);
    assert_eq!(result.profiles.len(), population.len());
    let scores: Vec<f64> = result.profiles.iter().map(|p| p.visibility_score).collect();
    assert_eq!(scores, vec![1.0, 1.0, 0.5]);
    assert!(result
        .profiles
        .iter()
        .all(|p| p.platform_average_likes_per_week == Some(10.0)));
}

#[test]
fn test_age_bullseye_tiers() {
    let prefs = create_preferences("female");
    assert_eq!(age_tier(30.0, &prefs), PreferenceTier::MustHave);
    assert_eq!(age_tier(34.0, &prefs), PreferenceTier::Preferred);
    assert_eq!(age_tier(36.0, &prefs), PreferenceTier::Acceptable);
    assert_eq!(age_tier(45.0, &prefs), PreferenceTier::Outside);
}

#[test]
fn test_age_contribution_by_band() {
    let evaluator = PreferenceEvaluator::default();
    let prefs = create_preferences("female");

    let in_bullseye = evaluator
        .evaluate(&create_profile("c30", 30, "female", "male"), &prefs)
        .unwrap();
    let acceptable_only = evaluator
        .evaluate(&create_profile("c36", 36, "female", "male"), &prefs)
        .unwrap();

    // Only the age dimension differs: +100 versus +25
    assert_eq!(in_bullseye.score - acceptable_only.score, 75.0);
    assert!(acceptable_only.mismatches.is_empty());
}

#[test]
fn test_gender_mismatch_costs_twice_outside() {
    let evaluator = PreferenceEvaluator::default();
    let prefs = create_preferences("female");

    let seeking = evaluator
        .evaluate(&create_profile("f", 30, "female", "male"), &prefs)
        .unwrap();
    let other = evaluator
        .evaluate(&create_profile("m", 30, "male", "male"), &prefs)
        .unwrap();

    // +100 replaced by -20
    assert_eq!(seeking.score - other.score, 120.0);
    assert_eq!(other.mismatches.len(), 1);
    assert_eq!(other.mismatches[0].field, "gender");
    assert_eq!(other.mismatches[0].severity, Severity::Dealbreaker);
}

#[test]
fn test_mismatches_only_name_failing_fields() {
    let evaluator = PreferenceEvaluator::default();
    let mut prefs = create_preferences("female");
    prefs.smoking_tolerance = Tolerance::Dealbreaker;

    let mut candidate = create_profile("c", 50, "female", "male");
    candidate.details.smoking_status = Some(SmokingStatus::Regularly);
    candidate.details.height_cm = Some(150);

    let result = evaluator.evaluate(&candidate, &prefs).unwrap();
    let fields: Vec<&str> = result.mismatches.iter().map(|m| m.field).collect();

    assert_eq!(fields, vec!["age", "height", "smoking"]);
}

#[test]
fn test_missing_age_is_malformed() {
    let evaluator = PreferenceEvaluator::default();
    let mut candidate = create_profile("ageless", 30, "female", "male");
    candidate.age = None;

    let err = evaluator
        .evaluate(&candidate, &create_preferences("female"))
        .unwrap_err();
    assert_eq!(
        err,
        MatchError::MalformedInput {
            profile_id: "ageless".to_string(),
            field: "age",
        }
    );
}

#[test]
fn test_interest_overlap_properties() {
    assert_eq!(interest_overlap(&BTreeSet::new(), &BTreeSet::new()), 0.0);

    let x = strings(&["climbing", "jazz", "chess"]);
    assert_eq!(interest_overlap(&x, &x), 100.0);
    assert!((interest_overlap(&x, &strings(&["jazz"])) - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_personality_identical_midpoints() {
    let mid = midpoint_personality();
    assert_eq!(personality_compatibility(&mid, &mid), 90.0);
}

#[test]
fn test_compatibility_swap_keeps_shared_components() {
    let scorer = CompatibilityScorer::default();
    let a = create_profile("a", 30, "male", "female");
    let b = create_profile("b", 31, "female", "male");

    let ab = scorer.score(&a, &b).unwrap();
    let ba = scorer.score(&b, &a).unwrap();

    assert_eq!(ab.breakdown, ba.breakdown);
    assert_eq!(ab.score, ba.score);
    assert_eq!(ab.score, 104);
    assert!(ab.is_match);
    assert_eq!(ab.tier, MatchTier::Perfect);
}

#[test]
fn test_poor_pair_score_is_rounded_raw() {
    let scorer = CompatibilityScorer::default();
    let a = create_profile("a", 30, "male", "female");
    let mut b = create_profile("b", 64, "male", "female");
    b.details.height_cm = Some(200);
    b.details.interests = strings(&["golf"]);
    b.details.communication_style = Some("letters".to_string());

    let result = scorer.score(&a, &b).unwrap();
    // Preferences (65 + 230) / 2 / 300 -> 49.17%; 19.67 + 27 + 0 + 5
    assert!((result.raw_score - 51.6667).abs() < 1e-3);
    assert_eq!(result.score, 52);
    assert!(!result.is_match);
    assert_eq!(result.tier, MatchTier::Poor);
}

#[test]
fn test_match_probability_scenarios() {
    assert_eq!(estimate_match_probability(0, 0), 0);
    assert_eq!(estimate_match_probability(5, 10), 35);
    assert_eq!(estimate_match_probability(20, 5), 48);
}

#[test]
fn test_match_probability_saturates() {
    assert_eq!(estimate_match_probability(1000, 1000), 95);
    assert_eq!(estimate_match_probability(0, 10), 10);
}

#[test]
fn test_seeded_shuffle_is_reproducible() {
    let mut first: Vec<u32> = (0..20).collect();
    let mut second = first.clone();

    shuffle_head(&mut first, 10, &mut StdRng::seed_from_u64(7));
    shuffle_head(&mut second, 10, &mut StdRng::seed_from_u64(7));

    assert_eq!(first, second);
    assert_eq!(&first[10..], &(10..20).collect::<Vec<u32>>()[..]);

    let mut head: Vec<u32> = first[..10].to_vec();
    head.sort_unstable();
    assert_eq!(head, (0..10).collect::<Vec<u32>>());
}
