// Integration tests for EatWhat Algo

use eatwhat_algo::core::{
    apply_answers_to_preference, catalog, merge_preference_profiles, normalize_place, Ranker,
};
use eatwhat_algo::models::{
    Answer, Choice, DistancePreference, Place, PreferenceProfile, PriceBucket, UserLocation,
};

fn place(id: &str, lat: f64, lon: f64, types: &[&str]) -> Place {
    Place {
        id: id.to_string(),
        name: format!("Place {}", id),
        latitude: lat,
        longitude: lon,
        tags: vec![],
        types: types.iter().map(|t| t.to_string()).collect(),
        structured_tags: None,
        rating: None,
        price_level: None,
        price_bucket: None,
        open_now: None,
        address: None,
        location_url: None,
        reason: None,
        distance: 0.0,
    }
}

fn answer_with_tags(question_id: u32, choice: Choice, left: &[&str], right: &[&str]) -> Answer {
    Answer {
        question_id,
        choice,
        left_tags: left.iter().map(|t| t.to_string()).collect(),
        right_tags: right.iter().map(|t| t.to_string()).collect(),
    }
}

// Full structured flow: answers fold into a profile, places arrive with raw
// provider data, scoring ranks the matching cuisine first.
#[test]
fn test_integration_end_to_end_structured_scoring() {
    let ranker = Ranker::with_default_weights();
    let user = UserLocation {
        latitude: 25.0330,
        longitude: 121.5654,
    };

    // Session answers: japanese cuisine, light taste, budget price
    let answers = vec![
        answer_with_tags(1, Choice::Left, &["japanese"], &["chinese"]),
        answer_with_tags(2, Choice::Left, &["light"], &["heavy"]),
        answer_with_tags(3, Choice::Left, &["budget"], &["high"]),
    ];

    let merged = merge_preference_profiles(None, None);
    let preference = apply_answers_to_preference(merged, &answers);

    assert_eq!(preference.cuisine, vec!["japanese"]);
    assert_eq!(preference.taste, vec!["light"]);
    assert_eq!(preference.price, vec![PriceBucket::Budget]);

    // Candidates straight from the provider, normalized before scoring
    let mut sushi = place("sushi", 25.0335, 121.5660, &["sushi_restaurant", "restaurant"]);
    sushi.rating = Some(4.5);
    sushi.price_level = Some(1);
    sushi.open_now = Some(true);

    let mut steak = place("steak", 25.0340, 121.5670, &["steak_house", "restaurant"]);
    steak.rating = Some(4.8);
    steak.price_level = Some(4);

    let places: Vec<Place> = vec![sushi, steak].into_iter().map(normalize_place).collect();

    let ranked = ranker.score_places(&places, &preference, Some(user));

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].id, "sushi");
    assert!(ranked[0].score > ranked[1].score);
    // cuisine 2.0 + taste 1.5 + price 1.0 + rating 0.9 + open 0.5
    assert!((ranked[0].score - 5.9).abs() < 1e-9);
    assert!(ranked[0].reasons.iter().any(|r| r.contains("japanese")));
    assert!(ranked[0].reasons.iter().any(|r| r.contains("budget")));

    // Distances recomputed from the live location
    assert!(ranked.iter().all(|r| r.distance < 2.0));
}

// Full flat flow against the built-in catalog.
#[test]
fn test_integration_flat_ranking_with_catalog() {
    let ranker = Ranker::with_default_weights();
    let questions = catalog::all_questions();

    // Catalog question 1 is meal vs snack; choose meal
    let answers = vec![Answer {
        question_id: 1,
        choice: Choice::Left,
        left_tags: vec![],
        right_tags: vec![],
    }];

    let mut diner = place("diner", 0.0, 0.0, &[]);
    diner.tags = vec!["meal".to_string()];
    diner.distance = 0.8;

    let mut stand = place("stand", 0.0, 0.0, &[]);
    stand.tags = vec!["snack".to_string()];
    stand.distance = 0.3;

    let ranked = ranker.rank(&answers, &[diner, stand], &questions, None);

    assert_eq!(ranked[0].id, "diner");
    assert_eq!(ranked[0].score, 1.0);
    assert_eq!(ranked[0].reasons, vec!["Matches your choice: \"Meal\""]);
    assert_eq!(ranked[1].score, 0.0);
}

// Profile merge precedence across the whole pipeline: stored profile,
// runtime override, then session answers on top.
#[test]
fn test_integration_profile_layering() {
    let stored = PreferenceProfile {
        cuisine: vec!["chinese".to_string()],
        distance_preference: DistancePreference::Far,
        confidence: 0.6,
        ..PreferenceProfile::default()
    };
    let runtime = PreferenceProfile {
        cuisine: vec!["japanese".to_string()],
        confidence: 0.9,
        ..PreferenceProfile::default()
    };

    let merged = merge_preference_profiles(Some(&stored), Some(&runtime));
    let answers = vec![answer_with_tags(1, Choice::Right, &["near"], &["far"])];
    let preference = apply_answers_to_preference(merged, &answers);

    assert_eq!(preference.cuisine, vec!["japanese"]);
    assert_eq!(preference.distance_preference, DistancePreference::Far);
    assert_eq!(preference.confidence, 0.9);
}

// Ranked output sorted by score then distance across a larger candidate
// set.
#[test]
fn test_integration_ordering_invariants() {
    let ranker = Ranker::with_default_weights();
    let preference = PreferenceProfile {
        distance_preference: DistancePreference::Near,
        ..PreferenceProfile::default()
    };

    let places: Vec<Place> = (0..20)
        .map(|i| {
            let mut p = place(&i.to_string(), 0.0, 0.0, &[]);
            p.distance = 0.5 + (i as f64) * 0.2;
            p.rating = if i % 2 == 0 { Some(4.0) } else { None };
            p
        })
        .collect();

    let ranked = ranker.score_places(&places, &preference, None);

    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.distance <= b.distance),
            "Ordering violated: ({}, {}) before ({}, {})",
            a.score,
            a.distance,
            b.score,
            b.distance
        );
    }
}
