use std::collections::HashMap;

use crate::models::{Answer, Choice, DistancePreference, PreferenceProfile, PriceBucket, Question};

/// Fold an answer sequence into a tag -> reason lookup
///
/// Each non-skip answer contributes the tags of the chosen side of its
/// question, with a reason naming the choice. When two answers set the same
/// tag, the later answer wins. Answers referencing an unknown question id
/// contribute nothing.
pub fn tag_reasons(answers: &[Answer], questions: &[Question]) -> HashMap<String, String> {
    let mut reasons: HashMap<String, String> = HashMap::new();

    for answer in answers {
        if answer.choice == Choice::Skip {
            continue;
        }

        let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
            continue;
        };

        let (tags, choice_text) = match answer.choice {
            Choice::Left => (&question.left_tags, &question.left_choice),
            Choice::Right => (&question.right_tags, &question.right_choice),
            Choice::Skip => continue,
        };

        for tag in tags {
            reasons.insert(tag.clone(), format!("Matches your choice: \"{}\"", choice_text));
        }
    }

    reasons
}

fn push_unique(target: &mut Vec<String>, tag: &str) {
    if !target.iter().any(|existing| existing == tag) {
        target.push(tag.to_string());
    }
}

/// Fold answered tags into a preference profile by category
///
/// Uses the denormalized tag copies carried on each answer, so the question
/// catalog is not needed. Tags route to their category: price buckets,
/// near/far, ambience, meal types, tastes, diets, the `cafe` composite, and
/// everything else lands in cuisine. Returns a new profile.
pub fn apply_answers_to_preference(
    mut preference: PreferenceProfile,
    answers: &[Answer],
) -> PreferenceProfile {
    for answer in answers {
        for tag in answer.chosen_tags() {
            if let Some(bucket) = PriceBucket::from_tag(tag) {
                if !preference.price.contains(&bucket) {
                    preference.price.push(bucket);
                }
                continue;
            }
            match tag.as_str() {
                "near" => preference.distance_preference = DistancePreference::Near,
                "far" => preference.distance_preference = DistancePreference::Far,
                "casual" | "date" | "family" => push_unique(&mut preference.ambience, tag),
                "meal" | "snack" => push_unique(&mut preference.meal_type, tag),
                "cafe" => {
                    push_unique(&mut preference.meal_type, "snack");
                    push_unique(&mut preference.ambience, "casual");
                }
                "light" | "heavy" | "sweet" | "spicy" => push_unique(&mut preference.taste, tag),
                "vegetarian" | "vegan" | "halal" => push_unique(&mut preference.diet, tag),
                _ => push_unique(&mut preference.cuisine, tag),
            }
        }
    }

    preference
}

fn overlay(base: &mut PreferenceProfile, part: &PreferenceProfile) {
    if !part.cuisine.is_empty() {
        base.cuisine = part.cuisine.clone();
    }
    if !part.taste.is_empty() {
        base.taste = part.taste.clone();
    }
    if !part.price.is_empty() {
        base.price = part.price.clone();
    }
    if !part.ambience.is_empty() {
        base.ambience = part.ambience.clone();
    }
    if !part.meal_type.is_empty() {
        base.meal_type = part.meal_type.clone();
    }
    if !part.diet.is_empty() {
        base.diet = part.diet.clone();
    }
    if part.distance_preference != DistancePreference::NoPreference {
        base.distance_preference = part.distance_preference;
    }
    if !part.rationale.is_empty() {
        base.rationale = part.rationale.clone();
    }
    base.confidence = part.confidence;
}

/// Merge preference profiles with explicit precedence:
/// defaults -> stored -> runtime override
///
/// Later parts win field by field; empty lists and `no_preference` in a
/// later part do not erase earlier values. Returns a new profile, never
/// mutating the inputs.
pub fn merge_preference_profiles(
    stored: Option<&PreferenceProfile>,
    runtime_override: Option<&PreferenceProfile>,
) -> PreferenceProfile {
    let mut merged = PreferenceProfile::default();

    if let Some(part) = stored {
        overlay(&mut merged, part);
    }
    if let Some(part) = runtime_override {
        overlay(&mut merged, part);
    }

    merged
}

/// Render a profile as a short human-readable summary, one category per line
pub fn preference_summary(preference: Option<&PreferenceProfile>) -> String {
    let Some(pref) = preference else {
        return "No preference data yet".to_string();
    };

    let mut lines: Vec<String> = Vec::new();

    let categories: [(&str, &Vec<String>); 5] = [
        ("Cuisine", &pref.cuisine),
        ("Taste", &pref.taste),
        ("Ambience", &pref.ambience),
        ("Meal type", &pref.meal_type),
        ("Diet", &pref.diet),
    ];

    for (label, values) in categories {
        if !values.is_empty() {
            lines.push(format!("{}: {}", label, values.join(", ")));
        }
    }

    if !pref.price.is_empty() {
        let buckets: Vec<&str> = pref.price.iter().map(PriceBucket::as_str).collect();
        lines.push(format!("Price: {}", buckets.join(", ")));
    }

    let distance = match pref.distance_preference {
        DistancePreference::Near => "near",
        DistancePreference::Far => "far",
        DistancePreference::NoPreference => "no_preference",
    };
    lines.push(format!("Distance: {}", distance));

    lines.join("\n")
}
