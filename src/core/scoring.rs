use crate::models::{DistancePreference, Place, PreferenceProfile, ScoringWeights};

/// Flat bonus when the place's price bucket is in the preferred list
const PRICE_MATCH_BONUS: f64 = 1.0;
/// Near-preference bonus applies within this radius
const NEAR_THRESHOLD_KM: f64 = 1.5;
const NEAR_BONUS: f64 = 2.0;
/// Far-preference bonus applies beyond this radius; the asymmetry with the
/// near bonus is intentional and must be preserved
const FAR_THRESHOLD_KM: f64 = 2.0;
const FAR_BONUS: f64 = 1.0;
const OPEN_NOW_BONUS: f64 = 0.5;
/// Ratings are on a 0-5 scale
const RATING_SCALE: f64 = 5.0;

/// Score a single place against a structured preference profile
///
/// Scoring formula:
///     category matches * category weight   # cuisine x2.0, taste x1.5,
///                                          # ambience x1.0, mealType x1.0,
///                                          # diet x1.5
///   + price bucket match (+1.0)
///   + distance preference (near: +2.0 at <=1.5km, far: +1.0 at >=2.0km)
///   + rating / 5                           # always reasoned when rated
///   + open now (+0.5)
///
/// Returns the score and the reasons gathered along the way.
pub fn calculate_place_score(
    place: &Place,
    preference: &PreferenceProfile,
    weights: &ScoringWeights,
    distance_km: f64,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons: Vec<String> = Vec::new();

    if let Some(structured) = &place.structured_tags {
        category_match(&preference.cuisine, &structured.cuisine, weights.cuisine, &mut score, &mut reasons);
        category_match(&preference.taste, &structured.taste, weights.taste, &mut score, &mut reasons);
        category_match(&preference.ambience, &structured.ambience, weights.ambience, &mut score, &mut reasons);
        category_match(&preference.meal_type, &structured.meal_type, weights.meal_type, &mut score, &mut reasons);
        category_match(&preference.diet, &structured.diet, weights.diet, &mut score, &mut reasons);
    }

    if !preference.price.is_empty() {
        if let Some(bucket) = place.price_bucket {
            if preference.price.contains(&bucket) {
                score += PRICE_MATCH_BONUS;
                reasons.push(format!("Price fits: {}", bucket.as_str()));
            }
        }
    }

    if preference.distance_preference == DistancePreference::Near && distance_km <= NEAR_THRESHOLD_KM
    {
        score += NEAR_BONUS;
        reasons.push("Distance preference: near".to_string());
    }
    if preference.distance_preference == DistancePreference::Far && distance_km >= FAR_THRESHOLD_KM {
        score += FAR_BONUS;
        reasons.push("Distance preference: far".to_string());
    }

    if let Some(rating) = place.rating {
        score += rating / RATING_SCALE;
        reasons.push(format!("Well rated: {}", rating));
    }

    if place.open() {
        score += OPEN_NOW_BONUS;
        reasons.push("Open now".to_string());
    }

    (score, reasons)
}

/// Intersect one preference category with the place's tags in that category
#[inline]
fn category_match(
    preferred: &[String],
    place_tags: &[String],
    weight: f64,
    score: &mut f64,
    reasons: &mut Vec<String>,
) {
    if preferred.is_empty() {
        return;
    }

    let matches: Vec<&str> = preferred
        .iter()
        .filter(|label| place_tags.contains(label))
        .map(String::as_str)
        .collect();

    if !matches.is_empty() {
        *score += matches.len() as f64 * weight;
        reasons.push(format!("Matches your preferences: {}", matches.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceBucket, StructuredTags};

    fn place_with_tags(structured: StructuredTags) -> Place {
        Place {
            id: "p".to_string(),
            name: "Test Place".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            tags: vec![],
            types: vec![],
            structured_tags: Some(structured),
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

    #[test]
    fn test_cuisine_match_weighted() {
        let place = place_with_tags(StructuredTags {
            cuisine: vec!["japanese".to_string()],
            ..StructuredTags::default()
        });
        let preference = PreferenceProfile {
            cuisine: vec!["japanese".to_string()],
            ..PreferenceProfile::default()
        };

        let (score, reasons) =
            calculate_place_score(&place, &preference, &ScoringWeights::default(), 0.0);

        assert_eq!(score, 2.0);
        assert_eq!(reasons, vec!["Matches your preferences: japanese"]);
    }

    #[test]
    fn test_multiple_category_matches_accumulate() {
        let place = place_with_tags(StructuredTags {
            cuisine: vec!["japanese".to_string()],
            taste: vec!["light".to_string()],
            ..StructuredTags::default()
        });
        let preference = PreferenceProfile {
            cuisine: vec!["japanese".to_string()],
            taste: vec!["light".to_string()],
            ..PreferenceProfile::default()
        };

        let (score, reasons) =
            calculate_place_score(&place, &preference, &ScoringWeights::default(), 0.0);

        // 2.0 cuisine + 1.5 taste
        assert_eq!(score, 3.5);
        assert_eq!(reasons.len(), 2);
    }

    #[test]
    fn test_price_bucket_match() {
        let mut place = place_with_tags(StructuredTags::default());
        place.price_bucket = Some(PriceBucket::Budget);
        let preference = PreferenceProfile {
            price: vec![PriceBucket::Budget],
            ..PreferenceProfile::default()
        };

        let (score, reasons) =
            calculate_place_score(&place, &preference, &ScoringWeights::default(), 0.0);

        assert_eq!(score, 1.0);
        assert_eq!(reasons, vec!["Price fits: budget"]);
    }

    #[test]
    fn test_distance_preference_asymmetry() {
        let place = place_with_tags(StructuredTags::default());

        let near_pref = PreferenceProfile {
            distance_preference: DistancePreference::Near,
            ..PreferenceProfile::default()
        };
        let far_pref = PreferenceProfile {
            distance_preference: DistancePreference::Far,
            ..PreferenceProfile::default()
        };
        let weights = ScoringWeights::default();

        let (near_close, _) = calculate_place_score(&place, &near_pref, &weights, 1.5);
        let (near_far, _) = calculate_place_score(&place, &near_pref, &weights, 1.6);
        let (far_far, _) = calculate_place_score(&place, &far_pref, &weights, 2.0);
        let (far_close, _) = calculate_place_score(&place, &far_pref, &weights, 1.9);

        assert_eq!(near_close, 2.0);
        assert_eq!(near_far, 0.0);
        assert_eq!(far_far, 1.0);
        assert_eq!(far_close, 0.0);
    }

    #[test]
    fn test_rating_bonus_always_reasoned() {
        let mut place = place_with_tags(StructuredTags::default());
        place.rating = Some(4.5);
        let preference = PreferenceProfile::default();

        let (score, reasons) =
            calculate_place_score(&place, &preference, &ScoringWeights::default(), 0.0);

        // No preference match at all, but the rating still contributes a
        // score and a reason.
        assert_eq!(score, 0.9);
        assert_eq!(reasons, vec!["Well rated: 4.5"]);
    }

    #[test]
    fn test_open_now_bonus() {
        let mut place = place_with_tags(StructuredTags::default());
        place.open_now = Some(true);
        let preference = PreferenceProfile::default();

        let (score, reasons) =
            calculate_place_score(&place, &preference, &ScoringWeights::default(), 0.0);

        assert_eq!(score, 0.5);
        assert_eq!(reasons, vec!["Open now"]);
    }

    #[test]
    fn test_missing_optional_fields_default_safely() {
        let mut place = place_with_tags(StructuredTags::default());
        place.structured_tags = None;
        let preference = PreferenceProfile {
            cuisine: vec!["japanese".to_string()],
            price: vec![PriceBucket::High],
            ..PreferenceProfile::default()
        };

        let (score, reasons) =
            calculate_place_score(&place, &preference, &ScoringWeights::default(), 0.0);

        assert_eq!(score, 0.0);
        assert!(reasons.is_empty());
    }
}
