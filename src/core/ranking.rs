use crate::core::{
    distance::resolved_distance, preferences::tag_reasons, scoring::calculate_place_score,
};
use crate::models::{
    Answer, Place, PreferenceProfile, Question, RankedRestaurant, ScoringWeights, UserLocation,
};

/// Usage-context tags that carry more weight than food-attribute tags
const SCENARIO_TAGS: [&str; 6] = ["budget", "luxury", "gathering", "solo", "quiet", "lively"];

/// Ranking engine for restaurant candidates
///
/// Two modes share the same distance handling and ordering rule:
/// - flat-tag mode (`rank`) scores against a tag -> reason map folded from
///   quiz answers
/// - structured mode (`score_places`) scores against a categorized
///   preference profile
///
/// Both are pure, synchronous transformations: no I/O, no shared state, no
/// mutation of inputs.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank restaurants against quiz answers (flat-tag mode)
    ///
    /// Each tag on a restaurant that the user's answers expressed a
    /// preference for adds 1 to the score, or the scenario weight for
    /// usage-context tags. A restaurant carrying an externally supplied
    /// recommendation reason keeps it and is never ranked as
    /// zero-relevance. Ordering is a stable sort by score descending, then
    /// distance ascending; ties keep input order.
    pub fn rank(
        &self,
        answers: &[Answer],
        restaurants: &[Place],
        questions: &[Question],
        user_location: Option<UserLocation>,
    ) -> Vec<RankedRestaurant> {
        let reason_by_tag = tag_reasons(answers, questions);

        let mut ranked: Vec<RankedRestaurant> = restaurants
            .iter()
            .map(|restaurant| {
                let mut score = 0.0;
                let mut reasons: Vec<String> = Vec::new();

                for tag in &restaurant.tags {
                    if let Some(reason) = reason_by_tag.get(tag) {
                        score += if SCENARIO_TAGS.contains(&tag.as_str()) {
                            self.weights.scenario
                        } else {
                            1.0
                        };
                        if !reasons.contains(reason) {
                            reasons.push(reason.clone());
                        }
                    }
                }

                // An externally-reasoned pick (e.g. from the LLM
                // recommender) keeps its reason and never scores zero.
                if let Some(external) = &restaurant.reason {
                    if !reasons.contains(external) {
                        reasons.push(external.clone());
                    }
                    if score == 0.0 {
                        score = 1.0;
                    }
                }

                let distance = resolved_distance(restaurant, user_location);
                RankedRestaurant::from_place(restaurant, distance, score, reasons)
            })
            .collect();

        sort_ranked(&mut ranked);
        ranked
    }

    /// Score places against a structured preference profile
    ///
    /// Applies the weighted category intersections plus price, distance,
    /// rating, and open-now bonuses, then orders with the same stable rule
    /// as `rank`.
    pub fn score_places(
        &self,
        places: &[Place],
        preference: &PreferenceProfile,
        user_location: Option<UserLocation>,
    ) -> Vec<RankedRestaurant> {
        let mut ranked: Vec<RankedRestaurant> = places
            .iter()
            .map(|place| {
                let distance = resolved_distance(place, user_location);
                let (score, reasons) =
                    calculate_place_score(place, preference, &self.weights, distance);
                RankedRestaurant::from_place(place, distance, score, reasons)
            })
            .collect();

        sort_ranked(&mut ranked);
        ranked
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Stable sort by score (descending), then distance (ascending)
///
/// `sort_by` is stable, so candidates with equal score and distance keep
/// their original relative order.
fn sort_ranked(ranked: &mut [RankedRestaurant]) {
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.distance
                    .partial_cmp(&b.distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}
