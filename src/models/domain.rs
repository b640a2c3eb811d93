use serde::{Deserialize, Serialize};

/// Binary swipe question shown to the user during a quiz session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(rename = "leftChoice")]
    pub left_choice: String,
    #[serde(rename = "rightChoice")]
    pub right_choice: String,
    #[serde(rename = "skipChoice")]
    pub skip_choice: String,
    #[serde(rename = "leftTags")]
    pub left_tags: Vec<String>,
    #[serde(rename = "rightTags")]
    pub right_tags: Vec<String>,
}

/// Which side of the card the user swiped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Left,
    Right,
    Skip,
}

/// One answered quiz card
///
/// The tag sets are denormalized copies of the question's tags so that a
/// client can submit a self-contained answer sequence without the question
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    pub choice: Choice,
    #[serde(rename = "leftTags", default)]
    pub left_tags: Vec<String>,
    #[serde(rename = "rightTags", default)]
    pub right_tags: Vec<String>,
}

impl Answer {
    /// Tags selected by this answer; empty for skips
    pub fn chosen_tags(&self) -> &[String] {
        match self.choice {
            Choice::Left => &self.left_tags,
            Choice::Right => &self.right_tags,
            Choice::Skip => &[],
        }
    }
}

/// Coarse price tier derived from the provider's price level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
    Budget,
    Mid,
    High,
}

impl PriceBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::Budget => "budget",
            PriceBucket::Mid => "mid",
            PriceBucket::High => "high",
        }
    }

    /// Parse a quiz tag into a price bucket, if it names one
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "budget" => Some(PriceBucket::Budget),
            "mid" => Some(PriceBucket::Mid),
            "high" => Some(PriceBucket::High),
            _ => None,
        }
    }
}

/// User's inferred distance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistancePreference {
    Near,
    Far,
    NoPreference,
}

/// Per-category tags derived from the provider's place types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredTags {
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default)]
    pub taste: Vec<String>,
    #[serde(default)]
    pub ambience: Vec<String>,
    #[serde(rename = "mealType", default)]
    pub meal_type: Vec<String>,
    #[serde(default)]
    pub diet: Vec<String>,
}

/// Structured taste preferences, built from quiz answers or supplied by an
/// external inference step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default)]
    pub taste: Vec<String>,
    #[serde(default)]
    pub price: Vec<PriceBucket>,
    #[serde(default)]
    pub ambience: Vec<String>,
    #[serde(rename = "mealType", default)]
    pub meal_type: Vec<String>,
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(rename = "distancePreference", default = "default_distance_preference")]
    pub distance_preference: DistancePreference,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub rationale: Vec<String>,
}

fn default_distance_preference() -> DistancePreference {
    DistancePreference::NoPreference
}

fn default_confidence() -> f64 {
    0.4
}

impl Default for PreferenceProfile {
    /// The fallback profile used when no inference data is available:
    /// empty category lists, no distance preference, low confidence
    fn default() -> Self {
        Self {
            cuisine: vec![],
            taste: vec![],
            price: vec![],
            ambience: vec![],
            meal_type: vec![],
            diet: vec![],
            distance_preference: DistancePreference::NoPreference,
            confidence: default_confidence(),
            rationale: vec![],
        }
    }
}

/// Restaurant candidate supplied by the caller (sourced from a maps
/// provider upstream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Raw category labels from the maps provider, e.g. `sushi_restaurant`
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(rename = "structuredTags", default)]
    pub structured_tags: Option<StructuredTags>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "priceLevel", default)]
    pub price_level: Option<u8>,
    #[serde(rename = "priceBucket", default)]
    pub price_bucket: Option<PriceBucket>,
    #[serde(rename = "openNow", default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "locationUrl", default)]
    pub location_url: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub distance: f64,
}

impl Place {
    /// Helper to get open_now as a bool, defaulting to false
    pub fn open(&self) -> bool {
        self.open_now.unwrap_or(false)
    }
}

/// Live user location for distance recomputation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Scored ranking result for a single restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRestaurant {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<String>,
    #[serde(rename = "structuredTags")]
    pub structured_tags: Option<StructuredTags>,
    pub rating: Option<f64>,
    #[serde(rename = "priceBucket")]
    pub price_bucket: Option<PriceBucket>,
    #[serde(rename = "openNow")]
    pub open_now: Option<bool>,
    pub address: Option<String>,
    #[serde(rename = "locationUrl")]
    pub location_url: Option<String>,
    pub reason: Option<String>,
    #[serde(rename = "distanceKm")]
    pub distance: f64,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl RankedRestaurant {
    /// Build a ranking row from a candidate; inputs are never mutated
    pub fn from_place(place: &Place, distance: f64, score: f64, reasons: Vec<String>) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
            tags: place.tags.clone(),
            structured_tags: place.structured_tags.clone(),
            rating: place.rating,
            price_bucket: place.price_bucket,
            open_now: place.open_now,
            address: place.address.clone(),
            location_url: place.location_url.clone(),
            reason: place.reason.clone(),
            distance,
            score,
            reasons,
        }
    }
}

/// Scoring weights
///
/// Category weights apply to the structured-preference mode; `scenario` is
/// the flat-mode weight for usage-context tags (budget, luxury, gathering,
/// solo, quiet, lively).
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub cuisine: f64,
    pub taste: f64,
    pub ambience: f64,
    pub meal_type: f64,
    pub diet: f64,
    pub scenario: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cuisine: 2.0,
            taste: 1.5,
            ambience: 1.0,
            meal_type: 1.0,
            diet: 1.5,
            scenario: 2.0,
        }
    }
}
