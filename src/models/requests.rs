use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Answer, Place, PreferenceProfile, Question, UserLocation};

/// Caller-supplied location, range-checked before use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct LocationInput {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl From<LocationInput> for UserLocation {
    fn from(input: LocationInput) -> Self {
        Self {
            latitude: input.latitude,
            longitude: input.longitude,
        }
    }
}

/// Request to rank restaurants against quiz answers (flat-tag mode)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub restaurants: Vec<Place>,
    /// Question catalog override; defaults to the built-in catalog
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
    #[validate(nested)]
    #[serde(default)]
    pub location: Option<LocationInput>,
}

/// Request to score places against a structured preference profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorePlacesRequest {
    #[serde(default)]
    pub places: Vec<Place>,
    /// Stored profile from a previous inference step, if any
    #[serde(default)]
    pub preference: Option<PreferenceProfile>,
    /// Per-request override applied on top of the stored profile
    #[serde(rename = "preferenceOverride", default)]
    pub preference_override: Option<PreferenceProfile>,
    /// Answers from the current session, folded into the profile before
    /// scoring
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[validate(nested)]
    pub location: LocationInput,
}

/// Query parameters for the question catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsQuery {
    #[serde(default)]
    pub phase: Option<String>,
    /// Profile confidence, used to size the dynamic question set
    #[serde(default)]
    pub confidence: Option<f64>,
}
