use serde::{Deserialize, Serialize};

use crate::models::domain::{PreferenceProfile, Question, RankedRestaurant};

/// Response for the flat-tag ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub results: Vec<RankedRestaurant>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the structured-preference scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub results: Vec<RankedRestaurant>,
    /// The merged profile that was actually scored against, echoed back so
    /// the caller can persist it
    pub preference: PreferenceProfile,
}

/// Response for the question catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub phase: String,
    pub questions: Vec<Question>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
