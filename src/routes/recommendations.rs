use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use thiserror::Error;
use validator::Validate;

use crate::core::{
    apply_answers_to_preference, catalog, coarse_provider_tags, merge_preference_profiles,
    normalize_place, Ranker,
};
use crate::models::{
    ErrorResponse, HealthResponse, Place, QuestionsQuery, QuestionsResponse, RankRequest,
    RankResponse, ScorePlacesRequest, ScoreResponse, UserLocation,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
}

/// Errors surfaced by the recommendation endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown quiz phase: {0}")]
    UnknownPhase(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::UnknownPhase(_) => "unknown_phase",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/questions", web::get().to(get_questions))
        .route("/recommendations/rank", web::post().to(rank_restaurants))
        .route("/recommendations/score", web::post().to(score_places));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Question catalog endpoint
///
/// GET /api/v1/recommendations/questions?phase=starter|dynamic&confidence=0.4
async fn get_questions(query: web::Query<QuestionsQuery>) -> Result<HttpResponse, ApiError> {
    let phase = query.phase.as_deref().unwrap_or("starter");

    let questions = match phase {
        "starter" => catalog::starter_questions(),
        "dynamic" => catalog::dynamic_questions(query.confidence.unwrap_or(0.4)),
        other => return Err(ApiError::UnknownPhase(other.to_string())),
    };

    tracing::debug!("Serving {} {} questions", questions.len(), phase);

    Ok(HttpResponse::Ok().json(QuestionsResponse {
        phase: phase.to_string(),
        questions,
    }))
}

/// Candidates from the LLM recommendation path arrive with raw provider
/// types only; give them the coarse flat tags before ranking
fn with_flat_tags(restaurants: Vec<Place>) -> Vec<Place> {
    restaurants
        .into_iter()
        .map(|mut restaurant| {
            if restaurant.tags.is_empty() && !restaurant.types.is_empty() {
                restaurant.tags = coarse_provider_tags(&restaurant.types);
            }
            restaurant
        })
        .collect()
}

/// Flat-tag ranking endpoint
///
/// POST /api/v1/recommendations/rank
///
/// Request body:
/// ```json
/// {
///   "answers": [{"questionId": 1, "choice": "left"}],
///   "restaurants": [{"id": "...", "name": "...", "tags": ["rice"]}],
///   "questions": [],
///   "location": {"latitude": 25.03, "longitude": 121.53}
/// }
/// ```
async fn rank_restaurants(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return Err(ApiError::Validation(errors.to_string()));
    }

    let request = req.into_inner();
    let questions = request.questions.unwrap_or_else(catalog::all_questions);
    let restaurants = with_flat_tags(request.restaurants);
    let location: Option<UserLocation> = request.location.map(Into::into);
    let total_candidates = restaurants.len();

    tracing::info!(
        "Ranking {} restaurants against {} answers (live location: {})",
        total_candidates,
        request.answers.len(),
        location.is_some()
    );

    let results = state
        .ranker
        .rank(&request.answers, &restaurants, &questions, location);

    Ok(HttpResponse::Ok().json(RankResponse {
        results,
        total_candidates,
    }))
}

/// Structured-preference scoring endpoint
///
/// POST /api/v1/recommendations/score
///
/// Merges the stored profile and the per-request override, folds the
/// session's answers in, then scores the supplied places.
async fn score_places(
    state: web::Data<AppState>,
    req: web::Json<ScorePlacesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return Err(ApiError::Validation(errors.to_string()));
    }

    let request = req.into_inner();

    let merged =
        merge_preference_profiles(request.preference.as_ref(), request.preference_override.as_ref());
    let preference = apply_answers_to_preference(merged, &request.answers);

    let places: Vec<Place> = request.places.into_iter().map(normalize_place).collect();
    let location = UserLocation::from(request.location);

    tracing::info!(
        "Scoring {} places (confidence: {:.2})",
        places.len(),
        preference.confidence
    );

    let results = state.ranker.score_places(&places, &preference, Some(location));

    tracing::debug!("Top result: {:?}", results.first().map(|r| &r.id));

    Ok(HttpResponse::Ok().json(ScoreResponse { results, preference }))
}
