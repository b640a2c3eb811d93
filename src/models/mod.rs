// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Answer, Choice, DistancePreference, Place, PreferenceProfile, PriceBucket, Question,
    RankedRestaurant, ScoringWeights, StructuredTags, UserLocation,
};
pub use requests::{LocationInput, QuestionsQuery, RankRequest, ScorePlacesRequest};
pub use responses::{ErrorResponse, HealthResponse, QuestionsResponse, RankResponse, ScoreResponse};
