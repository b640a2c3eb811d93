//! EatWhat Algo - preference-scoring and ranking service for the EatWhat
//! restaurant recommender
//!
//! This library provides the scoring core used by the EatWhat app: it folds
//! a user's swipe-quiz answers into tag preferences and ranks restaurant
//! candidates against them, in either flat-tag or structured-preference
//! mode.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{haversine_distance, tag_reasons, Ranker};
pub use models::{
    Answer, Choice, Place, PreferenceProfile, Question, RankedRestaurant, ScoringWeights,
    UserLocation,
};
