// Core algorithm exports
pub mod catalog;
pub mod distance;
pub mod preferences;
pub mod ranking;
pub mod scoring;
pub mod taxonomy;

pub use distance::{haversine_distance, resolved_distance, round_km};
pub use preferences::{
    apply_answers_to_preference, merge_preference_profiles, preference_summary, tag_reasons,
};
pub use ranking::Ranker;
pub use scoring::calculate_place_score;
pub use taxonomy::{
    coarse_provider_tags, flatten_tags, map_provider_types, normalize_place, price_level_to_bucket,
};
