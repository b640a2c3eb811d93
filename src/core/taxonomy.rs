//! Static tag taxonomy: provider category labels to internal tags.
//!
//! The maps provider describes places with category labels such as
//! `sushi_restaurant`. Scoring works on internal tags, so every label is
//! mapped through one declarative table. Unknown labels map to nothing.

use crate::models::{Place, PriceBucket, StructuredTags};

/// Internal tags contributed by a single provider category label
#[derive(Debug, Clone, Copy)]
struct TypeTags {
    cuisine: &'static [&'static str],
    taste: &'static [&'static str],
    ambience: &'static [&'static str],
    meal_type: &'static [&'static str],
    diet: &'static [&'static str],
}

const NO_TAGS: TypeTags = TypeTags {
    cuisine: &[],
    taste: &[],
    ambience: &[],
    meal_type: &[],
    diet: &[],
};

/// The one mapping table from provider label to structured tags
const TYPE_TO_TAGS: &[(&str, TypeTags)] = &[
    ("cafe", TypeTags { ambience: &["casual"], meal_type: &["snack"], ..NO_TAGS }),
    ("bakery", TypeTags { meal_type: &["snack"], taste: &["sweet"], ..NO_TAGS }),
    ("snack_bar", TypeTags { meal_type: &["snack"], ..NO_TAGS }),
    ("bar", TypeTags { ambience: &["casual"], meal_type: &["snack"], ..NO_TAGS }),
    ("meal_takeaway", TypeTags { ambience: &["casual"], meal_type: &["meal"], ..NO_TAGS }),
    ("meal_delivery", TypeTags { ambience: &["casual"], meal_type: &["meal"], ..NO_TAGS }),
    ("restaurant", TypeTags { meal_type: &["meal"], ..NO_TAGS }),
    ("japanese_restaurant", TypeTags { cuisine: &["japanese"], taste: &["light"], ..NO_TAGS }),
    ("sushi_restaurant", TypeTags { cuisine: &["japanese"], taste: &["light"], ..NO_TAGS }),
    ("korean_restaurant", TypeTags { cuisine: &["korean"], ..NO_TAGS }),
    ("chinese_restaurant", TypeTags { cuisine: &["chinese"], taste: &["light"], ..NO_TAGS }),
    ("ramen_restaurant", TypeTags { cuisine: &["japanese"], taste: &["heavy"], meal_type: &["meal"], ..NO_TAGS }),
    ("steak_house", TypeTags { taste: &["heavy"], meal_type: &["meal"], ..NO_TAGS }),
    ("hamburger_restaurant", TypeTags { taste: &["heavy"], meal_type: &["meal"], ..NO_TAGS }),
    ("barbecue_restaurant", TypeTags { taste: &["heavy"], meal_type: &["meal"], ..NO_TAGS }),
    ("vegetarian_restaurant", TypeTags { diet: &["vegetarian"], ..NO_TAGS }),
    ("vegan_restaurant", TypeTags { diet: &["vegan"], ..NO_TAGS }),
    ("halal_restaurant", TypeTags { diet: &["halal"], ..NO_TAGS }),
];

fn lookup(provider_type: &str) -> Option<&'static TypeTags> {
    TYPE_TO_TAGS
        .iter()
        .find(|(label, _)| *label == provider_type)
        .map(|(_, tags)| tags)
}

fn push_unique(target: &mut Vec<String>, values: &[&str]) {
    for value in values {
        if !target.iter().any(|existing| existing == value) {
            target.push((*value).to_string());
        }
    }
}

/// Map provider category labels to per-category structured tags
pub fn map_provider_types(types: &[String]) -> StructuredTags {
    let mut tags = StructuredTags::default();

    for provider_type in types {
        let Some(mapped) = lookup(provider_type) else {
            continue;
        };
        push_unique(&mut tags.cuisine, mapped.cuisine);
        push_unique(&mut tags.taste, mapped.taste);
        push_unique(&mut tags.ambience, mapped.ambience);
        push_unique(&mut tags.meal_type, mapped.meal_type);
        push_unique(&mut tags.diet, mapped.diet);
    }

    tags
}

/// Flatten structured tags into the deduplicated flat tag list used by the
/// flat-tag ranking mode
pub fn flatten_tags(tags: &StructuredTags) -> Vec<String> {
    let mut flat: Vec<String> = Vec::new();
    for category in [
        &tags.cuisine,
        &tags.taste,
        &tags.ambience,
        &tags.meal_type,
        &tags.diet,
    ] {
        for tag in category {
            if !flat.contains(tag) {
                flat.push(tag.clone());
            }
        }
    }
    flat
}

/// Coarse flat mapping used for candidates arriving from the LLM
/// recommendation path, which only need broad food-attribute tags
pub fn coarse_provider_tags(types: &[String]) -> Vec<String> {
    let has = |label: &str| types.iter().any(|t| t == label);

    let mut tags = vec!["meal".to_string()];

    if has("cafe") || has("bakery") || has("dessert_shop") {
        tags.push("snack".to_string());
    }
    if has("japanese_restaurant") || has("sushi_restaurant") || has("vegetarian_restaurant") {
        tags.push("light".to_string());
    }
    if has("steak_house")
        || has("hamburger_restaurant")
        || has("barbecue_restaurant")
        || has("brazilian_steakhouse")
    {
        tags.push("heavy".to_string());
    }
    if has("chinese_restaurant") || has("ramen_restaurant") || has("noodle_shop") {
        tags.push("noodle".to_string());
    }
    if (has("fast_food_restaurant") || has("sandwich_shop"))
        && !tags.iter().any(|t| t == "snack")
    {
        tags.push("snack".to_string());
    }

    tags
}

/// Convert the provider's numeric price level to a price bucket
pub fn price_level_to_bucket(price_level: Option<u8>) -> Option<PriceBucket> {
    let level = price_level?;
    if level <= 1 {
        Some(PriceBucket::Budget)
    } else if level == 2 {
        Some(PriceBucket::Mid)
    } else {
        Some(PriceBucket::High)
    }
}

/// Fill derivable fields on a candidate that arrived with raw provider data
///
/// Structured tags, flat tags, and the price bucket are only derived when
/// the caller did not supply them; supplied values always win.
pub fn normalize_place(mut place: Place) -> Place {
    if place.structured_tags.is_none() && !place.types.is_empty() {
        place.structured_tags = Some(map_provider_types(&place.types));
    }

    if place.tags.is_empty() {
        if let Some(structured) = &place.structured_tags {
            place.tags = flatten_tags(structured);
        }
    }

    if place.price_bucket.is_none() {
        place.price_bucket = price_level_to_bucket(place.price_level);
    }

    place
}
