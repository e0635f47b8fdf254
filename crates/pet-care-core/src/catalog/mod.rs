//! Static care recommendation tables.
//!
//! Each concern has one table keyed by [`PetType`]. Tables are exhaustive
//! `match`es, so a pet type without an entry does not compile. [`audit`]
//! covers the remaining content defects (blank text, empty lists).

mod feeding;
mod play;
mod temperature;
mod toys;

pub use feeding::feeding;
pub use play::play_activities;
pub use temperature::temperature;
pub use toys::{toys, SHOPPING_TIPS};

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{FeedingRecord, PetType, PlayActivityRecord, TemperatureRecord, ToyRecord};

/// Content defects found by [`audit`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("{pet} {table} entry has a blank field: {field}")]
    BlankField {
        pet: PetType,
        table: &'static str,
        field: String,
    },

    #[error("{pet} {table} entry has an empty list: {field}")]
    EmptyList {
        pet: PetType,
        table: &'static str,
        field: String,
    },

    #[error("{pet} toy '{toy}' has rating {rating} outside 0-5")]
    RatingOutOfRange {
        pet: PetType,
        toy: &'static str,
        rating: f64,
    },

    #[error("Failed to serialize care content: {0}")]
    Serialize(String),
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Every record for one pet type.
#[derive(Debug, Clone, Serialize)]
pub struct CareBundle {
    pub pet_type: PetType,
    pub feeding: &'static FeedingRecord,
    pub temperature: &'static TemperatureRecord,
    pub play: &'static PlayActivityRecord,
    pub toys: &'static ToyRecord,
}

/// Look up every table for one pet type.
pub fn bundle(pet: PetType) -> CareBundle {
    CareBundle {
        pet_type: pet,
        feeding: feeding(pet),
        temperature: temperature(pet),
        play: play_activities(pet),
        toys: toys(pet),
    }
}

/// Check shipped content for blank fields, empty lists and bad ratings.
///
/// Returns every defect found, not just the first.
pub fn audit() -> Result<(), Vec<ContentError>> {
    let mut errors = Vec::new();

    for pet in PetType::ALL {
        let mut check = Checker {
            pet,
            errors: &mut errors,
        };

        let food = feeding(pet);
        check.text("feeding", "daily_amount", food.daily_amount);
        check.text("feeding", "frequency", food.frequency);
        check.text("feeding", "tip", food.tip);
        check.list("feeding", "recommended_foods", food.recommended_foods);
        check.list("feeding", "avoid_foods", food.avoid_foods);

        let temp = temperature(pet);
        check.text("temperature", "ideal_range", temp.ideal_range);
        check.text("temperature", "cold_threshold", temp.cold_threshold);
        check.text("temperature", "hot_threshold", temp.hot_threshold);
        check.list("temperature", "tips", temp.tips);

        let play = play_activities(pet);
        if play.activities.is_empty() {
            check.empty("play", "activities".into());
        }
        for (i, activity) in play.activities.iter().enumerate() {
            check.text("play", &format!("activities[{}].name", i), activity.name);
            check.text("play", &format!("activities[{}].duration", i), activity.duration);
            check.text("play", &format!("activities[{}].benefits", i), activity.benefits);
            check.text("play", &format!("activities[{}].description", i), activity.description);
        }

        let toy_record = toys(pet);
        if toy_record.toys.is_empty() {
            check.empty("toys", "toys".into());
        }
        check.list("toys", "shopping_tips", toy_record.shopping_tips);
        for (i, toy) in toy_record.toys.iter().enumerate() {
            check.text("toys", &format!("toys[{}].name", i), toy.name);
            check.text("toys", &format!("toys[{}].category", i), toy.category);
            check.text("toys", &format!("toys[{}].price_range", i), toy.price_range);
            check.text("toys", &format!("toys[{}].description", i), toy.description);
            check.list("toys", &format!("toys[{}].benefits", i), toy.benefits);
            if !(0.0..=5.0).contains(&toy.rating) {
                check.errors.push(ContentError::RatingOutOfRange {
                    pet,
                    toy: toy.name,
                    rating: toy.rating,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::error!(count = errors.len(), "care content audit failed");
        Err(errors)
    }
}

struct Checker<'a> {
    pet: PetType,
    errors: &'a mut Vec<ContentError>,
}

impl Checker<'_> {
    fn text(&mut self, table: &'static str, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(ContentError::BlankField {
                pet: self.pet,
                table,
                field: field.to_string(),
            });
        }
    }

    fn list(&mut self, table: &'static str, field: &str, values: &[&str]) {
        if values.is_empty() {
            self.empty(table, field.to_string());
        }
        for (i, value) in values.iter().enumerate() {
            self.text(table, &format!("{}[{}]", field, i), value);
        }
    }

    fn empty(&mut self, table: &'static str, field: String) {
        self.errors.push(ContentError::EmptyList {
            pet: self.pet,
            table,
            field,
        });
    }
}

/// SHA-256 over the JSON form of every table, hex encoded.
///
/// Identifies the content version shipped in this build.
pub fn content_digest() -> ContentResult<String> {
    let bundles: Vec<CareBundle> = PetType::ALL.into_iter().map(bundle).collect();
    let json =
        serde_json::to_vec(&bundles).map_err(|e| ContentError::Serialize(e.to_string()))?;
    Ok(hex::encode(Sha256::digest(&json)))
}
