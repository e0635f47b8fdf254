//! Care recommendation records.
//!
//! Records are authored as `static` content (see [`crate::catalog`]) and are
//! only ever handed out by reference, so every field borrows `'static` data.

use std::fmt;

use serde::Serialize;

/// Feeding guidance for one pet type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedingRecord {
    /// How much to feed per day
    pub daily_amount: &'static str,
    /// Meal schedule
    pub frequency: &'static str,
    /// Recommended foods, in authoring order
    pub recommended_foods: &'static [&'static str],
    /// Foods to avoid, in authoring order (safety-relevant)
    pub avoid_foods: &'static [&'static str],
    /// Short "pro tip"
    pub tip: &'static str,
}

/// Temperature comfort guidance for one pet type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecord {
    /// Ideal ambient range (e.g., "68-75°F (20-24°C)")
    pub ideal_range: &'static str,
    /// Below this it is too cold
    pub cold_threshold: &'static str,
    /// Above this it is too hot
    pub hot_threshold: &'static str,
    /// Care tips, in authoring order
    pub tips: &'static [&'static str],
}

/// How demanding an activity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single play activity suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayActivity {
    pub name: &'static str,
    /// Suggested session length (e.g., "15-30 minutes", "Continuous")
    pub duration: &'static str,
    pub difficulty: Difficulty,
    /// Comma-separated benefits summary
    pub benefits: &'static str,
    pub description: &'static str,
}

/// Play activities for one pet type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayActivityRecord {
    /// Activities in authoring order
    pub activities: &'static [PlayActivity],
}

/// A single toy recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toy {
    pub name: &'static str,
    /// Free-form category label (e.g., "Food Puzzle")
    pub category: &'static str,
    /// Price range as displayed (e.g., "$12-18")
    pub price_range: &'static str,
    /// Average rating out of 5
    pub rating: f64,
    pub benefits: &'static [&'static str],
    pub description: &'static str,
}

/// Toy recommendations for one pet type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToyRecord {
    /// Toys in authoring order
    pub toys: &'static [Toy],
    /// General shopping advice shown under the toy list
    pub shopping_tips: &'static [&'static str],
}

impl ToyRecord {
    /// Highest-rated toy; ties keep the earlier entry.
    pub fn top_rated(&self) -> Option<&'static Toy> {
        self.toys.iter().fold(None, |best: Option<&'static Toy>, toy| match best {
            Some(b) if b.rating >= toy.rating => Some(b),
            _ => Some(toy),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TOYS: [Toy; 2] = [
        Toy {
            name: "Ball",
            category: "Fetch",
            price_range: "$5",
            rating: 4.5,
            benefits: &["Exercise"],
            description: "A ball.",
        },
        Toy {
            name: "Rope",
            category: "Chew & Tug",
            price_range: "$8",
            rating: 4.5,
            benefits: &["Dental health"],
            description: "A rope.",
        },
    ];

    #[test]
    fn test_difficulty_label() {
        assert_eq!(Difficulty::Easy.label(), "Easy");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_top_rated_prefers_first_on_tie() {
        let record = ToyRecord {
            toys: &TOYS,
            shopping_tips: &[],
        };
        assert_eq!(record.top_rated().map(|t| t.name), Some("Ball"));
    }

    #[test]
    fn test_top_rated_empty() {
        let record = ToyRecord {
            toys: &[],
            shopping_tips: &[],
        };
        assert!(record.top_rated().is_none());
    }
}
