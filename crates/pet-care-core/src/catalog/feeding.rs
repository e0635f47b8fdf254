//! Feeding guides.

use crate::models::{FeedingRecord, PetType};

static DOG: FeedingRecord = FeedingRecord {
    daily_amount: "1-3 cups of high-quality dry kibble (depending on size)",
    frequency: "2 meals per day",
    recommended_foods: &["High-quality dry kibble", "Lean meats", "Rice", "Vegetables"],
    avoid_foods: &["Chocolate", "Grapes", "Onions", "Garlic", "Xylitol"],
    tip: "Feed at consistent times and measure portions to maintain healthy weight.",
};

static CAT: FeedingRecord = FeedingRecord {
    daily_amount: "1/2 to 1 cup of dry food or 5.5-6 oz of wet food",
    frequency: "2-3 meals per day",
    recommended_foods: &["High-protein cat food", "Wet food", "Occasional treats"],
    avoid_foods: &["Chocolate", "Onions", "Garlic", "Raw fish", "Milk"],
    tip: "Cats need taurine and high protein. Always provide fresh water.",
};

static BIRD: FeedingRecord = FeedingRecord {
    daily_amount: "1-2 tablespoons of pellets plus fresh foods",
    frequency: "Daily feeding with fresh foods",
    recommended_foods: &[
        "High-quality pellets",
        "Fresh fruits",
        "Vegetables",
        "Seeds (limited)",
    ],
    avoid_foods: &["Chocolate", "Avocado", "Caffeine", "Salt", "Fruit pits"],
    tip: "Variety is key. Rotate fruits and vegetables for balanced nutrition.",
};

static FISH: FeedingRecord = FeedingRecord {
    daily_amount: "Small amounts 2-3 times daily",
    frequency: "2-3 small feedings per day",
    recommended_foods: &["High-quality flakes", "Pellets", "Frozen foods", "Live foods"],
    avoid_foods: &["Overfeeding", "Bread", "Human food"],
    tip: "Feed only what fish can consume in 2-3 minutes to prevent water pollution.",
};

static RABBIT: FeedingRecord = FeedingRecord {
    daily_amount: "1/4 cup pellets per 5 lbs body weight plus unlimited hay",
    frequency: "Daily pellets, unlimited hay, fresh veggies",
    recommended_foods: &[
        "Timothy hay",
        "High-fiber pellets",
        "Leafy greens",
        "Limited fruits",
    ],
    avoid_foods: &["Iceberg lettuce", "Seeds", "Chocolate", "Onions"],
    tip: "Hay should make up 85% of diet. Introduce new foods gradually.",
};

/// Feeding guide for a pet type.
pub fn feeding(pet: PetType) -> &'static FeedingRecord {
    match pet {
        PetType::Dog => &DOG,
        PetType::Cat => &CAT,
        PetType::Bird => &BIRD,
        PetType::Fish => &FISH,
        PetType::Rabbit => &RABBIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_avoid_order() {
        assert_eq!(
            feeding(PetType::Dog).avoid_foods,
            &["Chocolate", "Grapes", "Onions", "Garlic", "Xylitol"]
        );
    }

    #[test]
    fn test_rabbit_hay_first() {
        assert_eq!(feeding(PetType::Rabbit).recommended_foods[0], "Timothy hay");
    }
}
