//! Toy recommendations.

use crate::models::{PetType, Toy, ToyRecord};

/// Shopping advice shared by every toy panel.
pub const SHOPPING_TIPS: &[&str] = &[
    "Always supervise initial play with new toys",
    "Choose size-appropriate toys for your pet",
    "Rotate toys weekly to maintain interest",
    "Remove damaged toys immediately for safety",
];

static DOG: ToyRecord = ToyRecord {
    toys: &[
        Toy {
            name: "KONG Classic",
            category: "Mental Stimulation",
            price_range: "$12-18",
            rating: 4.8,
            benefits: &["Reduces anxiety", "Mental stimulation", "Durable"],
            description: "Stuff with treats to keep dogs engaged for hours. Perfect for reducing separation anxiety.",
        },
        Toy {
            name: "Rope Toy",
            category: "Chew & Tug",
            price_range: "$8-15",
            rating: 4.5,
            benefits: &["Dental health", "Interactive play", "Durable"],
            description: "Great for tug-of-war and helps clean teeth while playing.",
        },
        Toy {
            name: "Puzzle Feeder",
            category: "Food Puzzle",
            price_range: "$15-25",
            rating: 4.7,
            benefits: &["Slow feeding", "Mental challenge", "Prevents bloating"],
            description: "Makes mealtime more engaging while promoting healthy eating habits.",
        },
        Toy {
            name: "Squeaky Ball",
            category: "Fetch",
            price_range: "$5-12",
            rating: 4.3,
            benefits: &["Exercise", "Sound stimulation", "Fetch play"],
            description: "Classic fetch toy that dogs love. Choose appropriate size for your dog.",
        },
    ],
    shopping_tips: SHOPPING_TIPS,
};

static CAT: ToyRecord = ToyRecord {
    toys: &[
        Toy {
            name: "Feather Wand",
            category: "Interactive",
            price_range: "$8-15",
            rating: 4.9,
            benefits: &["Exercise", "Bonding", "Hunting instincts"],
            description: "Mimics prey movement to trigger natural hunting behaviors and provide exercise.",
        },
        Toy {
            name: "Catnip Mouse",
            category: "Solo Play",
            price_range: "$3-8",
            rating: 4.4,
            benefits: &["Independent play", "Stress relief", "Natural high"],
            description: "Filled with premium catnip for hours of solo entertainment.",
        },
        Toy {
            name: "Cat Tunnel",
            category: "Exploration",
            price_range: "$12-20",
            rating: 4.6,
            benefits: &["Hide & seek", "Exercise", "Security"],
            description: "Collapsible tunnel perfect for hiding, playing, and feeling secure.",
        },
        Toy {
            name: "Laser Pointer",
            category: "Exercise",
            price_range: "$5-12",
            rating: 4.2,
            benefits: &["Cardio exercise", "Mental stimulation", "Interactive"],
            description: "Great for exercise, but always end sessions with a physical toy to catch.",
        },
    ],
    shopping_tips: SHOPPING_TIPS,
};

static BIRD: ToyRecord = ToyRecord {
    toys: &[
        Toy {
            name: "Foraging Toys",
            category: "Mental Stimulation",
            price_range: "$10-20",
            rating: 4.7,
            benefits: &["Natural behavior", "Mental challenge", "Prevents boredom"],
            description: "Hide treats inside to encourage natural foraging behaviors.",
        },
        Toy {
            name: "Swing Perch",
            category: "Perching",
            price_range: "$8-15",
            rating: 4.5,
            benefits: &["Exercise", "Comfort", "Entertainment"],
            description: "Natural wood swing that provides exercise and a cozy resting spot.",
        },
        Toy {
            name: "Shredding Toys",
            category: "Destruction",
            price_range: "$5-12",
            rating: 4.4,
            benefits: &["Natural behavior", "Beak health", "Stress relief"],
            description: "Safe materials for birds to shred and destroy - satisfies natural instincts.",
        },
        Toy {
            name: "Mirror Toy",
            category: "Social",
            price_range: "$6-10",
            rating: 4.0,
            benefits: &["Companionship", "Entertainment", "Social interaction"],
            description: "Provides social stimulation for single birds (use in moderation).",
        },
    ],
    shopping_tips: SHOPPING_TIPS,
};

static FISH: ToyRecord = ToyRecord {
    toys: &[
        Toy {
            name: "Live Plants",
            category: "Environment",
            price_range: "$5-15 each",
            rating: 4.8,
            benefits: &["Natural habitat", "Oxygen production", "Hiding spots"],
            description: "Create a natural environment with live aquatic plants.",
        },
        Toy {
            name: "Decorative Caves",
            category: "Shelter",
            price_range: "$8-20",
            rating: 4.6,
            benefits: &["Hiding spots", "Stress reduction", "Territory"],
            description: "Provide secure hiding places to reduce stress and territorial behavior.",
        },
        Toy {
            name: "Floating Log",
            category: "Decoration",
            price_range: "$10-18",
            rating: 4.3,
            benefits: &["Natural look", "Exploration", "Surface area"],
            description: "Realistic driftwood that floats and provides exploration opportunities.",
        },
        Toy {
            name: "Bubble Maker",
            category: "Entertainment",
            price_range: "$15-30",
            rating: 4.1,
            benefits: &["Visual stimulation", "Water movement", "Entertainment"],
            description: "Creates gentle bubbles for visual interest and water movement.",
        },
    ],
    shopping_tips: SHOPPING_TIPS,
};

static RABBIT: ToyRecord = ToyRecord {
    toys: &[
        Toy {
            name: "Willow Ball",
            category: "Chew Toy",
            price_range: "$5-10",
            rating: 4.7,
            benefits: &["Dental health", "Natural material", "Safe chewing"],
            description: "Natural willow provides safe chewing to maintain healthy teeth.",
        },
        Toy {
            name: "Treat Ball",
            category: "Food Puzzle",
            price_range: "$8-15",
            rating: 4.5,
            benefits: &["Mental stimulation", "Exercise", "Slow feeding"],
            description: "Rolling ball dispenses treats as rabbit plays, encouraging movement.",
        },
        Toy {
            name: "Tunnel System",
            category: "Exploration",
            price_range: "$15-30",
            rating: 4.8,
            benefits: &["Natural behavior", "Exercise", "Security"],
            description: "Connects multiple tunnels to create an exploration playground.",
        },
        Toy {
            name: "Hanging Chews",
            category: "Dental Care",
            price_range: "$6-12",
            rating: 4.4,
            benefits: &["Dental health", "Hanging play", "Natural materials"],
            description: "Hangs from cage or pen ceiling, providing overhead enrichment.",
        },
    ],
    shopping_tips: SHOPPING_TIPS,
};

/// Toy recommendations for a pet type.
pub fn toys(pet: PetType) -> &'static ToyRecord {
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
    fn test_top_rated_per_pet() {
        assert_eq!(toys(PetType::Cat).top_rated().map(|t| t.name), Some("Feather Wand"));
        assert_eq!(toys(PetType::Rabbit).top_rated().map(|t| t.name), Some("Tunnel System"));
    }
}
