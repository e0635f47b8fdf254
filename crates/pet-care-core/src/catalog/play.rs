//! Play activity suggestions.

use crate::models::Difficulty::{Easy, Hard, Medium};
use crate::models::{PetType, PlayActivity, PlayActivityRecord};

static DOG: PlayActivityRecord = PlayActivityRecord {
    activities: &[
        PlayActivity {
            name: "Fetch",
            duration: "15-30 minutes",
            difficulty: Easy,
            benefits: "Exercise, bonding, mental stimulation",
            description: "Classic game that provides great physical exercise and strengthens your bond.",
        },
        PlayActivity {
            name: "Puzzle Toys",
            duration: "10-20 minutes",
            difficulty: Medium,
            benefits: "Mental stimulation, problem solving",
            description: "Hide treats in puzzle toys to challenge your dog's mind and keep them engaged.",
        },
        PlayActivity {
            name: "Agility Training",
            duration: "20-45 minutes",
            difficulty: Hard,
            benefits: "Physical fitness, mental challenge, training",
            description: "Set up obstacles for your dog to navigate, improving coordination and obedience.",
        },
        PlayActivity {
            name: "Hide and Seek",
            duration: "10-15 minutes",
            difficulty: Easy,
            benefits: "Mental stimulation, recall training",
            description: "Hide around the house and call your dog to find you - great for recall training.",
        },
    ],
};

static CAT: PlayActivityRecord = PlayActivityRecord {
    activities: &[
        PlayActivity {
            name: "Feather Wand",
            duration: "5-15 minutes",
            difficulty: Easy,
            benefits: "Exercise, hunting instincts, bonding",
            description: "Mimic prey movements to trigger your cat's natural hunting instincts.",
        },
        PlayActivity {
            name: "Laser Pointer",
            duration: "5-10 minutes",
            difficulty: Easy,
            benefits: "Exercise, mental stimulation",
            description: "Let your cat chase the red dot, but always end with a physical toy they can catch.",
        },
        PlayActivity {
            name: "Catnip Toys",
            duration: "10-20 minutes",
            difficulty: Easy,
            benefits: "Stress relief, independent play",
            description: "Provide catnip-filled toys for solo play sessions and relaxation.",
        },
        PlayActivity {
            name: "Treat Dispensers",
            duration: "15-30 minutes",
            difficulty: Medium,
            benefits: "Mental stimulation, slow feeding",
            description: "Food puzzles that challenge your cat to work for their treats.",
        },
    ],
};

static BIRD: PlayActivityRecord = PlayActivityRecord {
    activities: &[
        PlayActivity {
            name: "Foraging Games",
            duration: "20-40 minutes",
            difficulty: Medium,
            benefits: "Mental stimulation, natural behavior",
            description: "Hide treats in paper cups or foraging toys to encourage natural searching behavior.",
        },
        PlayActivity {
            name: "Mirror Play",
            duration: "10-15 minutes",
            difficulty: Easy,
            benefits: "Social interaction, entertainment",
            description: "Supervised mirror time can provide social stimulation for single birds.",
        },
        PlayActivity {
            name: "Perch Rotation",
            duration: "All day",
            difficulty: Easy,
            benefits: "Exercise, environmental enrichment",
            description: "Rotate perches and toys weekly to keep the environment stimulating.",
        },
        PlayActivity {
            name: "Training Sessions",
            duration: "5-10 minutes",
            difficulty: Hard,
            benefits: "Mental challenge, bonding, behavior",
            description: "Teach simple commands or tricks using positive reinforcement.",
        },
    ],
};

static FISH: PlayActivityRecord = PlayActivityRecord {
    activities: &[
        PlayActivity {
            name: "Live Plants",
            duration: "Continuous",
            difficulty: Easy,
            benefits: "Exploration, natural environment",
            description: "Add live plants for fish to explore and hide behind, creating a natural habitat.",
        },
        PlayActivity {
            name: "Feeding Games",
            duration: "5-10 minutes",
            difficulty: Medium,
            benefits: "Mental stimulation, exercise",
            description: "Use feeding rings or hide food to make meals more engaging.",
        },
        PlayActivity {
            name: "Mirror Exercise",
            duration: "5-15 minutes",
            difficulty: Easy,
            benefits: "Exercise, stimulation",
            description: "Show a mirror occasionally to encourage swimming and activity.",
        },
        PlayActivity {
            name: "Current Changes",
            duration: "Continuous",
            difficulty: Medium,
            benefits: "Exercise, environmental variation",
            description: "Adjust filter flow to create different current patterns for swimming exercise.",
        },
    ],
};

static RABBIT: PlayActivityRecord = PlayActivityRecord {
    activities: &[
        PlayActivity {
            name: "Tunnel Systems",
            duration: "30-60 minutes",
            difficulty: Easy,
            benefits: "Exercise, natural behavior, exploration",
            description: "Provide tunnels and hideouts for your rabbit to hop through and explore.",
        },
        PlayActivity {
            name: "Treat Balls",
            duration: "15-30 minutes",
            difficulty: Medium,
            benefits: "Mental stimulation, exercise, foraging",
            description: "Rolling treat dispensers encourage movement and problem-solving.",
        },
        PlayActivity {
            name: "Obstacle Course",
            duration: "20-40 minutes",
            difficulty: Hard,
            benefits: "Physical exercise, mental challenge, training",
            description: "Create jumps and obstacles for your rabbit to navigate and explore.",
        },
        PlayActivity {
            name: "Digging Box",
            duration: "15-45 minutes",
            difficulty: Easy,
            benefits: "Natural behavior, stress relief, exercise",
            description: "Fill a box with shredded paper or hay for natural digging behavior.",
        },
    ],
};

/// Play activities for a pet type.
pub fn play_activities(pet: PetType) -> &'static PlayActivityRecord {
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
    fn test_every_pet_has_a_hard_or_medium_option() {
        for pet in PetType::ALL {
            assert!(play_activities(pet)
                .activities
                .iter()
                .any(|a| a.difficulty != Easy));
        }
    }
}
