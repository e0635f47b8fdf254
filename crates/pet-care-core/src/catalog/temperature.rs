//! Temperature guides.

use crate::models::{PetType, TemperatureRecord};

static DOG: TemperatureRecord = TemperatureRecord {
    ideal_range: "68-75°F (20-24°C)",
    cold_threshold: "Below 45°F (7°C)",
    hot_threshold: "Above 85°F (29°C)",
    tips: &[
        "Provide shade and fresh water in hot weather",
        "Consider a coat for small or short-haired breeds in cold weather",
        "Never leave in hot cars - temperatures can reach deadly levels quickly",
        "Watch for signs of overheating: excessive panting, drooling, lethargy",
    ],
};

static CAT: TemperatureRecord = TemperatureRecord {
    ideal_range: "65-75°F (18-24°C)",
    cold_threshold: "Below 45°F (7°C)",
    hot_threshold: "Above 80°F (27°C)",
    tips: &[
        "Cats seek warm spots naturally - provide cozy areas",
        "Ensure access to cool areas during hot weather",
        "Indoor cats are more sensitive to temperature changes",
        "Watch for excessive hiding (too cold) or panting (too hot)",
    ],
};

static BIRD: TemperatureRecord = TemperatureRecord {
    ideal_range: "68-78°F (20-26°C)",
    cold_threshold: "Below 65°F (18°C)",
    hot_threshold: "Above 85°F (29°C)",
    tips: &[
        "Avoid drafts and sudden temperature changes",
        "Provide indirect sunlight for warmth",
        "Use bird-safe heating elements if needed",
        "Mist lightly with water on hot days for cooling",
    ],
};

static FISH: TemperatureRecord = TemperatureRecord {
    ideal_range: "72-78°F (22-26°C) for tropical fish",
    cold_threshold: "Below 68°F (20°C)",
    hot_threshold: "Above 82°F (28°C)",
    tips: &[
        "Use a reliable aquarium heater and thermometer",
        "Maintain consistent temperature - fluctuations stress fish",
        "Consider species-specific temperature needs",
        "Increase aeration in warmer water as oxygen levels decrease",
    ],
};

static RABBIT: TemperatureRecord = TemperatureRecord {
    ideal_range: "60-68°F (15-20°C)",
    cold_threshold: "Below 50°F (10°C)",
    hot_threshold: "Above 75°F (24°C)",
    tips: &[
        "Rabbits overheat easily - provide plenty of ventilation",
        "Offer frozen water bottles as cooling aids in summer",
        "Ensure dry, draft-free housing in cold weather",
        "Watch for signs of heat stress: rapid breathing, lethargy, drooling",
    ],
};

/// Temperature guide for a pet type.
pub fn temperature(pet: PetType) -> &'static TemperatureRecord {
    match pet {
        PetType::Dog => &DOG,
        PetType::Cat => &CAT,
        PetType::Bird => &BIRD,
        PetType::Fish => &FISH,
        PetType::Rabbit => &RABBIT,
    }
}
