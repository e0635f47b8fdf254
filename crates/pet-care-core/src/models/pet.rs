//! Pet type and profile models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Supported animal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Fish,
    Rabbit,
}

impl PetType {
    /// Every pet type, in selector order.
    pub const ALL: [PetType; 5] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Bird,
        PetType::Fish,
        PetType::Rabbit,
    ];

    /// Lowercase key used by the recommendation tables.
    pub fn key(self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Bird => "bird",
            PetType::Fish => "fish",
            PetType::Rabbit => "rabbit",
        }
    }

    /// Human-facing name.
    pub fn display_name(self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
            PetType::Bird => "Bird",
            PetType::Fish => "Fish",
            PetType::Rabbit => "Rabbit",
        }
    }

    pub fn icon(self) -> PetIcon {
        match self {
            PetType::Dog => PetIcon::Dog,
            PetType::Cat => PetIcon::Cat,
            PetType::Bird => PetIcon::Bird,
            PetType::Fish => PetIcon::Fish,
            PetType::Rabbit => PetIcon::Rabbit,
        }
    }

    /// Build the profile emitted when this pet is selected.
    pub fn profile(self) -> PetProfile {
        PetProfile {
            pet_type: self,
            display_name: self.display_name().to_string(),
            icon: self.icon(),
        }
    }

    /// Closest known pet type for a misspelled key.
    pub fn suggest(input: &str) -> Option<PetType> {
        let lower = input.trim().to_lowercase();
        PetType::ALL
            .iter()
            .map(|pet| (*pet, jaro_winkler(&lower, pet.key())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(pet, _)| pet)
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when text does not name a supported pet type.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown pet type '{input}'{}", suggestion_hint(.suggestion))]
pub struct UnknownPetType {
    pub input: String,
    pub suggestion: Option<PetType>,
}

fn suggestion_hint(suggestion: &Option<PetType>) -> String {
    suggestion
        .map(|pet| format!(" (did you mean '{}'?)", pet))
        .unwrap_or_default()
}

impl FromStr for PetType {
    type Err = UnknownPetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        PetType::ALL
            .into_iter()
            .find(|pet| pet.key() == lower)
            .ok_or_else(|| UnknownPetType {
                input: s.to_string(),
                suggestion: PetType::suggest(s),
            })
    }
}

/// Opaque icon handle; front-ends decide how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetIcon {
    Dog,
    Cat,
    Bird,
    Fish,
    Rabbit,
}

impl PetIcon {
    /// Icon set asset name.
    pub fn asset_name(self) -> &'static str {
        match self {
            PetIcon::Dog => "dog",
            PetIcon::Cat => "cat",
            PetIcon::Bird => "bird",
            PetIcon::Fish => "fish",
            PetIcon::Rabbit => "rabbit",
        }
    }

    /// Single glyph for terminal output.
    pub fn glyph(self) -> &'static str {
        match self {
            PetIcon::Dog => "🐕",
            PetIcon::Cat => "🐈",
            PetIcon::Bird => "🐦",
            PetIcon::Fish => "🐟",
            PetIcon::Rabbit => "🐇",
        }
    }
}

/// The currently selected pet, as held by the guide coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    /// Key into the recommendation tables
    pub pet_type: PetType,
    /// Name shown in headings (e.g., "Dog")
    pub display_name: String,
    pub icon: PetIcon,
}

impl PetProfile {
    /// Lowercase name for running text ("your dog").
    pub fn lowercase_name(&self) -> String {
        self.display_name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pet_type() {
        assert_eq!("dog".parse::<PetType>().unwrap(), PetType::Dog);
        assert_eq!("Rabbit".parse::<PetType>().unwrap(), PetType::Rabbit);
        assert_eq!(" FISH ".parse::<PetType>().unwrap(), PetType::Fish);
    }

    #[test]
    fn test_unknown_pet_type_suggests() {
        let err = "rabit".parse::<PetType>().unwrap_err();
        assert_eq!(err.suggestion, Some(PetType::Rabbit));
        assert!(err.to_string().contains("did you mean 'rabbit'"));

        let err = "hamster".parse::<PetType>().unwrap_err();
        assert_eq!(err.suggestion, None);
        assert_eq!(err.to_string(), "Unknown pet type 'hamster'");
    }

    #[test]
    fn test_profile() {
        let profile = PetType::Bird.profile();
        assert_eq!(profile.display_name, "Bird");
        assert_eq!(profile.icon, PetIcon::Bird);
        assert_eq!(profile.lowercase_name(), "bird");
    }

    #[test]
    fn test_selector_order() {
        let keys: Vec<_> = PetType::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["dog", "cat", "bird", "fish", "rabbit"]);
    }
}
