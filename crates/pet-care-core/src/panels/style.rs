//! Badge styles for difficulty and toy category labels.
//!
//! Labels map to a fixed tone/intensity pair. Anything unrecognized gets the
//! neutral style rather than an error.

use serde::Serialize;

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Muted,
}

/// Badge appearance: a tone plus background intensity in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub tone: Tone,
    pub intensity: u8,
}

impl BadgeStyle {
    pub const NEUTRAL: BadgeStyle = BadgeStyle::new(Tone::Muted, 20);

    pub const fn new(tone: Tone, intensity: u8) -> Self {
        Self { tone, intensity }
    }

    /// Style for a difficulty label (case-insensitive).
    pub fn for_difficulty(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "easy" => Self::new(Tone::Secondary, 20),
            "medium" => Self::new(Tone::Accent, 20),
            "hard" => Self::new(Tone::Primary, 20),
            _ => Self::NEUTRAL,
        }
    }

    /// Style for a toy category label (exact match).
    pub fn for_category(category: &str) -> Self {
        match category {
            "Mental Stimulation" => Self::new(Tone::Primary, 20),
            "Interactive" => Self::new(Tone::Secondary, 20),
            "Exercise" => Self::new(Tone::Accent, 20),
            "Food Puzzle" => Self::new(Tone::Primary, 15),
            "Solo Play" => Self::new(Tone::Muted, 40),
            "Exploration" => Self::new(Tone::Secondary, 15),
            "Environment" => Self::new(Tone::Secondary, 25),
            "Chew Toy" => Self::new(Tone::Accent, 15),
            "Dental Care" => Self::new(Tone::Primary, 10),
            _ => Self::NEUTRAL,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_difficulty_styles() {
        assert_eq!(
            BadgeStyle::for_difficulty(Difficulty::Easy.label()).tone,
            Tone::Secondary
        );
        assert_eq!(BadgeStyle::for_difficulty("HARD").tone, Tone::Primary);
        assert!(BadgeStyle::for_difficulty("Extreme").is_neutral());
    }

    #[test]
    fn test_category_styles() {
        assert_eq!(
            BadgeStyle::for_category("Food Puzzle"),
            BadgeStyle::new(Tone::Primary, 15)
        );
        // Case matters for categories
        assert!(BadgeStyle::for_category("food puzzle").is_neutral());
        // Shipped categories without a dedicated style
        assert!(BadgeStyle::for_category("Chew & Tug").is_neutral());
        assert!(BadgeStyle::for_category("Shelter").is_neutral());
    }
}
