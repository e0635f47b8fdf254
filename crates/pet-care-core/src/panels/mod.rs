//! Recommendation panels.
//!
//! A panel is a pure function of the optional selected pet: with no pet it
//! yields a placeholder, otherwise the pet's record from [`crate::catalog`]
//! plus a heading and subtitle. Records are passed through untouched.

mod style;

pub use style::*;

use serde::Serialize;

use crate::catalog;
use crate::models::{
    FeedingRecord, PetProfile, PetType, PlayActivityRecord, TemperatureRecord, ToyRecord,
};

/// A care concern that can be shown as a panel.
pub trait CarePanel {
    type Record: Serialize + 'static;

    /// Title shown when no pet is selected
    const TITLE: &'static str;
    /// Prompt shown when no pet is selected
    const PROMPT: &'static str;

    fn lookup(pet: PetType) -> &'static Self::Record;
    fn heading(pet: &PetProfile) -> String;
    fn subtitle(pet: &PetProfile) -> String;

    /// Render the panel for the current selection.
    fn render(selected: Option<&PetProfile>) -> PanelView<Self::Record> {
        match selected {
            None => PanelView::Placeholder {
                title: Self::TITLE,
                prompt: Self::PROMPT,
            },
            Some(pet) => PanelView::Populated {
                heading: Self::heading(pet),
                subtitle: Self::subtitle(pet),
                record: Self::lookup(pet.pet_type),
            },
        }
    }
}

/// What a panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PanelView<R: 'static> {
    Placeholder {
        title: &'static str,
        prompt: &'static str,
    },
    Populated {
        heading: String,
        subtitle: String,
        record: &'static R,
    },
}

impl<R: 'static> PanelView<R> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PanelView::Placeholder { .. })
    }

    /// The record, if a pet is selected.
    pub fn record(&self) -> Option<&'static R> {
        match self {
            PanelView::Placeholder { .. } => None,
            PanelView::Populated { record, .. } => Some(*record),
        }
    }

    /// Heading when populated, title otherwise.
    pub fn title(&self) -> &str {
        match self {
            PanelView::Placeholder { title, .. } => title,
            PanelView::Populated { heading, .. } => heading,
        }
    }
}

pub struct FeedingPanel;

impl CarePanel for FeedingPanel {
    type Record = FeedingRecord;
    const TITLE: &'static str = "Food Recommendations";
    const PROMPT: &'static str = "Select a pet to see feeding guidelines";

    fn lookup(pet: PetType) -> &'static FeedingRecord {
        catalog::feeding(pet)
    }

    fn heading(pet: &PetProfile) -> String {
        format!("{} Feeding Guide", pet.display_name)
    }

    fn subtitle(pet: &PetProfile) -> String {
        format!("Nutritional recommendations for your {}", pet.lowercase_name())
    }
}

pub struct TemperaturePanel;

impl CarePanel for TemperaturePanel {
    type Record = TemperatureRecord;
    const TITLE: &'static str = "Temperature Guide";
    const PROMPT: &'static str = "Select a pet to see temperature recommendations";

    fn lookup(pet: PetType) -> &'static TemperatureRecord {
        catalog::temperature(pet)
    }

    fn heading(pet: &PetProfile) -> String {
        format!("{} Temperature Guide", pet.display_name)
    }

    fn subtitle(pet: &PetProfile) -> String {
        format!("Keep your {} comfortable year-round", pet.lowercase_name())
    }
}

pub struct PlayPanel;

impl CarePanel for PlayPanel {
    type Record = PlayActivityRecord;
    const TITLE: &'static str = "Play Activities";
    const PROMPT: &'static str = "Select a pet to see fun activity ideas";

    fn lookup(pet: PetType) -> &'static PlayActivityRecord {
        catalog::play_activities(pet)
    }

    fn heading(pet: &PetProfile) -> String {
        format!("{} Play Activities", pet.display_name)
    }

    fn subtitle(pet: &PetProfile) -> String {
        format!(
            "Fun activities to keep your {} happy and healthy",
            pet.lowercase_name()
        )
    }
}

pub struct ToyPanel;

impl CarePanel for ToyPanel {
    type Record = ToyRecord;
    const TITLE: &'static str = "Toy Recommendations";
    const PROMPT: &'static str = "Select a pet to see recommended toys and enrichment";

    fn lookup(pet: PetType) -> &'static ToyRecord {
        catalog::toys(pet)
    }

    fn heading(pet: &PetProfile) -> String {
        format!("{} Toy Recommendations", pet.display_name)
    }

    fn subtitle(pet: &PetProfile) -> String {
        format!(
            "Curated toys and enrichment items for your {}'s happiness",
            pet.lowercase_name()
        )
    }
}

/// All four panels for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarePanels {
    pub feeding: PanelView<FeedingRecord>,
    pub temperature: PanelView<TemperatureRecord>,
    pub play: PanelView<PlayActivityRecord>,
    pub toys: PanelView<ToyRecord>,
}

impl CarePanels {
    pub fn render(selected: Option<&PetProfile>) -> Self {
        Self {
            feeding: FeedingPanel::render(selected),
            temperature: TemperaturePanel::render(selected),
            play: PlayPanel::render(selected),
            toys: ToyPanel::render(selected),
        }
    }

    pub fn all_placeholders(&self) -> bool {
        self.feeding.is_placeholder()
            && self.temperature.is_placeholder()
            && self.play.is_placeholder()
            && self.toys.is_placeholder()
    }
}
