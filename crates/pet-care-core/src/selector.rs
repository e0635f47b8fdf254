//! Pet selector and the care guide coordinator.

use serde::Serialize;

use crate::models::{PetProfile, PetType};
use crate::panels::CarePanels;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetOption {
    pub profile: PetProfile,
    /// Whether this option is the current selection
    pub active: bool,
}

/// The fixed, ordered set of pet options.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetSelector;

impl PetSelector {
    /// Options in display order, flagging the active one.
    pub fn options(&self, selected: Option<&PetProfile>) -> Vec<PetOption> {
        PetType::ALL
            .into_iter()
            .map(|pet| PetOption {
                profile: pet.profile(),
                active: selected.is_some_and(|s| s.pet_type == pet),
            })
            .collect()
    }

    /// Activate an option, emitting its profile to `on_select`.
    pub fn activate<F>(&self, pet: PetType, on_select: F)
    where
        F: FnOnce(PetProfile),
    {
        on_select(pet.profile());
    }
}

/// Owns the selected pet and derives every panel from it.
#[derive(Debug, Clone, Default)]
pub struct CareGuide {
    selector: PetSelector,
    selected: Option<PetProfile>,
}

impl CareGuide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a pet, replacing any previous selection.
    pub fn select(&mut self, pet: PetType) -> &PetProfile {
        let selected = &mut self.selected;
        self.selector.activate(pet, |profile| {
            tracing::debug!(pet = %profile.pet_type, "pet selected");
            *selected = Some(profile);
        });
        // activate always calls back
        self.selected.get_or_insert_with(|| pet.profile())
    }

    /// Drop the selection; every panel returns to its placeholder.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            tracing::debug!("pet selection cleared");
        }
    }

    pub fn selected(&self) -> Option<&PetProfile> {
        self.selected.as_ref()
    }

    pub fn options(&self) -> Vec<PetOption> {
        self.selector.options(self.selected())
    }

    /// Render all four panels for the current selection.
    pub fn panels(&self) -> CarePanels {
        CarePanels::render(self.selected())
    }
}
