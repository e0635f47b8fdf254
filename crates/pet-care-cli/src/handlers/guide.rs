//! Guide command handler.

use anyhow::Result;
use pet_care_core::models::PetType;
use pet_care_core::selector::CareGuide;

use crate::presentation::render_panels;

/// Render the four care panels for an optional pet.
pub fn execute(pet: Option<PetType>, json: bool) -> Result<()> {
    let mut guide = CareGuide::new();
    if let Some(pet) = pet {
        guide.select(pet);
    }
    let panels = guide.panels();

    if json {
        println!("{}", serde_json::to_string_pretty(&panels)?);
    } else {
        print!("{}", render_panels(&panels));
    }
    Ok(())
}
