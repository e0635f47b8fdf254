//! Pets command handler.

use anyhow::Result;
use console::style;
use pet_care_core::models::PetType;
use pet_care_core::selector::CareGuide;

/// List selector options, marking the active one.
pub fn execute(selected: Option<PetType>) -> Result<()> {
    let mut guide = CareGuide::new();
    if let Some(pet) = selected {
        guide.select(pet);
    }

    for option in guide.options() {
        let marker = if option.active {
            style("●").green().to_string()
        } else {
            "○".to_string()
        };
        println!(
            "{} {} {:<8} {}",
            marker,
            option.profile.icon.glyph(),
            option.profile.display_name,
            style(option.profile.pet_type.key()).dim()
        );
    }
    Ok(())
}
