//! Catalog command handler.

use anyhow::Result;
use console::style;
use pet_care_core::catalog;
use pet_care_core::models::PetType;

use crate::error::CliError;

/// Audit the shipped content and print its digest.
pub fn execute() -> Result<()> {
    if let Err(errors) = catalog::audit() {
        for error in &errors {
            eprintln!("  {} {}", style("✗").red(), error);
        }
        return Err(CliError::Content(format!("{} content defect(s)", errors.len())).into());
    }

    for pet in PetType::ALL {
        let bundle = catalog::bundle(pet);
        println!(
            "{} {:<8} {} activities, {} toys, {} foods to avoid",
            pet.icon().glyph(),
            pet.display_name(),
            bundle.play.activities.len(),
            bundle.toys.toys.len(),
            bundle.feeding.avoid_foods.len()
        );
    }

    let digest = catalog::content_digest().map_err(CliError::from)?;
    println!("{} content ok", style("✓").green());
    println!("digest: {}", digest);
    Ok(())
}
