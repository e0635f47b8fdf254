//! History command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_consultation;

/// List consultations stored in the outbox, newest first.
pub fn execute(ctx: &CliContext, limit: usize) -> Result<()> {
    let Some(outbox) = ctx.outbox() else {
        println!("No outbox configured. Set PET_CARE_DB or pass --db <path>.");
        return Ok(());
    };

    let total = outbox.count_consultations().map_err(CliError::from)?;
    let requests = outbox.list_consultations(limit).map_err(CliError::from)?;

    if requests.is_empty() {
        println!("No consultations submitted yet.");
        return Ok(());
    }

    println!("Showing {} of {} consultation(s):\n", requests.len(), total);
    for request in &requests {
        print!("{}", render_consultation(request));
    }
    Ok(())
}
