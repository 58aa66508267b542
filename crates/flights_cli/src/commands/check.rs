use anyhow::{Result, bail};
use flights_pipeline::check;

use super::{SourceArgs, explain};
use crate::output;

pub fn execute(sources: &SourceArgs, format: &str) -> Result<()> {
    let config = sources.to_config()?;
    let outcome = check(&config).map_err(explain)?;

    output::print_check_report(&outcome, format)?;

    if !outcome.result.is_clean() {
        bail!(
            "{} of {} rows rejected",
            outcome.result.rejected_count(),
            outcome.result.validated_count()
        );
    }

    Ok(())
}
