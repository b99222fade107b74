//! Scoring engine entry points.
//!
//! Races are validated, then the fleet is pushed through every scoring
//! stage in order, then ranked. Nothing is returned on failure.

use crate::error::ScoringError;
use crate::fleet::Fleet;
use crate::race::Race;
use crate::ranking::{Standings, rank};
use crate::stage::standard_stages;
use crate::trace::{ScoringTrace, StageTrace};
use crate::validate::validate;

/// Run validation and every stage, reporting the fleet after each stage.
fn score_fleet(
    races: &[Race],
    mut on_stage: impl FnMut(&str, &Fleet),
) -> Result<Fleet, ScoringError> {
    validate(races)?;

    let mut fleet = Fleet::from_races(races);
    for stage in standard_stages() {
        stage.apply(races, &mut fleet)?;
        log::debug!(
            "stage {} scored {} boats over {} races",
            stage.name(),
            fleet.len(),
            fleet.num_races()
        );
        on_stage(stage.name(), &fleet);
    }
    Ok(fleet)
}

/// Compute the final standings of a regatta.
pub fn calculate(races: &[Race]) -> Result<Standings, ScoringError> {
    let fleet = score_fleet(races, |_, _| {})?;
    Ok(rank(fleet.into_boats()))
}

/// Compute the final standings, also capturing the fleet after each stage.
pub fn calculate_traced(races: &[Race]) -> Result<(Standings, ScoringTrace), ScoringError> {
    let mut trace = ScoringTrace::default();
    let fleet = score_fleet(races, |name, fleet| {
        trace.stages.push(StageTrace::capture(name, fleet));
    })?;
    Ok((rank(fleet.into_boats()), trace))
}
