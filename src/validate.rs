//! Structural checks on the race list, run before any scoring.

use std::collections::HashSet;

use crate::error::ScoringError;
use crate::race::{Race, SailNumber};

/// Check that the races can be scored.
///
/// Every race must classify the same number of boats as race 1, no boat may
/// be classified twice within a race, and every boat of a later race must
/// have started race 1.
pub fn validate(races: &[Race]) -> Result<(), ScoringError> {
    let first = races.first().ok_or(ScoringError::InvalidInput)?;
    let expected = first.boat_count();
    let mut entrants: HashSet<SailNumber> = HashSet::with_capacity(expected);

    for (i, race) in races.iter().enumerate() {
        let race_number = i + 1;
        let found = race.boat_count();
        if found != expected {
            return Err(ScoringError::InconsistentBoatCount {
                race: race_number,
                expected,
                found,
            });
        }

        let mut seen = HashSet::with_capacity(found);
        for sail_number in race.boats() {
            if !seen.insert(sail_number) {
                return Err(ScoringError::DuplicateClassification {
                    sail_number,
                    race: race_number,
                });
            }
            if i == 0 {
                entrants.insert(sail_number);
            } else if !entrants.contains(&sail_number) {
                return Err(ScoringError::UnknownBoat {
                    sail_number,
                    race: race_number,
                });
            }
        }
    }

    Ok(())
}
