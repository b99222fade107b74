//! TOTAL - sums each boat's kept scores.

use crate::error::ScoringError;
use crate::fleet::Fleet;
use crate::race::Race;
use crate::score::Score;
use crate::stage::ScoringStage;

/// Sum of the scores not marked discarded.
pub fn total_of(scores: &[Score]) -> f64 {
    scores.iter().filter(|s| !s.discarded).map(|s| s.points).sum()
}

pub struct Totalize;

impl ScoringStage for Totalize {
    fn apply(&self, _races: &[Race], fleet: &mut Fleet) -> Result<(), ScoringError> {
        for boat in fleet.boats_mut() {
            boat.total = total_of(&boat.scores);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "TOTAL"
    }
}
