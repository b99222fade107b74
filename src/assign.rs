//! ASSIGN - converts finishing order and DNF into race scores.

use crate::error::ScoringError;
use crate::fleet::Fleet;
use crate::race::Race;
use crate::score::Score;
use crate::stage::ScoringStage;

/// Finishers score their position (1 for a win). A DNF scores one more than
/// the number of boats. Average-points entries keep their placeholder.
/// A boat missing from the fleet is an `UnknownBoat` error.
pub struct AssignScores;

impl ScoringStage for AssignScores {
    fn apply(&self, races: &[Race], fleet: &mut Fleet) -> Result<(), ScoringError> {
        let dnf_points = (fleet.len() + 1) as f64;

        for (i, race) in races.iter().enumerate() {
            let unknown = |sail_number| ScoringError::UnknownBoat {
                sail_number,
                race: i + 1,
            };
            for (pos, &sail_number) in race.finishers.iter().enumerate() {
                let boat = fleet.boat_mut(sail_number).ok_or_else(|| unknown(sail_number))?;
                boat.scores[i] = Score::new((pos + 1) as f64);
            }
            for &sail_number in &race.did_not_finish {
                let boat = fleet.boat_mut(sail_number).ok_or_else(|| unknown(sail_number))?;
                boat.scores[i] = Score::new(dnf_points);
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "ASSIGN"
    }
}
