//! AVERAGE - resolves average-points placeholders.
//!
//! A boat's average is the mean of every race it actually scored, including
//! races that will later be discarded. Each of its average-points races then
//! receives that value.

use crate::error::ScoringError;
use crate::fleet::Fleet;
use crate::race::Race;
use crate::score::Score;
use crate::stage::ScoringStage;

pub struct AveragePoints;

/// Mean of the non-placeholder scores, or `None` if there are none.
pub fn mean_of_scored(scores: &[Score]) -> Option<f64> {
    let (sum, count) = scores
        .iter()
        .filter(|s| !s.is_placeholder())
        .fold((0.0, 0usize), |(sum, count), s| (sum + s.points, count + 1));
    (count > 0).then(|| sum / count as f64)
}

impl ScoringStage for AveragePoints {
    fn apply(&self, races: &[Race], fleet: &mut Fleet) -> Result<(), ScoringError> {
        // Compute every average before filling any placeholder, so a filled
        // race never counts towards its own average.
        for boat in fleet.boats_mut() {
            boat.average_points = mean_of_scored(&boat.scores);
        }

        for (i, race) in races.iter().enumerate() {
            for &sail_number in &race.average_points {
                let boat = fleet
                    .boat_mut(sail_number)
                    .ok_or(ScoringError::UnknownBoat {
                        sail_number,
                        race: i + 1,
                    })?;
                let average = boat
                    .average_points
                    .ok_or(ScoringError::AverageUndefined {
                        sail_number,
                        race: i + 1,
                    })?;
                boat.scores[i] = Score::new(average);
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "AVERAGE"
    }
}
