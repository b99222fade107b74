//! DROPS - marks each boat's worst scores as discarded.

use std::cmp::Ordering;

use crate::error::ScoringError;
use crate::fleet::Fleet;
use crate::race::Race;
use crate::score::{Score, cmp_points};
use crate::stage::ScoringStage;

/// Number of discards every boat is allowed: one per completed eight races,
/// plus one once four races have been sailed.
pub fn drops_allowed(num_races: usize) -> usize {
    num_races / 8 + usize::from(num_races >= 4)
}

/// Index of the highest non-discarded score. The earliest race wins a tie.
fn worst_kept(scores: &[Score]) -> Option<usize> {
    let mut worst: Option<usize> = None;
    for (i, score) in scores.iter().enumerate() {
        if score.discarded {
            continue;
        }
        match worst {
            Some(w) if cmp_points(score.points, scores[w].points) != Ordering::Greater => {}
            _ => worst = Some(i),
        }
    }
    worst
}

/// Discard up to `drops` of the worst scores, never more than there are.
pub fn mark_discards(scores: &mut [Score], drops: usize) {
    for _ in 0..drops {
        match worst_kept(scores) {
            Some(i) => scores[i].discarded = true,
            None => break,
        }
    }
}

pub struct SelectDrops;

impl ScoringStage for SelectDrops {
    fn apply(&self, _races: &[Race], fleet: &mut Fleet) -> Result<(), ScoringError> {
        let drops = drops_allowed(fleet.num_races());
        for boat in fleet.boats_mut() {
            mark_discards(&mut boat.scores, drops);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "DROPS"
    }
}
