//! Final ordering of the fleet.
//!
//! Boats are ordered by total points, lowest first. Equal totals are broken
//! by count-back on the kept scores (most firsts, then most seconds, ...),
//! then by the most recent race in which the two boats scored differently,
//! discards included. Boats that cannot be separated are reported and fall
//! back to ascending sail number.

use serde::Serialize;
use std::cmp::Ordering;

use crate::fleet::Boat;
use crate::race::SailNumber;
use crate::score::{Score, cmp_points};

/// One line of the final standings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoatResult {
    pub sail_number: SailNumber,
    /// 1-based placing.
    pub rank: usize,
    /// Total after discards.
    pub total: f64,
    /// Every race score, discarded ones included.
    pub scores: Vec<Score>,
}

/// Two adjacent boats in the standings that no tie-break could separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnresolvedTie {
    pub ahead: SailNumber,
    pub behind: SailNumber,
}

/// Results in rank order plus any ties settled only by sail number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Standings {
    pub results: Vec<BoatResult>,
    pub unresolved_ties: Vec<UnresolvedTie>,
}

fn kept_ascending(scores: &[Score]) -> Vec<f64> {
    let mut kept: Vec<f64> = scores
        .iter()
        .filter(|s| !s.discarded)
        .map(|s| s.points)
        .collect();
    kept.sort_by(|a, b| cmp_points(*a, *b));
    kept
}

/// Compare kept scores best first; the first difference decides.
fn count_back(a: &[Score], b: &[Score]) -> Ordering {
    kept_ascending(a)
        .into_iter()
        .zip(kept_ascending(b))
        .map(|(x, y)| cmp_points(x, y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compare the same race for both boats, last race first.
fn most_recent_race(a: &[Score], b: &[Score]) -> Ordering {
    a.iter()
        .zip(b)
        .rev()
        .map(|(x, y)| cmp_points(x.points, y.points))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Order two boats by the regatta rules alone. `Equal` means a true tie.
pub fn compare_boats(a: &Boat, b: &Boat) -> Ordering {
    cmp_points(a.total, b.total)
        .then_with(|| count_back(&a.scores, &b.scores))
        .then_with(|| most_recent_race(&a.scores, &b.scores))
}

/// Rank fully scored boats.
pub fn rank(mut boats: Vec<Boat>) -> Standings {
    boats.sort_by(|a, b| compare_boats(a, b).then_with(|| a.sail_number.cmp(&b.sail_number)));

    let mut unresolved_ties = Vec::new();
    for pair in boats.windows(2) {
        if compare_boats(&pair[0], &pair[1]) == Ordering::Equal {
            log::warn!(
                "unable to separate boats {} and {}, ordering by sail number",
                pair[0].sail_number,
                pair[1].sail_number
            );
            unresolved_ties.push(UnresolvedTie {
                ahead: pair[0].sail_number,
                behind: pair[1].sail_number,
            });
        }
    }

    let results = boats
        .into_iter()
        .enumerate()
        .map(|(i, boat)| BoatResult {
            sail_number: boat.sail_number,
            rank: i + 1,
            total: boat.total,
            scores: boat.scores,
        })
        .collect();

    Standings {
        results,
        unresolved_ties,
    }
}
