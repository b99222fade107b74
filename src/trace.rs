//! Debug trace types for a scoring run.
//!
//! A trace holds a snapshot of every boat after each scoring stage, which
//! shows how placeholders, averages, and discards evolve.

use std::fmt;

use crate::fleet::Fleet;
use crate::race::SailNumber;
use crate::score::{Score, format_points};

/// One boat's scores and total at a point in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct BoatSnapshot {
    pub sail_number: SailNumber,
    pub scores: Vec<Score>,
    pub total: f64,
}

/// State of the fleet after one stage, in fleet order.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTrace {
    pub stage_name: String,
    pub boats: Vec<BoatSnapshot>,
}

impl StageTrace {
    pub fn capture(stage_name: &str, fleet: &Fleet) -> Self {
        let boats = fleet
            .boats()
            .iter()
            .map(|b| BoatSnapshot {
                sail_number: b.sail_number,
                scores: b.scores.clone(),
                total: b.total,
            })
            .collect();
        Self {
            stage_name: stage_name.to_string(),
            boats,
        }
    }
}

/// Complete debug trace of a scoring run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringTrace {
    pub stages: Vec<StageTrace>,
}

impl ScoringTrace {
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.stage_name.as_str()).collect()
    }
}

impl fmt::Display for ScoringTrace {
    /// Discarded scores are shown in parentheses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in &self.stages {
            writeln!(f, "{}", stage.stage_name)?;
            for boat in &stage.boats {
                write!(f, "  {:>6}:", boat.sail_number)?;
                for score in &boat.scores {
                    let points = format_points(score.points);
                    if score.discarded {
                        write!(f, " ({points})")?;
                    } else {
                        write!(f, " {points}")?;
                    }
                }
                writeln!(f, "  = {}", format_points(boat.total))?;
            }
        }
        Ok(())
    }
}
