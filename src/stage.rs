//! Scoring stage trait.
//!
//! A scoring run pushes the whole fleet through a fixed chain of stages,
//! each of which reads the races and mutates the boat records in place.
//! Stages never revisit the work of an earlier stage.

use crate::assign::AssignScores;
use crate::average::AveragePoints;
use crate::drops::SelectDrops;
use crate::error::ScoringError;
use crate::fleet::Fleet;
use crate::race::Race;
use crate::totals::Totalize;

/// A pipeline stage that transforms the fleet's scores.
pub trait ScoringStage {
    /// Apply this stage to every boat of the fleet.
    fn apply(&self, races: &[Race], fleet: &mut Fleet) -> Result<(), ScoringError>;

    /// The display name of this stage.
    fn name(&self) -> &str;
}

/// The stages between validation and ranking, in execution order.
pub fn standard_stages() -> Vec<Box<dyn ScoringStage>> {
    vec![
        Box::new(AssignScores),
        Box::new(AveragePoints),
        Box::new(SelectDrops),
        Box::new(Totalize),
    ]
}
