//! Error types for regatta scoring and regatta data loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::race::SailNumber;

/// Errors produced by the scoring engine.
///
/// Race numbers are 1-based: race 1 is the first race of the regatta.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("at least one race is required")]
    InvalidInput,

    #[error("race {race} has {found} boats, but race 1 has {expected}")]
    InconsistentBoatCount {
        race: usize,
        expected: usize,
        found: usize,
    },

    #[error("sail number {sail_number} is classified more than once in race {race}")]
    DuplicateClassification { sail_number: SailNumber, race: usize },

    #[error("sail number {sail_number} appears in race {race} but did not start race 1")]
    UnknownBoat { sail_number: SailNumber, race: usize },

    #[error(
        "sail number {sail_number} has average points in race {race}, \
         but has no scored races from which the points can be calculated"
    )]
    AverageUndefined { sail_number: SailNumber, race: usize },
}

/// Errors produced while loading a regatta data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid regatta data in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_boat_and_race() {
        let err = ScoringError::DuplicateClassification {
            sail_number: 10,
            race: 3,
        };
        assert_eq!(
            err.to_string(),
            "sail number 10 is classified more than once in race 3"
        );

        let err = ScoringError::AverageUndefined {
            sail_number: 38,
            race: 1,
        };
        assert!(err.to_string().starts_with("sail number 38 has average points in race 1"));
    }

    #[test]
    fn test_inconsistent_count_message() {
        let err = ScoringError::InconsistentBoatCount {
            race: 2,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "race 2 has 2 boats, but race 1 has 3");
    }
}
