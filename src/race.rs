//! Race input records.

use serde::Deserialize;

/// A boat identifier.
pub type SailNumber = u32;

/// One race of a regatta.
///
/// `finishers` is in finishing order, best first. The other two groups are
/// unordered; a boat may appear in at most one of the three groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Race {
    #[serde(default)]
    pub finishers: Vec<SailNumber>,
    #[serde(default)]
    pub did_not_finish: Vec<SailNumber>,
    #[serde(default)]
    pub average_points: Vec<SailNumber>,
}

impl Race {
    /// A race where every boat finished, in the given order.
    pub fn finished(finishers: impl Into<Vec<SailNumber>>) -> Self {
        Self {
            finishers: finishers.into(),
            ..Self::default()
        }
    }

    /// Mark boats as not having finished.
    pub fn with_dnf(mut self, boats: impl Into<Vec<SailNumber>>) -> Self {
        self.did_not_finish = boats.into();
        self
    }

    /// Mark boats as awarded average points.
    pub fn with_average_points(mut self, boats: impl Into<Vec<SailNumber>>) -> Self {
        self.average_points = boats.into();
        self
    }

    /// Total number of boats classified in this race.
    pub fn boat_count(&self) -> usize {
        self.finishers.len() + self.did_not_finish.len() + self.average_points.len()
    }

    /// All boats of this race: finishers first, then DNF, then average points.
    pub fn boats(&self) -> impl Iterator<Item = SailNumber> + '_ {
        self.finishers
            .iter()
            .chain(&self.did_not_finish)
            .chain(&self.average_points)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_count_sums_groups() {
        let race = Race::finished([39, 99, 69, 12])
            .with_dnf([13, 55])
            .with_average_points([38]);
        assert_eq!(race.boat_count(), 7);
        assert_eq!(
            race.boats().collect::<Vec<_>>(),
            vec![39, 99, 69, 12, 13, 55, 38]
        );
    }

    #[test]
    fn test_deserialize_optional_groups() {
        let race: Race = serde_json::from_str(r#"{"finishers": [36, 34]}"#).unwrap();
        assert_eq!(race, Race::finished([36, 34]));

        let race: Race =
            serde_json::from_str(r#"{"did_not_finish": [10], "average_points": [11]}"#).unwrap();
        assert!(race.finishers.is_empty());
        assert_eq!(race.did_not_finish, vec![10]);
        assert_eq!(race.average_points, vec![11]);
    }
}
