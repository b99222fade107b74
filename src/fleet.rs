//! Boat records: the mutable working set of one scoring run.
//!
//! Boats live in a `Vec` in first-seen order (the order they appear in race 1:
//! finishers, then DNF, then average points). A separate sail number to index
//! map is built once, so stages mutate boats in place and every iteration
//! over the fleet is reproducible.

use std::collections::HashMap;

use crate::race::{Race, SailNumber};
use crate::score::Score;

/// Scoring state of one boat.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    pub sail_number: SailNumber,
    /// One score per race, indexed by race position.
    pub scores: Vec<Score>,
    /// Sum of the non-discarded scores.
    pub total: f64,
    /// Mean of the boat's scored (non-placeholder) races, once computed.
    pub average_points: Option<f64>,
}

impl Boat {
    pub fn new(sail_number: SailNumber, num_races: usize) -> Self {
        Self {
            sail_number,
            scores: vec![Score::placeholder(); num_races],
            total: 0.0,
            average_points: None,
        }
    }
}

/// All boats of a regatta, addressable by stable index or sail number.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    boats: Vec<Boat>,
    index: HashMap<SailNumber, usize>,
    num_races: usize,
}

impl Fleet {
    /// Create one boat per entrant of the first race, with a placeholder
    /// score for every race.
    ///
    /// Expects races that passed validation.
    pub fn from_races(races: &[Race]) -> Self {
        let num_races = races.len();
        let mut fleet = Self {
            num_races,
            ..Self::default()
        };
        if let Some(first) = races.first() {
            for sail_number in first.boats() {
                fleet.index.insert(sail_number, fleet.boats.len());
                fleet.boats.push(Boat::new(sail_number, num_races));
            }
        }
        fleet
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn num_races(&self) -> usize {
        self.num_races
    }

    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn boats_mut(&mut self) -> &mut [Boat] {
        &mut self.boats
    }

    pub fn boat(&self, sail_number: SailNumber) -> Option<&Boat> {
        self.index.get(&sail_number).map(|&i| &self.boats[i])
    }

    pub fn boat_mut(&mut self, sail_number: SailNumber) -> Option<&mut Boat> {
        let i = *self.index.get(&sail_number)?;
        Some(&mut self.boats[i])
    }

    pub fn into_boats(self) -> Vec<Boat> {
        self.boats
    }
}
