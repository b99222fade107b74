//! # regatta-scoring
//!
//! Low-point scoring for multi-race sailing regattas.
//!
//! ## Overview
//!
//! Scoring runs as a fixed pipeline over an in-memory set of races:
//! - **Validate**: every race classifies the same boats, each exactly once
//! - **Assign**: finishers score their position, DNF scores boats + 1
//! - **Average**: average-points races get the mean of the boat's other races
//! - **Drops**: each boat discards its worst scores (one per eight races,
//!   plus one from race 4)
//! - **Total**: kept scores are summed
//! - **Rank**: lowest total wins; ties go to count-back, then the most
//!   recent race
//!
//! ## Example
//!
//! ```
//! use regatta_scoring::{Race, calculate};
//!
//! let races = vec![
//!     Race::finished([36, 34]),
//!     Race::finished([34, 36]),
//!     Race::finished([34]).with_average_points([36]),
//! ];
//!
//! let standings = calculate(&races).unwrap();
//!
//! assert_eq!(standings.results[0].sail_number, 34);
//! assert_eq!(standings.results[1].total, 4.5);
//! ```

pub mod assign;
pub mod average;
pub mod drops;
pub mod engine;
pub mod error;
pub mod fleet;
pub mod race;
pub mod ranking;
pub mod regatta;
pub mod score;
pub mod stage;
pub mod table;
pub mod totals;
pub mod trace;
pub mod validate;

pub use drops::drops_allowed;
pub use engine::{calculate, calculate_traced};
pub use error::{LoadError, ScoringError};
pub use fleet::{Boat, Fleet};
pub use race::{Race, SailNumber};
pub use ranking::{BoatResult, Standings, UnresolvedTie, compare_boats, rank};
pub use regatta::{RegattaFile, SkipperNames};
pub use score::{Score, cmp_points, format_points};
pub use stage::{ScoringStage, standard_stages};
pub use table::render_html;
pub use trace::{BoatSnapshot, ScoringTrace, StageTrace};
pub use validate::validate;
