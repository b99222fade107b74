//! Regatta data files.
//!
//! A regatta file is JSON holding the races plus the optional details the
//! results table shows:
//!
//! ```json
//! {
//!   "club": "SARYC",
//!   "skippers": { "38": "Tim Arland", "39": "Kym Stringer" },
//!   "races": [
//!     { "finishers": [39, 38] },
//!     { "finishers": [38], "did_not_finish": [39] }
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::race::{Race, SailNumber};

/// Sail number to skipper name lookup.
pub type SkipperNames = BTreeMap<SailNumber, String>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegattaFile {
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub skippers: SkipperNames,
    pub races: Vec<Race>,
}

impl RegattaFile {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let regatta = Self::from_json(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded {} races and {} skippers from {}",
            regatta.races.len(),
            regatta.skippers.len(),
            path.display()
        );
        Ok(regatta)
    }

    /// Skipper name for a sail number, empty if unknown.
    pub fn skipper(&self, sail_number: SailNumber) -> &str {
        self.skippers
            .get(&sail_number)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_file() {
        let regatta = RegattaFile::from_json(
            r#"{
                "club": "SARYC",
                "skippers": { "38": "Tim Arland" },
                "races": [
                    { "finishers": [39, 38] },
                    { "finishers": [38], "did_not_finish": [39] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(regatta.club.as_deref(), Some("SARYC"));
        assert_eq!(regatta.skipper(38), "Tim Arland");
        assert_eq!(regatta.skipper(39), "");
        assert_eq!(regatta.races.len(), 2);
        assert_eq!(regatta.races[1].did_not_finish, vec![39]);
    }

    #[test]
    fn test_races_required() {
        assert!(RegattaFile::from_json(r#"{"club": "SARYC"}"#).is_err());
        let regatta = RegattaFile::from_json(r#"{"races": []}"#).unwrap();
        assert!(regatta.club.is_none());
        assert!(regatta.skippers.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"races": [{{"finishers": [1, 2]}}]}}"#).unwrap();
        let regatta = RegattaFile::load(file.path()).unwrap();
        assert_eq!(regatta.races, vec![Race::finished([1, 2])]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegattaFile::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"races": [{{"finishers": ["a"]}}]}}"#).unwrap();
        let err = RegattaFile::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().starts_with("invalid regatta data in"));
    }

    #[test]
    fn test_demo_regatta() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/demo-regatta.json");
        let regatta = RegattaFile::load(&path).unwrap();
        assert_eq!(regatta.races.len(), 8);
        assert_eq!(regatta.skipper(38), "Tim Arland");

        let standings = calculate(&regatta.races).unwrap();
        let order: Vec<SailNumber> = standings.results.iter().map(|r| r.sail_number).collect();
        assert_eq!(order, vec![38, 39, 13, 99, 12, 55, 69]);
    }
}
