//! Search budgets and thresholds for the constraint-seeking providers.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid search config: {0}")]
    Invalid(String),
}

/// Tunables for haiku, couplet, tautogram and mirror filter searches.
///
/// Every field has a default, so a RON file only needs the fields it
/// overrides:
///
/// ```ron
/// (
///     tautogram_attempts: 50,
///     tautogram_letters: "mps",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Anchor nouns tried before a haiku search gives up.
    pub haiku_attempts: u32,
    /// Syllables in the articulated nouns that open and close a haiku.
    pub haiku_line_syllables: usize,
    /// Adjective syllables when the anchor noun is feminine. Masculine and
    /// neutral anchors take one more.
    pub haiku_adjective_syllables: usize,
    pub haiku_verb_syllables: usize,
    pub couplet_attempts: u32,
    /// Distinct nouns that must share the couplet rhyme.
    pub couplet_min_nouns: usize,
    pub tautogram_attempts: u32,
    /// Candidate initial letters for tautograms.
    pub tautogram_letters: String,
    /// Distinct nouns each mirror rhyme group must hold.
    pub mirror_min_group: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            haiku_attempts: 1000,
            haiku_line_syllables: 5,
            haiku_adjective_syllables: 3,
            haiku_verb_syllables: 3,
            couplet_attempts: 1000,
            couplet_min_nouns: 4,
            tautogram_attempts: 100,
            tautogram_letters: "abcdefghilmnoprstuvz".to_string(),
            mirror_min_group: 2,
        }
    }
}

impl SearchConfig {
    /// Load a search config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<SearchConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse and validate a search config from a RON string.
    pub fn parse_ron(input: &str) -> Result<SearchConfig, ConfigError> {
        let config: SearchConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let budgets = [
            ("haiku_attempts", self.haiku_attempts),
            ("couplet_attempts", self.couplet_attempts),
            ("tautogram_attempts", self.tautogram_attempts),
        ];
        for (name, value) in budgets {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be at least 1")));
            }
        }
        if self.letters().is_empty() {
            return Err(ConfigError::Invalid(
                "tautogram_letters must not be empty".to_string(),
            ));
        }
        if self.couplet_min_nouns == 0 || self.mirror_min_group == 0 {
            return Err(ConfigError::Invalid(
                "rhyme group sizes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Tautogram letters, lowercased, whitespace dropped.
    pub fn letters(&self) -> Vec<char> {
        self.tautogram_letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SearchConfig::default();
        assert_eq!(config.tautogram_attempts, 100);
        assert_eq!(config.couplet_min_nouns, 4);
        assert_eq!(config.mirror_min_group, 2);
        assert_eq!(config.letters().len(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = SearchConfig::parse_ron("(tautogram_attempts: 7, tautogram_letters: \"M p\")")
            .unwrap();
        assert_eq!(config.tautogram_attempts, 7);
        assert_eq!(config.letters(), vec!['m', 'p']);
        assert_eq!(config.haiku_attempts, 1000);
    }

    #[test]
    fn named_struct_ron_is_accepted() {
        let config = SearchConfig::parse_ron("SearchConfig(couplet_min_nouns: 2)").unwrap();
        assert_eq!(config.couplet_min_nouns, 2);
    }

    #[test]
    fn zero_budget_is_invalid() {
        let err = SearchConfig::parse_ron("(haiku_attempts: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn empty_letters_are_invalid() {
        let err = SearchConfig::parse_ron("(tautogram_letters: \"  \")").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_ron_is_reported() {
        assert!(matches!(
            SearchConfig::parse_ron("(haiku_attempts: \"many\")"),
            Err(ConfigError::Ron(_))
        ));
    }

    #[test]
    fn load_fixture_from_disk() {
        let path = std::path::PathBuf::from("tests/fixtures/search.ron");
        let config = SearchConfig::load_from_ron(&path).unwrap();
        assert_eq!(config.tautogram_letters, "acmp");
    }
}
