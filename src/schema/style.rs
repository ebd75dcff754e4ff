use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every sentence style the engine knows how to produce.
///
/// Verse styles separate their lines with `" / "`; prose styles are a
/// single sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceStyle {
    Haiku,
    Couplet,
    Comparison,
    Definition,
    Tautogram,
    Mirror,
    FiveWord,
    Distich,
}

impl SentenceStyle {
    pub const ALL: [SentenceStyle; 8] = [
        SentenceStyle::Haiku,
        SentenceStyle::Couplet,
        SentenceStyle::Comparison,
        SentenceStyle::Definition,
        SentenceStyle::Tautogram,
        SentenceStyle::Mirror,
        SentenceStyle::FiveWord,
        SentenceStyle::Distich,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SentenceStyle::Haiku => "haiku",
            SentenceStyle::Couplet => "couplet",
            SentenceStyle::Comparison => "comparison",
            SentenceStyle::Definition => "definition",
            SentenceStyle::Tautogram => "tautogram",
            SentenceStyle::Mirror => "mirror",
            SentenceStyle::FiveWord => "five_word",
            SentenceStyle::Distich => "distich",
        }
    }

    /// True for styles whose output is several `" / "`-separated lines.
    pub fn is_verse(&self) -> bool {
        matches!(
            self,
            SentenceStyle::Haiku
                | SentenceStyle::Couplet
                | SentenceStyle::Mirror
                | SentenceStyle::Distich
        )
    }
}

impl fmt::Display for SentenceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sentence style '{0}'")]
pub struct UnknownStyle(pub String);

impl FromStr for SentenceStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase().replace('-', "_");
        SentenceStyle::ALL
            .iter()
            .copied()
            .find(|style| style.name() == lowered)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}
