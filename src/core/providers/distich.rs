use super::{five_word_line, GenerationError, SentenceProvider};
use crate::core::dictionary::Dictionary;
use crate::schema::style::SentenceStyle;

const STYLE: SentenceStyle = SentenceStyle::Distich;

/// Two unconstrained five-word lines joined as verse.
#[derive(Debug)]
pub struct DistichProvider {
    dictionary: Dictionary,
}

impl DistichProvider {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl SentenceProvider for DistichProvider {
    fn produce(&mut self) -> Result<String, GenerationError> {
        let first = five_word_line(&mut self.dictionary, STYLE)?;
        let second = five_word_line(&mut self.dictionary, STYLE)?;
        Ok(format!("{first} / {second}"))
    }
}
