use super::{five_word_line, GenerationError, SentenceProvider};
use crate::core::dictionary::Dictionary;
use crate::schema::style::SentenceStyle;

/// `[noun adjective] [verb] [noun adjective].`
#[derive(Debug)]
pub struct FiveWordProvider {
    dictionary: Dictionary,
}

impl FiveWordProvider {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl SentenceProvider for FiveWordProvider {
    fn produce(&mut self) -> Result<String, GenerationError> {
        five_word_line(&mut self.dictionary, SentenceStyle::FiveWord)
    }
}
