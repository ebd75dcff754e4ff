use super::{draw_adjective, draw_noun, GenerationError, SentenceProvider};
use crate::core::dictionary::Dictionary;
use crate::schema::style::SentenceStyle;

const STYLE: SentenceStyle = SentenceStyle::Comparison;

/// `[noun] e mai [adjective] decât [noun].`
///
/// The adjective agrees with the first noun.
#[derive(Debug)]
pub struct ComparisonProvider {
    dictionary: Dictionary,
}

impl ComparisonProvider {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl SentenceProvider for ComparisonProvider {
    fn produce(&mut self) -> Result<String, GenerationError> {
        let subject = draw_noun(&mut self.dictionary, STYLE)?;
        let adjective = draw_adjective(&mut self.dictionary, STYLE)?;
        let object = draw_noun(&mut self.dictionary, STYLE)?;
        Ok(format!(
            "{} e mai {} decât {}.",
            subject.articulated(),
            adjective.form_for(subject.gender()),
            object.articulated()
        ))
    }
}
