use super::{draw_adjective, draw_noun, draw_verb, GenerationError, SentenceProvider};
use crate::core::dictionary::Dictionary;
use crate::schema::style::SentenceStyle;
use crate::schema::word::Lexeme;

const STYLE: SentenceStyle = SentenceStyle::Definition;

/// `DEFINED: [noun] [adjective] care [verb].`
///
/// The defined word is upper-cased and left unarticulated; the adjective
/// agrees with the defining noun.
#[derive(Debug)]
pub struct DefinitionProvider {
    dictionary: Dictionary,
}

impl DefinitionProvider {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}

impl SentenceProvider for DefinitionProvider {
    fn produce(&mut self) -> Result<String, GenerationError> {
        let defined = draw_noun(&mut self.dictionary, STYLE)?;
        let noun = draw_noun(&mut self.dictionary, STYLE)?;
        let adjective = draw_adjective(&mut self.dictionary, STYLE)?;
        let verb = draw_verb(&mut self.dictionary, STYLE)?;
        Ok(format!(
            "{}: {} {} care {}.",
            defined.text().to_uppercase(),
            noun.articulated(),
            adjective.form_for(noun.gender()),
            verb.text()
        ))
    }
}
