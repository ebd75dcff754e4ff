//! Sentence providers, one per style, each owning its own dictionary.
//!
//! Providers take their [`Dictionary`] by value. Hand each one a clone of
//! the loaded lexicon so that filter searches never touch shared state.

mod comparison;
mod couplet;
mod definition;
mod distich;
mod five_word;
mod haiku;
mod mirror;
mod tautogram;

pub use comparison::ComparisonProvider;
pub use couplet::CoupletProvider;
pub use definition::DefinitionProvider;
pub use distich::DistichProvider;
pub use five_word::FiveWordProvider;
pub use haiku::HaikuProvider;
pub use mirror::MirrorProvider;
pub use tautogram::TautogramProvider;

use thiserror::Error;

use crate::core::config::SearchConfig;
use crate::core::dictionary::Dictionary;
use crate::schema::style::SentenceStyle;
use crate::schema::word::{Adjective, Category, Lexeme, Noun, Verb};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("{style}: not enough words (no {category} available)")]
    InsufficientWords {
        style: SentenceStyle,
        category: Category,
    },
    #[error("{style}: no feasible filter found after {attempts} attempts")]
    SearchExhausted { style: SentenceStyle, attempts: u32 },
    #[error("{style}: needed {needed} rhyme groups, found {found}")]
    NoRhymeGroups {
        style: SentenceStyle,
        needed: usize,
        found: usize,
    },
}

/// Anything that produces one sentence per call.
///
/// Decorators implement this over another provider, so presentation can be
/// layered without the generators knowing about it.
pub trait SentenceProvider {
    fn produce(&mut self) -> Result<String, GenerationError>;

    /// Re-run the provider's filter search, if it has one.
    fn reset(&mut self) -> Result<(), GenerationError> {
        Ok(())
    }
}

impl<P: SentenceProvider + ?Sized> SentenceProvider for Box<P> {
    fn produce(&mut self) -> Result<String, GenerationError> {
        (**self).produce()
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        (**self).reset()
    }
}

/// Build the provider for `style`, boxed for dynamic dispatch.
pub fn build_provider(
    style: SentenceStyle,
    dictionary: Dictionary,
    config: &SearchConfig,
) -> Result<Box<dyn SentenceProvider + Send>, GenerationError> {
    let provider: Box<dyn SentenceProvider + Send> = match style {
        SentenceStyle::Haiku => Box::new(HaikuProvider::with_config(dictionary, config.clone())?),
        SentenceStyle::Couplet => {
            Box::new(CoupletProvider::with_config(dictionary, config.clone())?)
        }
        SentenceStyle::Comparison => Box::new(ComparisonProvider::new(dictionary)),
        SentenceStyle::Definition => Box::new(DefinitionProvider::new(dictionary)),
        SentenceStyle::Tautogram => {
            Box::new(TautogramProvider::with_config(dictionary, config.clone())?)
        }
        SentenceStyle::Mirror => Box::new(MirrorProvider::with_config(dictionary, config.clone())?),
        SentenceStyle::FiveWord => Box::new(FiveWordProvider::new(dictionary)),
        SentenceStyle::Distich => Box::new(DistichProvider::new(dictionary)),
    };
    Ok(provider)
}

pub(crate) fn draw_noun(
    dictionary: &mut Dictionary,
    style: SentenceStyle,
) -> Result<Noun, GenerationError> {
    dictionary
        .random_noun()
        .ok_or(GenerationError::InsufficientWords {
            style,
            category: Category::Noun,
        })
}

pub(crate) fn draw_adjective(
    dictionary: &mut Dictionary,
    style: SentenceStyle,
) -> Result<Adjective, GenerationError> {
    dictionary
        .random_adjective()
        .ok_or(GenerationError::InsufficientWords {
            style,
            category: Category::Adjective,
        })
}

pub(crate) fn draw_verb(
    dictionary: &mut Dictionary,
    style: SentenceStyle,
) -> Result<Verb, GenerationError> {
    dictionary
        .random_verb()
        .ok_or(GenerationError::InsufficientWords {
            style,
            category: Category::Verb,
        })
}

/// Articulated noun followed by an adjective agreeing with its gender.
pub(crate) fn noun_adjective_combo(
    dictionary: &mut Dictionary,
    style: SentenceStyle,
) -> Result<String, GenerationError> {
    let noun = draw_noun(dictionary, style)?;
    let adjective = draw_adjective(dictionary, style)?;
    Ok(format!(
        "{} {}",
        noun.articulated(),
        adjective.form_for(noun.gender())
    ))
}

/// `[combo] [verb] [combo].`, shared by the five-word and distich styles.
pub(crate) fn five_word_line(
    dictionary: &mut Dictionary,
    style: SentenceStyle,
) -> Result<String, GenerationError> {
    let first = noun_adjective_combo(dictionary, style)?;
    let verb = draw_verb(dictionary, style)?;
    let second = noun_adjective_combo(dictionary, style)?;
    Ok(format!("{first} {} {second}.", verb.text()))
}

/// `[combo] [verb] [articulated noun].`, used by couplet lines and tautograms.
pub(crate) fn combo_verb_noun_line(
    dictionary: &mut Dictionary,
    style: SentenceStyle,
) -> Result<String, GenerationError> {
    let combo = noun_adjective_combo(dictionary, style)?;
    let verb = draw_verb(dictionary, style)?;
    let noun = draw_noun(dictionary, style)?;
    Ok(format!("{combo} {} {}.", verb.text(), noun.articulated()))
}
