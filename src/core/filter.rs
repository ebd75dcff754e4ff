//! Word filters: shared predicates that narrow a dictionary.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::config::SearchConfig;
use crate::core::morphology::syllable_count;
use crate::schema::word::{Lexeme, Noun, WordRef};

static NEXT_FILTER_ID: AtomicU64 = AtomicU64::new(1);

type Predicate = dyn Fn(WordRef<'_>) -> bool + Send + Sync;

/// A boolean predicate over any word.
///
/// Clones share the predicate and its identity, so a clone can be used to
/// remove the filter it was cloned from.
#[derive(Clone)]
pub struct Filter {
    id: u64,
    predicate: Arc<Predicate>,
}

impl Filter {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(WordRef<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            id: NEXT_FILTER_ID.fetch_add(1, Ordering::Relaxed),
            predicate: Arc::new(predicate),
        }
    }

    pub fn accepts(&self, word: WordRef<'_>) -> bool {
        (self.predicate)(word)
    }

    /// Refuses every word.
    pub fn reject_all() -> Self {
        Self::new(|_| false)
    }

    /// Keeps nouns whose rhyme key equals `rhyme`; adjectives and verbs pass.
    pub fn nouns_with_rhyme(rhyme: impl Into<String>) -> Self {
        let rhyme = rhyme.into();
        Self::new(move |word| match word {
            WordRef::Noun(noun) => noun.rhyme() == rhyme,
            WordRef::Adjective(_) | WordRef::Verb(_) => true,
        })
    }

    /// Keeps words of every category starting with `letter`, ignoring case.
    pub fn starting_with(letter: char) -> Self {
        Self::new(move |word| match word.text().chars().next() {
            Some(first) => first.to_lowercase().eq(letter.to_lowercase()),
            None => false,
        })
    }

    /// Haiku constraints relative to an anchor noun: nouns share its rhyme and
    /// fill a whole line once articulated, adjectives complete the middle line
    /// for the anchor's gender, verbs have a fixed length.
    pub fn haiku(anchor: &Noun, config: &SearchConfig) -> Self {
        let rhyme = anchor.rhyme().to_string();
        let line_syllables = config.haiku_line_syllables;
        let verb_syllables = config.haiku_verb_syllables;
        let adjective_syllables = if anchor.gender().is_feminine() {
            config.haiku_adjective_syllables
        } else {
            config.haiku_adjective_syllables + 1
        };

        Self::new(move |word| match word {
            WordRef::Noun(noun) => {
                syllable_count(noun.articulated()) == line_syllables && noun.rhyme() == rhyme
            }
            WordRef::Adjective(adjective) => adjective.syllables() == adjective_syllables,
            WordRef::Verb(verb) => verb.syllables() == verb_syllables,
        })
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Filter {}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("id", &self.id).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::word::{Adjective, AsWordRef, Gender, Noun, Verb};

    #[test]
    fn clones_share_identity() {
        let a = Filter::reject_all();
        let b = a.clone();
        let c = Filter::reject_all();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rhyme_filter_only_constrains_nouns() {
        let filter = Filter::nouns_with_rhyme("tor");
        assert!(filter.accepts(Noun::new("motor", Gender::Neutral).as_word()));
        assert!(!filter.accepts(Noun::new("pod", Gender::Neutral).as_word()));
        assert!(filter.accepts(Adjective::new("verde").as_word()));
        assert!(filter.accepts(Verb::new("merge").as_word()));
    }

    #[test]
    fn letter_filter_ignores_case() {
        let filter = Filter::starting_with('m');
        assert!(filter.accepts(Noun::new("Macara", Gender::Feminine).as_word()));
        assert!(filter.accepts(Verb::new("merge").as_word()));
        assert!(!filter.accepts(Adjective::new("alb").as_word()));
        assert!(!filter.accepts(Verb::new("").as_word()));
    }

    #[test]
    fn haiku_filter_for_feminine_anchor() {
        let anchor = Noun::new("alternativă", Gender::Feminine);
        let filter = Filter::haiku(&anchor, &SearchConfig::default());

        assert!(filter.accepts(Noun::new("locomotivă", Gender::Feminine).as_word()));
        assert!(!filter.accepts(Noun::new("perspectivă", Gender::Feminine).as_word()));
        assert!(!filter.accepts(Noun::new("calculator", Gender::Neutral).as_word()));
        assert!(filter.accepts(Adjective::new("albastru").as_word()));
        assert!(!filter.accepts(Adjective::new("inteligent").as_word()));
        assert!(filter.accepts(Verb::new("aleargă").as_word()));
        assert!(!filter.accepts(Verb::new("merge").as_word()));
    }

    #[test]
    fn haiku_filter_for_masculine_anchor_wants_longer_adjectives() {
        let anchor = Noun::new("calculator", Gender::Neutral);
        let filter = Filter::haiku(&anchor, &SearchConfig::default());

        assert!(filter.accepts(Noun::new("calculator", Gender::Masculine).as_word()));
        assert!(!filter.accepts(Noun::new("aviator", Gender::Masculine).as_word()));
        assert!(filter.accepts(Adjective::new("inteligent").as_word()));
        assert!(!filter.accepts(Adjective::new("albastru").as_word()));
    }

    #[test]
    fn closures_become_filters() {
        let short = Filter::new(|word| word.syllables() <= 2);
        assert!(short.accepts(Verb::new("merge").as_word()));
        assert!(!short.accepts(Verb::new("aleargă").as_word()));
    }
}
