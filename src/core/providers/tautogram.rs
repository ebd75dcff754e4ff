use tracing::{debug, warn};

use super::{combo_verb_noun_line, GenerationError, SentenceProvider};
use crate::core::config::SearchConfig;
use crate::core::dictionary::Dictionary;
use crate::core::filter::Filter;
use crate::schema::style::SentenceStyle;

const STYLE: SentenceStyle = SentenceStyle::Tautogram;

/// `[noun adjective] [verb] [noun].` with every word starting with the same
/// letter.
#[derive(Debug)]
pub struct TautogramProvider {
    dictionary: Dictionary,
    config: SearchConfig,
    letter: Result<char, GenerationError>,
}

impl TautogramProvider {
    pub fn new(dictionary: Dictionary) -> Result<Self, GenerationError> {
        Self::with_config(dictionary, SearchConfig::default())
    }

    pub fn with_config(
        mut dictionary: Dictionary,
        config: SearchConfig,
    ) -> Result<Self, GenerationError> {
        let letter = find_letter(&mut dictionary, &config)?;
        Ok(Self {
            dictionary,
            config,
            letter: Ok(letter),
        })
    }

    /// Initial letter chosen by the last search, or `None` if it failed.
    pub fn letter(&self) -> Option<char> {
        self.letter.as_ref().ok().copied()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

fn feasible(dictionary: &Dictionary) -> bool {
    !dictionary.accepted_nouns().is_empty()
        && !dictionary.accepted_adjectives().is_empty()
        && !dictionary.accepted_verbs().is_empty()
}

/// Try random letters until one admits a noun, an adjective and a verb.
/// Bounded by `tautogram_attempts`.
fn find_letter(dictionary: &mut Dictionary, config: &SearchConfig) -> Result<char, GenerationError> {
    let letters = config.letters();
    let attempts = config.tautogram_attempts;

    for attempt in 1..=attempts {
        dictionary.clear_filters();
        let Some(&letter) = dictionary.choose(&letters) else {
            break;
        };
        dictionary.add_filter(Filter::starting_with(letter));

        if feasible(dictionary) {
            debug!(attempt, %letter, "tautogram letter found");
            return Ok(letter);
        }
    }

    dictionary.clear_filters();
    warn!(attempts, "tautogram search exhausted");
    Err(GenerationError::SearchExhausted {
        style: STYLE,
        attempts,
    })
}

impl SentenceProvider for TautogramProvider {
    fn produce(&mut self) -> Result<String, GenerationError> {
        self.letter.as_ref().map_err(Clone::clone)?;
        combo_verb_noun_line(&mut self.dictionary, STYLE)
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        self.letter = find_letter(&mut self.dictionary, &self.config);
        self.letter.as_ref().map(|_| ()).map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_starts_with_the_chosen_letter() {
        let lexicon = "macara F\nmotor N\ncasă F\nminunat A\nalb A\nmerge VT\ncântă VT\n";
        let mut tautogram = TautogramProvider::new(Dictionary::parse(lexicon)).unwrap();
        assert_eq!(tautogram.letter(), Some('m'));

        for _ in 0..10 {
            let sentence = tautogram.produce().unwrap();
            assert!(sentence.ends_with('.'));
            for word in sentence.trim_end_matches('.').split_whitespace() {
                assert!(word.starts_with('m'), "{word} in {sentence}");
            }
        }
    }

    #[test]
    fn uppercase_entries_match_lowercase_letters() {
        let lexicon = "Mara F\nmic A\nmerge VT\n";
        let config = SearchConfig {
            tautogram_letters: "M".to_string(),
            ..SearchConfig::default()
        };
        let mut tautogram = TautogramProvider::with_config(Dictionary::parse(lexicon), config).unwrap();
        assert_eq!(tautogram.produce().unwrap(), "Maraua mică merge Maraua.");
    }

    #[test]
    fn infeasible_lexicon_stops_at_the_bound() {
        // No letter has all three categories.
        let lexicon = "macara F\nalb A\ncântă VT\n";
        let err = TautogramProvider::new(Dictionary::parse(lexicon)).unwrap_err();
        assert_eq!(
            err,
            GenerationError::SearchExhausted {
                style: SentenceStyle::Tautogram,
                attempts: 100,
            }
        );
    }

    #[test]
    fn failed_reset_blocks_production() {
        // `c` lacks a verb, so only `m` is feasible.
        let lexicon = "macara F\nmic A\nmerge VT\ncasă F\ncald A\n";
        let config = SearchConfig {
            tautogram_attempts: 1,
            tautogram_letters: "mc".to_string(),
            ..SearchConfig::default()
        };

        let mut exercised = false;
        for seed in 0..500 {
            let mut dictionary = Dictionary::parse(lexicon);
            dictionary.reseed(seed);
            let Ok(mut tautogram) = TautogramProvider::with_config(dictionary, config.clone()) else {
                continue;
            };
            assert_eq!(tautogram.letter(), Some('m'));
            if tautogram.reset().is_ok() {
                continue;
            }

            assert_eq!(tautogram.letter(), None);
            assert_eq!(
                tautogram.produce(),
                Err(GenerationError::SearchExhausted {
                    style: SentenceStyle::Tautogram,
                    attempts: 1,
                })
            );
            exercised = true;
            break;
        }
        assert!(exercised, "no seed gave a successful build followed by a failed reset");
    }
}
