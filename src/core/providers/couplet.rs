use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::{combo_verb_noun_line, draw_noun, GenerationError, SentenceProvider};
use crate::core::config::SearchConfig;
use crate::core::dictionary::Dictionary;
use crate::core::filter::Filter;
use crate::core::morphology::capitalize_first;
use crate::schema::style::SentenceStyle;
use crate::schema::word::Lexeme;

const STYLE: SentenceStyle = SentenceStyle::Couplet;

/// Two rhyming lines, each `[noun adjective] [verb] [noun].`
///
/// Every noun in the couplet shares the rhyme key of a randomly drawn
/// anchor; the search retries anchors until enough distinct nouns rhyme.
#[derive(Debug)]
pub struct CoupletProvider {
    dictionary: Dictionary,
    config: SearchConfig,
    /// Outcome of the last search; production fails while it is an error.
    rhyme: Result<String, GenerationError>,
}

impl CoupletProvider {
    pub fn new(dictionary: Dictionary) -> Result<Self, GenerationError> {
        Self::with_config(dictionary, SearchConfig::default())
    }

    pub fn with_config(
        mut dictionary: Dictionary,
        config: SearchConfig,
    ) -> Result<Self, GenerationError> {
        let rhyme = find_rhyme(&mut dictionary, &config)?;
        Ok(Self {
            dictionary,
            config,
            rhyme: Ok(rhyme),
        })
    }

    /// Rhyme key chosen by the last search, or `None` if it failed.
    pub fn rhyme(&self) -> Option<&str> {
        self.rhyme.as_deref().ok()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

fn distinct_accepted_nouns(dictionary: &Dictionary) -> usize {
    dictionary
        .accepted_nouns()
        .iter()
        .map(|noun| noun.text())
        .collect::<FxHashSet<_>>()
        .len()
}

/// Draw anchors until one rhymes with at least `couplet_min_nouns` distinct
/// nouns. On success the rhyme filter stays installed; on failure none is.
fn find_rhyme(dictionary: &mut Dictionary, config: &SearchConfig) -> Result<String, GenerationError> {
    let attempts = config.couplet_attempts;
    for attempt in 1..=attempts {
        dictionary.clear_filters();
        let anchor = draw_noun(dictionary, STYLE)?;
        dictionary.add_filter(Filter::nouns_with_rhyme(anchor.rhyme()));

        let available = distinct_accepted_nouns(dictionary);
        if available >= config.couplet_min_nouns {
            debug!(attempt, rhyme = anchor.rhyme(), available, "couplet rhyme found");
            return Ok(anchor.rhyme().to_string());
        }
    }

    dictionary.clear_filters();
    warn!(attempts, "couplet search exhausted");
    Err(GenerationError::SearchExhausted {
        style: STYLE,
        attempts,
    })
}

impl SentenceProvider for CoupletProvider {
    fn produce(&mut self) -> Result<String, GenerationError> {
        self.rhyme.as_ref().map_err(Clone::clone)?;
        let first = combo_verb_noun_line(&mut self.dictionary, STYLE)?;
        let second = combo_verb_noun_line(&mut self.dictionary, STYLE)?;
        Ok(format!("{first} / {}", capitalize_first(&second)))
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        self.rhyme = find_rhyme(&mut self.dictionary, &self.config);
        self.rhyme.as_ref().map(|_| ()).map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::morphology::rhyme_key;

    const LEXICON: &str = "motor N\ntractor N\nactor M\ndoctor M\npod N\ncasă F\n\
                           frumos A\nmerge VT\n";

    #[test]
    fn lines_rhyme_and_second_is_capitalized() {
        let mut couplet = CoupletProvider::new(Dictionary::parse(LEXICON)).unwrap();
        assert_eq!(couplet.rhyme(), Some("tor"));

        let sentence = couplet.produce().unwrap();
        let lines: Vec<&str> = sentence.split(" / ").collect();
        assert_eq!(lines.len(), 2, "{sentence}");
        assert!(lines[0].ends_with("ul."));
        assert!(lines[1].ends_with('.'));
        assert!(lines[1].chars().next().unwrap().is_uppercase());

        let last_words: Vec<String> = lines
            .iter()
            .map(|line| {
                let word = line.trim_end_matches('.').rsplit(' ').next().unwrap();
                rhyme_key(word)
            })
            .collect();
        assert_eq!(last_words[0], last_words[1]);
    }

    #[test]
    fn every_noun_shares_the_rhyme() {
        let mut couplet = CoupletProvider::new(Dictionary::parse(LEXICON)).unwrap();
        for _ in 0..10 {
            let sentence = couplet.produce().unwrap();
            assert!(!sentence.contains("podul"), "{sentence}");
            assert!(!sentence.contains("casa"), "{sentence}");
        }
    }

    #[test]
    fn duplicate_entries_do_not_count_twice() {
        let lexicon = "motor N\nmotor N\nmotor N\nmotor N\nfrumos A\nmerge VT\n";
        let config = SearchConfig {
            couplet_attempts: 10,
            ..SearchConfig::default()
        };
        let err = CoupletProvider::with_config(Dictionary::parse(lexicon), config).unwrap_err();
        assert_eq!(
            err,
            GenerationError::SearchExhausted {
                style: SentenceStyle::Couplet,
                attempts: 10,
            }
        );
    }

    #[test]
    fn reset_reruns_the_search() {
        let mut couplet = CoupletProvider::new(Dictionary::parse(LEXICON)).unwrap();
        couplet.reset().unwrap();
        assert_eq!(couplet.rhyme(), Some("tor"));
        assert_eq!(couplet.dictionary().accepted_nouns().len(), 4);
    }

    #[test]
    fn failed_reset_blocks_production() {
        let lexicon = "motor N\ntractor N\nactor M\ndoctor M\npod N\ncasă F\ncal M\n\
                       mal N\npas N\nnas N\nfrumos A\nmerge VT\n";
        let config = SearchConfig {
            couplet_attempts: 1,
            ..SearchConfig::default()
        };

        let mut exercised = false;
        for seed in 0..500 {
            let mut dictionary = Dictionary::parse(lexicon);
            dictionary.reseed(seed);
            let Ok(mut couplet) = CoupletProvider::with_config(dictionary, config.clone()) else {
                continue;
            };
            if couplet.reset().is_ok() {
                continue;
            }

            assert_eq!(couplet.rhyme(), None);
            assert_eq!(
                couplet.produce(),
                Err(GenerationError::SearchExhausted {
                    style: SentenceStyle::Couplet,
                    attempts: 1,
                })
            );
            exercised = true;
            break;
        }
        assert!(exercised, "no seed gave a successful build followed by a failed reset");
    }
}
