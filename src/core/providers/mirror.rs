use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::{draw_adjective, draw_noun, draw_verb, GenerationError, SentenceProvider};
use crate::core::config::SearchConfig;
use crate::core::dictionary::Dictionary;
use crate::core::filter::Filter;
use crate::schema::style::SentenceStyle;
use crate::schema::word::Lexeme;

const STYLE: SentenceStyle = SentenceStyle::Mirror;

/// Four lines rhyming A-B-B-A, each `[noun adjective] [verb]`.
///
/// Rhyme groups are enumerated exactly from the lexicon, so a lexicon with
/// fewer than two usable groups fails at construction instead of spinning.
#[derive(Debug)]
pub struct MirrorProvider {
    dictionary: Dictionary,
    config: SearchConfig,
    rhymes: Result<(String, String), GenerationError>,
}

impl MirrorProvider {
    pub fn new(dictionary: Dictionary) -> Result<Self, GenerationError> {
        Self::with_config(dictionary, SearchConfig::default())
    }

    pub fn with_config(
        mut dictionary: Dictionary,
        config: SearchConfig,
    ) -> Result<Self, GenerationError> {
        let rhymes = pick_rhymes(&mut dictionary, &config)?;
        Ok(Self {
            dictionary,
            config,
            rhymes: Ok(rhymes),
        })
    }

    /// The outer (A) and inner (B) rhyme keys, or `None` if the last pick
    /// failed.
    pub fn rhymes(&self) -> Option<(&str, &str)> {
        self.rhymes
            .as_ref()
            .ok()
            .map(|(outer, inner)| (outer.as_str(), inner.as_str()))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// One `[noun adjective] [verb]` line whose noun ends in `rhyme`.
    fn line(&mut self, rhyme: &str) -> Result<String, GenerationError> {
        let filter = Filter::nouns_with_rhyme(rhyme);
        self.dictionary.add_filter(filter.clone());
        let noun = draw_noun(&mut self.dictionary, STYLE);
        self.dictionary.remove_filter(&filter);
        let noun = noun?;

        let adjective = draw_adjective(&mut self.dictionary, STYLE)?;
        let verb = draw_verb(&mut self.dictionary, STYLE)?;
        Ok(format!(
            "{} {} {}",
            noun.articulated(),
            adjective.form_for(noun.gender()),
            verb.text()
        ))
    }
}

/// Rhyme keys with at least `mirror_min_group` distinct nouns, sorted.
fn rhyme_groups(dictionary: &Dictionary, config: &SearchConfig) -> Vec<String> {
    let mut groups: FxHashMap<String, FxHashSet<&str>> = FxHashMap::default();
    for noun in dictionary.accepted_nouns() {
        groups
            .entry(noun.rhyme().to_string())
            .or_default()
            .insert(noun.text());
    }

    let mut qualifying: Vec<String> = groups
        .into_iter()
        .filter(|(_, words)| words.len() >= config.mirror_min_group)
        .map(|(rhyme, _)| rhyme)
        .collect();
    qualifying.sort();
    qualifying
}

fn pick_rhymes(
    dictionary: &mut Dictionary,
    config: &SearchConfig,
) -> Result<(String, String), GenerationError> {
    dictionary.clear_filters();
    let groups = rhyme_groups(dictionary, config);
    if groups.len() < 2 {
        warn!(found = groups.len(), "not enough rhyme groups for mirror");
        return Err(GenerationError::NoRhymeGroups {
            style: STYLE,
            needed: 2,
            found: groups.len(),
        });
    }

    let outer = dictionary.choose(&groups).cloned().unwrap_or_default();
    let rest: Vec<String> = groups.into_iter().filter(|rhyme| *rhyme != outer).collect();
    let inner = dictionary.choose(&rest).cloned().unwrap_or_default();

    debug!(%outer, %inner, "mirror rhymes chosen");
    Ok((outer, inner))
}

impl SentenceProvider for MirrorProvider {
    fn produce(&mut self) -> Result<String, GenerationError> {
        let (outer, inner) = self.rhymes.clone()?;
        let lines = [
            format!("{},", self.line(&outer)?),
            format!("{},", self.line(&inner)?),
            format!("{},", self.line(&inner)?),
            format!("{}.", self.line(&outer)?),
        ];
        Ok(lines.join(" / "))
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        self.rhymes = pick_rhymes(&mut self.dictionary, &self.config);
        self.rhymes.as_ref().map(|_| ()).map_err(Clone::clone)
    }
}
