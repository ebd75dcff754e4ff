//! The word dictionary: per-category accepted/refused partitions kept in
//! step with a live list of filters.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::filter::Filter;
use crate::core::morphology;
use crate::schema::word::{Adjective, AsWordRef, Gender, Noun, Verb, WordRef};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn passes_all(word: WordRef<'_>, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.accepts(word))
}

/// One category's words, split by the active filters.
#[derive(Debug, Clone)]
struct Partition<T> {
    accepted: Vec<T>,
    refused: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            refused: Vec::new(),
        }
    }
}

impl<T: AsWordRef> Partition<T> {
    fn insert(&mut self, word: T, filters: &[Filter]) {
        if passes_all(word.as_word(), filters) {
            self.accepted.push(word);
        } else {
            self.refused.push(word);
        }
    }

    /// Only accepted words can be refused by a new filter.
    fn filter_added(&mut self, filter: &Filter) {
        let (kept, moved): (Vec<T>, Vec<T>) = std::mem::take(&mut self.accepted)
            .into_iter()
            .partition(|word| filter.accepts(word.as_word()));
        self.accepted = kept;
        self.refused.extend(moved);
    }

    /// Refused words are re-checked against every remaining filter.
    fn filter_removed(&mut self, remaining: &[Filter]) {
        let (moved, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.refused)
            .into_iter()
            .partition(|word| passes_all(word.as_word(), remaining));
        self.refused = kept;
        self.accepted.extend(moved);
    }

    fn restore_all(&mut self) {
        self.accepted.append(&mut self.refused);
    }

    fn len(&self) -> usize {
        self.accepted.len() + self.refused.len()
    }
}

/// All known words, partitioned per category into accepted and refused
/// under the active filters, plus entries whose tag was not recognized.
///
/// A word is accepted iff every active filter accepts it; this holds after
/// every call that changes the filters. Words move between the two sides
/// but are never dropped.
///
/// Cloning copies every partition and the active filters, and gives the
/// copy its own random source.
#[derive(Debug)]
pub struct Dictionary {
    nouns: Partition<Noun>,
    adjectives: Partition<Adjective>,
    verbs: Partition<Verb>,
    unrecognized: Vec<String>,
    filters: Vec<Filter>,
    rng: StdRng,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Dictionary {
    fn clone(&self) -> Self {
        Self {
            nouns: self.nouns.clone(),
            adjectives: self.adjectives.clone(),
            verbs: self.verbs.clone(),
            unrecognized: self.unrecognized.clone(),
            filters: self.filters.clone(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Dictionary {
    /// An empty dictionary with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An empty dictionary whose draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            nouns: Partition::default(),
            adjectives: Partition::default(),
            verbs: Partition::default(),
            unrecognized: Vec::new(),
            filters: Vec::new(),
            rng,
        }
    }

    /// Replace the random source with a seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Parse a word list: one `<word> <tag>` entry per line. Lines with
    /// fewer than two whitespace-separated fields are skipped.
    pub fn parse(text: &str) -> Dictionary {
        let mut dictionary = Dictionary::new();
        for line in text.lines() {
            dictionary.add_line(line);
        }
        dictionary.log_summary();
        dictionary
    }

    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Dictionary, LoadError> {
        let mut dictionary = Dictionary::new();
        for line in reader.lines() {
            dictionary.add_line(&line?);
        }
        dictionary.log_summary();
        Ok(dictionary)
    }

    pub fn load_from_path(path: &Path) -> Result<Dictionary, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::load_from_reader(std::io::BufReader::new(file))
    }

    fn add_line(&mut self, line: &str) {
        let mut fields = line.split_whitespace();
        if let (Some(word), Some(tag)) = (fields.next(), fields.next()) {
            self.add_word(word, tag);
        }
    }

    fn log_summary(&self) {
        info!(
            nouns = self.nouns.len(),
            adjectives = self.adjectives.len(),
            verbs = self.verbs.len(),
            unrecognized = self.unrecognized.len(),
            "word list loaded"
        );
    }

    /// Add a raw entry. Noun tags are `M`, `F`, `N` and `MF` (kept as
    /// masculine), `A` marks adjectives, `V`/`VT` verbs. Any other tag is
    /// recorded as an unrecognized `"<word> : <tag>"` entry. Entries that
    /// are empty after character fixes are dropped, whatever their tag.
    pub fn add_word(&mut self, raw: &str, tag: &str) {
        let word = morphology::fix_characters(raw);
        if word.is_empty() {
            debug!(raw, tag, "skipping entry that is empty after character fixes");
            return;
        }

        if let Some(gender) = Gender::from_tag(tag) {
            self.add_noun(Noun::new(word, gender));
            return;
        }
        match tag {
            "A" => self.add_adjective(Adjective::new(word)),
            "V" | "VT" => self.add_verb(Verb::new(word)),
            _ => self.unrecognized.push(format!("{word} : {tag}")),
        }
    }

    pub fn add_noun(&mut self, noun: Noun) {
        self.nouns.insert(noun, &self.filters);
    }

    pub fn add_adjective(&mut self, adjective: Adjective) {
        self.adjectives.insert(adjective, &self.filters);
    }

    pub fn add_verb(&mut self, verb: Verb) {
        self.verbs.insert(verb, &self.filters);
    }

    /// Install a filter, moving every accepted word it refuses.
    pub fn add_filter(&mut self, filter: Filter) {
        self.nouns.filter_added(&filter);
        self.adjectives.filter_added(&filter);
        self.verbs.filter_added(&filter);
        self.filters.push(filter);
    }

    pub fn add_filters(&mut self, filters: impl IntoIterator<Item = Filter>) {
        for filter in filters {
            self.add_filter(filter);
        }
    }

    /// Remove a filter and re-accept every refused word that satisfies all
    /// the remaining ones. Returns false if the filter was not active.
    ///
    /// More expensive than [`Dictionary::add_filter`]: each refused word is
    /// checked against every remaining filter.
    pub fn remove_filter(&mut self, filter: &Filter) -> bool {
        let Some(position) = self.filters.iter().position(|f| f == filter) else {
            return false;
        };
        self.filters.remove(position);
        self.nouns.filter_removed(&self.filters);
        self.adjectives.filter_removed(&self.filters);
        self.verbs.filter_removed(&self.filters);
        true
    }

    /// Drop every filter; all words become accepted.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.nouns.restore_all();
        self.adjectives.restore_all();
        self.verbs.restore_all();
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// A uniformly random accepted noun, or `None` if none is accepted.
    pub fn random_noun(&mut self) -> Option<Noun> {
        self.nouns.accepted.choose(&mut self.rng).cloned()
    }

    pub fn random_adjective(&mut self) -> Option<Adjective> {
        self.adjectives.accepted.choose(&mut self.rng).cloned()
    }

    pub fn random_verb(&mut self) -> Option<Verb> {
        self.verbs.accepted.choose(&mut self.rng).cloned()
    }

    pub fn random_unrecognized(&mut self) -> Option<String> {
        self.unrecognized.choose(&mut self.rng).cloned()
    }

    /// Pick one of `items` with this dictionary's random source.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    pub fn accepted_nouns(&self) -> &[Noun] {
        &self.nouns.accepted
    }

    pub fn refused_nouns(&self) -> &[Noun] {
        &self.nouns.refused
    }

    pub fn accepted_adjectives(&self) -> &[Adjective] {
        &self.adjectives.accepted
    }

    pub fn refused_adjectives(&self) -> &[Adjective] {
        &self.adjectives.refused
    }

    pub fn accepted_verbs(&self) -> &[Verb] {
        &self.verbs.accepted
    }

    pub fn refused_verbs(&self) -> &[Verb] {
        &self.verbs.refused
    }

    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    pub fn total_accepted(&self) -> usize {
        self.nouns.accepted.len() + self.adjectives.accepted.len() + self.verbs.accepted.len()
    }

    pub fn total_refused(&self) -> usize {
        self.nouns.refused.len() + self.adjectives.refused.len() + self.verbs.refused.len()
    }

    pub fn total_unrecognized(&self) -> usize {
        self.unrecognized.len()
    }

    pub fn total_words(&self) -> usize {
        self.total_accepted() + self.total_refused() + self.total_unrecognized()
    }
}
