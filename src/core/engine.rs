/// The phrase engine: one provider per style over copies of a shared lexicon.
///
/// Providers are built on first use and kept until `reset()`. Every provider
/// gets its own clone of the base dictionary, so filter searches never
/// interfere with each other or with the lexicon itself.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::config::{ConfigError, SearchConfig};
use crate::core::decorators::{
    DexonlineLinkAdder, FirstLetterCapitalizer, HtmlVerseBreaker, VerseLineCapitalizer,
};
use crate::core::dictionary::{Dictionary, LoadError};
use crate::core::providers::{build_provider, GenerationError, SentenceProvider};
use crate::schema::style::SentenceStyle;

/// Text returned by [`PhraseEngine::generate_or_placeholder`] when a style
/// cannot be produced from the loaded lexicon.
pub const NOT_ENOUGH_WORDS: &str = "Nu există suficiente cuvinte.";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("word list error: {0}")]
    Load(#[from] LoadError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("no word list provided")]
    MissingLexicon,
}

/// How generated sentences are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// Capitalized plain text; verse lines separated by `" / "`.
    #[default]
    Plain,
    /// Words linked to their definitions, verse lines broken with `<br/>`.
    Html,
}

/// One sentence of every style, as produced by [`PhraseEngine::generate_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllSentences {
    pub haiku: String,
    pub couplet: String,
    pub comparison: String,
    pub definition: String,
    pub tautogram: String,
    pub mirror: String,
    pub five_word: String,
    pub distich: String,
}

type BoxedProvider = Box<dyn SentenceProvider + Send>;

/// The top-level phrase engine. Built via `PhraseEngine::builder()`.
pub struct PhraseEngine {
    lexicon: Dictionary,
    config: SearchConfig,
    presentation: Presentation,
    seed: Option<u64>,
    epoch: u64,
    providers: FxHashMap<SentenceStyle, BoxedProvider>,
}

/// Builder for constructing a `PhraseEngine`.
pub struct PhraseEngineBuilder {
    word_list_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    presentation: Presentation,
    /// Directly provided lexicon (for testing without files).
    lexicon: Option<Dictionary>,
    /// Directly provided config (for testing without files).
    config: Option<SearchConfig>,
}

impl PhraseEngine {
    pub fn builder() -> PhraseEngineBuilder {
        PhraseEngineBuilder {
            word_list_path: None,
            config_path: None,
            seed: None,
            presentation: Presentation::Plain,
            lexicon: None,
            config: None,
        }
    }

    /// The base lexicon. Providers never modify it.
    pub fn lexicon(&self) -> &Dictionary {
        &self.lexicon
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Generate one sentence of `style`, building its provider if needed.
    ///
    /// A provider whose construction fails is not cached; the next call
    /// retries the search.
    pub fn generate(&mut self, style: SentenceStyle) -> Result<String, EngineError> {
        let provider = match self.providers.remove(&style) {
            Some(provider) => provider,
            None => self.build_decorated(style)?,
        };
        let provider = self.providers.entry(style).or_insert(provider);
        Ok(provider.produce()?)
    }

    /// Like [`PhraseEngine::generate`], but failures become the
    /// [`NOT_ENOUGH_WORDS`] placeholder.
    pub fn generate_or_placeholder(&mut self, style: SentenceStyle) -> String {
        match self.generate(style) {
            Ok(sentence) => sentence,
            Err(err) => {
                warn!(%style, error = %err, "falling back to placeholder");
                NOT_ENOUGH_WORDS.to_string()
            }
        }
    }

    /// One sentence of every style; styles that fail get the placeholder.
    pub fn generate_all(&mut self) -> AllSentences {
        AllSentences {
            haiku: self.generate_or_placeholder(SentenceStyle::Haiku),
            couplet: self.generate_or_placeholder(SentenceStyle::Couplet),
            comparison: self.generate_or_placeholder(SentenceStyle::Comparison),
            definition: self.generate_or_placeholder(SentenceStyle::Definition),
            tautogram: self.generate_or_placeholder(SentenceStyle::Tautogram),
            mirror: self.generate_or_placeholder(SentenceStyle::Mirror),
            five_word: self.generate_or_placeholder(SentenceStyle::FiveWord),
            distich: self.generate_or_placeholder(SentenceStyle::Distich),
        }
    }

    /// Discard every provider. They are rebuilt, with fresh searches, on
    /// the next `generate` call.
    pub fn reset(&mut self) {
        info!(discarded = self.providers.len(), "resetting providers");
        self.providers.clear();
        self.epoch += 1;
    }

    /// Switch presentation. Cached providers are decorated for the old one,
    /// so they are discarded.
    pub fn set_presentation(&mut self, presentation: Presentation) {
        if presentation != self.presentation {
            self.presentation = presentation;
            self.providers.clear();
        }
    }

    /// Number of styles with a live provider.
    pub fn cached_providers(&self) -> usize {
        self.providers.len()
    }

    fn build_decorated(&self, style: SentenceStyle) -> Result<BoxedProvider, GenerationError> {
        let mut dictionary = self.lexicon.clone();
        if let Some(seed) = self.seed {
            let index = SentenceStyle::ALL
                .iter()
                .position(|s| *s == style)
                .unwrap_or_default() as u64;
            // Distinct stream per style and per reset.
            dictionary.reseed(
                seed.wrapping_add(self.epoch.wrapping_mul(7919))
                    .wrapping_add(index),
            );
        }

        debug!(%style, presentation = ?self.presentation, "building provider");
        let provider = build_provider(style, dictionary, &self.config)?;
        Ok(decorate(style, self.presentation, provider))
    }
}

/// Wrap a provider in the presentation chain for its style.
///
/// Definitions are never capitalized: their head word is already upper-case.
pub fn decorate(
    style: SentenceStyle,
    presentation: Presentation,
    provider: BoxedProvider,
) -> BoxedProvider {
    match (presentation, style) {
        (Presentation::Plain, SentenceStyle::Definition) => provider,
        (Presentation::Html, SentenceStyle::Definition) => {
            Box::new(DexonlineLinkAdder::new(provider))
        }
        (Presentation::Plain, s) if s.is_verse() => Box::new(VerseLineCapitalizer::new(provider)),
        (Presentation::Html, s) if s.is_verse() => Box::new(HtmlVerseBreaker::new(
            DexonlineLinkAdder::new(VerseLineCapitalizer::new(provider)),
        )),
        (Presentation::Plain, _) => Box::new(FirstLetterCapitalizer::new(provider)),
        (Presentation::Html, _) => Box::new(DexonlineLinkAdder::new(
            FirstLetterCapitalizer::new(provider),
        )),
    }
}

impl PhraseEngineBuilder {
    pub fn word_list_path(mut self, path: impl AsRef<Path>) -> Self {
        self.word_list_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Seed every provider's random source. Without a seed, each provider
    /// draws from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Provide the lexicon directly (for testing without files).
    pub fn with_dictionary(mut self, lexicon: Dictionary) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Provide the search config directly (for testing without files).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<PhraseEngine, EngineError> {
        let lexicon = match (self.lexicon, &self.word_list_path) {
            (Some(lexicon), _) => lexicon,
            (None, Some(path)) => Dictionary::load_from_path(path)?,
            (None, None) => return Err(EngineError::MissingLexicon),
        };

        let config = match (self.config, &self.config_path) {
            (Some(config), _) => {
                config.validate()?;
                config
            }
            (None, Some(path)) => SearchConfig::load_from_ron(path)?,
            (None, None) => SearchConfig::default(),
        };

        info!(
            words = lexicon.total_words(),
            presentation = ?self.presentation,
            seeded = self.seed.is_some(),
            "phrase engine ready"
        );

        Ok(PhraseEngine {
            lexicon,
            config,
            presentation: self.presentation,
            seed: self.seed,
            epoch: 0,
            providers: FxHashMap::default(),
        })
    }
}
