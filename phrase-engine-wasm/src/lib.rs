//! WASM bindings for phrase-engine, used by the browser demo.

use wasm_bindgen::prelude::*;

use phrase_engine::core::dictionary::Dictionary;
use phrase_engine::core::engine::{PhraseEngine, Presentation};
use phrase_engine::schema::style::SentenceStyle;

// ---------------------------------------------------------------------------
// Embedded demo lexicon, compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const DEMO_WORDS: &str = include_str!("../../data/demo_words.txt");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct LexiconStats {
    nouns: usize,
    adjectives: usize,
    verbs: usize,
    unrecognized: usize,
    total: usize,
}

fn presentation_for(html: bool) -> Presentation {
    if html {
        Presentation::Html
    } else {
        Presentation::Plain
    }
}

fn build(
    word_list: &str,
    html: bool,
    seed: Option<u64>,
) -> Result<PhraseEngine, JsError> {
    let mut builder = PhraseEngine::builder()
        .with_dictionary(Dictionary::parse(word_list))
        .presentation(presentation_for(html));
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    builder
        .build()
        .map_err(|e| JsError::new(&format!("Engine build error: {e}")))
}

// ---------------------------------------------------------------------------
// PhraseGenerator, the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct PhraseGenerator {
    engine: PhraseEngine,
}

#[wasm_bindgen]
impl PhraseGenerator {
    /// Create a generator over a word list in `<word> <tag>` lines.
    #[wasm_bindgen(constructor)]
    pub fn new(word_list: &str, html: bool) -> Result<PhraseGenerator, JsError> {
        Ok(PhraseGenerator {
            engine: build(word_list, html, None)?,
        })
    }

    /// Same as the constructor, with reproducible draws.
    pub fn with_seed(word_list: &str, html: bool, seed: u64) -> Result<PhraseGenerator, JsError> {
        Ok(PhraseGenerator {
            engine: build(word_list, html, Some(seed))?,
        })
    }

    /// A generator over the bundled demo word list.
    pub fn demo(html: bool) -> Result<PhraseGenerator, JsError> {
        Self::new(data::DEMO_WORDS, html)
    }

    /// Generate one sentence. `style` is a style name such as `"haiku"`.
    pub fn generate(&mut self, style: &str) -> Result<String, JsError> {
        let style: SentenceStyle = style
            .parse()
            .map_err(|e| JsError::new(&format!("{e}")))?;
        self.engine
            .generate(style)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))
    }

    /// One sentence per style as a JSON object keyed by style name.
    pub fn generate_all(&mut self) -> Result<String, JsError> {
        let all = self.engine.generate_all();
        serde_json::to_string(&all)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Discard providers so the next sentences run fresh searches.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Switch between plain text and HTML output.
    pub fn set_html(&mut self, html: bool) {
        self.engine.set_presentation(presentation_for(html));
    }

    /// Return JSON word counts for the loaded lexicon.
    pub fn stats(&self) -> Result<String, JsError> {
        let lexicon = self.engine.lexicon();
        let stats = LexiconStats {
            nouns: lexicon.accepted_nouns().len(),
            adjectives: lexicon.accepted_adjectives().len(),
            verbs: lexicon.accepted_verbs().len(),
            unrecognized: lexicon.total_unrecognized(),
            total: lexicon.total_words(),
        };
        serde_json::to_string(&stats)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return JSON array of style names.
    pub fn styles() -> String {
        let names: Vec<&str> = SentenceStyle::ALL.iter().map(|s| s.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }
}
