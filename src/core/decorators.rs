//! Presentation wrappers. Each decorator owns another provider, forwards
//! `reset`, and rewrites the text it produces.
//!
//! Decorators compose inside out: the HTML chain for verse is
//! `HtmlVerseBreaker::new(DexonlineLinkAdder::new(VerseLineCapitalizer::new(p)))`.

use std::fmt::Write;

use crate::core::morphology::capitalize_first;
use crate::core::providers::{GenerationError, SentenceProvider};

/// Separator between verse lines in plain text.
pub const VERSE_SEPARATOR: &str = " / ";

const HTML_LINE_BREAK: &str = "<br/>";

const DEXONLINE_URL: &str = "https://dexonline.ro/definitie/";

macro_rules! decorator {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<P> {
            inner: P,
        }

        impl<P: SentenceProvider> $name<P> {
            pub fn new(inner: P) -> Self {
                Self { inner }
            }

            pub fn into_inner(self) -> P {
                self.inner
            }
        }
    };
}

decorator!(
    /// Trims the sentence and upper-cases its first character.
    FirstLetterCapitalizer
);

decorator!(
    /// Upper-cases the first character of every verse line.
    VerseLineCapitalizer
);

decorator!(
    /// Replaces verse separators with HTML line breaks.
    HtmlVerseBreaker
);

decorator!(
    /// Wraps every run of letters in a link to its dexonline.ro definition.
    DexonlineLinkAdder
);

impl<P: SentenceProvider> SentenceProvider for FirstLetterCapitalizer<P> {
    fn produce(&mut self) -> Result<String, GenerationError> {
        Ok(capitalize_first(self.inner.produce()?.trim()))
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        self.inner.reset()
    }
}

impl<P: SentenceProvider> SentenceProvider for VerseLineCapitalizer<P> {
    fn produce(&mut self) -> Result<String, GenerationError> {
        let sentence = self.inner.produce()?;
        Ok(sentence
            .split(VERSE_SEPARATOR)
            .map(|line| capitalize_first(line.trim()))
            .collect::<Vec<_>>()
            .join(VERSE_SEPARATOR))
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        self.inner.reset()
    }
}

impl<P: SentenceProvider> SentenceProvider for HtmlVerseBreaker<P> {
    fn produce(&mut self) -> Result<String, GenerationError> {
        Ok(self
            .inner
            .produce()?
            .replace(VERSE_SEPARATOR, HTML_LINE_BREAK))
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        self.inner.reset()
    }
}

impl<P: SentenceProvider> SentenceProvider for DexonlineLinkAdder<P> {
    fn produce(&mut self) -> Result<String, GenerationError> {
        Ok(add_links(&self.inner.produce()?))
    }

    fn reset(&mut self) -> Result<(), GenerationError> {
        self.inner.reset()
    }
}

/// Replace each maximal run of letters in `text` with a definition link.
pub fn add_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphabetic() {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            push_link(&mut out, &word);
            word.clear();
        }
        out.push(c);
    }
    if !word.is_empty() {
        push_link(&mut out, &word);
    }
    out
}

fn push_link(out: &mut String, word: &str) {
    let encoded = form_urlencode(&word.to_lowercase());
    out.push_str(&format!(
        r#"<a href="{DEXONLINE_URL}{encoded}" target="_blank" rel="noopener" data-word="{encoded}">{}</a>"#,
        escape_html(word)
    ));
}

/// `application/x-www-form-urlencoded` encoding: unreserved ASCII passes,
/// spaces become `+`, everything else is percent-encoded UTF-8.
pub fn form_urlencode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'-' | b'*' | b'_' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
