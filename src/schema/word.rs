//! Lexical entries: nouns, adjectives and verbs with their derived forms.

use serde::Serialize;
use std::fmt;

use crate::core::morphology;

/// Grammatical gender of a Romanian noun.
///
/// Neutral nouns behave like masculine ones in the singular, which is the
/// only number the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neutral,
}

impl Gender {
    /// Resolve a word-list noun tag. `MF` nouns are kept as masculine only.
    pub fn from_tag(tag: &str) -> Option<Gender> {
        match tag {
            "M" | "MF" => Some(Gender::Masculine),
            "F" => Some(Gender::Feminine),
            "N" => Some(Gender::Neutral),
            _ => None,
        }
    }

    pub fn is_feminine(&self) -> bool {
        matches!(self, Gender::Feminine)
    }
}

/// The three word categories the dictionary partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Noun,
    Adjective,
    Verb,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Noun, Category::Adjective, Category::Verb];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Adjective => "adjective",
            Category::Verb => "verb",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities shared by every lexical entry.
pub trait Lexeme {
    /// The raw dictionary form.
    fn text(&self) -> &str;
    fn syllables(&self) -> usize;
    /// Last (up to) three characters of the raw form.
    fn rhyme(&self) -> &str;
}

/// A noun with its gender and definite-article form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Noun {
    word: String,
    gender: Gender,
    syllables: usize,
    rhyme: String,
    articulated: String,
}

impl Noun {
    pub fn new(word: impl Into<String>, gender: Gender) -> Self {
        let word = word.into();
        Self {
            syllables: morphology::syllable_count(&word),
            rhyme: morphology::rhyme_key(&word),
            articulated: morphology::articulate(&word, gender),
            gender,
            word,
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Definite form, e.g. "casă" → "casa", "pod" → "podul".
    pub fn articulated(&self) -> &str {
        &self.articulated
    }
}

impl Lexeme for Noun {
    fn text(&self) -> &str {
        &self.word
    }

    fn syllables(&self) -> usize {
        self.syllables
    }

    fn rhyme(&self) -> &str {
        &self.rhyme
    }
}

/// An adjective with its feminine singular form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Adjective {
    word: String,
    syllables: usize,
    rhyme: String,
    feminine: String,
}

impl Adjective {
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            syllables: morphology::syllable_count(&word),
            rhyme: morphology::rhyme_key(&word),
            feminine: morphology::feminize(&word),
            word,
        }
    }

    pub fn feminine(&self) -> &str {
        &self.feminine
    }

    /// The form agreeing with a noun of the given gender.
    pub fn form_for(&self, gender: Gender) -> &str {
        if gender.is_feminine() {
            &self.feminine
        } else {
            &self.word
        }
    }
}

impl Lexeme for Adjective {
    fn text(&self) -> &str {
        &self.word
    }

    fn syllables(&self) -> usize {
        self.syllables
    }

    fn rhyme(&self) -> &str {
        &self.rhyme
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Verb {
    word: String,
    syllables: usize,
    rhyme: String,
}

impl Verb {
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            syllables: morphology::syllable_count(&word),
            rhyme: morphology::rhyme_key(&word),
            word,
        }
    }
}

impl Lexeme for Verb {
    fn text(&self) -> &str {
        &self.word
    }

    fn syllables(&self) -> usize {
        self.syllables
    }

    fn rhyme(&self) -> &str {
        &self.rhyme
    }
}

/// A borrowed view of any entry, matched exhaustively by filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRef<'a> {
    Noun(&'a Noun),
    Adjective(&'a Adjective),
    Verb(&'a Verb),
}

impl<'a> WordRef<'a> {
    pub fn category(&self) -> Category {
        match self {
            WordRef::Noun(_) => Category::Noun,
            WordRef::Adjective(_) => Category::Adjective,
            WordRef::Verb(_) => Category::Verb,
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            WordRef::Noun(n) => &n.word,
            WordRef::Adjective(a) => &a.word,
            WordRef::Verb(v) => &v.word,
        }
    }

    pub fn syllables(&self) -> usize {
        match self {
            WordRef::Noun(n) => n.syllables,
            WordRef::Adjective(a) => a.syllables,
            WordRef::Verb(v) => v.syllables,
        }
    }

    pub fn rhyme(&self) -> &'a str {
        match self {
            WordRef::Noun(n) => &n.rhyme,
            WordRef::Adjective(a) => &a.rhyme,
            WordRef::Verb(v) => &v.rhyme,
        }
    }
}

/// Entries that can be viewed as a [`WordRef`].
pub trait AsWordRef {
    fn as_word(&self) -> WordRef<'_>;
}

impl AsWordRef for Noun {
    fn as_word(&self) -> WordRef<'_> {
        WordRef::Noun(self)
    }
}

impl AsWordRef for Adjective {
    fn as_word(&self) -> WordRef<'_> {
        WordRef::Adjective(self)
    }
}

impl AsWordRef for Verb {
    fn as_word(&self) -> WordRef<'_> {
        WordRef::Verb(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_in_report_order() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::name).collect();
        assert_eq!(names, ["noun", "adjective", "verb"]);
        assert_eq!(Category::Adjective.to_string(), "adjective");
    }

    #[test]
    fn gender_tags() {
        assert_eq!(Gender::from_tag("M"), Some(Gender::Masculine));
        assert_eq!(Gender::from_tag("MF"), Some(Gender::Masculine));
        assert_eq!(Gender::from_tag("F"), Some(Gender::Feminine));
        assert_eq!(Gender::from_tag("N"), Some(Gender::Neutral));
        assert_eq!(Gender::from_tag("A"), None);
    }

    #[test]
    fn noun_derives_forms_at_construction() {
        let noun = Noun::new("macara", Gender::Feminine);
        assert_eq!(noun.text(), "macara");
        assert_eq!(noun.syllables(), 3);
        assert_eq!(noun.rhyme(), "ara");
        assert_eq!(noun.articulated(), "macaraua");

        let carte = Noun::new("carte", Gender::Feminine);
        assert_eq!(carte.articulated(), "cartea");
    }

    #[test]
    fn adjective_agrees_with_gender() {
        let adj = Adjective::new("frumos");
        assert_eq!(adj.syllables(), 2);
        assert_eq!(adj.rhyme(), "mos");
        assert_eq!(adj.form_for(Gender::Feminine), "frumoasă");
        assert_eq!(adj.form_for(Gender::Masculine), "frumos");
        assert_eq!(adj.form_for(Gender::Neutral), "frumos");

        let mare = Adjective::new("mare");
        assert_eq!(mare.feminine(), "mare");
    }

    #[test]
    fn verb_syllables_and_rhyme() {
        let verb = Verb::new("aleargă");
        assert_eq!(verb.syllables(), 3);
        assert_eq!(verb.rhyme(), "rgă");

        let merge = Verb::new("merge");
        assert_eq!(merge.syllables(), 2);
        assert_eq!(merge.rhyme(), "rge");
    }

    #[test]
    fn word_ref_dispatch() {
        let noun = Noun::new("pod", Gender::Neutral);
        let verb = Verb::new("merge");
        assert_eq!(noun.as_word().category(), Category::Noun);
        assert_eq!(verb.as_word().category(), Category::Verb);
        assert_eq!(noun.as_word().text(), "pod");
        assert_eq!(verb.as_word().rhyme(), "rge");
        assert_eq!(Category::Adjective.to_string(), "adjective");
    }
}
