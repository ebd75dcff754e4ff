//! Romanian morphology heuristics: syllables, rhyme keys, noun articulation
//! and adjective feminization.
//!
//! None of these functions fail. They are positional heuristics, not a
//! phonological model, and loanwords are known to miscount
//! ("bour", "spleen", "piui", "boreal").

use crate::schema::word::Gender;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'ă', 'â', 'î'];

/// Diphthongs, triphthongs and hiatus candidates, longest first. The order
/// matters: earlier groups neutralize characters that later groups see.
const VOWEL_GROUPS: &[&str] = &[
    "iai", "eau", "iau", "oai", "ioa", "ia", "oa", "ea", "ua", "âu", "ou", "ei", "ai", "oi", "ie",
    "ui",
];

/// Marks a vowel position as no longer counting.
const NEUTRALIZED: char = '-';

/// Character substitutions applied to raw word-list entries.
const CHARACTER_FIXES: &[(&str, &str)] = &[("'", "")];

/// Feminine adjective endings: (masculine suffix, chars to drop, replacement).
const FEMININE_RULES: &[(&str, usize, &str)] = &[
    ("esc", 2, "ască"),
    ("eț", 1, "ață"),
    ("or", 1, "are"),
    ("os", 1, "asă"),
    ("iu", 1, "e"),
    ("ci", 1, "e"),
    ("ru", 1, "ă"),
];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Count syllables as the number of vowel nuclei left after collapsing
/// vowel groups.
pub fn syllable_count(word: &str) -> usize {
    let mut chars: Vec<char> = word.chars().collect();
    collapse_vowel_groups(&mut chars);
    chars.iter().filter(|c| is_vowel(**c)).count()
}

fn collapse_vowel_groups(chars: &mut [char]) {
    let len = chars.len();

    for group in VOWEL_GROUPS {
        let pattern: Vec<char> = group.chars().collect();
        let width = pattern.len();
        let mut i = 0;

        while i + width <= len {
            if chars[i..i + width] == pattern[..] {
                if width == 3 {
                    // Triphthong: keep only the middle vowel.
                    chars[i] = NEUTRALIZED;
                    chars[i + 2] = NEUTRALIZED;
                    i += 2;
                } else if i > 0 {
                    // After a consonant the pair is a diphthong, after a
                    // vowel the first one glides.
                    if is_vowel(chars[i - 1]) {
                        chars[i] = NEUTRALIZED;
                    } else {
                        chars[i + 1] = NEUTRALIZED;
                    }
                    i += 1;
                }
            }
            i += 1;
        }
    }

    if len >= 2 {
        let (last, before) = (chars[len - 1], chars[len - 2]);
        if is_vowel(last) && is_vowel(before) && last != before {
            chars[len - 2] = NEUTRALIZED;
        }
    }
}

/// The last (up to) three characters, verbatim.
pub fn rhyme_key(word: &str) -> String {
    let count = word.chars().count();
    word.chars().skip(count.saturating_sub(3)).collect()
}

/// `word` without its last `n` characters.
fn drop_last(word: &str, n: usize) -> &str {
    if n == 0 {
        return word;
    }
    match word.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &word[..idx],
        None => "",
    }
}

/// Singular definite-article form of a noun.
pub fn articulate(word: &str, gender: Gender) -> String {
    match gender {
        Gender::Feminine => {
            if word.ends_with('ă') || word.ends_with("ie") {
                format!("{}a", drop_last(word, 1))
            } else if word.ends_with('a') {
                format!("{word}ua")
            } else {
                format!("{word}a")
            }
        }
        Gender::Masculine | Gender::Neutral => {
            if word.ends_with('u') {
                format!("{word}l")
            } else {
                format!("{word}ul")
            }
        }
    }
}

/// Feminine singular form of an adjective. First matching rule wins.
pub fn feminize(adjective: &str) -> String {
    for (suffix, dropped, replacement) in FEMININE_RULES {
        if adjective.ends_with(suffix) {
            return format!("{}{}", drop_last(adjective, *dropped), replacement);
        }
    }
    if adjective.ends_with(['e', 'o', 'i']) {
        return adjective.to_string();
    }
    format!("{adjective}ă")
}

/// Apply the encoding-fix table to a raw word.
pub fn fix_characters(word: &str) -> String {
    CHARACTER_FIXES
        .iter()
        .fold(word.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Uppercase the first character, Unicode-aware ("înăbușeala" → "Înăbușeala").
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_table() {
        let table = [
            ("semifinalista", 6),
            ("greoi", 2),
            ("aalenian", 4),
            ("alee", 3),
            ("alcool", 3),
            ("fiinta", 3),
            ("puicuta", 3),
            ("aeroport", 4),
            ("miercureana", 4),
            ("policioara", 4),
            ("vulpoaica", 3),
            ("miau", 1),
            ("leoaica", 3),
            ("lupoaica", 3),
            ("mioara", 2),
            ("ambiguul", 4),
            ("tămâie", 3),
            ("bou", 1),
            ("reusit", 3),
            ("greul", 2),
            ("plouat", 2),
            ("roua", 2),
            ("calea", 2),
            ("eu", 1),
            ("greu", 1),
            ("pui", 1),
            ("tuiul", 2),
            ("ghioc", 2),
            ("laur", 2),
            ("taur", 2),
            ("dinozaur", 4),
        ];
        for (word, expected) in table {
            assert_eq!(syllable_count(word), expected, "syllables of {word}");
        }
    }

    #[test]
    fn syllables_of_short_words() {
        assert_eq!(syllable_count(""), 0);
        assert_eq!(syllable_count("a"), 1);
        assert_eq!(syllable_count("ia"), 1);
        assert_eq!(syllable_count("st"), 0);
    }

    #[test]
    fn rhyme_keys() {
        assert_eq!(rhyme_key("formare"), "are");
        assert_eq!(rhyme_key("abc"), "abc");
        assert_eq!(rhyme_key("ab"), "ab");
        assert_eq!(rhyme_key(""), "");
        assert_eq!(rhyme_key("aleargă"), "rgă");
    }

    #[test]
    fn masculine_and_neutral_articulation() {
        assert_eq!(articulate("acar", Gender::Masculine), "acarul");
        assert_eq!(articulate("maestru", Gender::Masculine), "maestrul");
        assert_eq!(articulate("codru", Gender::Masculine), "codrul");
        assert_eq!(articulate("staul", Gender::Neutral), "staulul");
        assert_eq!(articulate("pod", Gender::Neutral), "podul");
    }

    #[test]
    fn feminine_articulation() {
        assert_eq!(articulate("fată", Gender::Feminine), "fata");
        assert_eq!(articulate("macara", Gender::Feminine), "macaraua");
        assert_eq!(articulate("ploaie", Gender::Feminine), "ploaia");
        assert_eq!(articulate("rodie", Gender::Feminine), "rodia");
        assert_eq!(articulate("carte", Gender::Feminine), "cartea");
    }

    #[test]
    fn articulation_of_empty_word() {
        assert_eq!(articulate("", Gender::Feminine), "a");
        assert_eq!(articulate("", Gender::Masculine), "ul");
    }

    #[test]
    fn feminine_adjectives() {
        let table = [
            ("pitoresc", "pitorească"),
            ("citeț", "citeață"),
            ("bor", "boare"),
            ("frumos", "frumoasă"),
            ("zglobiu", "zglobie"),
            ("stângaci", "stângace"),
            ("acru", "acră"),
            ("alb", "albă"),
            ("verde", "verde"),
            ("maro", "maro"),
            ("gri", "gri"),
            ("", "ă"),
        ];
        for (masculine, feminine) in table {
            assert_eq!(feminize(masculine), feminine, "feminine of {masculine}");
        }
    }

    #[test]
    fn character_fixes_strip_apostrophes() {
        assert_eq!(fix_characters("d'alde"), "dalde");
        assert_eq!(fix_characters("casă"), "casă");
    }

    #[test]
    fn capitalization() {
        assert_eq!(capitalize_first("aloha"), "Aloha");
        assert_eq!(capitalize_first("Aloha"), "Aloha");
        assert_eq!(capitalize_first("înăbușeala"), "Înăbușeala");
        assert_eq!(capitalize_first("țâgâlirea"), "Țâgâlirea");
        assert_eq!(capitalize_first(""), "");
    }
}
