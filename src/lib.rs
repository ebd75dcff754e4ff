//! Phrase Engine: Romanian short-form verse and sentence generation.
//!
//! Builds haiku, couplets, comparisons, definitions, tautograms and
//! mirror-rhyme quatrains from a flat word list, using Romanian noun
//! articulation, adjective agreement, syllable counts and rhyme keys to
//! narrow a filtered dictionary until each style's constraint holds.

pub mod core;
pub mod schema;
