//! English-side derivation.
//!
//! Given an English lemma and the grammatical tags of a Latin form, this
//! crate enumerates every English rendering a learner might legitimately
//! write: case phrases for nouns, tense periphrases for verbs, degree
//! rewrites for adjectives and adverbs, and fixed tables for the pronouns.
//!
//! English morphology proper (plurals, past tenses, participles,
//! comparison) sits behind the narrow [`EnglishMorph`] interface; the
//! default provider is a rule engine with irregular-form tables. Lookups
//! degrade to the lemma itself rather than failing, so an unknown word is
//! never an error. Synonyms come from a [`Synonyms`] provider backed by a
//! compressed on-disk database read once per process.

mod adjective;
mod adverb;
mod edge_cases;
mod english;
mod noun;
mod pronoun;
mod synonyms;
mod verb;
mod words;

pub use english::{default_morph, EnglishMorph, EnglishTag, RuleMorph};
pub use synonyms::{Synonyms, SynonymsError, WordNetDb};
pub use words::{find_inflections, find_main_inflection};
