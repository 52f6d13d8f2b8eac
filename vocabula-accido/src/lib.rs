//! Latin morphology kernel.
//!
//! This crate owns the word entities (verbs, nouns, adjectives, adverbs,
//! pronouns, non-inflecting words) and derives their complete paradigms at
//! construction time. Every entity exposes the same contract:
//!
//! - a forward map from [`EndingKey`] (a closed tuple of grammatical tags)
//!   to [`EndingValue`] (one surface form, or several collapsed by
//!   syncretism),
//! - a reverse index from surface form back to the set of keys it fills,
//! - a dictionary headword and one or more English meanings.
//!
//! Ending tables are computed eagerly so that later lookups are O(1), and
//! entities are immutable once built.
//!
//! # Example
//!
//! ```
//! use vocabula_accido::{Case, EndingKey, Gender, Meaning, Noun, Number};
//!
//! let noun = Noun::new(
//!     "agricola",
//!     Some("agricolae"),
//!     Some(Gender::Masculine),
//!     Meaning::single("farmer"),
//! )
//! .unwrap();
//!
//! let key = EndingKey::Noun { case: Case::Nominative, number: Number::Singular };
//! assert_eq!(noun.endings()[&key].principal(), "agricola");
//! ```

mod adjective;
mod adverb;
mod ending;
mod error;
mod irregulars;
mod meaning;
mod noun;
mod pronoun;
mod regular;
mod syllables;
mod tags;
mod verb;
mod word;

pub use adjective::{Adjective, AdjectiveDeclension};
pub use adverb::Adverb;
pub use ending::{Endings, EndingKey, EndingValue, ReverseIndex};
pub use error::{AccidoError, Result};
pub use meaning::Meaning;
pub use noun::{Declension, Noun};
pub use pronoun::Pronoun;
pub use regular::RegularWord;
pub use syllables::count_syllables;
pub use tags::{Case, Degree, Gender, Mood, Number, Person, Tense, Voice};
pub use verb::{Conjugation, Verb};
pub use word::Word;
