//! The word entity sum type.
//!
//! Every part of speech exposes the same capability set: look an ending up
//! by key, find the keys a surface form fills, iterate the paradigm, and
//! report the meanings. The variants are closed, so dispatch is exhaustive
//! matching rather than anything dynamic.

use std::collections::BTreeSet;
use std::fmt;

use crate::adjective::Adjective;
use crate::adverb::Adverb;
use crate::ending::{EndingKey, Endings, EndingValue, ReverseIndex};
use crate::error::{AccidoError, Result};
use crate::meaning::Meaning;
use crate::noun::Noun;
use crate::pronoun::Pronoun;
use crate::regular::RegularWord;
use crate::verb::Verb;

/// Any word entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Word {
    Verb(Verb),
    Noun(Noun),
    Adjective(Adjective),
    Adverb(Adverb),
    Pronoun(Pronoun),
    Regular(RegularWord),
}

impl Word {
    /// The complete forward map from paradigm cell to surface form(s).
    pub fn endings(&self) -> &Endings {
        match self {
            Word::Verb(w) => w.endings(),
            Word::Noun(w) => w.endings(),
            Word::Adjective(w) => w.endings(),
            Word::Adverb(w) => w.endings(),
            Word::Pronoun(w) => w.endings(),
            Word::Regular(w) => w.endings(),
        }
    }

    fn reverse(&self) -> &ReverseIndex {
        match self {
            Word::Verb(w) => w.reverse(),
            Word::Noun(w) => w.reverse(),
            Word::Adjective(w) => w.reverse(),
            Word::Adverb(w) => w.reverse(),
            Word::Pronoun(w) => w.reverse(),
            Word::Regular(w) => w.reverse(),
        }
    }

    /// The English meaning(s).
    pub fn meaning(&self) -> &Meaning {
        match self {
            Word::Verb(w) => &w.meaning,
            Word::Noun(w) => &w.meaning,
            Word::Adjective(w) => &w.meaning,
            Word::Adverb(w) => &w.meaning,
            Word::Pronoun(w) => &w.meaning,
            Word::Regular(w) => &w.meaning,
        }
    }

    /// The headword (first principal part), used for sorting, prompts and
    /// multiple-choice answers.
    pub fn headword(&self) -> &str {
        match self {
            Word::Verb(w) => &w.present,
            Word::Noun(w) => &w.nominative,
            Word::Adjective(w) => &w.principal_parts[0],
            Word::Adverb(w) => &w.positive,
            Word::Pronoun(w) => &w.mascnom,
            Word::Regular(w) => &w.word,
        }
    }

    /// Look up one paradigm cell.
    pub fn get(&self, key: &EndingKey) -> Result<&EndingValue> {
        self.endings()
            .get(key)
            .ok_or_else(|| AccidoError::no_ending(self.headword(), key))
    }

    /// All keys whose cell contains `form`, in key enum order.
    pub fn find_keys(&self, form: &str) -> Vec<EndingKey> {
        self.reverse()
            .get(form)
            .map(|keys| keys.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The principal (highest-priority) key among those `form` fills.
    pub fn principal_key(&self, form: &str) -> Option<EndingKey> {
        self.reverse()
            .get(form)?
            .iter()
            .min_by_key(|k| k.priority())
            .copied()
    }

    /// Iterate the full paradigm in key enum order.
    pub fn forms(&self) -> impl Iterator<Item = (&EndingKey, &EndingValue)> {
        self.endings().iter()
    }

    /// The keys this word's paradigm fills, as an owned set.
    pub fn keys(&self) -> BTreeSet<EndingKey> {
        self.endings().keys().copied().collect()
    }

    /// The ordered principal parts, or `None` for words that have none
    /// (non-inflecting words and table-only irregulars).
    pub fn principal_parts(&self) -> Option<Vec<String>> {
        match self {
            Word::Verb(w) => {
                let parts = w.principal_parts();
                (parts.len() > 1).then_some(parts)
            }
            Word::Noun(w) => {
                let parts = w.principal_parts();
                (parts.len() > 1).then_some(parts)
            }
            Word::Adjective(w) => Some(w.principal_parts.clone()),
            Word::Pronoun(w) => Some(w.principal_parts()),
            Word::Adverb(_) | Word::Regular(_) => None,
        }
    }

    /// The part-of-speech name as it appears in vocab-file section headers.
    pub fn pos_name(&self) -> &'static str {
        match self {
            Word::Verb(_) => "Verb",
            Word::Noun(_) => "Noun",
            Word::Adjective(_) => "Adjective",
            Word::Adverb(_) => "Adverb",
            Word::Pronoun(_) => "Pronoun",
            Word::Regular(_) => "Regular",
        }
    }

    /// Whether `other` is the same dictionary entry (same paradigm and
    /// metadata), irrespective of meaning. Duplicate entries in a vocab
    /// list merge their meanings.
    pub fn same_paradigm(&self, other: &Word) -> bool {
        match (self, other) {
            (Word::Verb(a), Word::Verb(b)) => {
                a.present == b.present
                    && a.infinitive == b.infinitive
                    && a.perfect == b.perfect
                    && a.ppp == b.ppp
            }
            (Word::Noun(a), Word::Noun(b)) => {
                a.nominative == b.nominative && a.genitive == b.genitive && a.gender == b.gender
            }
            (Word::Adjective(a), Word::Adjective(b)) => {
                a.principal_parts == b.principal_parts && a.termination == b.termination
            }
            (Word::Adverb(a), Word::Adverb(b)) => a.positive == b.positive,
            (Word::Pronoun(a), Word::Pronoun(b)) => a.pronoun == b.pronoun,
            (Word::Regular(a), Word::Regular(b)) => a.word == b.word,
            _ => false,
        }
    }

    /// Merge another entry's meanings into this word.
    pub fn merge_meaning(&mut self, other: &Word) {
        let other = other.meaning().clone();
        match self {
            Word::Verb(w) => w.meaning.merge(&other),
            Word::Noun(w) => w.meaning.merge(&other),
            Word::Adjective(w) => w.meaning.merge(&other),
            Word::Adverb(w) => w.meaning.merge(&other),
            Word::Pronoun(w) => w.meaning.merge(&other),
            Word::Regular(w) => w.meaning.merge(&other),
        }
    }
}

impl fmt::Display for Word {
    /// The dictionary entry, e.g. `farmer: agricola, agricolae, (m)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Word::Verb(w) => w.fmt(f),
            Word::Noun(w) => w.fmt(f),
            Word::Adjective(w) => w.fmt(f),
            Word::Adverb(w) => w.fmt(f),
            Word::Pronoun(w) => w.fmt(f),
            Word::Regular(w) => w.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Case, Gender, Number};

    #[test]
    fn round_trip_forward_and_reverse() {
        let noun = Noun::new(
            "agricola",
            Some("agricolae"),
            Some(Gender::Masculine),
            Meaning::single("farmer"),
        )
        .unwrap();
        let word = Word::Noun(noun);
        for (key, value) in word.forms() {
            for form in value.forms() {
                assert!(word.find_keys(form).contains(key), "missing reverse for {form}");
            }
        }
        for (form, keys) in [("agricolae", 4usize), ("agricolam", 1)] {
            assert_eq!(word.find_keys(form).len(), keys);
        }
    }

    #[test]
    fn principal_key_of_syncretic_form() {
        let noun = Noun::new(
            "agricola",
            Some("agricolae"),
            Some(Gender::Masculine),
            Meaning::single("farmer"),
        )
        .unwrap();
        let word = Word::Noun(noun);
        let main = word.principal_key("agricolae").unwrap();
        assert_eq!(
            main,
            EndingKey::Noun { case: Case::Nominative, number: Number::Plural }
        );
    }

    #[test]
    fn missing_key_is_a_no_ending_error() {
        let word = Word::Regular(RegularWord::new("et", Meaning::single("and")));
        let key = EndingKey::Noun {
            case: Case::Nominative,
            number: Number::Singular,
        };
        let err = word.get(&key).unwrap_err();
        assert!(matches!(err, AccidoError::NoEnding { .. }));
    }
}
