//! Ending keys and values.
//!
//! An [`EndingKey`] identifies one cell of a word's paradigm. Each variant
//! carries exactly the tags that are meaningful for that cell: a finite verb
//! form has no case, a noun form has no tense, and so on. Tags that would be
//! vacuous are absent by construction, never null.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use crate::tags::{Case, Degree, Gender, Mood, Number, Person, Tense, Voice};

/// One cell of a paradigm, identified by its grammatical tags.
///
/// The derived `Ord` gives the deterministic "key enum order" iteration that
/// the question sampler relies on, so variant and field declaration order is
/// part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EndingKey {
    /// A finite verb form (indicative, subjunctive or imperative).
    Verb {
        tense: Tense,
        voice: Voice,
        mood: Mood,
        number: Number,
        person: Person,
    },
    /// An infinitive.
    Infinitive { tense: Tense, voice: Voice },
    /// A declined participle cell. Future passive is the gerundive.
    Participle {
        tense: Tense,
        voice: Voice,
        gender: Gender,
        case: Case,
        number: Number,
    },
    /// A gerund cell (accusative, genitive, dative or ablative).
    Gerund { case: Case },
    /// A supine cell (accusative or ablative).
    Supine { case: Case },
    /// A noun cell.
    Noun { case: Case, number: Number },
    /// An adjective cell.
    Adjective {
        degree: Degree,
        gender: Gender,
        case: Case,
        number: Number,
    },
    /// An adverb cell (an adjective's adverbial formation, or a standalone
    /// adverb).
    Adverb { degree: Degree },
    /// A pronoun cell.
    Pronoun {
        gender: Gender,
        case: Case,
        number: Number,
    },
    /// The single form of a non-inflecting word.
    Regular,
}

impl EndingKey {
    /// The voice carried by this key, if any.
    pub fn voice(&self) -> Option<Voice> {
        match *self {
            EndingKey::Verb { voice, .. }
            | EndingKey::Infinitive { voice, .. }
            | EndingKey::Participle { voice, .. } => Some(voice),
            _ => None,
        }
    }

    /// The tense carried by this key, if any.
    pub fn tense(&self) -> Option<Tense> {
        match *self {
            EndingKey::Verb { tense, .. }
            | EndingKey::Infinitive { tense, .. }
            | EndingKey::Participle { tense, .. } => Some(tense),
            _ => None,
        }
    }

    /// The number carried by this key, if any.
    pub fn number(&self) -> Option<Number> {
        match *self {
            EndingKey::Verb { number, .. }
            | EndingKey::Participle { number, .. }
            | EndingKey::Noun { number, .. }
            | EndingKey::Adjective { number, .. }
            | EndingKey::Pronoun { number, .. } => Some(number),
            _ => None,
        }
    }

    /// Whether this key belongs to a verb paradigm (finite, infinitive,
    /// participle, gerund or supine).
    pub fn is_verbal(&self) -> bool {
        matches!(
            self,
            EndingKey::Verb { .. }
                | EndingKey::Infinitive { .. }
                | EndingKey::Participle { .. }
                | EndingKey::Gerund { .. }
                | EndingKey::Supine { .. }
        )
    }

    /// Priority tuple used to pick the principal reading of a syncretic
    /// form: the minimum over a key set wins.
    ///
    /// Finite verb beats infinitive beats participle beats verbal noun, an
    /// adjective proper beats its adverb form, and within a paradigm space
    /// earlier enum values win attribute by attribute in the order tense,
    /// voice, mood, person, case, number, gender, degree.
    pub fn priority(&self) -> [u8; 9] {
        match *self {
            EndingKey::Verb {
                tense,
                voice,
                mood,
                number,
                person,
            } => [
                0,
                tense as u8,
                voice as u8,
                mood as u8,
                person as u8,
                0,
                number as u8,
                0,
                0,
            ],
            EndingKey::Infinitive { tense, voice } => {
                [1, tense as u8, voice as u8, 0, 0, 0, 0, 0, 0]
            }
            EndingKey::Participle {
                tense,
                voice,
                gender,
                case,
                number,
            } => [
                2,
                tense as u8,
                voice as u8,
                0,
                0,
                case as u8,
                number as u8,
                gender as u8,
                0,
            ],
            EndingKey::Gerund { case } => [3, 0, 0, 0, 0, case as u8, 0, 0, 0],
            EndingKey::Supine { case } => [4, 0, 0, 0, 0, case as u8, 0, 0, 0],
            EndingKey::Noun { case, number } => {
                [0, 0, 0, 0, 0, case as u8, number as u8, 0, 0]
            }
            EndingKey::Adjective {
                degree,
                gender,
                case,
                number,
            } => [
                0,
                0,
                0,
                0,
                0,
                case as u8,
                number as u8,
                gender as u8,
                degree as u8,
            ],
            EndingKey::Adverb { degree } => [1, 0, 0, 0, 0, 0, 0, 0, degree as u8],
            EndingKey::Pronoun {
                gender,
                case,
                number,
            } => [0, 0, 0, 0, 0, case as u8, number as u8, gender as u8, 0],
            EndingKey::Regular => [0; 9],
        }
    }

    /// Render the key as space-joined tag words, e.g. `nominative plural`
    /// or `present active participle neuter accusative singular`. The
    /// future passive participle renders as `gerundive`.
    pub fn components_string(&self) -> String {
        match *self {
            EndingKey::Verb {
                tense,
                voice,
                mood,
                number,
                person,
            } => format!("{tense} {voice} {mood} {number} {person}"),
            EndingKey::Infinitive { tense, voice } => {
                format!("{tense} {voice} infinitive")
            }
            EndingKey::Participle {
                tense: Tense::Future,
                voice: Voice::Passive,
                gender,
                case,
                number,
            } => format!("gerundive {gender} {case} {number}"),
            EndingKey::Participle {
                tense,
                voice,
                gender,
                case,
                number,
            } => format!("{tense} {voice} participle {gender} {case} {number}"),
            EndingKey::Gerund { case } => format!("gerund {case}"),
            EndingKey::Supine { case } => format!("supine {case}"),
            EndingKey::Noun { case, number } => format!("{case} {number}"),
            EndingKey::Adjective {
                degree,
                gender,
                case,
                number,
            } => format!("{degree} {case} {number} {gender}"),
            EndingKey::Adverb { degree } => degree.to_string(),
            EndingKey::Pronoun {
                gender,
                case,
                number,
            } => format!("{case} {number} {gender}"),
            EndingKey::Regular => String::new(),
        }
    }
}

impl fmt::Display for EndingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components_string())
    }
}

/// The surface form(s) filling one paradigm cell.
///
/// Most cells hold a single form; a few hold alternatives (`nostri` /
/// `nostrum`, `portanti` / `portante`) where the first listed form is the
/// principal one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndingValue {
    Single(String),
    Multiple(Vec<String>),
}

impl EndingValue {
    pub fn single(form: impl Into<String>) -> EndingValue {
        EndingValue::Single(form.into())
    }

    pub fn multiple<I, S>(forms: I) -> EndingValue
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EndingValue::Multiple(forms.into_iter().map(Into::into).collect())
    }

    /// The principal (first-listed) form.
    pub fn principal(&self) -> &str {
        match self {
            EndingValue::Single(form) => form,
            EndingValue::Multiple(forms) => &forms[0],
        }
    }

    /// All forms, principal first.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        match self {
            EndingValue::Single(form) => std::slice::from_ref(form).iter(),
            EndingValue::Multiple(forms) => forms.iter(),
        }
        .map(String::as_str)
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms().any(|f| f == form)
    }
}

impl fmt::Display for EndingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndingValue::Single(form) => f.write_str(form),
            EndingValue::Multiple(forms) => f.write_str(&forms.join("/")),
        }
    }
}

/// A word's forward map from paradigm cell to surface form(s).
pub type Endings = BTreeMap<EndingKey, EndingValue>;

/// A word's reverse index from surface form to the cells it fills.
pub type ReverseIndex = HashMap<String, BTreeSet<EndingKey>>;

/// Build the reverse index for an ending table. Every form of every cell is
/// indexed, so `form ∈ endings[key]` iff `key ∈ reverse[form]`.
pub(crate) fn build_reverse(endings: &Endings) -> ReverseIndex {
    let mut reverse: ReverseIndex = HashMap::new();
    for (key, value) in endings {
        for form in value.forms() {
            reverse.entry(form.to_string()).or_default().insert(*key);
        }
    }
    reverse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_reading_prefers_nominative_plural() {
        // The syncretic cells of "agricolae".
        let keys = [
            EndingKey::Noun { case: Case::Genitive, number: Number::Singular },
            EndingKey::Noun { case: Case::Dative, number: Number::Singular },
            EndingKey::Noun { case: Case::Nominative, number: Number::Plural },
            EndingKey::Noun { case: Case::Vocative, number: Number::Plural },
        ];
        let main = keys.iter().min_by_key(|k| k.priority()).unwrap();
        assert_eq!(main.components_string(), "nominative plural");
    }

    #[test]
    fn finite_form_beats_infinitive() {
        // "portare" is both present active infinitive and present passive
        // imperative; the infinitive still loses to a finite reading of the
        // same shape, e.g. for "portas"-like collisions this puts the
        // indicative first.
        let finite = EndingKey::Verb {
            tense: Tense::Present,
            voice: Voice::Passive,
            mood: Mood::Imperative,
            number: Number::Singular,
            person: Person::Second,
        };
        let inf = EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Active };
        assert!(finite.priority() < inf.priority());
    }

    #[test]
    fn gerundive_renders_without_tense_and_voice() {
        let key = EndingKey::Participle {
            tense: Tense::Future,
            voice: Voice::Passive,
            gender: Gender::Masculine,
            case: Case::Nominative,
            number: Number::Singular,
        };
        assert_eq!(key.components_string(), "gerundive masculine nominative singular");
    }

    #[test]
    fn reverse_index_is_consistent() {
        let mut endings = Endings::new();
        endings.insert(
            EndingKey::Noun { case: Case::Genitive, number: Number::Plural },
            EndingValue::multiple(["nostri", "nostrum"]),
        );
        endings.insert(
            EndingKey::Noun { case: Case::Accusative, number: Number::Singular },
            EndingValue::single("me"),
        );
        let reverse = build_reverse(&endings);
        assert!(reverse["nostrum"]
            .contains(&EndingKey::Noun { case: Case::Genitive, number: Number::Plural }));
        for (key, value) in &endings {
            for form in value.forms() {
                assert!(reverse[form].contains(key));
            }
        }
    }
}
