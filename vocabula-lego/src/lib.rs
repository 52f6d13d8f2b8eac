//! Vocab-list reader.
//!
//! A vocab list is line-oriented text organised into sections. A section
//! starts with `@ <PartOfSpeech>` and holds entries of the shape
//! `english_meaning(s): latin_principal_parts[, metadata]` until the next
//! section. Blank lines separate logical groups and `#` lines are
//! comments.
//!
//! ```text
//! # nouns
//! @ Noun
//! farmer: agricola, agricolae, (m)
//! boy/son: puer, pueri, (m)
//!
//! @ Verb
//! take: capio, capere, cepi, captus
//! ```
//!
//! The number and shape of the principal parts picks the entity
//! constructor: one part is an irregular verb/noun, three verb parts a
//! deponent, four a regular verb; nouns carry a gender marker, adjectives
//! a termination marker.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use vocabula_accido::{
    AccidoError, Adjective, AdjectiveDeclension, Adverb, Gender, Meaning, Noun, Pronoun,
    RegularWord, Verb, Word,
};

/// Reader errors, carrying the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct InvalidVocabFileFormatError {
    /// Human-readable reason, e.g. `Invalid part of speech: 'Floober'`.
    pub reason: String,
    /// The line that failed to parse, when one is at fault.
    pub line: Option<String>,
}

impl InvalidVocabFileFormatError {
    fn new(reason: impl Into<String>, line: Option<&str>) -> InvalidVocabFileFormatError {
        InvalidVocabFileFormatError {
            reason: reason.into(),
            line: line.map(str::to_string),
        }
    }
}

impl From<AccidoError> for InvalidVocabFileFormatError {
    fn from(err: AccidoError) -> Self {
        InvalidVocabFileFormatError::new(err.to_string(), None)
    }
}

pub type Result<T> = std::result::Result<T, InvalidVocabFileFormatError>;

/// A parsed vocabulary list. Duplicate entries for the same dictionary
/// word are merged, combining their meanings in order.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabList {
    pub vocab: Vec<Word>,
    /// The raw text the list was read from.
    pub text: String,
}

impl fmt::Display for VocabList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.vocab {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartOfSpeech {
    Verb,
    Noun,
    Adjective,
    Adverb,
    Pronoun,
    Regular,
}

fn parse_pos(header: &str) -> Option<PartOfSpeech> {
    // Case-insensitive, with an optional plural -s.
    let lowered = header.to_ascii_lowercase();
    let name = lowered.strip_suffix('s').unwrap_or(&lowered);
    match name {
        "verb" => Some(PartOfSpeech::Verb),
        "noun" => Some(PartOfSpeech::Noun),
        "adjective" => Some(PartOfSpeech::Adjective),
        "adverb" => Some(PartOfSpeech::Adverb),
        "pronoun" => Some(PartOfSpeech::Pronoun),
        "regular" => Some(PartOfSpeech::Regular),
        _ => None,
    }
}

/// Read a vocab list from text.
pub fn read_vocab_file(contents: &str) -> Result<VocabList> {
    let mut vocab: Vec<Word> = Vec::new();
    let mut current: Option<PartOfSpeech> = None;

    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        debug!(line, "reading vocab line");

        if let Some(header) = line.strip_prefix('@') {
            let header = header.trim();
            current = Some(parse_pos(header).ok_or_else(|| {
                InvalidVocabFileFormatError::new(
                    format!("Invalid part of speech: '{header}'"),
                    Some(line),
                )
            })?);
            continue;
        }

        let Some((meanings, parts)) = line.split_once(':') else {
            return Err(InvalidVocabFileFormatError::new(
                format!("Invalid line format: '{line}'"),
                Some(line),
            ));
        };
        let Some(pos) = current else {
            return Err(InvalidVocabFileFormatError::new(
                "Part of speech was not given.",
                Some(line),
            ));
        };

        let meaning = parse_meaning(meanings.trim());
        let parts: Vec<&str> = parts.split(',').map(str::trim).collect();
        let word = parse_entry(pos, &parts, meaning, line)?;

        // Merge duplicate dictionary entries instead of repeating them.
        if let Some(existing) = vocab.iter_mut().find(|w| w.same_paradigm(&word)) {
            existing.merge_meaning(&word);
        } else {
            vocab.push(word);
        }
    }

    Ok(VocabList {
        vocab,
        text: contents.to_string(),
    })
}

/// `/`-separated meanings form an ordered sequence; the first is principal.
fn parse_meaning(field: &str) -> Meaning {
    if field.contains('/') {
        Meaning::multiple(field.split('/').map(str::trim))
    } else {
        Meaning::single(field)
    }
}

fn attach_line(err: AccidoError, line: &str) -> InvalidVocabFileFormatError {
    InvalidVocabFileFormatError::new(err.to_string(), Some(line))
}

fn parse_entry(
    pos: PartOfSpeech,
    parts: &[&str],
    meaning: Meaning,
    line: &str,
) -> Result<Word> {
    match pos {
        PartOfSpeech::Verb => {
            let word = match parts {
                // Irregular verb.
                &[present] => Verb::new(present, None, None, None, meaning),
                // Deponent or semi-deponent verb.
                &[present, infinitive, perfect] => {
                    Verb::new(present, Some(infinitive), Some(perfect), None, meaning)
                }
                &[present, infinitive, perfect, ppp] => Verb::new(
                    present,
                    Some(infinitive),
                    Some(perfect),
                    Some(ppp),
                    meaning,
                ),
                _ => {
                    return Err(InvalidVocabFileFormatError::new(
                        format!("Invalid verb format: '{line}'"),
                        Some(line),
                    ));
                }
            };
            word.map(Word::Verb).map_err(|e| attach_line(e, line))
        }

        PartOfSpeech::Noun => match parts {
            // Irregular noun.
            &[nominative] => Noun::new(nominative, None, None, meaning)
                .map(Word::Noun)
                .map_err(|e| attach_line(e, line)),
            &[nominative, genitive, gender] => {
                let marker = gender
                    .split_whitespace()
                    .last()
                    .unwrap_or(gender)
                    .trim_matches(|c| c == '(' || c == ')');
                let gender = Gender::from_shorthand(marker).ok_or_else(|| {
                    InvalidVocabFileFormatError::new(
                        format!("Invalid gender: '{marker}'"),
                        Some(line),
                    )
                })?;
                Noun::new(nominative, Some(genitive), Some(gender), meaning)
                    .map(Word::Noun)
                    .map_err(|e| attach_line(e, line))
            }
            _ => Err(InvalidVocabFileFormatError::new(
                format!("Invalid noun format: '{line}'"),
                Some(line),
            )),
        },

        PartOfSpeech::Adjective => {
            if !(parts.len() == 3 || parts.len() == 4) {
                return Err(InvalidVocabFileFormatError::new(
                    format!("Invalid adjective format: '{line}'"),
                    Some(line),
                ));
            }
            let marker = parts[parts.len() - 1].trim_matches(|c| c == '(' || c == ')');
            let principal: Vec<String> = parts[..parts.len() - 1]
                .iter()
                .map(|p| p.to_string())
                .collect();

            if marker == "212" || marker == "2-1-2" {
                Adjective::new(&principal, None, AdjectiveDeclension::TwoOneTwo, meaning)
                    .map(Word::Adjective)
                    .map_err(|e| attach_line(e, line))
            } else if let Some(termination) = marker
                .strip_prefix("3-")
                .and_then(|t| t.parse::<u8>().ok())
                .filter(|t| (1..=3).contains(t))
            {
                Adjective::new(
                    &principal,
                    Some(termination),
                    AdjectiveDeclension::Third,
                    meaning,
                )
                .map(Word::Adjective)
                .map_err(|e| attach_line(e, line))
            } else {
                Err(InvalidVocabFileFormatError::new(
                    format!("Invalid adjective declension: '{marker}'"),
                    Some(line),
                ))
            }
        }

        PartOfSpeech::Adverb => Adverb::new(parts[0], meaning)
            .map(Word::Adverb)
            .map_err(|e| attach_line(e, line)),

        PartOfSpeech::Pronoun => Pronoun::new(parts[0], meaning)
            .map(Word::Pronoun)
            .map_err(|e| attach_line(e, line)),

        PartOfSpeech::Regular => Ok(Word::Regular(RegularWord::new(parts[0], meaning))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_mixed_list() {
        let list = read_vocab_file(
            "# practice list\n\
             @ Noun\n\
             farmer: agricola, agricolae, (m)\n\
             \n\
             @ Verb\n\
             take: capio, capere, cepi, captus\n\
             @ Adjective\n\
             happy: laetus, laeta, laetum, (2-1-2)\n\
             light: levis, leve, (3-2)\n\
             @ Pronoun\n\
             this: hic, haec, hoc\n\
             @ Regular\n\
             and: et\n",
        )
        .unwrap();
        assert_eq!(list.vocab.len(), 6);
        assert_eq!(list.vocab[0].to_string(), "farmer: agricola, agricolae, (m)");
        assert_eq!(list.vocab[4].to_string(), "this: hic, haec, hoc");
    }

    #[test]
    fn plural_and_case_insensitive_headers() {
        let list = read_vocab_file("@ verbs\nhide: celo, celare, celavi, celatus\n").unwrap();
        assert_eq!(list.vocab.len(), 1);
    }

    #[test]
    fn multiple_meanings_split_on_slash() {
        let list = read_vocab_file("@ Verb\nhide/conceal: celo, celare, celavi, celatus\n").unwrap();
        let meanings: Vec<&str> = list.vocab[0].meaning().all().collect();
        assert_eq!(meanings, ["hide", "conceal"]);
    }

    #[test]
    fn duplicate_entries_merge_meanings() {
        let list = read_vocab_file(
            "@ Verb\n\
             hide: celo, celare, celavi, celatus\n\
             conceal: celo, celare, celavi, celatus\n",
        )
        .unwrap();
        assert_eq!(list.vocab.len(), 1);
        let meanings: Vec<&str> = list.vocab[0].meaning().all().collect();
        assert_eq!(meanings, ["hide", "conceal"]);
    }

    #[test]
    fn invalid_part_of_speech() {
        let err = read_vocab_file("@ Cause an error\n").unwrap_err();
        assert_eq!(err.reason, "Invalid part of speech: 'Cause an error'");
    }

    #[test]
    fn entry_before_any_section() {
        let err = read_vocab_file("farmer: agricola, agricolae, (m)\n").unwrap_err();
        assert_eq!(err.reason, "Part of speech was not given.");
    }

    #[test]
    fn missing_colon_is_a_format_error() {
        let err = read_vocab_file("@ Noun\nfarmer agricola\n").unwrap_err();
        assert!(err.reason.starts_with("Invalid line format:"));
    }

    #[test]
    fn invalid_gender_marker() {
        let err = read_vocab_file("@ Noun\nfarmer: agricola, agricolae, (x)\n").unwrap_err();
        assert_eq!(err.reason, "Invalid gender: 'x'");
    }

    #[test]
    fn invalid_adjective_declension() {
        let err =
            read_vocab_file("@ Adjective\nhappy: laetus, laeta, laetum, (9-9)\n").unwrap_err();
        assert_eq!(err.reason, "Invalid adjective declension: '9-9'");
    }

    #[test]
    fn invalid_verb_part_count() {
        let err =
            read_vocab_file("@ Verb\ntake: capio, capere\n").unwrap_err();
        assert!(err.reason.starts_with("Invalid verb format:"));
    }

    #[test]
    fn construction_errors_carry_the_line() {
        let err = read_vocab_file("@ Pronoun\nnonsense: zork\n").unwrap_err();
        assert_eq!(err.reason, "Pronoun 'zork' not recognised.");
        assert_eq!(err.line.as_deref(), Some("nonsense: zork"));
    }

    #[test]
    fn irregular_entries_take_one_part() {
        let list = read_vocab_file("@ Verb\nbe: sum\n@ Noun\nI: ego\n").unwrap();
        assert_eq!(list.vocab.len(), 2);
    }
}
