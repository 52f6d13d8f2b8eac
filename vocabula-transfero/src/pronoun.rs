//! English pronoun translations.
//!
//! English pronouns inflect by fixed table rather than rule. An unknown
//! pronoun meaning degrades to the bare word.

use vocabula_accido::{Case, Number};

type CaseTable = [&'static [&'static str]; 6];

/// Forms per case (nominative, vocative, accusative, genitive, dative,
/// ablative) for singular then plural.
struct PronounEntry {
    word: &'static str,
    singular: CaseTable,
    plural: CaseTable,
}

const PRONOUNS: &[PronounEntry] = &[
    PronounEntry {
        word: "this",
        singular: [
            &["this"],
            &["this"],
            &["this"],
            &["of this"],
            &["for this", "to this"],
            &["by this", "by means of this", "with this", "this"],
        ],
        plural: [
            &["these"],
            &["these"],
            &["these"],
            &["of these"],
            &["for these", "to these"],
            &["by these", "by means of these", "with these", "these"],
        ],
    },
    PronounEntry {
        word: "that",
        singular: [
            &["that"],
            &["that"],
            &["that"],
            &["of that"],
            &["for that", "to that"],
            &["by that", "by means of that", "with that", "that"],
        ],
        plural: [
            &["those"],
            &["those"],
            &["those"],
            &["of those"],
            &["for those", "to those"],
            &["by those", "by means of those", "with those", "those"],
        ],
    },
    PronounEntry {
        word: "I",
        singular: [
            &["I"],
            &["I"],
            &["me"],
            &["of me", "my"],
            &["for me", "to me"],
            &["by me", "by means of me", "with me", "me"],
        ],
        plural: [
            &["we"],
            &["we"],
            &["us"],
            &["of us", "our"],
            &["for us", "to us"],
            &["by us", "by means of us", "with us", "us"],
        ],
    },
    PronounEntry {
        word: "you",
        singular: [
            &["you"],
            &["you"],
            &["you"],
            &["of you", "your"],
            &["for you", "to you"],
            &["by you", "by means of you", "with you", "you"],
        ],
        plural: [
            &["you"],
            &["you"],
            &["you"],
            &["of you", "your"],
            &["for you", "to you"],
            &["by you", "by means of you", "with you", "you"],
        ],
    },
    PronounEntry {
        word: "oneself",
        singular: [
            &["oneself", "himself", "herself", "itself"],
            &["oneself"],
            &["oneself", "himself", "herself", "itself"],
            &["of oneself", "of himself", "of herself", "of itself"],
            &[
                "for oneself", "to oneself", "for himself", "to himself",
                "for herself", "to herself", "for itself", "to itself",
            ],
            &[
                "by oneself", "by means of oneself", "with oneself", "oneself",
                "by himself", "with himself", "himself",
                "by herself", "with herself", "herself",
                "by itself", "with itself", "itself",
            ],
        ],
        plural: [
            &["themselves"],
            &["themselves"],
            &["themselves"],
            &["of themselves"],
            &["for themselves", "to themselves"],
            &["by themselves", "by means of themselves", "with themselves", "themselves"],
        ],
    },
    PronounEntry {
        word: "who",
        singular: [
            &["who"],
            &["who"],
            &["whom", "who"],
            &["of whom", "whose"],
            &["for whom", "to whom"],
            &["by whom", "by means of whom", "with whom", "whom"],
        ],
        plural: [
            &["who"],
            &["who"],
            &["whom", "who"],
            &["of whom", "whose"],
            &["for whom", "to whom"],
            &["by whom", "by means of whom", "with whom", "whom"],
        ],
    },
];

fn case_index(case: Case) -> usize {
    match case {
        Case::Nominative => 0,
        Case::Vocative => 1,
        Case::Accusative => 2,
        Case::Genitive => 3,
        Case::Dative => 4,
        Case::Ablative => 5,
    }
}

/// All English renderings of a pronoun cell, best first. Unknown pronoun
/// meanings degrade to the word itself.
pub(crate) fn inflections(lemma: &str, case: Case, number: Number) -> Vec<String> {
    let Some(entry) = PRONOUNS.iter().find(|entry| entry.word == lemma) else {
        return vec![lemma.to_string()];
    };
    let table = match number {
        Number::Singular => &entry.singular,
        Number::Plural => &entry.plural,
    };
    table[case_index(case)]
        .iter()
        .map(|form| form.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn this_pluralizes_to_these() {
        assert_eq!(
            inflections("this", Case::Nominative, Number::Plural),
            vec!["these"]
        );
    }

    #[test]
    fn genitive_of_i() {
        let forms = inflections("I", Case::Genitive, Number::Singular);
        assert_eq!(forms, vec!["of me", "my"]);
    }

    #[test]
    fn unknown_pronoun_degrades() {
        assert_eq!(
            inflections("whoever", Case::Nominative, Number::Singular),
            vec!["whoever"]
        );
    }
}
