//! Dispatch from a Latin paradigm cell to the English inflection rules.

use tracing::debug;

use vocabula_accido::{Declension, EndingKey, Word};

use crate::english::default_morph;
use crate::english::EnglishMorph;
use crate::{adjective, adverb, noun, pronoun, verb};

/// Every English rendering a learner might legitimately write for `meaning`
/// in the cell identified by `key`, best first. The word entity decides the
/// ruleset: a noun cell of an irregular personal pronoun uses the pronoun
/// tables, an adverb cell of an adjective first derives the adverb, and so
/// on. Unknown words degrade to the meaning itself.
pub fn find_inflections(word: &Word, meaning: &str, key: &EndingKey) -> Vec<String> {
    debug!(meaning, components = %key, "inflecting meaning");
    let morph = default_morph();

    let forms = match *key {
        EndingKey::Verb { .. }
        | EndingKey::Infinitive { .. }
        | EndingKey::Participle { .. }
        | EndingKey::Gerund { .. }
        | EndingKey::Supine { .. } => verb::inflections(meaning, key, morph),

        EndingKey::Noun { case, number } => match word {
            Word::Noun(n) if n.declension == Declension::Irregular => {
                pronoun::inflections(meaning, case, number)
            }
            _ => noun::inflections(meaning, case, number, morph),
        },

        EndingKey::Adjective { degree, .. } => adjective::inflections(meaning, degree, morph),

        EndingKey::Adverb { degree } => match word {
            // An adjective's adverb cell first derives the English adverb.
            Word::Adjective(_) => {
                let adverb_lemma = morph
                    .adj_to_adv(meaning)
                    .unwrap_or_else(|| meaning.to_string());
                adverb::inflections(&adverb_lemma, degree)
            }
            _ => adverb::inflections(meaning, degree),
        },

        EndingKey::Pronoun { case, number, .. } => pronoun::inflections(meaning, case, number),

        EndingKey::Regular => vec![meaning.to_string()],
    };

    if forms.is_empty() {
        vec![meaning.to_string()]
    } else {
        forms
    }
}

/// The deterministic principal rendering, used as a question's main answer.
pub fn find_main_inflection(word: &Word, meaning: &str, key: &EndingKey) -> String {
    find_inflections(word, meaning, key).remove(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocabula_accido::{Case, Gender, Meaning, Noun, Number, Pronoun};

    #[test]
    fn noun_cells_use_case_phrases() {
        let farmer = Word::Noun(
            Noun::new(
                "agricola",
                Some("agricolae"),
                Some(Gender::Masculine),
                Meaning::single("farmer"),
            )
            .unwrap(),
        );
        let key = EndingKey::Noun {
            case: Case::Genitive,
            number: Number::Singular,
        };
        let forms = find_inflections(&farmer, "farmer", &key);
        assert_eq!(forms[0], "of the farmer");
    }

    #[test]
    fn irregular_noun_uses_pronoun_tables() {
        let ego = Word::Noun(Noun::new("ego", None, None, Meaning::single("I")).unwrap());
        let key = EndingKey::Noun {
            case: Case::Accusative,
            number: Number::Singular,
        };
        assert_eq!(find_inflections(&ego, "I", &key), vec!["me"]);
    }

    #[test]
    fn pronoun_cells_use_the_tables() {
        let hic = Word::Pronoun(Pronoun::new("hic", Meaning::single("this")).unwrap());
        let key = EndingKey::Pronoun {
            gender: Gender::Feminine,
            case: Case::Nominative,
            number: Number::Plural,
        };
        assert_eq!(find_main_inflection(&hic, "this", &key), "these");
    }
}
