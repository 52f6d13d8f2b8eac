//! English noun case phrases.
//!
//! A Latin case maps to a family of English prepositional phrases: the
//! genitive to "of the ..." (and the possessive), the dative to "to/for ...",
//! the ablative to "by/with/by means of ...". The main form leads; the rest
//! follow sorted.

use std::collections::BTreeSet;

use vocabula_accido::{Case, Number};

use crate::english::{EnglishMorph, EnglishTag};

fn possessive(noun: &str) -> String {
    if noun.ends_with('s') {
        format!("{noun}'")
    } else {
        format!("{noun}'s")
    }
}

/// "a" or "an", picked by the first letter of the following word.
fn indefinite(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// All English renderings of a noun cell, best first.
pub(crate) fn inflections(
    lemma: &str,
    case: Case,
    number: Number,
    morph: &dyn EnglishMorph,
) -> Vec<String> {
    let form = match number {
        Number::Singular => lemma.to_string(),
        Number::Plural => morph
            .inflect(lemma, EnglishTag::NounPlural)
            .into_iter()
            .next()
            .unwrap_or_else(|| lemma.to_string()),
    };
    let singular = number == Number::Singular;
    let article = indefinite(&form);

    let (main, mut rest): (String, BTreeSet<String>) = match case {
        Case::Nominative | Case::Accusative => (form.clone(), BTreeSet::new()),
        Case::Vocative => (form.clone(), BTreeSet::from([format!("O {form}")])),
        Case::Genitive => {
            let mut rest = BTreeSet::from([possessive(&form)]);
            if singular {
                rest.insert(format!("of {article} {form}"));
            }
            (format!("of the {form}"), rest)
        }
        Case::Dative => {
            let mut rest = BTreeSet::from([format!("to the {form}")]);
            if singular {
                rest.insert(format!("for {article} {form}"));
                rest.insert(format!("to {article} {form}"));
            } else {
                rest.insert(format!("for {form}"));
                rest.insert(format!("to {form}"));
            }
            (format!("for the {form}"), rest)
        }
        Case::Ablative => {
            let mut rest = BTreeSet::from([
                form.clone(),
                format!("with the {form}"),
                format!("by means of the {form}"),
            ]);
            if singular {
                rest.insert(format!("by {article} {form}"));
                rest.insert(format!("with {article} {form}"));
                rest.insert(format!("by means of {article} {form}"));
            }
            (format!("by the {form}"), rest)
        }
    };

    rest.remove(&main);
    let mut out = vec![main];
    out.extend(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::english::default_morph;

    #[test]
    fn nominative_is_bare() {
        let forms = inflections("farmer", Case::Nominative, Number::Singular, default_morph());
        assert_eq!(forms, vec!["farmer"]);
    }

    #[test]
    fn plural_genitive() {
        let forms = inflections("farmer", Case::Genitive, Number::Plural, default_morph());
        assert_eq!(forms[0], "of the farmers");
        assert!(forms.contains(&"farmers'".to_string()));
    }

    #[test]
    fn dative_has_to_and_for() {
        let forms = inflections("farmer", Case::Dative, Number::Singular, default_morph());
        assert_eq!(forms[0], "for the farmer");
        assert!(forms.contains(&"to the farmer".to_string()));
        assert!(forms.contains(&"to a farmer".to_string()));
    }

    #[test]
    fn ablative_phrases() {
        let forms = inflections("sword", Case::Ablative, Number::Singular, default_morph());
        assert_eq!(forms[0], "by the sword");
        assert!(forms.contains(&"with the sword".to_string()));
        assert!(forms.contains(&"by means of the sword".to_string()));
    }

    #[test]
    fn vocative_takes_o() {
        let forms = inflections("farmer", Case::Vocative, Number::Singular, default_morph());
        assert_eq!(forms[0], "farmer");
        assert!(forms.contains(&"O farmer".to_string()));
    }

    #[test]
    fn an_before_vowels() {
        let forms = inflections("arrow", Case::Dative, Number::Singular, default_morph());
        assert!(forms.contains(&"to an arrow".to_string()));
    }
}
