//! English adjective degree rewrites.

use std::collections::BTreeSet;

use vocabula_accido::Degree;

use crate::edge_cases::NOT_COMPARABLE_ADJECTIVES;
use crate::english::{EnglishMorph, EnglishTag};

/// All English renderings of an adjective at a degree, best first:
/// comparative → "lighter" / "more light", superlative → "lightest" /
/// "most light" / intensifier periphrases.
pub(crate) fn inflections(lemma: &str, degree: Degree, morph: &dyn EnglishMorph) -> Vec<String> {
    match degree {
        Degree::Positive => vec![lemma.to_string()],
        Degree::Comparative => {
            let synthetic = morph
                .inflect(lemma, EnglishTag::AdjectiveComparative)
                .into_iter()
                .next();
            let periphrastic = format!("more {lemma}");
            let main = match &synthetic {
                Some(form) if !NOT_COMPARABLE_ADJECTIVES.contains(&lemma) => form.clone(),
                _ => periphrastic.clone(),
            };
            let mut rest: BTreeSet<String> = synthetic.into_iter().collect();
            rest.insert(periphrastic);
            rest.remove(&main);
            let mut out = vec![main];
            out.extend(rest);
            out
        }
        Degree::Superlative => {
            let synthetic = morph
                .inflect(lemma, EnglishTag::AdjectiveSuperlative)
                .into_iter()
                .next();
            let main = match &synthetic {
                Some(form) if !NOT_COMPARABLE_ADJECTIVES.contains(&lemma) => form.clone(),
                _ => format!("most {lemma}"),
            };
            let mut rest: BTreeSet<String> = synthetic.into_iter().collect();
            for intensifier in ["most", "very", "extremely", "rather", "quite", "too"] {
                rest.insert(format!("{intensifier} {lemma}"));
            }
            rest.remove(&main);
            let mut out = vec![main];
            out.extend(rest);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::english::default_morph;

    #[test]
    fn comparative_has_both_renderings() {
        let forms = inflections("light", Degree::Comparative, default_morph());
        assert_eq!(forms[0], "lighter");
        assert!(forms.contains(&"more light".to_string()));
    }

    #[test]
    fn long_adjectives_lead_with_more() {
        let forms = inflections("beautiful", Degree::Comparative, default_morph());
        assert_eq!(forms[0], "more beautiful");
    }

    #[test]
    fn superlative_intensifiers() {
        let forms = inflections("happy", Degree::Superlative, default_morph());
        assert_eq!(forms[0], "happiest");
        for expected in ["most happy", "very happy", "extremely happy", "rather happy", "quite happy", "too happy"] {
            assert!(forms.contains(&expected.to_string()), "missing {expected}");
        }
    }
}
