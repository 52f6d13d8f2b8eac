//! English verb periphrases.
//!
//! Each Latin tense/voice/mood cell maps to a family of English renderings:
//! the imperfect to "was ...ing" / "used to ..." / "began to ..." / "kept ...ing",
//! the future to will/shall variants, subjunctives to may/might periphrases,
//! and so on. Third-person forms expand over he/she/it; second-person
//! plurals include the "you all" variants alongside bare "you".

use vocabula_accido::{EndingKey, Mood, Number, Person, Tense, Voice};

use crate::edge_cases::STATIVE_VERBS;
use crate::english::{EnglishMorph, EnglishTag};

/// All English renderings of a verb cell, best first.
pub(crate) fn inflections(lemma: &str, key: &EndingKey, morph: &dyn EnglishMorph) -> Vec<String> {
    // Phrasal meanings inflect their first word: "run away" -> "I run away".
    if !lemma.starts_with("not ") {
        if let Some((head, rest)) = lemma.split_once(' ') {
            return inflections(head, key, morph)
                .into_iter()
                .map(|base| format!("{base} {rest}"))
                .collect();
        }
    }

    let out = match *key {
        EndingKey::Verb {
            tense,
            voice,
            mood,
            number,
            person,
        } => finite(lemma, tense, english_voice(voice, tense), mood, number, person, morph),
        EndingKey::Infinitive { tense, voice } => {
            infinitive(lemma, tense, english_voice(voice, tense), morph)
        }
        EndingKey::Participle { tense, voice, .. } => {
            participle(lemma, tense, english_voice(voice, tense), morph)
        }
        EndingKey::Gerund { .. } => vec![first(morph, lemma, EnglishTag::VerbPresentParticiple)],
        EndingKey::Supine { .. } => vec![format!("to {lemma}")],
        _ => vec![lemma.to_string()],
    };

    dedup(out)
}

/// Deponents translate as active; semi-deponents translate as active in the
/// present system and as passive morphology in the perfect system.
fn english_voice(voice: Voice, tense: Tense) -> Voice {
    match voice {
        Voice::Deponent => Voice::Active,
        Voice::SemiDeponent => match tense {
            Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect => Voice::Passive,
            _ => Voice::Active,
        },
        other => other,
    }
}

fn first(morph: &dyn EnglishMorph, lemma: &str, tag: EnglishTag) -> String {
    // Negated phrasal meanings ("not want") periphrase with do-support.
    if let Some(bare) = lemma.strip_prefix("not ") {
        return match tag {
            EnglishTag::VerbBase | EnglishTag::VerbPresent => format!("do not {bare}"),
            EnglishTag::VerbPresentThird => format!("does not {bare}"),
            EnglishTag::VerbPast => format!("did not {bare}"),
            _ => {
                let inner = first(morph, bare, tag);
                format!("not {inner}")
            }
        };
    }
    morph
        .inflect(lemma, tag)
        .into_iter()
        .next()
        .unwrap_or_else(|| lemma.to_string())
}

fn dedup(forms: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(forms.len());
    for form in forms {
        if !seen.contains(&form) {
            seen.push(form);
        }
    }
    seen
}

/// Subject pronouns for a person/number cell, in rendering order.
fn subjects(number: Number, person: Person) -> &'static [&'static str] {
    match (number, person) {
        (Number::Singular, Person::First) => &["I"],
        (Number::Plural, Person::First) => &["we"],
        (Number::Singular, Person::Second) => &["you"],
        (Number::Plural, Person::Second) => &["you all", "you"],
        (Number::Singular, Person::Third) => &["he", "she", "it"],
        (Number::Plural, Person::Third) => &["they"],
    }
}

fn be_present(subject: &str) -> &'static str {
    match subject {
        "I" => "am",
        "he" | "she" | "it" => "is",
        _ => "are",
    }
}

fn be_past(subject: &str) -> &'static str {
    match subject {
        "I" | "he" | "she" | "it" => "was",
        _ => "were",
    }
}

fn has_have(subject: &str) -> &'static str {
    match subject {
        "he" | "she" | "it" => "has",
        _ => "have",
    }
}

fn does_do(subject: &str) -> &'static str {
    match subject {
        "he" | "she" | "it" => "does",
        _ => "do",
    }
}

fn simple_present(lemma: &str, subject: &str, morph: &dyn EnglishMorph) -> String {
    if lemma == "be" {
        return be_present(subject).to_string();
    }
    if matches!(subject, "he" | "she" | "it") {
        first(morph, lemma, EnglishTag::VerbPresentThird)
    } else {
        first(morph, lemma, EnglishTag::VerbPresent)
    }
}

fn finite(
    lemma: &str,
    tense: Tense,
    voice: Voice,
    mood: Mood,
    number: Number,
    person: Person,
    morph: &dyn EnglishMorph,
) -> Vec<String> {
    match mood {
        Mood::Indicative => indicative(lemma, tense, voice, number, person, morph),
        Mood::Subjunctive => subjunctive(lemma, tense, voice, number, person, morph),
        Mood::Imperative => imperative(lemma, tense, voice, number, person, morph),
    }
}

fn indicative(
    lemma: &str,
    tense: Tense,
    voice: Voice,
    number: Number,
    person: Person,
    morph: &dyn EnglishMorph,
) -> Vec<String> {
    let vbg = first(morph, lemma, EnglishTag::VerbPresentParticiple);
    let vbn = first(morph, lemma, EnglishTag::VerbPastParticiple);
    let past = first(morph, lemma, EnglishTag::VerbPast);

    let mut out = Vec::new();
    for &s in subjects(number, person) {
        match (tense, voice) {
            (Tense::Present, Voice::Active) => {
                let simple = simple_present(lemma, s, morph);
                out.push(format!("{s} {simple}"));
                out.push(format!("{s} {} {vbg}", be_present(s)));
                if lemma != "be" {
                    out.push(format!("{s} {} {lemma}", does_do(s)));
                }
            }
            (Tense::Imperfect, Voice::Active) => {
                if STATIVE_VERBS.contains(&lemma) {
                    out.push(format!("{s} {past}"));
                }
                out.push(format!("{s} {} {vbg}", be_past(s)));
                out.push(format!("{s} used to {lemma}"));
                out.push(format!("{s} began to {lemma}"));
                out.push(format!("{s} kept {vbg}"));
            }
            (Tense::Future, Voice::Active) => {
                out.push(format!("{s} will {lemma}"));
                out.push(format!("{s} will be {vbg}"));
                out.push(format!("{s} shall {lemma}"));
                out.push(format!("{s} shall be {vbg}"));
            }
            (Tense::Perfect, Voice::Active) => {
                if lemma == "be" {
                    out.push(format!("{s} {}", be_past(s)));
                    out.push(format!("{s} {} been", has_have(s)));
                } else {
                    out.push(format!("{s} {past}"));
                    out.push(format!("{s} {} {vbn}", has_have(s)));
                    out.push(format!("{s} did {lemma}"));
                }
            }
            (Tense::Pluperfect, Voice::Active) => {
                out.push(format!("{s} had {vbn}"));
            }
            (Tense::FuturePerfect, Voice::Active) => {
                out.push(format!("{s} will have {vbn}"));
            }
            (Tense::Present, _) => {
                out.push(format!("{s} {} {vbn}", be_present(s)));
                out.push(format!("{s} {} being {vbn}", be_present(s)));
            }
            (Tense::Imperfect, _) => {
                out.push(format!("{s} {} {vbn}", be_past(s)));
                out.push(format!("{s} {} being {vbn}", be_past(s)));
                out.push(format!("{s} used to be {vbn}"));
                out.push(format!("{s} began to be {vbn}"));
                out.push(format!("{s} kept being {vbn}"));
            }
            (Tense::Future, _) => {
                out.push(format!("{s} will be {vbn}"));
                out.push(format!("{s} will be being {vbn}"));
                out.push(format!("{s} shall be {vbn}"));
                out.push(format!("{s} shall be being {vbn}"));
            }
            (Tense::Perfect, _) => {
                out.push(format!("{s} {} been {vbn}", has_have(s)));
                out.push(format!("{s} {} {vbn}", be_past(s)));
            }
            (Tense::Pluperfect, _) => {
                out.push(format!("{s} had been {vbn}"));
            }
            (Tense::FuturePerfect, _) => {
                out.push(format!("{s} will have been {vbn}"));
            }
        }
    }
    out
}

fn subjunctive(
    lemma: &str,
    tense: Tense,
    voice: Voice,
    number: Number,
    person: Person,
    morph: &dyn EnglishMorph,
) -> Vec<String> {
    let vbn = first(morph, lemma, EnglishTag::VerbPastParticiple);
    let mut out = Vec::new();
    for &s in subjects(number, person) {
        match (tense, voice) {
            (Tense::Present, Voice::Active) => out.push(format!("{s} may {lemma}")),
            (Tense::Imperfect, Voice::Active) => out.push(format!("{s} might {lemma}")),
            (Tense::Perfect, Voice::Active) => out.push(format!("{s} may have {vbn}")),
            (Tense::Pluperfect, Voice::Active) => out.push(format!("{s} might have {vbn}")),
            (Tense::Present, _) => out.push(format!("{s} may be {vbn}")),
            (Tense::Imperfect, _) => out.push(format!("{s} might be {vbn}")),
            (Tense::Perfect, _) => out.push(format!("{s} may have been {vbn}")),
            (Tense::Pluperfect, _) => out.push(format!("{s} might have been {vbn}")),
            _ => {}
        }
    }
    out
}

fn imperative(
    lemma: &str,
    tense: Tense,
    voice: Voice,
    number: Number,
    person: Person,
    morph: &dyn EnglishMorph,
) -> Vec<String> {
    let base = first(morph, lemma, EnglishTag::VerbBase);
    let vbn = first(morph, lemma, EnglishTag::VerbPastParticiple);

    if tense == Tense::Present {
        return if voice == Voice::Active {
            vec![format!("{base}!"), base]
        } else {
            vec![format!("be {vbn}!"), format!("be {vbn}")]
        };
    }

    // Future imperatives: direct in the second person, "let ..." in the third.
    let mut out = Vec::new();
    match (number, person) {
        (_, Person::Second) => {
            for &s in subjects(number, person) {
                if voice == Voice::Active {
                    out.push(format!("{s} shall {lemma}!"));
                    out.push(format!("{s} will {lemma}!"));
                    out.push(format!("{s} shall {lemma}"));
                    out.push(format!("{s} will {lemma}"));
                } else {
                    out.push(format!("{s} shall be {vbn}!"));
                    out.push(format!("{s} will be {vbn}!"));
                    out.push(format!("{s} shall be {vbn}"));
                    out.push(format!("{s} will be {vbn}"));
                }
            }
        }
        (Number::Singular, Person::Third) => {
            for object in ["him", "her", "it"] {
                if voice == Voice::Active {
                    out.push(format!("let {object} {lemma}!"));
                } else {
                    out.push(format!("let {object} be {vbn}!"));
                }
            }
            for object in ["him", "her", "it"] {
                if voice == Voice::Active {
                    out.push(format!("let {object} {lemma}"));
                } else {
                    out.push(format!("let {object} be {vbn}"));
                }
            }
        }
        (Number::Plural, Person::Third) => {
            if voice == Voice::Active {
                out.push(format!("let them {lemma}!"));
                out.push(format!("let them {lemma}"));
            } else {
                out.push(format!("let them be {vbn}!"));
                out.push(format!("let them be {vbn}"));
            }
        }
        _ => {}
    }
    out
}

fn infinitive(lemma: &str, tense: Tense, voice: Voice, morph: &dyn EnglishMorph) -> Vec<String> {
    let vbn = first(morph, lemma, EnglishTag::VerbPastParticiple);
    match (tense, voice) {
        (Tense::Present, Voice::Active) => vec![format!("to {lemma}")],
        (Tense::Future, Voice::Active) => vec![format!("to be about to {lemma}")],
        (Tense::Perfect, Voice::Active) => vec![format!("to have {vbn}")],
        (Tense::Present, _) => vec![format!("to be {vbn}")],
        (Tense::Future, _) => vec![format!("to be about to be {vbn}")],
        (Tense::Perfect, _) => vec![format!("to have been {vbn}")],
        _ => vec![format!("to {lemma}")],
    }
}

fn participle(lemma: &str, tense: Tense, voice: Voice, morph: &dyn EnglishMorph) -> Vec<String> {
    let vbg = first(morph, lemma, EnglishTag::VerbPresentParticiple);
    let vbn = first(morph, lemma, EnglishTag::VerbPastParticiple);
    match (tense, voice) {
        (Tense::Present, Voice::Active) => vec![vbg],
        (Tense::Perfect, Voice::Active) => vec![format!("having {vbn}")],
        (Tense::Perfect, Voice::Passive) => vec![format!("having been {vbn}"), vbn],
        (Tense::Future, Voice::Active) => vec![format!("about to {lemma}")],
        // The gerundive.
        (Tense::Future, Voice::Passive) => {
            vec![format!("requiring to be {vbn}"), format!("to be {vbn}")]
        }
        _ => vec![vbg],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::english::default_morph;
    use vocabula_accido::Gender;
    use vocabula_accido::Case;

    fn verb_key(t: Tense, v: Voice, m: Mood, n: Number, p: Person) -> EndingKey {
        EndingKey::Verb {
            tense: t,
            voice: v,
            mood: m,
            number: n,
            person: p,
        }
    }

    #[test]
    fn present_third_singular_periphrases() {
        let key = verb_key(
            Tense::Present,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::Third,
        );
        let forms = inflections("hear", &key, default_morph());
        assert!(forms.contains(&"he hears".to_string()));
        assert!(forms.contains(&"she is hearing".to_string()));
        assert!(forms.contains(&"it does hear".to_string()));
        assert_eq!(forms[0], "he hears");
    }

    #[test]
    fn future_first_singular() {
        let key = verb_key(
            Tense::Future,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::First,
        );
        let forms = inflections("hear", &key, default_morph());
        assert_eq!(
            forms,
            vec![
                "I will hear",
                "I will be hearing",
                "I shall hear",
                "I shall be hearing"
            ]
        );
    }

    #[test]
    fn second_person_plural_includes_you_all() {
        let key = verb_key(
            Tense::Present,
            Voice::Active,
            Mood::Indicative,
            Number::Plural,
            Person::Second,
        );
        let forms = inflections("carry", &key, default_morph());
        assert!(forms.contains(&"you all carry".to_string()));
        assert!(forms.contains(&"you carry".to_string()));
    }

    #[test]
    fn deponent_translates_as_active() {
        let key = verb_key(
            Tense::Present,
            Voice::Deponent,
            Mood::Indicative,
            Number::Singular,
            Person::First,
        );
        let forms = inflections("try", &key, default_morph());
        assert!(forms.contains(&"I try".to_string()));
        assert!(forms.iter().all(|f| !f.contains("tried")));
    }

    #[test]
    fn stative_imperfect_accepts_plain_past() {
        let key = verb_key(
            Tense::Imperfect,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::First,
        );
        let forms = inflections("know", &key, default_morph());
        assert_eq!(forms[0], "I knew");
        assert!(forms.contains(&"I used to know".to_string()));
    }

    #[test]
    fn perfect_passive_participle() {
        let key = EndingKey::Participle {
            tense: Tense::Perfect,
            voice: Voice::Passive,
            gender: Gender::Masculine,
            case: Case::Nominative,
            number: Number::Singular,
        };
        let forms = inflections("carry", &key, default_morph());
        assert_eq!(forms[0], "having been carried");
        assert!(forms.contains(&"carried".to_string()));
    }

    #[test]
    fn phrasal_meaning_inflects_its_head() {
        let key = verb_key(
            Tense::Present,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::First,
        );
        let forms = inflections("run away", &key, default_morph());
        assert_eq!(forms[0], "I run away");
    }

    #[test]
    fn negated_meaning_uses_do_support() {
        let key = verb_key(
            Tense::Present,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::Third,
        );
        let forms = inflections("not want", &key, default_morph());
        assert_eq!(forms[0], "he does not want");
    }

    #[test]
    fn imperatives() {
        let key = verb_key(
            Tense::Present,
            Voice::Active,
            Mood::Imperative,
            Number::Singular,
            Person::Second,
        );
        let forms = inflections("hurry", &key, default_morph());
        assert_eq!(forms, vec!["hurry!", "hurry"]);
    }
}
