//! Paradigm regression tests.
//!
//! Spot-checks full ending tables across the conjugations and declensions,
//! plus the forward/reverse round-trip invariants that the question
//! sampler depends on.

use vocabula_accido::{
    Adjective, AdjectiveDeclension, Adverb, Case, EndingKey, Gender, Meaning, Mood, Noun, Number,
    Person, Pronoun, RegularWord, Tense, Verb, Voice, Word,
};

fn verb(pres: &str, inf: &str, perf: &str, ppp: Option<&str>, meaning: &str) -> Word {
    Word::Verb(Verb::new(pres, Some(inf), Some(perf), ppp, Meaning::single(meaning)).unwrap())
}

fn fin(t: Tense, v: Voice, m: Mood, n: Number, p: Person) -> EndingKey {
    EndingKey::Verb {
        tense: t,
        voice: v,
        mood: m,
        number: n,
        person: p,
    }
}

fn form(word: &Word, key: EndingKey) -> String {
    word.get(&key)
        .unwrap_or_else(|e| panic!("{e}"))
        .principal()
        .to_string()
}

#[test]
fn first_conjugation_full_sweep() {
    use Mood::*;
    use Number::*;
    use Person::*;
    use Tense::*;
    use Voice::*;

    let celo = verb("celo", "celare", "celavi", Some("celatus"), "hide");

    let finite_cells = [
        (Present, Active, Indicative, Singular, First, "celo"),
        (Present, Active, Indicative, Singular, Second, "celas"),
        (Present, Active, Indicative, Plural, Third, "celant"),
        (Imperfect, Active, Indicative, Singular, Third, "celabat"),
        (Future, Active, Indicative, Plural, First, "celabimus"),
        (Perfect, Active, Indicative, Singular, First, "celavi"),
        (Perfect, Active, Indicative, Plural, Third, "celaverunt"),
        (Pluperfect, Active, Indicative, Singular, Second, "celaveras"),
        (FuturePerfect, Active, Indicative, Plural, Second, "celaveritis"),
        (Present, Active, Subjunctive, Singular, First, "celem"),
        (Imperfect, Active, Subjunctive, Plural, First, "celaremus"),
        (Perfect, Active, Subjunctive, Singular, Third, "celaverit"),
        (Pluperfect, Active, Subjunctive, Plural, Third, "celavissent"),
        (Present, Passive, Indicative, Singular, First, "celor"),
        (Present, Passive, Indicative, Plural, Third, "celantur"),
        (Imperfect, Passive, Indicative, Singular, Second, "celabaris"),
        (Future, Passive, Indicative, Singular, Third, "celabitur"),
        (Perfect, Passive, Indicative, Singular, First, "celatus sum"),
        (Perfect, Passive, Indicative, Plural, First, "celati sumus"),
        (Pluperfect, Passive, Indicative, Singular, Third, "celatus erat"),
        (FuturePerfect, Passive, Indicative, Plural, Third, "celati erunt"),
        (Present, Passive, Subjunctive, Singular, First, "celer"),
        (Imperfect, Passive, Subjunctive, Singular, Third, "celaretur"),
        (Present, Active, Imperative, Singular, Second, "cela"),
        (Present, Active, Imperative, Plural, Second, "celate"),
        (Future, Active, Imperative, Singular, Third, "celato"),
        (Future, Active, Imperative, Plural, Third, "celanto"),
        (Present, Passive, Imperative, Singular, Second, "celare"),
        (Future, Passive, Imperative, Plural, Third, "celantor"),
    ];
    for (t, v, m, n, p, expected) in finite_cells {
        assert_eq!(form(&celo, fin(t, v, m, n, p)), expected);
    }

    let infinitives = [
        (Present, Active, "celare"),
        (Perfect, Active, "celavisse"),
        (Future, Active, "celaturus esse"),
        (Present, Passive, "celari"),
        (Perfect, Passive, "celatus esse"),
        (Future, Passive, "celatum iri"),
    ];
    for (tense, voice, expected) in infinitives {
        assert_eq!(
            form(&celo, EndingKey::Infinitive { tense, voice }),
            expected
        );
    }

    // Participle spaces and verbal nouns.
    let participles = [
        (Present, Active, Gender::Masculine, Case::Nominative, "celans"),
        (Present, Active, Gender::Feminine, Case::Genitive, "celantis"),
        (Present, Active, Gender::Neuter, Case::Accusative, "celans"),
        (Perfect, Passive, Gender::Masculine, Case::Nominative, "celatus"),
        (Perfect, Passive, Gender::Feminine, Case::Ablative, "celata"),
        (Future, Active, Gender::Masculine, Case::Nominative, "celaturus"),
        (Future, Passive, Gender::Masculine, Case::Nominative, "celandus"),
        (Future, Passive, Gender::Neuter, Case::Genitive, "celandi"),
    ];
    for (tense, voice, gender, case, expected) in participles {
        let key = EndingKey::Participle {
            tense,
            voice,
            gender,
            case,
            number: Singular,
        };
        assert_eq!(form(&celo, key), expected);
    }

    assert_eq!(form(&celo, EndingKey::Gerund { case: Case::Genitive }), "celandi");
    assert_eq!(form(&celo, EndingKey::Supine { case: Case::Ablative }), "celatu");
}

#[test]
fn conjugations_differ_where_they_should() {
    use Mood::*;
    use Number::*;
    use Person::*;
    use Tense::*;
    use Voice::*;

    let doceo = verb("doceo", "docere", "docui", Some("doctus"), "teach");
    assert_eq!(form(&doceo, fin(Present, Active, Indicative, Singular, Second)), "doces");
    assert_eq!(form(&doceo, fin(Future, Active, Indicative, Singular, Third)), "docebit");
    assert_eq!(form(&doceo, fin(Present, Active, Subjunctive, Plural, First)), "doceamus");
    assert_eq!(form(&doceo, fin(Imperfect, Passive, Subjunctive, Plural, Third)), "docerentur");

    let traho = verb("traho", "trahere", "traxi", Some("tractus"), "drag");
    assert_eq!(form(&traho, fin(Present, Active, Indicative, Singular, Second)), "trahis");
    assert_eq!(form(&traho, fin(Future, Active, Indicative, Singular, Third)), "trahet");
    assert_eq!(form(&traho, fin(Present, Passive, Subjunctive, Singular, Third)), "trahatur");
    assert_eq!(form(&traho, fin(Future, Active, Imperative, Singular, Second)), "trahito");

    let audio = verb("audio", "audire", "audivi", Some("auditus"), "hear");
    assert_eq!(form(&audio, fin(Present, Active, Indicative, Plural, Third)), "audiunt");
    assert_eq!(form(&audio, fin(Imperfect, Active, Indicative, Plural, Third)), "audiebant");
    assert_eq!(form(&audio, fin(Future, Passive, Indicative, Plural, Third)), "audientur");

    let capio = verb("capio", "capere", "cepi", Some("captus"), "take");
    assert_eq!(form(&capio, fin(Present, Active, Indicative, Plural, Third)), "capiunt");
    assert_eq!(form(&capio, fin(Present, Passive, Indicative, Singular, Second)), "caperis");
    assert_eq!(form(&capio, fin(Future, Active, Indicative, Plural, Third)), "capient");
}

#[test]
fn deponent_paradigm() {
    use Mood::*;
    use Number::*;
    use Person::*;
    use Tense::*;

    let sequor = Word::Verb(
        Verb::new(
            "sequor",
            Some("sequi"),
            Some("secutus sum"),
            None,
            Meaning::single("follow"),
        )
        .unwrap(),
    );

    assert_eq!(
        form(&sequor, fin(Present, Voice::Deponent, Indicative, Singular, First)),
        "sequor"
    );
    assert_eq!(
        form(&sequor, fin(Present, Voice::Deponent, Indicative, Plural, Third)),
        "sequuntur"
    );
    assert_eq!(
        form(&sequor, fin(Imperfect, Voice::Deponent, Subjunctive, Singular, First)),
        "sequerer"
    );
    assert_eq!(
        form(&sequor, fin(Perfect, Voice::Deponent, Indicative, Singular, First)),
        "secutus sum"
    );
    // The future participle keeps active morphology under the deponent tag.
    let fap = EndingKey::Participle {
        tense: Future,
        voice: Voice::Deponent,
        gender: Gender::Masculine,
        case: Case::Nominative,
        number: Singular,
    };
    assert_eq!(form(&sequor, fap), "secuturus");
}

#[test]
fn semi_deponent_relabels_the_perfect_system() {
    use Mood::Indicative;
    use Number::Singular;
    use Person::{First, Third};
    use Tense::{Perfect, Present};

    let gaudeo = Word::Verb(
        Verb::new(
            "gaudeo",
            Some("gaudere"),
            Some("gavisus sum"),
            None,
            Meaning::single("rejoice"),
        )
        .unwrap(),
    );
    assert_eq!(
        form(&gaudeo, fin(Present, Voice::SemiDeponent, Indicative, Singular, Third)),
        "gaudet"
    );
    assert_eq!(
        form(&gaudeo, fin(Perfect, Voice::SemiDeponent, Indicative, Singular, First)),
        "gavisus sum"
    );
    // No plain passive present system.
    assert!(gaudeo
        .get(&fin(Present, Voice::Passive, Indicative, Singular, Third))
        .is_err());
}

#[test]
fn noun_declension_sweep() {
    let cells: &[(&str, &str, Gender, &[(Case, Number, &str)])] = &[
        ("puella", "puellae", Gender::Feminine, &[
            (Case::Accusative, Number::Singular, "puellam"),
            (Case::Ablative, Number::Singular, "puella"),
            (Case::Dative, Number::Plural, "puellis"),
        ]),
        ("servus", "servi", Gender::Masculine, &[
            (Case::Vocative, Number::Singular, "serve"),
            (Case::Genitive, Number::Plural, "servorum"),
        ]),
        ("rex", "regis", Gender::Masculine, &[
            (Case::Accusative, Number::Singular, "regem"),
            (Case::Genitive, Number::Plural, "regum"),
            (Case::Ablative, Number::Plural, "regibus"),
        ]),
        ("manus", "manus", Gender::Feminine, &[
            (Case::Dative, Number::Singular, "manui"),
            (Case::Genitive, Number::Plural, "manuum"),
        ]),
        ("dies", "diei", Gender::Masculine, &[
            (Case::Genitive, Number::Singular, "diei"),
            (Case::Ablative, Number::Plural, "diebus"),
        ]),
    ];
    for (nom, gen, gender, expectations) in cells {
        let noun = Word::Noun(
            Noun::new(nom, Some(gen), Some(*gender), Meaning::single("test")).unwrap(),
        );
        for (case, number, expected) in expectations.iter() {
            let key = EndingKey::Noun {
                case: *case,
                number: *number,
            };
            assert_eq!(&form(&noun, key), expected, "{nom} {case} {number}");
        }
    }
}

#[test]
fn adjective_degrees_across_terminations() {
    let acer = Word::Adjective(
        Adjective::new(
            &["acer".into(), "acris".into(), "acre".into()],
            Some(3),
            AdjectiveDeclension::Third,
            Meaning::single("keen"),
        )
        .unwrap(),
    );
    let cells = [
        (vocabula_accido::Degree::Positive, Gender::Feminine, Case::Nominative, "acris"),
        (vocabula_accido::Degree::Comparative, Gender::Neuter, Case::Nominative, "acrius"),
        (vocabula_accido::Degree::Superlative, Gender::Masculine, Case::Nominative, "acerrimus"),
    ];
    for (degree, gender, case, expected) in cells {
        let key = EndingKey::Adjective {
            degree,
            gender,
            case,
            number: Number::Singular,
        };
        assert_eq!(form(&acer, key), expected);
    }
}

#[test]
fn irregular_verbs_round_trip_their_tables() {
    for present in ["sum", "possum", "volo", "nolo", "malo", "fero", "eo", "fio", "edo", "inquam"] {
        let word = Word::Verb(
            Verb::new(present, None, None, None, Meaning::single("test")).unwrap(),
        );
        round_trip(&word);
    }
}

/// The forward map and the reverse index agree for every entity kind.
#[test]
fn forward_and_reverse_maps_are_consistent() {
    let words = [
        verb("porto", "portare", "portavi", Some("portatus"), "carry"),
        Word::Verb(
            Verb::new("conor", Some("conari"), Some("conatus sum"), None, Meaning::single("try"))
                .unwrap(),
        ),
        Word::Noun(
            Noun::new("mare", Some("maris"), Some(Gender::Neuter), Meaning::single("sea")).unwrap(),
        ),
        Word::Noun(Noun::new("ego", None, None, Meaning::single("I")).unwrap()),
        Word::Adjective(
            Adjective::new(
                &["laetus".into(), "laeta".into(), "laetum".into()],
                None,
                AdjectiveDeclension::TwoOneTwo,
                Meaning::single("happy"),
            )
            .unwrap(),
        ),
        Word::Adverb(Adverb::new("fortiter", Meaning::single("bravely")).unwrap()),
        Word::Pronoun(Pronoun::new("qui", Meaning::single("who")).unwrap()),
        Word::Regular(RegularWord::new("et", Meaning::single("and"))),
    ];
    for word in &words {
        round_trip(word);
    }
}

fn round_trip(word: &Word) {
    for (key, value) in word.forms() {
        for surface in value.forms() {
            let keys = word.find_keys(surface);
            assert!(
                keys.contains(key),
                "reverse index of '{}' misses {} for '{surface}'",
                word.headword(),
                key.components_string(),
            );
            // Every syncretic reading maps back to a cell holding the form.
            for other in keys {
                let cell = word.get(&other).unwrap();
                assert!(cell.contains(surface));
            }
        }
    }
}
