//! Filtering rules: which words and which paradigm cells a session admits.
//!
//! Exclusions compose as an intersection of predicates. Word-level flags
//! remove whole entries (by part of speech, conjugation, declension, ...);
//! cell-level flags remove individual ending keys. Adding a flag can only
//! shrink the candidate pool.

use vocabula_accido::{
    AdjectiveDeclension, Case, Conjugation, Declension, Degree, EndingKey, Endings, Gender, Mood,
    Number, Person, Tense, Voice, Word,
};

use crate::questions::QuestionType;
use crate::settings::{Settings, QUESTION_SETTINGS};

type KeyPredicate = fn(&EndingKey) -> bool;

/// Cell-level exclusion flags, one predicate per recognized setting.
#[rustfmt::skip]
pub(crate) const ENDING_RULES: &[(&str, KeyPredicate)] = &[
    // Verb tense/voice/mood blocks.
    ("exclude-verb-present-active-indicative", |k| finite(k, Tense::Present, Voice::Active, Mood::Indicative)),
    ("exclude-verb-imperfect-active-indicative", |k| finite(k, Tense::Imperfect, Voice::Active, Mood::Indicative)),
    ("exclude-verb-future-active-indicative", |k| finite(k, Tense::Future, Voice::Active, Mood::Indicative)),
    ("exclude-verb-future-perfect-active-indicative", |k| finite(k, Tense::FuturePerfect, Voice::Active, Mood::Indicative)),
    ("exclude-verb-perfect-active-indicative", |k| finite(k, Tense::Perfect, Voice::Active, Mood::Indicative)),
    ("exclude-verb-pluperfect-active-indicative", |k| finite(k, Tense::Pluperfect, Voice::Active, Mood::Indicative)),
    ("exclude-verb-present-passive-indicative", |k| finite(k, Tense::Present, Voice::Passive, Mood::Indicative)),
    ("exclude-verb-imperfect-passive-indicative", |k| finite(k, Tense::Imperfect, Voice::Passive, Mood::Indicative)),
    ("exclude-verb-future-passive-indicative", |k| finite(k, Tense::Future, Voice::Passive, Mood::Indicative)),
    ("exclude-verb-future-perfect-passive-indicative", |k| finite(k, Tense::FuturePerfect, Voice::Passive, Mood::Indicative)),
    ("exclude-verb-perfect-passive-indicative", |k| finite(k, Tense::Perfect, Voice::Passive, Mood::Indicative)),
    ("exclude-verb-pluperfect-passive-indicative", |k| finite(k, Tense::Pluperfect, Voice::Passive, Mood::Indicative)),
    ("exclude-verb-present-active-subjunctive", |k| finite(k, Tense::Present, Voice::Active, Mood::Subjunctive)),
    ("exclude-verb-imperfect-active-subjunctive", |k| finite(k, Tense::Imperfect, Voice::Active, Mood::Subjunctive)),
    ("exclude-verb-perfect-active-subjunctive", |k| finite(k, Tense::Perfect, Voice::Active, Mood::Subjunctive)),
    ("exclude-verb-pluperfect-active-subjunctive", |k| finite(k, Tense::Pluperfect, Voice::Active, Mood::Subjunctive)),
    ("exclude-verb-present-active-imperative", |k| finite(k, Tense::Present, Voice::Active, Mood::Imperative)),
    ("exclude-verb-future-active-imperative", |k| finite(k, Tense::Future, Voice::Active, Mood::Imperative)),
    ("exclude-verb-present-passive-imperative", |k| finite(k, Tense::Present, Voice::Passive, Mood::Imperative)),
    ("exclude-verb-future-passive-imperative", |k| finite(k, Tense::Future, Voice::Passive, Mood::Imperative)),
    ("exclude-verb-present-active-infinitive", |k| matches!(k, EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Active })),
    ("exclude-verb-future-active-infinitive", |k| matches!(k, EndingKey::Infinitive { tense: Tense::Future, voice: Voice::Active })),
    ("exclude-verb-perfect-active-infinitive", |k| matches!(k, EndingKey::Infinitive { tense: Tense::Perfect, voice: Voice::Active })),
    ("exclude-verb-present-passive-infinitive", |k| matches!(k, EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Passive })),
    ("exclude-verb-future-passive-infinitive", |k| matches!(k, EndingKey::Infinitive { tense: Tense::Future, voice: Voice::Passive })),
    ("exclude-verb-perfect-passive-infinitive", |k| matches!(k, EndingKey::Infinitive { tense: Tense::Perfect, voice: Voice::Passive })),

    // Verb number and person.
    ("exclude-verb-singular", |k| matches!(k, EndingKey::Verb { number: Number::Singular, .. })),
    ("exclude-verb-plural", |k| matches!(k, EndingKey::Verb { number: Number::Plural, .. })),
    ("exclude-verb-1st-person", |k| matches!(k, EndingKey::Verb { person: Person::First, .. })),
    ("exclude-verb-2nd-person", |k| matches!(k, EndingKey::Verb { person: Person::Second, .. })),
    ("exclude-verb-3rd-person", |k| matches!(k, EndingKey::Verb { person: Person::Third, .. })),

    // Participles.
    ("exclude-participles", |k| matches!(k, EndingKey::Participle { .. })),
    ("exclude-participle-present-active", |k| participle(k, Tense::Present, Voice::Active)),
    ("exclude-participle-perfect-passive", |k| participle(k, Tense::Perfect, Voice::Passive)),
    ("exclude-participle-future-active", |k| participle(k, Tense::Future, Voice::Active)),
    ("exclude-gerundives", |k| participle(k, Tense::Future, Voice::Passive)),
    ("exclude-participle-masculine", |k| matches!(k, EndingKey::Participle { gender: Gender::Masculine, .. })),
    ("exclude-participle-feminine", |k| matches!(k, EndingKey::Participle { gender: Gender::Feminine, .. })),
    ("exclude-participle-neuter", |k| matches!(k, EndingKey::Participle { gender: Gender::Neuter, .. })),
    ("exclude-participle-nominative", |k| matches!(k, EndingKey::Participle { case: Case::Nominative, .. })),
    ("exclude-participle-vocative", |k| matches!(k, EndingKey::Participle { case: Case::Vocative, .. })),
    ("exclude-participle-accusative", |k| matches!(k, EndingKey::Participle { case: Case::Accusative, .. })),
    ("exclude-participle-genitive", |k| matches!(k, EndingKey::Participle { case: Case::Genitive, .. })),
    ("exclude-participle-dative", |k| matches!(k, EndingKey::Participle { case: Case::Dative, .. })),
    ("exclude-participle-ablative", |k| matches!(k, EndingKey::Participle { case: Case::Ablative, .. })),
    ("exclude-participle-singular", |k| matches!(k, EndingKey::Participle { number: Number::Singular, .. })),
    ("exclude-participle-plural", |k| matches!(k, EndingKey::Participle { number: Number::Plural, .. })),

    // Verbal nouns.
    ("exclude-gerunds", |k| matches!(k, EndingKey::Gerund { .. })),
    ("exclude-supines", |k| matches!(k, EndingKey::Supine { .. })),

    // Noun cells.
    ("exclude-noun-nominative", |k| matches!(k, EndingKey::Noun { case: Case::Nominative, .. })),
    ("exclude-noun-vocative", |k| matches!(k, EndingKey::Noun { case: Case::Vocative, .. })),
    ("exclude-noun-accusative", |k| matches!(k, EndingKey::Noun { case: Case::Accusative, .. })),
    ("exclude-noun-genitive", |k| matches!(k, EndingKey::Noun { case: Case::Genitive, .. })),
    ("exclude-noun-dative", |k| matches!(k, EndingKey::Noun { case: Case::Dative, .. })),
    ("exclude-noun-ablative", |k| matches!(k, EndingKey::Noun { case: Case::Ablative, .. })),
    ("exclude-noun-singular", |k| matches!(k, EndingKey::Noun { number: Number::Singular, .. })),
    ("exclude-noun-plural", |k| matches!(k, EndingKey::Noun { number: Number::Plural, .. })),

    // Adjective cells.
    ("exclude-adjective-masculine", |k| matches!(k, EndingKey::Adjective { gender: Gender::Masculine, .. })),
    ("exclude-adjective-feminine", |k| matches!(k, EndingKey::Adjective { gender: Gender::Feminine, .. })),
    ("exclude-adjective-neuter", |k| matches!(k, EndingKey::Adjective { gender: Gender::Neuter, .. })),
    ("exclude-adjective-nominative", |k| matches!(k, EndingKey::Adjective { case: Case::Nominative, .. })),
    ("exclude-adjective-vocative", |k| matches!(k, EndingKey::Adjective { case: Case::Vocative, .. })),
    ("exclude-adjective-accusative", |k| matches!(k, EndingKey::Adjective { case: Case::Accusative, .. })),
    ("exclude-adjective-genitive", |k| matches!(k, EndingKey::Adjective { case: Case::Genitive, .. })),
    ("exclude-adjective-dative", |k| matches!(k, EndingKey::Adjective { case: Case::Dative, .. })),
    ("exclude-adjective-ablative", |k| matches!(k, EndingKey::Adjective { case: Case::Ablative, .. })),
    ("exclude-adjective-singular", |k| matches!(k, EndingKey::Adjective { number: Number::Singular, .. })),
    ("exclude-adjective-plural", |k| matches!(k, EndingKey::Adjective { number: Number::Plural, .. })),
    ("exclude-adjective-positive", |k| matches!(k, EndingKey::Adjective { degree: Degree::Positive, .. })),
    ("exclude-adjective-comparative", |k| matches!(k, EndingKey::Adjective { degree: Degree::Comparative, .. })),
    ("exclude-adjective-superlative", |k| matches!(k, EndingKey::Adjective { degree: Degree::Superlative, .. })),

    // Adverb cells (both standalone adverbs and adjective formations).
    ("exclude-adverbs", |k| matches!(k, EndingKey::Adverb { .. })),
    ("exclude-adverb-positive", |k| matches!(k, EndingKey::Adverb { degree: Degree::Positive })),
    ("exclude-adverb-comparative", |k| matches!(k, EndingKey::Adverb { degree: Degree::Comparative })),
    ("exclude-adverb-superlative", |k| matches!(k, EndingKey::Adverb { degree: Degree::Superlative })),

    // Pronoun cells. An exclusion on a grammatical category removes the
    // cells carrying that tag regardless of pronoun identity.
    ("exclude-pronoun-masculine", |k| matches!(k, EndingKey::Pronoun { gender: Gender::Masculine, .. })),
    ("exclude-pronoun-feminine", |k| matches!(k, EndingKey::Pronoun { gender: Gender::Feminine, .. })),
    ("exclude-pronoun-neuter", |k| matches!(k, EndingKey::Pronoun { gender: Gender::Neuter, .. })),
    ("exclude-pronoun-nominative", |k| matches!(k, EndingKey::Pronoun { case: Case::Nominative, .. })),
    ("exclude-pronoun-vocative", |k| matches!(k, EndingKey::Pronoun { case: Case::Vocative, .. })),
    ("exclude-pronoun-accusative", |k| matches!(k, EndingKey::Pronoun { case: Case::Accusative, .. })),
    ("exclude-pronoun-genitive", |k| matches!(k, EndingKey::Pronoun { case: Case::Genitive, .. })),
    ("exclude-pronoun-dative", |k| matches!(k, EndingKey::Pronoun { case: Case::Dative, .. })),
    ("exclude-pronoun-ablative", |k| matches!(k, EndingKey::Pronoun { case: Case::Ablative, .. })),
    ("exclude-pronoun-singular", |k| matches!(k, EndingKey::Pronoun { number: Number::Singular, .. })),
    ("exclude-pronoun-plural", |k| matches!(k, EndingKey::Pronoun { number: Number::Plural, .. })),
];

fn finite(key: &EndingKey, tense: Tense, voice: Voice, mood: Mood) -> bool {
    matches!(key, EndingKey::Verb { tense: t, voice: v, mood: m, .. }
        if *t == tense && *v == voice && *m == mood)
}

fn participle(key: &EndingKey, tense: Tense, voice: Voice) -> bool {
    matches!(key, EndingKey::Participle { tense: t, voice: v, .. }
        if *t == tense && *v == voice)
}

/// Remove whole words excluded by the per-PoS and per-subcategory flags.
pub(crate) fn filter_words(vocab: &[Word], settings: &Settings) -> Vec<Word> {
    vocab
        .iter()
        .filter(|word| !word_excluded(word, settings))
        .cloned()
        .collect()
}

fn word_excluded(word: &Word, settings: &Settings) -> bool {
    let on = |key: &str| settings.enabled(key);
    match word {
        Word::Verb(verb) => {
            on("exclude-verbs")
                || (on("exclude-deponents") && verb.deponent)
                || on(match verb.conjugation {
                    Conjugation::First => "exclude-verb-first-conjugation",
                    Conjugation::Second => "exclude-verb-second-conjugation",
                    Conjugation::Third => "exclude-verb-third-conjugation",
                    Conjugation::Fourth => "exclude-verb-fourth-conjugation",
                    Conjugation::Mixed => "exclude-verb-mixed-conjugation",
                    Conjugation::Irregular => "exclude-verb-irregular-conjugation",
                })
        }
        Word::Noun(noun) => {
            on("exclude-nouns")
                || on(match noun.declension {
                    Declension::First => "exclude-noun-first-declension",
                    Declension::Second => "exclude-noun-second-declension",
                    Declension::Third => "exclude-noun-third-declension",
                    Declension::Fourth => "exclude-noun-fourth-declension",
                    Declension::Fifth => "exclude-noun-fifth-declension",
                    Declension::Irregular => "exclude-noun-irregular-declension",
                })
        }
        Word::Adjective(adjective) => {
            on("exclude-adjectives")
                || on(match adjective.declension {
                    AdjectiveDeclension::TwoOneTwo => "exclude-adjective-212-declension",
                    AdjectiveDeclension::Third => "exclude-adjective-third-declension",
                })
        }
        // Standalone adverbs are only excludable cell-wise.
        Word::Adverb(_) => false,
        Word::Pronoun(_) => on("exclude-pronouns"),
        Word::Regular(_) => on("exclude-regulars"),
    }
}

/// Remove the paradigm cells excluded by the cell-level flags.
pub(crate) fn filter_endings(endings: &Endings, settings: &Settings) -> Endings {
    let active: Vec<&KeyPredicate> = ENDING_RULES
        .iter()
        .filter(|(name, _)| settings.enabled(name))
        .map(|(_, predicate)| predicate)
        .collect();
    endings
        .iter()
        .filter(|(key, _)| !active.iter().any(|excluded| excluded(key)))
        .map(|(key, value)| (*key, value.clone()))
        .collect()
}

/// The enabled question types, in wire-name order for deterministic draws.
pub(crate) fn enabled_question_types(settings: &Settings) -> Vec<QuestionType> {
    let mut types: Vec<QuestionType> = QUESTION_SETTINGS
        .iter()
        .filter(|key| settings.enabled(key))
        .filter_map(|key| QuestionType::from_setting(key))
        .collect();
    types.sort_by_key(|t| t.wire_name());
    types
}
