//! Question sampling.
//!
//! Each draw picks an enabled question type uniformly, then a candidate
//! word uniformly, filters its paradigm through the cell-level exclusions,
//! and asks the matching generator for a question. A generator that cannot
//! produce one (no compatible cells, unsupported word kind) makes the draw
//! retry; after a bounded number of retries the session fails rather than
//! spin.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use vocabula_accido::{Case, Declension, EndingKey, Endings, EndingValue, Gender, Mood, Number, Person, Word};
use vocabula_lego::VocabList;
use vocabula_transfero::{find_inflections, find_main_inflection, Synonyms};

use crate::questions::{Question, QuestionType};
use crate::rules::{enabled_question_types, filter_endings, filter_words};
use crate::settings::Settings;
use crate::{RogoError, Result, SettingsError};

/// Retry bound for a single draw.
pub const MAX_RETRIES: usize = 1000;

/// Sample `settings.number_of_questions` questions from the vocab list.
///
/// Draws serialize on the caller's RNG, so a fixed seed reproduces the
/// question sequence byte for byte.
pub fn ask_questions(
    list: &VocabList,
    settings: &Settings,
    synonyms: &dyn Synonyms,
    rng: &mut StdRng,
) -> Result<Vec<Question>> {
    let pool = filter_words(&list.vocab, settings);
    let mut types = enabled_question_types(settings);

    // Multiple choice needs enough words for the distractors.
    if pool.len() < settings.number_multiplechoice_options {
        types.retain(|t| {
            !matches!(
                t,
                QuestionType::MultipleChoiceEngToLat | QuestionType::MultipleChoiceLatToEng
            )
        });
    }
    if types.is_empty() {
        return Err(SettingsError::NoTypesEnabled.into());
    }
    if pool.is_empty() {
        return Err(SettingsError::EmptyVocab.into());
    }

    let mut questions = Vec::with_capacity(settings.number_of_questions);
    for _ in 0..settings.number_of_questions {
        let mut retries = 0;
        loop {
            if retries >= MAX_RETRIES {
                return Err(RogoError::NoQuestions(MAX_RETRIES));
            }
            retries += 1;

            let question_type = types[rng.gen_range(0..types.len())];
            let word = &pool[rng.gen_range(0..pool.len())];
            let endings = filter_endings(word.endings(), settings);
            if endings.is_empty() {
                continue;
            }

            debug!(
                question_type = question_type.wire_name(),
                word = word.headword(),
                "drawing question"
            );

            let question = match question_type {
                QuestionType::TypeInEngToLat => typein_engtolat(word, &endings, settings, rng),
                QuestionType::TypeInLatToEng => {
                    typein_lattoeng(word, &endings, settings, synonyms, rng)
                }
                QuestionType::ParseWordLatToComp => parse_lattocomp(word, &endings, rng),
                QuestionType::ParseWordCompToLat => parse_comptolat(word, &endings, rng),
                QuestionType::PrincipalParts => principal_parts(word),
                QuestionType::MultipleChoiceEngToLat => multiplechoice_engtolat(
                    &pool,
                    word,
                    settings.number_multiplechoice_options,
                    rng,
                ),
                QuestionType::MultipleChoiceLatToEng => multiplechoice_lattoeng(
                    &pool,
                    word,
                    settings.number_multiplechoice_options,
                    rng,
                ),
            };

            if let Some(question) = question {
                questions.push(question);
                break;
            }
        }
    }
    Ok(questions)
}

fn pick_ending<'a>(endings: &'a Endings, rng: &mut StdRng) -> (&'a EndingKey, &'a EndingValue) {
    let index = rng.gen_range(0..endings.len());
    endings
        .iter()
        .nth(index)
        .expect("index drawn within bounds")
}

fn choose_form(value: &EndingValue, rng: &mut StdRng) -> String {
    let forms: Vec<&str> = value.forms().collect();
    forms[rng.gen_range(0..forms.len())].to_string()
}

fn choose<'a>(items: &[&'a str], rng: &mut StdRng) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// English renderings of subjunctives and verbal nouns are only offered
/// when the relevant settings allow them.
fn untranslatable(key: &EndingKey, settings: &Settings) -> bool {
    match key {
        EndingKey::Verb {
            mood: Mood::Subjunctive,
            ..
        } => !settings.enabled("english-subjunctives"),
        EndingKey::Gerund { .. } | EndingKey::Supine { .. } => {
            !settings.enabled("english-verbal-nouns")
        }
        _ => false,
    }
}

fn all_forms(value: &EndingValue) -> impl Iterator<Item = String> + '_ {
    value.forms().map(str::to_string)
}

fn typein_engtolat(
    word: &Word,
    endings: &Endings,
    settings: &Settings,
    rng: &mut StdRng,
) -> Option<Question> {
    let (key, value) = pick_ending(endings, rng);
    let key = *key;
    let mut main_answer = choose_form(value, rng);

    if untranslatable(&key, settings) {
        return None;
    }
    // Gerundives translate too much like the present passive infinitive.
    if matches!(
        key,
        EndingKey::Participle {
            tense: vocabula_accido::Tense::Future,
            voice: vocabula_accido::Voice::Passive,
            ..
        }
    ) {
        return None;
    }

    let mut answers: BTreeSet<String> = [main_answer.clone()].into();
    match (&word, key) {
        // Nominative, vocative and accusative nouns translate alike.
        (Word::Noun(_), EndingKey::Noun { case, number })
            if matches!(case, Case::Nominative | Case::Vocative | Case::Accusative) =>
        {
            for case in [Case::Nominative, Case::Vocative, Case::Accusative] {
                if let Some(value) = word.endings().get(&EndingKey::Noun { case, number }) {
                    answers.extend(all_forms(value));
                }
            }
        }

        // Adjectives of the same degree all translate alike.
        (Word::Adjective(_), EndingKey::Adjective { degree, .. }) => {
            for (k, v) in word.forms() {
                if matches!(k, EndingKey::Adjective { degree: d, .. } if *d == degree) {
                    answers.extend(all_forms(v));
                }
            }
            let nominative = EndingKey::Adjective {
                degree,
                gender: Gender::Masculine,
                case: Case::Nominative,
                number: Number::Singular,
            };
            if let Some(value) = word.endings().get(&nominative) {
                main_answer = value.principal().to_string();
            }
        }

        // All participles of a verb translate alike.
        (Word::Verb(_), EndingKey::Participle { tense, voice, .. }) => {
            for (k, v) in word.forms() {
                if matches!(k, EndingKey::Participle { .. }) {
                    answers.extend(all_forms(v));
                }
            }
            let nominative = EndingKey::Participle {
                tense,
                voice,
                gender: Gender::Masculine,
                case: Case::Nominative,
                number: Number::Singular,
            };
            if let Some(value) = word.endings().get(&nominative) {
                main_answer = value.principal().to_string();
            }
        }

        // English has no second-person plural, so both numbers answer.
        (
            Word::Verb(_),
            EndingKey::Verb {
                tense,
                voice,
                mood,
                person: Person::Second,
                ..
            },
        ) => {
            let plural = EndingKey::Verb {
                tense,
                voice,
                mood,
                number: Number::Plural,
                person: Person::Second,
            };
            if let Some(value) = word.endings().get(&plural) {
                answers.extend(all_forms(value));
            }
        }

        // Pronouns of the same case and number translate alike.
        (Word::Pronoun(_), EndingKey::Pronoun { case, number, .. }) => {
            for gender in [Gender::Masculine, Gender::Feminine, Gender::Neuter] {
                let k = EndingKey::Pronoun {
                    gender,
                    case,
                    number,
                };
                if let Some(value) = word.endings().get(&k) {
                    answers.extend(all_forms(value));
                }
            }
            let masculine = EndingKey::Pronoun {
                gender: Gender::Masculine,
                case,
                number,
            };
            if let Some(value) = word.endings().get(&masculine) {
                main_answer = value.principal().to_string();
            }
        }

        _ => {}
    }

    let renderings = find_inflections(word, word.meaning().principal(), &key);
    let rendering_refs: Vec<&str> = renderings.iter().map(String::as_str).collect();
    let prompt = choose(&rendering_refs, rng).to_string();

    Some(Question::TypeInEngToLat {
        prompt,
        main_answer,
        answers: answers.into_iter().collect(),
    })
}

fn typein_lattoeng(
    word: &Word,
    endings: &Endings,
    settings: &Settings,
    synonyms: &dyn Synonyms,
    rng: &mut StdRng,
) -> Option<Question> {
    let (_, value) = pick_ending(endings, rng);
    let prompt = choose_form(value, rng);

    let principal = word.meaning().principal().to_string();
    let pronoun_like = matches!(word, Word::Pronoun(_))
        || matches!(word, Word::Noun(n) if n.declension == Declension::Irregular);

    let mut answers: BTreeSet<String> = BTreeSet::new();
    let mut main_answers: Vec<String> = Vec::new();

    for key in word.find_keys(&prompt) {
        if untranslatable(&key, settings) {
            continue;
        }

        for meaning in word.meaning().all() {
            answers.extend(find_inflections(word, meaning, &key));
        }

        if settings.enabled("english-synonyms") && !pronoun_like {
            let mut expansion = synonyms.get(&principal);
            if settings.enabled("english-similar-words") {
                expansion.extend(synonyms.related(&principal));
            }
            for synonym in expansion {
                // Multi-word synonyms do not inflect cleanly; skip them.
                if synonym.contains(' ') {
                    continue;
                }
                answers.extend(find_inflections(word, &synonym, &key));
            }
        }

        let main = find_main_inflection(word, &principal, &key);
        if !main_answers.contains(&main) {
            main_answers.push(main);
        }
    }

    // Every reading was excluded (e.g. a subjunctive-only form).
    if main_answers.is_empty() {
        return None;
    }
    let main_refs: Vec<&str> = main_answers.iter().map(String::as_str).collect();
    let main_answer = choose(&main_refs, rng).to_string();

    Some(Question::TypeInLatToEng {
        prompt,
        main_answer,
        answers: answers.into_iter().collect(),
    })
}

fn parse_lattocomp(word: &Word, endings: &Endings, rng: &mut StdRng) -> Option<Question> {
    // Non-inflecting words cannot be parsed.
    if matches!(word, Word::Regular(_)) {
        return None;
    }

    let (_, value) = pick_ending(endings, rng);
    let prompt = choose_form(value, rng);

    let keys = word.find_keys(&prompt);
    let main_answer = word.principal_key(&prompt)?.components_string();
    let answers: BTreeSet<String> = keys.iter().map(EndingKey::components_string).collect();

    Some(Question::ParseWordLatToComp {
        prompt,
        dictionary_entry: word.to_string(),
        main_answer,
        answers: answers.into_iter().collect(),
    })
}

fn parse_comptolat(word: &Word, endings: &Endings, rng: &mut StdRng) -> Option<Question> {
    if matches!(word, Word::Regular(_)) {
        return None;
    }

    let (key, value) = pick_ending(endings, rng);
    let answers: BTreeSet<String> = value.forms().map(str::to_string).collect();

    Some(Question::ParseWordCompToLat {
        prompt: word.to_string(),
        components: key.components_string(),
        main_answer: value.principal().to_string(),
        answers: answers.into_iter().collect(),
    })
}

fn principal_parts(word: &Word) -> Option<Question> {
    let parts = word.principal_parts()?;
    Some(Question::PrincipalParts {
        prompt: parts[0].clone(),
        principal_parts: parts,
    })
}

/// Distractor sampling: distinct strings drawn from the other words, never
/// equal to the answer. Returns `None` when the pool cannot fill the
/// choice list.
fn sample_distractors(
    pool: &[Word],
    chosen: &Word,
    answer: &str,
    wanted: usize,
    rng: &mut StdRng,
    mut render: impl FnMut(&Word, &mut StdRng) -> String,
) -> Option<Vec<String>> {
    let mut others: Vec<&Word> = pool
        .iter()
        .filter(|w| !w.same_paradigm(chosen))
        .collect();
    others.shuffle(rng);

    let mut distractors: Vec<String> = Vec::with_capacity(wanted);
    for word in others {
        if distractors.len() == wanted {
            break;
        }
        let rendered = render(word, rng);
        if rendered != answer && !distractors.contains(&rendered) {
            distractors.push(rendered);
        }
    }
    (distractors.len() == wanted).then_some(distractors)
}

/// A verb's bare meaning reads oddly next to nouns, so multiple choice
/// inflects it through the headword's principal components.
fn rendered_meaning(word: &Word, meaning: &str) -> String {
    if matches!(word, Word::Verb(_)) {
        if let Some(key) = word.principal_key(word.headword()) {
            return find_main_inflection(word, meaning, &key);
        }
    }
    meaning.to_string()
}

fn multiplechoice_engtolat(
    pool: &[Word],
    word: &Word,
    options: usize,
    rng: &mut StdRng,
) -> Option<Question> {
    let meanings: Vec<&str> = word.meaning().all().collect();
    let meaning = choose(&meanings, rng).to_string();
    let prompt = rendered_meaning(word, &meaning);

    let answer = word.headword().to_string();
    let distractors = sample_distractors(pool, word, &answer, options - 1, rng, |w, _| {
        w.headword().to_string()
    })?;

    let mut choices = vec![answer.clone()];
    choices.extend(distractors);
    choices.shuffle(rng);

    Some(Question::MultipleChoiceEngToLat {
        prompt,
        answer,
        choices,
    })
}

fn multiplechoice_lattoeng(
    pool: &[Word],
    word: &Word,
    options: usize,
    rng: &mut StdRng,
) -> Option<Question> {
    let prompt = word.headword().to_string();

    let meanings: Vec<&str> = word.meaning().all().collect();
    let meaning = choose(&meanings, rng).to_string();
    let answer = rendered_meaning(word, &meaning);

    let distractors = sample_distractors(pool, word, &answer, options - 1, rng, |w, rng| {
        let meanings: Vec<&str> = w.meaning().all().collect();
        let meaning = choose(&meanings, rng).to_string();
        rendered_meaning(w, &meaning)
    })?;

    let mut choices = vec![answer.clone()];
    choices.extend(distractors);
    choices.shuffle(rng);

    Some(Question::MultipleChoiceLatToEng {
        prompt,
        answer,
        choices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use vocabula_lego::read_vocab_file;
    use vocabula_transfero::WordNetDb;

    const LIST: &str = "\
@ Noun
farmer: agricola, agricolae, (m)
girl: puella, puellae, (f)
merchant: mercator, mercatoris, (m)
@ Verb
take: capio, capere, cepi, captus
hear: audio, audire, audivi, auditus
@ Adjective
happy: laetus, laeta, laetum, (2-1-2)
light: levis, leve, (3-2)
@ Pronoun
this: hic, haec, hoc
";

    fn vocab() -> VocabList {
        read_vocab_file(LIST).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn base_settings() -> Settings {
        let mut settings = Settings::all_disabled();
        settings.number_of_questions = 8;
        settings.number_multiplechoice_options = 3;
        settings
    }

    #[test]
    fn returns_the_requested_number_of_questions() {
        let mut settings = base_settings();
        settings.set("include-typein-lattoeng", true);
        settings.set("include-parse", true);
        settings.set("include-multiplechoice-engtolat", true);
        let questions =
            ask_questions(&vocab(), &settings, &WordNetDb::empty(), &mut rng()).unwrap();
        assert_eq!(questions.len(), 8);
        for question in &questions {
            assert!(matches!(
                question.question_type(),
                QuestionType::TypeInLatToEng
                    | QuestionType::ParseWordLatToComp
                    | QuestionType::MultipleChoiceEngToLat
            ));
        }
    }

    #[test]
    fn no_enabled_types_is_a_settings_error() {
        let settings = base_settings();
        let err = ask_questions(&vocab(), &settings, &WordNetDb::empty(), &mut rng()).unwrap_err();
        assert!(matches!(
            err,
            RogoError::InvalidSettings(SettingsError::NoTypesEnabled)
        ));
    }

    #[test]
    fn empty_pool_is_a_settings_error() {
        let mut settings = base_settings();
        settings.set("include-typein-lattoeng", true);
        for key in [
            "exclude-nouns",
            "exclude-verbs",
            "exclude-adjectives",
            "exclude-pronouns",
            "exclude-regulars",
        ] {
            settings.set(key, true);
        }
        let err = ask_questions(&vocab(), &settings, &WordNetDb::empty(), &mut rng()).unwrap_err();
        assert!(matches!(
            err,
            RogoError::InvalidSettings(SettingsError::EmptyVocab)
        ));
    }

    #[test]
    fn multiple_choice_invariants() {
        let mut settings = base_settings();
        settings.set("include-multiplechoice-lattoeng", true);
        settings.set("include-multiplechoice-engtolat", true);
        settings.number_of_questions = 12;
        let questions =
            ask_questions(&vocab(), &settings, &WordNetDb::empty(), &mut rng()).unwrap();
        for question in questions {
            let (answer, choices) = match question {
                Question::MultipleChoiceEngToLat { answer, choices, .. }
                | Question::MultipleChoiceLatToEng { answer, choices, .. } => (answer, choices),
                other => panic!("unexpected question {other:?}"),
            };
            assert_eq!(choices.len(), 3);
            assert!(choices.contains(&answer));
            let distinct: BTreeSet<&String> = choices.iter().collect();
            assert_eq!(distinct.len(), choices.len());
        }
    }

    #[test]
    fn multiple_choice_drops_out_when_the_pool_is_small() {
        let list = read_vocab_file("@ Noun\nfarmer: agricola, agricolae, (m)\n").unwrap();
        let mut settings = base_settings();
        settings.set("include-multiplechoice-engtolat", true);
        let err = ask_questions(&list, &settings, &WordNetDb::empty(), &mut rng()).unwrap_err();
        // The only enabled type was dropped, leaving none.
        assert!(matches!(
            err,
            RogoError::InvalidSettings(SettingsError::NoTypesEnabled)
        ));
    }

    #[test]
    fn identical_seeds_reproduce_the_sequence() {
        let mut settings = base_settings();
        settings.set("include-typein-lattoeng", true);
        settings.set("include-inflect", true);
        let a = ask_questions(&vocab(), &settings, &WordNetDb::empty(), &mut rng()).unwrap();
        let b = ask_questions(&vocab(), &settings, &WordNetDb::empty(), &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_answers_are_sorted_and_unique() {
        let list = read_vocab_file("@ Noun\nfarmer: agricola, agricolae, (m)\n").unwrap();
        let mut settings = base_settings();
        settings.set("include-parse", true);
        settings.number_of_questions = 6;
        let questions =
            ask_questions(&list, &settings, &WordNetDb::empty(), &mut rng()).unwrap();
        for question in questions {
            let Question::ParseWordLatToComp { answers, main_answer, prompt, .. } = question
            else {
                panic!("expected a parse question");
            };
            let mut sorted = answers.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(answers, sorted);
            assert!(answers.contains(&main_answer));
            if prompt == "agricolae" {
                assert_eq!(
                    answers,
                    vec![
                        "dative singular",
                        "genitive singular",
                        "nominative plural",
                        "vocative plural"
                    ]
                );
                assert_eq!(main_answer, "nominative plural");
            }
        }
    }

    #[test]
    fn inflect_question_for_a_participle_cell() {
        let list = read_vocab_file("@ Verb\ntake: capio, capere, cepi, captus\n").unwrap();
        let word = &list.vocab[0];
        let key = EndingKey::Participle {
            tense: vocabula_accido::Tense::Present,
            voice: vocabula_accido::Voice::Active,
            gender: Gender::Neuter,
            case: Case::Accusative,
            number: Number::Singular,
        };
        let mut endings = Endings::new();
        endings.insert(key, word.endings()[&key].clone());
        let question = parse_comptolat(word, &endings, &mut rng()).unwrap();
        let Question::ParseWordCompToLat { components, main_answer, .. } = question else {
            panic!("expected an inflect question");
        };
        assert_eq!(components, "present active participle neuter accusative singular");
        assert_eq!(main_answer, "capiens");
    }

    #[test]
    fn inflect_question_for_a_pronoun_cell() {
        let list = read_vocab_file("@ Pronoun\nthis: hic, haec, hoc\n").unwrap();
        let word = &list.vocab[0];
        let key = EndingKey::Pronoun {
            gender: Gender::Feminine,
            case: Case::Genitive,
            number: Number::Plural,
        };
        let mut endings = Endings::new();
        endings.insert(key, word.endings()[&key].clone());
        let question = parse_comptolat(word, &endings, &mut rng()).unwrap();
        let Question::ParseWordCompToLat { main_answer, .. } = question else {
            panic!("expected an inflect question");
        };
        assert_eq!(main_answer, "harum");
    }

    #[test]
    fn lattoeng_accepts_comparative_renderings() {
        let list = read_vocab_file("@ Adjective\nlight: levis, leve, (3-2)\n").unwrap();
        let word = &list.vocab[0];
        let key = EndingKey::Adjective {
            degree: vocabula_accido::Degree::Comparative,
            gender: Gender::Masculine,
            case: Case::Genitive,
            number: Number::Singular,
        };
        let mut endings = Endings::new();
        endings.insert(key, word.endings()[&key].clone());
        let settings = base_settings();
        let question =
            typein_lattoeng(word, &endings, &settings, &WordNetDb::empty(), &mut rng()).unwrap();
        let Question::TypeInLatToEng { prompt, answers, .. } = question else {
            panic!("expected a type-in question");
        };
        assert_eq!(prompt, "levioris");
        assert!(answers.contains(&"lighter".to_string()));
        assert!(answers.contains(&"more light".to_string()));
    }

    #[test]
    fn subjunctives_are_skipped_without_the_flag() {
        let list = read_vocab_file("@ Verb\ntake: capio, capere, cepi, captus\n").unwrap();
        let word = &list.vocab[0];
        let key = EndingKey::Verb {
            tense: vocabula_accido::Tense::Present,
            voice: vocabula_accido::Voice::Active,
            mood: Mood::Subjunctive,
            number: Number::Plural,
            person: Person::First,
        };
        let mut endings = Endings::new();
        endings.insert(key, word.endings()[&key].clone());
        let settings = base_settings();
        assert!(typein_lattoeng(word, &endings, &settings, &WordNetDb::empty(), &mut rng())
            .is_none());

        let mut settings = base_settings();
        settings.set("english-subjunctives", true);
        assert!(typein_lattoeng(word, &endings, &settings, &WordNetDb::empty(), &mut rng())
            .is_some());
    }

    #[test]
    fn synonyms_expand_the_answer_set() {
        let list = read_vocab_file("@ Verb\nhide: celo, celare, celavi, celatus\n").unwrap();
        let word = &list.vocab[0];
        let key = EndingKey::Verb {
            tense: vocabula_accido::Tense::Present,
            voice: vocabula_accido::Voice::Active,
            mood: Mood::Indicative,
            number: Number::Singular,
            person: Person::First,
        };
        let mut endings = Endings::new();
        endings.insert(key, word.endings()[&key].clone());

        struct Fixed;
        impl Synonyms for Fixed {
            fn get(&self, word: &str) -> BTreeSet<String> {
                if word == "hide" {
                    BTreeSet::from(["conceal".to_string()])
                } else {
                    BTreeSet::new()
                }
            }
        }

        let mut settings = base_settings();
        settings.set("english-synonyms", true);
        let question = typein_lattoeng(word, &endings, &settings, &Fixed, &mut rng()).unwrap();
        let Question::TypeInLatToEng { answers, .. } = question else {
            panic!("expected a type-in question");
        };
        assert!(answers.contains(&"I hide".to_string()));
        assert!(answers.contains(&"I conceal".to_string()));
    }
}
