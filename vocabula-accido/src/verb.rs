//! Latin verbs.
//!
//! A verb's paradigm is composed from its principal parts: the present stem
//! drives the present system through per-conjugation suffix tables, the
//! perfect stem drives the perfect system (identical across conjugations),
//! and the supine stem drives the perfect participle, future participle and
//! supine. Deponent and semi-deponent verbs reuse the same machinery and
//! relabel the voice of the cells they keep. Irregular verbs replace the
//! generated table with a hand-authored one (see [`crate::irregulars`]).

use std::fmt;

use tracing::debug;

use crate::ending::{build_reverse, EndingKey, Endings, EndingValue, ReverseIndex};
use crate::error::{AccidoError, Result};
use crate::irregulars;
use crate::meaning::Meaning;
use crate::tags::{Case, Gender, Mood, Number, Person, Tense, Voice};

/// Conjugation of a verb. `Mixed` covers the -io third-conjugation verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Conjugation {
    First,
    Second,
    Third,
    Fourth,
    Mixed,
    Irregular,
}

/// A Latin verb with its complete ending table.
#[derive(Debug, Clone)]
pub struct Verb {
    pub present: String,
    pub infinitive: Option<String>,
    pub perfect: Option<String>,
    pub ppp: Option<String>,
    pub meaning: Meaning,
    pub conjugation: Conjugation,
    pub deponent: bool,
    pub semi_deponent: bool,
    endings: Endings,
    reverse: ReverseIndex,
}

#[derive(Debug, Default, Clone, Copy)]
struct VerbFlags {
    deponent: bool,
    semi_deponent: bool,
    no_ppp: bool,
    fap_fourthpp: bool,
    no_perfect: bool,
    no_gerund: bool,
    no_supine: bool,
    no_fap: bool,
    no_future: bool,
    active_only: bool,
    impersonal: bool,
    impersonal_passive: bool,
}

impl Verb {
    /// Build a verb from its principal parts.
    ///
    /// One part alone names an irregular or fully defective verb; three
    /// parts make a deponent (or, with a third part in ` sum`, a
    /// semi-deponent); four parts a regular verb.
    pub fn new(
        present: &str,
        infinitive: Option<&str>,
        perfect: Option<&str>,
        ppp: Option<&str>,
        meaning: Meaning,
    ) -> Result<Verb> {
        debug!(present, ?infinitive, ?perfect, ?ppp, "constructing verb");

        if let Some(endings) = irregulars::verb_endings(present) {
            let reverse = build_reverse(&endings);
            return Ok(Verb {
                present: present.to_string(),
                infinitive: None,
                perfect: None,
                ppp: None,
                meaning,
                conjugation: Conjugation::Irregular,
                deponent: false,
                semi_deponent: false,
                endings,
                reverse,
            });
        }

        let infinitive = infinitive.ok_or_else(|| {
            AccidoError::invalid(format!(
                "Verb '{present}' is not irregular, but no infinitive provided."
            ))
        })?;

        if present.ends_with("or") {
            Self::new_deponent(present, infinitive, perfect, ppp, meaning)
        } else if let Some(perfect) = perfect.filter(|p| p.ends_with(" sum")) {
            Self::new_semi_deponent(present, infinitive, perfect, ppp, meaning)
        } else {
            Self::new_regular(present, infinitive, perfect, ppp, meaning)
        }
    }

    fn new_deponent(
        present: &str,
        infinitive: &str,
        perfect: Option<&str>,
        ppp: Option<&str>,
        meaning: Meaning,
    ) -> Result<Verb> {
        let perfect = perfect.ok_or_else(|| {
            AccidoError::invalid(format!(
                "Verb '{present}' is not irregular, but no perfect provided."
            ))
        })?;
        if ppp.is_some() {
            return Err(AccidoError::invalid(format!(
                "Verb '{present}' is deponent, but ppp provided."
            )));
        }

        let mut flags = defective_flags(present);
        flags.deponent = true;

        let ppp = if flags.no_ppp {
            flags.no_supine = true;
            None
        } else {
            let stripped = perfect.strip_suffix(" sum").ok_or_else(|| {
                AccidoError::invalid(format!(
                    "Invalid perfect form: '{perfect}' (must have 'sum')"
                ))
            })?;
            Some(stripped.to_string())
        };

        let (conjugation, stems) = deponent_stems(present, infinitive)?;
        let endings = generate(conjugation, &stems, present, None, ppp.as_deref(), &flags);

        let reverse = build_reverse(&endings);
        Ok(Verb {
            present: present.to_string(),
            infinitive: Some(infinitive.to_string()),
            perfect: Some(perfect.to_string()),
            ppp,
            meaning,
            conjugation,
            deponent: true,
            semi_deponent: false,
            endings,
            reverse,
        })
    }

    fn new_semi_deponent(
        present: &str,
        infinitive: &str,
        perfect: &str,
        ppp: Option<&str>,
        meaning: Meaning,
    ) -> Result<Verb> {
        if ppp.is_some() {
            return Err(AccidoError::invalid(format!(
                "Verb '{present}' is semi-deponent, but ppp provided."
            )));
        }

        let mut flags = defective_flags(present);
        flags.semi_deponent = true;

        let ppp = if flags.no_ppp {
            flags.no_supine = true;
            None
        } else {
            // "ausus sum" -> ppp "ausus"
            Some(perfect[..perfect.len() - 4].to_string())
        };

        let (conjugation, stems) = active_stems(present, infinitive)?;
        let endings = generate(conjugation, &stems, present, None, ppp.as_deref(), &flags);

        let reverse = build_reverse(&endings);
        Ok(Verb {
            present: present.to_string(),
            infinitive: Some(infinitive.to_string()),
            perfect: Some(perfect.to_string()),
            ppp,
            meaning,
            conjugation,
            deponent: false,
            semi_deponent: true,
            endings,
            reverse,
        })
    }

    fn new_regular(
        present: &str,
        infinitive: &str,
        perfect: Option<&str>,
        ppp: Option<&str>,
        meaning: Meaning,
    ) -> Result<Verb> {
        let mut flags = defective_flags(present);

        // With only three parts, the form handed in as "perfect" is really
        // the fourth principal part of a perfect-less verb.
        let (perfect, mut ppp) = if flags.no_perfect && ppp.is_none() {
            (None, perfect.map(str::to_string))
        } else if flags.no_perfect {
            return Err(AccidoError::invalid(format!(
                "Verb '{present}' has no perfect, but perfect provided."
            )));
        } else {
            let perfect = perfect.ok_or_else(|| {
                AccidoError::invalid(format!(
                    "Verb '{present}' is not irregular, but no perfect provided."
                ))
            })?;
            if !perfect.ends_with('i') {
                return Err(AccidoError::invalid(format!(
                    "Invalid perfect form: '{perfect}' (must end in '-i')"
                )));
            }
            (Some(perfect.to_string()), ppp.map(str::to_string))
        };

        if flags.no_ppp {
            if ppp.is_some() {
                return Err(AccidoError::invalid(format!(
                    "Verb '{present}' has no ppp, but ppp provided."
                )));
            }
            flags.no_supine = true;
        } else if flags.fap_fourthpp {
            if ppp.is_none() {
                return Err(AccidoError::invalid(format!(
                    "Verb '{present}' does not have a future active participle provided."
                )));
            }
            flags.no_ppp = true;
            flags.no_supine = true;
        } else {
            let mut given = ppp.ok_or_else(|| {
                AccidoError::invalid(format!(
                    "Verb '{present}' is not irregular or deponent, but no ppp provided."
                ))
            })?;
            // Accept the supine in place of the ppp.
            if let Some(stem) = given.strip_suffix("um") {
                given = format!("{stem}us");
            }
            ppp = Some(given);
        }

        // Impersonal verbs are cited in the third singular (pluit, libet).
        if !present.ends_with('o') && !flags.impersonal {
            return Err(AccidoError::invalid(format!(
                "Invalid present form: '{present}' (must end in '-o')"
            )));
        }

        let (conjugation, stems) = active_stems(present, infinitive)?;
        let endings = generate(
            conjugation,
            &stems,
            present,
            perfect.as_deref(),
            ppp.as_deref(),
            &flags,
        );

        let reverse = build_reverse(&endings);
        Ok(Verb {
            present: present.to_string(),
            infinitive: Some(infinitive.to_string()),
            perfect,
            ppp,
            meaning,
            conjugation,
            deponent: false,
            semi_deponent: false,
            endings,
            reverse,
        })
    }

    pub fn endings(&self) -> &Endings {
        &self.endings
    }

    pub(crate) fn reverse(&self) -> &ReverseIndex {
        &self.reverse
    }

    /// The principal parts in dictionary order.
    pub fn principal_parts(&self) -> Vec<String> {
        let mut parts = vec![self.present.clone()];
        parts.extend(self.infinitive.clone());
        parts.extend(self.perfect.clone());
        if !self.deponent && !self.semi_deponent {
            parts.extend(self.ppp.clone());
        }
        parts
    }
}

impl PartialEq for Verb {
    fn eq(&self, other: &Self) -> bool {
        self.present == other.present
            && self.infinitive == other.infinitive
            && self.perfect == other.perfect
            && self.ppp == other.ppp
            && self.meaning == other.meaning
            && self.endings == other.endings
    }
}

impl fmt::Display for Verb {
    /// The dictionary entry, e.g. `take: capio, capere, cepi, captus`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conjugation == Conjugation::Irregular {
            return write!(f, "{}: {}", self.meaning, self.present);
        }
        write!(f, "{}: {}", self.meaning, self.principal_parts().join(", "))
    }
}

// ---------------------------------------------------------------------------
// Stems and conjugation detection
// ---------------------------------------------------------------------------

struct VerbStems {
    /// Present stem, with the thematic vowel stripped (`port-`, `doc-`).
    inf_stem: String,
    /// Present participle stem (`porta-`, `doce-`, `trahe-`, `audie-`).
    preptc_stem: String,
    /// Active-shaped infinitive, reconstructed for deponents (`conare-`
    /// base for the imperfect subjunctive).
    infinitive: String,
}

fn active_stems(present: &str, infinitive: &str) -> Result<(Conjugation, VerbStems)> {
    let conjugation = if infinitive.ends_with("are") {
        Conjugation::First
    } else if infinitive.ends_with("ire") {
        Conjugation::Fourth
    } else if infinitive.ends_with("ere") {
        if present.ends_with("eo") {
            Conjugation::Second
        } else if present.ends_with("io") {
            Conjugation::Mixed
        } else {
            Conjugation::Third
        }
    } else {
        return Err(AccidoError::invalid(format!(
            "Invalid infinitive form: '{infinitive}'"
        )));
    };

    let inf_stem = infinitive[..infinitive.len() - 3].to_string();
    let preptc_stem = match conjugation {
        Conjugation::Fourth => format!("{}e", &infinitive[..infinitive.len() - 2]),
        Conjugation::Mixed => format!("{}ie", inf_stem),
        _ => infinitive[..infinitive.len() - 2].to_string(),
    };
    Ok((
        conjugation,
        VerbStems {
            inf_stem,
            preptc_stem,
            infinitive: infinitive.to_string(),
        },
    ))
}

fn deponent_stems(present: &str, infinitive: &str) -> Result<(Conjugation, VerbStems)> {
    let (conjugation, inf_stem) = if infinitive.ends_with("ari") {
        (Conjugation::First, &infinitive[..infinitive.len() - 3])
    } else if infinitive.ends_with("eri") {
        (Conjugation::Second, &infinitive[..infinitive.len() - 3])
    } else if infinitive.ends_with("iri") {
        (Conjugation::Fourth, &infinitive[..infinitive.len() - 3])
    } else if infinitive.ends_with('i') && present.ends_with("ior") {
        (Conjugation::Mixed, &infinitive[..infinitive.len() - 1])
    } else if infinitive.ends_with('i') {
        (Conjugation::Third, &infinitive[..infinitive.len() - 1])
    } else {
        return Err(AccidoError::invalid(format!(
            "Invalid infinitive form: '{infinitive}'"
        )));
    };

    let inf_stem = inf_stem.to_string();
    let preptc_stem = match conjugation {
        Conjugation::First => format!("{inf_stem}a"),
        Conjugation::Second => format!("{inf_stem}e"),
        Conjugation::Third => format!("{inf_stem}e"),
        Conjugation::Fourth => format!("{inf_stem}ie"),
        Conjugation::Mixed => format!("{inf_stem}ie"),
        Conjugation::Irregular => unreachable!(),
    };
    let theme = table(conjugation).theme;
    let infinitive = format!("{inf_stem}{theme}");
    Ok((
        conjugation,
        VerbStems {
            inf_stem,
            preptc_stem,
            infinitive,
        },
    ))
}

// ---------------------------------------------------------------------------
// Per-conjugation suffix tables
// ---------------------------------------------------------------------------

struct ConjugationTable {
    /// Active-shaped infinitive ending, used to rebuild the imperfect
    /// subjunctive base for deponents.
    theme: &'static str,
    act_ind: [[&'static str; 6]; 3],
    act_sbj: [&'static str; 6],
    pas_ind: [[&'static str; 6]; 3],
    pas_sbj: [&'static str; 6],
    act_ipe: [&'static str; 2],
    fut_act_ipe: [&'static str; 4],
    pas_ipe: [&'static str; 2],
    fut_pas_ipe: [&'static str; 3],
    pas_inf: &'static str,
}

const FIRST: ConjugationTable = ConjugationTable {
    theme: "are",
    act_ind: [
        ["o", "as", "at", "amus", "atis", "ant"],
        ["abam", "abas", "abat", "abamus", "abatis", "abant"],
        ["abo", "abis", "abit", "abimus", "abitis", "abunt"],
    ],
    act_sbj: ["em", "es", "et", "emus", "etis", "ent"],
    pas_ind: [
        ["or", "aris", "atur", "amur", "amini", "antur"],
        ["abar", "abaris", "abatur", "abamur", "abamini", "abantur"],
        ["abor", "aberis", "abitur", "abimur", "abimini", "abuntur"],
    ],
    pas_sbj: ["er", "eris", "etur", "emur", "emini", "entur"],
    act_ipe: ["a", "ate"],
    fut_act_ipe: ["ato", "ato", "atote", "anto"],
    pas_ipe: ["are", "amini"],
    fut_pas_ipe: ["ator", "ator", "antor"],
    pas_inf: "ari",
};

const SECOND: ConjugationTable = ConjugationTable {
    theme: "ere",
    act_ind: [
        ["eo", "es", "et", "emus", "etis", "ent"],
        ["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
        ["ebo", "ebis", "ebit", "ebimus", "ebitis", "ebunt"],
    ],
    act_sbj: ["eam", "eas", "eat", "eamus", "eatis", "eant"],
    pas_ind: [
        ["eor", "eris", "etur", "emur", "emini", "entur"],
        ["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
        ["ebor", "eberis", "ebitur", "ebimur", "ebimini", "ebuntur"],
    ],
    pas_sbj: ["ear", "earis", "eatur", "eamur", "eamini", "eantur"],
    act_ipe: ["e", "ete"],
    fut_act_ipe: ["eto", "eto", "etote", "ento"],
    pas_ipe: ["ere", "emini"],
    fut_pas_ipe: ["etor", "etor", "entor"],
    pas_inf: "eri",
};

const THIRD: ConjugationTable = ConjugationTable {
    theme: "ere",
    act_ind: [
        ["o", "is", "it", "imus", "itis", "unt"],
        ["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
        ["am", "es", "et", "emus", "etis", "ent"],
    ],
    act_sbj: ["am", "as", "at", "amus", "atis", "ant"],
    pas_ind: [
        ["or", "eris", "itur", "imur", "imini", "untur"],
        ["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
        ["ar", "eris", "etur", "emur", "emini", "entur"],
    ],
    pas_sbj: ["ar", "aris", "atur", "amur", "amini", "antur"],
    act_ipe: ["e", "ite"],
    fut_act_ipe: ["ito", "ito", "itote", "unto"],
    pas_ipe: ["ere", "imini"],
    fut_pas_ipe: ["itor", "itor", "untor"],
    pas_inf: "i",
};

const FOURTH: ConjugationTable = ConjugationTable {
    theme: "ire",
    act_ind: [
        ["io", "is", "it", "imus", "itis", "iunt"],
        ["iebam", "iebas", "iebat", "iebamus", "iebatis", "iebant"],
        ["iam", "ies", "iet", "iemus", "ietis", "ient"],
    ],
    act_sbj: ["iam", "ias", "iat", "iamus", "iatis", "iant"],
    pas_ind: [
        ["ior", "iris", "itur", "imur", "imini", "iuntur"],
        ["iebar", "iebaris", "iebatur", "iebamur", "iebamini", "iebantur"],
        ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
    ],
    pas_sbj: ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    act_ipe: ["i", "ite"],
    fut_act_ipe: ["ito", "ito", "itote", "iunto"],
    pas_ipe: ["ire", "imini"],
    fut_pas_ipe: ["itor", "itor", "iuntor"],
    pas_inf: "iri",
};

const MIXED: ConjugationTable = ConjugationTable {
    theme: "ere",
    act_ind: [
        ["io", "is", "it", "imus", "itis", "iunt"],
        ["iebam", "iebas", "iebat", "iebamus", "iebatis", "iebant"],
        ["iam", "ies", "iet", "iemus", "ietis", "ient"],
    ],
    act_sbj: ["iam", "ias", "iat", "iamus", "iatis", "iant"],
    pas_ind: [
        ["ior", "eris", "itur", "imur", "imini", "iuntur"],
        ["iebar", "iebaris", "iebatur", "iebamur", "iebamini", "iebantur"],
        ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
    ],
    pas_sbj: ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    act_ipe: ["e", "ite"],
    fut_act_ipe: ["ito", "ito", "itote", "iunto"],
    pas_ipe: ["ere", "imini"],
    fut_pas_ipe: ["itor", "itor", "iuntor"],
    pas_inf: "i",
};

fn table(conjugation: Conjugation) -> &'static ConjugationTable {
    match conjugation {
        Conjugation::First => &FIRST,
        Conjugation::Second => &SECOND,
        Conjugation::Third => &THIRD,
        Conjugation::Fourth => &FOURTH,
        Conjugation::Mixed | Conjugation::Irregular => &MIXED,
    }
}

// ---------------------------------------------------------------------------
// Paradigm builders (shared with the irregular-verb tables)
// ---------------------------------------------------------------------------

pub(crate) const SIX: [(Number, Person); 6] = [
    (Number::Singular, Person::First),
    (Number::Singular, Person::Second),
    (Number::Singular, Person::Third),
    (Number::Plural, Person::First),
    (Number::Plural, Person::Second),
    (Number::Plural, Person::Third),
];

pub(crate) fn finite(
    tense: Tense,
    voice: Voice,
    mood: Mood,
    number: Number,
    person: Person,
) -> EndingKey {
    EndingKey::Verb {
        tense,
        voice,
        mood,
        number,
        person,
    }
}

pub(crate) fn fill_six(
    endings: &mut Endings,
    tense: Tense,
    voice: Voice,
    mood: Mood,
    forms: [String; 6],
) {
    for ((number, person), form) in SIX.into_iter().zip(forms) {
        endings.insert(
            finite(tense, voice, mood, number, person),
            EndingValue::Single(form),
        );
    }
}

fn fill_suffixed(
    endings: &mut Endings,
    tense: Tense,
    voice: Voice,
    mood: Mood,
    stem: &str,
    suffixes: [&str; 6],
) {
    fill_six(
        endings,
        tense,
        voice,
        mood,
        suffixes.map(|s| format!("{stem}{s}")),
    );
}

/// Fill the perfect-system active cells, which are identical across the
/// conjugations: perfect, pluperfect and future-perfect indicative, perfect
/// and pluperfect subjunctive, and the perfect infinitive.
pub(crate) fn perfect_system_active(endings: &mut Endings, perfect: &str, stem: &str) {
    use Mood::{Indicative, Subjunctive};
    use Tense::{FuturePerfect, Perfect, Pluperfect};
    use Voice::Active;

    let forms = [
        perfect.to_string(),
        format!("{stem}isti"),
        format!("{stem}it"),
        format!("{stem}imus"),
        format!("{stem}istis"),
        format!("{stem}erunt"),
    ];
    fill_six(endings, Perfect, Active, Indicative, forms);

    fill_suffixed(
        endings,
        Pluperfect,
        Active,
        Indicative,
        stem,
        ["eram", "eras", "erat", "eramus", "eratis", "erant"],
    );
    fill_suffixed(
        endings,
        FuturePerfect,
        Active,
        Indicative,
        stem,
        ["ero", "eris", "erit", "erimus", "eritis", "erint"],
    );
    fill_suffixed(
        endings,
        Perfect,
        Active,
        Subjunctive,
        stem,
        ["erim", "eris", "erit", "erimus", "eritis", "erint"],
    );
    fill_suffixed(
        endings,
        Pluperfect,
        Active,
        Subjunctive,
        stem,
        ["issem", "isses", "isset", "issemus", "issetis", "issent"],
    );
    endings.insert(
        EndingKey::Infinitive {
            tense: Perfect,
            voice: Active,
        },
        EndingValue::single(format!("{stem}isse")),
    );
}

/// Fill the periphrastic perfect-system passive cells from the ppp
/// (`portatus sum`, `portati sumus`, ...) plus the future and perfect passive
/// infinitives.
pub(crate) fn perfect_system_passive(endings: &mut Endings, ppp: &str) {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, FuturePerfect, Perfect, Pluperfect};
    use Voice::Passive;

    let stem = &ppp[..ppp.len() - 2];
    let blocks: [(Tense, Mood, [&str; 6]); 5] = [
        (Perfect, Indicative, ["sum", "es", "est", "sumus", "estis", "sunt"]),
        (Pluperfect, Indicative, ["eram", "eras", "erat", "eramus", "eratis", "erant"]),
        (FuturePerfect, Indicative, ["ero", "eris", "erit", "erimus", "eritis", "erunt"]),
        (Perfect, Subjunctive, ["sim", "sis", "sit", "simus", "sitis", "sint"]),
        (Pluperfect, Subjunctive, ["essem", "esses", "esset", "essemus", "essetis", "essent"]),
    ];
    for (tense, mood, aux) in blocks {
        let forms = [
            format!("{ppp} {}", aux[0]),
            format!("{ppp} {}", aux[1]),
            format!("{ppp} {}", aux[2]),
            format!("{stem}i {}", aux[3]),
            format!("{stem}i {}", aux[4]),
            format!("{stem}i {}", aux[5]),
        ];
        fill_six(endings, tense, Passive, mood, forms);
    }
    endings.insert(
        EndingKey::Infinitive {
            tense: Future,
            voice: Passive,
        },
        EndingValue::single(format!("{stem}um iri")),
    );
    endings.insert(
        EndingKey::Infinitive {
            tense: Perfect,
            voice: Passive,
        },
        EndingValue::single(format!("{stem}us esse")),
    );
}

const CASES: [Case; 6] = [
    Case::Nominative,
    Case::Vocative,
    Case::Accusative,
    Case::Genitive,
    Case::Dative,
    Case::Ablative,
];

fn ptc(tense: Tense, voice: Voice, gender: Gender, case: Case, number: Number) -> EndingKey {
    EndingKey::Participle {
        tense,
        voice,
        gender,
        case,
        number,
    }
}

/// Decline a participle stem over the 1st/2nd-declension pattern (perfect
/// passive participle, future active participle, gerundive).
pub(crate) fn decline_212(endings: &mut Endings, tense: Tense, voice: Voice, stem: &str) {
    let suffixes: [(Gender, [&str; 6], [&str; 6]); 3] = [
        (
            Gender::Masculine,
            ["us", "e", "um", "i", "o", "o"],
            ["i", "i", "os", "orum", "is", "is"],
        ),
        (
            Gender::Feminine,
            ["a", "a", "am", "ae", "ae", "a"],
            ["ae", "ae", "as", "arum", "is", "is"],
        ),
        (
            Gender::Neuter,
            ["um", "um", "um", "i", "o", "o"],
            ["a", "a", "a", "orum", "is", "is"],
        ),
    ];
    for (gender, sg, pl) in suffixes {
        for (case, suffix) in CASES.into_iter().zip(sg) {
            endings.insert(
                ptc(tense, voice, gender, case, Number::Singular),
                EndingValue::single(format!("{stem}{suffix}")),
            );
        }
        for (case, suffix) in CASES.into_iter().zip(pl) {
            endings.insert(
                ptc(tense, voice, gender, case, Number::Plural),
                EndingValue::single(format!("{stem}{suffix}")),
            );
        }
    }
}

/// Decline a present active participle from its nominative singular and
/// oblique stem (`portans`, `portant-`). Third-declension i-stem: the
/// ablative singular admits both `-i` and `-e`.
pub(crate) fn present_participle(endings: &mut Endings, nom_sg: &str, oblique: &str) {
    use Number::{Plural, Singular};
    use Tense::Present;
    use Voice::Active;

    for gender in [Gender::Masculine, Gender::Feminine, Gender::Neuter] {
        let acc_sg = if gender == Gender::Neuter {
            nom_sg.to_string()
        } else {
            format!("{oblique}em")
        };
        let sg: [(Case, EndingValue); 6] = [
            (Case::Nominative, EndingValue::single(nom_sg)),
            (Case::Vocative, EndingValue::single(nom_sg)),
            (Case::Accusative, EndingValue::Single(acc_sg)),
            (Case::Genitive, EndingValue::single(format!("{oblique}is"))),
            (Case::Dative, EndingValue::single(format!("{oblique}i"))),
            (
                Case::Ablative,
                EndingValue::multiple([format!("{oblique}i"), format!("{oblique}e")]),
            ),
        ];
        for (case, value) in sg {
            endings.insert(ptc(Present, Active, gender, case, Singular), value);
        }

        let nom_pl = if gender == Gender::Neuter {
            format!("{oblique}ia")
        } else {
            format!("{oblique}es")
        };
        let pl: [(Case, String); 6] = [
            (Case::Nominative, nom_pl.clone()),
            (Case::Vocative, nom_pl.clone()),
            (Case::Accusative, nom_pl),
            (Case::Genitive, format!("{oblique}ium")),
            (Case::Dative, format!("{oblique}ibus")),
            (Case::Ablative, format!("{oblique}ibus")),
        ];
        for (case, form) in pl {
            endings.insert(
                ptc(Present, Active, gender, case, Plural),
                EndingValue::Single(form),
            );
        }
    }
}

/// Fill the gerund cells from the `-nd-` base (`portand-`).
pub(crate) fn gerund_cells(endings: &mut Endings, base: &str) {
    let cells = [
        (Case::Accusative, "um"),
        (Case::Genitive, "i"),
        (Case::Dative, "o"),
        (Case::Ablative, "o"),
    ];
    for (case, suffix) in cells {
        endings.insert(
            EndingKey::Gerund { case },
            EndingValue::single(format!("{base}{suffix}")),
        );
    }
}

/// Fill the supine cells from the supine stem (`portat-`).
pub(crate) fn supine_cells(endings: &mut Endings, stem: &str) {
    endings.insert(
        EndingKey::Supine {
            case: Case::Accusative,
        },
        EndingValue::single(format!("{stem}um")),
    );
    endings.insert(
        EndingKey::Supine {
            case: Case::Ablative,
        },
        EndingValue::single(format!("{stem}u")),
    );
}

// ---------------------------------------------------------------------------
// Full paradigm generation
// ---------------------------------------------------------------------------

fn generate(
    conjugation: Conjugation,
    stems: &VerbStems,
    present: &str,
    perfect: Option<&str>,
    ppp: Option<&str>,
    flags: &VerbFlags,
) -> Endings {
    use Mood::{Imperative, Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::{Active, Passive};

    let t = table(conjugation);
    let stem = stems.inf_stem.as_str();
    let ppp_stem = ppp.map(|p| &p[..p.len() - 2]);
    let fap_stem = if flags.fap_fourthpp {
        ppp_stem.map(str::to_string)
    } else {
        ppp.map(|p| format!("{}r", &p[..p.len() - 1]))
    };

    let mut endings = Endings::new();

    // Present-system passive morphology (also the body of a deponent verb).
    if !flags.semi_deponent {
        for (i, tense) in [Present, Imperfect, Future].into_iter().enumerate() {
            fill_suffixed(&mut endings, tense, Passive, Indicative, stem, t.pas_ind[i]);
        }
        fill_suffixed(&mut endings, Present, Passive, Subjunctive, stem, t.pas_sbj);
        fill_suffixed(
            &mut endings,
            Imperfect,
            Passive,
            Subjunctive,
            &stems.infinitive,
            ["r", "ris", "tur", "mur", "mini", "ntur"],
        );
        for ((number, person), suffix) in [
            (Number::Singular, Person::Second),
            (Number::Plural, Person::Second),
        ]
        .into_iter()
        .zip(t.pas_ipe)
        {
            endings.insert(
                finite(Present, Passive, Imperative, number, person),
                EndingValue::single(format!("{stem}{suffix}")),
            );
        }
        for ((number, person), suffix) in [
            (Number::Singular, Person::Second),
            (Number::Singular, Person::Third),
            (Number::Plural, Person::Third),
        ]
        .into_iter()
        .zip(t.fut_pas_ipe)
        {
            endings.insert(
                finite(Future, Passive, Imperative, number, person),
                EndingValue::single(format!("{stem}{suffix}")),
            );
        }
        endings.insert(
            EndingKey::Infinitive {
                tense: Present,
                voice: Passive,
            },
            EndingValue::single(format!("{stem}{}", t.pas_inf)),
        );
    }

    if let (false, Some(ppp)) = (flags.no_ppp, ppp) {
        perfect_system_passive(&mut endings, ppp);
    }

    if !flags.deponent {
        if let (false, Some(perfect)) = (flags.no_perfect || flags.semi_deponent, perfect) {
            perfect_system_active(&mut endings, perfect, &perfect[..perfect.len() - 1]);
        }

        if let (false, Some(fap)) = (flags.no_fap, fap_stem.as_deref()) {
            endings.insert(
                EndingKey::Infinitive {
                    tense: Future,
                    voice: Active,
                },
                EndingValue::single(format!("{fap}us esse")),
            );
        }

        // Present-system active morphology.
        for (i, tense) in [Present, Imperfect, Future].into_iter().enumerate() {
            fill_suffixed(&mut endings, tense, Active, Indicative, stem, t.act_ind[i]);
        }
        // The first principal part is authoritative for its own cell: the
        // 1sg present, or the 3sg for an impersonal verb.
        if flags.impersonal {
            endings.insert(
                finite(Present, Active, Indicative, Number::Singular, Person::Third),
                EndingValue::single(present),
            );
        } else {
            endings.insert(
                finite(Present, Active, Indicative, Number::Singular, Person::First),
                EndingValue::single(present),
            );
        }
        fill_suffixed(&mut endings, Present, Active, Subjunctive, stem, t.act_sbj);
        fill_suffixed(
            &mut endings,
            Imperfect,
            Active,
            Subjunctive,
            &stems.infinitive,
            ["m", "s", "t", "mus", "tis", "nt"],
        );
        for ((number, person), suffix) in [
            (Number::Singular, Person::Second),
            (Number::Plural, Person::Second),
        ]
        .into_iter()
        .zip(t.act_ipe)
        {
            endings.insert(
                finite(Present, Active, Imperative, number, person),
                EndingValue::single(format!("{stem}{suffix}")),
            );
        }
        for ((number, person), suffix) in [
            (Number::Singular, Person::Second),
            (Number::Singular, Person::Third),
            (Number::Plural, Person::Second),
            (Number::Plural, Person::Third),
        ]
        .into_iter()
        .zip(t.fut_act_ipe)
        {
            endings.insert(
                finite(Future, Active, Imperative, number, person),
                EndingValue::single(format!("{stem}{suffix}")),
            );
        }
        endings.insert(
            EndingKey::Infinitive {
                tense: Present,
                voice: Active,
            },
            EndingValue::single(stems.infinitive.clone()),
        );
    }

    // Participles.
    present_participle(
        &mut endings,
        &format!("{}ns", stems.preptc_stem),
        &format!("{}nt", stems.preptc_stem),
    );
    if !flags.no_fap {
        decline_212(
            &mut endings,
            Future,
            Passive,
            &format!("{}nd", stems.preptc_stem),
        );
        if let Some(fap) = fap_stem.as_deref() {
            decline_212(&mut endings, Future, Active, fap);
        }
    }
    if let (false, Some(ppp_stem)) = (flags.no_ppp, ppp_stem) {
        decline_212(&mut endings, Tense::Perfect, Passive, ppp_stem);
    }

    // Verbal nouns.
    if !flags.no_gerund {
        gerund_cells(&mut endings, &format!("{}nd", stems.preptc_stem));
    }
    if let (false, Some(ppp_stem)) = (flags.no_supine, ppp_stem) {
        supine_cells(&mut endings, ppp_stem);
    }

    // Voice relabelling for deponents and semi-deponents.
    let endings = if flags.deponent {
        relabel(endings, |key| match key {
            EndingKey::Verb { voice: Voice::Passive, .. }
            | EndingKey::Infinitive { voice: Voice::Passive, .. } => {
                with_voice(key, Voice::Deponent)
            }
            EndingKey::Participle { voice: Voice::Active, .. } => {
                with_voice(key, Voice::Deponent)
            }
            _ => key,
        })
    } else if flags.semi_deponent {
        relabel(endings, |key| match key {
            // The gerundive keeps its passive sense.
            EndingKey::Participle {
                tense: Tense::Future,
                voice: Voice::Passive,
                ..
            } => key,
            EndingKey::Verb { .. } | EndingKey::Infinitive { .. } | EndingKey::Participle { .. } => {
                with_voice(key, Voice::SemiDeponent)
            }
            _ => key,
        })
    } else {
        endings
    };

    // Defective-verb cell filters.
    let mut endings = endings;
    if flags.active_only {
        endings.retain(|key, _| key.voice() != Some(Voice::Passive));
    }
    if flags.impersonal {
        endings.retain(|key, _| match key {
            EndingKey::Verb { number, person, .. } => {
                *number == Number::Singular && *person == Person::Third
            }
            EndingKey::Infinitive { .. } => false,
            _ => true,
        });
    }
    if flags.impersonal_passive {
        endings.retain(|key, _| match key {
            EndingKey::Verb {
                voice: Voice::Passive,
                number,
                person,
                ..
            } => *number == Number::Singular && *person == Person::Third,
            _ => true,
        });
    }
    if flags.no_future {
        endings.retain(|key, _| {
            !matches!(key.tense(), Some(Tense::Future | Tense::FuturePerfect))
        });
    }

    endings
}

fn with_voice(key: EndingKey, voice: Voice) -> EndingKey {
    match key {
        EndingKey::Verb {
            tense,
            mood,
            number,
            person,
            ..
        } => EndingKey::Verb {
            tense,
            voice,
            mood,
            number,
            person,
        },
        EndingKey::Infinitive { tense, .. } => EndingKey::Infinitive { tense, voice },
        EndingKey::Participle {
            tense,
            gender,
            case,
            number,
            ..
        } => EndingKey::Participle {
            tense,
            voice,
            gender,
            case,
            number,
        },
        other => other,
    }
}

fn relabel(endings: Endings, f: impl Fn(EndingKey) -> EndingKey) -> Endings {
    endings.into_iter().map(|(key, value)| (f(key), value)).collect()
}

fn defective_flags(present: &str) -> VerbFlags {
    VerbFlags {
        no_ppp: irregulars::MISSING_PPP_VERBS.contains(&present),
        no_perfect: irregulars::MISSING_PERFECT_VERBS.contains(&present),
        no_gerund: irregulars::MISSING_GERUND_VERBS.contains(&present),
        no_fap: irregulars::MISSING_FAP_VERBS.contains(&present),
        no_future: irregulars::MISSING_FUTURE_VERBS.contains(&present),
        fap_fourthpp: irregulars::FAP_FOURTHPP_VERBS.contains(&present),
        active_only: irregulars::ACTIVE_ONLY_VERBS.contains(&present),
        impersonal: irregulars::IMPERSONAL_VERBS.contains(&present),
        impersonal_passive: irregulars::IMPERSONAL_PASSIVE_VERBS.contains(&present),
        ..VerbFlags::default()
    }
}
