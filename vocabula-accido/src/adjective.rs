//! Latin adjectives.
//!
//! Both 2-1-2 and third-declension (one, two or three termination)
//! adjectives are supported. The comparative and superlative are
//! synthesized from the positive stem under the standard allomorphy
//! (`-er` stems double the `r`, the six `-lis` adjectives take `-illimus`),
//! with an irregular-comparison table for bonus, malus and friends. Each
//! adjective also carries its adverbial formation per degree unless it is
//! one of the adjectives with no adverb.

use std::fmt;

use tracing::debug;

use crate::ending::{build_reverse, EndingKey, Endings, EndingValue, ReverseIndex};
use crate::error::{AccidoError, Result};
use crate::meaning::Meaning;
use crate::tags::{Case, Degree, Gender, Number};

/// Declensional pattern of an adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdjectiveDeclension {
    /// 1st/2nd declension with three endings (laetus, laeta, laetum).
    TwoOneTwo,
    /// Third declension, with one, two or three nominative terminations.
    Third,
}

/// A Latin adjective with its complete ending table.
#[derive(Debug, Clone)]
pub struct Adjective {
    pub principal_parts: Vec<String>,
    pub declension: AdjectiveDeclension,
    /// Termination count for third-declension adjectives (1, 2 or 3).
    pub termination: Option<u8>,
    pub meaning: Meaning,
    endings: Endings,
    reverse: ReverseIndex,
}

const LIS_ADJECTIVES: &[&str] = &[
    "facilis",
    "difficilis",
    "similis",
    "dissimilis",
    "gracilis",
    "humilis",
];

/// Adjectives with irregular comparison: comparative stem, superlative
/// stem, and the three adverb forms where an adverb exists at all.
#[allow(clippy::type_complexity)]
const IRREGULAR_COMPARISON: &[(&str, &str, &str, Option<(&str, &str, &str)>)] = &[
    ("bonus", "melior", "optim", Some(("bene", "melius", "optime"))),
    ("malus", "peior", "pessim", Some(("male", "peius", "pessime"))),
    ("magnus", "maior", "maxim", None),
    ("parvus", "minor", "minim", None),
    ("multus", "plus", "plurim", None),
    ("nequam", "nequior", "nequissim", None),
    ("frugi", "frugalior", "frugalissim", Some(("frugaliter", "frugalius", "frugalissime"))),
    ("dexter", "dexterior", "dextim", None),
];

const NO_ADVERB_ADJECTIVES: &[&str] = &["ingens"];

impl Adjective {
    /// Build an adjective from its principal parts. 2-1-2 and
    /// three-termination adjectives take three parts, one- and
    /// two-termination third-declension adjectives take two.
    pub fn new(
        principal_parts: &[String],
        termination: Option<u8>,
        declension: AdjectiveDeclension,
        meaning: Meaning,
    ) -> Result<Adjective> {
        debug!(?principal_parts, ?termination, ?declension, "constructing adjective");

        if principal_parts.is_empty() {
            return Err(AccidoError::invalid("Adjective has no principal parts."));
        }
        let mascnom = principal_parts[0].as_str();

        let (pos_stem, positive) = match (declension, termination) {
            (AdjectiveDeclension::TwoOneTwo, _) => {
                if principal_parts.len() != 3 {
                    return Err(AccidoError::invalid(format!(
                        "2-1-2 adjectives must have 3 principal parts. (adjective '{mascnom}' given)"
                    )));
                }
                let femnom = &principal_parts[1];
                let stem = femnom[..femnom.len() - 1].to_string();
                let cells = positive_212(
                    mascnom,
                    femnom,
                    &principal_parts[2],
                    &stem,
                );
                (stem, cells)
            }
            (AdjectiveDeclension::Third, Some(1)) => {
                if principal_parts.len() != 2 {
                    return Err(AccidoError::invalid(format!(
                        "First-termination adjectives must have 2 principal parts. (adjective '{mascnom}' given)"
                    )));
                }
                let mascgen = &principal_parts[1];
                if !mascgen.ends_with("is") {
                    return Err(AccidoError::invalid(format!(
                        "Invalid genitive form: '{mascgen}' (must end in '-is')"
                    )));
                }
                let stem = mascgen[..mascgen.len() - 2].to_string();
                let cells = positive_third(mascnom, mascnom, mascnom, mascgen, &stem);
                (stem, cells)
            }
            (AdjectiveDeclension::Third, Some(2)) => {
                if principal_parts.len() != 2 {
                    return Err(AccidoError::invalid(format!(
                        "Second-termination adjectives must have 2 principal parts. (adjective '{mascnom}' given)"
                    )));
                }
                let stem = mascnom[..mascnom.len() - 2].to_string();
                let genitive = format!("{stem}is");
                let cells =
                    positive_third(mascnom, mascnom, &principal_parts[1], &genitive, &stem);
                (stem, cells)
            }
            (AdjectiveDeclension::Third, Some(3)) => {
                if principal_parts.len() != 3 {
                    return Err(AccidoError::invalid(format!(
                        "Third-termination adjectives must have 3 principal parts. (adjective '{mascnom}' given)"
                    )));
                }
                let femnom = &principal_parts[1];
                let stem = femnom[..femnom.len() - 2].to_string();
                let genitive = format!("{stem}is");
                let cells =
                    positive_third(mascnom, femnom, &principal_parts[2], &genitive, &stem);
                (stem, cells)
            }
            (AdjectiveDeclension::Third, t) => {
                return Err(AccidoError::invalid(format!(
                    "Invalid adjective termination: '{t:?}' (adjective '{mascnom}' given)"
                )));
            }
        };

        let irregular = IRREGULAR_COMPARISON
            .iter()
            .find(|(name, ..)| *name == mascnom);
        let (cmp_stem, spr_stem) = match irregular {
            Some((_, cmp, spr, _)) => ((*cmp).to_string(), (*spr).to_string()),
            None => {
                let cmp = format!("{pos_stem}ior");
                let spr = if mascnom.ends_with("er") {
                    format!("{mascnom}rim")
                } else if LIS_ADJECTIVES.contains(&mascnom) {
                    format!("{pos_stem}lim")
                } else {
                    format!("{pos_stem}issim")
                };
                (cmp, spr)
            }
        };

        let mut endings = positive;
        comparative_cells(&mut endings, &cmp_stem, &pos_stem);
        superlative_cells(&mut endings, &spr_stem);

        // Adverbial formation per degree, unless suppressed.
        let no_adverb = NO_ADVERB_ADJECTIVES.contains(&mascnom)
            || matches!(irregular, Some((_, _, _, None)));
        if !no_adverb {
            let (pos_adv, cmp_adv, spr_adv) = match irregular {
                Some((_, _, _, Some((pos, cmp, spr)))) => {
                    ((*pos).to_string(), (*cmp).to_string(), (*spr).to_string())
                }
                _ => {
                    let pos = if declension == AdjectiveDeclension::TwoOneTwo {
                        format!("{pos_stem}e")
                    } else if mascnom.ends_with("ns") {
                        format!("{pos_stem}er")
                    } else {
                        format!("{pos_stem}iter")
                    };
                    (pos, format!("{pos_stem}ius"), format!("{spr_stem}e"))
                }
            };
            endings.insert(
                EndingKey::Adverb { degree: Degree::Positive },
                EndingValue::Single(pos_adv),
            );
            endings.insert(
                EndingKey::Adverb { degree: Degree::Comparative },
                EndingValue::Single(cmp_adv),
            );
            endings.insert(
                EndingKey::Adverb { degree: Degree::Superlative },
                EndingValue::Single(spr_adv),
            );
        }

        let reverse = build_reverse(&endings);
        Ok(Adjective {
            principal_parts: principal_parts.to_vec(),
            declension,
            termination: if declension == AdjectiveDeclension::Third {
                termination
            } else {
                None
            },
            meaning,
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
}

impl PartialEq for Adjective {
    fn eq(&self, other: &Self) -> bool {
        self.principal_parts == other.principal_parts
            && self.declension == other.declension
            && self.termination == other.termination
            && self.meaning == other.meaning
            && self.endings == other.endings
    }
}

impl fmt::Display for Adjective {
    /// The dictionary entry, e.g. `light: levis, leve, (3-2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.principal_parts.join(", ");
        match self.termination {
            Some(t) => write!(f, "{}: {}, (3-{})", self.meaning, parts, t),
            None => write!(f, "{}: {}, (2-1-2)", self.meaning, parts),
        }
    }
}

fn akey(degree: Degree, gender: Gender, case: Case, number: Number) -> EndingKey {
    EndingKey::Adjective {
        degree,
        gender,
        case,
        number,
    }
}

const CASES: [Case; 6] = [
    Case::Nominative,
    Case::Vocative,
    Case::Accusative,
    Case::Genitive,
    Case::Dative,
    Case::Ablative,
];

fn insert_gender_block(
    endings: &mut Endings,
    degree: Degree,
    gender: Gender,
    sg: [String; 6],
    pl: [String; 6],
) {
    for (case, form) in CASES.into_iter().zip(sg) {
        endings.insert(
            akey(degree, gender, case, Number::Singular),
            EndingValue::Single(form),
        );
    }
    for (case, form) in CASES.into_iter().zip(pl) {
        endings.insert(
            akey(degree, gender, case, Number::Plural),
            EndingValue::Single(form),
        );
    }
}

fn positive_212(mascnom: &str, femnom: &str, neutnom: &str, stem: &str) -> Endings {
    let mut endings = Endings::new();
    let vocative = if mascnom.ends_with("er") {
        mascnom.to_string()
    } else {
        format!("{stem}e")
    };
    insert_gender_block(
        &mut endings,
        Degree::Positive,
        Gender::Masculine,
        [
            mascnom.into(),
            vocative,
            format!("{stem}um"),
            format!("{stem}i"),
            format!("{stem}o"),
            format!("{stem}o"),
        ],
        [
            format!("{stem}i"),
            format!("{stem}i"),
            format!("{stem}os"),
            format!("{stem}orum"),
            format!("{stem}is"),
            format!("{stem}is"),
        ],
    );
    insert_gender_block(
        &mut endings,
        Degree::Positive,
        Gender::Feminine,
        [
            femnom.into(),
            femnom.into(),
            format!("{stem}am"),
            format!("{stem}ae"),
            format!("{stem}ae"),
            format!("{stem}a"),
        ],
        [
            format!("{stem}ae"),
            format!("{stem}ae"),
            format!("{stem}as"),
            format!("{stem}arum"),
            format!("{stem}is"),
            format!("{stem}is"),
        ],
    );
    insert_gender_block(
        &mut endings,
        Degree::Positive,
        Gender::Neuter,
        [
            neutnom.into(),
            neutnom.into(),
            neutnom.into(),
            format!("{stem}i"),
            format!("{stem}o"),
            format!("{stem}o"),
        ],
        [
            format!("{stem}a"),
            format!("{stem}a"),
            format!("{stem}a"),
            format!("{stem}orum"),
            format!("{stem}is"),
            format!("{stem}is"),
        ],
    );
    endings
}

fn positive_third(
    mascnom: &str,
    femnom: &str,
    neutnom: &str,
    genitive: &str,
    stem: &str,
) -> Endings {
    let mut endings = Endings::new();
    for (gender, nominative) in [
        (Gender::Masculine, mascnom),
        (Gender::Feminine, femnom),
        (Gender::Neuter, neutnom),
    ] {
        let accusative = if gender == Gender::Neuter {
            nominative.to_string()
        } else {
            format!("{stem}em")
        };
        let nom_pl = if gender == Gender::Neuter {
            format!("{stem}ia")
        } else {
            format!("{stem}es")
        };
        insert_gender_block(
            &mut endings,
            Degree::Positive,
            gender,
            [
                nominative.into(),
                nominative.into(),
                accusative,
                genitive.into(),
                format!("{stem}i"),
                format!("{stem}i"),
            ],
            [
                nom_pl.clone(),
                nom_pl.clone(),
                nom_pl,
                format!("{stem}ium"),
                format!("{stem}ibus"),
                format!("{stem}ibus"),
            ],
        );
    }
    endings
}

/// Comparatives decline over the third-declension consonant pattern.
fn comparative_cells(endings: &mut Endings, cmp_stem: &str, pos_stem: &str) {
    let neuter_nom = format!("{pos_stem}ius");
    for gender in [Gender::Masculine, Gender::Feminine, Gender::Neuter] {
        let (nominative, accusative) = if gender == Gender::Neuter {
            (neuter_nom.clone(), neuter_nom.clone())
        } else {
            (cmp_stem.to_string(), format!("{cmp_stem}em"))
        };
        let nom_pl = if gender == Gender::Neuter {
            format!("{cmp_stem}a")
        } else {
            format!("{cmp_stem}es")
        };
        insert_gender_block(
            endings,
            Degree::Comparative,
            gender,
            [
                nominative.clone(),
                nominative,
                accusative,
                format!("{cmp_stem}is"),
                format!("{cmp_stem}i"),
                format!("{cmp_stem}e"),
            ],
            [
                nom_pl.clone(),
                nom_pl.clone(),
                nom_pl,
                format!("{cmp_stem}um"),
                format!("{cmp_stem}ibus"),
                format!("{cmp_stem}ibus"),
            ],
        );
    }
}

/// Superlatives decline over the 1st/2nd-declension pattern.
fn superlative_cells(endings: &mut Endings, spr_stem: &str) {
    let blocks: [(Gender, [&str; 6], [&str; 6]); 3] = [
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
    for (gender, sg, pl) in blocks {
        insert_gender_block(
            endings,
            Degree::Superlative,
            gender,
            sg.map(|s| format!("{spr_stem}{s}")),
            pl.map(|s| format!("{spr_stem}{s}")),
        );
    }
}
