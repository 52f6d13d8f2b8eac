//! Latin nouns.
//!
//! The declension is inferred from the nominative/genitive pair; a plural
//! genitive marks a plurale tantum. Third-declension i-stems are detected
//! from the shape of the nominative. The personal pronouns ego, tu and se
//! decline like nothing else and are carried as explicit tables.

use std::fmt;

use tracing::debug;

use crate::ending::{build_reverse, EndingKey, Endings, EndingValue, ReverseIndex};
use crate::error::{AccidoError, Result};
use crate::meaning::Meaning;
use crate::syllables::count_syllables;
use crate::tags::{Case, Gender, Number};

/// Declension of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Declension {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Irregular,
}

/// A Latin noun with its complete ending table.
#[derive(Debug, Clone)]
pub struct Noun {
    pub nominative: String,
    pub genitive: Option<String>,
    pub gender: Option<Gender>,
    pub meaning: Meaning,
    pub declension: Declension,
    pub plurale_tantum: bool,
    pub i_stem: bool,
    endings: Endings,
    reverse: ReverseIndex,
}

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

impl Noun {
    /// Build a noun. The genitive and gender may be omitted only for the
    /// irregular personal pronouns (ego, tu, se).
    pub fn new(
        nominative: &str,
        genitive: Option<&str>,
        gender: Option<Gender>,
        meaning: Meaning,
    ) -> Result<Noun> {
        debug!(nominative, ?genitive, ?gender, "constructing noun");

        if let Some(endings) = irregular_noun(nominative) {
            let reverse = build_reverse(&endings);
            return Ok(Noun {
                nominative: nominative.to_string(),
                genitive: None,
                gender: None,
                meaning,
                declension: Declension::Irregular,
                plurale_tantum: false,
                i_stem: false,
                endings,
                reverse,
            });
        }

        let genitive = genitive.ok_or_else(|| {
            AccidoError::invalid(format!(
                "Noun '{nominative}' is not irregular but genitive not provided."
            ))
        })?;
        let gender = gender.ok_or_else(|| {
            AccidoError::invalid(format!(
                "Noun '{nominative}' is not irregular but gender not provided."
            ))
        })?;

        let (declension, stem, plurale_tantum) = find_declension(nominative, genitive)?;

        let (i_stem, stem) = if declension == Declension::Third {
            determine_i_stem(nominative, genitive, gender, &stem, plurale_tantum)
        } else {
            (false, stem)
        };

        let mut endings = decline(declension, nominative, genitive, &stem, i_stem);
        if gender == Gender::Neuter {
            neuter_overrides(&mut endings, declension, nominative, &stem, i_stem)?;
        }
        if plurale_tantum {
            endings.retain(|key, _| key.number() != Some(Number::Singular));
        }

        let reverse = build_reverse(&endings);
        Ok(Noun {
            nominative: nominative.to_string(),
            genitive: Some(genitive.to_string()),
            gender: Some(gender),
            meaning,
            declension,
            plurale_tantum,
            i_stem,
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

    /// The principal parts: nominative and genitive.
    pub fn principal_parts(&self) -> Vec<String> {
        let mut parts = vec![self.nominative.clone()];
        parts.extend(self.genitive.clone());
        parts
    }
}

impl PartialEq for Noun {
    fn eq(&self, other: &Self) -> bool {
        self.nominative == other.nominative
            && self.genitive == other.genitive
            && self.gender == other.gender
            && self.meaning == other.meaning
            && self.endings == other.endings
    }
}

impl fmt::Display for Noun {
    /// The dictionary entry, e.g. `farmer: agricola, agricolae, (m)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.genitive, self.gender) {
            (Some(genitive), Some(gender)) => write!(
                f,
                "{}: {}, {}, ({})",
                self.meaning,
                self.nominative,
                genitive,
                gender.shorthand()
            ),
            _ => write!(f, "{}: {}, (irregular)", self.meaning, self.nominative),
        }
    }
}

/// Declension pick table, keyed on the genitive ending. The order matters:
/// `-ei` must be tested before `-i`, `-arum`/`-orum` before `-um`.
fn find_declension(nominative: &str, genitive: &str) -> Result<(Declension, String, bool)> {
    let strip = |n: usize| genitive[..genitive.len() - n].to_string();

    if genitive.ends_with("ei") && nominative.ends_with("es") {
        Ok((Declension::Fifth, strip(2), false))
    } else if genitive.ends_with("ae") {
        Ok((Declension::First, strip(2), false))
    } else if genitive.ends_with("is") {
        Ok((Declension::Third, strip(2), false))
    } else if genitive.ends_with("us") {
        Ok((Declension::Fourth, strip(2), false))
    } else if genitive.ends_with("arum") {
        Ok((Declension::First, strip(4), true))
    } else if genitive.ends_with("orum") {
        Ok((Declension::Second, strip(4), true))
    } else if genitive.ends_with("uum") {
        Ok((Declension::Fourth, strip(3), true))
    } else if genitive.ends_with('i') {
        Ok((Declension::Second, strip(1), false))
    } else if genitive.ends_with("um") {
        Ok((Declension::Third, strip(2), true))
    } else {
        Err(AccidoError::invalid(format!(
            "Invalid genitive form: '{genitive}'"
        )))
    }
}

fn determine_i_stem(
    nominative: &str,
    genitive: &str,
    gender: Gender,
    stem: &str,
    plurale_tantum: bool,
) -> (bool, String) {
    if plurale_tantum {
        // moenium -> moen-
        if let Some(short) = genitive.strip_suffix("ium") {
            return (true, short.to_string());
        }
        return (false, stem.to_string());
    }

    let i_stem = match gender {
        Gender::Masculine | Gender::Feminine => {
            let parisyllabic = (nominative.ends_with("is") || nominative.ends_with("es"))
                && count_syllables(nominative) == count_syllables(genitive);
            let chars: Vec<char> = nominative.chars().collect();
            let monosyllabic = count_syllables(nominative) == 1
                && chars.len() >= 2
                && CONSONANTS.contains(chars[chars.len() - 1])
                && CONSONANTS.contains(chars[chars.len() - 2]);
            parisyllabic || monosyllabic
        }
        Gender::Neuter => {
            nominative.ends_with('e') || nominative.ends_with("al") || nominative.ends_with("ar")
        }
    };
    (i_stem, stem.to_string())
}

fn nkey(case: Case, number: Number) -> EndingKey {
    EndingKey::Noun { case, number }
}

fn decline(
    declension: Declension,
    nominative: &str,
    genitive: &str,
    stem: &str,
    i_stem: bool,
) -> Endings {
    use Case::{Ablative, Accusative, Dative, Genitive, Nominative, Vocative};
    use Number::{Plural, Singular};

    let mut cells: Vec<(Case, Number, String)> = Vec::with_capacity(12);
    let mut cell = |case, number, form: String| cells.push((case, number, form));

    match declension {
        Declension::First => {
            cell(Nominative, Singular, nominative.into());
            cell(Vocative, Singular, nominative.into());
            cell(Accusative, Singular, format!("{stem}am"));
            cell(Genitive, Singular, genitive.into());
            cell(Dative, Singular, format!("{stem}ae"));
            cell(Ablative, Singular, format!("{stem}a"));
            cell(Nominative, Plural, format!("{stem}ae"));
            cell(Vocative, Plural, format!("{stem}ae"));
            cell(Accusative, Plural, format!("{stem}as"));
            cell(Genitive, Plural, format!("{stem}arum"));
            cell(Dative, Plural, format!("{stem}is"));
            cell(Ablative, Plural, format!("{stem}is"));
        }
        Declension::Second => {
            cell(Nominative, Singular, nominative.into());
            let vocative = if nominative.ends_with("er") {
                nominative.to_string()
            } else {
                format!("{stem}e")
            };
            cell(Vocative, Singular, vocative);
            cell(Accusative, Singular, format!("{stem}um"));
            cell(Genitive, Singular, genitive.into());
            cell(Dative, Singular, format!("{stem}o"));
            cell(Ablative, Singular, format!("{stem}o"));
            cell(Nominative, Plural, format!("{stem}i"));
            cell(Vocative, Plural, format!("{stem}i"));
            cell(Accusative, Plural, format!("{stem}os"));
            cell(Genitive, Plural, format!("{stem}orum"));
            cell(Dative, Plural, format!("{stem}is"));
            cell(Ablative, Plural, format!("{stem}is"));
        }
        Declension::Third => {
            cell(Nominative, Singular, nominative.into());
            cell(Vocative, Singular, nominative.into());
            cell(Accusative, Singular, format!("{stem}em"));
            cell(Genitive, Singular, genitive.into());
            cell(Dative, Singular, format!("{stem}i"));
            cell(Ablative, Singular, format!("{stem}e"));
            cell(Nominative, Plural, format!("{stem}es"));
            cell(Vocative, Plural, format!("{stem}es"));
            cell(Accusative, Plural, format!("{stem}es"));
            let genitive_plural = if i_stem {
                format!("{stem}ium")
            } else {
                format!("{stem}um")
            };
            cell(Genitive, Plural, genitive_plural);
            cell(Dative, Plural, format!("{stem}ibus"));
            cell(Ablative, Plural, format!("{stem}ibus"));
        }
        Declension::Fourth => {
            cell(Nominative, Singular, nominative.into());
            cell(Vocative, Singular, nominative.into());
            cell(Accusative, Singular, format!("{stem}um"));
            cell(Genitive, Singular, format!("{stem}us"));
            cell(Dative, Singular, format!("{stem}ui"));
            cell(Ablative, Singular, format!("{stem}u"));
            cell(Nominative, Plural, format!("{stem}us"));
            cell(Vocative, Plural, format!("{stem}us"));
            cell(Accusative, Plural, format!("{stem}us"));
            cell(Genitive, Plural, format!("{stem}uum"));
            cell(Dative, Plural, format!("{stem}ibus"));
            cell(Ablative, Plural, format!("{stem}ibus"));
        }
        Declension::Fifth => {
            cell(Nominative, Singular, nominative.into());
            cell(Vocative, Singular, nominative.into());
            cell(Accusative, Singular, format!("{stem}em"));
            cell(Genitive, Singular, format!("{stem}ei"));
            cell(Dative, Singular, format!("{stem}ei"));
            cell(Ablative, Singular, format!("{stem}e"));
            cell(Nominative, Plural, format!("{stem}es"));
            cell(Vocative, Plural, format!("{stem}es"));
            cell(Accusative, Plural, format!("{stem}es"));
            cell(Genitive, Plural, format!("{stem}erum"));
            cell(Dative, Plural, format!("{stem}ebus"));
            cell(Ablative, Plural, format!("{stem}ebus"));
        }
        Declension::Irregular => unreachable!("irregular nouns use explicit tables"),
    }

    cells
        .into_iter()
        .map(|(case, number, form)| (nkey(case, number), EndingValue::Single(form)))
        .collect()
}

/// Neuter rule: nominative, accusative and vocative agree in every number,
/// with i-stem and fourth-declension adjustments.
fn neuter_overrides(
    endings: &mut Endings,
    declension: Declension,
    nominative: &str,
    stem: &str,
    i_stem: bool,
) -> Result<()> {
    use Case::{Ablative, Accusative, Dative, Genitive, Nominative, Vocative};
    use Number::{Plural, Singular};

    if declension == Declension::Fifth {
        return Err(AccidoError::invalid(format!(
            "Fifth declension nouns cannot be neuter. (noun '{nominative}' given)"
        )));
    }

    let mut set = |case, number, form: String| {
        endings.insert(nkey(case, number), EndingValue::Single(form));
    };

    set(Vocative, Singular, nominative.into());
    set(Accusative, Singular, nominative.into());

    if declension == Declension::Third && i_stem {
        set(Ablative, Singular, format!("{stem}i"));
        set(Nominative, Plural, format!("{stem}ia"));
        set(Vocative, Plural, format!("{stem}ia"));
        set(Accusative, Plural, format!("{stem}ia"));
        set(Genitive, Plural, format!("{stem}ium"));
        return Ok(());
    }

    if declension == Declension::Fourth {
        set(Dative, Singular, format!("{stem}u"));
        set(Nominative, Plural, format!("{stem}ua"));
        set(Vocative, Plural, format!("{stem}ua"));
        set(Accusative, Plural, format!("{stem}ua"));
        return Ok(());
    }

    set(Nominative, Plural, format!("{stem}a"));
    set(Vocative, Plural, format!("{stem}a"));
    set(Accusative, Plural, format!("{stem}a"));
    Ok(())
}

/// Explicit tables for the irregularly declined personal pronouns that the
/// vocab format treats as nouns.
fn irregular_noun(nominative: &str) -> Option<Endings> {
    use Case::{Ablative, Accusative, Dative, Genitive, Nominative, Vocative};
    use Number::{Plural, Singular};

    let mut endings = Endings::new();
    let mut set = |case, number, value: EndingValue| {
        endings.insert(nkey(case, number), value);
    };
    let s = EndingValue::single;

    match nominative {
        "ego" => {
            set(Nominative, Singular, s("ego"));
            set(Vocative, Singular, s("ego"));
            set(Accusative, Singular, s("me"));
            set(Genitive, Singular, s("mei"));
            set(Dative, Singular, s("mihi"));
            set(Ablative, Singular, s("me"));
            set(Nominative, Plural, s("nos"));
            set(Vocative, Plural, s("nos"));
            set(Accusative, Plural, s("nos"));
            set(Genitive, Plural, EndingValue::multiple(["nostri", "nostrum"]));
            set(Dative, Plural, s("nobis"));
            set(Ablative, Plural, s("nobis"));
        }
        "tu" => {
            set(Nominative, Singular, s("tu"));
            set(Vocative, Singular, s("tu"));
            set(Accusative, Singular, s("te"));
            set(Genitive, Singular, s("tui"));
            set(Dative, Singular, s("tibi"));
            set(Ablative, Singular, s("te"));
            set(Nominative, Plural, s("vos"));
            set(Vocative, Plural, s("vos"));
            set(Accusative, Plural, s("vos"));
            set(Genitive, Plural, EndingValue::multiple(["vestri", "vestrum"]));
            set(Dative, Plural, s("vobis"));
            set(Ablative, Plural, s("vobis"));
        }
        "se" => {
            set(Accusative, Singular, s("se"));
            set(Genitive, Singular, s("sui"));
            set(Dative, Singular, s("sibi"));
            set(Ablative, Singular, s("se"));
            set(Accusative, Plural, s("se"));
            set(Genitive, Plural, s("sui"));
            set(Dative, Plural, s("sibi"));
            set(Ablative, Plural, s("se"));
        }
        _ => return None,
    }
    Some(endings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(noun: &'a Noun, case: Case, number: Number) -> &'a str {
        noun.endings()[&nkey(case, number)].principal()
    }

    #[test]
    fn first_declension() {
        let n = Noun::new(
            "agricola",
            Some("agricolae"),
            Some(Gender::Masculine),
            Meaning::single("farmer"),
        )
        .unwrap();
        assert_eq!(n.declension, Declension::First);
        assert_eq!(get(&n, Case::Accusative, Number::Singular), "agricolam");
        assert_eq!(get(&n, Case::Genitive, Number::Plural), "agricolarum");
        assert_eq!(n.to_string(), "farmer: agricola, agricolae, (m)");
    }

    #[test]
    fn second_declension_er_vocative() {
        let n = Noun::new(
            "puer",
            Some("pueri"),
            Some(Gender::Masculine),
            Meaning::single("boy"),
        )
        .unwrap();
        assert_eq!(get(&n, Case::Vocative, Number::Singular), "puer");

        let servus = Noun::new(
            "servus",
            Some("servi"),
            Some(Gender::Masculine),
            Meaning::single("slave"),
        )
        .unwrap();
        assert_eq!(get(&servus, Case::Vocative, Number::Singular), "serve");
    }

    #[test]
    fn third_declension_i_stem() {
        // Parisyllabic: navis, navis.
        let navis = Noun::new(
            "navis",
            Some("navis"),
            Some(Gender::Feminine),
            Meaning::single("ship"),
        )
        .unwrap();
        assert!(navis.i_stem);
        assert_eq!(get(&navis, Case::Genitive, Number::Plural), "navium");

        // Monosyllabic with double consonant: urbs, urbis.
        let urbs = Noun::new(
            "urbs",
            Some("urbis"),
            Some(Gender::Feminine),
            Meaning::single("city"),
        )
        .unwrap();
        assert!(urbs.i_stem);
        assert_eq!(get(&urbs, Case::Genitive, Number::Plural), "urbium");

        // Plain consonant stem: mercator, mercatoris.
        let mercator = Noun::new(
            "mercator",
            Some("mercatoris"),
            Some(Gender::Masculine),
            Meaning::single("merchant"),
        )
        .unwrap();
        assert!(!mercator.i_stem);
        assert_eq!(get(&mercator, Case::Genitive, Number::Plural), "mercatorum");
    }

    #[test]
    fn neuter_i_stem() {
        let mare = Noun::new(
            "mare",
            Some("maris"),
            Some(Gender::Neuter),
            Meaning::single("sea"),
        )
        .unwrap();
        assert_eq!(get(&mare, Case::Ablative, Number::Singular), "mari");
        assert_eq!(get(&mare, Case::Nominative, Number::Plural), "maria");
        assert_eq!(get(&mare, Case::Accusative, Number::Singular), "mare");
    }

    #[test]
    fn fourth_declension_neuter() {
        let cornu = Noun::new(
            "cornu",
            Some("cornus"),
            Some(Gender::Neuter),
            Meaning::single("horn"),
        )
        .unwrap();
        assert_eq!(get(&cornu, Case::Nominative, Number::Plural), "cornua");
        assert_eq!(get(&cornu, Case::Dative, Number::Singular), "cornu");
    }

    #[test]
    fn fifth_declension() {
        let res = Noun::new(
            "res",
            Some("rei"),
            Some(Gender::Feminine),
            Meaning::single("thing"),
        )
        .unwrap();
        assert_eq!(res.declension, Declension::Fifth);
        assert_eq!(get(&res, Case::Dative, Number::Plural), "rebus");
    }

    #[test]
    fn fifth_declension_neuter_rejected() {
        let err = Noun::new(
            "res",
            Some("rei"),
            Some(Gender::Neuter),
            Meaning::single("thing"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Fifth declension"));
    }

    #[test]
    fn plurale_tantum() {
        let castra = Noun::new(
            "castra",
            Some("castrorum"),
            Some(Gender::Neuter),
            Meaning::single("camp"),
        )
        .unwrap();
        assert!(castra.plurale_tantum);
        assert!(!castra
            .endings()
            .contains_key(&nkey(Case::Nominative, Number::Singular)));
        assert_eq!(get(&castra, Case::Nominative, Number::Plural), "castra");
    }

    #[test]
    fn irregular_ego() {
        let ego = Noun::new("ego", None, None, Meaning::single("I")).unwrap();
        assert_eq!(ego.declension, Declension::Irregular);
        assert_eq!(get(&ego, Case::Dative, Number::Singular), "mihi");
        assert!(ego.endings()[&nkey(Case::Genitive, Number::Plural)].contains("nostrum"));
        assert_eq!(ego.to_string(), "I: ego, (irregular)");
    }

    #[test]
    fn missing_metadata_is_an_error() {
        let err = Noun::new("canis", None, None, Meaning::single("dog")).unwrap_err();
        assert!(err.to_string().contains("genitive not provided"));
    }

    #[test]
    fn bad_genitive_is_an_error() {
        let err = Noun::new(
            "canis",
            Some("canow"),
            Some(Gender::Masculine),
            Meaning::single("dog"),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid genitive form: 'canow'"
        );
    }
}
