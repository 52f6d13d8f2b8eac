//! Standalone Latin adverbs.
//!
//! An adverb's paradigm is just its degree forms. Comparison is derived by
//! suffix rule from the positive (fortiter → fortius → fortissime), with an
//! irregular table for bene, male and friends; a closed set of adverbs does
//! not compare at all.

use std::fmt;

use crate::ending::{build_reverse, EndingKey, Endings, EndingValue, ReverseIndex};
use crate::error::Result;
use crate::meaning::Meaning;
use crate::tags::Degree;

/// A Latin adverb with its degree forms.
#[derive(Debug, Clone)]
pub struct Adverb {
    pub positive: String,
    pub meaning: Meaning,
    endings: Endings,
    reverse: ReverseIndex,
}

const IRREGULAR_ADVERBS: &[(&str, &str, &str)] = &[
    ("bene", "melius", "optime"),
    ("male", "peius", "pessime"),
    ("magnopere", "magis", "maxime"),
    ("multum", "plus", "plurimum"),
    ("parum", "minus", "minime"),
    ("diu", "diutius", "diutissime"),
    ("saepe", "saepius", "saepissime"),
];

/// Adverbs with no comparative or superlative.
const UNCOMPARABLE_ADVERBS: &[&str] = &[
    "statim", "semper", "iam", "nunc", "etiam", "quoque", "mox", "cras",
    "heri", "hodie", "ibi", "hic", "umquam", "numquam", "usquam", "nusquam",
];

impl Adverb {
    pub fn new(positive: &str, meaning: Meaning) -> Result<Adverb> {
        let mut endings = Endings::new();
        endings.insert(
            EndingKey::Adverb { degree: Degree::Positive },
            EndingValue::single(positive),
        );

        if let Some((comparative, superlative)) = compare(positive) {
            endings.insert(
                EndingKey::Adverb { degree: Degree::Comparative },
                EndingValue::Single(comparative),
            );
            endings.insert(
                EndingKey::Adverb { degree: Degree::Superlative },
                EndingValue::Single(superlative),
            );
        }

        let reverse = build_reverse(&endings);
        Ok(Adverb {
            positive: positive.to_string(),
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

fn compare(positive: &str) -> Option<(String, String)> {
    if UNCOMPARABLE_ADVERBS.contains(&positive) {
        return None;
    }
    if let Some((_, cmp, spr)) = IRREGULAR_ADVERBS.iter().find(|(pos, ..)| *pos == positive) {
        return Some(((*cmp).to_string(), (*spr).to_string()));
    }

    // fortiter -> fort-, prudenter -> prudent-, laete -> laet-, cito -> cit-
    let stem = positive
        .strip_suffix("iter")
        .or_else(|| positive.strip_suffix("er"))
        .or_else(|| positive.strip_suffix('e'))
        .or_else(|| positive.strip_suffix('o'))?;
    Some((format!("{stem}ius"), format!("{stem}issime")))
}

impl PartialEq for Adverb {
    fn eq(&self, other: &Self) -> bool {
        self.positive == other.positive
            && self.meaning == other.meaning
            && self.endings == other.endings
    }
}

impl fmt::Display for Adverb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.meaning, self.positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degree(adverb: &Adverb, degree: Degree) -> Option<&str> {
        adverb
            .endings()
            .get(&EndingKey::Adverb { degree })
            .map(EndingValue::principal)
    }

    #[test]
    fn iter_adverbs_compare_from_the_stem() {
        let a = Adverb::new("fortiter", Meaning::single("bravely")).unwrap();
        assert_eq!(degree(&a, Degree::Comparative), Some("fortius"));
        assert_eq!(degree(&a, Degree::Superlative), Some("fortissime"));
    }

    #[test]
    fn e_adverbs_compare_from_the_stem() {
        let a = Adverb::new("laete", Meaning::single("happily")).unwrap();
        assert_eq!(degree(&a, Degree::Comparative), Some("laetius"));
    }

    #[test]
    fn irregular_comparison() {
        let a = Adverb::new("bene", Meaning::single("well")).unwrap();
        assert_eq!(degree(&a, Degree::Comparative), Some("melius"));
        assert_eq!(degree(&a, Degree::Superlative), Some("optime"));
    }

    #[test]
    fn uncomparable_adverbs_have_only_the_positive() {
        let a = Adverb::new("semper", Meaning::single("always")).unwrap();
        assert_eq!(degree(&a, Degree::Positive), Some("semper"));
        assert_eq!(degree(&a, Degree::Comparative), None);
    }
}
