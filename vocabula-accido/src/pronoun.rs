//! Latin pronouns.
//!
//! Pronoun endings follow little pattern, so the supported pronouns form a
//! closed set with explicit gender × case × number tables. Pronouns have no
//! vocative.

use std::fmt;

use tracing::debug;

use crate::ending::{build_reverse, EndingKey, Endings, EndingValue, ReverseIndex};
use crate::error::{AccidoError, Result};
use crate::meaning::Meaning;
use crate::tags::{Case, Gender, Number};

/// A Latin pronoun with its explicit ending table.
#[derive(Debug, Clone)]
pub struct Pronoun {
    pub pronoun: String,
    pub meaning: Meaning,
    pub mascnom: String,
    pub femnom: String,
    pub neutnom: String,
    endings: Endings,
    reverse: ReverseIndex,
}

impl Pronoun {
    /// Build a pronoun. The name must be the masculine nominative singular
    /// of one of the supported pronouns.
    pub fn new(pronoun: &str, meaning: Meaning) -> Result<Pronoun> {
        debug!(pronoun, "constructing pronoun");

        let table = pronoun_table(pronoun).ok_or_else(|| {
            AccidoError::invalid(format!("Pronoun '{pronoun}' not recognised."))
        })?;

        let endings = build_table(table);
        let nom = |gender: Gender| {
            endings[&EndingKey::Pronoun {
                gender,
                case: Case::Nominative,
                number: Number::Singular,
            }]
                .principal()
                .to_string()
        };
        let mascnom = nom(Gender::Masculine);
        let femnom = nom(Gender::Feminine);
        let neutnom = nom(Gender::Neuter);

        let reverse = build_reverse(&endings);
        Ok(Pronoun {
            pronoun: pronoun.to_string(),
            meaning,
            mascnom,
            femnom,
            neutnom,
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

    /// The three nominative singulars, in gender order.
    pub fn principal_parts(&self) -> Vec<String> {
        vec![
            self.mascnom.clone(),
            self.femnom.clone(),
            self.neutnom.clone(),
        ]
    }
}

impl PartialEq for Pronoun {
    fn eq(&self, other: &Self) -> bool {
        self.pronoun == other.pronoun
            && self.meaning == other.meaning
            && self.endings == other.endings
    }
}

impl fmt::Display for Pronoun {
    /// The dictionary entry, e.g. `this: hic, haec, hoc`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}, {}",
            self.meaning, self.mascnom, self.femnom, self.neutnom
        )
    }
}

/// Per-gender forms in case order (nominative, accusative, genitive,
/// dative, ablative) × (singular, plural).
type GenderForms = [&'static str; 10];

fn build_table(table: [GenderForms; 3]) -> Endings {
    let genders = [Gender::Masculine, Gender::Feminine, Gender::Neuter];
    let cases = [
        Case::Nominative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
        Case::Ablative,
    ];
    let mut endings = Endings::new();
    for (gender, forms) in genders.into_iter().zip(table) {
        for (i, case) in cases.into_iter().enumerate() {
            endings.insert(
                EndingKey::Pronoun {
                    gender,
                    case,
                    number: Number::Singular,
                },
                EndingValue::single(forms[i]),
            );
            endings.insert(
                EndingKey::Pronoun {
                    gender,
                    case,
                    number: Number::Plural,
                },
                EndingValue::single(forms[i + 5]),
            );
        }
    }
    endings
}

#[rustfmt::skip]
fn pronoun_table(pronoun: &str) -> Option<[GenderForms; 3]> {
    // nom acc gen dat abl (sg), then the same five plural.
    match pronoun {
        "hic" => Some([
            ["hic", "hunc", "huius", "huic", "hoc", "hi", "hos", "horum", "his", "his"],
            ["haec", "hanc", "huius", "huic", "hac", "hae", "has", "harum", "his", "his"],
            ["hoc", "hoc", "huius", "huic", "hoc", "haec", "haec", "horum", "his", "his"],
        ]),
        "ille" => Some([
            ["ille", "illum", "illius", "illi", "illo", "illi", "illos", "illorum", "illis", "illis"],
            ["illa", "illam", "illius", "illi", "illa", "illae", "illas", "illarum", "illis", "illis"],
            ["illud", "illud", "illius", "illi", "illo", "illa", "illa", "illorum", "illis", "illis"],
        ]),
        "is" => Some([
            ["is", "eum", "eius", "ei", "eo", "ei", "eos", "eorum", "eis", "eis"],
            ["ea", "eam", "eius", "ei", "ea", "eae", "eas", "earum", "eis", "eis"],
            ["id", "id", "eius", "ei", "eo", "ea", "ea", "eorum", "eis", "eis"],
        ]),
        "ipse" => Some([
            ["ipse", "ipsum", "ipsius", "ipsi", "ipso", "ipsi", "ipsos", "ipsorum", "ipsis", "ipsis"],
            ["ipsa", "ipsam", "ipsius", "ipsi", "ipsa", "ipsae", "ipsas", "ipsarum", "ipsis", "ipsis"],
            ["ipsum", "ipsum", "ipsius", "ipsi", "ipso", "ipsa", "ipsa", "ipsorum", "ipsis", "ipsis"],
        ]),
        "idem" => Some([
            ["idem", "eundem", "eiusdem", "eidem", "eodem", "eidem", "eosdem", "eorundem", "eisdem", "eisdem"],
            ["eadem", "eandem", "eiusdem", "eidem", "eadem", "eaedem", "easdem", "earundem", "eisdem", "eisdem"],
            ["idem", "idem", "eiusdem", "eidem", "eodem", "eadem", "eadem", "eorundem", "eisdem", "eisdem"],
        ]),
        "qui" => Some([
            ["qui", "quem", "cuius", "cui", "quo", "qui", "quos", "quorum", "quibus", "quibus"],
            ["quae", "quam", "cuius", "cui", "qua", "quae", "quas", "quarum", "quibus", "quibus"],
            ["quod", "quod", "cuius", "cui", "quo", "quae", "quae", "quorum", "quibus", "quibus"],
        ]),
        "quidam" => Some([
            ["quidam", "quendam", "cuiusdam", "cuidam", "quodam", "quidam", "quosdam", "quorundam", "quibusdam", "quibusdam"],
            ["quaedam", "quandam", "cuiusdam", "cuidam", "quadam", "quaedam", "quasdam", "quarundam", "quibusdam", "quibusdam"],
            ["quoddam", "quoddam", "cuiusdam", "cuidam", "quodam", "quaedam", "quaedam", "quorundam", "quibusdam", "quibusdam"],
        ]),
        _ => None,
    }
}
