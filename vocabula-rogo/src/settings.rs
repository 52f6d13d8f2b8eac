//! Session settings: the closed schema and its validation.
//!
//! Every boolean flag and both integers are required; unknown keys are
//! rejected. The three validation error shapes are byte-exact and tested:
//!
//! ```text
//! Required settings are missing: 'number-of-questions'. (InvalidSettingsError)
//! Unrecognised settings were provided: 'exclude-gerbils'. (InvalidSettingsError)
//! Setting 'number-of-questions' must be an integer (got type str). (InvalidSettingsError)
//! ```

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::rules::ENDING_RULES;

/// Word-level exclusion flags: per-PoS blankets and per-subcategory.
pub(crate) const WORD_SETTINGS: &[&str] = &[
    "exclude-verbs",
    "exclude-nouns",
    "exclude-adjectives",
    "exclude-pronouns",
    "exclude-regulars",
    "exclude-verb-first-conjugation",
    "exclude-verb-second-conjugation",
    "exclude-verb-third-conjugation",
    "exclude-verb-fourth-conjugation",
    "exclude-verb-mixed-conjugation",
    "exclude-verb-irregular-conjugation",
    "exclude-deponents",
    "exclude-noun-first-declension",
    "exclude-noun-second-declension",
    "exclude-noun-third-declension",
    "exclude-noun-fourth-declension",
    "exclude-noun-fifth-declension",
    "exclude-noun-irregular-declension",
    "exclude-adjective-212-declension",
    "exclude-adjective-third-declension",
];

/// Question-type gates.
pub(crate) const QUESTION_SETTINGS: &[&str] = &[
    "include-typein-engtolat",
    "include-typein-lattoeng",
    "include-parse",
    "include-inflect",
    "include-principal-parts",
    "include-multiplechoice-engtolat",
    "include-multiplechoice-lattoeng",
];

/// English-side rendering flags.
pub(crate) const ENGLISH_SETTINGS: &[&str] = &[
    "english-subjunctives",
    "english-verbal-nouns",
    "english-synonyms",
    "english-similar-words",
];

const INT_SETTINGS: &[(&str, usize)] = &[
    ("number-of-questions", 1),
    ("number-multiplechoice-options", 2),
];

/// All recognized boolean keys.
static BOOL_SETTINGS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    WORD_SETTINGS
        .iter()
        .chain(ENDING_RULES.iter().map(|(name, _)| name))
        .chain(QUESTION_SETTINGS.iter())
        .chain(ENGLISH_SETTINGS.iter())
        .copied()
        .collect()
});

/// A validated settings object.
#[derive(Debug, Clone)]
pub struct Settings {
    bools: HashMap<&'static str, bool>,
    pub number_of_questions: usize,
    pub number_multiplechoice_options: usize,
}

impl Settings {
    /// Validate a JSON object against the schema. Fails fast on the first
    /// violated shape: missing keys, then unrecognized keys, then value
    /// types, then integer ranges.
    pub fn from_json(value: &Value) -> Result<Settings, SettingsError> {
        let object = value
            .as_object()
            .ok_or_else(|| SettingsError::WrongShape(json_type_name(value)))?;

        let mut missing: Vec<String> = BOOL_SETTINGS
            .iter()
            .copied()
            .filter(|key| !object.contains_key(*key))
            .map(str::to_string)
            .collect();
        missing.extend(
            INT_SETTINGS
                .iter()
                .filter(|(key, _)| !object.contains_key(*key))
                .map(|(key, _)| key.to_string()),
        );
        if !missing.is_empty() {
            missing.sort();
            return Err(SettingsError::Missing(missing));
        }

        let mut unrecognised: Vec<String> = object
            .keys()
            .filter(|key| {
                !BOOL_SETTINGS.iter().any(|k| k == key)
                    && !INT_SETTINGS.iter().any(|(k, _)| k == key)
            })
            .cloned()
            .collect();
        if !unrecognised.is_empty() {
            unrecognised.sort();
            return Err(SettingsError::Unrecognised(unrecognised));
        }

        let mut bools = HashMap::with_capacity(BOOL_SETTINGS.len());
        for &key in BOOL_SETTINGS.iter() {
            let value = &object[key];
            let Some(flag) = value.as_bool() else {
                return Err(SettingsError::WrongType {
                    key: key.to_string(),
                    expected: SettingKind::Bool,
                    got: json_type_name(value),
                });
            };
            bools.insert(key, flag);
        }

        let mut ints = [0usize; 2];
        for (slot, (key, minimum)) in INT_SETTINGS.iter().enumerate() {
            let value = &object[*key];
            // Booleans are not integers here, whatever JSON thinks.
            let parsed = match value {
                Value::Number(n) if n.is_u64() => n.as_u64().map(|n| n as usize),
                _ => None,
            };
            let Some(parsed) = parsed else {
                return Err(SettingsError::WrongType {
                    key: key.to_string(),
                    expected: SettingKind::Int,
                    got: json_type_name(value),
                });
            };
            if parsed < *minimum {
                return Err(SettingsError::OutOfRange {
                    key: key.to_string(),
                    minimum: *minimum,
                });
            }
            ints[slot] = parsed;
        }

        Ok(Settings {
            bools,
            number_of_questions: ints[0],
            number_multiplechoice_options: ints[1],
        })
    }

    /// Whether a boolean flag is set. Unknown keys read as unset.
    pub fn enabled(&self, key: &str) -> bool {
        self.bools.get(key).copied().unwrap_or(false)
    }

    /// A settings object with every flag off and the integer minimums,
    /// useful as a test baseline.
    pub fn all_disabled() -> Settings {
        let bools = BOOL_SETTINGS.iter().map(|&key| (key, false)).collect();
        Settings {
            bools,
            number_of_questions: 1,
            number_multiplechoice_options: 2,
        }
    }

    /// Set a boolean flag by name; unknown names are ignored.
    pub fn set(&mut self, key: &str, value: bool) {
        if let Some(&name) = BOOL_SETTINGS.iter().find(|&&k| k == key) {
            self.bools.insert(name, value);
        }
    }

    /// The full list of recognized setting names, for clients that want to
    /// generate a settings template.
    pub fn schema_keys() -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = BOOL_SETTINGS.clone();
        keys.extend(INT_SETTINGS.iter().map(|(key, _)| *key));
        keys.sort_unstable();
        keys
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    Int,
}

/// Settings validation failures. The `Display` renderings are part of the
/// wire contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Required keys absent, alphabetically sorted.
    Missing(Vec<String>),
    /// Unknown keys present, alphabetically sorted.
    Unrecognised(Vec<String>),
    /// A value of the wrong type.
    WrongType {
        key: String,
        expected: SettingKind,
        got: &'static str,
    },
    /// An integer below its minimum.
    OutOfRange { key: String, minimum: usize },
    /// The settings body was not a JSON object at all.
    WrongShape(&'static str),
    /// Every question type was disabled (or dropped for lack of words).
    NoTypesEnabled,
    /// The exclusion flags removed every word.
    EmptyVocab,
}

fn quoted(keys: &[String]) -> String {
    keys.iter()
        .map(|key| format!("'{key}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Missing(keys) => write!(
                f,
                "Required settings are missing: {}. (InvalidSettingsError)",
                quoted(keys)
            ),
            SettingsError::Unrecognised(keys) => write!(
                f,
                "Unrecognised settings were provided: {}. (InvalidSettingsError)",
                quoted(keys)
            ),
            SettingsError::WrongType { key, expected, got } => {
                let expected = match expected {
                    SettingKind::Bool => "a boolean",
                    SettingKind::Int => "an integer",
                };
                write!(
                    f,
                    "Setting '{key}' must be {expected} (got type {got}). (InvalidSettingsError)"
                )
            }
            SettingsError::OutOfRange { key, minimum } => write!(
                f,
                "Setting '{key}' must be at least {minimum}. (InvalidSettingsError)"
            ),
            SettingsError::WrongShape(got) => write!(
                f,
                "Settings must be a JSON object (got type {got}). (InvalidSettingsError)"
            ),
            SettingsError::NoTypesEnabled => {
                write!(f, "No question type has been enabled. (InvalidSettingsError)")
            }
            SettingsError::EmptyVocab => write!(
                f,
                "No words in the vocab list after filtering. (InvalidSettingsError)"
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Python-style JSON type names, as the wrong-type template expects.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
