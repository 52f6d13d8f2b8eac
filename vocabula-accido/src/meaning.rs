//! English meanings attached to word entities.

use std::fmt;

/// One or more English meanings, ordered so the first is the principal one.
///
/// Multiple meanings let Latin-to-English questions accept synonyms while
/// English-to-Latin prompts stick to the principal meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meaning {
    Single(String),
    Multiple(Vec<String>),
}

impl Meaning {
    pub fn single(meaning: impl Into<String>) -> Meaning {
        Meaning::Single(meaning.into())
    }

    pub fn multiple<I, S>(meanings: I) -> Meaning
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Meaning::Multiple(meanings.into_iter().map(Into::into).collect())
    }

    /// The principal meaning.
    pub fn principal(&self) -> &str {
        match self {
            Meaning::Single(meaning) => meaning,
            Meaning::Multiple(meanings) => &meanings[0],
        }
    }

    /// All meanings, principal first.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        match self {
            Meaning::Single(meaning) => std::slice::from_ref(meaning).iter(),
            Meaning::Multiple(meanings) => meanings.iter(),
        }
        .map(String::as_str)
    }

    /// Merge another meaning into this one, preserving order and dropping
    /// duplicates. Used when a vocab list defines the same word twice.
    pub fn merge(&mut self, other: &Meaning) {
        let mut all: Vec<String> = self.all().map(str::to_string).collect();
        for meaning in other.all() {
            if !all.iter().any(|m| m == meaning) {
                all.push(meaning.to_string());
            }
        }
        *self = match all.len() {
            1 => Meaning::Single(all.swap_remove(0)),
            _ => Meaning::Multiple(all),
        };
    }
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.principal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_order_and_dedupes() {
        let mut m = Meaning::multiple(["hide", "conceal"]);
        m.merge(&Meaning::multiple(["conceal", "cover"]));
        assert_eq!(m.all().collect::<Vec<_>>(), ["hide", "conceal", "cover"]);
        assert_eq!(m.principal(), "hide");
    }
}
