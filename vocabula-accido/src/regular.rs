//! Non-inflecting words: prepositions, conjunctions, interjections.

use std::fmt;

use crate::ending::{build_reverse, EndingKey, Endings, EndingValue, ReverseIndex};
use crate::meaning::Meaning;

/// A word with a single, invariant form.
#[derive(Debug, Clone)]
pub struct RegularWord {
    pub word: String,
    pub meaning: Meaning,
    endings: Endings,
    reverse: ReverseIndex,
}

impl RegularWord {
    pub fn new(word: &str, meaning: Meaning) -> RegularWord {
        let mut endings = Endings::new();
        endings.insert(EndingKey::Regular, EndingValue::single(word));
        let reverse = build_reverse(&endings);
        RegularWord {
            word: word.to_string(),
            meaning,
            endings,
            reverse,
        }
    }

    pub fn endings(&self) -> &Endings {
        &self.endings
    }

    pub(crate) fn reverse(&self) -> &ReverseIndex {
        &self.reverse
    }
}

impl PartialEq for RegularWord {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.meaning == other.meaning
    }
}

impl fmt::Display for RegularWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.meaning, self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_form() {
        let et = RegularWord::new("et", Meaning::single("and"));
        assert_eq!(et.endings().len(), 1);
        assert_eq!(et.endings()[&EndingKey::Regular].principal(), "et");
        assert_eq!(et.to_string(), "and: et");
    }
}
