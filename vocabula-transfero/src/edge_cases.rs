//! Edge-case word lists for English inflection.

/// Stative verbs whose imperfect accepts the plain English past
/// ("I knew") alongside the progressive periphrases.
pub(crate) const STATIVE_VERBS: &[&str] = &[
    "appear", "assume", "believe", "become", "care", "concern", "contain",
    "desire", "dislike", "doubt", "enjoy", "exist", "fear", "feel", "forget",
    "hate", "have", "hear", "imagine", "include", "involve", "know", "lack",
    "like", "love", "matter", "mean", "need", "notice", "own", "possess",
    "prefer", "remain", "remember", "resemble", "see", "seem", "smell",
    "sound", "suppose", "taste", "understand", "want", "wish",
];

/// Adjectives that do not take synthetic comparison; their comparative and
/// superlative lead with "more"/"most".
pub(crate) const NOT_COMPARABLE_ADJECTIVES: &[&str] = &[
    "absolute", "alive", "annual", "complete", "daily", "dead", "digital",
    "domestic", "eternal", "fascinating", "final", "foreign", "horizontal",
    "identical", "impossible", "infinite", "interesting", "legal", "local",
    "married", "maximum", "minimum", "national", "natural", "perfect",
    "possible", "pregnant", "private", "public", "single", "unique",
    "universal", "vertical", "wooden",
];
