//! The English morphology provider.
//!
//! A narrow seam: [`EnglishMorph`] answers "inflect this lemma into that
//! slot" and "turn this adjective into an adverb", nothing more. The
//! default provider is a suffix-rule engine with irregular-form tables; an
//! unknown lemma falls back to the regular rules, never to an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// An English inflection slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnglishTag {
    /// Plural of a noun.
    NounPlural,
    /// Bare verb form (imperatives, infinitive complements).
    VerbBase,
    /// Present tense, non-third-person ("hear").
    VerbPresent,
    /// Present tense, third singular ("hears").
    VerbPresentThird,
    /// Simple past ("heard").
    VerbPast,
    /// Present participle ("hearing").
    VerbPresentParticiple,
    /// Past participle ("heard").
    VerbPastParticiple,
    /// Synthetic comparative ("lighter"); empty when the adjective only
    /// compares periphrastically.
    AdjectiveComparative,
    /// Synthetic superlative ("lightest"); empty likewise.
    AdjectiveSuperlative,
}

/// English morphology behind a narrow interface. Inflections come back
/// best-first; an empty vector means the slot has no synthetic form.
pub trait EnglishMorph: Send + Sync {
    fn inflect(&self, lemma: &str, tag: EnglishTag) -> Vec<String>;
    fn adj_to_adv(&self, lemma: &str) -> Option<String>;
}

/// The default rule-based provider.
pub struct RuleMorph {
    adverb_overrides: HashMap<String, String>,
}

static DEFAULT: Lazy<RuleMorph> = Lazy::new(RuleMorph::new);

/// The process-wide default provider.
pub fn default_morph() -> &'static RuleMorph {
    &DEFAULT
}

impl RuleMorph {
    pub fn new() -> RuleMorph {
        let table: HashMap<String, String> =
            serde_json::from_str(include_str!("../assets/adj_to_adv.json"))
                .unwrap_or_default();
        RuleMorph {
            adverb_overrides: table,
        }
    }
}

impl Default for RuleMorph {
    fn default() -> Self {
        RuleMorph::new()
    }
}

impl EnglishMorph for RuleMorph {
    fn inflect(&self, lemma: &str, tag: EnglishTag) -> Vec<String> {
        match tag {
            EnglishTag::NounPlural => vec![noun_plural(lemma)],
            EnglishTag::VerbBase | EnglishTag::VerbPresent => vec![lemma.to_string()],
            EnglishTag::VerbPresentThird => vec![present_third(lemma)],
            EnglishTag::VerbPast => vec![past(lemma)],
            EnglishTag::VerbPresentParticiple => vec![present_participle(lemma)],
            EnglishTag::VerbPastParticiple => vec![past_participle(lemma)],
            EnglishTag::AdjectiveComparative => synthetic_comparative(lemma)
                .map(|c| vec![c])
                .unwrap_or_default(),
            EnglishTag::AdjectiveSuperlative => synthetic_superlative(lemma)
                .map(|s| vec![s])
                .unwrap_or_default(),
        }
    }

    /// The adjective→adverb formation: override table first, then the
    /// suffix rules (-y → -ily, -ic → -ically, -le → -ly, else + -ly).
    fn adj_to_adv(&self, lemma: &str) -> Option<String> {
        if let Some(adverb) = self.adverb_overrides.get(lemma) {
            return Some(adverb.clone());
        }
        let adverb = if lemma.len() > 1
            && lemma.ends_with('y')
            && !ends_with_vowel(&lemma[..lemma.len() - 1])
        {
            format!("{}ily", &lemma[..lemma.len() - 1])
        } else if lemma.ends_with("ic") {
            format!("{lemma}ally")
        } else if lemma.ends_with("le") {
            format!("{}y", &lemma[..lemma.len() - 1])
        } else {
            format!("{lemma}ly")
        };
        Some(adverb)
    }
}

fn ends_with_vowel(s: &str) -> bool {
    s.chars()
        .last()
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

fn vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for c in word.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups
}

/// Whether the final consonant doubles before -ing/-ed (run → running).
fn doubles_final(lemma: &str) -> bool {
    const DOUBLING_EXCEPTIONS: &[&str] = &[
        "begin", "forget", "permit", "prefer", "occur", "admit", "regret", "refer",
    ];
    if DOUBLING_EXCEPTIONS.contains(&lemma) {
        return true;
    }
    let chars: Vec<char> = lemma.chars().collect();
    if chars.len() < 3 || vowel_groups(lemma) != 1 {
        return false;
    }
    let last = chars[chars.len() - 1];
    let second = chars[chars.len() - 2];
    let third = chars[chars.len() - 3];
    let vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');
    !vowel(last) && !matches!(last, 'w' | 'x' | 'y') && vowel(second) && !vowel(third)
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("sheep", "sheep"),
    ("deer", "deer"),
    ("fish", "fish"),
    ("species", "species"),
    ("series", "series"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("thief", "thieves"),
    ("shelf", "shelves"),
    ("half", "halves"),
    ("self", "selves"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("hero", "heroes"),
    ("echo", "echoes"),
];

fn noun_plural(lemma: &str) -> String {
    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(s, _)| *s == lemma) {
        return (*plural).to_string();
    }
    if lemma.ends_with('y') && !ends_with_vowel(&lemma[..lemma.len() - 1]) {
        return format!("{}ies", &lemma[..lemma.len() - 1]);
    }
    if lemma.ends_with('s')
        || lemma.ends_with('x')
        || lemma.ends_with('z')
        || lemma.ends_with("ch")
        || lemma.ends_with("sh")
    {
        return format!("{lemma}es");
    }
    format!("{lemma}s")
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

/// (base, past, past participle) for the common irregular verbs.
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("be", "was", "been"),
    ("have", "had", "had"),
    ("do", "did", "done"),
    ("go", "went", "gone"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("hear", "heard", "heard"),
    ("take", "took", "taken"),
    ("make", "made", "made"),
    ("come", "came", "come"),
    ("give", "gave", "given"),
    ("find", "found", "found"),
    ("get", "got", "got"),
    ("know", "knew", "known"),
    ("leave", "left", "left"),
    ("run", "ran", "run"),
    ("sit", "sat", "sat"),
    ("stand", "stood", "stood"),
    ("send", "sent", "sent"),
    ("hold", "held", "held"),
    ("bring", "brought", "brought"),
    ("think", "thought", "thought"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("teach", "taught", "taught"),
    ("fight", "fought", "fought"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("tell", "told", "told"),
    ("feel", "felt", "felt"),
    ("keep", "kept", "kept"),
    ("sleep", "slept", "slept"),
    ("lead", "led", "led"),
    ("read", "read", "read"),
    ("meet", "met", "met"),
    ("lose", "lost", "lost"),
    ("win", "won", "won"),
    ("sing", "sang", "sung"),
    ("drink", "drank", "drunk"),
    ("swim", "swam", "swum"),
    ("begin", "began", "begun"),
    ("eat", "ate", "eaten"),
    ("drive", "drove", "driven"),
    ("ride", "rode", "ridden"),
    ("rise", "rose", "risen"),
    ("write", "wrote", "written"),
    ("speak", "spoke", "spoken"),
    ("break", "broke", "broken"),
    ("choose", "chose", "chosen"),
    ("steal", "stole", "stolen"),
    ("wear", "wore", "worn"),
    ("bear", "bore", "borne"),
    ("fall", "fell", "fallen"),
    ("fly", "flew", "flown"),
    ("draw", "drew", "drawn"),
    ("throw", "threw", "thrown"),
    ("grow", "grew", "grown"),
    ("blow", "blew", "blown"),
    ("show", "showed", "shown"),
    ("build", "built", "built"),
    ("burn", "burnt", "burnt"),
    ("put", "put", "put"),
    ("cut", "cut", "cut"),
    ("hit", "hit", "hit"),
    ("set", "set", "set"),
    ("shut", "shut", "shut"),
    ("hurt", "hurt", "hurt"),
    ("let", "let", "let"),
    ("spread", "spread", "spread"),
    ("strike", "struck", "struck"),
    ("flee", "fled", "fled"),
    ("hang", "hung", "hung"),
];

fn present_third(lemma: &str) -> String {
    match lemma {
        "be" => return "is".to_string(),
        "have" => return "has".to_string(),
        "do" => return "does".to_string(),
        "go" => return "goes".to_string(),
        "must" | "can" | "ought" => return lemma.to_string(),
        _ => {}
    }
    if lemma.ends_with('y') && !ends_with_vowel(&lemma[..lemma.len() - 1]) {
        return format!("{}ies", &lemma[..lemma.len() - 1]);
    }
    if lemma.ends_with('s')
        || lemma.ends_with('x')
        || lemma.ends_with('z')
        || lemma.ends_with("ch")
        || lemma.ends_with("sh")
        || lemma.ends_with('o')
    {
        return format!("{lemma}es");
    }
    format!("{lemma}s")
}

fn past(lemma: &str) -> String {
    match lemma {
        "must" => return "had to".to_string(),
        "ought" => return "was ought".to_string(),
        "can" => return "could".to_string(),
        _ => {}
    }
    if let Some((_, past, _)) = IRREGULAR_VERBS.iter().find(|(base, ..)| *base == lemma) {
        return (*past).to_string();
    }
    regular_past(lemma)
}

fn past_participle(lemma: &str) -> String {
    match lemma {
        "must" => return "had to".to_string(),
        "ought" => return "ought".to_string(),
        _ => {}
    }
    if let Some((_, _, participle)) = IRREGULAR_VERBS.iter().find(|(base, ..)| *base == lemma) {
        return (*participle).to_string();
    }
    regular_past(lemma)
}

fn regular_past(lemma: &str) -> String {
    if lemma.ends_with('e') {
        return format!("{lemma}d");
    }
    if lemma.ends_with('y') && !ends_with_vowel(&lemma[..lemma.len() - 1]) {
        return format!("{}ied", &lemma[..lemma.len() - 1]);
    }
    if let (true, Some(last)) = (doubles_final(lemma), lemma.chars().last()) {
        return format!("{lemma}{last}ed");
    }
    format!("{lemma}ed")
}

fn present_participle(lemma: &str) -> String {
    match lemma {
        "be" => return "being".to_string(),
        "must" => return "having to".to_string(),
        "ought" => return "being ought".to_string(),
        "die" => return "dying".to_string(),
        "lie" => return "lying".to_string(),
        "tie" => return "tying".to_string(),
        _ => {}
    }
    if lemma.ends_with("ee") || lemma.ends_with("ye") || lemma.ends_with("oe") {
        return format!("{lemma}ing");
    }
    if lemma.ends_with('e') {
        return format!("{}ing", &lemma[..lemma.len() - 1]);
    }
    if let (true, Some(last)) = (doubles_final(lemma), lemma.chars().last()) {
        return format!("{lemma}{last}ing");
    }
    format!("{lemma}ing")
}

// ---------------------------------------------------------------------------
// Adjectives
// ---------------------------------------------------------------------------

const IRREGULAR_COMPARISON: &[(&str, &str, &str)] = &[
    ("good", "better", "best"),
    ("bad", "worse", "worst"),
    ("far", "farther", "farthest"),
    ("little", "less", "least"),
    ("much", "more", "most"),
    ("many", "more", "most"),
    ("late", "later", "latest"),
];

/// Whether an adjective takes synthetic -er/-est comparison: one syllable,
/// or two syllables ending in -y.
fn compares_synthetically(lemma: &str) -> bool {
    let groups = vowel_groups(lemma);
    groups == 1 || (groups == 2 && lemma.ends_with('y'))
}

fn synthetic_comparative(lemma: &str) -> Option<String> {
    if let Some((_, cmp, _)) = IRREGULAR_COMPARISON.iter().find(|(base, ..)| *base == lemma) {
        return Some((*cmp).to_string());
    }
    if !compares_synthetically(lemma) {
        return None;
    }
    Some(degree_form(lemma, "er"))
}

fn synthetic_superlative(lemma: &str) -> Option<String> {
    if let Some((_, _, spr)) = IRREGULAR_COMPARISON.iter().find(|(base, ..)| *base == lemma) {
        return Some((*spr).to_string());
    }
    if !compares_synthetically(lemma) {
        return None;
    }
    Some(degree_form(lemma, "est"))
}

fn degree_form(lemma: &str, suffix: &str) -> String {
    if lemma.ends_with('y') && !ends_with_vowel(&lemma[..lemma.len() - 1]) {
        return format!("{}i{suffix}", &lemma[..lemma.len() - 1]);
    }
    if lemma.ends_with('e') {
        return format!("{}{suffix}", &lemma[..lemma.len() - 1]);
    }
    if let (true, Some(last)) = (doubles_final(lemma), lemma.chars().last()) {
        return format!("{lemma}{last}{suffix}");
    }
    format!("{lemma}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(lemma: &str, tag: EnglishTag) -> String {
        default_morph().inflect(lemma, tag).remove(0)
    }

    #[test]
    fn verb_slots() {
        assert_eq!(first("hear", EnglishTag::VerbPresentThird), "hears");
        assert_eq!(first("hear", EnglishTag::VerbPastParticiple), "heard");
        assert_eq!(first("carry", EnglishTag::VerbPast), "carried");
        assert_eq!(first("run", EnglishTag::VerbPresentParticiple), "running");
        assert_eq!(first("love", EnglishTag::VerbPresentParticiple), "loving");
        assert_eq!(first("see", EnglishTag::VerbPresentParticiple), "seeing");
        assert_eq!(first("watch", EnglishTag::VerbPresentThird), "watches");
    }

    #[test]
    fn noun_plurals() {
        assert_eq!(first("farmer", EnglishTag::NounPlural), "farmers");
        assert_eq!(first("city", EnglishTag::NounPlural), "cities");
        assert_eq!(first("wolf", EnglishTag::NounPlural), "wolves");
        assert_eq!(first("man", EnglishTag::NounPlural), "men");
    }

    #[test]
    fn adjective_comparison() {
        assert_eq!(first("light", EnglishTag::AdjectiveComparative), "lighter");
        assert_eq!(first("happy", EnglishTag::AdjectiveSuperlative), "happiest");
        assert_eq!(first("big", EnglishTag::AdjectiveComparative), "bigger");
        assert_eq!(first("good", EnglishTag::AdjectiveComparative), "better");
        // Long adjectives only compare periphrastically.
        assert!(default_morph()
            .inflect("beautiful", EnglishTag::AdjectiveComparative)
            .is_empty());
    }

    #[test]
    fn adverb_formation() {
        let m = default_morph();
        assert_eq!(m.adj_to_adv("happy").unwrap(), "happily");
        assert_eq!(m.adj_to_adv("sad").unwrap(), "sadly");
        assert_eq!(m.adj_to_adv("gentle").unwrap(), "gently");
        assert_eq!(m.adj_to_adv("basic").unwrap(), "basically");
        assert_eq!(m.adj_to_adv("good").unwrap(), "well");
        assert_eq!(m.adj_to_adv("public").unwrap(), "publicly");
    }

    #[test]
    fn modal_special_cases() {
        assert_eq!(first("must", EnglishTag::VerbPast), "had to");
        assert_eq!(first("can", EnglishTag::VerbPast), "could");
        assert_eq!(first("must", EnglishTag::VerbPresentParticiple), "having to");
    }
}
