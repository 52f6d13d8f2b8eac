//! English adverb degree rewrites.

use vocabula_accido::Degree;

/// All English renderings of an adverb at a degree, best first.
pub(crate) fn inflections(lemma: &str, degree: Degree) -> Vec<String> {
    match degree {
        Degree::Positive => vec![lemma.to_string()],
        Degree::Comparative => vec![format!("more {lemma}")],
        Degree::Superlative => {
            let mut out = vec![format!("most {lemma}")];
            for intensifier in ["very", "extremely", "rather", "quite", "too"] {
                out.push(format!("{intensifier} {lemma}"));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees() {
        assert_eq!(inflections("happily", Degree::Positive), vec!["happily"]);
        assert_eq!(
            inflections("happily", Degree::Comparative),
            vec!["more happily"]
        );
        let superlative = inflections("happily", Degree::Superlative);
        assert_eq!(superlative[0], "most happily");
        assert!(superlative.contains(&"very happily".to_string()));
    }
}
