// src/analysis/concept.rs
use serde::{Deserialize, Serialize};

/// A term from the explanation paired with a plain-language definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexWord {
    pub word: String,
    pub definition: String,
}

/// Everything the concept view shows once an analysis has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub simplified_explanation: String,
    pub complex_words: Vec<ComplexWord>,
    pub key_points: Vec<String>,
}

pub const COMPLEX_WORDS: [(&str, &str); 3] = [
    ("paradigm", "A typical example or pattern of something; a model"),
    ("methodology", "A system of methods used in a particular area of study"),
    ("synthesis", "The combination of ideas to form a theory or system"),
];

pub const KEY_POINTS: [&str; 5] = [
    "Break complex ideas into simple components",
    "Use analogies and real-world examples",
    "Connect new concepts to existing knowledge",
    "Practice explaining without jargon",
    "Test understanding by teaching others",
];

/// Builds the explanation for `concept`.
///
/// The concept is interpolated exactly as typed. Callers validate against the
/// trimmed text but surrounding whitespace still ends up in the explanation.
pub fn explain(concept: &str) -> AnalysisResult {
    let simplified_explanation = format!(
        "Let me explain {concept} in simple terms:\n\n\
         Imagine you're explaining this to a 10-year-old. {concept} is like a puzzle piece \
         that fits into a bigger picture. The key is to break it down into smaller, \
         understandable parts that connect to things we already know.\n\n\
         Think of it as building blocks - each part supports the next, creating a solid \
         foundation of understanding."
    );

    AnalysisResult {
        simplified_explanation,
        complex_words: COMPLEX_WORDS
            .iter()
            .map(|(word, definition)| ComplexWord {
                word: word.to_string(),
                definition: definition.to_string(),
            })
            .collect(),
        key_points: KEY_POINTS.iter().map(|point| point.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explanation_opens_with_the_concept() {
        let result = explain("Quantum mechanics");
        assert!(result
            .simplified_explanation
            .starts_with("Let me explain Quantum mechanics in simple terms:"));
        assert_eq!(result.complex_words.len(), 3);
        assert_eq!(result.key_points.len(), 5);
    }

    #[test]
    fn explanation_contains_concept_twice() {
        for concept in ["Photosynthesis", "a", "Machine learning", "  padded  "] {
            let result = explain(concept);
            assert!(
                result.simplified_explanation.matches(concept).count() >= 2,
                "{concept:?} should appear at least twice"
            );
        }
    }

    #[test]
    fn explanation_keeps_paragraph_breaks() {
        let result = explain("Entropy");
        let paragraphs: Vec<&str> = result.simplified_explanation.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "Let me explain Entropy in simple terms:");
        assert!(paragraphs[1].starts_with("Imagine you're explaining this to a 10-year-old. Entropy is like"));
        assert!(paragraphs[1].ends_with("things we already know."));
        assert_eq!(
            paragraphs[2],
            "Think of it as building blocks - each part supports the next, creating a solid foundation of understanding."
        );
    }

    #[test]
    fn words_and_points_ignore_input() {
        let a = explain("Relativity");
        let b = explain("");
        assert_eq!(a.complex_words, b.complex_words);
        assert_eq!(a.key_points, b.key_points);

        let words: Vec<(&str, &str)> = a
            .complex_words
            .iter()
            .map(|w| (w.word.as_str(), w.definition.as_str()))
            .collect();
        assert_eq!(words, COMPLEX_WORDS.to_vec());
        assert_eq!(a.key_points, KEY_POINTS.to_vec());
    }

    #[test]
    fn untrimmed_input_is_interpolated_verbatim() {
        let result = explain("  Calculus\n");
        assert!(result
            .simplified_explanation
            .starts_with("Let me explain   Calculus\n in simple terms:"));
    }
}
