//! Question objects and their wire shapes.
//!
//! Each question serializes as a single-key object keyed by the
//! `question_type` discriminator:
//!
//! ```json
//! {"question_type": "MultipleChoiceEngToLatQuestion",
//!  "MultipleChoiceEngToLatQuestion":
//!    {"prompt": "this", "answer": "hic", "choices": ["acer", "hic", "laetus"]}}
//! ```

use serde_json::{json, Value};

/// The seven question types, identified by their wire discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionType {
    TypeInEngToLat,
    TypeInLatToEng,
    ParseWordLatToComp,
    ParseWordCompToLat,
    PrincipalParts,
    MultipleChoiceEngToLat,
    MultipleChoiceLatToEng,
}

impl QuestionType {
    /// The `question_type` discriminator on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            QuestionType::TypeInEngToLat => "TypeInEngToLatQuestion",
            QuestionType::TypeInLatToEng => "TypeInLatToEngQuestion",
            QuestionType::ParseWordLatToComp => "ParseWordLatToCompQuestion",
            QuestionType::ParseWordCompToLat => "ParseWordCompToLatQuestion",
            QuestionType::PrincipalParts => "PrincipalPartsQuestion",
            QuestionType::MultipleChoiceEngToLat => "MultipleChoiceEngToLatQuestion",
            QuestionType::MultipleChoiceLatToEng => "MultipleChoiceLatToEngQuestion",
        }
    }

    /// The settings key that gates this type.
    pub(crate) fn from_setting(key: &str) -> Option<QuestionType> {
        match key {
            "include-typein-engtolat" => Some(QuestionType::TypeInEngToLat),
            "include-typein-lattoeng" => Some(QuestionType::TypeInLatToEng),
            "include-parse" => Some(QuestionType::ParseWordLatToComp),
            "include-inflect" => Some(QuestionType::ParseWordCompToLat),
            "include-principal-parts" => Some(QuestionType::PrincipalParts),
            "include-multiplechoice-engtolat" => Some(QuestionType::MultipleChoiceEngToLat),
            "include-multiplechoice-lattoeng" => Some(QuestionType::MultipleChoiceLatToEng),
            _ => None,
        }
    }
}

/// A sampled question, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Type the Latin for an English prompt.
    TypeInEngToLat {
        prompt: String,
        main_answer: String,
        /// Accepted Latin forms, deduplicated and sorted.
        answers: Vec<String>,
    },
    /// Type the English for a Latin prompt.
    TypeInLatToEng {
        prompt: String,
        main_answer: String,
        /// Accepted English renderings, deduplicated and sorted.
        answers: Vec<String>,
    },
    /// Parse a Latin form into its grammatical components.
    ParseWordLatToComp {
        prompt: String,
        dictionary_entry: String,
        main_answer: String,
        /// All syncretic readings, rendered as space-joined tag words,
        /// deduplicated and sorted.
        answers: Vec<String>,
    },
    /// Produce the Latin form matching the given components.
    ParseWordCompToLat {
        prompt: String,
        components: String,
        main_answer: String,
        answers: Vec<String>,
    },
    /// Recite the principal parts.
    PrincipalParts {
        prompt: String,
        principal_parts: Vec<String>,
    },
    MultipleChoiceEngToLat {
        prompt: String,
        answer: String,
        choices: Vec<String>,
    },
    MultipleChoiceLatToEng {
        prompt: String,
        answer: String,
        choices: Vec<String>,
    },
}

impl Question {
    pub fn question_type(&self) -> QuestionType {
        match self {
            Question::TypeInEngToLat { .. } => QuestionType::TypeInEngToLat,
            Question::TypeInLatToEng { .. } => QuestionType::TypeInLatToEng,
            Question::ParseWordLatToComp { .. } => QuestionType::ParseWordLatToComp,
            Question::ParseWordCompToLat { .. } => QuestionType::ParseWordCompToLat,
            Question::PrincipalParts { .. } => QuestionType::PrincipalParts,
            Question::MultipleChoiceEngToLat { .. } => QuestionType::MultipleChoiceEngToLat,
            Question::MultipleChoiceLatToEng { .. } => QuestionType::MultipleChoiceLatToEng,
        }
    }

    /// The single-key wire object.
    pub fn to_json(&self) -> Value {
        let payload = match self {
            Question::TypeInEngToLat {
                prompt,
                main_answer,
                answers,
            }
            | Question::TypeInLatToEng {
                prompt,
                main_answer,
                answers,
            } => json!({
                "prompt": prompt,
                "main_answer": main_answer,
                "answers": answers,
            }),
            Question::ParseWordLatToComp {
                prompt,
                dictionary_entry,
                main_answer,
                answers,
            } => json!({
                "prompt": prompt,
                "dictionary_entry": dictionary_entry,
                "main_answer": main_answer,
                "answers": answers,
            }),
            Question::ParseWordCompToLat {
                prompt,
                components,
                main_answer,
                answers,
            } => json!({
                "prompt": prompt,
                "components": components,
                "main_answer": main_answer,
                "answers": answers,
            }),
            Question::PrincipalParts {
                prompt,
                principal_parts,
            } => json!({
                "prompt": prompt,
                "principal_parts": principal_parts,
            }),
            Question::MultipleChoiceEngToLat {
                prompt,
                answer,
                choices,
            }
            | Question::MultipleChoiceLatToEng {
                prompt,
                answer,
                choices,
            } => json!({
                "prompt": prompt,
                "answer": answer,
                "choices": choices,
            }),
        };
        let name = self.question_type().wire_name();
        json!({ "question_type": name, name: payload })
    }
}
