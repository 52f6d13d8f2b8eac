//! Session engine.
//!
//! Orchestrates a question session: validates the settings object against
//! the closed schema, filters the held vocabulary into a candidate pool of
//! (word, ending-key) pairs, and samples a bounded set of question objects
//! for a client to render.

mod asker;
mod questions;
mod rules;
mod settings;

use thiserror::Error;

pub use asker::{ask_questions, MAX_RETRIES};
pub use questions::{Question, QuestionType};
pub use settings::{Settings, SettingsError};

/// Session-engine errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RogoError {
    /// Settings failed validation, or left nothing to ask about.
    #[error("{0}")]
    InvalidSettings(#[from] SettingsError),

    /// Sampling exhaustion: no enabled question type could produce a
    /// question from the filtered pool within the retry bound.
    #[error("Failed to generate a valid question after {0} retries.")]
    NoQuestions(usize),
}

pub type Result<T> = std::result::Result<T, RogoError>;
