//! Server error types with HTTP status mapping.
//!
//! Client-facing errors are plain text in a fixed shape:
//!
//! ```text
//! Bad request: 400 Bad Request: InvalidVocabFileFormatError: Invalid part of speech: 'Floober'
//! Bad request: 400 Bad Request: Required settings are missing: 'number-of-questions'. (InvalidSettingsError)
//! ```
//!
//! Internal invariant violations (a missing reverse-index entry, an absent
//! ending) map to 500 and are never phrased as client mistakes.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use vocabula_accido::AccidoError;
use vocabula_lego::InvalidVocabFileFormatError;
use vocabula_rogo::RogoError;

/// Server error type wrapping the component errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The vocab list failed to parse.
    #[error("InvalidVocabFileFormatError: {0}")]
    Vocab(#[from] InvalidVocabFileFormatError),

    /// Settings validation or sampling failed.
    #[error("{0}")]
    Rogo(RogoError),

    /// The settings body was not JSON at all.
    #[error("Invalid JSON body: {0}. (InvalidSettingsError)")]
    Json(#[from] serde_json::Error),

    /// A request arrived out of order or malformed.
    #[error("{0}")]
    BadRequest(String),

    /// A morphology invariant broke; a programmer error, not a client one.
    #[error("NoEndingError: {0}")]
    Internal(#[from] AccidoError),
}

impl From<RogoError> for ServerError {
    fn from(err: RogoError) -> Self {
        ServerError::Rogo(err)
    }
}

impl ServerError {
    pub fn bad_request(msg: impl Into<String>) -> ServerError {
        ServerError::BadRequest(msg.into())
    }

    /// Map the error to its HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Vocab(_)
            | ServerError::Json(_)
            | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Rogo(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The plain-text body for this error.
    pub fn body(&self) -> String {
        let status = self.status_code();
        if status == StatusCode::BAD_REQUEST {
            match self {
                // The sampling-exhaustion kind leads its message.
                ServerError::Rogo(RogoError::NoQuestions(_)) => {
                    format!("Bad request: 400 Bad Request: NoQuestionsError: {self}")
                }
                _ => format!("Bad request: 400 Bad Request: {self}"),
            }
        } else {
            format!(
                "Internal server error: {} {}: {self}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Internal Server Error")
            )
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body(),
        )
            .into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use vocabula_rogo::SettingsError;

    #[test]
    fn settings_errors_carry_their_kind_as_a_suffix() {
        let err = ServerError::from(RogoError::InvalidSettings(SettingsError::Missing(vec![
            "number-of-questions".to_string(),
        ])));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            "Bad request: 400 Bad Request: Required settings are missing: \
             'number-of-questions'. (InvalidSettingsError)"
        );
    }

    #[test]
    fn vocab_errors_lead_with_their_kind() {
        let err = ServerError::Vocab(InvalidVocabFileFormatError {
            reason: "Invalid part of speech: 'Cause an error'".to_string(),
            line: None,
        });
        assert_eq!(
            err.body(),
            "Bad request: 400 Bad Request: InvalidVocabFileFormatError: \
             Invalid part of speech: 'Cause an error'"
        );
    }

    #[test]
    fn sampling_exhaustion_is_a_no_questions_error() {
        let err = ServerError::from(RogoError::NoQuestions(1000));
        assert!(err
            .body()
            .starts_with("Bad request: 400 Bad Request: NoQuestionsError:"));
    }

    #[test]
    fn invariant_violations_are_500s() {
        let err = ServerError::Internal(AccidoError::NoEnding {
            word: "agricola".to_string(),
            components: "genitive plural".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
