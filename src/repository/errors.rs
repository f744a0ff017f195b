use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// The API answered with `success: false`; carries its message verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Message shown to the user: the API message when there is one, `fallback` otherwise.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            RepositoryError::Api(message) if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Transport(format!("I/O error: {err}"))
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::ValidationError(format!("Malformed JSON: {err}"))
    }
}
