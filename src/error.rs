/// Client-side errors
///
/// None of these are backend-reported failures: a non-2xx reply is a normal
/// outcome rendered as an error message, not an `AppError`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl AppError {
    /// Whether the failure happened while talking to the backend
    /// (unreachable host, unreadable or unparseable body).
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::HttpClient(_) | AppError::MalformedResponse(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
