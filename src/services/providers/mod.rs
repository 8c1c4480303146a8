/// Recommendation backend abstraction
///
/// The form handler only needs one exchange with the backend: send the form
/// input, get back a status and a body. Keeping classification and parsing
/// out of the provider lets tests substitute canned replies.
use crate::{error::AppResult, models::FormInput};

pub mod http;

pub use http::HttpBackend;

/// Path of the recommendation endpoint, relative to the backend base URL
pub const RECOMMENDATION_PATH: &str = "/user";

/// Raw reply from the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Issue one `POST /user` carrying `input` as JSON
    ///
    /// Resolves once the full reply is in; there is no timeout. Only a failed
    /// exchange is an error; non-2xx statuses are returned as replies.
    async fn request_recommendations(&self, input: &FormInput) -> AppResult<BackendReply>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
