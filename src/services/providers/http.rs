/// HTTP recommendation backend
///
/// Posts the form input as JSON to `{base_url}/user` and hands back the raw
/// status and body.
use reqwest::{header::CONTENT_TYPE, Client as HttpClient};

use crate::{
    error::AppResult,
    models::FormInput,
    services::providers::{BackendReply, RecommendationBackend, RECOMMENDATION_PATH},
};

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    endpoint: String,
}

impl HttpBackend {
    /// Creates a backend rooted at `base_url`
    ///
    /// The client is built without a request timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    pub fn with_client(http_client: HttpClient, base_url: &str) -> Self {
        Self {
            http_client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RECOMMENDATION_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for HttpBackend {
    async fn request_recommendations(&self, input: &FormInput) -> AppResult<BackendReply> {
        let body = serde_json::to_vec(input)?;

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::debug!(
            endpoint = %self.endpoint,
            status,
            body_len = body.len(),
            "Received recommendation reply"
        );

        Ok(BackendReply::new(status, body.to_vec()))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
