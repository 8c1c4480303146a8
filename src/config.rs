use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Prefix shared by every configuration variable
pub const ENV_PREFIX: &str = "RECOMMEND_";

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the recommendation backend; `/user` is appended to it
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Value the form page prefills into the `top_n` field
    #[serde(default = "default_top_n")]
    pub default_top_n: u32,

    /// Drop responses that resolve after a newer submission was issued
    #[serde(default)]
    pub discard_stale_responses: bool,

    /// Render transport failures into the results container instead of
    /// leaving them unhandled
    #[serde(default)]
    pub render_transport_errors: bool,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_top_n() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            default_top_n: default_top_n(),
            discard_stale_responses: false,
            render_transport_errors: false,
        }
    }
}

impl Config {
    /// Load configuration from `RECOMMEND_*` environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))
    }
}
