pub mod config;
pub mod dom;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod page;
pub mod services;
pub mod view;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use form::{RecommendForm, SubmitOptions, SubmitOutcome};
