pub mod providers;
pub mod submission;

pub use providers::{BackendReply, HttpBackend, RecommendationBackend};
pub use submission::handle_submit;
