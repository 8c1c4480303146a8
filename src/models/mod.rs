mod form_input;
mod recommendation;

pub use form_input::{FormInput, TopN};
pub use recommendation::{ErrorResult, RecommendationResult, RenderInstruction};
