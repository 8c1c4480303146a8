use crate::{
    error::AppResult,
    models::{FormInput, RenderInstruction},
    services::providers::RecommendationBackend,
};

/// Runs one recommendation request and decides what to render
///
/// The only side effect is the backend exchange. A failed exchange or an
/// unparseable body is returned as an error and nothing is rendered for it.
pub async fn handle_submit(
    backend: &dyn RecommendationBackend,
    input: &FormInput,
) -> AppResult<RenderInstruction> {
    tracing::info!(
        backend = backend.name(),
        customer_id = %input.customer_id,
        top_n = %input.top_n,
        "Requesting recommendations"
    );

    let reply = backend.request_recommendations(input).await?;
    let instruction = RenderInstruction::from_reply(&reply)?;

    match &instruction {
        RenderInstruction::Recommendations(result) => tracing::info!(
            status = reply.status,
            item_count = result.items.len(),
            "Backend returned recommendations"
        ),
        RenderInstruction::Error(error) => tracing::warn!(
            status = reply.status,
            detail = %error.detail,
            "Backend reported a failure"
        ),
    }

    Ok(instruction)
}
