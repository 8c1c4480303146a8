use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    config::Config,
    dom::{Document, FieldValue, ResultsContainer, SubmitEvent},
    error::AppResult,
    models::{ErrorResult, FormInput, RenderInstruction},
    services::{handle_submit, RecommendationBackend},
    view,
};

/// Behaviour switches for the submit listener
///
/// Both are off by default, which reproduces the plain listener: overlapping
/// submissions race and transport failures are not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Drop any response whose submission is no longer the latest one
    pub discard_stale_responses: bool,
    /// Render transport failures as an error paragraph
    pub render_transport_errors: bool,
}

impl From<&Config> for SubmitOptions {
    fn from(config: &Config) -> Self {
        Self {
            discard_stale_responses: config.discard_stale_responses,
            render_transport_errors: config.render_transport_errors,
        }
    }
}

/// What a completed submission did to the results container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered(RenderInstruction),
    /// A newer submission had been issued; the container was left alone
    DiscardedStale(RenderInstruction),
}

/// The recommendation form with its injected elements and backend
pub struct RecommendForm {
    customer_id: Arc<dyn FieldValue>,
    top_n: Arc<dyn FieldValue>,
    results: Arc<dyn ResultsContainer>,
    backend: Arc<dyn RecommendationBackend>,
    options: SubmitOptions,
    latest_token: AtomicU64,
}

impl RecommendForm {
    pub fn new(
        customer_id: Arc<dyn FieldValue>,
        top_n: Arc<dyn FieldValue>,
        results: Arc<dyn ResultsContainer>,
        backend: Arc<dyn RecommendationBackend>,
        options: SubmitOptions,
    ) -> Self {
        Self {
            customer_id,
            top_n,
            results,
            backend,
            options,
            latest_token: AtomicU64::new(0),
        }
    }

    /// Wire the form to the elements of a [`Document`]
    pub fn for_document(
        document: &Document,
        backend: Arc<dyn RecommendationBackend>,
        options: SubmitOptions,
    ) -> Self {
        Self::new(
            document.customer_id.clone(),
            document.top_n.clone(),
            document.results.clone(),
            backend,
            options,
        )
    }

    /// Synchronous part of the submit listener
    ///
    /// Always prevents the native submission, then snapshots both fields.
    /// Later edits to the fields do not affect the returned submission.
    pub fn begin_submit(self: &Arc<Self>, event: &mut SubmitEvent) -> PendingSubmission {
        event.prevent_default();

        let input = FormInput::from_field_values(self.customer_id.value(), &self.top_n.value());
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;

        PendingSubmission {
            form: Arc::clone(self),
            input,
            token,
            submission_id: Uuid::new_v4(),
        }
    }

    /// Run the whole listener for one event and wait for it to finish
    pub async fn submit(self: &Arc<Self>, event: &mut SubmitEvent) -> AppResult<SubmitOutcome> {
        self.begin_submit(event).complete().await
    }

    /// Fire a submit event the way the page would
    ///
    /// The listener's synchronous part runs before this returns; the network
    /// wait continues on its own task, so several submissions may be in
    /// flight at once. Failures are reported as unhandled and also returned
    /// through the task handle.
    pub fn dispatch_submit(self: &Arc<Self>) -> DispatchedSubmit {
        let mut event = SubmitEvent::new();
        let pending = self.begin_submit(&mut event);
        let submission_id = pending.submission_id;

        let task = tokio::spawn(async move {
            let result = pending.complete().await;
            if let Err(e) = &result {
                tracing::error!(
                    submission_id = %submission_id,
                    error = %e,
                    "Unhandled failure in submit listener"
                );
            }
            result
        });

        DispatchedSubmit {
            default_prevented: event.default_prevented(),
            submission_id,
            task,
        }
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest_token.load(Ordering::SeqCst) == token
    }
}

/// A submission whose fields have been read but whose request is not done
pub struct PendingSubmission {
    form: Arc<RecommendForm>,
    input: FormInput,
    token: u64,
    submission_id: Uuid,
}

impl PendingSubmission {
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Await the backend and update the results container
    pub async fn complete(self) -> AppResult<SubmitOutcome> {
        let span = tracing::info_span!(
            "submission",
            submission_id = %self.submission_id,
            token = self.token,
        );
        self.run().instrument(span).await
    }

    async fn run(self) -> AppResult<SubmitOutcome> {
        let form = &self.form;

        let instruction = match handle_submit(form.backend.as_ref(), &self.input).await {
            Ok(instruction) => instruction,
            Err(e) if e.is_transport() && form.options.render_transport_errors => {
                tracing::warn!(error = %e, "Rendering transport failure");
                RenderInstruction::Error(ErrorResult::new(e.to_string()))
            }
            Err(e) => return Err(e),
        };

        if form.options.discard_stale_responses && !form.is_latest(self.token) {
            tracing::debug!("Discarding stale response");
            return Ok(SubmitOutcome::DiscardedStale(instruction));
        }

        form.results.replace_content(view::render(&instruction));
        Ok(SubmitOutcome::Rendered(instruction))
    }
}

/// Handle to a submission started by [`RecommendForm::dispatch_submit`]
pub struct DispatchedSubmit {
    pub default_prevented: bool,
    pub submission_id: Uuid,
    pub task: JoinHandle<AppResult<SubmitOutcome>>,
}
