//! Element seams for the recommendation form
//!
//! The form controller never looks elements up by id; it is handed the two
//! input fields and the results container. The in-memory elements here back
//! the CLI and the tests, and [`Document`] groups the ones the form page
//! declares.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, PoisonError,
};

pub const FORM_ID: &str = "recommend-form";
pub const CUSTOMER_ID_FIELD: &str = "customer_id";
pub const TOP_N_FIELD: &str = "top_n";
pub const RESULTS_ID: &str = "results";

/// An input whose current text is read at submit time
pub trait FieldValue: Send + Sync {
    fn value(&self) -> String;
}

/// The element whose content is replaced with each rendered outcome
pub trait ResultsContainer: Send + Sync {
    /// Replace the whole content; nothing from earlier submissions survives
    fn replace_content(&self, html: String);
}

/// A submit event as seen by the form's listener
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the native form submission (and the page navigation it causes)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// In-memory text input
#[derive(Debug)]
pub struct InputElement {
    id: &'static str,
    value: Mutex<String>,
}

impl InputElement {
    pub fn new(id: &'static str, value: impl Into<String>) -> Self {
        Self {
            id,
            value: Mutex::new(value.into()),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

impl FieldValue for InputElement {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// In-memory results container
#[derive(Debug)]
pub struct ContainerElement {
    id: &'static str,
    content: Mutex<String>,
    replacements: AtomicUsize,
}

impl ContainerElement {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            content: Mutex::new(String::new()),
            replacements: AtomicUsize::new(0),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn content(&self) -> String {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many times the content has been replaced
    pub fn replacements(&self) -> usize {
        self.replacements.load(Ordering::SeqCst)
    }
}

impl ResultsContainer for ContainerElement {
    fn replace_content(&self, html: String) {
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = html;
        self.replacements.fetch_add(1, Ordering::SeqCst);
    }
}

/// The elements the recommendation page declares
#[derive(Debug, Clone)]
pub struct Document {
    pub customer_id: Arc<InputElement>,
    pub top_n: Arc<InputElement>,
    pub results: Arc<ContainerElement>,
}

impl Document {
    /// A fresh page: empty customer id, `top_n` prefilled, no results
    pub fn new(default_top_n: u32) -> Self {
        Self {
            customer_id: Arc::new(InputElement::new(CUSTOMER_ID_FIELD, "")),
            top_n: Arc::new(InputElement::new(TOP_N_FIELD, default_top_n.to_string())),
            results: Arc::new(ContainerElement::new(RESULTS_ID)),
        }
    }
}
