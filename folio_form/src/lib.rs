//! Client side of the contact form.
//!
//! [`SubmissionForm`] owns the three input fields and the submission status.
//! A submit reads the fields, sends exactly one request through a
//! [`ContactApiService`] and settles in either [`SubmissionStatus::Success`] or
//! [`SubmissionStatus::Error`]. While a request is in flight the submit control
//! is disabled and further submits are ignored.

use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use folio_models::contact::{ContactField, ContactSubmissionDraft};
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str = "Thanks! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Something went wrong. Try again.";

pub const SUBMIT_LABEL: &str = "Send message";
pub const SENDING_LABEL: &str = "Sending…";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Text shown next to the submit control.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Sending => None,
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Error => Some(ERROR_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight, nothing was sent.
    Ignored,
    /// Required fields were left empty, nothing was sent.
    MissingFields(Vec<ContactField>),
    /// The request completed and the form settled in the given status.
    Settled(SubmissionStatus),
}

#[derive(Debug)]
pub struct SubmissionForm<Api> {
    api: Api,
    state: Mutex<FormState>,
}

#[derive(Debug, Default)]
struct FormState {
    draft: ContactSubmissionDraft,
    status: SubmissionStatus,
}

impl<Api> SubmissionForm<Api>
where
    Api: ContactApiService,
{
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: Default::default(),
        }
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.state().draft.name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.state().draft.email = email.into();
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.state().draft.message = message.into();
    }

    pub fn draft(&self) -> ContactSubmissionDraft {
        self.state().draft.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.status().message()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.status() != SubmissionStatus::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submit_enabled() {
            SUBMIT_LABEL
        } else {
            SENDING_LABEL
        }
    }

    /// Submits the current field values.
    ///
    /// The check for an in-flight submission and the transition to
    /// [`SubmissionStatus::Sending`] happen under one lock, so concurrent
    /// calls result in at most one request. If the returned future is dropped
    /// before the request completes, the form settles in
    /// [`SubmissionStatus::Error`].
    pub async fn submit(&self) -> SubmitOutcome {
        let draft = {
            let mut state = self.state();

            if state.status == SubmissionStatus::Sending {
                debug!("Submit control is disabled while sending");
                return SubmitOutcome::Ignored;
            }

            let missing = missing_fields(&state.draft);
            if !missing.is_empty() {
                debug!(?missing, "Required fields are empty");
                return SubmitOutcome::MissingFields(missing);
            }

            state.status = SubmissionStatus::Sending;
            state.draft.clone()
        };
        let sending = Sending::new(&self.state);

        info!("Sending contact submission");
        let status = match self.api.submit(draft).await {
            Ok(ContactApiResponse::Accepted) => {
                info!("Contact submission accepted");
                SubmissionStatus::Success
            }
            Ok(ContactApiResponse::Rejected { status, error }) => {
                warn!(status, ?error, "Contact submission rejected");
                SubmissionStatus::Error
            }
            Err(err) => {
                warn!("Failed to send contact submission: {err:#}");
                SubmissionStatus::Error
            }
        };

        sending.settle(status);
        SubmitOutcome::Settled(status)
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }
}

/// Holds the form in [`SubmissionStatus::Sending`] and writes the final status
/// back when dropped.
struct Sending<'a> {
    state: &'a Mutex<FormState>,
    status: SubmissionStatus,
}

impl<'a> Sending<'a> {
    fn new(state: &'a Mutex<FormState>) -> Self {
        Self {
            state,
            status: SubmissionStatus::Error,
        }
    }

    fn settle(mut self, status: SubmissionStatus) {
        self.status = status;
    }
}

impl Drop for Sending<'_> {
    fn drop(&mut self) {
        lock(self.state).status = self.status;
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn missing_fields(draft: &ContactSubmissionDraft) -> Vec<ContactField> {
    ContactField::ALL
        .into_iter()
        .filter(|&field| draft.get(field).is_empty())
        .collect()
}
