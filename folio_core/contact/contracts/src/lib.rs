use std::future::Future;

use folio_models::contact::{ContactSubmission, ContactSubmissionDraft, InvalidContactSubmission};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact submission and record it in the audit log.
    ///
    /// Nothing is stored and nothing is deduplicated: submitting the same
    /// draft twice accepts it twice.
    fn submit(
        &self,
        draft: ContactSubmissionDraft,
    ) -> impl Future<Output = Result<ContactSubmission, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Invalid(#[from] InvalidContactSubmission),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        draft: ContactSubmissionDraft,
        result: Result<ContactSubmission, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
