use std::future::Future;

use folio_models::contact::ContactSubmissionDraft;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post a contact submission to the contact endpoint.
    ///
    /// Transport failures and unreadable responses are returned as errors,
    /// a well-formed rejection is returned as
    /// [`ContactApiResponse::Rejected`].
    fn submit(
        &self,
        draft: ContactSubmissionDraft,
    ) -> impl Future<Output = anyhow::Result<ContactApiResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactApiResponse {
    Accepted,
    Rejected { status: u16, error: Option<String> },
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(mut self, draft: ContactSubmissionDraft, result: ContactApiResponse) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_error(mut self, draft: ContactSubmissionDraft, err: anyhow::Error) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(|_| Box::pin(std::future::ready(Err(err))));
        self
    }
}
