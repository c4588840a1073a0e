use std::sync::Arc;

use anyhow::Context;
use folio_di::Build;
use folio_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use folio_models::contact::ContactSubmissionDraft;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Build)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    #[di(default)]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    pub endpoint: Arc<Url>,
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(&self, draft: ContactSubmissionDraft) -> anyhow::Result<ContactApiResponse> {
        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .json(&draft)
            .send()
            .await
            .context("Failed to send contact submission")?;

        let status = response.status();
        let body = response
            .json::<ContactResponse>()
            .await
            .context("Failed to deserialize contact response")?;
        debug!(%status, ok = body.ok, "Received contact response");

        Ok(if status.is_success() && body.ok {
            ContactApiResponse::Accepted
        } else {
            ContactApiResponse::Rejected {
                status: status.as_u16(),
                error: body.error,
            }
        })
    }
}

#[derive(Deserialize)]
struct ContactResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}
