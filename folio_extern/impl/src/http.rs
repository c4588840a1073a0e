use std::{ops::Deref, sync::LazyLock};

use folio_utils::folio_version;
use tracing::warn;

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("Folio Contact Client (Version {})", folio_version()));

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                warn!("Failed to build HTTP client, falling back to defaults: {err}");
                reqwest::Client::new()
            });
        Self(client)
    }
}
