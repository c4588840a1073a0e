use folio_models::contact::ContactSubmissionDraft;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    /// Name of the sender
    pub name: String,
    /// Email address to reply to
    pub email: String,
    /// Content of the message
    pub message: String,
}

impl From<ApiContactSubmission> for ContactSubmissionDraft {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

/// Body of every response of the contact endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiContactResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl ApiContactResponse {
    pub const ACCEPTED: Self = Self {
        ok: true,
        error: None,
    };

    pub fn rejected(error: &'static str) -> Self {
        Self {
            ok: false,
            error: Some(error),
        }
    }
}
