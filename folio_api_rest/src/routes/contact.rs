use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, FailedToBufferBody},
        State,
    },
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::debug;

use super::{internal_server_error, invalid_input};
use crate::models::contact::{ApiContactResponse, ApiContactSubmission};

pub const CONTACT_ROUTE: &str = "/api/contact";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(err))) => {
            debug!("Request body too large: {err}");
            return invalid_input();
        }
        Err(err) => return internal_server_error(err),
    };

    let submission = match serde_json::from_slice::<ApiContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(err) => {
            debug!("Failed to parse contact submission: {err}");
            return invalid_input();
        }
    };

    match service.submit(submission.into()).await {
        Ok(_) => Json(ApiContactResponse::ACCEPTED).into_response(),
        Err(ContactSubmitError::Invalid(_)) => invalid_input(),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
