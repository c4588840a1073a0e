use std::net::{Ipv4Addr, SocketAddr};

use folio_api_rest::{RestServer, RestServerConfig, CONTACT_ROUTE};
use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_di::{provider, Provide};
use folio_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use folio_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};
use folio_form::{SubmissionForm, SubmissionStatus, SubmitOutcome};
use folio_models::contact::ContactSubmissionDraft;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;

provider! {
    Provider {
        rest_server_config: RestServerConfig,
        contact_api_service_config: ContactApiServiceConfig,
    }
}

struct Env {
    addr: SocketAddr,
    provider: Provider,
}

impl Env {
    async fn start() -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut provider = Provider {
            _cache: Default::default(),
            rest_server_config: RestServerConfig {
                addr,
                max_body_size: 1024 * 1024,
            },
            contact_api_service_config: ContactApiServiceConfig {
                endpoint: format!("http://{addr}{CONTACT_ROUTE}")
                    .parse::<url::Url>()
                    .unwrap()
                    .into(),
            },
        };

        let server: RestServer<ContactFeatureServiceImpl> = provider.provide();
        tokio::spawn(server.serve_on(listener));

        Self { addr, provider }
    }

    fn api(&mut self) -> ContactApiServiceImpl {
        self.provider.provide()
    }

    async fn post_raw(&self, body: &'static str) -> (u16, Value) {
        let response = reqwest::Client::new()
            .post(format!("http://{}{CONTACT_ROUTE}", self.addr))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}

fn draft(name: &str, email: &str, message: &str) -> ContactSubmissionDraft {
    ContactSubmissionDraft {
        name: name.into(),
        email: email.into(),
        message: message.into(),
    }
}

#[tokio::test]
async fn form_submission_succeeds() {
    let mut env = Env::start().await;
    let form = SubmissionForm::new(env.api());
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("Hello");

    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Settled(SubmissionStatus::Success));
    assert_eq!(
        form.status_message(),
        Some("Thanks! I'll get back to you soon.")
    );
}

#[tokio::test]
async fn form_submission_with_invalid_email_fails() {
    let mut env = Env::start().await;
    let form = SubmissionForm::new(env.api());
    form.set_name("Ada");
    form.set_email("ada.example.com");
    form.set_message("Hello");

    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Settled(SubmissionStatus::Error));
    assert_eq!(form.status_message(), Some("Something went wrong. Try again."));
}

#[tokio::test]
async fn message_boundary() {
    let mut env = Env::start().await;
    let api = env.api();

    let at_limit = api
        .submit(draft("Ada", "ada@example.com", &"x".repeat(5000)))
        .await
        .unwrap();
    let over_limit = api
        .submit(draft("Ada", "ada@example.com", &"x".repeat(5001)))
        .await
        .unwrap();

    assert_eq!(at_limit, ContactApiResponse::Accepted);
    assert_eq!(
        over_limit,
        ContactApiResponse::Rejected {
            status: 400,
            error: Some("Invalid input".into()),
        }
    );
}

#[tokio::test]
async fn concurrent_submissions_are_independent() {
    let mut env = Env::start().await;
    let api = env.api();
    let submission = draft("Ada", "ada@example.com", "Hello");

    let (first, second) = tokio::join!(
        api.submit(submission.clone()),
        api.submit(submission.clone())
    );

    assert_eq!(first.unwrap(), ContactApiResponse::Accepted);
    assert_eq!(second.unwrap(), ContactApiResponse::Accepted);
}

#[tokio::test]
async fn wire_contract() {
    let env = Env::start().await;

    assert_eq!(
        env.post_raw(r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#)
            .await,
        (200, json!({"ok": true}))
    );
    assert_eq!(
        env.post_raw(r#"{"name":"","email":"ada@example.com","message":"Hello"}"#)
            .await,
        (400, json!({"ok": false, "error": "Invalid input"}))
    );
    assert_eq!(
        env.post_raw("this is not json").await,
        (400, json!({"ok": false, "error": "Invalid input"}))
    );
}
