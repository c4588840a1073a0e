use std::net::{Ipv4Addr, SocketAddr};

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing, Json, Router,
};
use folio_di::{provider, Provide};
use folio_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use folio_extern_impl::{
    contact::{ContactApiServiceConfig, ContactApiServiceImpl},
    http::USER_AGENT,
};
use folio_models::contact::ContactSubmissionDraft;
use serde_json::json;
use tokio::net::TcpListener;

#[tokio::test]
async fn accepted() {
    let addr = start_server().await;
    let sut = make_sut(&format!("http://{addr}/contact"));

    let result = sut.submit(draft("Ada")).await.unwrap();

    assert_eq!(result, ContactApiResponse::Accepted);
}

#[tokio::test]
async fn rejected() {
    let addr = start_server().await;
    let sut = make_sut(&format!("http://{addr}/contact"));

    let result = sut.submit(draft("")).await.unwrap();

    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 400,
            error: Some("Invalid input".into()),
        }
    );
}

#[tokio::test]
async fn ok_false_with_success_status_is_rejected() {
    let addr = start_server().await;
    let sut = make_sut(&format!("http://{addr}/confused"));

    let result = sut.submit(draft("Ada")).await.unwrap();

    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 200,
            error: None,
        }
    );
}

#[tokio::test]
async fn sends_user_agent() {
    let addr = start_server().await;
    let sut = make_sut(&format!("http://{addr}/user-agent"));

    let result = sut.submit(draft("Ada")).await.unwrap();

    assert_eq!(result, ContactApiResponse::Accepted);
}

#[tokio::test]
async fn unreadable_response() {
    let addr = start_server().await;
    let sut = make_sut(&format!("http://{addr}/plain"));

    let result = sut.submit(draft("Ada")).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn connection_refused() {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let sut = make_sut(&format!("http://{addr}/contact"));

    let result = sut.submit(draft("Ada")).await;

    assert!(result.is_err());
}

fn draft(name: &str) -> ContactSubmissionDraft {
    ContactSubmissionDraft {
        name: name.into(),
        email: "ada@example.com".into(),
        message: "Hello".into(),
    }
}

async fn start_server() -> SocketAddr {
    async fn contact(Json(draft): Json<ContactSubmissionDraft>) -> impl IntoResponse {
        if draft.name.is_empty() {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"ok": false, "error": "Invalid input"})),
            )
        } else {
            (StatusCode::OK, Json(json!({"ok": true})))
        }
    }

    let router = Router::new()
        .route("/contact", routing::post(contact))
        .route("/confused", routing::post(|| async { Json(json!({"ok": false})) }))
        .route(
            "/user-agent",
            routing::post(|headers: HeaderMap| async move {
                let user_agent = headers
                    .get(header::USER_AGENT)
                    .and_then(|x| x.to_str().ok());
                Json(json!({"ok": user_agent == Some(USER_AGENT.as_str())}))
            }),
        )
        .route("/plain", routing::post(|| async { "thanks" }));

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    addr
}

fn make_sut(endpoint: &str) -> ContactApiServiceImpl {
    provider! {
        Provider { contact_api_service_config: ContactApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        contact_api_service_config: ContactApiServiceConfig {
            endpoint: endpoint.parse::<url::Url>().unwrap().into(),
        },
    };

    provider.provide()
}
