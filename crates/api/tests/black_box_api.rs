use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use cargotrack_core::TrackingId;
use cargotrack_handling::{
    HandlingError, HandlingEventType, HandlingResult, HandlingService, InMemoryHandlingService,
    RegisterHandlingEvent,
};
use reqwest::StatusCode;
use serde_json::json;

const LOAD_REPORT: &str = r#"{"CompletionTime":1393000000000,"TrackingID":"ABC123","VoyageNumber":"V001","Location":"SESTO","EventType":"LOAD"}"#;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(service: Arc<dyn HandlingService>) -> Self {
        // Same router as prod, but bound to an ephemeral port.
        let app = cargotrack_api::app::build_app_with_service(service, docs_dir());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn incidents_url(&self) -> String {
        format!("{}/handling/v1/incidents", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn docs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs")
}

/// Stub service: records every command and answers with a fixed outcome.
struct StubService {
    outcome: HandlingResult<()>,
    seen: Mutex<Vec<RegisterHandlingEvent>>,
}

impl StubService {
    fn answering(outcome: HandlingResult<()>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<RegisterHandlingEvent> {
        self.seen.lock().unwrap().clone()
    }
}

impl HandlingService for StubService {
    fn register_handling_event(&self, command: RegisterHandlingEvent) -> HandlingResult<()> {
        self.seen.lock().unwrap().push(command);
        self.outcome.clone()
    }
}

async fn post_report(srv: &TestServer, body: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(srv.incidents_url())
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn successful_registration_returns_empty_object() {
    let stub = StubService::answering(Ok(()));
    let srv = TestServer::spawn(stub.clone()).await;

    let res = post_report(&srv, LOAD_REPORT).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(res.text().await.unwrap(), "{}");

    let seen = stub.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].tracking_id, TrackingId::new("ABC123"));
    assert_eq!(seen[0].event_type, HandlingEventType::Load);
    assert_eq!(seen[0].completed_at.timestamp(), 1_393_000_000);
}

#[tokio::test]
async fn unknown_event_type_reaches_service_and_not_found_maps_to_404() {
    let stub = StubService::answering(Err(HandlingError::unknown_cargo()));
    let srv = TestServer::spawn(stub.clone()).await;

    let body = LOAD_REPORT.replace("\"LOAD\"", "\"BOGUS\"");
    let res = post_report(&srv, &body).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "unknown cargo" }));

    assert_eq!(stub.seen()[0].event_type, HandlingEventType::Unknown);
}

#[tokio::test]
async fn other_service_errors_map_to_500() {
    let stub = StubService::answering(Err(HandlingError::other("voyage schedule unavailable")));
    let srv = TestServer::spawn(stub).await;

    let res = post_report(&srv, LOAD_REPORT).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "voyage schedule unavailable" }));
}

#[tokio::test]
async fn malformed_json_is_500_and_never_reaches_service() {
    let stub = StubService::answering(Ok(()));
    let srv = TestServer::spawn(stub.clone()).await;

    let res = post_report(&srv, r#"{"CompletionTime": "soon""#).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert!(stub.seen().is_empty());
}

#[tokio::test]
async fn only_post_is_bound_on_incidents() {
    let srv = TestServer::spawn(StubService::answering(Ok(()))).await;

    let res = reqwest::Client::new()
        .get(srv.incidents_url())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = reqwest::Client::new()
        .post(format!("{}/handling/v2/incidents", srv.base_url))
        .body(LOAD_REPORT)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn docs_are_served_with_prefix_stripped() {
    let srv = TestServer::spawn(StubService::answering(Ok(()))).await;

    let res = reqwest::get(format!("{}/handling/v1/docs/index.html", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("/handling/v1/incidents"));

    let res = reqwest::get(format!("{}/handling/v1/docs/missing.html", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn in_memory_service_end_to_end() {
    let service = Arc::new(InMemoryHandlingService::with_sample_data());
    let srv = TestServer::spawn(service.clone()).await;

    let res = post_report(&srv, LOAD_REPORT).await;
    assert_eq!(res.status(), StatusCode::OK);

    let unknown = LOAD_REPORT.replace("ABC123", "ZZZ999");
    let res = post_report(&srv, &unknown).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "unknown cargo" }));

    // Sample cargo, but an event type the service can't accept.
    let bogus = LOAD_REPORT.replace("\"LOAD\"", "\"BOGUS\"");
    let res = post_report(&srv, &bogus).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "invalid argument" }));

    let history = service
        .handling_history(&TrackingId::new("ABC123"))
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].event_type, HandlingEventType::Load);
}

#[tokio::test]
async fn lenient_bodies_are_decoded_like_canonical_ones() {
    let stub = StubService::answering(Ok(()));
    let srv = TestServer::spawn(stub.clone()).await;

    let body = r#"{"completionTime":1393000000000,"trackingId":"ABC123","voyageNumber":"V001","location":"SESTO","eventType":"LOAD","Note":null} {"ignored":true}"#;
    let res = post_report(&srv, body).await;
    assert_eq!(res.status(), StatusCode::OK);

    let seen = stub.seen();
    assert_eq!(seen[0].tracking_id, TrackingId::new("ABC123"));
    assert_eq!(seen[0].event_type, HandlingEventType::Load);
    assert_eq!(seen[0].completed_at.timestamp(), 1_393_000_000);
}
