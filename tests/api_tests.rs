use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use uuid::Uuid;
use wellbeing_console::{
    api,
    error::ApiError,
    models::{NewStudent, NewSurveyResponse},
    routes::ENTRY_ROUTE,
    session::{CredentialState, MockCredentialStore},
    ApiClient, AppConfig, Navigator, SessionStore,
};

// --- Stub Server Harness ---
// Plays the remote wellbeing API: canned JSON bodies behind a recording layer,
// so tests can assert both what the console sent and how it handled the reply.

#[derive(Clone, Debug)]
struct RecordedRequest {
    method: String,
    path: String,
    authorization: Option<String>,
    request_id: Option<String>,
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

struct TestApp {
    address: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestApp {
    fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> RecordedRequest {
        self.recorded().last().cloned().expect("no request recorded")
    }
}

async fn record(State(state): State<StubState>, request: Request, next: Next) -> Response {
    let headers = request.headers();
    let recorded = RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        authorization: header_value(headers, header::AUTHORIZATION.as_str()),
        request_id: header_value(headers, "x-request-id"),
    };
    state.requests.lock().unwrap().push(recorded);
    next.run(request).await
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

// The one token this stub accepts on protected rows.
const LIVE: &str = "Bearer tok-live";

fn expired() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Token has expired"})),
    )
        .into_response()
}

fn student_row() -> Value {
    json!({
        "id": 1,
        "student_number": "S100",
        "full_name": "Ada Lovelace",
        "email": "ada@example.ac.uk",
        "course_name": "Computer Science",
        "year_of_study": 2,
        "is_active": true,
        "created_at": "2026-01-12T09:30:00+00:00"
    })
}

async fn students_list(headers: HeaderMap) -> Response {
    if header_value(&headers, header::AUTHORIZATION.as_str()).as_deref() != Some(LIVE) {
        return expired();
    }
    Json(json!([student_row()])).into_response()
}

async fn students_create() -> Response {
    (
        StatusCode::CREATED,
        Json(json!({"message": "Student created successfully", "id": 17})),
    )
        .into_response()
}

async fn students_delete() -> Response {
    Json(json!({"message": "Student deleted successfully"})).into_response()
}

async fn modules_list() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Module catalogue offline"})),
    )
        .into_response()
}

async fn users_list() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({"message": "Administrator access required"})),
    )
        .into_response()
}

async fn alert_resolve() -> Response {
    Json(json!({"message": "Alert resolved"})).into_response()
}

async fn survey_create() -> Response {
    (
        StatusCode::CREATED,
        Json(json!({"message": "Survey response recorded", "id": 3})),
    )
        .into_response()
}

async fn dashboard_summary() -> Response {
    Json(json!({
        "total_students": 42,
        "total_modules": 6,
        "pending_alerts_count": 3,
        "total_users": 9
    }))
    .into_response()
}

async fn stress_trend() -> Response {
    Json(json!({"labels": ["Week 1", "Week 2"], "data": [2.0, 3.5]})).into_response()
}

async fn me_wrong_shape() -> Response {
    // Deliberately not a student row.
    Json(json!({"unexpected": true})).into_response()
}

fn stub_router(state: StubState) -> Router {
    Router::new()
        .route(
            "/api/admin/students",
            get(students_list).post(students_create),
        )
        .route("/api/admin/students/{id}", delete(students_delete))
        .route("/api/admin/modules", get(modules_list))
        .route("/api/admin/users", get(users_list))
        .route("/api/admin/alerts/{id}/resolve", put(alert_resolve))
        .route("/api/admin/survey-responses", post(survey_create))
        .route("/api/analysis/dashboard-summary", get(dashboard_summary))
        .route("/api/analysis/students/{id}/stress-trend", get(stress_trend))
        .route("/api/student/me", get(me_wrong_shape))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn spawn_app() -> TestApp {
    let state = StubState::default();
    let requests = state.requests.clone();
    let router = stub_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address, requests }
}

/// Builds a console stack pointed at the stub.
async fn console_against(app: &TestApp) -> (Arc<SessionStore>, Arc<Navigator>, ApiClient) {
    let config = AppConfig {
        api_base_url: app.address.clone(),
        ..AppConfig::default()
    };
    let backend = Arc::new(MockCredentialStore::new()) as CredentialState;
    let session = Arc::new(SessionStore::open(backend).await);
    let navigator = Arc::new(Navigator::new(session.clone()));
    let client = ApiClient::new(&config, session.clone(), navigator.clone());
    (session, navigator, client)
}

// --- Request Signing ---

#[tokio::test]
async fn test_requests_carry_bearer_and_request_id() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "admin").await;

    let students = api::admin::list_students(&client).await.expect("list students");
    assert_eq!(students.len(), 1);

    let recorded = app.last();
    assert_eq!(recorded.authorization.as_deref(), Some(LIVE));
    let request_id = recorded.request_id.expect("x-request-id must be attached");
    assert!(Uuid::parse_str(&request_id).is_ok(), "request id must be a uuid");
}

#[tokio::test]
async fn test_signed_out_requests_have_no_bearer() {
    let app = spawn_app().await;
    let (_session, _navigator, client) = console_against(&app).await;

    let summary = api::analysis::dashboard_summary(&client).await.expect("summary");
    assert_eq!(summary.total_students, 42);

    let recorded = app.last();
    assert_eq!(recorded.authorization, None);
    // Correlation id goes out regardless of authentication.
    assert!(recorded.request_id.is_some());
}

#[tokio::test]
async fn test_request_ids_are_fresh_per_call() {
    let app = spawn_app().await;
    let (_session, _navigator, client) = console_against(&app).await;

    api::analysis::dashboard_summary(&client).await.unwrap();
    api::analysis::dashboard_summary(&client).await.unwrap();

    let recorded = app.recorded();
    assert_eq!(recorded.len(), 2);
    assert_ne!(recorded[0].request_id, recorded[1].request_id);
}

// --- Unauthorized Handling ---

#[tokio::test]
async fn test_unauthorized_clears_session_and_forces_sign_in() {
    let app = spawn_app().await;
    let (session, navigator, client) = console_against(&app).await;
    session.establish("tok-stale", "admin").await;
    navigator.navigate("dashboard").await;
    assert_eq!(navigator.current(), "dashboard");

    let result = api::admin::list_students(&client).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    // The dead credential is gone everywhere, not just for this call.
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
    assert_eq!(navigator.current(), ENTRY_ROUTE);
}

#[tokio::test]
async fn test_forbidden_keeps_the_session() {
    let app = spawn_app().await;
    let (session, navigator, client) = console_against(&app).await;
    session.establish("tok-live", "wellbeing_officer").await;
    navigator.navigate("dashboard").await;

    let result = api::admin::list_users(&client).await;

    match result {
        Err(ApiError::Forbidden(message)) => {
            assert_eq!(message, "Administrator access required");
        }
        other => panic!("expected a forbidden error, got {other:?}"),
    }
    // 403 is a per-request verdict; the session stays intact.
    assert!(session.is_authenticated());
    assert_eq!(navigator.current(), "dashboard");
}

#[tokio::test]
async fn test_not_found_maps_to_a_typed_error() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "admin").await;

    let result = api::admin::list_modules(&client).await;

    match result {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "Module catalogue offline"),
        other => panic!("expected a not-found error, got {other:?}"),
    }
}

// --- Wrapper Paths and Verbs ---

#[tokio::test]
async fn test_create_returns_the_new_row_id() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "admin").await;

    let student = NewStudent {
        student_number: "S200".to_string(),
        full_name: "Grace Hopper".to_string(),
        email: "grace@example.ac.uk".to_string(),
        course_name: None,
        year_of_study: None,
    };
    let id = api::admin::create_student(&client, &student).await.expect("create");

    assert_eq!(id, 17);
    let recorded = app.last();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/admin/students");
}

#[tokio::test]
async fn test_delete_targets_the_row_path() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "admin").await;

    api::admin::delete_student(&client, 9).await.expect("delete");

    let recorded = app.last();
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.path, "/api/admin/students/9");
}

#[tokio::test]
async fn test_resolve_uses_a_bodyless_put() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "wellbeing_officer").await;

    api::admin::resolve_alert(&client, 5).await.expect("resolve");

    let recorded = app.last();
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.path, "/api/admin/alerts/5/resolve");
}

#[tokio::test]
async fn test_survey_submission_posts_to_the_shared_endpoint() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "student").await;

    let response = NewSurveyResponse {
        student_id: None,
        module_id: None,
        week_number: None,
        stress_level: 4,
        hours_slept: Some(7.0),
        mood_comment: Some("deadline week".to_string()),
    };
    let id = api::admin::create_survey_response(&client, &response)
        .await
        .expect("submit");

    assert_eq!(id, 3);
    let recorded = app.last();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/admin/survey-responses");
}

#[tokio::test]
async fn test_trend_paths_are_per_student() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "admin").await;

    let trend = api::analysis::stress_trend(&client, 7).await.expect("trend");

    assert_eq!(trend.labels, vec!["Week 1", "Week 2"]);
    assert_eq!(app.last().path, "/api/analysis/students/7/stress-trend");
}

// --- Decode Failures ---

#[tokio::test]
async fn test_unexpected_body_shape_is_a_decode_error() {
    let app = spawn_app().await;
    let (session, _navigator, client) = console_against(&app).await;
    session.establish("tok-live", "student").await;

    let result = api::student::my_profile(&client).await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// --- Transport Failures ---

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Nothing listens on this port.
    let config = AppConfig {
        api_base_url: "http://127.0.0.1:1".to_string(),
        ..AppConfig::default()
    };
    let backend = Arc::new(MockCredentialStore::new()) as CredentialState;
    let session = Arc::new(SessionStore::open(backend).await);
    let navigator = Arc::new(Navigator::new(session.clone()));
    let client = ApiClient::new(&config, session, navigator);

    let result = api::analysis::dashboard_summary(&client).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}
