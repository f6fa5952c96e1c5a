//! Black-box gateway tests against a loopback axum server.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;

use warden_auth::{Credentials, MemoryTokenStore, Session, TokenStore};
use warden_client::{ApiClient, AuditFilter, GatewayEvents, NewTask, Notice};
use warden_core::{ApiError, ClientId, ConsoleConfig, PageRequest, Severity, UserId};

/// Records every gateway side effect for inspection.
#[derive(Default)]
struct Recorder {
    notices: RefCell<Vec<Notice>>,
    expirations: Cell<usize>,
}

impl GatewayEvents for Recorder {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn session_expired(&self) {
        self.expirations.set(self.expirations.get() + 1);
    }
}

async fn serve(app: Router) -> String {
    warden_observability::init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str, token: Option<&str>) -> (ApiClient, Rc<Recorder>, Session) {
    let store = Rc::new(MemoryTokenStore::new());
    if let Some(token) = token {
        store.save(token);
    }
    let session = Session::new(store);
    let recorder = Rc::new(Recorder::default());
    let config = ConsoleConfig::default().with_base_url(base_url);
    let client = ApiClient::new(&config, session.clone(), recorder.clone()).unwrap();
    (client, recorder, session)
}

fn empty_page() -> serde_json::Value {
    json!({"items": [], "total_count": 0})
}

#[tokio::test]
async fn attaches_bearer_token_to_every_request() {
    let app = Router::new().route(
        "/users",
        get(|headers: HeaderMap| async move {
            let bearer = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            if bearer.as_deref() == Some("Bearer tok-1") {
                (StatusCode::OK, Json(empty_page()))
            } else {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "missing bearer token"})),
                )
            }
        }),
    );
    let base = serve(app).await;
    let (client, _, _) = client_for(&base, Some("tok-1"));

    let page = client.list_users(PageRequest::default()).await.unwrap();
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn unauthorized_clears_session_and_fires_hook_once() {
    let app = Router::new().route(
        "/tasks",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "token expired"})),
            )
        }),
    );
    let base = serve(app).await;
    let (client, recorder, session) = client_for(&base, Some("stale-token"));

    let err = client.list_tasks(PageRequest::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!session.is_present());
    assert_eq!(recorder.expirations.get(), 1);
    // 401 routes to login; it does not also toast.
    assert!(recorder.notices.borrow().is_empty());
}

#[tokio::test]
async fn login_rejection_is_a_credentials_error_not_session_expiry() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Invalid credentials"})),
            )
        }),
    );
    let base = serve(app).await;
    let (client, recorder, session) = client_for(&base, None);

    let credentials = Credentials {
        username: "admin".to_string(),
        password: "wrong".to_string(),
    };
    let err = client.login(&credentials).await.unwrap_err();

    assert_eq!(err, ApiError::api(401, "Invalid credentials"));
    assert_eq!(recorder.expirations.get(), 0);
    assert!(recorder.notices.borrow().is_empty());
    assert!(!session.is_present());
}

#[tokio::test]
async fn login_success_returns_token_and_user() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async {
            Json(json!({
                "access_token": "tok-fresh",
                "token_type": "bearer",
                "expires_in": 86400,
                "user": {
                    "id": "550e8400-e29b-41d4-a716-446655440000",
                    "username": "admin",
                    "email": "admin@example.com",
                    "full_name": "Administrator",
                    "role": "admin",
                    "status": "active",
                    "is_active": true,
                    "last_login": null,
                    "created_at": "2026-01-01T00:00:00Z",
                },
            }))
        }),
    );
    let base = serve(app).await;
    let (client, _, _) = client_for(&base, None);

    let credentials = Credentials {
        username: "admin".to_string(),
        password: "ChangeMe123!".to_string(),
    };
    let response = client.login(&credentials).await.unwrap();

    assert_eq!(response.access_token, "tok-fresh");
    assert_eq!(response.user.username, "admin");
}

#[tokio::test]
async fn business_error_notifies_with_backend_message_and_propagates() {
    let app = Router::new().route(
        "/users",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({"detail": "username already exists"})),
            )
        }),
    );
    let base = serve(app).await;
    let (client, recorder, _) = client_for(&base, Some("tok"));

    let user = warden_client::NewUser {
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        full_name: "Jane Doe".to_string(),
        password: "ChangeMe123!".to_string(),
        role: warden_auth::Role::Technician,
    };
    let err = client.create_user(&user).await.unwrap_err();

    // The caller gets the raw error so it can keep its modal open...
    assert_eq!(err, ApiError::api(409, "username already exists"));
    // ...and the user gets a toast with the backend's message.
    let notices = recorder.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "username already exists");
}

#[tokio::test]
async fn server_error_notifies_generically() {
    let app = Router::new().route(
        "/clients/stats/summary",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") }),
    );
    let base = serve(app).await;
    let (client, recorder, _) = client_for(&base, Some("tok"));

    let err = client.client_stats().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    let notices = recorder.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0].message,
        "The request could not be completed. Please try again."
    );
}

#[tokio::test]
async fn csv_export_carries_exactly_the_active_filters() {
    let app = Router::new().route(
        "/audit/export/csv",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            // Echo the received query back as the "CSV" payload.
            Json(params)
        }),
    );
    let base = serve(app).await;
    let (client, _, _) = client_for(&base, Some("tok"));

    let filter = AuditFilter {
        severity: Some(Severity::Critical),
        start_date: Some("2026-08-01T00:00:00Z".parse().unwrap()),
        end_date: Some("2026-08-28T00:00:00Z".parse().unwrap()),
        ..AuditFilter::default()
    };
    let bytes = client.export_audit_csv(&filter).await.unwrap();

    let echoed: HashMap<String, String> = serde_json::from_slice(&bytes).unwrap();
    let mut keys: Vec<&str> = echoed.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["end_date", "severity", "start_date"]);
    assert_eq!(echoed["severity"], "critical");
}

#[tokio::test]
async fn empty_command_never_reaches_the_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_handler = hits.clone();
    let app = Router::new().route(
        "/tasks",
        post(move || {
            let hits = hits_in_handler.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({}))
            }
        }),
    );
    let base = serve(app).await;
    let (client, _, _) = client_for(&base, Some("tok"));

    let task = NewTask {
        client_id: ClientId::new(),
        command: String::new(),
        timeout_secs: None,
    };
    let err = client.create_task(&task).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn delete_with_empty_body_is_ok() {
    let app = Router::new().route(
        "/users/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let base = serve(app).await;
    let (client, _, _) = client_for(&base, Some("tok"));

    client.delete_user(UserId::new()).await.unwrap();
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Port 9 (discard) is assumed closed.
    let (client, recorder, _) = client_for("http://127.0.0.1:9", Some("tok"));

    let err = client.health().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    let notices = recorder.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0].message,
        "The request could not be completed. Please try again."
    );
}
