//! API endpoint tests
//!
//! The router runs against an in-memory repository, so these cover routing,
//! body parsing, status codes and response headers without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use contact_intake::{
    api::create_router,
    dto::DatabaseInfo,
    entities::CleanRecord,
    ports::{ContactRepository, RepositoryError},
    value_objects::{ContactId, PostalCodeFormat},
    ApplicationBuilder, Config,
};

/// Repository that keeps inserted contacts in memory
#[derive(Default)]
struct InMemoryContactRepository {
    contacts: Mutex<Vec<CleanRecord>>,
    fail_writes: bool,
}

impl InMemoryContactRepository {
    fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    fn stored(&self) -> Vec<CleanRecord> {
        self.contacts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert_one(&self, record: &CleanRecord) -> Result<ContactId, RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Internal("connection reset".to_string()));
        }
        let mut contacts = self.contacts.lock().unwrap();
        contacts.push(record.clone());
        Ok(ContactId::new(contacts.len() as i64))
    }

    async fn insert_many(&self, records: &[CleanRecord]) -> Result<u64, RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Internal("connection reset".to_string()));
        }
        self.contacts.lock().unwrap().extend_from_slice(records);
        Ok(records.len() as u64)
    }

    async fn verify_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn database_info(&self) -> Result<DatabaseInfo, RepositoryError> {
        Ok(DatabaseInfo {
            database: "memory".to_string(),
            tables: vec!["contacts".to_string()],
        })
    }
}

fn setup_router_with(repo: Arc<InMemoryContactRepository>, config: &Config) -> Router {
    let state = ApplicationBuilder::new(config.clone())
        .with_repository(repo)
        .build()
        .unwrap();
    create_router(state)
}

fn setup_router() -> (Router, Arc<InMemoryContactRepository>) {
    let repo = Arc::new(InMemoryContactRepository::default());
    let app = setup_router_with(Arc::clone(&repo), &Config::default());
    (app, repo)
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/submit-form")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/submit-form")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn csv_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/import-csv")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Helper to extract JSON response
async fn extract_json_response(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn api_test_health_and_db_test() {
    let (app, _repo) = setup_router();

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = extract_json_response(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["tls"], false);

    let req = Request::builder().uri("/db-test").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = extract_json_response(response).await;
    assert_eq!(json["database"], "memory");
    assert_eq!(json["tables"], json!(["contacts"]));
}

#[tokio::test]
async fn api_test_root_redirects_to_form() {
    let (app, _repo) = setup_router();

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/form.html");
}

#[tokio::test]
async fn api_test_valid_form_submission_is_saved() {
    let (app, repo) = setup_router();

    let body = "first_name=Jane&second_name=Doe99&email=jane%40example.com&phone=0851234567&eircode=1a2b3c";
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = extract_json_response(response).await;
    assert_eq!(
        json["message"],
        "Form submitted successfully and saved to database."
    );
    assert_eq!(json["contact"]["postal_code"], "1A2B3C");

    let stored = repo.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email(), "jane@example.com");
}

#[tokio::test]
async fn api_test_json_submission_with_eircode_format() {
    let repo = Arc::new(InMemoryContactRepository::default());
    let config = Config {
        postal_code_format: PostalCodeFormat::Eircode,
        ..Config::default()
    };
    let app = setup_router_with(Arc::clone(&repo), &config);

    let response = app
        .oneshot(json_request(json!({
            "first_name": "Jane",
            "second_name": "Doe99",
            "email": "jane@example.com",
            "phone": "0851234567",
            "postal_code": "d02af30"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(repo.stored()[0].postal_code(), "D02AF30");
}

#[tokio::test]
async fn api_test_invalid_submission_lists_errors_in_order() {
    let (app, repo) = setup_router();

    let body = "first_name=&second_name=Doe&email=not-an-email&phone=12345&eircode=ZZ";
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = extract_json_response(response).await;
    assert_eq!(json["message"], "Form validation failed");

    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["first_name", "email", "phone", "postal_code"]);
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn api_test_injection_attempt_gets_generic_rejection() {
    let (app, repo) = setup_router();

    let response = app
        .oneshot(json_request(json!({
            "first_name": "Jane",
            "second_name": "1 OR 1=1",
            "email": "jane@example.com",
            "phone": "0851234567",
            "postal_code": "1a2b3c"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = extract_json_response(response).await;
    assert_eq!(
        json["error"],
        "Submission rejected: input contains disallowed content"
    );
    assert!(json.get("errors").is_none());
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn api_test_storage_failure_returns_generic_500() {
    let repo = Arc::new(InMemoryContactRepository::failing());
    let app = setup_router_with(repo, &Config::default());

    let body = "first_name=Jane&second_name=Doe&email=jane%40example.com&phone=0851234567&eircode=1a2b3c";
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = extract_json_response(response).await;
    assert_eq!(json["error"], "Server error while saving form data.");
    assert!(!json.to_string().contains("connection reset"));
}

#[tokio::test]
async fn api_test_unsupported_content_type() {
    let (app, _repo) = setup_router();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/submit-form")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("first_name=Jane"))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn api_test_csv_import_reports_skipped_rows() {
    let (app, repo) = setup_router();

    let csv = "\
id,first_name,second_name,email,phone,eircode
1,Jane,Doe,jane@example.com,0851234567,1a2b3c
2,Tom,Smith,tom@example,0861234567,2b3c4d
3,Ann,Lee,ann@example.com,0871234567,3c4d5e
";
    let response = app.oneshot(csv_request(csv)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = extract_json_response(response).await;
    assert_eq!(json["rows_read"], 3);
    assert_eq!(json["inserted"], 2);
    assert_eq!(json["rejected"][0]["row"], 3);
    assert_eq!(json["rejected"][0]["reason"], "invalid");
    assert_eq!(json["rejected"][0]["errors"][0]["field"], "email");

    assert_eq!(repo.stored().len(), 2);
}

#[tokio::test]
async fn api_test_csv_missing_columns_is_bad_request() {
    let (app, repo) = setup_router();

    let response = app
        .oneshot(csv_request("first_name,email\nJane,jane@example.com\n"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = extract_json_response(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("second_name"));
    assert!(message.contains("postal_code"));
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn api_test_csv_over_limit_is_rejected() {
    let repo = Arc::new(InMemoryContactRepository::default());
    let config = Config {
        max_import_bytes: 64,
        ..Config::default()
    };
    let app = setup_router_with(Arc::clone(&repo), &config);

    let mut csv = String::from("first_name,second_name,email,phone,postal_code\n");
    for _ in 0..10 {
        csv.push_str("Jane,Doe,jane@example.com,0851234567,1a2b3c\n");
    }
    let response = app.oneshot(csv_request(&csv)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn api_test_csv_import_above_axum_default_limit_is_accepted() {
    let repo = Arc::new(InMemoryContactRepository::default());
    let config = Config {
        max_import_bytes: 4 * 1024 * 1024,
        ..Config::default()
    };
    let app = setup_router_with(Arc::clone(&repo), &config);

    // About 2.4 MiB, past axum's built-in 2 MiB body limit
    let row = "Jane,Doe,jane@example.com,0851234567,1a2b3c\n";
    let rows = 2_400_000 / row.len();
    let mut csv = String::from("first_name,second_name,email,phone,postal_code\n");
    for _ in 0..rows {
        csv.push_str(row);
    }
    assert!(csv.len() > 2 * 1024 * 1024);

    let response = app.oneshot(csv_request(&csv)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = extract_json_response(response).await;
    assert_eq!(json["inserted"], rows);
    assert_eq!(repo.stored().len(), rows);
}

#[tokio::test]
async fn api_test_security_headers_on_every_response() {
    let (app, _repo) = setup_router();

    for uri in ["/health", "/", "/form.html", "/missing.txt"] {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let headers = response.headers();

        let csp = headers[header::CONTENT_SECURITY_POLICY].to_str().unwrap();
        assert!(csp.contains("default-src 'self'"), "CSP missing on {}", uri);
        assert!(csp.contains("frame-ancestors 'none'"));
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
        assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
    }
}

#[tokio::test]
async fn api_test_hsts_when_tls_configured() {
    let repo = Arc::new(InMemoryContactRepository::default());
    let config = Config {
        tls_cert_path: Some("ssl/server.cert".into()),
        tls_key_path: Some("ssl/server.key".into()),
        ..Config::default()
    };
    let app = setup_router_with(repo, &config);

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(
        response.headers()[header::STRICT_TRANSPORT_SECURITY],
        "max-age=31536000; includeSubDomains"
    );
}

#[tokio::test]
async fn api_test_static_form_is_served() {
    let (app, _repo) = setup_router();

    let req = Request::builder().uri("/form.html").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("action=\"/submit-form\""));

    let req = Request::builder().uri("/missing.txt").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_test_openapi_document() {
    let (app, _repo) = setup_router();

    let req = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = extract_json_response(response).await;
    assert!(json["paths"]["/submit-form"].is_object());
    assert!(json["paths"]["/import-csv"].is_object());
}
