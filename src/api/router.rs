use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};

use crate::api::handlers::{
    db_test_handler, health_handler, import_handler, index_handler, openapi_handler,
    submit_handler,
};
use crate::api::middleware::{security_headers_middleware, SecurityHeadersConfig};
use crate::application::intake::IntakePipeline;
use crate::application::ports::ContactRepository;
use crate::application::use_cases::{ImportContactsUseCase, SubmitContactUseCase};
use crate::config::Config;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ContactRepository>,
    pub submit_use_case: Arc<SubmitContactUseCase>,
    pub import_use_case: Arc<ImportContactsUseCase>,
    pub security_headers: Arc<SecurityHeadersConfig>,
    pub static_dir: PathBuf,
    pub max_import_bytes: usize,
    pub tls_enabled: bool,
}

impl AppState {
    /// Wire both use cases around one shared pipeline and repository
    pub fn new(repository: Arc<dyn ContactRepository>, config: &Config) -> Self {
        let pipeline = Arc::new(IntakePipeline::new(config.intake_config()));

        Self {
            submit_use_case: Arc::new(SubmitContactUseCase::new(
                Arc::clone(&pipeline),
                Arc::clone(&repository),
            )),
            import_use_case: Arc::new(ImportContactsUseCase::new(
                pipeline,
                Arc::clone(&repository),
            )),
            repository,
            security_headers: Arc::new(SecurityHeadersConfig::for_server(config.tls_enabled())),
            static_dir: config.static_dir.clone(),
            max_import_bytes: config.max_import_bytes,
            tls_enabled: config.tls_enabled(),
        }
    }
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler).with_state(state.tls_enabled))
        .route(
            "/db-test",
            get(db_test_handler).with_state(Arc::clone(&state.repository)),
        )
        .route(
            "/submit-form",
            post(submit_handler).with_state(Arc::clone(&state.submit_use_case)),
        )
        .route(
            "/import-csv",
            post(import_handler)
                .with_state(Arc::clone(&state.import_use_case))
                // Replace axum's 2 MiB default with the configured import limit
                .layer::<_, Infallible>(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(state.max_import_bytes)),
        )
        .route("/api-docs/openapi.json", get(openapi_handler))
        // form.html, style.css, script.js
        .fallback_service(ServeDir::new(&state.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn_with_state(
                    Arc::clone(&state.security_headers),
                    security_headers_middleware,
                )),
        )
}
