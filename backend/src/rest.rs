use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use shared::{LogEntry, LogResponse, SavingsPlan};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::catalog::PlanCatalog;
use crate::config::ServerConfig;

/// Shared handler state. The catalog is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PlanCatalog>,
}

impl AppState {
    pub fn new(catalog: PlanCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Routes mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/savings-plans", get(list_savings_plans))
        .route("/logs", post(log_message))
}

/// Full application: API, CORS for the dev frontend, and the static bundle as fallback.
pub fn app(state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let origin = config.allowed_origin.parse::<HeaderValue>()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", api_router())
        .fallback_service(ServeDir::new(&config.frontend_dist))
        .layer(cors)
        .with_state(state))
}

/// GET /api/savings-plans - the whole catalog as a bare JSON array
pub async fn list_savings_plans(State(state): State<AppState>) -> Json<Vec<SavingsPlan>> {
    info!("GET /api/savings-plans - {} plans", state.catalog.len());
    Json(state.catalog.plans().to_vec())
}

/// POST /api/logs - re-emit a browser log line through tracing
pub async fn log_message(Json(entry): Json<LogEntry>) -> Json<LogResponse> {
    let component = entry.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, entry.message);

    match entry.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "warn" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message),
    }

    Json(LogResponse { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    fn setup_test_app(catalog: PlanCatalog) -> Router {
        api_router().with_state(AppState::new(catalog))
    }

    #[tokio::test]
    async fn test_list_savings_plans_returns_catalog_verbatim() {
        let catalog = PlanCatalog::builtin();
        let expected = catalog.plans().to_vec();
        let app = setup_test_app(catalog);

        let request = Request::builder()
            .method(Method::GET)
            .uri("/savings-plans")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let plans: Vec<SavingsPlan> = serde_json::from_slice(&body).unwrap();
        assert_eq!(plans, expected);
    }

    #[tokio::test]
    async fn test_list_savings_plans_empty_catalog() {
        let app = setup_test_app(PlanCatalog::new(vec![]).unwrap());

        let request = Request::builder()
            .uri("/savings-plans")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_log_message_accepts_any_level() {
        let app = setup_test_app(PlanCatalog::builtin());

        for level in ["debug", "info", "warn", "error", "verbose"] {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/logs")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "level": level,
                        "message": "Error fetching savings plans",
                        "component": "savings-plans"
                    })
                    .to_string(),
                ))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let parsed: LogResponse = serde_json::from_slice(&body).unwrap();
            assert!(parsed.success, "level '{}' should be accepted", level);
        }
    }

    #[tokio::test]
    async fn test_log_message_rejects_malformed_body() {
        let app = setup_test_app(PlanCatalog::builtin());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/logs")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"message": "missing level"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_full_app_serves_api_under_prefix() {
        let dist = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            plans_file: None,
            frontend_dist: dist.path().to_path_buf(),
            allowed_origin: "http://localhost:8080".to_string(),
        };
        let app = app(AppState::new(PlanCatalog::builtin()), &config).unwrap();

        let request = Request::builder()
            .uri("/api/savings-plans")
            .header("origin", "http://localhost:8080")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:8080"
        );
    }

    #[tokio::test]
    async fn test_full_app_rejects_invalid_origin() {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            plans_file: None,
            frontend_dist: "dist".into(),
            allowed_origin: "bad\norigin".to_string(),
        };
        assert!(app(AppState::new(PlanCatalog::builtin()), &config).is_err());
    }
}
