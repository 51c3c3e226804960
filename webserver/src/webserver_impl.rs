//! Main webserver implementation
//!
//! Contains the WebServer struct that wires the injected services into
//! an axum router, plus the HTTP handlers themselves.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use engine::model::round_for_display;
use shared::logging::{self, Component};
use shared::{ParameterTable, RiskLevel};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::{FileManager, PredictionService, StaticFileResponse};
use crate::types::{OptimizeRequest, PredictRequest, SettingsOverrides};

/// Main webserver struct with dependency injection
pub struct WebServer<P, F>
where
    P: PredictionService,
    F: FileManager,
{
    state: Arc<WebServerState>,
    prediction_service: Arc<P>,
    file_manager: Arc<F>,
}

// Manual Clone: the services live behind Arc, so P and F need no Clone bound
impl<P, F> Clone for WebServer<P, F>
where
    P: PredictionService,
    F: FileManager,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            prediction_service: self.prediction_service.clone(),
            file_manager: self.file_manager.clone(),
        }
    }
}

impl<P, F> WebServer<P, F>
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    /// Create a new webserver with injected services
    pub fn new(prediction_service: P, file_manager: F) -> Self {
        Self {
            state: Arc::new(WebServerState::new()),
            prediction_service: Arc::new(prediction_service),
            file_manager: Arc::new(file_manager),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Static demo page
            .route("/", get(serve_index))
            .route("/static/*path", get(serve_static))
            // API routes
            .route("/api/predict", post(predict_handler))
            .route("/api/optimize", post(optimize_handler))
            .route("/api/optimize/csv", post(optimize_csv_handler))
            .route("/api/status", get(status_handler))
            // Health check
            .route("/health", get(health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // Allow CORS for development
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the webserver and block until shutdown
    pub async fn run(&self, addr: SocketAddr) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        logging::log_startup(Component::WebServer, &format!("HTTP server on http://{addr}"));
        info!("📊 Prediction panel available at http://{addr}/");

        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("Server error: {e}");
            }
        });

        tokio::select! {
            _ = server_task => {
                logging::log_shutdown(Component::WebServer, "HTTP server task completed");
            }
            _ = tokio::signal::ctrl_c() => {
                logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal");
                self.state.set_running(false);
            }
        }

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}

// HTTP Handlers

/// Map a service error to a status code, logging it
fn error_status(endpoint: &str, error: &WebServerError) -> StatusCode {
    if error.is_client_error() {
        warn!(endpoint, %error, "rejected request");
        StatusCode::BAD_REQUEST
    } else {
        logging::log_error(Component::WebServer, endpoint, error);
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Build an HTTP response from a static file
fn file_response(file: StaticFileResponse) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.content_type);
    if let Some(cache_control) = file.cache_control {
        builder = builder.header(header::CACHE_CONTROL, cache_control);
    }
    builder
        .body(Body::from(file.content))
        .unwrap_or_else(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response())
}

/// Serve the main demo page
async fn serve_index<P, F>(State(server): State<WebServer<P, F>>) -> Response
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    match server.file_manager.serve_file("index.html").await {
        Ok(file) => file_response(file),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load demo page").into_response(),
    }
}

/// Serve static files
async fn serve_static<P, F>(
    axum::extract::Path(path): axum::extract::Path<String>,
    State(server): State<WebServer<P, F>>,
) -> Response
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    match server.file_manager.serve_file(&path).await {
        Ok(file) => file_response(file),
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Single prediction endpoint - /api/predict
async fn predict_handler<P, F>(
    State(server): State<WebServer<P, F>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Value>, StatusCode>
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    match server.prediction_service.predict(request.parameters()).await {
        Ok(prediction) => {
            let served = server.state.record_prediction();
            info!(
                predicted_hic = prediction.predicted_hic,
                risk = prediction.risk_level.as_str(),
                served,
                "prediction served"
            );

            Ok(Json(json!({
                "status": "success",
                "data": {
                    "predicted_hic": round_for_display(prediction.predicted_hic),
                    "risk_level": prediction.risk_level.as_str(),
                    "risk_label": prediction.risk_level.label(),
                    "safe_limit": RiskLevel::SAFE_LIMIT,
                    "moderate_limit": RiskLevel::MODERATE_LIMIT,
                    "timestamp": Utc::now().timestamp()
                }
            })))
        }
        Err(e) => Err(error_status("/api/predict", &e)),
    }
}

/// Table optimization endpoint - /api/optimize
async fn optimize_handler<P, F>(
    State(server): State<WebServer<P, F>>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<Value>, StatusCode>
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    let table = ParameterTable::from_rows(request.rows);
    let overrides = request.settings.unwrap_or_default();

    match server
        .prediction_service
        .optimize(table, overrides, request.include_grid)
        .await
    {
        Ok(outcome) => {
            let runs = server.state.record_run();
            info!(runs, summary = %outcome.report.summary(), "optimization run served");

            Ok(Json(json!({
                "status": "success",
                "data": {
                    "run_id": Uuid::new_v4(),
                    "report": outcome.report,
                    "rows": outcome.rows,
                    "grid": outcome.grid
                }
            })))
        }
        Err(e) => Err(error_status("/api/optimize", &e)),
    }
}

/// Table optimization from an uploaded FEA CSV - /api/optimize/csv
///
/// Takes the raw CSV text the browser reads from the uploaded file and
/// runs the loop with the server's default settings.
async fn optimize_csv_handler<P, F>(
    State(server): State<WebServer<P, F>>,
    body: String,
) -> Result<Json<Value>, StatusCode>
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    let table = match engine::ingest::read_table(body.as_bytes()) {
        Ok(table) => table,
        Err(e) => {
            warn!(endpoint = "/api/optimize/csv", %e, "rejected CSV upload");
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    match server
        .prediction_service
        .optimize(table, SettingsOverrides::default(), false)
        .await
    {
        Ok(outcome) => {
            let runs = server.state.record_run();
            info!(runs, summary = %outcome.report.summary(), "CSV optimization run served");

            Ok(Json(json!({
                "status": "success",
                "data": {
                    "run_id": Uuid::new_v4(),
                    "report": outcome.report,
                    "rows": outcome.rows
                }
            })))
        }
        Err(e) => Err(error_status("/api/optimize/csv", &e)),
    }
}

/// Get server status
async fn status_handler<P, F>(State(server): State<WebServer<P, F>>) -> Json<Value>
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    Json(json!({
        "status": "running",
        "uptime_seconds": server.state.get_uptime_seconds(),
        "predictions_served": server.state.prediction_count(),
        "optimization_runs": server.state.run_count(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Health check endpoint
async fn health_check<P, F>(State(server): State<WebServer<P, F>>) -> Json<Value>
where
    P: PredictionService + 'static,
    F: FileManager + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": server.state.get_uptime_seconds()
    }))
}
