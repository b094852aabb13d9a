use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use tally::{Calculator, ExpressionEvaluator};

const DEFAULT_PORT: u16 = 8080;

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
struct Config {
    port: u16,
}

impl Config {
    fn from_env() -> Self {
        Config {
            port: port_from(std::env::var("PORT").ok()),
        }
    }
}

/// Parse the PORT value, falling back to the default when unset or invalid.
fn port_from(value: Option<String>) -> u16 {
    match value {
        None => DEFAULT_PORT,
        Some(s) if s.is_empty() => DEFAULT_PORT,
        Some(s) => match s.parse() {
            Ok(port) => port,
            Err(_) => {
                warn!("invalid PORT value '{s}', using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        },
    }
}

type SharedEvaluator = Arc<dyn ExpressionEvaluator>;

/// Build the router with its evaluator state. Constructed explicitly at
/// startup and handed to the server, no process-global registration.
fn router(evaluator: SharedEvaluator) -> Router {
    Router::new()
        .route("/api/v1/calculate", post(calculate))
        .with_state(evaluator)
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    expression: String,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CalculateResponse {
    fn result(value: String) -> Self {
        CalculateResponse {
            result: Some(value),
            error: None,
        }
    }

    fn error<S: Into<String>>(message: S) -> Self {
        CalculateResponse {
            result: None,
            error: Some(message.into()),
        }
    }
}

async fn calculate(
    State(evaluator): State<SharedEvaluator>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            debug!("rejected request body: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(CalculateResponse::error("invalid request body")),
            )
                .into_response();
        }
    };

    debug!(expression = %request.expression, "calculate");
    match evaluator.evaluate(&request.expression) {
        Ok(value) if value.is_finite() => (
            StatusCode::OK,
            Json(CalculateResponse::result(format!("{value:.6}"))),
        )
            .into_response(),
        Ok(value) => {
            // The evaluator rejects non-finite results itself; reaching this
            // arm means the evaluator implementation broke its contract.
            error!("evaluator returned non-finite value {value}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CalculateResponse::error("internal server error")),
            )
                .into_response()
        }
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(CalculateResponse::error(err.to_string())),
        )
            .into_response(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let evaluator: SharedEvaluator = Arc::new(Calculator);
    let app = router(evaluator);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    info!("tally_server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
