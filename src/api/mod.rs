use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    Router,
    body::Bytes,
    extract::{Json, Path, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::{Calculator, calendar};
use crate::error::{FincalcError, Result};

mod cli;

pub use cli::{Cli, run};

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct CalculatorsResponse {
    calculators: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/calculators", get(calculators_handler))
        .route(
            "/api/calculate/:calculator",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "fincalc HTTP API listening");

    axum::serve(listener, router()).await?;
    Ok(())
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn calculators_handler() -> Response {
    json_response(
        StatusCode::OK,
        CalculatorsResponse {
            calculators: Calculator::ALL.iter().map(|calc| calc.id()).collect(),
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn calculate_get_handler(
    Path(calculator): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    calculate_handler_impl(&calculator, query_to_record(params))
}

async fn calculate_post_handler(Path(calculator): Path<String>, body: Bytes) -> Response {
    match body_to_record(&body) {
        Ok(record) => calculate_handler_impl(&calculator, record),
        Err(err) => failure_response(&err),
    }
}

fn calculate_handler_impl(calculator: &str, record: Value) -> Response {
    let outcome = calculator
        .parse::<Calculator>()
        .and_then(|calc| calc.compute(&record, calendar::today()));
    match outcome {
        Ok(result) => json_response(StatusCode::OK, result),
        Err(err) => failure_response(&err),
    }
}

/// Query strings carry every value as text; the calculators coerce them.
fn query_to_record(params: HashMap<String, String>) -> Value {
    Value::Object(
        params
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect::<Map<String, Value>>(),
    )
}

fn body_to_record(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}

fn status_for(err: &FincalcError) -> StatusCode {
    match err {
        FincalcError::UnknownCalculator(_) => StatusCode::NOT_FOUND,
        FincalcError::Json(_) => StatusCode::BAD_REQUEST,
        FincalcError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure_response(err: &FincalcError) -> Response {
    let status = status_for(err);
    debug!(%status, %err, "request failed");
    error_response(status, &err.to_string())
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
