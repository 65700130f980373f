//! Embedded HTTP server for the launch dashboard.
//!
//! Routes:
//! - `GET /api/options`                       dropdown options and payload slider bounds
//! - `GET /api/charts/pie?site=`              success pie chart spec
//! - `GET /api/charts/scatter?site=&lo=&hi=`  payload/outcome scatter spec
//! - `GET /healthz`                           liveness
//!
//! Everything else is served from the built dashboard directory when one
//! is given.

use crate::charts::DashboardOptions;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use slr_data::pie::PieChart;
use slr_data::scatter::ScatterChart;
use slr_data::LaunchData;
use std::path::PathBuf;
use tower_http::services::ServeDir;

/// Failure inside a handler, reported as a 500 with the error chain.
pub struct ApiError(anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", self.0)).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PieParams {
    pub site: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScatterParams {
    pub site: Option<String>,
    pub lo: Option<f64>,
    pub hi: Option<f64>,
}

pub async fn options(State(data): State<LaunchData>) -> Json<DashboardOptions> {
    Json(DashboardOptions::from_data(&data))
}

pub async fn pie_chart(
    State(data): State<LaunchData>,
    Query(params): Query<PieParams>,
) -> Result<Json<PieChart>, ApiError> {
    Ok(Json(data.success_pie(params.site.as_deref())?))
}

pub async fn scatter_chart(
    State(data): State<LaunchData>,
    Query(params): Query<ScatterParams>,
) -> Result<Json<ScatterChart>, ApiError> {
    let range = data.payload_range_or_full(params.lo, params.hi);
    Ok(Json(data.payload_scatter(params.site.as_deref(), range)?))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Build the router. `dist` is the built dashboard to serve at `/`.
pub fn app(data: LaunchData, dist: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route("/api/options", get(options))
        .route("/api/charts/pie", get(pie_chart))
        .route("/api/charts/scatter", get(scatter_chart))
        .route("/healthz", get(healthz))
        .with_state(data);

    match dist {
        Some(dir) => {
            router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        None => router,
    }
}

/// Bind `host:port` and serve until the process is stopped.
pub async fn run_server(
    data: LaunchData,
    host: &str,
    port: u16,
    dist: Option<PathBuf>,
) -> anyhow::Result<()> {
    match &dist {
        Some(dir) if !dir.is_dir() => {
            log::warn!("dashboard directory {} does not exist", dir.display())
        }
        Some(dir) => log::info!("serving dashboard from {}", dir.display()),
        None => log::info!("no --dist given, serving the chart API only"),
    }

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    log::info!("launch dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(data, dist)).await?;
    Ok(())
}
