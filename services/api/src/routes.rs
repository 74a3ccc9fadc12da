use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shelterwatch::dashboard::filter::{OccupancyRange, RegionSelector, ShelterFilter};
use shelterwatch::dashboard::report::views::{AnalyticsView, MapView};
use shelterwatch::dashboard::DashboardSession;
use shelterwatch::error::AppError;
use std::sync::Arc;

pub(crate) fn dashboard_router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/dashboard/map", axum::routing::get(map_endpoint))
        .route(
            "/api/v1/dashboard/analytics",
            axum::routing::get(analytics_endpoint),
        )
        .route(
            "/api/v1/dashboard/regions",
            axum::routing::get(regions_endpoint),
        )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MapQuery {
    /// Region selector; "all" (the default) bypasses region matching.
    pub(crate) region: Option<String>,
    /// Inclusive occupancy-rate window, defaulting to [0, 100].
    pub(crate) rate_min: Option<f64>,
    pub(crate) rate_max: Option<f64>,
}

impl MapQuery {
    fn into_filter(self) -> Result<ShelterFilter, AppError> {
        let region = self
            .region
            .map(RegionSelector::from)
            .unwrap_or(RegionSelector::All);

        let default_range = OccupancyRange::default();
        let occupancy = OccupancyRange::new(
            self.rate_min.unwrap_or_else(|| default_range.lo()),
            self.rate_max.unwrap_or_else(|| default_range.hi()),
        )?;

        Ok(ShelterFilter { region, occupancy })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RegionsResponse {
    pub(crate) regions: Vec<String>,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn map_endpoint(
    Extension(session): Extension<Arc<DashboardSession>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapView>, AppError> {
    let filter = query.into_filter()?;
    Ok(Json(session.map_view(&filter)))
}

pub(crate) async fn analytics_endpoint(
    Extension(session): Extension<Arc<DashboardSession>>,
) -> Json<AnalyticsView> {
    Json(session.analytics())
}

pub(crate) async fn regions_endpoint(
    Extension(session): Extension<Arc<DashboardSession>>,
) -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: session.regions(),
    })
}
