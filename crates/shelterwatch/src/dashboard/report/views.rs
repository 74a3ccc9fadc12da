use super::super::domain::{Coordinate, SeverityBand};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One shelter marker, colored by severity. Rendering is external; this is
/// everything the map layer needs to place and describe the marker.
#[derive(Debug, Clone, Serialize)]
pub struct ShelterMarkerView {
    pub id: String,
    pub address: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_rate: Option<f64>,
    pub risk_score: u8,
    pub severity: SeverityBand,
    pub severity_label: &'static str,
    pub color: &'static str,
}

/// Bombardment overlay circle: centered on the reference point, one per
/// artillery record.
#[derive(Debug, Clone, Serialize)]
pub struct RangeCircleView {
    pub weapon: String,
    pub center: Coordinate,
    pub radius_km: f64,
}

/// Full map payload for one filter interaction. An empty marker list is a
/// valid state.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub reference_point: Coordinate,
    pub markers: Vec<ShelterMarkerView>,
    pub demarcation_line: Vec<Coordinate>,
    pub range_circles: Vec<RangeCircleView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionRankingEntry {
    pub region: String,
    pub mean_occupancy_rate: f64,
    pub shelter_count: usize,
    pub rated_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopRiskEntry {
    pub id: String,
    pub address: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_rate: Option<f64>,
    pub risk_score: u8,
    pub severity: SeverityBand,
    pub severity_label: &'static str,
}

/// Chart payloads, always computed over the unfiltered collection.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    pub generated_at: DateTime<Utc>,
    pub region_ranking: Vec<RegionRankingEntry>,
    pub top_risk: Vec<TopRiskEntry>,
}
