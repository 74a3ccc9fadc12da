use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use shelterwatch::dashboard::domain::{ArtilleryRange, Coordinate, ShelterRecord};
use shelterwatch::dashboard::source::{ShelterStore, StoreError, StoreSnapshot};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory store used by the demo command and the route tests. Serves a
/// small but representative snapshot: shelters inside and outside the
/// bombardment radius, an unrated row, and one malformed row.
#[derive(Debug, Default, Clone)]
pub(crate) struct FixtureShelterStore;

impl ShelterStore for FixtureShelterStore {
    fn load(&self) -> Result<StoreSnapshot, StoreError> {
        Ok(fixture_snapshot())
    }
}

pub(crate) fn fixture_reference_point() -> Coordinate {
    Coordinate::new(38.0, 126.8).expect("fixture reference point is valid")
}

fn shelter(
    id: &str,
    address: &str,
    region: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
    occupancy_rate: Option<f64>,
) -> ShelterRecord {
    ShelterRecord {
        id: id.to_string(),
        address: address.to_string(),
        region: region.to_string(),
        latitude,
        longitude,
        occupancy_rate,
    }
}

pub(crate) fn fixture_snapshot() -> StoreSnapshot {
    StoreSnapshot {
        shelters: vec![
            shelter(
                "s-001",
                "101 Tongil-ro, Paju",
                "Gyeonggi",
                Some(37.89),
                Some(126.82),
                Some(22.0),
            ),
            shelter(
                "s-002",
                "25 Sejong-daero, Jung-gu, Seoul",
                "Seoul",
                Some(37.5665),
                Some(126.978),
                Some(48.0),
            ),
            shelter(
                "s-003",
                "77 Uisadang-daero, Yeongdeungpo-gu, Seoul",
                "Seoul",
                Some(37.55),
                Some(126.91),
                Some(112.0),
            ),
            shelter(
                "s-004",
                "300 Haeundae-ro, Busan",
                "Busan",
                Some(35.1796),
                Some(129.0756),
                Some(75.0),
            ),
            shelter(
                "s-005",
                "12 Jungang-ro, Chuncheon",
                "Gangwon",
                Some(37.88),
                Some(127.73),
                None,
            ),
            shelter(
                "s-006",
                "record with no coordinates",
                "Seoul",
                None,
                None,
                Some(35.0),
            ),
        ],
        artillery_ranges: vec![
            ArtilleryRange {
                weapon: "Koksan 170mm SPG".to_string(),
                max_range_km: 54.0,
            },
            ArtilleryRange {
                weapon: "240mm MRL".to_string(),
                max_range_km: 46.0,
            },
        ],
        demarcation_line: vec![
            Coordinate::new(38.03, 126.67).expect("valid vertex"),
            Coordinate::new(37.96, 126.95).expect("valid vertex"),
            Coordinate::new(38.12, 127.28).expect("valid vertex"),
            Coordinate::new(38.31, 127.91).expect("valid vertex"),
        ],
        loaded_at: Utc::now(),
    }
}
