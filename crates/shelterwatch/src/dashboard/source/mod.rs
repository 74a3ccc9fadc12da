mod csv_store;

pub use csv_store::CsvShelterStore;

use super::domain::{ArtilleryRange, Coordinate, ShelterRecord};
use chrono::{DateTime, Utc};

/// Full-table snapshot of the three external datasets, taken once per
/// session. Immutable after load.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub shelters: Vec<ShelterRecord>,
    pub artillery_ranges: Vec<ArtilleryRange>,
    /// Ordered polyline vertices; ordering defines the path geometry.
    pub demarcation_line: Vec<Coordinate>,
    pub loaded_at: DateTime<Utc>,
}

/// Read-only adapter over the external store, abstracted so the session
/// can be exercised against fixtures.
pub trait ShelterStore: Send + Sync {
    fn load(&self) -> Result<StoreSnapshot, StoreError>;
}

/// Adapter failures. All of these abort session initialization; nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("data source unreachable: {detail}")]
    Connectivity { detail: String },
    #[error("malformed {table} data: {source}")]
    Malformed {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("demarcation line vertex {index} is not a valid coordinate")]
    MalformedVertex { index: usize },
    #[error("shelter row {index} has a non-finite occupancy rate")]
    MalformedRate { index: usize },
}
