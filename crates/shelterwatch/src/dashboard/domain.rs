use serde::{Deserialize, Serialize};

/// Validated WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if valid {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(GeoError::InvalidCoordinate {
                latitude: Some(latitude),
                longitude: Some(longitude),
            })
        }
    }
}

/// Geometry failures. A shelter row with an unusable coordinate must fail
/// its own scoring loudly rather than fall back to a zero distance.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("coordinate ({latitude:?}, {longitude:?}) is not a usable WGS84 pair")]
    InvalidCoordinate {
        latitude: Option<f64>,
        longitude: Option<f64>,
    },
}

/// Raw shelter row as delivered by the data source. Coordinates and the
/// occupancy rate are nullable at this stage; validation happens when the
/// row is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterRecord {
    pub id: String,
    pub address: String,
    pub region: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Percentage of capacity in use. May exceed 100 for over-filled
    /// shelters; the filter slider allows up to 200.
    pub occupancy_rate: Option<f64>,
}

impl ShelterRecord {
    pub fn coordinate(&self) -> Result<Coordinate, GeoError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude),
            _ => Err(GeoError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            }),
        }
    }
}

/// Shelter row after risk scoring. The raw record is kept intact; the
/// validated coordinate and score ride alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredShelter {
    pub record: ShelterRecord,
    pub coordinate: Coordinate,
    pub risk_score: u8,
}

/// One weapon system and its maximum strike distance. The maximum across
/// all records defines the bombardment radius used for scoring; each record
/// also renders as an overlay circle on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtilleryRange {
    pub weapon: String,
    pub max_range_km: f64,
}

/// Discrete severity derived from a risk score. Variant order is the
/// severity order, so the derived `Ord` matches the domain ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Marker color understood by the map layer (folium palette).
    pub const fn map_color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "orange",
            Self::High => "orangered",
            Self::Critical => "darkred",
        }
    }
}
