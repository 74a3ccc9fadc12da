use super::domain::ScoredShelter;
use serde::{Deserialize, Serialize};

/// Region predicate driven by the dashboard's region selector. The
/// sentinel value "all" bypasses region matching entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionSelector {
    All,
    Named(String),
}

pub const ALL_REGIONS: &str = "all";

impl RegionSelector {
    pub fn matches(&self, region: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(selected) => selected == region,
        }
    }
}

impl From<String> for RegionSelector {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case(ALL_REGIONS) {
            Self::All
        } else {
            Self::Named(value)
        }
    }
}

impl From<RegionSelector> for String {
    fn from(value: RegionSelector) -> Self {
        match value {
            RegionSelector::All => ALL_REGIONS.to_string(),
            RegionSelector::Named(region) => region,
        }
    }
}

/// Inclusive occupancy-rate window. The slider exposes [0, 200] so that
/// over-filled shelters (rates above 100) stay reachable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancyRange {
    lo: f64,
    hi: f64,
}

pub const OCCUPANCY_RANGE_MAX: f64 = 200.0;

impl OccupancyRange {
    pub fn new(lo: f64, hi: f64) -> Result<Self, FilterError> {
        let in_bounds = lo.is_finite()
            && hi.is_finite()
            && lo >= 0.0
            && hi <= OCCUPANCY_RANGE_MAX
            && lo <= hi;

        if in_bounds {
            Ok(Self { lo, hi })
        } else {
            Err(FilterError::InvalidRange { lo, hi })
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// A missing rate never falls inside the window. Inherited from the
    /// reference dashboard; see the open-question note in DESIGN.md.
    pub fn contains(&self, occupancy_rate: Option<f64>) -> bool {
        match occupancy_rate {
            Some(rate) => self.lo <= rate && rate <= self.hi,
            None => false,
        }
    }
}

impl Default for OccupancyRange {
    /// Slider default: [0, 100].
    fn default() -> Self {
        Self { lo: 0.0, hi: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("occupancy range [{lo}, {hi}] must satisfy 0 <= lo <= hi <= {OCCUPANCY_RANGE_MAX}")]
    InvalidRange { lo: f64, hi: f64 },
}

/// User-driven filter state for one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelterFilter {
    pub region: RegionSelector,
    pub occupancy: OccupancyRange,
}

impl Default for ShelterFilter {
    fn default() -> Self {
        Self {
            region: RegionSelector::All,
            occupancy: OccupancyRange::default(),
        }
    }
}

impl ShelterFilter {
    fn retains(&self, shelter: &ScoredShelter) -> bool {
        self.region.matches(&shelter.record.region)
            && self.occupancy.contains(shelter.record.occupancy_rate)
    }

    /// Derived subset preserving original relative order; the input is
    /// never mutated and an empty result is a valid outcome.
    pub fn apply(&self, shelters: &[ScoredShelter]) -> Vec<ScoredShelter> {
        shelters
            .iter()
            .filter(|shelter| self.retains(shelter))
            .cloned()
            .collect()
    }
}
