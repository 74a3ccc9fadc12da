use super::domain::{ArtilleryRange, Coordinate, ScoredShelter};
use super::filter::ShelterFilter;
use super::report;
use super::report::views::{AnalyticsView, MapView, RangeCircleView, ShelterMarkerView};
use super::risk;
use super::source::{ShelterStore, StoreError};
use chrono::Utc;
use tracing::{info, warn};

/// Default map center for the presentation layer.
const MAP_CENTER: Coordinate = Coordinate {
    latitude: 37.5,
    longitude: 127.0,
};

/// Once-initialized, immutable snapshot of the loaded and scored datasets.
/// Owns everything the dashboard serves for the lifetime of the process;
/// queries recompute synchronously per interaction and never mutate state.
#[derive(Debug)]
pub struct DashboardSession {
    reference_point: Coordinate,
    max_range_km: f64,
    shelters: Vec<ScoredShelter>,
    skipped_shelters: usize,
    artillery_ranges: Vec<ArtilleryRange>,
    demarcation_line: Vec<Coordinate>,
}

impl DashboardSession {
    /// Load the three datasets once and score every shelter row against
    /// the session-constant reference point and bombardment radius.
    ///
    /// A store failure is fatal. A shelter row without a usable coordinate
    /// is not: it is logged, counted, and excluded so one bad record
    /// cannot take down the rest of the scoring pass.
    pub fn initialize(
        store: &dyn ShelterStore,
        reference_point: Coordinate,
    ) -> Result<Self, StoreError> {
        let snapshot = store.load()?;

        let max_range_km = snapshot
            .artillery_ranges
            .iter()
            .map(|range| range.max_range_km)
            .fold(0.0_f64, f64::max);

        let mut shelters = Vec::with_capacity(snapshot.shelters.len());
        let mut skipped_shelters = 0;
        for record in &snapshot.shelters {
            match risk::score_shelter(record, reference_point, max_range_km) {
                Ok(scored) => shelters.push(scored),
                Err(err) => {
                    skipped_shelters += 1;
                    warn!(shelter_id = %record.id, %err, "excluding shelter from scoring");
                }
            }
        }

        info!(
            shelters = shelters.len(),
            skipped = skipped_shelters,
            max_range_km,
            "dashboard session initialized"
        );

        Ok(Self {
            reference_point,
            max_range_km,
            shelters,
            skipped_shelters,
            artillery_ranges: snapshot.artillery_ranges,
            demarcation_line: snapshot.demarcation_line,
        })
    }

    pub fn reference_point(&self) -> Coordinate {
        self.reference_point
    }

    pub fn max_range_km(&self) -> f64 {
        self.max_range_km
    }

    pub fn shelters(&self) -> &[ScoredShelter] {
        &self.shelters
    }

    pub fn skipped_shelters(&self) -> usize {
        self.skipped_shelters
    }

    /// Sorted distinct region labels for the region selector.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self
            .shelters
            .iter()
            .map(|shelter| shelter.record.region.clone())
            .collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// Map payload for one filter interaction: filtered markers plus the
    /// static demarcation line and range circle overlays.
    pub fn map_view(&self, filter: &ShelterFilter) -> MapView {
        let markers = filter
            .apply(&self.shelters)
            .into_iter()
            .map(|shelter| {
                let band = risk::classify(shelter.risk_score);
                ShelterMarkerView {
                    id: shelter.record.id,
                    address: shelter.record.address,
                    region: shelter.record.region,
                    latitude: shelter.coordinate.latitude,
                    longitude: shelter.coordinate.longitude,
                    occupancy_rate: shelter.record.occupancy_rate,
                    risk_score: shelter.risk_score,
                    severity: band,
                    severity_label: band.label(),
                    color: band.map_color(),
                }
            })
            .collect();

        let range_circles = self
            .artillery_ranges
            .iter()
            .map(|range| RangeCircleView {
                weapon: range.weapon.clone(),
                center: self.reference_point,
                radius_km: range.max_range_km,
            })
            .collect();

        MapView {
            center: MAP_CENTER,
            reference_point: self.reference_point,
            markers,
            demarcation_line: self.demarcation_line.clone(),
            range_circles,
        }
    }

    /// Chart payloads over the unfiltered collection: mean occupancy per
    /// region and the highest-risk shelters.
    pub fn analytics(&self) -> AnalyticsView {
        AnalyticsView {
            generated_at: Utc::now(),
            region_ranking: report::region_ranking(&self.shelters),
            top_risk: report::top_by_risk(&self.shelters, report::TOP_RISK_LIMIT),
        }
    }
}
