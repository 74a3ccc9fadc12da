use super::super::domain::ScoredShelter;
use super::views::{RegionRankingEntry, TopRiskEntry};
use crate::dashboard::risk;
use std::collections::BTreeMap;

/// Number of shelters surfaced in the top-risk table.
pub const TOP_RISK_LIMIT: usize = 10;

#[derive(Debug, Default)]
struct RegionAccumulator {
    rated_sum: f64,
    rated_count: usize,
    shelter_count: usize,
}

/// Mean occupancy per region over the full (unfiltered) collection,
/// ignoring missing rates, sorted descending by mean. Ties resolve by
/// region label ascending: the accumulator is a BTreeMap keyed by label,
/// and the descending sort by mean is stable.
pub fn region_ranking(shelters: &[ScoredShelter]) -> Vec<RegionRankingEntry> {
    let mut regions: BTreeMap<&str, RegionAccumulator> = BTreeMap::new();

    for shelter in shelters {
        let entry = regions.entry(shelter.record.region.as_str()).or_default();
        entry.shelter_count += 1;
        if let Some(rate) = shelter.record.occupancy_rate {
            entry.rated_sum += rate;
            entry.rated_count += 1;
        }
    }

    let mut ranking: Vec<RegionRankingEntry> = regions
        .into_iter()
        .filter(|(_, acc)| acc.rated_count > 0)
        .map(|(region, acc)| RegionRankingEntry {
            region: region.to_string(),
            mean_occupancy_rate: acc.rated_sum / acc.rated_count as f64,
            shelter_count: acc.shelter_count,
            rated_count: acc.rated_count,
        })
        .collect();

    // total_cmp keeps the sort total even if an unvalidated rate slips
    // through; the store rejects non-finite rates at load.
    ranking.sort_by(|a, b| b.mean_occupancy_rate.total_cmp(&a.mean_occupancy_rate));
    ranking
}

/// Highest-risk shelters over the full (unfiltered) collection. Stable
/// descending sort, so tied scores keep their load order.
pub fn top_by_risk(shelters: &[ScoredShelter], limit: usize) -> Vec<TopRiskEntry> {
    let mut ranked: Vec<&ScoredShelter> = shelters.iter().collect();
    ranked.sort_by_key(|shelter| std::cmp::Reverse(shelter.risk_score));

    ranked
        .into_iter()
        .take(limit)
        .map(|shelter| {
            let band = risk::classify(shelter.risk_score);
            TopRiskEntry {
                id: shelter.record.id.clone(),
                address: shelter.record.address.clone(),
                region: shelter.record.region.clone(),
                occupancy_rate: shelter.record.occupancy_rate,
                risk_score: shelter.risk_score,
                severity: band,
                severity_label: band.label(),
            }
        })
        .collect()
}
