use super::domain::{Coordinate, GeoError, ScoredShelter, SeverityBand, ShelterRecord};
use super::geodesy;

/// Points added when a shelter sits inside the bombardment radius.
pub const WITHIN_RANGE_POINTS: u8 = 50;

/// Occupancy tier points: scarce capacity scores highest because the
/// shelter is least able to absorb more people.
const LOW_OCCUPANCY_POINTS: u8 = 50;
const MID_OCCUPANCY_POINTS: u8 = 30;
const HIGH_OCCUPANCY_POINTS: u8 = 10;

/// Risk score for one shelter coordinate against the session-constant
/// reference point and bombardment radius. Pure and deterministic; the
/// result is one of {0, 10, 30, 50, 60, 80, 100}.
pub fn score(
    coordinate: Coordinate,
    reference: Coordinate,
    max_range_km: f64,
    occupancy_rate: Option<f64>,
) -> u8 {
    let mut score = 0;

    if geodesy::distance_km(coordinate, reference) <= max_range_km {
        score += WITHIN_RANGE_POINTS;
    }

    if let Some(rate) = occupancy_rate {
        score += occupancy_points(rate);
    }

    score
}

/// A missing occupancy rate contributes nothing; any rate of 60 or more,
/// including rates above 100, contributes exactly the high tier.
fn occupancy_points(rate: f64) -> u8 {
    if rate < 30.0 {
        LOW_OCCUPANCY_POINTS
    } else if rate < 60.0 {
        MID_OCCUPANCY_POINTS
    } else {
        HIGH_OCCUPANCY_POINTS
    }
}

/// Score one raw shelter row. A row without a parseable coordinate fails
/// here with `InvalidCoordinate`; callers decide whether to isolate or
/// abort (the session isolates, see `session::DashboardSession`).
pub fn score_shelter(
    record: &ShelterRecord,
    reference: Coordinate,
    max_range_km: f64,
) -> Result<ScoredShelter, GeoError> {
    let coordinate = record.coordinate()?;
    let risk_score = score(coordinate, reference, max_range_km, record.occupancy_rate);

    Ok(ScoredShelter {
        record: record.clone(),
        coordinate,
        risk_score,
    })
}

/// Map a risk score onto its severity band. Total over all integers.
pub fn classify(score: u8) -> SeverityBand {
    match score {
        90.. => SeverityBand::Critical,
        70..=89 => SeverityBand::High,
        50..=69 => SeverityBand::Medium,
        _ => SeverityBand::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("valid test coordinate")
    }

    fn reference() -> Coordinate {
        coord(38.0, 126.8)
    }

    #[test]
    fn occupancy_tiers_step_down_at_thirty_and_sixty() {
        assert_eq!(occupancy_points(0.0), 50);
        assert_eq!(occupancy_points(29.9), 50);
        assert_eq!(occupancy_points(30.0), 30);
        assert_eq!(occupancy_points(59.9), 30);
        assert_eq!(occupancy_points(60.0), 10);
        assert_eq!(occupancy_points(100.0), 10);
        assert_eq!(occupancy_points(185.0), 10);
    }

    #[test]
    fn in_range_scarce_shelter_scores_full_marks() {
        let shelter = reference();
        assert_eq!(score(shelter, reference(), 80.0, Some(25.0)), 100);
    }

    #[test]
    fn out_of_range_crowded_shelter_scores_ten() {
        let busan = coord(35.1796, 129.0756);
        assert_eq!(score(busan, reference(), 80.0, Some(75.0)), 10);
    }

    #[test]
    fn missing_rate_contributes_nothing() {
        let in_range = coord(37.9, 126.85);
        assert_eq!(score(in_range, reference(), 80.0, None), 50);

        let busan = coord(35.1796, 129.0756);
        assert_eq!(score(busan, reference(), 80.0, None), 0);
    }

    #[test]
    fn classify_covers_every_threshold() {
        assert_eq!(classify(100), SeverityBand::Critical);
        assert_eq!(classify(90), SeverityBand::Critical);
        assert_eq!(classify(89), SeverityBand::High);
        assert_eq!(classify(70), SeverityBand::High);
        assert_eq!(classify(69), SeverityBand::Medium);
        assert_eq!(classify(50), SeverityBand::Medium);
        assert_eq!(classify(49), SeverityBand::Low);
        assert_eq!(classify(0), SeverityBand::Low);
    }

    #[test]
    fn classify_is_monotonic_over_the_score_range() {
        let bands: Vec<_> = (0..=100).map(classify).collect();
        assert!(bands.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn score_shelter_fails_loudly_on_bad_coordinate() {
        let record = ShelterRecord {
            id: "s-bad".to_string(),
            address: "unknown".to_string(),
            region: "Seoul".to_string(),
            latitude: None,
            longitude: Some(126.9),
            occupancy_rate: Some(10.0),
        };

        let result = score_shelter(&record, reference(), 80.0);
        assert!(matches!(result, Err(GeoError::InvalidCoordinate { .. })));
    }
}
