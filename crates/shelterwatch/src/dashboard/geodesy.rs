use super::domain::Coordinate;
use geo::{Distance, Geodesic, Point};

/// Ellipsoidal (WGS84) distance between two coordinates in kilometers.
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let from = Point::new(from.longitude, from.latitude);
    let to = Point::new(to.longitude, to.latitude);
    Geodesic.distance(from, to) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("valid test coordinate")
    }

    #[test]
    fn identical_points_are_zero_distance() {
        let kaesong = coord(38.0, 126.8);
        assert!(distance_km(kaesong, kaesong).abs() < 1e-9);
    }

    #[test]
    fn seoul_is_roughly_fifty_kilometers_from_the_reference() {
        let reference = coord(38.0, 126.8);
        let seoul = coord(37.5665, 126.978);
        let distance = distance_km(reference, seoul);
        assert!(
            (40.0..70.0).contains(&distance),
            "unexpected distance {distance}"
        );
    }

    #[test]
    fn busan_is_far_beyond_any_artillery_radius() {
        let reference = coord(38.0, 126.8);
        let busan = coord(35.1796, 129.0756);
        assert!(distance_km(reference, busan) > 250.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = coord(38.0, 126.8);
        let b = coord(37.5665, 126.978);
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        assert!((forward - backward).abs() < 1e-6);
    }
}
