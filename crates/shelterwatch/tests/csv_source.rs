use shelterwatch::dashboard::source::{CsvShelterStore, ShelterStore, StoreError};
use std::fs;
use std::path::Path;

fn write_fixture_tables(dir: &Path) {
    fs::write(
        dir.join("shelters.csv"),
        "id,address,region,latitude,longitude,occupancy_rate\n\
         s-1,101 Tongil-ro Paju,Gyeonggi,37.89,126.82,20.0\n\
         s-2,25 Sejong-daero Seoul,Seoul,37.5665,126.978,45.5\n\
         s-3,300 Haeundae-ro Busan,Busan,35.1796,129.0756,\n\
         s-4,missing coordinates,Seoul,,,15.0\n",
    )
    .expect("write shelters table");

    fs::write(
        dir.join("artillery_ranges.csv"),
        "weapon,max_range_km\n\
         Koksan 170mm SPG,54.0\n\
         240mm MRL,46.0\n",
    )
    .expect("write artillery table");

    fs::write(
        dir.join("demarcation_line.csv"),
        "latitude,longitude\n\
         38.03,126.67\n\
         37.96,126.95\n\
         38.12,127.28\n",
    )
    .expect("write demarcation table");
}

#[test]
fn loads_all_three_tables_from_a_data_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture_tables(dir.path());

    let store = CsvShelterStore::new(dir.path());
    let snapshot = store.load().expect("snapshot loads");

    assert_eq!(snapshot.shelters.len(), 4);
    assert_eq!(snapshot.shelters[0].region, "Gyeonggi");
    assert_eq!(snapshot.shelters[1].occupancy_rate, Some(45.5));
    assert_eq!(snapshot.shelters[2].occupancy_rate, None);
    assert_eq!(snapshot.shelters[3].latitude, None);

    assert_eq!(snapshot.artillery_ranges.len(), 2);
    assert_eq!(snapshot.artillery_ranges[0].weapon, "Koksan 170mm SPG");

    assert_eq!(snapshot.demarcation_line.len(), 3);
    assert_eq!(snapshot.demarcation_line[0].latitude, 38.03);
}

#[test]
fn missing_table_surfaces_as_connectivity_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture_tables(dir.path());
    fs::remove_file(dir.path().join("artillery_ranges.csv")).expect("remove table");

    let store = CsvShelterStore::new(dir.path());
    match store.load() {
        Err(StoreError::Connectivity { detail }) => {
            assert!(detail.contains("artillery_ranges.csv"));
        }
        other => panic!("expected connectivity error, got {other:?}"),
    }
}

#[test]
fn unparseable_row_surfaces_as_malformed_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture_tables(dir.path());
    fs::write(
        dir.path().join("shelters.csv"),
        "id,address,region,latitude,longitude,occupancy_rate\n\
         s-1,somewhere,Seoul,not-a-latitude,126.98,40.0\n",
    )
    .expect("overwrite shelters table");

    let store = CsvShelterStore::new(dir.path());
    match store.load() {
        Err(StoreError::Malformed { table, .. }) => assert_eq!(table, "shelters.csv"),
        other => panic!("expected malformed table error, got {other:?}"),
    }
}

#[test]
fn non_finite_occupancy_rate_is_rejected_at_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture_tables(dir.path());
    fs::write(
        dir.path().join("shelters.csv"),
        "id,address,region,latitude,longitude,occupancy_rate\n\
         s-1,1 Jongno Seoul,Seoul,37.57,126.98,42.5\n\
         s-2,2 Haeundae Busan,Busan,35.18,129.08,NaN\n",
    )
    .expect("overwrite shelters table");

    let store = CsvShelterStore::new(dir.path());
    match store.load() {
        Err(StoreError::MalformedRate { index }) => assert_eq!(index, 1),
        other => panic!("expected malformed rate error, got {other:?}"),
    }
}

#[test]
fn infinite_occupancy_rate_is_rejected_at_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture_tables(dir.path());
    fs::write(
        dir.path().join("shelters.csv"),
        "id,address,region,latitude,longitude,occupancy_rate\n\
         s-1,1 Jongno Seoul,Seoul,37.57,126.98,inf\n",
    )
    .expect("overwrite shelters table");

    let store = CsvShelterStore::new(dir.path());
    assert!(matches!(
        store.load(),
        Err(StoreError::MalformedRate { index: 0 })
    ));
}

#[test]
fn out_of_range_demarcation_vertex_is_rejected_with_its_index() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture_tables(dir.path());
    fs::write(
        dir.path().join("demarcation_line.csv"),
        "latitude,longitude\n38.03,126.67\n138.0,126.95\n",
    )
    .expect("overwrite demarcation table");

    let store = CsvShelterStore::new(dir.path());
    match store.load() {
        Err(StoreError::MalformedVertex { index }) => assert_eq!(index, 1),
        other => panic!("expected malformed vertex error, got {other:?}"),
    }
}
