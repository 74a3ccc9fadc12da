use super::{ShelterStore, StoreError, StoreSnapshot};
use crate::dashboard::domain::{ArtilleryRange, Coordinate, ShelterRecord};
use chrono::Utc;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;

const SHELTERS_TABLE: &str = "shelters.csv";
const ARTILLERY_TABLE: &str = "artillery_ranges.csv";
const DEMARCATION_TABLE: &str = "demarcation_line.csv";

/// Store adapter over full-table CSV exports of the relational source.
/// Expects the three table files inside one data directory.
#[derive(Debug, Clone)]
pub struct CsvShelterStore {
    data_dir: PathBuf,
}

impl CsvShelterStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn open(&self, table: &'static str) -> Result<File, StoreError> {
        let path = self.data_dir.join(table);
        File::open(&path).map_err(|err| StoreError::Connectivity {
            detail: format!("{}: {err}", path.display()),
        })
    }

    fn read_table<T>(&self, table: &'static str) -> Result<Vec<T>, StoreError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let file = self.open(table)?;
        read_rows(file, table)
    }
}

fn read_rows<R, T>(reader: R, table: &'static str) -> Result<Vec<T>, StoreError>
where
    R: std::io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<T>() {
        rows.push(row.map_err(|source| StoreError::Malformed { table, source })?);
    }
    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct DemarcationRow {
    latitude: f64,
    longitude: f64,
}

impl ShelterStore for CsvShelterStore {
    fn load(&self) -> Result<StoreSnapshot, StoreError> {
        let shelters: Vec<ShelterRecord> = self.read_table(SHELTERS_TABLE)?;

        // f64 parsing accepts literals like "NaN" and "inf"; a rate that
        // is present must be a finite percentage.
        for (index, record) in shelters.iter().enumerate() {
            if let Some(rate) = record.occupancy_rate {
                if !rate.is_finite() {
                    return Err(StoreError::MalformedRate { index });
                }
            }
        }

        let artillery_ranges: Vec<ArtilleryRange> = self.read_table(ARTILLERY_TABLE)?;
        let vertices: Vec<DemarcationRow> = self.read_table(DEMARCATION_TABLE)?;

        let mut demarcation_line = Vec::with_capacity(vertices.len());
        for (index, vertex) in vertices.into_iter().enumerate() {
            let coordinate = Coordinate::new(vertex.latitude, vertex.longitude)
                .map_err(|_| StoreError::MalformedVertex { index })?;
            demarcation_line.push(coordinate);
        }

        Ok(StoreSnapshot {
            shelters,
            artillery_ranges,
            demarcation_line,
            loaded_at: Utc::now(),
        })
    }
}
