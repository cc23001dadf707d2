use crate::models::RegionRecord;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Failure loading the report CSV. Fatal for the whole render cycle: the
/// dashboard either gets a complete table or nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open report file: {0}")]
    Io(#[from] std::io::Error),
    /// Missing expected columns or a row that does not parse as counts.
    #[error("malformed report data: {0}")]
    Malformed(#[from] csv::Error),
}

/// Load the full report table from a CSV file with a header row.
///
/// Numeric columns are coerced to `u64`; no other transformation is applied.
/// Missing columns or non-numeric counts surface as [`LoadError::Malformed`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RegionRecord>, LoadError> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        let row: RegionRecord = rec?;
        rows.push(row);
    }
    Ok(rows)
}

/// Save a row subset as CSV with the report's original header row.
pub fn save_csv<P: AsRef<Path>>(rows: &[RegionRecord], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a row subset as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[RegionRecord], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let rows = vec![RegionRecord {
            region: "Dublin".into(),
            total_adults: 100,
            male_adults: 60,
            female_adults: 40,
            ..Default::default()
        }];
        save_csv(&rows, &csvp).unwrap();
        save_json(&rows, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }

    #[test]
    fn csv_round_trip_preserves_rows() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("rt.csv");
        let rows = vec![
            RegionRecord {
                region: "Dublin".into(),
                total_adults: 100,
                ..Default::default()
            },
            RegionRecord {
                region: "South-West".into(),
                total_adults: 50,
                ..Default::default()
            },
        ];
        save_csv(&rows, &p).unwrap();
        let back = load_csv(&p).unwrap();
        assert_eq!(back, rows);
    }
}
