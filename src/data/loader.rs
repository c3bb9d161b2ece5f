use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::Record;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV is missing required column '{0}'")]
    MissingColumn(String),
    #[error("CSV contains no usable rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every row of a headed CSV file into `T`.
pub fn load_csv<T: Record>(path: &Path) -> Result<Vec<T>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_csv(file).with_context(|| format!("reading {}", path.display()))
}

/// CSV layout: header row naming at least [`Record::COLUMNS`]; extra columns
/// are ignored. Numeric cells that fail to parse become NaN. Rows that cannot
/// be mapped onto `T` at all (e.g. too few fields) are skipped with a warning.
pub fn read_csv<T: Record, R: Read>(source: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in T::COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataError::MissingColumn(column.to_string()).into());
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("Skipping CSV row {row_no}: {e}"),
        }
    }

    if rows.is_empty() {
        return Err(DataError::Empty.into());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{JobPayRecord, PayGapRecord, TemperatureRecord};

    #[test]
    fn reads_temperature_rows() {
        let csv = "year,temperature\n1880,-0.2\n1885,-0.25\n";
        let rows: Vec<TemperatureRecord> = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                TemperatureRecord { year: 1880.0, temperature: -0.2 },
                TemperatureRecord { year: 1885.0, temperature: -0.25 },
            ]
        );
    }

    #[test]
    fn extra_columns_and_order_do_not_matter() {
        let csv = "median_female,note,year,median_male,pay_gap\n8.2,x,1997,10.3,20.1\n";
        let rows: Vec<PayGapRecord> = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].year, 1997.0);
        assert_eq!(rows[0].pay_gap, 20.1);
        assert_eq!(rows[0].median_male, 10.3);
        assert_eq!(rows[0].median_female, 8.2);
    }

    #[test]
    fn malformed_numbers_become_nan() {
        let csv = "year,temperature\n1880,n/a\n,0.1\n";
        let rows: Vec<TemperatureRecord> = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].temperature.is_nan());
        assert!(rows[1].year.is_nan());
    }

    #[test]
    fn quoted_job_names() {
        let csv = "job_subtype,proportion_female,pay_gap,num_jobs,job_type_code\n\
                   \"Chief executives, senior officials\",31.5,15.2,118,1\n";
        let rows: Vec<JobPayRecord> = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].job_subtype, "Chief executives, senior officials");
        assert_eq!(rows[0].num_jobs, 118.0);
        assert_eq!(rows[0].job_type_code, 1.0);
    }

    #[test]
    fn short_rows_are_skipped() {
        let csv = "year,temperature\n1880,-0.2\n1885\n1890,-0.3\n";
        let rows: Vec<TemperatureRecord> = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].year, 1890.0);
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "year,anomaly\n1880,-0.2\n";
        let err = read_csv::<TemperatureRecord, _>(csv.as_bytes()).unwrap_err();
        match err.downcast_ref::<DataError>() {
            Some(DataError::MissingColumn(col)) => assert_eq!(col, "temperature"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_only_is_empty() {
        let err = read_csv::<TemperatureRecord, _>("year,temperature\n".as_bytes()).unwrap_err();
        assert!(matches!(err.downcast_ref::<DataError>(), Some(DataError::Empty)));
    }

    #[test]
    fn missing_file_has_context() {
        let err = load_csv::<TemperatureRecord>(Path::new("/nonexistent/surface.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/surface.csv"));
    }
}
