//! Sensor series input and scored output tables.

use crate::error::{PipelineError, Result};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// An ordered univariate sensor series.
///
/// Timestamps are epoch seconds, strictly increasing, with no implicit
/// gap-filling. The index is preserved through every transform so alerts
/// map back to original timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorSeries {
    pub timestamps: Vec<i64>,
    pub values: Vec<f64>,
}

impl SensorSeries {
    /// Build a series from aligned timestamp and value columns.
    pub fn new(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(PipelineError::InvalidInput(format!(
                "timestamp and value columns differ in length: {} vs {}",
                timestamps.len(),
                values.len()
            )));
        }
        if timestamps.is_empty() {
            return Err(PipelineError::InvalidInput(
                "series contains no data rows".to_string(),
            ));
        }
        if timestamps.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PipelineError::InvalidInput(
                "timestamps must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { timestamps, values })
    }

    /// Read a series from CSV with `timestamp` and `value` columns.
    ///
    /// Timestamps may be epoch seconds, RFC 3339, or the common
    /// `YYYY-MM-DD HH:MM:SS` form. Rows are sorted by timestamp before
    /// validation, mirroring callers that upload unsorted exports.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| PipelineError::InvalidInput(format!("failed to read headers: {}", e)))?
            .clone();
        let ts_idx = headers
            .iter()
            .position(|h| h == "timestamp")
            .ok_or_else(|| PipelineError::InvalidInput("missing 'timestamp' column".to_string()))?;
        let value_idx = headers
            .iter()
            .position(|h| h == "value")
            .ok_or_else(|| PipelineError::InvalidInput("missing 'value' column".to_string()))?;

        let mut rows: Vec<(i64, f64)> = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| {
                PipelineError::InvalidInput(format!("failed to read row {}: {}", line + 1, e))
            })?;
            let ts_field = record.get(ts_idx).unwrap_or("");
            let value_field = record.get(value_idx).unwrap_or("");

            let timestamp = parse_timestamp(ts_field).ok_or_else(|| {
                PipelineError::InvalidInput(format!(
                    "row {}: unparseable timestamp '{}'",
                    line + 1,
                    ts_field
                ))
            })?;
            let value: f64 = value_field.trim().parse().map_err(|_| {
                PipelineError::InvalidInput(format!(
                    "row {}: unparseable value '{}'",
                    line + 1,
                    value_field
                ))
            })?;
            rows.push((timestamp, value));
        }

        rows.sort_by_key(|&(ts, _)| ts);
        let (timestamps, values) = rows.into_iter().unzip();
        Self::new(timestamps, values)
    }

    /// Read a series from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref()).map_err(|e| {
            PipelineError::InvalidInput(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_csv(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_timestamp(field: &str) -> Option<i64> {
    let field = field.trim();
    if let Ok(epoch) = field.parse::<i64>() {
        return Some(epoch);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(field) {
        return Some(dt.timestamp());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(field, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc().timestamp());
    }
    None
}

/// The input table augmented with normalization and alert columns.
///
/// All columns are index-aligned with the input series, and
/// `maintenance_alert[i] == predicted_failure[i] OR autoencoder_anomaly[i]`
/// holds for every row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSeries {
    pub timestamps: Vec<i64>,
    pub values: Vec<f64>,
    pub value_normalized: Vec<f64>,
    pub predicted_failure: Vec<u8>,
    pub autoencoder_anomaly: Vec<u8>,
    pub maintenance_alert: Vec<u8>,
}

impl ScoredSeries {
    /// Row count.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Timestamps of rows carrying a maintenance alert.
    pub fn alert_timestamps(&self) -> Vec<i64> {
        self.timestamps
            .iter()
            .zip(self.maintenance_alert.iter())
            .filter_map(|(&ts, &alert)| if alert == 1 { Some(ts) } else { None })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_alignment() {
        let err = SensorSeries::new(vec![1, 2], vec![1.0]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_unsorted_timestamps() {
        let err = SensorSeries::new(vec![2, 1], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_duplicate_timestamps() {
        let err = SensorSeries::new(vec![1, 1], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn test_from_csv_epoch_seconds() {
        let csv = "timestamp,value\n100,1.5\n200,2.5\n300,3.5\n";
        let series = SensorSeries::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.timestamps, vec![100, 200, 300]);
        assert_eq!(series.values, vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_from_csv_datetime_format() {
        let csv = "timestamp,value\n2024-01-01 00:00:00,1.0\n2024-01-01 00:05:00,2.0\n";
        let series = SensorSeries::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps[1] - series.timestamps[0], 300);
    }

    #[test]
    fn test_from_csv_sorts_rows() {
        let csv = "timestamp,value\n300,3.0\n100,1.0\n200,2.0\n";
        let series = SensorSeries::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.timestamps, vec![100, 200, 300]);
        assert_eq!(series.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_csv_missing_column() {
        let csv = "time,value\n100,1.0\n";
        let err = SensorSeries::from_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("timestamp"));
    }

    #[test]
    fn test_from_csv_bad_value() {
        let csv = "timestamp,value\n100,abc\n";
        let err = SensorSeries::from_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn test_from_csv_empty_table() {
        let csv = "timestamp,value\n";
        let err = SensorSeries::from_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn test_alert_timestamps() {
        let scored = ScoredSeries {
            timestamps: vec![10, 20, 30],
            values: vec![1.0, 2.0, 3.0],
            value_normalized: vec![0.0, 0.5, 1.0],
            predicted_failure: vec![0, 1, 0],
            autoencoder_anomaly: vec![0, 0, 1],
            maintenance_alert: vec![0, 1, 1],
        };
        assert_eq!(scored.alert_timestamps(), vec![20, 30]);
    }
}
