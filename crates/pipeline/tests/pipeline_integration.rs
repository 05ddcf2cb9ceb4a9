//! Integration tests for pipeline

use pipeline::{train, PipelineError, ScoringContext, SensorSeries, TrainingOptions};
use preprocess::ScalerKind;

/// Slow sawtooth with one hard spike near the end.
fn spiky_series() -> SensorSeries {
    let mut values: Vec<f64> = (0..60).map(|i| 20.0 + (i % 6) as f64 * 0.5).collect();
    values[50] = 45.0;
    let timestamps: Vec<i64> = (0..60).map(|i| 1_700_000_000 + i * 300).collect();
    SensorSeries::new(timestamps, values).unwrap()
}

fn training_options() -> TrainingOptions {
    TrainingOptions {
        time_steps: 6,
        ..TrainingOptions::default()
    }
}

#[test]
fn test_train_then_score_end_to_end() {
    let series = spiky_series();
    let bundle = train(&series, training_options()).unwrap();
    assert_eq!(bundle.time_steps(), 6);

    let context = ScoringContext::from_bundle(bundle);
    let scored = context.score_series(&series).unwrap();

    assert_eq!(scored.len(), series.len());
    assert_eq!(scored.timestamps, series.timestamps);
    assert_eq!(scored.value_normalized.len(), series.len());
    assert_eq!(scored.predicted_failure.len(), series.len());
    assert_eq!(scored.autoencoder_anomaly.len(), series.len());

    // Fused column is the elementwise OR of the two alert signals.
    for i in 0..scored.len() {
        let expected =
            u8::from(scored.predicted_failure[i] == 1 || scored.autoencoder_anomaly[i] == 1);
        assert_eq!(scored.maintenance_alert[i], expected);
    }

    // No window exists for the leading points.
    assert!(scored.predicted_failure[..6].iter().all(|&f| f == 0));
}

#[test]
fn test_artifacts_round_trip_preserves_flags() {
    let series = spiky_series();
    let bundle = train(&series, training_options()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    bundle.save(dir.path()).unwrap();

    let in_memory = ScoringContext::from_bundle(bundle)
        .score_series(&series)
        .unwrap();
    let reloaded = ScoringContext::load(dir.path())
        .unwrap()
        .score_series(&series)
        .unwrap();

    assert_eq!(reloaded.predicted_failure, in_memory.predicted_failure);
    assert_eq!(reloaded.autoencoder_anomaly, in_memory.autoencoder_anomaly);
    assert_eq!(reloaded.maintenance_alert, in_memory.maintenance_alert);
}

#[test]
fn test_standard_scaler_round_trips_through_artifacts() {
    let series = spiky_series();
    let options = TrainingOptions {
        scaler_kind: ScalerKind::Standard,
        time_steps: 6,
        ..TrainingOptions::default()
    };
    let bundle = train(&series, options).unwrap();

    let dir = tempfile::tempdir().unwrap();
    bundle.save(dir.path()).unwrap();

    let scored = ScoringContext::load(dir.path())
        .unwrap()
        .score_series(&series)
        .unwrap();
    assert_eq!(scored.len(), series.len());
}

#[test]
fn test_scoring_batch_shorter_than_window_is_benign() {
    let series = spiky_series();
    let context = ScoringContext::from_bundle(train(&series, training_options()).unwrap());

    let short = SensorSeries::new(
        series.timestamps[..4].to_vec(),
        series.values[..4].to_vec(),
    )
    .unwrap();
    let scored = context.score_series(&short).unwrap();

    assert_eq!(scored.predicted_failure, vec![0, 0, 0, 0]);
    assert_eq!(scored.len(), 4);
}

#[test]
fn test_training_series_too_short() {
    let series = SensorSeries::new(vec![1, 2, 3], vec![1.0, 2.0, 3.0]).unwrap();
    let err = train(&series, training_options()).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[test]
fn test_csv_ingest_feeds_training_and_scoring() {
    let series = spiky_series();
    let mut csv = String::from("timestamp,value\n");
    for (ts, value) in series.timestamps.iter().zip(series.values.iter()) {
        csv.push_str(&format!("{},{}\n", ts, value));
    }

    let parsed = SensorSeries::from_csv(csv.as_bytes()).unwrap();
    assert_eq!(parsed.timestamps, series.timestamps);

    let context = ScoringContext::from_bundle(train(&parsed, training_options()).unwrap());
    let scored = context.score_series(&parsed).unwrap();

    // Alert timestamps point back into the input timeline.
    for ts in scored.alert_timestamps() {
        assert!(series.timestamps.contains(&ts));
    }
}

#[test]
fn test_missing_artifact_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = train(&spiky_series(), training_options()).unwrap();
    bundle.save(dir.path()).unwrap();
    std::fs::remove_file(dir.path().join("forecaster.json")).unwrap();

    let err = ScoringContext::load(dir.path()).unwrap_err();
    assert!(matches!(err, PipelineError::ArtifactLoad(_)));
}
