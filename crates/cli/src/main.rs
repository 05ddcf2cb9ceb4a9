//! # sensorwatch-cli
//!
//! Command-line interface for the sensorwatch anomaly scoring pipeline.

use clap::{Parser, Subcommand};
use evaluation::evaluate;
use pipeline::{train, ScoringContext, SensorSeries, TrainingOptions};
use preprocess::ScalerKind;
use scoring::{ForecastConfig, ReconstructionConfig, TrainConfig};
use std::fs::File;
use std::path::PathBuf;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "sensorwatch")]
#[command(about = "Sensor anomaly scoring CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the scaler and models on a reference series
    Train {
        /// Input CSV with `timestamp` and `value` columns
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the fitted artifacts into
        #[arg(short, long)]
        artifacts: PathBuf,

        /// Scaler strategy (minmax, standard)
        #[arg(short, long, default_value = "minmax")]
        scaler: String,

        /// Window length for the forecaster
        #[arg(short, long, default_value = "10")]
        time_steps: usize,

        /// Autoencoder training epochs
        #[arg(long, default_value = "200")]
        epochs: usize,

        /// Autoencoder learning rate
        #[arg(long, default_value = "0.05")]
        learning_rate: f64,
    },

    /// Score a series with previously trained artifacts
    Score {
        /// Input CSV with `timestamp` and `value` columns
        #[arg(short, long)]
        input: PathBuf,

        /// Directory holding the fitted artifacts
        #[arg(short, long)]
        artifacts: PathBuf,

        /// Failure threshold percentile
        #[arg(long, default_value = "95.0")]
        failure_percentile: f64,

        /// Reconstruction anomaly threshold percentile
        #[arg(long, default_value = "99.85")]
        anomaly_percentile: f64,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score a labeled series and report precision/recall/F1
    Evaluate {
        /// Input CSV with `timestamp`, `value`, and a binary label column
        #[arg(short, long)]
        input: PathBuf,

        /// Directory holding the fitted artifacts
        #[arg(short, long)]
        artifacts: PathBuf,

        /// Name of the ground-truth label column
        #[arg(short, long, default_value = "label")]
        label_column: String,
    },
}

/// Load a labeled series: the standard columns plus a 0/1 label column.
fn load_labeled_csv(path: &PathBuf, label_column: &str) -> CliResult<(SensorSeries, Vec<u8>)> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(std::io::BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("Column '{}' not found", name))
    };
    let ts_idx = find("timestamp")?;
    let value_idx = find("value")?;
    let label_idx = find(label_column)?;

    let mut rows: Vec<(i64, f64, u8)> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let timestamp: i64 = record
            .get(ts_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .map_err(|_| "Timestamps in labeled input must be epoch seconds".to_string())?;
        let value: f64 = record
            .get(value_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse value: {}", e))?;
        let label: u8 = record
            .get(label_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .map_err(|_| format!("Labels in '{}' must be 0 or 1", label_column))?;
        rows.push((timestamp, value, label));
    }

    rows.sort_by_key(|&(ts, _, _)| ts);
    let timestamps = rows.iter().map(|&(ts, _, _)| ts).collect();
    let values = rows.iter().map(|&(_, v, _)| v).collect();
    let labels = rows.iter().map(|&(_, _, l)| l).collect();

    let series = SensorSeries::new(timestamps, values).map_err(|e| e.to_string())?;
    Ok((series, labels))
}

/// Write scored results to file or stdout.
fn write_scored_results(
    scored: &pipeline::ScoredSeries,
    output: Option<&PathBuf>,
) -> CliResult<()> {
    let json = serde_json::json!({
        "rows": scored.len(),
        "alerts": scored.alert_timestamps().len(),
        "timestamps": scored.timestamps,
        "value": scored.values,
        "value_normalized": scored.value_normalized,
        "predicted_failure": scored.predicted_failure,
        "autoencoder_anomaly": scored.autoencoder_anomaly,
        "maintenance_alert": scored.maintenance_alert,
    });

    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Results written to {:?}", path);
    } else {
        let text = serde_json::to_string_pretty(&json)
            .map_err(|e| format!("Failed to render JSON: {}", e))?;
        println!("{}", text);
    }

    Ok(())
}

/// Run train command
fn run_train(
    input: PathBuf,
    artifacts: PathBuf,
    scaler: String,
    time_steps: usize,
    epochs: usize,
    learning_rate: f64,
) -> CliResult<()> {
    let series = SensorSeries::from_csv_path(&input).map_err(|e| e.to_string())?;
    println!(
        "Loaded {} data points from {:?}",
        series.len(),
        input.file_name().unwrap_or_default()
    );

    let scaler_kind = ScalerKind::parse(&scaler).map_err(|e| e.to_string())?;

    let options = TrainingOptions {
        scaler_kind,
        time_steps,
        train_config: TrainConfig {
            epochs,
            learning_rate,
        },
    };

    let bundle = train(&series, options).map_err(|e| e.to_string())?;
    bundle.save(&artifacts).map_err(|e| e.to_string())?;

    println!(
        "Trained with time_steps={} and saved artifacts to {:?}",
        bundle.time_steps(),
        artifacts
    );
    Ok(())
}

/// Run score command
fn run_score(
    input: PathBuf,
    artifacts: PathBuf,
    failure_percentile: f64,
    anomaly_percentile: f64,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let series = SensorSeries::from_csv_path(&input).map_err(|e| e.to_string())?;
    println!(
        "Loaded {} data points from {:?}",
        series.len(),
        input.file_name().unwrap_or_default()
    );

    let context = ScoringContext::load(&artifacts)
        .map_err(|e| e.to_string())?
        .with_forecast_config(ForecastConfig::new(failure_percentile))
        .with_reconstruction_config(ReconstructionConfig::new(anomaly_percentile));

    let scored = context.score_series(&series).map_err(|e| e.to_string())?;
    println!(
        "Scored {} rows, {} maintenance alerts",
        scored.len(),
        scored.alert_timestamps().len()
    );

    write_scored_results(&scored, output.as_ref())
}

/// Run evaluate command
fn run_evaluate(input: PathBuf, artifacts: PathBuf, label_column: String) -> CliResult<()> {
    let (series, labels) = load_labeled_csv(&input, &label_column)?;
    println!(
        "Loaded {} labeled data points from {:?}",
        series.len(),
        input.file_name().unwrap_or_default()
    );

    let context = ScoringContext::load(&artifacts).map_err(|e| e.to_string())?;
    let scored = context.score_series(&series).map_err(|e| e.to_string())?;

    let metrics = evaluate(&labels, &scored.maintenance_alert).map_err(|e| e.to_string())?;

    let json = serde_json::json!({
        "rows": scored.len(),
        "precision": metrics.precision,
        "recall": metrics.recall,
        "f1": metrics.f1,
    });
    let text =
        serde_json::to_string_pretty(&json).map_err(|e| format!("Failed to render JSON: {}", e))?;
    println!("{}", text);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Train {
            input,
            artifacts,
            scaler,
            time_steps,
            epochs,
            learning_rate,
        } => run_train(input, artifacts, scaler, time_steps, epochs, learning_rate),

        Commands::Score {
            input,
            artifacts,
            failure_percentile,
            anomaly_percentile,
            output,
        } => run_score(
            input,
            artifacts,
            failure_percentile,
            anomaly_percentile,
            output,
        ),

        Commands::Evaluate {
            input,
            artifacts,
            label_column,
        } => run_evaluate(input, artifacts, label_column),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
