//! seqscan — demonstration runner.
//!
//! Loads configuration, initialises structured logging, then analyses
//! either the sequences given on the command line or the configured
//! samples, printing one report per sequence.

use anyhow::{Context, Result};
use tracing::{info, warn};

use seqscan::analysis;
use seqscan::config::{self, AppConfig, OutputFormat, SampleConfig};
use seqscan::types::PriceSequence;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let config_path =
        std::env::var("SEQSCAN_CONFIG").unwrap_or_else(|_| config::DEFAULT_CONFIG_FILE.to_string());
    let cfg = AppConfig::load_or_default(&config_path)?;

    init_logging(&cfg);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let samples = if args.is_empty() {
        cfg.samples.0.clone()
    } else {
        samples_from_args(&args)?
    };

    if samples.is_empty() {
        warn!(path = %config_path, "No samples to analyse");
        return Ok(());
    }

    info!(
        count = samples.len(),
        format = ?cfg.output.format,
        "Analysing sequences"
    );

    for sample in &samples {
        let report = analysis::analyze(&sample.name, &sample.values);
        match cfg.output.format {
            OutputFormat::Text => println!("{report}\n"),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialise report")?
            ),
        }
    }

    Ok(())
}

/// One sample per positional argument, named `arg1`, `arg2`, ...
fn samples_from_args(args: &[String]) -> Result<Vec<SampleConfig>> {
    args.iter()
        .enumerate()
        .map(|(i, raw)| -> Result<SampleConfig> {
            let values = raw
                .parse::<PriceSequence>()
                .with_context(|| format!("Invalid sequence in argument {}: {raw:?}", i + 1))?;
            Ok(SampleConfig {
                name: format!("arg{}", i + 1),
                values,
            })
        })
        .collect()
}

/// Initialise the `tracing` subscriber.
fn init_logging(cfg: &AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));

    let json_logging = cfg.logging.json || std::env::var("SEQSCAN_LOG_JSON").is_ok();

    // Logs go to stderr so stdout carries only the reports.
    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
