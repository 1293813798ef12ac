//! CLI for checking URLs against the model artifacts
//!
//! Prints the extracted features, the trained-order vector and the verdict
//! for each URL. Useful for verifying a newly exported artifact pair before
//! deploying it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use server_core::config::Config;
use url_features::{Classification, UrlModel};

#[derive(Parser)]
#[command(name = "inspect_url")]
#[command(about = "Extract features from URLs and classify them")]
struct Cli {
    /// URLs to check
    #[arg(required = true)]
    urls: Vec<String>,

    /// Feature-order artifact (defaults to FEATURE_NAMES_PATH)
    #[arg(long)]
    feature_names: Option<PathBuf>,

    /// Classifier artifact (defaults to MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Emit one JSON object per URL
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let feature_names = cli.feature_names.unwrap_or(config.feature_names_path);
    let model_path = cli.model.unwrap_or(config.model_path);
    let model = UrlModel::load(&feature_names, &model_path).with_context(|| {
        format!(
            "Failed to load model from {} and {}",
            feature_names.display(),
            model_path.display()
        )
    })?;

    for url in &cli.urls {
        let classification = model
            .classify(url)
            .with_context(|| format!("Failed to classify {}", url))?;

        if cli.json {
            println!("{}", serde_json::to_string(&classification)?);
        } else {
            print_table(&model, &classification);
        }
    }

    Ok(())
}

fn print_table(model: &UrlModel, classification: &Classification) {
    println!("{}", classification.url);
    for (feature, value) in model.schema().features().iter().zip(&classification.vector) {
        println!("  {:<22}{}", feature.name(), value);
    }
    println!(
        "  {:<22}{} ({})",
        "=> verdict",
        classification.verdict,
        classification.verdict.label()
    );
    println!();
}
