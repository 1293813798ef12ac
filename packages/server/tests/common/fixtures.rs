//! Model fixtures for router tests.
//!
//! Artifacts are written to a temp directory and loaded through the same
//! path the server binary uses.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;
use url_features::{
    error::ClassifierResult, Classifier, ClassifierError, Feature, FeatureSchema, FeatureVector,
    UrlModel, Verdict,
};

/// Trained order used by the fixtures: extractor order, reversed.
pub fn trained_feature_names() -> Vec<&'static str> {
    Feature::ALL.iter().rev().map(|f| f.name()).collect()
}

/// One-tree forest that flags URL shorteners as malicious and everything
/// else as safe.
pub fn shortener_forest_json(names: &[&str]) -> String {
    let shortened = names
        .iter()
        .position(|n| *n == "url_shortened")
        .expect("url_shortened in feature names");

    json!({
        "n_features": names.len(),
        "classes": [0, 1],
        "trees": [{
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [shortened, -2, -2],
            "threshold": [0.5, -2.0, -2.0],
            "value": [[10.0, 10.0], [9.0, 1.0], [1.0, 9.0]],
        }],
    })
    .to_string()
}

/// Write both artifacts into `dir`
pub fn write_artifacts(dir: &Path, names: &[&str], forest_json: &str) -> Result<()> {
    std::fs::write(dir.join("feature_names.json"), serde_json::to_string(names)?)?;
    std::fs::write(dir.join("rf_model.json"), forest_json)?;
    Ok(())
}

/// Load the shortener model from freshly written artifacts
pub fn shortener_model() -> Result<(TempDir, UrlModel)> {
    let dir = tempfile::tempdir()?;
    let names = trained_feature_names();
    write_artifacts(dir.path(), &names, &shortener_forest_json(&names))?;

    let model = UrlModel::load(
        dir.path().join("feature_names.json"),
        dir.path().join("rf_model.json"),
    )?;
    Ok((dir, model))
}

/// Classifier that fails every prediction
pub struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn n_features(&self) -> usize {
        Feature::COUNT
    }

    fn predict(&self, _vector: &FeatureVector) -> ClassifierResult<Verdict> {
        Err(ClassifierError::Invalid {
            reason: "corrupted weights".to_string(),
        })
    }
}

pub fn broken_model() -> UrlModel {
    UrlModel::new(FeatureSchema::natural(), Arc::new(BrokenClassifier))
        .expect("widths agree")
}
