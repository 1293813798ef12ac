//! The loaded model bundle: extractor, trained feature order and classifier.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::classifier::{Classifier, RandomForest, Verdict};
use crate::error::{ModelError, Result};
use crate::features::{FeatureExtractor, Features};
use crate::schema::{FeatureSchema, FeatureVector};

/// Everything produced while classifying one URL.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub url: String,
    pub features: Features,
    pub vector: FeatureVector,
    pub verdict: Verdict,
}

/// Immutable after construction; share it behind an `Arc`.
pub struct UrlModel {
    extractor: FeatureExtractor,
    schema: FeatureSchema,
    classifier: Arc<dyn Classifier>,
}

impl UrlModel {
    /// Pair a feature order with a classifier. Fails when they disagree on
    /// the vector width, so a bad artifact pair is caught before serving.
    pub fn new(schema: FeatureSchema, classifier: Arc<dyn Classifier>) -> Result<Self> {
        if schema.len() != classifier.n_features() {
            return Err(ModelError::WidthMismatch {
                schema: schema.len(),
                classifier: classifier.n_features(),
            });
        }
        Ok(Self {
            extractor: FeatureExtractor::new(),
            schema,
            classifier,
        })
    }

    /// Load the feature-order and random-forest artifacts from disk.
    pub fn load(feature_names_path: impl AsRef<Path>, model_path: impl AsRef<Path>) -> Result<Self> {
        let schema = FeatureSchema::load(feature_names_path)?;
        let forest = RandomForest::load(model_path)?;
        Self::new(schema, Arc::new(forest))
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run `url` through extraction, projection and the classifier.
    pub fn classify(&self, url: &str) -> Result<Classification> {
        let features = self.extractor.extract(url);
        let vector = self.schema.project(&features);
        let verdict = self.classifier.predict(&vector)?;

        tracing::debug!(url = %url, verdict = %verdict, "classified URL");

        Ok(Classification {
            url: url.to_string(),
            features,
            vector,
            verdict,
        })
    }
}
