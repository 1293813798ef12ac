//! Trained feature order.
//!
//! The classifier consumes a positional vector, so the extractor's named
//! features have to be laid out in exactly the order used at training time.
//! That order ships as a JSON array of feature names next to the model.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{SchemaError, SchemaResult};
use crate::features::{Feature, Features};

/// Positional feature values ready for the classifier.
pub type FeatureVector = Vec<f64>;

/// Ordered, complete, duplicate-free list of features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    order: Vec<Feature>,
}

impl FeatureSchema {
    /// Extractor order, for tooling and tests that have no trained artifact.
    pub fn natural() -> Self {
        Self {
            order: Feature::ALL.to_vec(),
        }
    }

    /// Validate a list of names against the features the extractor produces.
    pub fn from_names<I, S>(names: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut order = Vec::with_capacity(Feature::COUNT);
        let mut seen = HashSet::new();

        for name in names {
            let name = name.as_ref();
            let feature = Feature::from_name(name)
                .ok_or_else(|| SchemaError::UnknownFeature(name.to_string()))?;
            if !seen.insert(feature) {
                return Err(SchemaError::DuplicateFeature(name.to_string()));
            }
            order.push(feature);
        }

        if let Some(missing) = Feature::ALL.iter().find(|f| !seen.contains(*f)) {
            return Err(SchemaError::MissingFeature(missing.name().to_string()));
        }

        Ok(Self { order })
    }

    /// Parse a JSON array of feature names.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let names: Vec<String> = serde_json::from_str(json)?;
        Self::from_names(names)
    }

    /// Load the trained order from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), features = schema.len(), "loaded feature order");
        Ok(schema)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn features(&self) -> &[Feature] {
        &self.order
    }

    /// Lay out `features` in trained order.
    pub fn project(&self, features: &Features) -> FeatureVector {
        self.order
            .iter()
            .map(|&feature| features.get(feature) as f64)
            .collect()
    }
}
