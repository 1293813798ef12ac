//! Classifier abstraction.
//!
//! The model is treated as a black box: it takes a feature vector in trained
//! order and returns a binary label.

mod forest;

pub use forest::{DecisionTree, RandomForest};

use std::fmt;

use serde::Serialize;

use crate::error::ClassifierResult;
use crate::schema::FeatureVector;

/// Binary classification result. Label 1 is malicious, label 0 is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    Safe,
    Malicious,
}

impl Verdict {
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            Verdict::Malicious
        } else {
            Verdict::Safe
        }
    }

    pub fn label(self) -> u8 {
        match self {
            Verdict::Safe => 0,
            Verdict::Malicious => 1,
        }
    }

    /// Display string shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Malicious => "Malicious",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-trained decision function over a positional feature vector.
///
/// Implementations are immutable after construction and shared across
/// request handlers without locking.
pub trait Classifier: Send + Sync {
    /// Vector width the model was trained on.
    fn n_features(&self) -> usize;

    fn predict(&self, vector: &FeatureVector) -> ClassifierResult<Verdict>;
}
