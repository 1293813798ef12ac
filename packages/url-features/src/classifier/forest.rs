//! Random forest loaded from a JSON export.
//!
//! Each tree is stored as parallel node arrays: `children_left`,
//! `children_right`, `feature`, `threshold` and per-node class weights
//! `value` for classes `[0, 1]`. A node is a leaf when both children are
//! `-1`; otherwise samples with `x[feature] <= threshold` go left. Children
//! always have a larger index than their parent, so trees are acyclic.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Classifier, Verdict};
use crate::error::{ClassifierError, ClassifierResult};
use crate::schema::FeatureVector;

const LEAF: i64 = -1;

/// One binary decision tree in node-array form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<[f64; 2]>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self, n_features: usize) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err("node arrays have different lengths".to_string());
        }

        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(format!("node {} has exactly one child", node));
                }
                let [safe, malicious] = self.value[node];
                if !(safe >= 0.0 && malicious >= 0.0 && safe + malicious > 0.0) {
                    return Err(format!("leaf {} has no usable class weights", node));
                }
                continue;
            }

            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(format!("node {} has out-of-order child {}", node, child));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!("node {} splits on feature {} of {}", node, feature, n_features));
            }
            if !self.threshold[node].is_finite() {
                return Err(format!("node {} has a non-finite threshold", node));
            }
        }

        Ok(())
    }

    /// Class probabilities `[p_safe, p_malicious]` at the leaf reached by `x`.
    ///
    /// Only called on trees that passed `validate`.
    pub(crate) fn predict_proba(&self, x: &[f64]) -> [f64; 2] {
        let mut node = 0;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                let [safe, malicious] = self.value[node];
                let total = safe + malicious;
                return [safe / total, malicious / total];
            }
            node = if x[self.feature[node] as usize] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForestArtifact {
    n_features: usize,
    #[serde(default = "default_classes")]
    classes: Vec<u8>,
    trees: Vec<DecisionTree>,
}

fn default_classes() -> Vec<u8> {
    vec![0, 1]
}

/// Ensemble of decision trees voting by averaged class probability.
#[derive(Debug, Clone)]
pub struct RandomForest {
    n_features: usize,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Validate and assemble a forest.
    pub fn new(n_features: usize, trees: Vec<DecisionTree>) -> ClassifierResult<Self> {
        if n_features == 0 {
            return Err(invalid("forest expects zero features"));
        }
        if trees.is_empty() {
            return Err(invalid("forest has no trees"));
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|reason| invalid(format!("tree {}: {}", i, reason)))?;
        }
        Ok(Self { n_features, trees })
    }

    pub fn from_json(json: &str) -> ClassifierResult<Self> {
        let artifact: ForestArtifact = serde_json::from_str(json)?;
        if artifact.classes != [0, 1] {
            return Err(invalid(format!(
                "expected classes [0, 1], found {:?}",
                artifact.classes
            )));
        }
        Self::new(artifact.n_features, artifact.trees)
    }

    pub fn load(path: impl AsRef<Path>) -> ClassifierResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let forest = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            trees = forest.trees.len(),
            n_features = forest.n_features,
            "loaded random forest"
        );
        Ok(forest)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean class probabilities over all trees.
    pub fn predict_proba(&self, vector: &FeatureVector) -> ClassifierResult<[f64; 2]> {
        self.check_width(vector)?;
        let mut sum = [0.0, 0.0];
        for tree in &self.trees {
            let [safe, malicious] = tree.predict_proba(vector);
            sum[0] += safe;
            sum[1] += malicious;
        }
        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }

    fn check_width(&self, vector: &FeatureVector) -> ClassifierResult<()> {
        if vector.len() != self.n_features {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.n_features,
                actual: vector.len(),
            });
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, vector: &FeatureVector) -> ClassifierResult<Verdict> {
        let [safe, malicious] = self.predict_proba(vector)?;
        // Ties go to the first class
        let label = if malicious > safe { 1 } else { 0 };
        Ok(Verdict::from_label(label))
    }
}

fn invalid(reason: impl Into<String>) -> ClassifierError {
    ClassifierError::Invalid {
        reason: reason.into(),
    }
}
