//! Malicious URL classification library
//!
//! Turns a raw URL into a fixed set of lexical features, lays them out in the
//! order the model was trained on, and asks a pre-trained classifier for a
//! verdict.
//!
//! # Usage
//!
//! ```rust,ignore
//! use url_features::UrlModel;
//!
//! let model = UrlModel::load("models/feature_names.json", "models/rf_model.json")?;
//! let result = model.classify("http://bit.ly/abc123")?;
//! println!("{}", result.verdict); // "Safe" or "Malicious"
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Public-suffix aware domain extraction
//! - [`features`] - Feature definitions and the extractor
//! - [`schema`] - Trained feature order and vector projection
//! - [`classifier`] - Classifier trait and the random forest implementation
//! - [`model`] - Startup-loaded bundle tying it all together

pub mod classifier;
pub mod domain;
pub mod error;
pub mod features;
pub mod model;
pub mod schema;

// Re-export core types at crate root
pub use classifier::{Classifier, DecisionTree, RandomForest, Verdict};
pub use domain::DomainExtractor;
pub use error::{ClassifierError, ModelError, SchemaError};
pub use features::{Feature, FeatureExtractor, Features};
pub use model::{Classification, UrlModel};
pub use schema::{FeatureSchema, FeatureVector};
