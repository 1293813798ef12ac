// Malicious URL Checker - HTTP Core
//
// Serves a single form that runs a submitted URL through the url-features
// extractor and the pre-trained classifier loaded at startup.

pub mod config;
pub mod server;

pub use config::*;
