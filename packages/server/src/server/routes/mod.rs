// HTTP routes
pub mod health;
pub mod malicious_url;

pub use health::*;
pub use malicious_url::*;
