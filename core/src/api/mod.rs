pub mod client;
pub mod probe;

pub use client::ApiClient;
pub use probe::{HealthStatus, ModelInfo};
