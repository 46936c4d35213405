use crate::prelude::{ClientError, Endpoint};
use log::{info, warn};
use std::time::Duration;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn request_ok(&self, endpoint: Endpoint, elapsed: Duration) {
        info!("{} ok in {}ms", endpoint, elapsed.as_millis());
    }

    pub fn request_failed(&self, endpoint: Endpoint, elapsed: Duration, error: &ClientError) {
        match error {
            ClientError::Status {
                message: Some(detail),
                ..
            } => warn!(
                "{} failed in {}ms: {} ({})",
                endpoint,
                elapsed.as_millis(),
                error,
                detail
            ),
            _ => warn!("{} failed in {}ms: {}", endpoint, elapsed.as_millis(), error),
        }
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
