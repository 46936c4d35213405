use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::time::Duration;

/// Remote operations exposed by the model-serving backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Predict,
    Simulate,
    OptimizeEnergy,
    Health,
    ModelInfo,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Predict,
        Endpoint::Simulate,
        Endpoint::OptimizeEnergy,
        Endpoint::Health,
        Endpoint::ModelInfo,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Predict => "/predict",
            Endpoint::Simulate => "/simulate",
            Endpoint::OptimizeEnergy => "/optimize_energy",
            Endpoint::Health => "/health",
            Endpoint::ModelInfo => "/model_info",
        }
    }

    pub fn is_post(self) -> bool {
        matches!(
            self,
            Endpoint::Predict | Endpoint::Simulate | Endpoint::OptimizeEnergy
        )
    }

    /// Timeout the web clients applied to each call; `None` waits indefinitely.
    pub fn default_timeout(self) -> Option<Duration> {
        match self {
            Endpoint::Predict => Some(Duration::from_millis(10_000)),
            Endpoint::Simulate => Some(Duration::from_millis(20_000)),
            Endpoint::OptimizeEnergy => None,
            Endpoint::Health | Endpoint::ModelInfo => Some(Duration::from_millis(10_000)),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Request body bound to the endpoint it is posted to and the shape it returns.
pub trait ApiRequest: Serialize {
    type Response: DeserializeOwned;

    const ENDPOINT: Endpoint;
}

/// Failure modes of a backend call. They all end up in one `Error: <message>` banner.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("timeout of {after_ms}ms exceeded")]
    Timeout { after_ms: u64 },
    #[error("Network Error: {0}")]
    Transport(String),
    #[error("Request failed with status code {code}")]
    Status { code: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
