use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub note: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Response of `GET /model_info`: the feature order and the estimators behind each output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    pub features: Vec<String>,
    pub models: BTreeMap<String, String>,
    pub note: String,
}
