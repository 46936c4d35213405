use crate::math::RoundingHelper;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub penetration_mm: f64,
    pub bead_width_mm: f64,
    pub defect_probability: f64,
    #[serde(deserialize_with = "truthy")]
    pub defect_label: bool,
    /// Echo of the parameters the backend actually used; `None` marks a defaulted field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<BTreeMap<String, Option<f64>>>,
}

impl PredictionResult {
    pub fn status_label(&self) -> &'static str {
        if self.defect_label {
            "DEFECT"
        } else {
            "OK"
        }
    }

    pub fn defect_percent(&self) -> String {
        percent(self.defect_probability)
    }
}

/// One sweep position of `POST /simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    pub position_mm: f64,
    pub travel_speed: f64,
    pub torch_angle: f64,
    pub penetration_mm: f64,
    pub bead_width_mm: f64,
    pub defect_probability: f64,
}

impl SimulationRow {
    pub fn defect_percent(&self) -> String {
        percent(self.defect_probability)
    }
}

/// Response of `POST /simulate`; rows are kept in the order the backend sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Echoed as the backend received it, so it may be zero or negative.
    pub segments: i64,
    pub length_mm: f64,
    #[serde(default)]
    pub simulation: Vec<SimulationRow>,
}

impl SimulationResult {
    pub fn summary(&self) -> String {
        format!("{} segments over {} mm", self.segments, self.length_mm)
    }
}

fn percent(probability: f64) -> String {
    RoundingHelper::to_fixed(probability * 100.0, 1)
}

/// The backend reports the label as `0`/`1`; a bool is accepted as well.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(text) => !text.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    })
}
