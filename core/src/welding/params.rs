use crate::prelude::{ApiRequest, Endpoint};
use crate::welding::results::{PredictionResult, SimulationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Welding process, sent on the wire as `0` (TIG) or `1` (MIG).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeldingMode {
    #[default]
    Tig,
    Mig,
}

impl WeldingMode {
    pub const ALL: [WeldingMode; 2] = [WeldingMode::Tig, WeldingMode::Mig];

    pub fn code(self) -> u8 {
        match self {
            WeldingMode::Tig => 0,
            WeldingMode::Mig => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(WeldingMode::Tig),
            1 => Some(WeldingMode::Mig),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeldingMode::Tig => "TIG (Tungsten Inert Gas)",
            WeldingMode::Mig => "MIG (Metal Inert Gas)",
        }
    }
}

impl fmt::Display for WeldingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for WeldingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for WeldingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        WeldingMode::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown welding mode {code}")))
    }
}

/// Body of `POST /predict`: exactly the eight process parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeldingParameters {
    pub mode: WeldingMode,
    pub current: f64,
    pub voltage: f64,
    pub wire_feed_speed: f64,
    pub travel_speed: f64,
    pub torch_angle: f64,
    pub gas_flow_rate: f64,
    pub material_thickness: f64,
}

impl ApiRequest for WeldingParameters {
    type Response = PredictionResult;

    const ENDPOINT: Endpoint = Endpoint::Predict;
}

/// Body of `POST /simulate`: the predict fields plus the sweep geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(flatten)]
    pub params: WeldingParameters,
    pub length_mm: f64,
    pub segments: f64,
}

impl ApiRequest for SimulationRequest {
    type Response = SimulationResult;

    const ENDPOINT: Endpoint = Endpoint::Simulate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> WeldingParameters {
        WeldingParameters {
            mode: WeldingMode::Tig,
            current: 150.0,
            voltage: 24.0,
            wire_feed_speed: 5.0,
            travel_speed: 6.0,
            torch_angle: 10.0,
            gas_flow_rate: 15.0,
            material_thickness: 3.0,
        }
    }

    #[test]
    fn predict_body_has_exactly_eight_numeric_fields() {
        let body = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            body,
            json!({
                "mode": 0,
                "current": 150.0,
                "voltage": 24.0,
                "wire_feed_speed": 5.0,
                "travel_speed": 6.0,
                "torch_angle": 10.0,
                "gas_flow_rate": 15.0,
                "material_thickness": 3.0
            })
        );
        assert_eq!(body.as_object().unwrap().len(), 8);
    }

    #[test]
    fn simulate_body_flattens_parameters() {
        let request = SimulationRequest {
            params: WeldingParameters {
                mode: WeldingMode::Mig,
                ..sample()
            },
            length_mm: 100.0,
            segments: 10.0,
        };
        let body = serde_json::to_value(request).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert_eq!(body["mode"], json!(1));
        assert_eq!(body["segments"], json!(10.0));
    }

    #[test]
    fn nan_fields_serialize_as_null() {
        let params = WeldingParameters {
            current: f64::NAN,
            ..sample()
        };
        let body = serde_json::to_value(params).unwrap();
        assert!(body["current"].is_null());
    }

    #[test]
    fn unknown_mode_code_is_rejected() {
        assert!(serde_json::from_value::<WeldingMode>(json!(2)).is_err());
        assert_eq!(
            serde_json::from_value::<WeldingMode>(json!(1)).unwrap(),
            WeldingMode::Mig
        );
    }
}
