use crate::form::coerce_number;
use crate::welding::params::{SimulationRequest, WeldingMode, WeldingParameters};

/// Free-text fields of the welding parameter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeldingField {
    Current,
    Voltage,
    WireFeedSpeed,
    TravelSpeed,
    TorchAngle,
    GasFlowRate,
    MaterialThickness,
    LengthMm,
    Segments,
}

impl WeldingField {
    pub const PROCESS: [WeldingField; 7] = [
        WeldingField::Current,
        WeldingField::Voltage,
        WeldingField::WireFeedSpeed,
        WeldingField::TravelSpeed,
        WeldingField::TorchAngle,
        WeldingField::GasFlowRate,
        WeldingField::MaterialThickness,
    ];

    pub const SIMULATION: [WeldingField; 2] = [WeldingField::LengthMm, WeldingField::Segments];

    pub fn name(self) -> &'static str {
        match self {
            WeldingField::Current => "current",
            WeldingField::Voltage => "voltage",
            WeldingField::WireFeedSpeed => "wire_feed_speed",
            WeldingField::TravelSpeed => "travel_speed",
            WeldingField::TorchAngle => "torch_angle",
            WeldingField::GasFlowRate => "gas_flow_rate",
            WeldingField::MaterialThickness => "material_thickness",
            WeldingField::LengthMm => "length_mm",
            WeldingField::Segments => "segments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeldingField::Current => "Current (A)",
            WeldingField::Voltage => "Voltage (V)",
            WeldingField::WireFeedSpeed => "Wire Feed Speed (mm/s)",
            WeldingField::TravelSpeed => "Travel Speed (mm/s)",
            WeldingField::TorchAngle => "Torch Angle (deg)",
            WeldingField::GasFlowRate => "Gas Flow Rate (L/min)",
            WeldingField::MaterialThickness => "Material Thickness (mm)",
            WeldingField::LengthMm => "Sim Length (mm)",
            WeldingField::Segments => "Segments",
        }
    }
}

/// Current contents of the parameter panel, kept as typed text until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct WeldingForm {
    pub mode: WeldingMode,
    current: String,
    voltage: String,
    wire_feed_speed: String,
    travel_speed: String,
    torch_angle: String,
    gas_flow_rate: String,
    material_thickness: String,
    length_mm: String,
    segments: String,
}

impl Default for WeldingForm {
    fn default() -> Self {
        Self {
            mode: WeldingMode::Tig,
            current: "120".into(),
            voltage: "22".into(),
            wire_feed_speed: "5".into(),
            travel_speed: "6".into(),
            torch_angle: "5".into(),
            gas_flow_rate: "12".into(),
            material_thickness: "2".into(),
            length_mm: "100".into(),
            segments: "10".into(),
        }
    }
}

impl WeldingForm {
    pub fn value(&self, field: WeldingField) -> &str {
        match field {
            WeldingField::Current => &self.current,
            WeldingField::Voltage => &self.voltage,
            WeldingField::WireFeedSpeed => &self.wire_feed_speed,
            WeldingField::TravelSpeed => &self.travel_speed,
            WeldingField::TorchAngle => &self.torch_angle,
            WeldingField::GasFlowRate => &self.gas_flow_rate,
            WeldingField::MaterialThickness => &self.material_thickness,
            WeldingField::LengthMm => &self.length_mm,
            WeldingField::Segments => &self.segments,
        }
    }

    pub fn update_field(&mut self, field: WeldingField, value: String) {
        match field {
            WeldingField::Current => self.current = value,
            WeldingField::Voltage => self.voltage = value,
            WeldingField::WireFeedSpeed => self.wire_feed_speed = value,
            WeldingField::TravelSpeed => self.travel_speed = value,
            WeldingField::TorchAngle => self.torch_angle = value,
            WeldingField::GasFlowRate => self.gas_flow_rate = value,
            WeldingField::MaterialThickness => self.material_thickness = value,
            WeldingField::LengthMm => self.length_mm = value,
            WeldingField::Segments => self.segments = value,
        }
    }

    fn number(&self, field: WeldingField) -> f64 {
        coerce_number(self.value(field))
    }

    pub fn to_parameters(&self) -> WeldingParameters {
        WeldingParameters {
            mode: self.mode,
            current: self.number(WeldingField::Current),
            voltage: self.number(WeldingField::Voltage),
            wire_feed_speed: self.number(WeldingField::WireFeedSpeed),
            travel_speed: self.number(WeldingField::TravelSpeed),
            torch_angle: self.number(WeldingField::TorchAngle),
            gas_flow_rate: self.number(WeldingField::GasFlowRate),
            material_thickness: self.number(WeldingField::MaterialThickness),
        }
    }

    pub fn to_simulation(&self) -> SimulationRequest {
        SimulationRequest {
            params: self.to_parameters(),
            length_mm: self.number(WeldingField::LengthMm),
            segments: self.number(WeldingField::Segments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_one_field_preserves_the_rest() {
        let mut form = WeldingForm::default();
        let before = form.clone();
        form.update_field(WeldingField::Voltage, "31".into());

        assert_eq!(form.value(WeldingField::Voltage), "31");
        for field in WeldingField::PROCESS
            .iter()
            .chain(WeldingField::SIMULATION.iter())
            .filter(|f| **f != WeldingField::Voltage)
        {
            assert_eq!(form.value(*field), before.value(*field));
        }
        assert_eq!(form.mode, before.mode);
    }

    #[test]
    fn parameters_map_field_for_field() {
        let mut form = WeldingForm::default();
        form.update_field(WeldingField::Current, "150".into());
        form.update_field(WeldingField::Voltage, "24".into());
        form.update_field(WeldingField::TorchAngle, "10".into());
        form.update_field(WeldingField::GasFlowRate, "15".into());
        form.update_field(WeldingField::MaterialThickness, "3".into());

        let params = form.to_parameters();
        assert_eq!(params.mode, WeldingMode::Tig);
        assert_eq!(params.current, 150.0);
        assert_eq!(params.voltage, 24.0);
        assert_eq!(params.wire_feed_speed, 5.0);
        assert_eq!(params.travel_speed, 6.0);
        assert_eq!(params.torch_angle, 10.0);
        assert_eq!(params.gas_flow_rate, 15.0);
        assert_eq!(params.material_thickness, 3.0);
    }

    #[test]
    fn simulation_request_uses_sweep_fields() {
        let mut form = WeldingForm::default();
        form.mode = WeldingMode::Mig;
        form.update_field(WeldingField::Segments, "".into());
        let request = form.to_simulation();
        assert_eq!(request.params.mode, WeldingMode::Mig);
        assert_eq!(request.length_mm, 100.0);
        assert_eq!(request.segments, 0.0);
    }

    #[test]
    fn unparsable_text_is_not_rejected_until_submit() {
        let mut form = WeldingForm::default();
        form.update_field(WeldingField::Current, "lots".into());
        assert_eq!(form.value(WeldingField::Current), "lots");
        assert!(form.to_parameters().current.is_nan());
    }
}
