use crate::energy::inputs::EnergyInputs;

/// Colour band of a radial gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeLevel {
    Normal,
    Elevated,
    Critical,
}

impl GaugeLevel {
    pub fn classify(value: f64, max: f64) -> Self {
        if value > max * 0.8 {
            GaugeLevel::Critical
        } else if value > max * 0.6 {
            GaugeLevel::Elevated
        } else {
            GaugeLevel::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub name: &'static str,
    pub value: f64,
    pub max: f64,
    pub level: GaugeLevel,
}

impl Gauge {
    pub fn new(name: &'static str, value: f64, max: f64) -> Self {
        Self {
            name,
            value,
            max,
            level: GaugeLevel::classify(value, max),
        }
    }

    /// Fill fraction of the half-circle arc, clamped to `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0) as f32
    }

    /// Temperature is shifted by 20 so the -20..50 slider fills a 0..70 dial.
    pub fn for_inputs(inputs: &EnergyInputs) -> [Gauge; 3] {
        [
            Gauge::new("Temp", inputs.temperature + 20.0, 70.0),
            Gauge::new("Humidity", inputs.humidity, 100.0),
            Gauge::new("Wind", inputs.wind_speed, 100.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(GaugeLevel::classify(60.0, 100.0), GaugeLevel::Normal);
        assert_eq!(GaugeLevel::classify(61.0, 100.0), GaugeLevel::Elevated);
        assert_eq!(GaugeLevel::classify(80.0, 100.0), GaugeLevel::Elevated);
        assert_eq!(GaugeLevel::classify(81.0, 100.0), GaugeLevel::Critical);
    }

    #[test]
    fn temperature_gauge_is_offset() {
        let inputs = EnergyInputs {
            temperature: 40.0,
            ..Default::default()
        };
        let [temp, humidity, wind] = Gauge::for_inputs(&inputs);
        assert_eq!(temp.value, 60.0);
        assert_eq!(temp.level, GaugeLevel::Critical);
        assert_eq!(humidity.level, GaugeLevel::Normal);
        assert_eq!(wind.fraction(), 0.1);
    }
}
