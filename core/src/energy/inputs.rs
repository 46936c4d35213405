use crate::energy::results::OptimizationResult;
use crate::prelude::{ApiRequest, Endpoint};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Slider-driven sensor readings plus the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyInputs {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub solar_radiation: f64,
    pub occupancy: f64,
    pub hours: f64,
}

impl Default for EnergyInputs {
    fn default() -> Self {
        Self {
            temperature: 30.0,
            humidity: 50.0,
            wind_speed: 10.0,
            solar_radiation: 300.0,
            occupancy: 20.0,
            hours: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyField {
    Temperature,
    Humidity,
    WindSpeed,
    SolarRadiation,
    Occupancy,
    Hours,
}

impl EnergyField {
    pub const ALL: [EnergyField; 6] = [
        EnergyField::Temperature,
        EnergyField::Humidity,
        EnergyField::WindSpeed,
        EnergyField::SolarRadiation,
        EnergyField::Occupancy,
        EnergyField::Hours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EnergyField::Temperature => "TEMPERATURE",
            EnergyField::Humidity => "HUMIDITY",
            EnergyField::WindSpeed => "WIND SPEED",
            EnergyField::SolarRadiation => "SOLAR RADIATION",
            EnergyField::Occupancy => "OCCUPANCY",
            EnergyField::Hours => "DURATION",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            EnergyField::Temperature => "°C",
            EnergyField::Humidity => "%",
            EnergyField::WindSpeed => " km/h",
            EnergyField::SolarRadiation => " W/m²",
            EnergyField::Occupancy => " people",
            EnergyField::Hours => " hrs",
        }
    }

    /// Slider bounds; values are not clamped to them when set programmatically.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            EnergyField::Temperature => -20.0..=50.0,
            EnergyField::Humidity => 0.0..=100.0,
            EnergyField::WindSpeed => 0.0..=100.0,
            EnergyField::SolarRadiation => 0.0..=1000.0,
            EnergyField::Occupancy => 0.0..=200.0,
            EnergyField::Hours => 1.0..=24.0,
        }
    }
}

impl EnergyInputs {
    pub fn value(&self, field: EnergyField) -> f64 {
        match field {
            EnergyField::Temperature => self.temperature,
            EnergyField::Humidity => self.humidity,
            EnergyField::WindSpeed => self.wind_speed,
            EnergyField::SolarRadiation => self.solar_radiation,
            EnergyField::Occupancy => self.occupancy,
            EnergyField::Hours => self.hours,
        }
    }

    pub fn update_field(&mut self, field: EnergyField, value: f64) {
        match field {
            EnergyField::Temperature => self.temperature = value,
            EnergyField::Humidity => self.humidity = value,
            EnergyField::WindSpeed => self.wind_speed = value,
            EnergyField::SolarRadiation => self.solar_radiation = value,
            EnergyField::Occupancy => self.occupancy = value,
            EnergyField::Hours => self.hours = value,
        }
    }

    /// Splits off the duration, which never leaves the client.
    pub fn split(&self) -> (OptimizeRequest, f64) {
        (
            OptimizeRequest {
                temperature: self.temperature,
                humidity: self.humidity,
                wind_speed: self.wind_speed,
                solar_radiation: self.solar_radiation,
                occupancy: self.occupancy,
            },
            self.hours,
        )
    }
}

/// Body of `POST /optimize_energy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub solar_radiation: f64,
    pub occupancy: f64,
}

impl ApiRequest for OptimizeRequest {
    type Response = OptimizationResult;

    const ENDPOINT: Endpoint = Endpoint::OptimizeEnergy;
}
