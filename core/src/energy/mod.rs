pub mod gauge;
pub mod inputs;
pub mod results;

pub use gauge::{Gauge, GaugeLevel};
pub use inputs::{EnergyField, EnergyInputs, OptimizeRequest};
pub use results::{hourly_series, total_consumption, HourlySample, OptimizationResult};
