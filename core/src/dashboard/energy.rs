use crate::energy::{
    hourly_series, total_consumption, EnergyField, EnergyInputs, Gauge, HourlySample,
    OptimizationResult, OptimizeRequest,
};
use log::info;
use std::fmt;

/// Header status lamp of the HMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Ready,
    Processing,
    Optimized,
    Error,
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SystemStatus::Ready => "READY",
            SystemStatus::Processing => "PROCESSING",
            SystemStatus::Optimized => "OPTIMIZED",
            SystemStatus::Error => "ERROR",
        })
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(EnergyField, f64),
    OptimizeRequested,
    /// `hours` is the duration captured when the request was issued.
    OptimizeFinished {
        hours: f64,
        outcome: Result<OptimizationResult, String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Optimize { request: OptimizeRequest, hours: f64 },
}

#[derive(Debug, Clone)]
pub struct EnergyDashboard {
    pub inputs: EnergyInputs,
    pub optimized_energy: Option<f64>,
    pub target_function: String,
    pub hourly: Vec<HourlySample>,
    pub loading: bool,
    pub status: SystemStatus,
    pub error: Option<String>,
}

impl Default for EnergyDashboard {
    fn default() -> Self {
        Self {
            inputs: EnergyInputs::default(),
            optimized_energy: None,
            target_function: String::new(),
            hourly: Vec::new(),
            loading: false,
            status: SystemStatus::Ready,
            error: None,
        }
    }
}

impl EnergyDashboard {
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::InputChanged(field, value) => {
                self.inputs.update_field(field, value);
                Effect::None
            }
            Message::OptimizeRequested => {
                self.loading = true;
                self.status = SystemStatus::Processing;
                let (request, hours) = self.inputs.split();
                Effect::Optimize { request, hours }
            }
            Message::OptimizeFinished { hours, outcome } => {
                self.loading = false;
                match outcome {
                    Ok(result) => {
                        info!(
                            "optimized energy {} kWh/h over {} h",
                            result.optimized_energy, hours
                        );
                        self.optimized_energy = Some(result.optimized_energy);
                        self.hourly = hourly_series(result.optimized_energy, hours);
                        self.target_function = result.target_function;
                        self.error = None;
                        self.status = SystemStatus::Optimized;
                    }
                    Err(err) => {
                        self.error = Some(err);
                        self.status = SystemStatus::Error;
                    }
                }
                Effect::None
            }
        }
    }

    /// Rate times the duration currently on the slider, once a rate is known.
    pub fn total_consumption(&self) -> Option<String> {
        self.optimized_energy
            .map(|rate| total_consumption(rate, self.inputs.hours))
    }

    pub fn error_banner(&self) -> Option<String> {
        self.error.as_ref().map(|err| format!("Error: {err}"))
    }

    pub fn gauges(&self) -> [Gauge; 3] {
        Gauge::for_inputs(&self.inputs)
    }
}
