use crate::animation::{AnimationState, TickOutcome};
use crate::api::{HealthStatus, ModelInfo};
use crate::welding::{
    PredictionResult, SimulationRequest, SimulationResult, WeldingField, WeldingForm, WeldingMode,
    WeldingParameters,
};
use log::{info, warn};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(WeldingField, String),
    ModeSelected(WeldingMode),
    PredictRequested,
    PredictFinished(Result<PredictionResult, String>),
    SimulateRequested,
    SimulateFinished(Result<SimulationResult, String>),
    HealthChecked(Result<HealthStatus, String>),
    ModelInfoLoaded(Result<ModelInfo, String>),
    StartVisualization,
    StopVisualization,
    ProgressTick,
    SparkTick,
    Clear,
}

/// Backend work requested by an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Predict(WeldingParameters),
    Simulate(SimulationRequest),
}

#[derive(Debug, Clone)]
pub struct WeldingDashboard {
    pub form: WeldingForm,
    pub result: Option<PredictionResult>,
    pub sim_result: Option<SimulationResult>,
    pub loading: bool,
    pub sim_loading: bool,
    pub error: Option<String>,
    pub backend_status: String,
    /// Feature order reported by `/model_info`; empty until it answers.
    pub model_features: Vec<String>,
    pub animation: AnimationState,
}

impl WeldingDashboard {
    pub fn new(tick: Duration, seed: Option<u64>) -> Self {
        Self {
            form: WeldingForm::default(),
            result: None,
            sim_result: None,
            loading: false,
            sim_loading: false,
            error: None,
            backend_status: "Checking backend...".into(),
            model_features: Vec::new(),
            animation: AnimationState::new(tick, seed),
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.update_field(field, value);
                Effect::None
            }
            Message::ModeSelected(mode) => {
                self.form.mode = mode;
                Effect::None
            }
            Message::PredictRequested => {
                self.loading = true;
                self.error = None;
                self.result = None;
                Effect::Predict(self.form.to_parameters())
            }
            Message::PredictFinished(outcome) => {
                self.loading = false;
                match outcome {
                    Ok(result) => self.result = Some(result),
                    Err(err) => self.error = Some(err),
                }
                Effect::None
            }
            Message::SimulateRequested => {
                self.sim_loading = true;
                self.error = None;
                self.sim_result = None;
                Effect::Simulate(self.form.to_simulation())
            }
            Message::SimulateFinished(outcome) => {
                self.sim_loading = false;
                match outcome {
                    Ok(result) => {
                        info!("simulation: {}", result.summary());
                        self.sim_result = Some(result);
                    }
                    Err(err) => self.error = Some(err),
                }
                Effect::None
            }
            Message::HealthChecked(Ok(health)) => {
                self.backend_status = if health.is_ok() {
                    format!("Backend online: {}", health.note)
                } else {
                    format!("Backend status: {}", health.status)
                };
                Effect::None
            }
            Message::HealthChecked(Err(err)) => {
                self.backend_status = format!("Backend unreachable: {err}");
                Effect::None
            }
            Message::ModelInfoLoaded(Ok(info)) => {
                info!("model features: {}", info.features.join(", "));
                self.model_features = info.features;
                Effect::None
            }
            Message::ModelInfoLoaded(Err(err)) => {
                warn!("model info unavailable: {err}");
                self.model_features.clear();
                Effect::None
            }
            Message::StartVisualization => {
                self.animation.start();
                Effect::None
            }
            Message::StopVisualization => {
                self.animation.stop();
                Effect::None
            }
            Message::ProgressTick => {
                if self.animation.progress_tick() == TickOutcome::Completed {
                    info!("welding visualization completed");
                }
                Effect::None
            }
            Message::SparkTick => {
                self.animation.spark_tick();
                Effect::None
            }
            Message::Clear => {
                self.result = None;
                self.sim_result = None;
                self.error = None;
                Effect::None
            }
        }
    }

    pub fn error_banner(&self) -> Option<String> {
        self.error.as_ref().map(|err| format!("Error: {err}"))
    }

    pub fn predict_label(&self) -> &'static str {
        if self.loading {
            "Predicting..."
        } else {
            "Predict"
        }
    }

    pub fn simulate_label(&self) -> &'static str {
        if self.sim_loading {
            "Simulating..."
        } else {
            "Simulate Pass"
        }
    }

    pub fn model_summary(&self) -> Option<String> {
        if self.model_features.is_empty() {
            None
        } else {
            Some(format!("Model inputs: {}", self.model_features.join(", ")))
        }
    }

    pub fn activity_label(&self) -> &'static str {
        if self.animation.is_running() {
            "Active"
        } else {
            "Standby"
        }
    }
}

impl Default for WeldingDashboard {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), None)
    }
}
