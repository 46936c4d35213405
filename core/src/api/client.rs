use crate::api::probe::{HealthStatus, ModelInfo};
use crate::config::DashboardConfig;
use crate::energy::{OptimizationResult, OptimizeRequest};
use crate::prelude::{ApiRequest, ClientError, ClientResult, Endpoint};
use crate::telemetry::{LogManager, MetricsRecorder};
use crate::welding::{PredictionResult, SimulationRequest, SimulationResult, WeldingParameters};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// JSON client for one model-serving backend.
///
/// Clones share the connection pool and the request counters. Calls are
/// independent: nothing is cancelled or de-duplicated, so two calls of the
/// same kind may be in flight and complete in either order.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeouts: HashMap<Endpoint, Option<Duration>>,
    metrics: Arc<MetricsRecorder>,
    logger: Arc<LogManager>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(format!("{trimmed}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{trimmed}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let timeouts = Endpoint::ALL
            .iter()
            .map(|endpoint| (*endpoint, endpoint.default_timeout()))
            .collect();

        let logger = LogManager::new();
        logger.record(&format!("api client bound to {trimmed}"));

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: trimmed.to_string(),
            timeouts,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: Arc::new(logger),
        })
    }

    /// Client for the welding backend with the configured predict/simulate timeouts.
    pub fn welding(config: &DashboardConfig) -> ClientResult<Self> {
        Ok(Self::new(&config.welding_backend)?
            .with_timeout(Endpoint::Predict, config.predict_timeout())
            .with_timeout(Endpoint::Simulate, config.simulate_timeout()))
    }

    pub fn energy(config: &DashboardConfig) -> ClientResult<Self> {
        Ok(Self::new(&config.energy_backend)?
            .with_timeout(Endpoint::OptimizeEnergy, config.optimize_timeout()))
    }

    pub fn with_timeout(mut self, endpoint: Endpoint, timeout: Option<Duration>) -> Self {
        self.timeouts.insert(endpoint, timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_for(&self, endpoint: Endpoint) -> Option<Duration> {
        self.timeouts
            .get(&endpoint)
            .copied()
            .unwrap_or_else(|| endpoint.default_timeout())
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub async fn predict(&self, params: &WeldingParameters) -> ClientResult<PredictionResult> {
        self.post(params).await
    }

    pub async fn simulate(&self, request: &SimulationRequest) -> ClientResult<SimulationResult> {
        self.post(request).await
    }

    pub async fn optimize_energy(
        &self,
        request: &OptimizeRequest,
    ) -> ClientResult<OptimizationResult> {
        self.post(request).await
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.get(Endpoint::Health).await
    }

    pub async fn model_info(&self) -> ClientResult<ModelInfo> {
        self.get(Endpoint::ModelInfo).await
    }

    /// Posts `body` as JSON to the endpoint its type is bound to.
    pub async fn post<R: ApiRequest>(&self, body: &R) -> ClientResult<R::Response> {
        let builder = self.http.post(self.url_for(R::ENDPOINT)).json(body);
        self.send(R::ENDPOINT, builder).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ClientResult<T> {
        let builder = self.http.get(self.url_for(endpoint));
        self.send(endpoint, builder).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        builder: RequestBuilder,
    ) -> ClientResult<T> {
        let timeout = self.timeout_for(endpoint);
        let builder = match timeout {
            Some(limit) => builder.timeout(limit),
            None => builder,
        };

        self.metrics.record_issued(endpoint);
        let started = Instant::now();
        let result = execute(builder, timeout).await;
        match &result {
            Ok(_) => self.logger.request_ok(endpoint, started.elapsed()),
            Err(err) => {
                self.metrics.record_error(endpoint);
                self.logger.request_failed(endpoint, started.elapsed(), err);
            }
        }
        result
    }
}

async fn execute<T: DeserializeOwned>(
    builder: RequestBuilder,
    timeout: Option<Duration>,
) -> ClientResult<T> {
    let response = builder
        .send()
        .await
        .map_err(|e| transport_error(e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            code: status.as_u16(),
            message: backend_error_message(&body),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| transport_error(e, timeout))?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

fn transport_error(err: reqwest::Error, timeout: Option<Duration>) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout {
            after_ms: timeout.map(|t| t.as_millis() as u64).unwrap_or_default(),
        }
    } else {
        ClientError::Transport(err.to_string())
    }
}

/// Pulls `error` out of a `{"error": ..., "trace": ...}` body, falling back to the raw text.
fn backend_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => Some(trimmed.chars().take(200).collect()),
    }
}
