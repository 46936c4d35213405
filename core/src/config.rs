use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("reading dashboard config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("parsing dashboard config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Backend locations and timing for both dashboards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub welding_backend: String,
    pub energy_backend: String,
    pub predict_timeout_ms: Option<u64>,
    pub simulate_timeout_ms: Option<u64>,
    pub optimize_timeout_ms: Option<u64>,
    pub tick_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            welding_backend: "https://automatic-tig-mig-welding.onrender.com".into(),
            energy_backend: "https://scada-energy-optimizer.onrender.com".into(),
            predict_timeout_ms: Some(10_000),
            simulate_timeout_ms: Some(20_000),
            optimize_timeout_ms: None,
            tick_ms: 100,
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| ConfigError::Read {
            path: path_ref.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path_ref.display().to_string(),
            source,
        })
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn predict_timeout(&self) -> Option<Duration> {
        self.predict_timeout_ms.map(Duration::from_millis)
    }

    pub fn simulate_timeout(&self) -> Option<Duration> {
        self.simulate_timeout_ms.map(Duration::from_millis)
    }

    pub fn optimize_timeout(&self) -> Option<Duration> {
        self.optimize_timeout_ms.map(Duration::from_millis)
    }

    /// Period of both visualization timers; never below one millisecond.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_follow_web_clients() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.predict_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(cfg.simulate_timeout(), Some(Duration::from_secs(20)));
        assert_eq!(cfg.optimize_timeout(), None);
        assert_eq!(cfg.tick(), Duration::from_millis(100));
    }

    #[test]
    fn config_load_reads_partial_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"welding_backend: http://127.0.0.1:5000\ntick_ms: 50\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = DashboardConfig::load(&path).unwrap();
        assert_eq!(cfg.welding_backend, "http://127.0.0.1:5000");
        assert_eq!(cfg.tick(), Duration::from_millis(50));
        assert_eq!(cfg.energy_backend, DashboardConfig::default().energy_backend);
    }

    #[test]
    fn config_load_reports_bad_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"tick_ms: [oops\n").unwrap();
        let path = temp.into_temp_path();
        let err = DashboardConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_path_falls_back_to_defaults() {
        let cfg = DashboardConfig::load_or_default(None::<&Path>).unwrap();
        assert_eq!(cfg, DashboardConfig::default());
    }
}
