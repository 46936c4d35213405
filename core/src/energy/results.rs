use crate::math::RoundingHelper;
use serde::{Deserialize, Serialize};

/// Response of `POST /optimize_energy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Predicted consumption rate in kWh per hour.
    pub optimized_energy: f64,
    /// Human-readable regression formula the backend fitted.
    pub target_function: String,
}

/// Chart sample of the per-hour consumption series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub hour: u32,
    pub energy: f64,
    pub name: String,
}

/// Repeats the single optimized rate once per requested hour.
///
/// This is not a simulation: every sample carries the same value, rounded to
/// two decimals. A fractional duration is truncated and a non-positive one
/// yields no samples.
pub fn hourly_series(optimized_energy: f64, hours: f64) -> Vec<HourlySample> {
    let count = if hours.is_finite() && hours > 0.0 {
        hours.trunc() as u32
    } else {
        0
    };
    let energy = RoundingHelper::round_to(optimized_energy, 2);
    (1..=count)
        .map(|hour| HourlySample {
            hour,
            energy,
            name: format!("H{hour}"),
        })
        .collect()
}

/// Rate times duration, printed with two decimals.
pub fn total_consumption(optimized_energy: f64, hours: f64) -> String {
    RoundingHelper::to_fixed(optimized_energy * hours, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_duplicates_the_single_rate() {
        let series = hourly_series(2.5, 3.0);
        let hours: Vec<u32> = series.iter().map(|s| s.hour).collect();
        assert_eq!(hours, vec![1, 2, 3]);
        assert!(series.iter().all(|s| s.energy == 2.5));
        assert_eq!(series[2].name, "H3");
        assert_eq!(total_consumption(2.5, 3.0), "7.50");
    }

    #[test]
    fn series_rounds_each_sample() {
        let series = hourly_series(163.4567, 2.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].energy, 163.46);
        assert_eq!(total_consumption(163.4567, 2.0), "326.91");
    }

    #[test]
    fn series_rounds_exact_halves_up() {
        let series = hourly_series(2.125, 1.0);
        assert_eq!(series[0].energy, 2.13);
        assert_eq!(total_consumption(1.0625, 2.0), "2.13");
    }

    #[test]
    fn degenerate_durations_yield_no_samples() {
        assert!(hourly_series(1.0, 0.0).is_empty());
        assert!(hourly_series(1.0, -2.0).is_empty());
        assert!(hourly_series(1.0, f64::NAN).is_empty());
        assert_eq!(hourly_series(1.0, 2.9).len(), 2);
    }
}
