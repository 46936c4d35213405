pub mod form;
pub mod params;
pub mod results;

pub use form::{WeldingField, WeldingForm};
pub use params::{SimulationRequest, WeldingMode, WeldingParameters};
pub use results::{PredictionResult, SimulationResult, SimulationRow};
