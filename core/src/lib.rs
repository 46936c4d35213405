//! Shared core for the welding and energy HMI dashboards.
//!
//! The modules hold the transient view-model of both front ends: typed request
//! and response shapes for the remote model-serving APIs, a small HTTP client,
//! the welding visualization state machine and the reducers the GUIs drive.

pub mod animation;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod energy;
pub mod form;
pub mod math;
pub mod prelude;
pub mod telemetry;
pub mod welding;

pub use prelude::{ClientError, ClientResult, Endpoint};
