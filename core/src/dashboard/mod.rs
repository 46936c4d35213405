//! View-model reducers for the two dashboards.
//!
//! Each dashboard is a plain struct updated by `update(message)`. Backend calls
//! are not made here; `update` returns an effect that the GUI turns into an
//! asynchronous task whose completion comes back as another message.

pub mod energy;
pub mod welding;

pub use energy::{EnergyDashboard, SystemStatus};
pub use welding::WeldingDashboard;
