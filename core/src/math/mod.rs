pub mod easing;
pub mod rounding;

pub use easing::EasingHelper;
pub use rounding::RoundingHelper;
