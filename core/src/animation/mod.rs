//! Client-side welding visualization: a fixed-tick progress counter, a bounded
//! spark particle buffer and the robot-arm pose derived from progress.

pub mod pose;
pub mod sparks;
pub mod state;

pub use pose::ArmPose;
pub use sparks::{Spark, SparkBuffer, SPARK_BURST, SPARK_LIFETIME_MS, SPARK_RETAINED};
pub use state::{AnimationState, Phase, TickOutcome, MAX_PROGRESS};
