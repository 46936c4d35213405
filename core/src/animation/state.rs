use crate::animation::sparks::{Spark, SparkBuffer, SPARK_BURST};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// What a progress tick did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived while idle (a timer firing after stop) and was dropped.
    Ignored,
    Advanced(u8),
    /// Progress reached the end; the state is idle again.
    Completed,
}

/// State of the welding visualization.
///
/// Two independent timers drive it while running: the progress tick and the
/// spark tick. Both are no-ops once the phase is `Idle`, so a late timer event
/// can never restart or double-complete a pass.
#[derive(Debug, Clone)]
pub struct AnimationState {
    phase: Phase,
    progress: u8,
    sparks: SparkBuffer,
    next_spark_id: u64,
    tick: Duration,
    rng: StdRng,
}

impl AnimationState {
    pub fn new(tick: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            phase: Phase::Idle,
            progress: 0,
            sparks: SparkBuffer::new(),
            next_spark_id: 0,
            tick,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn sparks(&self) -> &SparkBuffer {
        &self.sparks
    }

    pub fn tick_period(&self) -> Duration {
        self.tick
    }

    pub fn start(&mut self) {
        self.phase = Phase::Running;
        self.progress = 0;
        self.sparks.clear();
        debug!("visualization started");
    }

    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
        self.progress = 0;
        self.sparks.clear();
        debug!("visualization stopped");
    }

    pub fn progress_tick(&mut self) -> TickOutcome {
        if self.phase == Phase::Idle {
            return TickOutcome::Ignored;
        }
        self.progress = (self.progress + 1).min(MAX_PROGRESS);
        if self.progress == MAX_PROGRESS {
            self.phase = Phase::Idle;
            self.sparks.clear();
            debug!("visualization completed");
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced(self.progress)
        }
    }

    /// Ages the live sparks by one tick and emits a new burst. Returns false while idle.
    pub fn spark_tick(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        self.sparks.advance(self.tick.as_secs_f32() * 1000.0);

        let first = self.next_spark_id;
        self.next_spark_id += SPARK_BURST as u64;
        let burst: Vec<Spark> = (0..SPARK_BURST as u64)
            .map(|offset| Spark::spawn(first + offset, &mut self.rng))
            .collect();
        self.sparks.push_burst(burst);
        true
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), None)
    }
}
