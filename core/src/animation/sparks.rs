use crate::math::EasingHelper;
use rand::Rng;
use std::collections::VecDeque;

/// Sparks kept from earlier bursts.
pub const SPARK_RETAINED: usize = 20;
/// Sparks emitted per spark tick.
pub const SPARK_BURST: usize = 3;
/// Time a spark takes to rise and fade out.
pub const SPARK_LIFETIME_MS: f32 = 800.0;

/// One particle. `x`/`y` are pixel offsets from the emission point, `y` grows downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    origin_x: f32,
    rise: f32,
    drift: f32,
    age_ms: f32,
}

impl Spark {
    pub fn spawn<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Self {
        let origin_x = rng.gen_range(-10.0..10.0);
        Self {
            id,
            x: origin_x,
            y: 0.0,
            opacity: 1.0,
            origin_x,
            rise: rng.gen_range(50.0..80.0),
            drift: rng.gen_range(-20.0..20.0),
            age_ms: 0.0,
        }
    }

    pub fn advance(&mut self, elapsed_ms: f32) {
        self.age_ms += elapsed_ms;
        let eased = EasingHelper::ease_out(self.age_ms / SPARK_LIFETIME_MS);
        self.y = -self.rise * eased;
        self.x = EasingHelper::lerp(self.origin_x, self.origin_x + self.drift, eased);
        self.opacity = 1.0 - eased;
    }

    pub fn is_spent(&self) -> bool {
        self.age_ms >= SPARK_LIFETIME_MS
    }
}

/// Fixed-capacity ring of retained sparks plus the burst appended on the latest tick.
///
/// At most `SPARK_RETAINED + SPARK_BURST` sparks are visible at any instant;
/// the retained ring alone never exceeds `SPARK_RETAINED`.
#[derive(Debug, Clone, Default)]
pub struct SparkBuffer {
    retained: VecDeque<Spark>,
    fresh: Vec<Spark>,
}

impl SparkBuffer {
    pub fn new() -> Self {
        Self {
            retained: VecDeque::with_capacity(SPARK_RETAINED),
            fresh: Vec::with_capacity(SPARK_BURST),
        }
    }

    /// Folds the previous burst into the ring (evicting the oldest) and stores `burst` as fresh.
    pub fn push_burst(&mut self, burst: impl IntoIterator<Item = Spark>) {
        for spark in self.fresh.drain(..) {
            if self.retained.len() == SPARK_RETAINED {
                self.retained.pop_front();
            }
            self.retained.push_back(spark);
        }
        self.fresh.extend(burst.into_iter().take(SPARK_BURST));
    }

    /// Ages every spark and discards the ones whose fade has finished.
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.retained
            .iter_mut()
            .chain(self.fresh.iter_mut())
            .for_each(|spark| spark.advance(elapsed_ms));
        self.retained.retain(|spark| !spark.is_spent());
        self.fresh.retain(|spark| !spark.is_spent());
    }

    pub fn retained_len(&self) -> usize {
        self.retained.len()
    }

    pub fn len(&self) -> usize {
        self.retained.len() + self.fresh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.retained.clear();
        self.fresh.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Spark> {
        self.retained.iter().chain(self.fresh.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn burst(rng: &mut StdRng, first_id: u64) -> Vec<Spark> {
        (0..SPARK_BURST as u64)
            .map(|i| Spark::spawn(first_id + i, rng))
            .collect()
    }

    #[test]
    fn spawned_spark_starts_at_full_opacity() {
        let mut rng = StdRng::seed_from_u64(7);
        let spark = Spark::spawn(1, &mut rng);
        assert_eq!(spark.y, 0.0);
        assert_eq!(spark.opacity, 1.0);
        assert!((-10.0..10.0).contains(&spark.x));
    }

    #[test]
    fn spark_fades_out_over_its_lifetime() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut spark = Spark::spawn(1, &mut rng);
        spark.advance(400.0);
        assert!(spark.opacity > 0.0 && spark.opacity < 1.0);
        assert!(spark.y < 0.0);
        spark.advance(400.0);
        assert_eq!(spark.opacity, 0.0);
        assert!(spark.y <= -50.0);
        assert!(spark.is_spent());
    }

    #[test]
    fn buffer_keeps_the_most_recent_sparks() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut buffer = SparkBuffer::new();
        for tick in 0..50u64 {
            buffer.push_burst(burst(&mut rng, tick * 10));
            assert!(buffer.retained_len() <= SPARK_RETAINED);
            assert!(buffer.len() <= SPARK_RETAINED + SPARK_BURST);
        }
        assert_eq!(buffer.len(), 23);

        let ids: Vec<u64> = buffer.iter().map(|s| s.id).collect();
        // Last burst is ids 490..=492; the ring holds the 20 sparks before it.
        assert_eq!(ids.last(), Some(&492));
        assert_eq!(ids.first(), Some(&421));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn faded_sparks_are_discarded() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut buffer = SparkBuffer::new();
        buffer.push_burst(burst(&mut rng, 0));
        buffer.advance(400.0);
        buffer.push_burst(burst(&mut rng, 3));
        assert_eq!(buffer.len(), 6);

        buffer.advance(400.0);
        let ids: Vec<u64> = buffer.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);

        buffer.advance(SPARK_LIFETIME_MS);
        assert!(buffer.is_empty());
    }

    #[test]
    fn oversized_burst_is_truncated() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut buffer = SparkBuffer::new();
        let many: Vec<Spark> = (0..10).map(|i| Spark::spawn(i, &mut rng)).collect();
        buffer.push_burst(many);
        assert_eq!(buffer.len(), SPARK_BURST);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
