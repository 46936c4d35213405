pub struct EasingHelper;

impl EasingHelper {
    /// Cubic ease-out over `t` in `[0, 1]`; values outside are clamped.
    pub fn ease_out(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_hits_endpoints() {
        assert_eq!(EasingHelper::ease_out(0.0), 0.0);
        assert_eq!(EasingHelper::ease_out(1.0), 1.0);
        assert_eq!(EasingHelper::ease_out(4.0), 1.0);
    }

    #[test]
    fn ease_out_front_loads_motion() {
        assert!(EasingHelper::ease_out(0.5) > 0.5);
    }
}
