use crate::constants::animation::{SWEEP_AMPLITUDE, SWEEP_FREQUENCY};

/// Camera x for a given time since start, in milliseconds.
///
/// Computed in f64 so long sessions do not lose phase precision.
pub fn sweep_x(elapsed_ms: f64) -> f32 {
    ((elapsed_ms * SWEEP_FREQUENCY).sin() * SWEEP_AMPLITUDE) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        assert_eq!(sweep_x(0.0), 0.0);
    }

    #[test]
    fn follows_sine_of_elapsed_time() {
        for t in [1.0, 250.0, 1_234.5, 60_000.0, 3_600_000.0] {
            let expected = ((t * 0.0003_f64).sin() * 40.0) as f32;
            assert!((sweep_x(t) - expected).abs() < 1e-5, "t = {t}");
        }
    }

    #[test]
    fn peaks_at_quarter_period() {
        let quarter = std::f64::consts::FRAC_PI_2 / 0.0003;
        assert!((sweep_x(quarter) - 40.0).abs() < 1e-4);
        assert!((sweep_x(3.0 * quarter) + 40.0).abs() < 1e-4);
    }
}
