//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a count to f64, allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Convert milliseconds to f64 seconds.
#[must_use]
pub fn millis_to_secs(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0) / 1000.0
}

/// Floor a f64 into a usize, returning 0 for negative or non-finite values.
#[must_use]
pub fn floor_f64_to_usize(value: f64) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    cast::<f64, usize>(value.floor()).unwrap_or(usize::MAX)
}

/// Round a f64 into u64 milliseconds, returning 0 for negative or non-finite values.
#[must_use]
pub fn round_f64_to_millis(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    cast::<f64, u64>(value.round()).unwrap_or(u64::MAX)
}

/// Scale a millisecond duration by a factor, rounding to the nearest millisecond.
#[must_use]
pub fn scale_millis(value: u64, factor: f64) -> u64 {
    round_f64_to_millis(cast::<u64, f64>(value).unwrap_or(0.0) * factor)
}

/// Whole seconds of a non-negative f64, clamped to the u32 range.
#[must_use]
pub fn floor_secs_to_u32(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    cast::<f64, u32>(value.floor().min(f64::from(u32::MAX))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_handle_non_finite() {
        assert_eq!(floor_f64_to_usize(f64::NAN), 0);
        assert_eq!(floor_f64_to_usize(-1.5), 0);
        assert_eq!(floor_f64_to_usize(3.9), 3);
        assert_eq!(floor_secs_to_u32(f64::INFINITY), 0);
        assert_eq!(floor_secs_to_u32(61.7), 61);
    }

    #[test]
    fn millis_helpers_round_and_scale() {
        assert_eq!(round_f64_to_millis(1.6), 2);
        assert_eq!(scale_millis(15_000, 0.45), 6_750);
        assert!((millis_to_secs(2_500) - 2.5).abs() < f64::EPSILON);
    }
}
