/// Clamp an opacity value into `0.0..=1.0`.
///
/// Comparisons are strict, so exactly `0.0` and `1.0` pass through untouched.
/// NaN has no meaningful alpha and collapses to fully transparent.
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() || opacity < 0.0 {
        return 0.0;
    }
    if opacity > 1.0 {
        return 1.0;
    }
    opacity
}

/// Format a decimal the way it appears inside the normalized strings.
///
/// Shortest round-trip form, except integral values keep one decimal place
/// (`1.0`, `0.0`, `32.0`) and negative zero prints as `0.0`.
pub fn format_decimal(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── clamp_opacity tests ──

    #[test]
    fn in_range_passthrough() {
        assert_eq!(clamp_opacity(0.3), 0.3);
        assert_eq!(clamp_opacity(0.75), 0.75);
    }

    #[test]
    fn boundaries_untouched() {
        assert_eq!(clamp_opacity(0.0), 0.0);
        assert_eq!(clamp_opacity(1.0), 1.0);
    }

    #[test]
    fn negative_clamped_to_zero() {
        assert_eq!(clamp_opacity(-0.2), 0.0);
        assert_eq!(clamp_opacity(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn above_one_clamped() {
        assert_eq!(clamp_opacity(1.5), 1.0);
        assert_eq!(clamp_opacity(f64::INFINITY), 1.0);
    }

    #[test]
    fn nan_becomes_transparent() {
        assert_eq!(clamp_opacity(f64::NAN), 0.0);
    }

    // ── format_decimal tests ──

    #[test]
    fn integral_keeps_one_place() {
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(32.0), "32.0");
    }

    #[test]
    fn fraction_shortest_form() {
        assert_eq!(format_decimal(0.3), "0.3");
        assert_eq!(format_decimal(0.125), "0.125");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_decimal(-0.0), "0.0");
    }
}
