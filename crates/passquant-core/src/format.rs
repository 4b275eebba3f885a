//! Display mapping for durations: human-readable strings and meter percentages.
//!
//! Both functions are cosmetic. `human_time` picks the largest whole unit on
//! a half-open ladder; `time_to_percent` compresses a duration onto a 0-100
//! scale for a filled-bar meter. Neither feeds back into any security
//! decision.

/// One minute in seconds.
pub const MINUTE_SECS: f64 = 60.0;
/// One hour in seconds.
pub const HOUR_SECS: f64 = 3_600.0;
/// One day in seconds.
pub const DAY_SECS: f64 = 86_400.0;
/// One 365-day year in seconds. No leap-year adjustment.
pub const YEAR_SECS: f64 = 31_536_000.0;

/// Render a duration in seconds as a human-readable string.
///
/// NaN and +infinity both render as "∞". Sub-second durations get three
/// decimals; everything else two decimals in the largest unit not exceeded.
/// Boundary values (exactly 60, 3600, 86400, 31536000) belong to the next
/// larger unit.
pub fn human_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds == f64::INFINITY {
        return "∞".to_string();
    }
    if seconds < 1.0 {
        return format!("{seconds:.3} s");
    }
    if seconds < MINUTE_SECS {
        format!("{seconds:.2} s")
    } else if seconds < HOUR_SECS {
        format!("{:.2} min", seconds / MINUTE_SECS)
    } else if seconds < DAY_SECS {
        format!("{:.2} hr", seconds / HOUR_SECS)
    } else if seconds < YEAR_SECS {
        format!("{:.2} days", seconds / DAY_SECS)
    } else {
        format!("{:.2} years", seconds / YEAR_SECS)
    }
}

/// Map a duration onto a 0-100 meter percentage on a logarithmic year scale.
///
/// At or below one second the meter is empty; at 100 years or more it
/// saturates. In between: floor((log10(years + 1) / 2.0) * 100), clamped.
/// The "+1" keeps sub-year durations off log10(0); the 2.0 divisor is a
/// tuning constant that makes ~100-year durations fill the bar.
/// NaN is treated like infinity (saturated meter), as in [`human_time`].
pub fn time_to_percent(seconds: f64) -> u8 {
    if seconds.is_nan() {
        return 100;
    }
    if seconds <= 1.0 {
        return 0;
    }
    let years = seconds / YEAR_SECS;
    if years >= 100.0 {
        return 100;
    }
    let pct = ((years + 1.0).log10() / 2.0 * 100.0).floor();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsecond_three_decimals() {
        assert_eq!(human_time(0.5), "0.500 s");
        assert_eq!(human_time(0.0), "0.000 s");
        assert_eq!(human_time(0.2282), "0.228 s");
    }

    #[test]
    fn test_seconds_two_decimals() {
        assert_eq!(human_time(1.0), "1.00 s");
        assert_eq!(human_time(42.5), "42.50 s");
        assert!(human_time(59.999).ends_with(" s"));
    }

    #[test]
    fn test_unit_boundaries_belong_to_larger_unit() {
        assert_eq!(human_time(60.0), "1.00 min");
        assert_eq!(human_time(3600.0), "1.00 hr");
        assert_eq!(human_time(86400.0), "1.00 days");
        assert_eq!(human_time(31536000.0), "1.00 years");
    }

    #[test]
    fn test_unit_interiors() {
        assert_eq!(human_time(90.0), "1.50 min");
        assert_eq!(human_time(7200.0), "2.00 hr");
        assert_eq!(human_time(172800.0), "2.00 days");
        assert_eq!(human_time(63072000.0), "2.00 years");
    }

    #[test]
    fn test_just_below_boundaries_stay_in_smaller_unit() {
        assert!(human_time(3599.0).ends_with(" min"));
        assert!(human_time(86399.0).ends_with(" hr"));
        assert!(human_time(31535999.0).ends_with(" days"));
    }

    #[test]
    fn test_nan_and_infinity_render_infinity_symbol() {
        assert_eq!(human_time(f64::NAN), "∞");
        assert_eq!(human_time(f64::INFINITY), "∞");
    }

    #[test]
    fn test_percent_negligible_is_zero() {
        assert_eq!(time_to_percent(0.0), 0);
        assert_eq!(time_to_percent(0.5), 0);
        assert_eq!(time_to_percent(1.0), 0);
    }

    #[test]
    fn test_percent_saturates_at_century() {
        assert_eq!(time_to_percent(100.0 * YEAR_SECS), 100);
        assert_eq!(time_to_percent(1e6 * YEAR_SECS), 100);
        assert_eq!(time_to_percent(f64::INFINITY), 100);
    }

    #[test]
    fn test_percent_log_scale_values() {
        // 1 year: floor(log10(2) / 2 * 100) = 15
        assert_eq!(time_to_percent(YEAR_SECS), 15);
        // 9 years: floor(log10(10) / 2 * 100) = 50
        assert_eq!(time_to_percent(9.0 * YEAR_SECS), 50);
        // 99 years: floor(log10(100) / 2 * 100) = 100 (just under saturation)
        assert_eq!(time_to_percent(99.0 * YEAR_SECS), 100);
    }

    #[test]
    fn test_percent_nan_saturates_like_infinity() {
        assert_eq!(time_to_percent(f64::NAN), 100);
        assert_eq!(time_to_percent(f64::NAN), time_to_percent(f64::INFINITY));
    }

    #[test]
    fn test_percent_always_in_range() {
        for &s in &[0.0, 1.0, 1.0001, 60.0, 1e4, 1e9, 1e15, 1e300, f64::INFINITY] {
            let pct = time_to_percent(s);
            assert!(pct <= 100, "{s} -> {pct}");
        }
    }
}
