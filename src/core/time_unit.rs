use chrono::TimeDelta;

/// Smallest granularity a chunk may represent, in minutes.
pub const MIN_UNIT_MINUTES: f64 = 1.0;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Returns the minimum time unit (one minute).
#[must_use]
pub fn min_time_unit() -> TimeDelta {
    TimeDelta::minutes(1)
}

/// Fractional number of minutes covered by `delta`.
#[must_use]
pub fn total_minutes(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / 60.0 + f64::from(delta.subsec_nanos()) / 60.0e9
}

/// Converts fractional minutes into a millisecond-precision duration.
///
/// Values beyond the representable range saturate at `TimeDelta::MAX`/`MIN`.
#[must_use]
pub fn minutes_to_delta(minutes: f64) -> TimeDelta {
    if minutes.is_nan() {
        return TimeDelta::zero();
    }
    let millis = (minutes * MILLIS_PER_MINUTE).round();
    if millis >= i64::MAX as f64 {
        return TimeDelta::MAX;
    }
    if millis <= i64::MIN as f64 {
        return TimeDelta::MIN;
    }
    TimeDelta::try_milliseconds(millis as i64).unwrap_or(if millis > 0.0 {
        TimeDelta::MAX
    } else {
        TimeDelta::MIN
    })
}

/// Whole-minute unit used for extent sizing, never below the minimum unit.
#[must_use]
pub fn rounded_unit_minutes(unit: TimeDelta) -> f64 {
    total_minutes(unit).round().max(MIN_UNIT_MINUTES)
}

/// Clamps a unit so it never drops below the minimum unit.
#[must_use]
pub fn clamp_to_min_unit(unit: TimeDelta) -> TimeDelta {
    unit.max(min_time_unit())
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::{clamp_to_min_unit, minutes_to_delta, rounded_unit_minutes, total_minutes};

    #[test]
    fn total_minutes_keeps_fractions() {
        assert_eq!(total_minutes(TimeDelta::seconds(90)), 1.5);
        assert_eq!(total_minutes(TimeDelta::milliseconds(-30_000)), -0.5);
    }

    #[test]
    fn rounded_unit_never_drops_below_one_minute() {
        assert_eq!(rounded_unit_minutes(TimeDelta::seconds(10)), 1.0);
        assert_eq!(rounded_unit_minutes(TimeDelta::seconds(150)), 3.0);
    }

    #[test]
    fn minutes_to_delta_saturates_on_overflow() {
        assert_eq!(minutes_to_delta(1.5), TimeDelta::seconds(90));
        assert_eq!(minutes_to_delta(f64::INFINITY), TimeDelta::MAX);
        assert_eq!(minutes_to_delta(f64::NAN), TimeDelta::zero());
    }

    #[test]
    fn clamp_lifts_sub_minute_units() {
        assert_eq!(clamp_to_min_unit(TimeDelta::seconds(5)), TimeDelta::minutes(1));
        assert_eq!(clamp_to_min_unit(TimeDelta::minutes(7)), TimeDelta::minutes(7));
    }
}
