/// Convert meters per second to knots
#[inline]
pub fn knots(meters_per_second: f64) -> f64 {
    meters_per_second * 1.94384
}

/// Convert meters per second to kilometers per hour
#[inline]
pub fn kilometers_per_hour(meters_per_second: f64) -> f64 {
    meters_per_second * 3.6
}

/// Convert kilometers per hour to meters per second
#[inline]
pub fn meters_per_second(kilometers_per_hour: f64) -> f64 {
    kilometers_per_hour / 3.6
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_speed_conversions() {
        assert_relative_eq!(kilometers_per_hour(1.0), 3.6);
        assert_relative_eq!(meters_per_second(3.6), 1.0);
        assert_relative_eq!(knots(1.0), 1.94384);
        assert_relative_eq!(meters_per_second(kilometers_per_hour(42.0)), 42.0);
    }
}
