//! Conversions between the routing engine's reporting units (meters, seconds)
//! and the units shown in the legend (miles, hours or minutes).

pub const MILES_PER_METER: f64 = 0.000621371;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_PER_HOUR
}

pub fn hours_to_minutes(hours: f64) -> f64 {
    hours * MINUTES_PER_HOUR
}

/// Round to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_mile_of_meters() {
        assert_eq!(round1(meters_to_miles(1609.34)), 1.0);
    }

    #[test]
    fn half_hour_of_seconds() {
        assert_eq!(seconds_to_hours(1800.0), 0.5);
        assert_eq!(hours_to_minutes(seconds_to_hours(1800.0)), 30.0);
    }

    #[test]
    fn rounding_to_one_decimal() {
        assert_eq!(round1(0.93205), 0.9);
        assert_eq!(round1(2.0), 2.0);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(0.0), 0.0);
    }
}
