//! Domain rules for incoming rides and listing parameters.
//!
//! Every rule is evaluated; each failing rule contributes one message, in rule order.
//! An empty result means the input is valid.

use super::Ride;

const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

fn is_valid_coordinate(lat: f64, long: f64) -> bool {
    LATITUDE_RANGE.contains(&lat) && LONGITUDE_RANGE.contains(&long)
}

/// Checks coordinates and names of a ride.
pub fn validate_ride(ride: &Ride) -> Vec<String> {
    let mut violations = Vec::new();

    if !is_valid_coordinate(ride.start_lat, ride.start_long) {
        violations.push(
            "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
                .to_string(),
        );
    }
    if !is_valid_coordinate(ride.end_lat, ride.end_long) {
        violations.push(
            "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
                .to_string(),
        );
    }
    if ride.rider_name.is_empty() {
        violations.push("Rider name must be a non empty string".to_string());
    }
    if ride.driver_name.is_empty() {
        violations.push("Driver name must be a non empty string".to_string());
    }
    if ride.driver_vehicle.is_empty() {
        violations.push("Driver vehicle name must be a non empty string".to_string());
    }

    violations
}

/// Checks listing parameters. `limit == 0` is accepted and means "no limit".
pub fn validate_paging_parameters(page: i64, limit: i64) -> Vec<String> {
    let mut violations = Vec::new();

    if page <= 0 {
        violations.push("Page must be greater than 0".to_string());
    }
    if limit < 0 {
        violations.push("Limit must be equal or greater than 0".to_string());
    }

    violations
}
