//! Ride records as they travel through the service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod validation;

pub use validation::{validate_paging_parameters, validate_ride};

/// A ride route as submitted by a client. Not yet validated, no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    /// Starting latitude in decimal degrees.
    pub start_lat: f64,
    /// Starting longitude in decimal degrees.
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

/// A ride persisted by the store.
///
/// `ride_id` and `created` are assigned at insert time and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RideEntity {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    #[serde(flatten)]
    pub ride: Ride,
    /// Creation time (UTC), rendered as `YYYY-MM-DD HH:MM:SS`.
    #[serde(with = "created_format")]
    #[schema(value_type = String, example = "2024-01-01 12:00:00")]
    pub created: NaiveDateTime,
}

/// One page of a listing plus the metadata needed to walk the rest.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(PagedRides = Paged<RideEntity>)]
pub struct Paged<T> {
    pub total_results: i64,
    pub total_pages: i64,
    pub page: i64,
    /// Requested page size; 0 means unlimited.
    pub limit: i64,
    pub data: Vec<T>,
}

impl<T> Paged<T> {
    /// The response for a store holding no records at all.
    pub fn empty(limit: i64) -> Self {
        Self {
            total_results: 0,
            total_pages: 1,
            page: 1,
            limit,
            data: Vec::new(),
        }
    }

    /// Builds a page, deriving `total_pages` from the total count and the limit.
    pub fn new(data: Vec<T>, total_results: i64, page: i64, limit: i64) -> Self {
        Self {
            total_results,
            total_pages: total_pages(total_results, limit),
            page,
            limit,
            data,
        }
    }
}

/// Number of pages needed to hold `total_results` items at `limit` per page.
///
/// `limit == 0` is the unlimited sentinel and always yields a single page.
pub fn total_pages(total_results: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 1;
    }
    total_results / limit + i64::from(total_results % limit != 0)
}

mod created_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
