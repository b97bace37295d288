//! Ride domain: models, validation rules and the error catalog.

pub mod error;
pub mod ride;

pub use error::{ApiError, ErrorCode};
pub use ride::{Paged, PagedRides, Ride, RideEntity};
