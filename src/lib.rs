pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::{ApiError, ErrorCode, Paged, Ride, RideEntity};
pub use infra::Config;
pub use storage::{RideStore, SqliteRideStore, StoreError};
