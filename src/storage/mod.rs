pub mod rides;

pub use rides::{RideStore, SqliteRideStore, StoreError, StoreResult};
