//! Ride persistence contract.

use crate::domain::{Ride, RideEntity};
use async_trait::async_trait;

pub mod sqlite;

pub use sqlite::SqliteRideStore;

/// Backend failure. Carries the underlying message for logs; never shown to clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Failures from backends that do not go through `sqlx`.
    #[error("store error: {0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operations the HTTP layer needs for rides.
///
/// Implementations must assign strictly increasing, never reused ids and
/// must keep every operation a single atomic statement.
#[async_trait]
pub trait RideStore: Send + Sync {
    /// Ensures the ride table exists. Calling it again has no effect.
    async fn initialize(&self) -> StoreResult<()>;

    /// Drops all ride data together with the schema.
    async fn reset(&self) -> StoreResult<()>;

    /// Appends a ride and returns its generated id.
    async fn insert(&self, ride: &Ride) -> StoreResult<i64>;

    /// Looks up one ride. A missing id is `Ok(None)`.
    async fn get_by_id(&self, ride_id: i64) -> StoreResult<Option<RideEntity>>;

    /// Rides in id order, windowed by `page`/`limit`. `limit == 0` returns everything.
    async fn list_page(&self, page: i64, limit: i64) -> StoreResult<Vec<RideEntity>>;

    async fn count(&self) -> StoreResult<i64>;
}

/// Row window for a 1-based `page`. `None` limit means unbounded.
///
/// The offset uses the raw limit, so `limit == 0` always starts at the first row.
pub fn page_window(page: i64, limit: i64) -> (Option<i64>, i64) {
    let offset = page.saturating_sub(1).max(0).saturating_mul(limit.max(0));
    let limit = if limit == 0 { None } else { Some(limit) };
    (limit, offset)
}
