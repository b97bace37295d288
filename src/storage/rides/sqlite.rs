//! SQLite-backed ride store.

use super::{page_window, RideStore, StoreResult};
use crate::domain::{Ride, RideEntity};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use tracing::{debug, info};

const CREATE_RIDES_TABLE: &str = "CREATE TABLE IF NOT EXISTS Rides (
    rideID INTEGER PRIMARY KEY AUTOINCREMENT,
    startLat REAL NOT NULL,
    startLong REAL NOT NULL,
    endLat REAL NOT NULL,
    endLong REAL NOT NULL,
    riderName TEXT NOT NULL,
    driverName TEXT NOT NULL,
    driverVehicle TEXT NOT NULL,
    created DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const RIDE_COLUMNS: &str =
    "rideID, startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle, created";

/// Ride store over a `sqlx` SQLite pool.
#[derive(Clone)]
pub struct SqliteRideStore {
    pool: SqlitePool,
}

impl SqliteRideStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url`, creating the database file if needed.
    ///
    /// In-memory databases live only as long as their connection, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = is_in_memory(database_url);

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };
        let pool = pool_options.connect_with(options).await?;

        info!(database_url, in_memory, "connected ride store");
        Ok(Self { pool })
    }

    /// A fresh private in-memory store.
    pub async fn in_memory() -> StoreResult<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn ride_from_row(row: &SqliteRow) -> Result<RideEntity, sqlx::Error> {
    Ok(RideEntity {
        ride_id: row.try_get("rideID")?,
        ride: Ride {
            start_lat: row.try_get("startLat")?,
            start_long: row.try_get("startLong")?,
            end_lat: row.try_get("endLat")?,
            end_long: row.try_get("endLong")?,
            rider_name: row.try_get("riderName")?,
            driver_name: row.try_get("driverName")?,
            driver_vehicle: row.try_get("driverVehicle")?,
        },
        created: row.try_get::<NaiveDateTime, _>("created")?,
    })
}

#[async_trait]
impl RideStore for SqliteRideStore {
    async fn initialize(&self) -> StoreResult<()> {
        // Hold one connection for the whole schema step; it goes back to the pool on drop.
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_RIDES_TABLE).execute(&mut *conn).await?;
        debug!("rides table ensured");
        Ok(())
    }

    async fn reset(&self) -> StoreResult<()> {
        sqlx::query("DROP TABLE IF EXISTS Rides")
            .execute(&self.pool)
            .await?;
        debug!("rides table dropped");
        Ok(())
    }

    async fn insert(&self, ride: &Ride) -> StoreResult<i64> {
        let result = sqlx::query(
            "INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(ride.start_lat)
        .bind(ride.start_long)
        .bind(ride.end_lat)
        .bind(ride.end_long)
        .bind(ride.rider_name.as_str())
        .bind(ride.driver_name.as_str())
        .bind(ride.driver_vehicle.as_str())
        .execute(&self.pool)
        .await?;

        let ride_id = result.last_insert_rowid();
        debug!(ride_id, "ride inserted");
        Ok(ride_id)
    }

    async fn get_by_id(&self, ride_id: i64) -> StoreResult<Option<RideEntity>> {
        let sql = format!("SELECT {} FROM Rides WHERE rideID = ?", RIDE_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(ride_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(ride_from_row).transpose()?)
    }

    async fn list_page(&self, page: i64, limit: i64) -> StoreResult<Vec<RideEntity>> {
        let (limit, offset) = page_window(page, limit);
        let sql = format!(
            "SELECT {} FROM Rides ORDER BY rideID LIMIT ? OFFSET ?",
            RIDE_COLUMNS
        );
        // SQLite reads a negative LIMIT as "no limit".
        let rows = sqlx::query(&sql)
            .bind(limit.unwrap_or(-1))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let rides = rows
            .iter()
            .map(ride_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rides)
    }

    async fn count(&self) -> StoreResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Rides")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
