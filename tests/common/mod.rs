//! Shared helpers: an in-process server and a store that always fails.

#![allow(dead_code)]

use async_trait::async_trait;
use ride_service::storage::StoreResult;
use ride_service::transport;
use ride_service::{Ride, RideEntity, RideStore, SqliteRideStore, StoreError};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    server: tokio::task::JoinHandle<()>,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Serves the router for `store` on an ephemeral local port.
pub async fn spawn_app(store: Arc<dyn RideStore>) -> TestApp {
    let router = transport::http::create_router(transport::http::AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        server,
    }
}

/// A fresh, initialized in-memory store.
pub async fn sqlite_store() -> Arc<SqliteRideStore> {
    let store = SqliteRideStore::in_memory().await.unwrap();
    store.initialize().await.unwrap();
    Arc::new(store)
}

pub fn test_ride() -> Ride {
    Ride {
        start_lat: 10.0,
        start_long: 20.0,
        end_lat: 30.0,
        end_long: 40.0,
        rider_name: "Rider".to_string(),
        driver_name: "Driver".to_string(),
        driver_vehicle: "Vehicle".to_string(),
    }
}

pub fn test_ride_json() -> Value {
    json!({
        "startLat": 10,
        "startLong": 20,
        "endLat": 30,
        "endLong": 40,
        "riderName": "Rider",
        "driverName": "Driver",
        "driverVehicle": "Vehicle"
    })
}

/// Simulates a backend that has lost its connection. Counts calls that reached it.
#[derive(Default)]
pub struct UnavailableStore {
    pub calls: AtomicUsize,
}

impl UnavailableStore {
    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RideStore for UnavailableStore {
    async fn initialize(&self) -> StoreResult<()> {
        self.fail()
    }

    async fn reset(&self) -> StoreResult<()> {
        self.fail()
    }

    async fn insert(&self, _ride: &Ride) -> StoreResult<i64> {
        self.fail()
    }

    async fn get_by_id(&self, _ride_id: i64) -> StoreResult<Option<RideEntity>> {
        self.fail()
    }

    async fn list_page(&self, _page: i64, _limit: i64) -> StoreResult<Vec<RideEntity>> {
        self.fail()
    }

    async fn count(&self) -> StoreResult<i64> {
        self.fail()
    }
}
