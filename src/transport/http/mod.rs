pub mod error;
pub mod params;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod rides;
}

pub use error::RideApiError;
pub use router::{create_router, ApiDoc};
pub use types::AppState;
