use crate::domain::{ApiError, ErrorCode, PagedRides, Ride, RideEntity};
use crate::transport::http::handlers::{health, rides};
use crate::transport::http::types::AppState;
use axum::http::header::{
    HeaderName, HeaderValue, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_DNS_PREFETCH_CONTROL,
    X_FRAME_OPTIONS,
};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        rides::create_ride_handler,
        rides::list_rides_handler,
        rides::get_ride_handler
    ),
    components(schemas(Ride, RideEntity, PagedRides, ApiError, ErrorCode))
)]
pub struct ApiDoc;

/// Hardening headers attached to every response.
pub const SECURITY_HEADERS: [(HeaderName, &str); 4] = [
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "SAMEORIGIN"),
    (X_DNS_PREFETCH_CONTROL, "off"),
    (REFERRER_POLICY, "no-referrer"),
];

fn with_security_headers(router: Router<AppState>) -> Router<AppState> {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ))
        })
}

pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/rides",
            get(rides::list_rides_handler).post(rides::create_ride_handler),
        )
        .route("/rides/:id", get(rides::get_ride_handler));

    with_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
