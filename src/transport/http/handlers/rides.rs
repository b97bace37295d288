use crate::domain::ride::{validate_paging_parameters, validate_ride};
use crate::domain::{ApiError, Paged, PagedRides, Ride, RideEntity};
use crate::transport::http::error::RideApiError;
use crate::transport::http::params::parse_with_fallback;
use crate::transport::http::types::{AppState, ListRidesParams};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::{debug, info};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
/// Stands in for an unparseable ride id. The store never assigns it.
pub const MISSING_RIDE_ID: i64 = 0;

#[utoipa::path(
    post,
    path = "/rides",
    request_body = Ride,
    responses(
        (status = 200, description = "Ride created", body = RideEntity),
        (status = 400, description = "Invalid ride", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn create_ride_handler(
    State(state): State<AppState>,
    request: Result<Json<Ride>, JsonRejection>,
) -> Result<Json<RideEntity>, RideApiError> {
    let Json(ride) = request.map_err(|e| RideApiError::Validation(vec![e.body_text()]))?;

    let violations = validate_ride(&ride);
    if !violations.is_empty() {
        debug!(count = violations.len(), "ride rejected");
        return Err(RideApiError::Validation(violations));
    }

    let ride_id = state.store.insert(&ride).await?;
    // Read back so the response carries the store-assigned timestamp.
    let entity = state
        .store
        .get_by_id(ride_id)
        .await?
        .ok_or(RideApiError::MissingAfterInsert(ride_id))?;

    info!(ride_id, "ride created");
    Ok(Json(entity))
}

#[utoipa::path(
    get,
    path = "/rides",
    params(ListRidesParams),
    responses(
        (status = 200, description = "One page of rides", body = PagedRides),
        (status = 400, description = "Invalid paging parameters", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn list_rides_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Paged<RideEntity>>, RideApiError> {
    // Any query string we cannot read is treated as "no parameters".
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let params = ListRidesParams::from_pairs(pairs);
    let page = parse_with_fallback(params.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_with_fallback(params.limit.as_deref(), DEFAULT_LIMIT);
    debug!(?page, ?limit, "listing rides");
    let (page, limit) = (page.value, limit.value);

    let violations = validate_paging_parameters(page, limit);
    if !violations.is_empty() {
        return Err(RideApiError::Validation(violations));
    }

    let total_results = state.store.count().await?;
    if total_results <= 0 {
        return Ok(Json(Paged::empty(limit)));
    }

    let rides = state.store.list_page(page, limit).await?;
    Ok(Json(Paged::new(rides, total_results, page, limit)))
}

#[utoipa::path(
    get,
    path = "/rides/{id}",
    params(
        ("id" = String, Path, description = "Ride id")
    ),
    responses(
        (status = 200, description = "The ride", body = RideEntity),
        (status = 404, description = "No ride with this id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    )
)]
pub async fn get_ride_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<RideEntity>, RideApiError> {
    let id = id.map(|Path(id)| id);
    if let Err(e) = &id {
        debug!(error = %e, "unreadable ride id");
    }
    let ride_id = parse_with_fallback(id.as_deref().ok(), MISSING_RIDE_ID).value;

    state
        .store
        .get_by_id(ride_id)
        .await?
        .map(Json)
        .ok_or(RideApiError::NotFound)
}
