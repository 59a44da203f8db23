use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, house::HouseDto},
    server::{error::AppError, service::house::HouseService, state::AppState},
};

/// Tag for grouping house endpoints in OpenAPI documentation
pub static HOUSE_TAG: &str = "house";

/// List all houses.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Houses ordered by name
/// - `204 No Content` - No houses stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/houses",
    tag = HOUSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved houses", body = Vec<HouseDto>),
        (status = 204, description = "No houses stored"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_houses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let houses = HouseService::new(&state.db).get_all().await?;

    if houses.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let houses: Vec<HouseDto> = houses.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(houses)).into_response())
}

/// Get a house by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `name` - House name exactly as stored
///
/// # Returns
/// - `200 OK` - The house
/// - `404 Not Found` - No house with that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/houses/{name}",
    tag = HOUSE_TAG,
    params(
        ("name" = String, Path, description = "House name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved house", body = HouseDto),
        (status = 404, description = "House not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_house_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let house = HouseService::new(&state.db)
        .get_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("House {} not found.", name)))?;

    Ok((StatusCode::OK, Json(house.into_dto())))
}
