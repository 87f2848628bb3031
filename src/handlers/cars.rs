//! Car CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::response;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Ids are plain decimal digits; any other path segment (signs included)
/// cannot name a row.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(id_str.to_string()));
    }
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(id_str.to_string()))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cars = state.store.list_all().await?;
    Ok(response::ok(cars))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let car = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(response::ok(car))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let input = RequestValidator::validate_create(body)?;
    let car = state.store.insert(&input).await?;
    tracing::info!(id = car.id, brand = %car.brand, model = %car.model, "car created");
    Ok(response::created(car))
}

/// Full replace: fields missing from the body are stored as NULL.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let Json(body) = body?;
    let input = RequestValidator::validate_update(body)?;
    let car = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    tracing::info!(id, "car updated");
    Ok(response::ok(car))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(id_str));
    }
    tracing::info!(id, "car deleted");
    Ok(response::message("car deleted"))
}

pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NoRoute(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unsigned_digits() {
        assert_eq!(parse_id("17").unwrap(), 17);
        for bad in ["+1", "-1", "", "1.0", " 1", "abc", "99999999999999999999"] {
            assert!(matches!(parse_id(bad), Err(AppError::NotFound(_))), "{:?}", bad);
        }
    }
}
