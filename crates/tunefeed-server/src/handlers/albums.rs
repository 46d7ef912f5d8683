//! Album handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tunefeed_core::Album;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Album>> {
    Json(state.albums.list().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    state
        .albums
        .get_by_id(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("album not found"))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Album>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let Json(album) = payload?;
    let album = state.albums.create(album).await;
    Ok((StatusCode::CREATED, Json(album)))
}
