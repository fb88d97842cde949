//! Handlers for `/api/assets`.
//!
//! Request bodies are read as raw bytes and decoded with
//! [`AssetPayload::decode`], so a non-JSON body is treated as an empty
//! payload and rejected by URI validation rather than by the extractor.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::model::{Asset, AssetPayload};
use crate::validate::is_valid_uri;
use crate::AppState;

/// `GET`: every asset, ordered by name.
pub async fn list_assets(State(state): State<AppState>) -> Result<Json<Vec<Asset>>, ApiError> {
    let assets = state.store.list_all().await.inspect_err(|e| {
        warn!(error = %e, "listing assets failed");
    })?;
    Ok(Json(assets))
}

/// `POST`: create or replace the asset at `uri`. Any note in the payload is
/// dropped.
pub async fn create_asset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Asset>), ApiError> {
    let payload = AssetPayload::decode(&body);
    require_valid_uri(&payload)?;

    let asset = Asset::from(payload);
    state.store.upsert(&asset).await.inspect_err(|e| {
        warn!(uri = %asset.uri, error = %e, "storing asset failed");
    })?;

    info!(uri = %asset.uri, name = %asset.name, "created asset");
    Ok((StatusCode::CREATED, Json(asset)))
}

/// `PUT`: set the note on an existing asset. Name and URI are untouched.
pub async fn update_asset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Asset>), ApiError> {
    let payload = AssetPayload::decode(&body);
    require_valid_uri(&payload)?;
    let Some(note) = payload.note() else {
        debug!(uri = %payload.uri, "rejected update without note");
        return Err(ApiError::MissingNote);
    };

    let mut asset = state
        .store
        .get(&payload.uri)
        .await
        .inspect_err(|e| warn!(uri = %payload.uri, error = %e, "asset lookup failed"))?
        .ok_or(ApiError::NotFound)?;

    asset.note = Some(note.to_string());
    state.store.upsert(&asset).await.inspect_err(|e| {
        warn!(uri = %asset.uri, error = %e, "storing asset note failed");
    })?;

    info!(uri = %asset.uri, "added note to asset");
    Ok((StatusCode::ACCEPTED, Json(asset)))
}

/// `DELETE`: remove an existing asset.
pub async fn remove_asset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let payload = AssetPayload::decode(&body);
    require_valid_uri(&payload)?;

    state
        .store
        .get(&payload.uri)
        .await
        .inspect_err(|e| warn!(uri = %payload.uri, error = %e, "asset lookup failed"))?
        .ok_or(ApiError::NotFound)?;

    state.store.remove(&payload.uri).await.inspect_err(|e| {
        warn!(uri = %payload.uri, error = %e, "removing asset failed");
    })?;

    info!(uri = %payload.uri, "removed asset");
    Ok(StatusCode::NO_CONTENT)
}

/// Any method other than GET, POST, PUT or DELETE.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn require_valid_uri(payload: &AssetPayload) -> Result<(), ApiError> {
    if is_valid_uri(&payload.uri) {
        Ok(())
    } else {
        debug!(uri = %payload.uri, "rejected invalid asset URI");
        Err(ApiError::InvalidUri)
    }
}
