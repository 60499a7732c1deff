// src/handlers/billboards.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError, Resource},
    config::AppState,
    middleware::{i18n::Locale, store::OwnedStore},
    models::billboard::{Billboard, BillboardPayload},
};

#[utoipa::path(
    get,
    path = "/api/{store_id}/billboards",
    tag = "Billboards",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses((status = 200, description = "Banners da loja", body = Vec<Billboard>))
)]
pub async fn list_billboards(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let billboards = app_state
        .billboard_repo
        .list(store_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(billboards)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/billboards/{billboard_id}",
    tag = "Billboards",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("billboard_id" = Uuid, Path, description = "ID do banner")
    ),
    responses(
        (status = 200, description = "Banner", body = Billboard),
        (status = 404, description = "Banner não encontrado")
    )
)]
pub async fn get_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((store_id, billboard_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let billboard = app_state
        .billboard_repo
        .find(store_id, billboard_id)
        .await
        .and_then(|found| found.ok_or(AppError::NotFound(Resource::Billboard)))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(billboard)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/billboards",
    tag = "Billboards",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    request_body = BillboardPayload,
    responses((status = 201, description = "Banner criado", body = Billboard)),
    security(("api_jwt" = []))
)]
pub async fn create_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Json(payload): Json<BillboardPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let billboard = app_state
        .billboard_repo
        .create(store.id, &payload.label, &payload.image_url)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(billboard)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/billboards/{billboard_id}",
    tag = "Billboards",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("billboard_id" = Uuid, Path, description = "ID do banner")
    ),
    request_body = BillboardPayload,
    responses((status = 200, description = "Banner atualizado", body = Billboard)),
    security(("api_jwt" = []))
)]
pub async fn update_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, billboard_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<BillboardPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let billboard = app_state
        .billboard_repo
        .update(store.id, billboard_id, &payload.label, &payload.image_url)
        .await
        .and_then(|found| found.ok_or(AppError::NotFound(Resource::Billboard)))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(billboard)))
}

// Falha com 409 enquanto alguma categoria usar o banner.
#[utoipa::path(
    delete,
    path = "/api/{store_id}/billboards/{billboard_id}",
    tag = "Billboards",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("billboard_id" = Uuid, Path, description = "ID do banner")
    ),
    responses(
        (status = 204, description = "Banner removido"),
        (status = 409, description = "Banner em uso por categorias")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_billboard(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, billboard_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .billboard_repo
        .delete(store.id, billboard_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::NotFound(Resource::Billboard).to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
