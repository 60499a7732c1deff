// src/handlers/attributes.rs
//
// Tamanhos e cores: as rotas só fixam o `AttributeKind` e delegam.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{i18n::Locale, store::OwnedStore},
    models::attribute::{Attribute, AttributeKind, AttributePayload},
};

async fn list(app_state: AppState, locale: Locale, kind: AttributeKind, store_id: Uuid) -> Result<Response, ApiError> {
    let rows = app_state
        .attribute_repo
        .list(kind, store_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(rows)).into_response())
}

async fn get(
    app_state: AppState,
    locale: Locale,
    kind: AttributeKind,
    store_id: Uuid,
    id: Uuid,
) -> Result<Response, ApiError> {
    let row = app_state
        .attribute_repo
        .find(kind, store_id, id)
        .await
        .and_then(|found| found.ok_or(AppError::NotFound(kind.resource())))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(row)).into_response())
}

async fn create(
    app_state: AppState,
    locale: Locale,
    kind: AttributeKind,
    store_id: Uuid,
    payload: AttributePayload,
) -> Result<Response, ApiError> {
    payload
        .validate_for(kind)
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let row = app_state
        .attribute_repo
        .create(kind, store_id, &payload.name, &payload.value)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(row)).into_response())
}

async fn update(
    app_state: AppState,
    locale: Locale,
    kind: AttributeKind,
    store_id: Uuid,
    id: Uuid,
    payload: AttributePayload,
) -> Result<Response, ApiError> {
    payload
        .validate_for(kind)
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let row = app_state
        .attribute_repo
        .update(kind, store_id, id, &payload.name, &payload.value)
        .await
        .and_then(|found| found.ok_or(AppError::NotFound(kind.resource())))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(row)).into_response())
}

async fn delete(
    app_state: AppState,
    locale: Locale,
    kind: AttributeKind,
    store_id: Uuid,
    id: Uuid,
) -> Result<Response, ApiError> {
    let deleted = app_state
        .attribute_repo
        .delete(kind, store_id, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::NotFound(kind.resource()).to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

// ---
// Tamanhos
// ---

#[utoipa::path(
    get,
    path = "/api/{store_id}/sizes",
    tag = "Sizes",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses((status = 200, description = "Tamanhos da loja", body = Vec<Attribute>))
)]
pub async fn list_sizes(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    list(app_state, locale, AttributeKind::Size, store_id).await
}

pub async fn get_size(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((store_id, size_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ApiError> {
    get(app_state, locale, AttributeKind::Size, store_id, size_id).await
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/sizes",
    tag = "Sizes",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    request_body = AttributePayload,
    responses((status = 201, description = "Tamanho criado", body = Attribute)),
    security(("api_jwt" = []))
)]
pub async fn create_size(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Json(payload): Json<AttributePayload>,
) -> Result<Response, ApiError> {
    create(app_state, locale, AttributeKind::Size, store.id, payload).await
}

pub async fn update_size(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, size_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<AttributePayload>,
) -> Result<Response, ApiError> {
    update(app_state, locale, AttributeKind::Size, store.id, size_id, payload).await
}

pub async fn delete_size(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, size_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ApiError> {
    delete(app_state, locale, AttributeKind::Size, store.id, size_id).await
}

// ---
// Cores (valor precisa ser hexadecimal)
// ---

#[utoipa::path(
    get,
    path = "/api/{store_id}/colors",
    tag = "Colors",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses((status = 200, description = "Cores da loja", body = Vec<Attribute>))
)]
pub async fn list_colors(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    list(app_state, locale, AttributeKind::Color, store_id).await
}

pub async fn get_color(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((store_id, color_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ApiError> {
    get(app_state, locale, AttributeKind::Color, store_id, color_id).await
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/colors",
    tag = "Colors",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    request_body = AttributePayload,
    responses(
        (status = 201, description = "Cor criada", body = Attribute),
        (status = 400, description = "Valor não é um hexadecimal válido")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_color(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Json(payload): Json<AttributePayload>,
) -> Result<Response, ApiError> {
    create(app_state, locale, AttributeKind::Color, store.id, payload).await
}

pub async fn update_color(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, color_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<AttributePayload>,
) -> Result<Response, ApiError> {
    update(app_state, locale, AttributeKind::Color, store.id, color_id, payload).await
}

pub async fn delete_color(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, color_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ApiError> {
    delete(app_state, locale, AttributeKind::Color, store.id, color_id).await
}
