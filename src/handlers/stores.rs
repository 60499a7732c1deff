// src/handlers/stores.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale, store::OwnedStore},
    models::store::{Store, StorePayload},
};

// POST /api/stores
#[utoipa::path(
    post,
    path = "/api/stores",
    tag = "Stores",
    request_body = StorePayload,
    responses(
        (status = 201, description = "Loja criada", body = Store),
        (status = 400, description = "Nome ausente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_store(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
    Json(payload): Json<StorePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let store = app_state
        .store_service
        .create_store(user.0.id, &payload.name)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(store)))
}

// GET /api/stores
// Sem lojas, o painel abre o modal de criação; senão vai para a primeira.
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Stores",
    responses((status = 200, description = "Lojas do usuário, mais antigas primeiro", body = Vec<Store>)),
    security(("api_jwt" = []))
)]
pub async fn list_my_stores(
    State(app_state): State<AppState>,
    locale: Locale,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let stores = app_state
        .store_service
        .list_for_user(user.0.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(stores)))
}

#[utoipa::path(
    get,
    path = "/api/stores/{store_id}",
    tag = "Stores",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 200, description = "Loja", body = Store),
        (status = 403, description = "Loja de outro usuário"),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_store(OwnedStore(store): OwnedStore) -> Json<Store> {
    Json(store)
}

// PATCH /api/stores/{store_id} (tela de configurações)
#[utoipa::path(
    patch,
    path = "/api/stores/{store_id}",
    tag = "Stores",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    request_body = StorePayload,
    responses((status = 200, description = "Loja atualizada", body = Store)),
    security(("api_jwt" = []))
)]
pub async fn update_store(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Json(payload): Json<StorePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let updated = app_state
        .store_service
        .rename(store.id, &payload.name)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/stores/{store_id}",
    tag = "Stores",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 204, description = "Loja removida"),
        (status = 409, description = "Loja ainda tem produtos ou categorias")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_store(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .store_service
        .delete(store.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
