// src/handlers/categories.rs

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
    models::category::{Category, CategoryPayload, CategoryWithBillboard},
};

#[utoipa::path(
    get,
    path = "/api/{store_id}/categories",
    tag = "Categories",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses((status = 200, description = "Categorias com o banner associado", body = Vec<CategoryWithBillboard>))
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = app_state
        .category_repo
        .list(store_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/categories/{category_id}",
    tag = "Categories",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("category_id" = Uuid, Path, description = "ID da categoria")
    ),
    responses((status = 200, description = "Categoria", body = Category))
)]
pub async fn get_category(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((store_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let category = app_state
        .category_repo
        .find(store_id, category_id)
        .await
        .and_then(|found| found.ok_or(AppError::NotFound(Resource::Category)))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(category)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/categories",
    tag = "Categories",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Categoria criada", body = Category),
        (status = 404, description = "Banner não pertence à loja")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Json(payload): Json<CategoryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let category = app_state
        .catalog_service
        .create_category(store.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/categories/{category_id}",
    tag = "Categories",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("category_id" = Uuid, Path, description = "ID da categoria")
    ),
    request_body = CategoryPayload,
    responses((status = 200, description = "Categoria atualizada", body = Category)),
    security(("api_jwt" = []))
)]
pub async fn update_category(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, category_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<CategoryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let category = app_state
        .catalog_service
        .update_category(store.id, category_id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(category)))
}

#[utoipa::path(
    delete,
    path = "/api/{store_id}/categories/{category_id}",
    tag = "Categories",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("category_id" = Uuid, Path, description = "ID da categoria")
    ),
    responses(
        (status = 204, description = "Categoria removida"),
        (status = 409, description = "Categoria em uso por produtos")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_category(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .category_repo
        .delete(store.id, category_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::NotFound(Resource::Category).to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
