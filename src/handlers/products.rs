// src/handlers/products.rs

use axum::{
    extract::{Path, Query, State},
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
    models::product::{Product, ProductFilter, ProductPayload},
};

// GET /api/{store_id}/products?categoryId=&sizeId=&colorId=&isFeatured=
#[utoipa::path(
    get,
    path = "/api/{store_id}/products",
    tag = "Products",
    params(("store_id" = Uuid, Path, description = "ID da loja"), ProductFilter),
    responses((status = 200, description = "Produtos não arquivados", body = Vec<Product>))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .product_repo
        .list(store_id, &filter)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/products/{product_id}",
    tag = "Products",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("product_id" = Uuid, Path, description = "ID do produto")
    ),
    responses(
        (status = 200, description = "Produto", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((store_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state
        .product_repo
        .find(store_id, product_id)
        .await
        .and_then(|found| found.ok_or(AppError::NotFound(Resource::Product)))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/products",
    tag = "Products",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 404, description = "Categoria, tamanho ou cor fora da loja")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let product = app_state
        .catalog_service
        .create_product(store.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/products/{product_id}",
    tag = "Products",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("product_id" = Uuid, Path, description = "ID do produto")
    ),
    request_body = ProductPayload,
    responses((status = 200, description = "Produto atualizado", body = Product)),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, product_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let product = app_state
        .catalog_service
        .update_product(store.id, product_id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/api/{store_id}/products/{product_id}",
    tag = "Products",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("product_id" = Uuid, Path, description = "ID do produto")
    ),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 409, description = "Produto presente em pedidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .product_repo
        .delete(store.id, product_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::NotFound(Resource::Product).to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
