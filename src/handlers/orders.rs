// src/handlers/orders.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{i18n::Locale, store::OwnedStore},
    models::order::{CheckoutPayload, Order, OrderColumn, OrderDetail, PayOrderPayload},
};

// POST /api/{store_id}/orders (checkout público da vitrine)
#[utoipa::path(
    post,
    path = "/api/{store_id}/orders",
    tag = "Orders",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    request_body = CheckoutPayload,
    responses(
        (status = 201, description = "Pedido criado (não pago)", body = OrderDetail),
        (status = 404, description = "Algum produto não existe na loja")
    )
)]
pub async fn checkout(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(store_id): Path<Uuid>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let order = app_state
        .order_service
        .checkout(store_id, &payload.product_ids)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/orders/{order_id}/pay",
    tag = "Orders",
    params(
        ("store_id" = Uuid, Path, description = "ID da loja"),
        ("order_id" = Uuid, Path, description = "ID do pedido")
    ),
    request_body = PayOrderPayload,
    responses(
        (status = 200, description = "Pedido pago; produtos arquivados", body = Order),
        (status = 404, description = "Pedido não encontrado"),
        (status = 409, description = "Pedido já pago")
    ),
    security(("api_jwt" = []))
)]
pub async fn pay_order(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
    Path((_store_id, order_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<PayOrderPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let order = app_state
        .order_service
        .pay(store.id, order_id, &payload.phone, &payload.address)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(order)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/orders",
    tag = "Orders",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses((status = 200, description = "Linhas da tabela de pedidos", body = Vec<OrderColumn>)),
    security(("api_jwt" = []))
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state
        .order_service
        .list_columns(store.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(orders)))
}
