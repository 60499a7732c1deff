// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid; // usado nos params do Swagger

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{i18n::Locale, store::OwnedStore},
    models::dashboard::{DashboardOverview, GraphEntry, RevenueResponse},
};

// GET /api/{store_id}/dashboard/revenue
#[utoipa::path(
    get,
    path = "/api/{store_id}/dashboard/revenue",
    tag = "Dashboard",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 200, description = "Receita total dos pedidos pagos", body = RevenueResponse),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem acesso à loja")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_total_revenue(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
) -> Result<impl IntoResponse, ApiError> {
    let total_revenue = app_state
        .dashboard_service
        .total_revenue(store.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(RevenueResponse { total_revenue })))
}

// GET /api/{store_id}/dashboard
#[utoipa::path(
    get,
    path = "/api/{store_id}/dashboard",
    tag = "Dashboard",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 200, description = "Receita, vendas, estoque e gráfico mensal", body = DashboardOverview),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem acesso à loja")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_overview(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
) -> Result<impl IntoResponse, ApiError> {
    let overview = app_state
        .dashboard_service
        .overview(store.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(overview)))
}

// GET /api/{store_id}/dashboard/graph-revenue
#[utoipa::path(
    get,
    path = "/api/{store_id}/dashboard/graph-revenue",
    tag = "Dashboard",
    params(("store_id" = Uuid, Path, description = "ID da loja")),
    responses((status = 200, description = "Receita por mês (Jan..Dec)", body = Vec<GraphEntry>)),
    security(("api_jwt" = []))
)]
pub async fn get_graph_revenue(
    State(app_state): State<AppState>,
    locale: Locale,
    OwnedStore(store): OwnedStore,
) -> Result<impl IntoResponse, ApiError> {
    let graph = app_state
        .dashboard_service
        .graph_revenue(store.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(graph)))
}
