// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub store_id: Uuid,
    pub is_paid: bool,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

// Checkout da vitrine: um item por produto.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    #[validate(length(min = 1, message = "Product ids are required."))]
    pub product_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PayOrderPayload {
    #[validate(length(min = 1, message = "Phone is required."))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required."))]
    pub address: String,
}

/// Uma linha do JOIN pedido x itens x produtos (LEFT JOIN: pedido sem itens vem com NULL).
#[derive(Debug, Clone, FromRow)]
pub struct OrderLineRow {
    pub id: Uuid,
    pub phone: String,
    pub address: String,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
}

// Linha da tabela de pedidos do painel, já formatada.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderColumn {
    pub id: Uuid,
    pub phone: String,
    pub address: String,
    #[schema(example = "Basic tee, Cap")]
    pub products: String,
    #[schema(example = "$15.50")]
    pub total_price: String,
    pub is_paid: bool,
    #[schema(example = "October 16th, 2026")]
    pub created_at: String,
}
