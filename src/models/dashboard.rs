// src/models/dashboard.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Item de um pedido pago, com o preço *atual* do produto.
#[derive(Debug, Clone, PartialEq)]
pub struct PaidOrderLine {
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaidOrder {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<PaidOrderLine>,
}

impl PaidOrder {
    pub fn revenue(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }
}

// Linha crua do JOIN orders x order_items x products
#[derive(Debug, Clone, FromRow)]
pub struct PaidOrderRow {
    pub order_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub price: Option<Decimal>,
}

/// Pedidos pagos e estoque lidos no mesmo instante.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub orders: Vec<PaidOrder>,
    pub stock_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphEntry {
    #[schema(example = "Jan")]
    pub name: String,
    #[schema(value_type = String, example = "150.00")]
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    #[schema(value_type = String, example = "15.50")]
    pub total_revenue: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    #[schema(value_type = String, example = "15.50")]
    pub total_revenue: Decimal,
    pub sales_count: i64,
    pub stock_count: i64,
    pub graph_revenue: Vec<GraphEntry>,
}
