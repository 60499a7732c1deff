// src/db/dashboard_repo.rs

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;
use crate::{
    common::error::AppError,
    models::dashboard::{DashboardSnapshot, PaidOrder, PaidOrderLine, PaidOrderRow},
};

/// Fonte de dados do painel. Injetada no `DashboardService`, o que permite
/// trocar o Postgres por uma implementação em memória nos testes.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Pedidos pagos da loja, com o preço atual de cada produto.
    async fn find_paid_orders(&self, store_id: Uuid) -> Result<Vec<PaidOrder>, AppError>;

    /// Pedidos pagos e produtos não arquivados, lidos do mesmo snapshot.
    async fn load_snapshot(&self, store_id: Uuid) -> Result<DashboardSnapshot, AppError>;
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Uma ida ao banco; o agrupamento por pedido é feito em memória.
    async fn paid_orders<'e, E>(executor: E, store_id: Uuid) -> Result<Vec<PaidOrder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, PaidOrderRow>(
            r#"
            SELECT o.id AS order_id, o.created_at, p.price
            FROM orders o
            LEFT JOIN order_items oi ON oi.order_id = o.id
            LEFT JOIN products p ON p.id = oi.product_id
            WHERE o.store_id = $1
              AND o.is_paid = TRUE
            ORDER BY o.created_at ASC, o.id
            "#,
        )
        .bind(store_id)
        .fetch_all(executor)
        .await?;

        Ok(group_paid_rows(rows))
    }

    async fn stock_count<'e, E>(executor: E, store_id: Uuid) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE store_id = $1 AND is_archived = FALSE",
        )
        .bind(store_id)
        .fetch_one(executor)
        .await?;
        Ok(count)
    }
}

#[async_trait]
impl DashboardSource for DashboardRepository {
    async fn find_paid_orders(&self, store_id: Uuid) -> Result<Vec<PaidOrder>, AppError> {
        Self::paid_orders(&self.pool, store_id).await
    }

    async fn load_snapshot(&self, store_id: Uuid) -> Result<DashboardSnapshot, AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let orders = Self::paid_orders(&mut *tx, store_id).await?;
        let stock_count = Self::stock_count(&mut *tx, store_id).await?;

        tx.commit().await?;
        Ok(DashboardSnapshot { orders, stock_count })
    }
}

/// Junta as linhas do JOIN em pedidos. Linhas do mesmo pedido chegam contíguas.
pub(crate) fn group_paid_rows(rows: Vec<PaidOrderRow>) -> Vec<PaidOrder> {
    let mut orders: Vec<PaidOrder> = Vec::new();

    for row in rows {
        // LEFT JOIN: pedido sem itens vem com preço NULL
        let line = row.price.map(|price| PaidOrderLine { price });

        match orders.last_mut() {
            Some(current) if current.id == row.order_id => current.items.extend(line),
            _ => orders.push(PaidOrder {
                id: row.order_id,
                created_at: row.created_at,
                items: line.into_iter().collect(),
            }),
        }
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn row(order_id: Uuid, price: Option<&str>) -> PaidOrderRow {
        PaidOrderRow {
            order_id,
            created_at: Utc::now(),
            price: price.map(|p| Decimal::from_str(p).unwrap()),
        }
    }

    #[test]
    fn rows_are_grouped_per_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let orders = group_paid_rows(vec![
            row(a, Some("10.00")),
            row(a, Some("5.50")),
            row(b, Some("2.25")),
        ]);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, a);
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[0].revenue(), Decimal::from_str("15.50").unwrap());
        assert_eq!(orders[1].items.len(), 1);
    }

    #[test]
    fn orders_without_items_are_kept_with_no_lines() {
        let a = Uuid::new_v4();
        let orders = group_paid_rows(vec![row(a, None)]);

        assert_eq!(orders.len(), 1);
        assert!(orders[0].items.is_empty());
        assert_eq!(orders[0].revenue(), Decimal::ZERO);
    }

    #[test]
    fn no_rows_means_no_orders() {
        assert!(group_paid_rows(Vec::new()).is_empty());
    }
}
