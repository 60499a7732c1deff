// src/db/order_repo.rs

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres, Transaction};
use uuid::Uuid;
use crate::{
    common::error::AppError,
    db::ProductRepository,
    models::order::{Order, OrderItem, OrderLineRow},
};

/// Acesso aos pedidos usado pelo `OrderService`. Checkout e pagamento
/// acontecem dentro de uma `OrderTransaction`.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn OrderTransaction>, AppError>;

    /// Pedidos da loja, mais recentes primeiro, uma linha por item.
    async fn list_lines(&self, store_id: Uuid) -> Result<Vec<OrderLineRow>, AppError>;
}

/// Unidade de trabalho: sem `commit`, nada do que foi feito fica.
#[async_trait]
pub trait OrderTransaction: Send {
    async fn existing_product_ids(&mut self, store_id: Uuid, ids: &[Uuid]) -> Result<Vec<Uuid>, AppError>;
    async fn create_order(&mut self, store_id: Uuid) -> Result<Order, AppError>;
    async fn add_item(&mut self, order_id: Uuid, product_id: Uuid) -> Result<OrderItem, AppError>;
    async fn find_order(&mut self, store_id: Uuid, order_id: Uuid) -> Result<Option<Order>, AppError>;

    /// Só altera pedidos ainda não pagos.
    async fn mark_paid(
        &mut self,
        store_id: Uuid,
        order_id: Uuid,
        phone: &str,
        address: &str,
    ) -> Result<Option<Order>, AppError>;

    async fn item_product_ids(&mut self, order_id: Uuid) -> Result<Vec<Uuid>, AppError>;
    async fn archive_products(&mut self, store_id: Uuid, ids: &[Uuid]) -> Result<u64, AppError>;
    async fn commit(self: Box<Self>) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_order<'e, E>(executor: E, store_id: Uuid) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (store_id, is_paid) VALUES ($1, FALSE) RETURNING *",
        )
        .bind(store_id)
        .fetch_one(executor)
        .await?;
        Ok(order)
    }

    pub async fn add_item<'e, E>(executor: E, order_id: Uuid, product_id: Uuid) -> Result<OrderItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, OrderItem>(
            "INSERT INTO order_items (order_id, product_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(order_id)
        .bind(product_id)
        .fetch_one(executor)
        .await?;
        Ok(item)
    }

    pub async fn find<'e, E>(executor: E, store_id: Uuid, order_id: Uuid) -> Result<Option<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE store_id = $1 AND id = $2",
        )
        .bind(store_id)
        .bind(order_id)
        .fetch_optional(executor)
        .await?;
        Ok(order)
    }

    pub async fn mark_paid<'e, E>(
        executor: E,
        store_id: Uuid,
        order_id: Uuid,
        phone: &str,
        address: &str,
    ) -> Result<Option<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET is_paid = TRUE, phone = $3, address = $4, updated_at = NOW()
            WHERE store_id = $1 AND id = $2 AND is_paid = FALSE
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(order_id)
        .bind(phone)
        .bind(address)
        .fetch_optional(executor)
        .await?;
        Ok(order)
    }

    pub async fn item_product_ids<'e, E>(executor: E, order_id: Uuid) -> Result<Vec<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT product_id FROM order_items WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_all(executor)
        .await?;
        Ok(ids)
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn begin(&self) -> Result<Box<dyn OrderTransaction>, AppError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgOrderTransaction { tx }))
    }

    // Pedidos mais recentes primeiro; os itens de um pedido vêm contíguos.
    async fn list_lines(&self, store_id: Uuid) -> Result<Vec<OrderLineRow>, AppError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT o.id, o.phone, o.address, o.is_paid, o.created_at,
                   p.name AS product_name, p.price
            FROM orders o
            LEFT JOIN order_items oi ON oi.order_id = o.id
            LEFT JOIN products p ON p.id = oi.product_id
            WHERE o.store_id = $1
            ORDER BY o.created_at DESC, o.id, oi.id
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

// Dropar sem commit faz rollback.
struct PgOrderTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl OrderTransaction for PgOrderTransaction {
    async fn existing_product_ids(&mut self, store_id: Uuid, ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
        ProductRepository::existing_ids(&mut *self.tx, store_id, ids).await
    }

    async fn create_order(&mut self, store_id: Uuid) -> Result<Order, AppError> {
        OrderRepository::create_order(&mut *self.tx, store_id).await
    }

    async fn add_item(&mut self, order_id: Uuid, product_id: Uuid) -> Result<OrderItem, AppError> {
        OrderRepository::add_item(&mut *self.tx, order_id, product_id).await
    }

    async fn find_order(&mut self, store_id: Uuid, order_id: Uuid) -> Result<Option<Order>, AppError> {
        OrderRepository::find(&mut *self.tx, store_id, order_id).await
    }

    async fn mark_paid(
        &mut self,
        store_id: Uuid,
        order_id: Uuid,
        phone: &str,
        address: &str,
    ) -> Result<Option<Order>, AppError> {
        OrderRepository::mark_paid(&mut *self.tx, store_id, order_id, phone, address).await
    }

    async fn item_product_ids(&mut self, order_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        OrderRepository::item_product_ids(&mut *self.tx, order_id).await
    }

    async fn archive_products(&mut self, store_id: Uuid, ids: &[Uuid]) -> Result<u64, AppError> {
        ProductRepository::archive(&mut *self.tx, store_id, ids).await
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
