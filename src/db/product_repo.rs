// src/db/product_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;
use crate::{
    common::{
        db_utils::{map_delete_error, map_reference_error},
        error::{AppError, Resource},
    },
    models::product::{Product, ProductFilter, ProductPayload},
};

const PRODUCT_REFS: &[(&str, Resource)] = &[
    ("products_category_id_fkey", Resource::Category),
    ("products_size_id_fkey", Resource::Size),
    ("products_color_id_fkey", Resource::Color),
];

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Produtos arquivados nunca aparecem na listagem.
    pub async fn list(&self, store_id: Uuid, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT * FROM products
            WHERE store_id = $1
              AND is_archived = FALSE
              AND ($2::uuid IS NULL OR category_id = $2)
              AND ($3::uuid IS NULL OR size_id = $3)
              AND ($4::uuid IS NULL OR color_id = $4)
              AND ($5::boolean IS NULL OR is_featured = $5)
            ORDER BY created_at DESC
            "#,
        )
        .bind(store_id)
        .bind(filter.category_id)
        .bind(filter.size_id)
        .bind(filter.color_id)
        .bind(filter.is_featured)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    pub async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE store_id = $1 AND id = $2",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    /// Quais dos ids pedidos existem nesta loja.
    pub async fn existing_ids<'e, E>(
        executor: E,
        store_id: Uuid,
        ids: &[Uuid],
    ) -> Result<Vec<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let found = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM products WHERE store_id = $1 AND id = ANY($2)",
        )
        .bind(store_id)
        .bind(ids)
        .fetch_all(executor)
        .await?;
        Ok(found)
    }

    pub async fn create(&self, store_id: Uuid, input: &ProductPayload) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (store_id, category_id, size_id, color_id, name, price, images, is_featured, is_archived)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(input.category_id)
        .bind(input.size_id)
        .bind(input.color_id)
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.images)
        .bind(input.is_featured)
        .bind(input.is_archived)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, PRODUCT_REFS))
    }

    pub async fn update(
        &self,
        store_id: Uuid,
        id: Uuid,
        input: &ProductPayload,
    ) -> Result<Option<Product>, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET category_id = $3, size_id = $4, color_id = $5, name = $6, price = $7,
                images = $8, is_featured = $9, is_archived = $10, updated_at = NOW()
            WHERE store_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(id)
        .bind(input.category_id)
        .bind(input.size_id)
        .bind(input.color_id)
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.images)
        .bind(input.is_featured)
        .bind(input.is_archived)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, PRODUCT_REFS))
    }

    pub async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE store_id = $1 AND id = $2")
            .bind(store_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, Resource::Product))?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn archive<'e, E>(executor: E, store_id: Uuid, ids: &[Uuid]) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE products SET is_archived = TRUE, updated_at = NOW()
            WHERE store_id = $1 AND id = ANY($2)
            "#,
        )
        .bind(store_id)
        .bind(ids)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
