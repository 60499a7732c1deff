// src/db/category_repo.rs

use sqlx::PgPool;
use uuid::Uuid;
use crate::{
    common::{
        db_utils::{map_delete_error, map_reference_error},
        error::{AppError, Resource},
    },
    models::category::{Category, CategoryWithBillboard},
};

// FKs de escrita e o recurso que falta quando quebram
const CATEGORY_REFS: &[(&str, Resource)] = &[("categories_billboard_id_fkey", Resource::Billboard)];

#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, store_id: Uuid) -> Result<Vec<CategoryWithBillboard>, AppError> {
        let categories = sqlx::query_as::<_, CategoryWithBillboard>(
            r#"
            SELECT c.id, c.store_id, c.billboard_id, c.name,
                   b.label AS billboard_label,
                   c.created_at, c.updated_at
            FROM categories c
            JOIN billboards b ON b.id = c.billboard_id
            WHERE c.store_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE store_id = $1 AND id = $2",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    pub async fn create(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (store_id, billboard_id, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(billboard_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, CATEGORY_REFS))
    }

    pub async fn update(
        &self,
        store_id: Uuid,
        id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET billboard_id = $3, name = $4, updated_at = NOW()
            WHERE store_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(id)
        .bind(billboard_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_reference_error(e, CATEGORY_REFS))
    }

    pub async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE store_id = $1 AND id = $2")
            .bind(store_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, Resource::Category))?;
        Ok(result.rows_affected() > 0)
    }
}
