// src/db/store_repo.rs

use sqlx::PgPool;
use uuid::Uuid;
use crate::{
    common::{db_utils::is_foreign_key_violation, error::AppError},
    models::store::Store,
};

#[derive(Clone)]
pub struct StoreRepository {
    pool: PgPool,
}

impl StoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, name: &str) -> Result<Store, AppError> {
        let store = sqlx::query_as::<_, Store>(
            "INSERT INTO stores (user_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(store)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Store>, AppError> {
        let stores = sqlx::query_as::<_, Store>(
            "SELECT * FROM stores WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(stores)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(store)
    }

    pub async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            UPDATE stores SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(store)
    }

    /// Falha com `StoreNotEmpty` enquanto houver qualquer entidade ligada à loja.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return AppError::StoreNotEmpty;
                }
                AppError::DatabaseError(e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
