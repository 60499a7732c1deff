// src/db/billboard_repo.rs

use sqlx::PgPool;
use uuid::Uuid;
use crate::{
    common::{
        db_utils::map_delete_error,
        error::{AppError, Resource},
    },
    models::billboard::Billboard,
};

#[derive(Clone)]
pub struct BillboardRepository {
    pool: PgPool,
}

impl BillboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, store_id: Uuid) -> Result<Vec<Billboard>, AppError> {
        let billboards = sqlx::query_as::<_, Billboard>(
            "SELECT * FROM billboards WHERE store_id = $1 ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(billboards)
    }

    pub async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Billboard>, AppError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            "SELECT * FROM billboards WHERE store_id = $1 AND id = $2",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(billboard)
    }

    pub async fn create(
        &self,
        store_id: Uuid,
        label: &str,
        image_url: &str,
    ) -> Result<Billboard, AppError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            r#"
            INSERT INTO billboards (store_id, label, image_url)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(label)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(billboard)
    }

    pub async fn update(
        &self,
        store_id: Uuid,
        id: Uuid,
        label: &str,
        image_url: &str,
    ) -> Result<Option<Billboard>, AppError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            r#"
            UPDATE billboards
            SET label = $3, image_url = $4, updated_at = NOW()
            WHERE store_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(id)
        .bind(label)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(billboard)
    }

    pub async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM billboards WHERE store_id = $1 AND id = $2")
            .bind(store_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, Resource::Billboard))?;
        Ok(result.rows_affected() > 0)
    }
}
