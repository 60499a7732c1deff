// src/db/attribute_repo.rs
//
// Um repositório para `sizes` e `colors`. O nome da tabela vem de
// `AttributeKind::table()`, nunca do usuário.

use sqlx::PgPool;
use uuid::Uuid;
use crate::{
    common::{db_utils::map_delete_error, error::AppError},
    models::attribute::{Attribute, AttributeKind},
};

#[derive(Clone)]
pub struct AttributeRepository {
    pool: PgPool,
}

impl AttributeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, kind: AttributeKind, store_id: Uuid) -> Result<Vec<Attribute>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE store_id = $1 ORDER BY created_at DESC",
            kind.table()
        );
        let rows = sqlx::query_as::<_, Attribute>(&sql)
            .bind(store_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(
        &self,
        kind: AttributeKind,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Attribute>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE store_id = $1 AND id = $2", kind.table());
        let row = sqlx::query_as::<_, Attribute>(&sql)
            .bind(store_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(
        &self,
        kind: AttributeKind,
        store_id: Uuid,
        name: &str,
        value: &str,
    ) -> Result<Attribute, AppError> {
        let sql = format!(
            "INSERT INTO {} (store_id, name, value) VALUES ($1, $2, $3) RETURNING *",
            kind.table()
        );
        let row = sqlx::query_as::<_, Attribute>(&sql)
            .bind(store_id)
            .bind(name)
            .bind(value)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn update(
        &self,
        kind: AttributeKind,
        store_id: Uuid,
        id: Uuid,
        name: &str,
        value: &str,
    ) -> Result<Option<Attribute>, AppError> {
        let sql = format!(
            r#"
            UPDATE {} SET name = $3, value = $4, updated_at = NOW()
            WHERE store_id = $1 AND id = $2
            RETURNING *
            "#,
            kind.table()
        );
        let row = sqlx::query_as::<_, Attribute>(&sql)
            .bind(store_id)
            .bind(id)
            .bind(name)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&self, kind: AttributeKind, store_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE store_id = $1 AND id = $2", kind.table());
        let result = sqlx::query(&sql)
            .bind(store_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, kind.resource()))?;
        Ok(result.rows_affected() > 0)
    }
}
