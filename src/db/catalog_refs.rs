// src/db/catalog_refs.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use crate::{common::error::AppError, models::attribute::AttributeKind};

/// Existência de entidades referenciadas por categorias e produtos,
/// sempre dentro da mesma loja.
#[async_trait]
pub trait CatalogReferences: Send + Sync {
    async fn billboard_exists(&self, store_id: Uuid, billboard_id: Uuid) -> Result<bool, AppError>;
    async fn category_exists(&self, store_id: Uuid, category_id: Uuid) -> Result<bool, AppError>;
    async fn attribute_exists(&self, kind: AttributeKind, store_id: Uuid, id: Uuid) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct CatalogReferenceRepository {
    pool: PgPool,
}

impl CatalogReferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // `table` vem sempre de constante do código
    async fn exists_in(&self, table: &str, store_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let sql = format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE store_id = $1 AND id = $2)");
        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(store_id)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

#[async_trait]
impl CatalogReferences for CatalogReferenceRepository {
    async fn billboard_exists(&self, store_id: Uuid, billboard_id: Uuid) -> Result<bool, AppError> {
        self.exists_in("billboards", store_id, billboard_id).await
    }

    async fn category_exists(&self, store_id: Uuid, category_id: Uuid) -> Result<bool, AppError> {
        self.exists_in("categories", store_id, category_id).await
    }

    async fn attribute_exists(&self, kind: AttributeKind, store_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        self.exists_in(kind.table(), store_id, id).await
    }
}
