// src/models/category.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub store_id: Uuid,
    pub billboard_id: Uuid,
    #[schema(example = "Shirts")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Linha da listagem: a tabela de categorias mostra o banner associado.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithBillboard {
    pub id: Uuid,
    pub store_id: Uuid,
    pub billboard_id: Uuid,
    pub name: String,
    pub billboard_label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    pub billboard_id: Uuid,
}
