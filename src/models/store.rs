// src/models/store.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "E-commerce")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Usado tanto na criação (modal) quanto nas configurações da loja.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StorePayload {
    #[validate(length(min = 1, message = "Name is required."))]
    #[schema(example = "E-commerce")]
    pub name: String,
}
