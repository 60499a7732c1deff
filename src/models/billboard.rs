// src/models/billboard.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: Uuid,
    pub store_id: Uuid,
    #[schema(example = "Summer collection")]
    pub label: String,
    #[schema(example = "https://cdn.example.com/summer.png")]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillboardPayload {
    #[validate(length(min = 1, message = "Label is required."))]
    pub label: String,
    #[validate(length(min = 1, message = "Background image is required."))]
    pub image_url: String,
}
