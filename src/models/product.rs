// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    #[schema(example = "Basic tee")]
    pub name: String,
    #[schema(value_type = String, example = "19.90")]
    pub price: Decimal,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("Price must be greater than zero.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "19.90")]
    pub price: Decimal,

    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,

    #[validate(length(min = 1, message = "At least one image is required."))]
    pub images: Vec<String>,

    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_archived: bool,
}

// Filtros da API pública (vitrine)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub is_featured: Option<bool>,
}
