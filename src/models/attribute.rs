// src/models/attribute.rs
//
// Tamanhos e cores têm o mesmo formato (nome + valor) e só mudam de tabela.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::error::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Size,
    Color,
}

impl AttributeKind {
    pub fn table(self) -> &'static str {
        match self {
            AttributeKind::Size => "sizes",
            AttributeKind::Color => "colors",
        }
    }

    pub fn resource(self) -> Resource {
        match self {
            AttributeKind::Size => Resource::Size,
            AttributeKind::Color => Resource::Color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: Uuid,
    pub store_id: Uuid,
    #[schema(example = "Small")]
    pub name: String,
    #[schema(example = "S")]
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AttributePayload {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "Value is required."))]
    pub value: String,
}

impl AttributePayload {
    /// Validação padrão mais a regra específica de cada tipo.
    pub fn validate_for(&self, kind: AttributeKind) -> Result<(), ValidationErrors> {
        self.validate()?;
        if kind == AttributeKind::Color {
            if let Err(e) = validate_hex_color(&self.value) {
                let mut errors = ValidationErrors::new();
                errors.add("value", e);
                return Err(errors);
            }
        }
        Ok(())
    }
}

/// Aceita `#RGB` ou `#RRGGBB`.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .strip_prefix('#')
        .map(|hex| (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);

    if !valid {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("String must be a valid hex code.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(value: &str) -> AttributePayload {
        AttributePayload {
            name: "Name".into(),
            value: value.into(),
        }
    }

    #[test]
    fn hex_colors_are_checked_only_for_colors() {
        assert!(payload("#fff").validate_for(AttributeKind::Color).is_ok());
        assert!(payload("#00FF7a").validate_for(AttributeKind::Color).is_ok());
        assert!(payload("red").validate_for(AttributeKind::Color).is_err());
        assert!(payload("#12345").validate_for(AttributeKind::Color).is_err());
        assert!(payload("#ggg").validate_for(AttributeKind::Color).is_err());
        assert!(payload("XL").validate_for(AttributeKind::Size).is_ok());
    }

    #[test]
    fn empty_value_fails_before_hex_check() {
        let errors = payload("").validate_for(AttributeKind::Color).unwrap_err();
        assert!(errors.field_errors().contains_key("value"));
    }

    #[test]
    fn kinds_map_to_their_tables() {
        assert_eq!(AttributeKind::Size.table(), "sizes");
        assert_eq!(AttributeKind::Color.table(), "colors");
        assert_eq!(AttributeKind::Color.resource(), Resource::Color);
    }
}
