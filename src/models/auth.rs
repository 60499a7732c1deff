// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserPayload {
    #[validate(email(message = "The e-mail is invalid."))]
    #[schema(example = "owner@store.com")]
    pub email: String,
    #[validate(length(min = 6, message = "The password must have at least 6 characters."))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(email(message = "The e-mail is invalid."))]
    pub email: String,
    #[validate(length(min = 6, message = "The password must have at least 6 characters."))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Conteúdo ("claims") do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // ID do usuário
    pub exp: usize, // Expiração
    pub iat: usize, // Emissão
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_payload_rejects_bad_email_and_short_password() {
        let payload = RegisterUserPayload {
            email: "not-an-email".into(),
            password: "123".into(),
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@b.com".into(),
            password_hash: "secret".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["email"], "a@b.com");
    }
}
