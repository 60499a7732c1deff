use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

/// Entidades de uma loja que podem faltar ou estar em uso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Billboard,
    Category,
    Size,
    Color,
    Product,
    Order,
}

impl Resource {
    fn not_found_key(self) -> &'static str {
        match self {
            Resource::Billboard => "error.billboard_not_found",
            Resource::Category => "error.category_not_found",
            Resource::Size => "error.size_not_found",
            Resource::Color => "error.color_not_found",
            Resource::Product => "error.product_not_found",
            Resource::Order => "error.order_not_found",
        }
    }

    fn in_use_key(self) -> &'static str {
        match self {
            Resource::Billboard => "error.billboard_in_use",
            Resource::Category => "error.category_in_use",
            Resource::Size => "error.size_in_use",
            Resource::Color => "error.color_in_use",
            Resource::Product => "error.product_in_use",
            Resource::Order => "error.order_already_paid",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Loja não encontrada")]
    StoreNotFound,

    #[error("Loja pertence a outro usuário")]
    StoreAccessDenied,

    #[error("Loja ainda possui produtos ou categorias")]
    StoreNotEmpty,

    #[error("{0:?} não encontrado")]
    NotFound(Resource),

    #[error("{0:?} está em uso")]
    ResourceInUse(Resource),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// Erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();

        let (status, key) = match self {
            AppError::ValidationError(errors) => {
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: i18n.translate(lang, "error.validation"),
                    details: Some(validation_details(errors)),
                };
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "error.email_in_use"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "error.invalid_credentials"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "error.invalid_token"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "error.user_not_found"),
            AppError::StoreNotFound => (StatusCode::NOT_FOUND, "error.store_not_found"),
            AppError::StoreAccessDenied => (StatusCode::FORBIDDEN, "error.store_forbidden"),
            AppError::StoreNotEmpty => (StatusCode::CONFLICT, "error.store_not_empty"),
            AppError::NotFound(resource) => (StatusCode::NOT_FOUND, resource.not_found_key()),
            AppError::ResourceInUse(resource) => (StatusCode::CONFLICT, resource.in_use_key()),

            // Banco, bcrypt, JWT e anyhow viram 500; o detalhe fica só no log.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "error.internal")
            }
        };

        ApiError {
            status,
            error: i18n.translate(lang, key),
            details: None,
        }
    }
}

fn validation_details(errors: &validator::ValidationErrors) -> Value {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), messages);
    }
    json!(details)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}
