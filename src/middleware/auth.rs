// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::auth::User,
};

// Usuário autenticado, guardado nas extensions pelo guard
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|bearer| bearer.token().to_string())
        .ok_or(AppError::InvalidToken)
}

async fn authenticate(app_state: &AppState, token: Result<String, AppError>) -> Result<User, AppError> {
    app_state.auth_service.validate_token(&token?).await
}

// Middleware para rotas onde todas exigem login
pub async fn auth_guard(
    State(app_state): State<AppState>,
    locale: Locale,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers());
    let user = authenticate(&app_state, token)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}

// Sem o guard na frente, o extrator valida o token por conta própria.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(user.clone());
        }

        let app_state = AppState::from_ref(state);
        let locale = Locale::from_parts(parts);

        let token = bearer_token(&parts.headers);
        let user = authenticate(&app_state, token)
            .await
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

        let authenticated = AuthenticatedUser(user);
        parts.extensions.insert(authenticated.clone());
        Ok(authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderValue};

    #[test]
    fn bearer_token_reads_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_or_malformed_header_is_invalid_token() {
        assert!(matches!(bearer_token(&HeaderMap::new()), Err(AppError::InvalidToken)));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert!(matches!(bearer_token(&headers), Err(AppError::InvalidToken)));
    }
}
