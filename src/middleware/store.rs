// src/middleware/store.rs

use axum::{
    extract::{FromRef, FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::store::Store,
};

const STORE_ID_PARAM: &str = "store_id";

/// Loja do `{store_id}` da rota, garantidamente do usuário autenticado.
/// Inexistente -> 404; de outro dono -> 403.
#[derive(Debug, Clone)]
pub struct OwnedStore(pub Store);

impl<S> FromRequestParts<S> for OwnedStore
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let locale = Locale::from_parts(parts);
        let translate = |e: AppError| e.to_api_error(&locale, &app_state.i18n_store);

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| translate(AppError::StoreNotFound))?;

        let store_id = params
            .get(STORE_ID_PARAM)
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .ok_or_else(|| translate(AppError::StoreNotFound))?;

        let store = app_state
            .store_service
            .find_owned(store_id, user.0.id)
            .await
            .map_err(&translate)?;

        Ok(OwnedStore(store))
    }
}
