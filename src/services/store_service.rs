// src/services/store_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::StoreRepository,
    models::store::Store,
};

#[derive(Clone)]
pub struct StoreService {
    store_repo: StoreRepository,
}

impl StoreService {
    pub fn new(store_repo: StoreRepository) -> Self {
        Self { store_repo }
    }

    pub async fn create_store(&self, owner_id: Uuid, name: &str) -> Result<Store, AppError> {
        let store = self.store_repo.create(owner_id, name).await?;
        tracing::info!("🏪 Loja {} criada para o usuário {}.", store.id, owner_id);
        Ok(store)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Store>, AppError> {
        self.store_repo.list_by_user(user_id).await
    }

    /// Busca a loja e garante que pertence ao usuário.
    pub async fn find_owned(&self, store_id: Uuid, user_id: Uuid) -> Result<Store, AppError> {
        let store = self.store_repo
            .find_by_id(store_id)
            .await?
            .ok_or(AppError::StoreNotFound)?;

        ensure_owner(&store, user_id)?;
        Ok(store)
    }

    pub async fn rename(&self, store_id: Uuid, name: &str) -> Result<Store, AppError> {
        self.store_repo
            .update_name(store_id, name)
            .await?
            .ok_or(AppError::StoreNotFound)
    }

    pub async fn delete(&self, store_id: Uuid) -> Result<(), AppError> {
        if !self.store_repo.delete(store_id).await? {
            return Err(AppError::StoreNotFound);
        }
        tracing::info!("🗑️ Loja {} removida.", store_id);
        Ok(())
    }
}

pub(crate) fn ensure_owner(store: &Store, user_id: Uuid) -> Result<(), AppError> {
    if store.user_id != user_id {
        return Err(AppError::StoreAccessDenied);
    }
    Ok(())
}
