// src/services/catalog_service.rs
//
// Regras de consistência entre entidades do catálogo: uma categoria só aponta
// para banners da mesma loja, um produto só para categoria/tamanho/cor dela.

use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::{CatalogReferences, CategoryRepository, ProductRepository},
    models::{
        attribute::AttributeKind,
        category::{Category, CategoryPayload},
        product::{Product, ProductPayload},
    },
};

#[derive(Clone)]
pub struct CatalogService {
    refs: Arc<dyn CatalogReferences>,
    category_repo: CategoryRepository,
    product_repo: ProductRepository,
}

async fn ensure_billboard(
    refs: &dyn CatalogReferences,
    store_id: Uuid,
    billboard_id: Uuid,
) -> Result<(), AppError> {
    if !refs.billboard_exists(store_id, billboard_id).await? {
        return Err(AppError::NotFound(Resource::Billboard));
    }
    Ok(())
}

async fn ensure_product_refs(
    refs: &dyn CatalogReferences,
    store_id: Uuid,
    input: &ProductPayload,
) -> Result<(), AppError> {
    if !refs.category_exists(store_id, input.category_id).await? {
        return Err(AppError::NotFound(Resource::Category));
    }
    for (kind, id) in [
        (AttributeKind::Size, input.size_id),
        (AttributeKind::Color, input.color_id),
    ] {
        if !refs.attribute_exists(kind, store_id, id).await? {
            return Err(AppError::NotFound(kind.resource()));
        }
    }
    Ok(())
}

impl CatalogService {
    pub fn new(
        refs: Arc<dyn CatalogReferences>,
        category_repo: CategoryRepository,
        product_repo: ProductRepository,
    ) -> Self {
        Self { refs, category_repo, product_repo }
    }

    // --- CATEGORIAS ---

    pub async fn create_category(&self, store_id: Uuid, input: &CategoryPayload) -> Result<Category, AppError> {
        ensure_billboard(self.refs.as_ref(), store_id, input.billboard_id).await?;
        self.category_repo
            .create(store_id, input.billboard_id, &input.name)
            .await
    }

    pub async fn update_category(
        &self,
        store_id: Uuid,
        category_id: Uuid,
        input: &CategoryPayload,
    ) -> Result<Category, AppError> {
        ensure_billboard(self.refs.as_ref(), store_id, input.billboard_id).await?;
        self.category_repo
            .update(store_id, category_id, input.billboard_id, &input.name)
            .await?
            .ok_or(AppError::NotFound(Resource::Category))
    }

    // --- PRODUTOS ---

    pub async fn create_product(&self, store_id: Uuid, input: &ProductPayload) -> Result<Product, AppError> {
        ensure_product_refs(self.refs.as_ref(), store_id, input).await?;
        self.product_repo.create(store_id, input).await
    }

    pub async fn update_product(
        &self,
        store_id: Uuid,
        product_id: Uuid,
        input: &ProductPayload,
    ) -> Result<Product, AppError> {
        ensure_product_refs(self.refs.as_ref(), store_id, input).await?;
        self.product_repo
            .update(store_id, product_id, input)
            .await?
            .ok_or(AppError::NotFound(Resource::Product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    // (loja, id) de cada entidade cadastrada
    #[derive(Default)]
    struct InMemoryRefs {
        billboards: HashSet<(Uuid, Uuid)>,
        categories: HashSet<(Uuid, Uuid)>,
        sizes: HashSet<(Uuid, Uuid)>,
        colors: HashSet<(Uuid, Uuid)>,
    }

    #[async_trait]
    impl CatalogReferences for InMemoryRefs {
        async fn billboard_exists(&self, store_id: Uuid, billboard_id: Uuid) -> Result<bool, AppError> {
            Ok(self.billboards.contains(&(store_id, billboard_id)))
        }

        async fn category_exists(&self, store_id: Uuid, category_id: Uuid) -> Result<bool, AppError> {
            Ok(self.categories.contains(&(store_id, category_id)))
        }

        async fn attribute_exists(&self, kind: AttributeKind, store_id: Uuid, id: Uuid) -> Result<bool, AppError> {
            let table = match kind {
                AttributeKind::Size => &self.sizes,
                AttributeKind::Color => &self.colors,
            };
            Ok(table.contains(&(store_id, id)))
        }
    }

    struct Catalog {
        refs: InMemoryRefs,
        category_id: Uuid,
        size_id: Uuid,
        color_id: Uuid,
    }

    // Loja com uma categoria, um tamanho e uma cor
    fn catalog_of(store_id: Uuid) -> Catalog {
        let (category_id, size_id, color_id) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut refs = InMemoryRefs::default();
        refs.categories.insert((store_id, category_id));
        refs.sizes.insert((store_id, size_id));
        refs.colors.insert((store_id, color_id));
        Catalog { refs, category_id, size_id, color_id }
    }

    fn product(category_id: Uuid, size_id: Uuid, color_id: Uuid) -> ProductPayload {
        ProductPayload {
            name: "Basic tee".into(),
            price: Decimal::new(1990, 2),
            category_id,
            size_id,
            color_id,
            images: vec!["https://cdn/tee.png".into()],
            is_featured: false,
            is_archived: false,
        }
    }

    #[tokio::test]
    async fn product_with_references_of_its_store_passes() {
        let store = Uuid::new_v4();
        let c = catalog_of(store);

        let input = product(c.category_id, c.size_id, c.color_id);
        assert!(ensure_product_refs(&c.refs, store, &input).await.is_ok());
    }

    #[tokio::test]
    async fn product_cannot_use_category_of_another_store() {
        let (store, other) = (Uuid::new_v4(), Uuid::new_v4());
        let mut c = catalog_of(store);
        let foreign_category = Uuid::new_v4();
        c.refs.categories.insert((other, foreign_category));

        let input = product(foreign_category, c.size_id, c.color_id);
        let err = ensure_product_refs(&c.refs, store, &input).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Category)));
    }

    #[tokio::test]
    async fn missing_size_or_color_is_reported_by_kind() {
        let store = Uuid::new_v4();
        let c = catalog_of(store);

        let err = ensure_product_refs(&c.refs, store, &product(c.category_id, Uuid::new_v4(), c.color_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Size)));

        let err = ensure_product_refs(&c.refs, store, &product(c.category_id, c.size_id, Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Color)));
    }

    #[tokio::test]
    async fn category_billboard_must_belong_to_the_store() {
        let (store, other) = (Uuid::new_v4(), Uuid::new_v4());
        let billboard = Uuid::new_v4();
        let mut refs = InMemoryRefs::default();
        refs.billboards.insert((store, billboard));

        assert!(ensure_billboard(&refs, store, billboard).await.is_ok());

        let err = ensure_billboard(&refs, other, billboard).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Billboard)));
    }
}
