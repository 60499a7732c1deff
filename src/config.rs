// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        AttributeRepository, BillboardRepository, CatalogReferenceRepository, CategoryRepository,
        DashboardRepository, OrderRepository, ProductRepository, StoreRepository, UserRepository,
    },
    services::{
        auth::AuthService, catalog_service::CatalogService, dashboard_service::DashboardService,
        order_service::OrderService, store_service::StoreService,
    },
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET deve ser definido")?;
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self { database_url, jwt_secret, server_addr, max_connections })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub i18n_store: Arc<I18nStore>,

    pub auth_service: AuthService,
    pub store_service: StoreService,
    pub catalog_service: CatalogService,
    pub order_service: OrderService,
    pub dashboard_service: DashboardService,

    // CRUDs simples vão direto ao repositório
    pub billboard_repo: BillboardRepository,
    pub category_repo: CategoryRepository,
    pub attribute_repo: AttributeRepository,
    pub product_repo: ProductRepository,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, config.jwt_secret.clone()))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(db_pool: PgPool, jwt_secret: String) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let store_repo = StoreRepository::new(db_pool.clone());
        let billboard_repo = BillboardRepository::new(db_pool.clone());
        let category_repo = CategoryRepository::new(db_pool.clone());
        let attribute_repo = AttributeRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let order_repo = OrderRepository::new(db_pool.clone());
        let catalog_refs = CatalogReferenceRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        Self {
            auth_service: AuthService::new(user_repo, jwt_secret),
            store_service: StoreService::new(store_repo),
            catalog_service: CatalogService::new(
                Arc::new(catalog_refs),
                category_repo.clone(),
                product_repo.clone(),
            ),
            order_service: OrderService::new(Arc::new(order_repo)),
            dashboard_service: DashboardService::new(Arc::new(dashboard_repo)),
            i18n_store: Arc::new(I18nStore::new()),
            billboard_repo,
            category_repo,
            attribute_repo,
            product_repo,
            db_pool,
        }
    }
}
