//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::{AppState, Config};
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Sem configuração válida a aplicação não deve iniciar.
    let config = Config::from_env()?;
    let app_state = AppState::new(&config).await?;

    sqlx::migrate!().run(&app_state.db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = app_router(app_state);

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

fn app_router(app_state: AppState) -> Router {
    // Rotas públicas de autenticação
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let store_routes = Router::new()
        .route("/"
               ,post(handlers::stores::create_store)
               .get(handlers::stores::list_my_stores)
        )
        .route("/{store_id}"
               ,get(handlers::stores::get_store)
               .patch(handlers::stores::update_store)
               .delete(handlers::stores::delete_store)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Leitura é pública (vitrine); escrita exige dono da loja via `OwnedStore`.
    let store_scoped_routes = Router::new()
        .route("/billboards"
               ,get(handlers::billboards::list_billboards)
               .post(handlers::billboards::create_billboard)
        )
        .route("/billboards/{billboard_id}"
               ,get(handlers::billboards::get_billboard)
               .patch(handlers::billboards::update_billboard)
               .delete(handlers::billboards::delete_billboard)
        )
        .route("/categories"
               ,get(handlers::categories::list_categories)
               .post(handlers::categories::create_category)
        )
        .route("/categories/{category_id}"
               ,get(handlers::categories::get_category)
               .patch(handlers::categories::update_category)
               .delete(handlers::categories::delete_category)
        )
        .route("/sizes"
               ,get(handlers::attributes::list_sizes)
               .post(handlers::attributes::create_size)
        )
        .route("/sizes/{size_id}"
               ,get(handlers::attributes::get_size)
               .patch(handlers::attributes::update_size)
               .delete(handlers::attributes::delete_size)
        )
        .route("/colors"
               ,get(handlers::attributes::list_colors)
               .post(handlers::attributes::create_color)
        )
        .route("/colors/{color_id}"
               ,get(handlers::attributes::get_color)
               .patch(handlers::attributes::update_color)
               .delete(handlers::attributes::delete_color)
        )
        .route("/products"
               ,get(handlers::products::list_products)
               .post(handlers::products::create_product)
        )
        .route("/products/{product_id}"
               ,get(handlers::products::get_product)
               .patch(handlers::products::update_product)
               .delete(handlers::products::delete_product)
        )
        .route("/orders"
               ,get(handlers::orders::list_orders)
               .post(handlers::orders::checkout)
        )
        .route("/orders/{order_id}/pay", patch(handlers::orders::pay_order))
        .route("/dashboard", get(handlers::dashboard::get_overview))
        .route("/dashboard/revenue", get(handlers::dashboard::get_total_revenue))
        .route("/dashboard/graph-revenue", get(handlers::dashboard::get_graph_revenue));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/stores", store_routes)
        .nest("/api/{store_id}", store_scoped_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
