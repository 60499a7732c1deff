// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Stores ---
        handlers::stores::create_store,
        handlers::stores::list_my_stores,
        handlers::stores::get_store,
        handlers::stores::update_store,
        handlers::stores::delete_store,

        // --- Billboards ---
        handlers::billboards::list_billboards,
        handlers::billboards::get_billboard,
        handlers::billboards::create_billboard,
        handlers::billboards::update_billboard,
        handlers::billboards::delete_billboard,

        // --- Categories ---
        handlers::categories::list_categories,
        handlers::categories::get_category,
        handlers::categories::create_category,
        handlers::categories::update_category,
        handlers::categories::delete_category,

        // --- Sizes / Colors ---
        handlers::attributes::list_sizes,
        handlers::attributes::create_size,
        handlers::attributes::list_colors,
        handlers::attributes::create_color,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Orders ---
        handlers::orders::checkout,
        handlers::orders::pay_order,
        handlers::orders::list_orders,

        // --- Dashboard ---
        handlers::dashboard::get_total_revenue,
        handlers::dashboard::get_overview,
        handlers::dashboard::get_graph_revenue,
    ),
    components(
        schemas(
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            models::store::Store,
            models::store::StorePayload,

            models::billboard::Billboard,
            models::billboard::BillboardPayload,

            models::category::Category,
            models::category::CategoryWithBillboard,
            models::category::CategoryPayload,

            models::attribute::Attribute,
            models::attribute::AttributePayload,

            models::product::Product,
            models::product::ProductPayload,

            models::order::Order,
            models::order::OrderItem,
            models::order::OrderDetail,
            models::order::OrderColumn,
            models::order::CheckoutPayload,
            models::order::PayOrderPayload,

            models::dashboard::RevenueResponse,
            models::dashboard::DashboardOverview,
            models::dashboard::GraphEntry,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário"),
        (name = "Stores", description = "Lojas do usuário e configurações"),
        (name = "Billboards", description = "Banners das lojas"),
        (name = "Categories", description = "Categorias de produtos"),
        (name = "Sizes", description = "Tamanhos"),
        (name = "Colors", description = "Cores"),
        (name = "Products", description = "Catálogo de produtos"),
        (name = "Orders", description = "Checkout e pedidos"),
        (name = "Dashboard", description = "Receita, vendas e estoque")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
