pub mod auth;
pub mod catalog_service;
pub mod dashboard_service;
pub mod order_service;
pub mod store_service;
