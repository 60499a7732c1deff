pub mod attributes;
pub mod auth;
pub mod billboards;
pub mod categories;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod stores;
