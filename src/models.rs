pub mod attribute;
pub mod auth;
pub mod billboard;
pub mod category;
pub mod dashboard;
pub mod order;
pub mod product;
pub mod store;
