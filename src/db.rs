pub mod user_repo;
pub use user_repo::UserRepository;
pub mod store_repo;
pub use store_repo::StoreRepository;
pub mod billboard_repo;
pub use billboard_repo::BillboardRepository;
pub mod category_repo;
pub use category_repo::CategoryRepository;
pub mod attribute_repo;
pub use attribute_repo::AttributeRepository;
pub mod catalog_refs;
pub use catalog_refs::{CatalogReferenceRepository, CatalogReferences};
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod order_repo;
pub use order_repo::{OrderRepository, OrderStore};
pub mod dashboard_repo;
pub use dashboard_repo::{DashboardRepository, DashboardSource};
