pub mod sqlite_product_repository;
pub mod sqlite_profile_repository;
pub mod sqlite_user_repository;

pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_profile_repository::SqliteProfileRepository;
pub use sqlite_user_repository::SqliteUserRepository;
