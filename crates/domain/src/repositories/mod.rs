pub mod product_repository;
pub mod profile_repository;
pub mod user_repository;

pub use product_repository::ProductRepository;
pub use profile_repository::ProfileRepository;
pub use user_repository::UserRepository;
