pub mod dashboard_service;
pub mod product_service;
pub mod profile_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard_service::DashboardService;
pub use product_service::ProductService;
pub use profile_service::ProfileService;
pub use user_service::UserService;
