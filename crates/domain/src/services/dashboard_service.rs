use crate::errors::DomainError;
use crate::repositories::{ProductRepository, UserRepository};
use std::sync::Arc;

/// Aggregate counts shown on the dashboard landing page
pub struct DashboardService {
    user_repository: Arc<dyn UserRepository>,
    product_repository: Arc<dyn ProductRepository>,
}

impl DashboardService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        product_repository: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            user_repository,
            product_repository,
        }
    }

    pub async fn total_users(&self) -> Result<i64, DomainError> {
        self.user_repository.count().await
    }

    pub async fn total_products(&self) -> Result<i64, DomainError> {
        self.product_repository.count().await
    }
}
