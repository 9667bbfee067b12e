use crate::entities::{Product, ProductChanges};
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
    /// Persists a new product and returns it with its assigned id.
    async fn save(&self, product: &Product) -> Result<Product, DomainError>;
    /// Applies the changes in place. `None` when no product has this id.
    async fn update(&self, id: &str, changes: &ProductChanges) -> Result<Option<Product>, DomainError>;
    /// Returns whether a product was removed.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
