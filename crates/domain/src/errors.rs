use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Product with this name already exists: {0}")]
    DuplicateProductName(String),

    #[error("Product not found with id: {0}")]
    ProductNotFound(String),

    #[error("Profile not found with id: {0}")]
    ProfileNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::ProductNotFound(_) | DomainError::ProfileNotFound(_)
        )
    }
}
