use crate::entities::Profile;
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError>;
    async fn save(&self, profile: &Profile) -> Result<Profile, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
