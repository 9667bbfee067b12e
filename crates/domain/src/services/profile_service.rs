use crate::entities::{NewProfileInput, Profile};
use crate::errors::DomainError;
use crate::repositories::ProfileRepository;
use crate::validation::require_field;
use std::sync::Arc;
use tracing::info;

/// Customer profile operations. Profiles are created and deleted, never updated.
pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repository }
    }

    pub async fn list_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        self.profile_repository.find_all().await
    }

    /// Create a profile once every required field is present
    pub async fn create_profile(&self, input: NewProfileInput) -> Result<Profile, DomainError> {
        let profile = Profile::new(
            require_field("firstName", input.first_name.as_deref())?,
            require_field("lastName", input.last_name.as_deref())?,
            require_field("gender", input.gender.as_deref())?,
            require_field("address", input.address.as_deref())?,
            input.profile_image.filter(|image| !image.is_empty()),
        );

        let saved = self.profile_repository.save(&profile).await?;
        info!("Added profile {:?}", saved.id);
        Ok(saved)
    }

    pub async fn delete_profile(&self, id: &str) -> Result<(), DomainError> {
        if self.profile_repository.delete(id).await? {
            info!("Deleted profile {}", id);
            Ok(())
        } else {
            Err(DomainError::ProfileNotFound(id.to_string()))
        }
    }
}
