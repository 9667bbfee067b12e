use crate::entities::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use std::sync::Arc;

/// Account records. Not reachable over HTTP; used to seed and count users.
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Create a new user with business validation
    pub async fn register_user(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, DomainError> {
        let user = User::new(name, email, password);

        user.validate()?;

        // Check if email already exists
        if self.user_repository.find_by_email(&user.email).await?.is_some() {
            return Err(DomainError::ValidationError(format!(
                "A user with email {} already exists.",
                user.email
            )));
        }

        self.user_repository.save(&user).await
    }
}
