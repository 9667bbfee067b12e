use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const HASH_SCHEME: &str = "sha256";

/// Account record. Only ever counted by the dashboard.
///
/// The plaintext password never reaches the entity: `User::new` derives a
/// salted digest and only that is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    pub fn new(name: String, email: String, password: &str) -> Self {
        let salt = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: None,
            name,
            email,
            password_hash: hash_password(&salt, password),
        }
    }

    pub fn with_id(id: String, name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            password_hash,
        }
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let mut parts = self.password_hash.splitn(3, '$');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(HASH_SCHEME), Some(salt), Some(_)) => {
                hash_password(salt, password) == self.password_hash
            }
            _ => false,
        }
    }

    /// Same wording as the product and profile checks
    pub fn validate(&self) -> Result<(), crate::DomainError> {
        crate::require_field("name", Some(self.name.as_str()))?;
        let email = crate::require_field("email", Some(self.email.as_str()))?;

        match email.split_once('@') {
            Some((local, host)) if !local.is_empty() && !host.is_empty() => Ok(()),
            _ => Err(crate::DomainError::ValidationError(
                "Invalid input: 'email' should be an address.".to_string(),
            )),
        }
    }
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{}${}${}", HASH_SCHEME, salt, hex::encode(hasher.finalize()))
}
