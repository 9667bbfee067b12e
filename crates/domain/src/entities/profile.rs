use serde::{Deserialize, Serialize};

/// Customer profile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub address: String,
    pub profile_image: Option<String>,
}

impl Profile {
    pub fn new(
        first_name: String,
        last_name: String,
        gender: String,
        address: String,
        profile_image: Option<String>,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            gender,
            address,
            profile_image,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<String>,
}
