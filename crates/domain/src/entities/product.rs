use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::Category;
use serde::{Deserialize, Serialize};

/// Core Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>, // None until persisted
    pub name: String,
    pub price: i64,
    pub description: String,
    pub category: Category,
    pub image: Option<String>, // base64 of the uploaded bytes
}

impl Product {
    pub fn new(
        name: String,
        price: i64,
        description: String,
        category: Category,
        image: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name,
            price,
            description,
            category,
            image,
        }
    }

    pub fn with_id(
        id: String,
        name: String,
        price: i64,
        description: String,
        category: Category,
        image: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            price,
            description,
            category,
            image,
        }
    }

    pub fn validate(&self) -> Result<(), crate::DomainError> {
        if self.name.trim().is_empty() {
            return Err(crate::DomainError::ValidationError(
                "Invalid input: 'name' is required.".to_string(),
            ));
        }

        if self.price < 0 {
            return Err(crate::DomainError::ValidationError(
                crate::NON_NEGATIVE_PRICE_MESSAGE.to_string(),
            ));
        }

        Ok(())
    }
}

/// Encode an uploaded image for inline storage. Empty uploads count as no image.
pub fn encode_image(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        None
    } else {
        Some(STANDARD.encode(bytes))
    }
}

/// Raw create-product input, as received from the form
#[derive(Debug, Clone, Default)]
pub struct NewProductInput {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<Vec<u8>>,
}

/// Raw update-product input. `None` fields keep their stored value,
/// except `price` which is always required.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdateInput {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Validated partial update applied in place by the repository
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: i64,
    pub description: Option<String>,
    pub category: Option<Category>,
}

impl ProductChanges {
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        product.price = self.price;
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(category) = self.category {
            product.category = category;
        }
    }
}
