use common::{ProductRecord, ProfileRecord};
use domain::{Product, Profile};
use serde_json::Value;

pub fn product_record(product: Product) -> ProductRecord {
    ProductRecord {
        id: product.id.unwrap_or_default(),
        name: product.name,
        price: product.price,
        description: product.description,
        category: product.category,
        image: product.image,
    }
}

pub fn profile_record(profile: Profile) -> ProfileRecord {
    ProfileRecord {
        id: profile.id.unwrap_or_default(),
        first_name: profile.first_name,
        last_name: profile.last_name,
        gender: profile.gender,
        address: profile.address,
        profile_image: profile.profile_image,
    }
}

/// Prices arrive as JSON numbers or strings; anything else is left for
/// validation to reject.
pub fn price_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}
