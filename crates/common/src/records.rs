use crate::category::Category;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product as it travels over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub image: Option<String>, // base64 payload
}

/// Customer profile as it travels over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub address: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Body of `POST /profiles`. Fields are optional here so the server can
/// report exactly which one is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Body of `PUT /products/:id`.
///
/// `price` is kept as raw JSON because clients send it either as a number or
/// as a string; it is validated server side. Omitted fields keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_uses_underscore_id() {
        let record = ProductRecord {
            id: "abc".to_string(),
            name: "Apple".to_string(),
            price: 30,
            description: "Red".to_string(),
            category: Category::Fruits,
            image: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["category"], "Fruits");
        assert!(value["image"].is_null());
    }

    #[test]
    fn profile_fields_are_camel_case() {
        let value = json!({
            "_id": "p1",
            "firstName": "Ana",
            "lastName": "Cruz",
            "gender": "Female",
            "address": "Cebu",
            "profileImage": null
        });

        let profile: ProfileRecord = serde_json::from_value(value).unwrap();
        assert_eq!(profile.first_name, "Ana");
        assert_eq!(profile.profile_image, None);
    }

    #[test]
    fn update_request_keeps_price_raw() {
        let request: UpdateProductRequest =
            serde_json::from_value(json!({ "price": "12", "name": "Kiwi" })).unwrap();
        assert_eq!(request.price, json!("12"));
        assert_eq!(request.category, None);

        let missing: UpdateProductRequest = serde_json::from_value(json!({})).unwrap();
        assert!(missing.price.is_null());
    }
}
