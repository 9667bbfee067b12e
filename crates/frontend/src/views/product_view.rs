use crate::api::{ApiClient, ProductForm};
use crate::notice::Notice;
use crate::reconcile::{apply_patch, Patch};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::{Category, ProductRecord, UpdateProductRequest};
use serde_json::json;
use tracing::{debug, warn};

/// Values from the edit dialog. The price is still raw text here.
#[derive(Debug, Clone)]
pub struct ProductEdit {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: Category,
}

/// Product page state: the fetched list, the two filters, and the busy flag
/// of the add form.
pub struct ProductView {
    client: ApiClient,
    products: Vec<ProductRecord>,
    filtered: Vec<ProductRecord>,
    search_query: String,
    selected_category: Option<Category>,
    is_submitting: bool,
}

/// Name contains `query` (case-insensitive) and, when a category is chosen,
/// the category matches.
pub fn filter_products(
    products: &[ProductRecord],
    query: &str,
    category: Option<Category>,
) -> Vec<ProductRecord> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .filter(|product| category.map_or(true, |wanted| product.category == wanted))
        .cloned()
        .collect()
}

impl ProductView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
            selected_category: None,
            is_submitting: false,
        }
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn filtered(&self) -> &[ProductRecord] {
        &self.filtered
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Fetch the list once. Returns a notice only on failure.
    pub async fn load(&mut self) -> Option<Notice> {
        match self.client.list_products().await {
            Ok(products) => {
                debug!("Loaded {} products", products.len());
                self.products = products;
                self.refresh();
                None
            }
            Err(e) => Some(Notice::error("Error fetching products.", &e)),
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
        self.refresh();
    }

    pub async fn add(&mut self, form: ProductForm) -> Notice {
        self.is_submitting = true;
        let result = self.client.add_product(&form).await;
        self.is_submitting = false;

        let id = match result {
            Ok(id) => id,
            Err(e) => return Notice::error("Error adding product.", &e),
        };

        match local_price(&form.price) {
            Some(price) => {
                let record = ProductRecord {
                    id,
                    name: form.name,
                    price,
                    description: form.description,
                    category: form.category,
                    image: form
                        .image
                        .filter(|bytes| !bytes.is_empty())
                        .map(|bytes| STANDARD.encode(bytes)),
                };
                self.patch(Patch::Append(record));
            }
            None => {
                // Accepted by the server but not representable here; take its copy
                warn!("Could not mirror price {:?} locally, reloading", form.price);
                if let Some(notice) = self.load().await {
                    return notice;
                }
            }
        }

        Notice::success("Success", "Product added successfully!")
    }

    pub async fn edit(&mut self, id: &str, edit: ProductEdit) -> Notice {
        let price = match local_price(&edit.price) {
            Some(price) if price >= 0 => price,
            _ => {
                return Notice::warning(
                    "Invalid Price",
                    "Please enter a valid non-negative integer for the price.",
                )
            }
        };

        let request = UpdateProductRequest {
            name: Some(edit.name),
            price: json!(price),
            description: Some(edit.description),
            category: Some(edit.category.as_str().to_string()),
        };

        match self.client.update_product(id, &request).await {
            Ok(updated) => {
                self.patch(Patch::Replace(updated));
                Notice::success("Success", "Product updated successfully!")
            }
            Err(e) => Notice::error("Error updating product.", &e),
        }
    }

    /// Nothing happens unless the operator confirmed.
    pub async fn delete(&mut self, id: &str, confirmed: bool) -> Option<Notice> {
        if !confirmed {
            return None;
        }

        match self.client.delete_product(id).await {
            Ok(_) => {
                self.patch(Patch::Remove(id.to_string()));
                Some(Notice::success("Deleted", "Product deleted successfully!"))
            }
            Err(e) => Some(Notice::error("Error deleting product.", &e)),
        }
    }

    fn patch(&mut self, patch: Patch<ProductRecord>) {
        apply_patch(&mut self.products, patch);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = filter_products(&self.products, &self.search_query, self.selected_category);
    }
}

fn local_price(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>().ok().or_else(|| {
        let value = text.parse::<f64>().ok()?;
        (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
            .then(|| value as i64)
    })
}
