use crate::entities::{encode_image, NewProductInput, Product, ProductChanges, ProductUpdateInput};
use crate::errors::DomainError;
use crate::repositories::ProductRepository;
use crate::validation::{parse_price, INTEGER_PRICE_MESSAGE, NON_NEGATIVE_PRICE_MESSAGE};
use common::Category;
use std::sync::Arc;
use tracing::{info, warn};

/// Product catalogue operations.
///
/// Name uniqueness is a read-then-write check here, not a storage
/// constraint: two concurrent creates with the same name can both pass it.
pub struct ProductService {
    product_repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Validate and store a new product
    pub async fn create_product(&self, input: NewProductInput) -> Result<Product, DomainError> {
        let price = parse_price(input.price.as_deref().unwrap_or_default()).map_err(|e| {
            warn!("Rejected product price: {}", e);
            DomainError::ValidationError(NON_NEGATIVE_PRICE_MESSAGE.to_string())
        })?;

        let name = input.name.unwrap_or_default();
        let category = parse_category(input.category.as_deref())?;

        let product = Product::new(
            name,
            price,
            input.description.unwrap_or_default(),
            category,
            input.image.as_deref().and_then(encode_image),
        );
        product.validate()?;

        if self
            .product_repository
            .find_by_name(&product.name)
            .await?
            .is_some()
        {
            info!("Product already exists: {}", product.name);
            return Err(DomainError::DuplicateProductName(product.name));
        }

        let saved = self.product_repository.save(&product).await?;
        info!("Added product {:?} ({})", saved.id, saved.name);
        Ok(saved)
    }

    /// Apply a partial update. Price is mandatory, everything else optional.
    pub async fn update_product(
        &self,
        id: &str,
        input: ProductUpdateInput,
    ) -> Result<Product, DomainError> {
        let price = parse_price(input.price.as_deref().unwrap_or_default()).map_err(|e| {
            warn!("Rejected product price for {}: {}", id, e);
            DomainError::ValidationError(INTEGER_PRICE_MESSAGE.to_string())
        })?;

        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(DomainError::ValidationError(
                    "Invalid input: 'name' is required.".to_string(),
                ));
            }
        }

        let category = match input.category.as_deref() {
            Some(raw) => Some(parse_category(Some(raw))?),
            None => None,
        };

        // Renaming onto another product's name is refused like a duplicate create
        if let Some(name) = &input.name {
            if let Some(existing) = self.product_repository.find_by_name(name).await? {
                if existing.id.as_deref() != Some(id) {
                    // An id that was never issued is reported as such first
                    if self.product_repository.find_by_id(id).await?.is_none() {
                        return Err(DomainError::ProductNotFound(id.to_string()));
                    }
                    return Err(DomainError::DuplicateProductName(name.clone()));
                }
            }
        }

        let changes = ProductChanges {
            name: input.name,
            price,
            description: input.description,
            category,
        };

        self.product_repository
            .update(id, &changes)
            .await?
            .ok_or_else(|| DomainError::ProductNotFound(id.to_string()))
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.product_repository.find_all().await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), DomainError> {
        if self.product_repository.delete(id).await? {
            info!("Deleted product {}", id);
            Ok(())
        } else {
            Err(DomainError::ProductNotFound(id.to_string()))
        }
    }
}

fn parse_category(raw: Option<&str>) -> Result<Category, DomainError> {
    raw.unwrap_or_default().parse::<Category>().map_err(|_| {
        DomainError::ValidationError(
            "Invalid input: 'category' should be one of Fruits, Vegetables, Spices.".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::InMemoryProductRepository;

    fn input(name: &str, price: &str, category: &str) -> NewProductInput {
        NewProductInput {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
            description: Some("fresh".to_string()),
            category: Some(category.to_string()),
            image: None,
        }
    }

    fn service() -> (ProductService, Arc<InMemoryProductRepository>) {
        let repository = Arc::new(InMemoryProductRepository::default());
        (ProductService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn create_stores_submitted_fields() {
        let (service, repository) = service();

        let mut new_product = input("Apple", "30", "Fruits");
        new_product.image = Some(b"png".to_vec());
        let saved = service.create_product(new_product).await.unwrap();

        assert!(saved.id.is_some());
        let stored = repository.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Apple");
        assert_eq!(stored[0].price, 30);
        assert_eq!(stored[0].description, "fresh");
        assert_eq!(stored[0].category, Category::Fruits);
        assert_eq!(stored[0].image.as_deref(), Some("cG5n"));
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_without_writing() {
        let (service, repository) = service();
        service.create_product(input("Apple", "30", "Fruits")).await.unwrap();

        let err = service
            .create_product(input("Apple", "45", "Fruits"))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::DuplicateProductName("Apple".to_string()));
        assert_eq!(repository.snapshot().len(), 1);
        assert_eq!(repository.snapshot()[0].price, 30);
    }

    #[tokio::test]
    async fn names_differing_in_case_are_distinct() {
        let (service, _) = service();
        service.create_product(input("Apple", "30", "Fruits")).await.unwrap();
        assert!(service.create_product(input("apple", "30", "Fruits")).await.is_ok());
    }

    #[tokio::test]
    async fn bad_prices_are_rejected_on_create_and_update() {
        let (service, repository) = service();
        let saved = service.create_product(input("Apple", "30", "Fruits")).await.unwrap();
        let id = saved.id.unwrap();

        for bad in ["-1", "3.5", "abc"] {
            let err = service
                .create_product(input("Pear", bad, "Fruits"))
                .await
                .unwrap_err();
            assert_eq!(
                err,
                DomainError::ValidationError(NON_NEGATIVE_PRICE_MESSAGE.to_string())
            );

            let err = service
                .update_product(
                    &id,
                    ProductUpdateInput {
                        price: Some(bad.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(err, DomainError::ValidationError(INTEGER_PRICE_MESSAGE.to_string()));
        }

        assert_eq!(repository.snapshot().len(), 1);
        assert_eq!(repository.snapshot()[0].price, 30);
    }

    #[tokio::test]
    async fn unknown_category_is_a_validation_error() {
        let (service, repository) = service();
        let err = service
            .create_product(input("Basil", "5", "Herbs"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
        assert!(repository.snapshot().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_identifier_and_omitted_fields() {
        let (service, _) = service();
        let saved = service.create_product(input("Carrot", "12", "Vegetables")).await.unwrap();
        let id = saved.id.clone().unwrap();

        let updated = service
            .update_product(
                &id,
                ProductUpdateInput {
                    price: Some("15".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(updated.price, 15);
        assert_eq!(updated.name, "Carrot");
        assert_eq!(updated.category, Category::Vegetables);

        let listed = service.list_products().await.unwrap();
        assert_eq!(listed, vec![updated]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (service, _) = service();
        let err = service
            .update_product(
                "never-issued",
                ProductUpdateInput {
                    price: Some("1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::ProductNotFound("never-issued".to_string()));
    }

    #[tokio::test]
    async fn unknown_id_wins_over_name_collision() {
        let (service, _) = service();
        service.create_product(input("Apple", "30", "Fruits")).await.unwrap();

        let err = service
            .update_product(
                "never-issued",
                ProductUpdateInput {
                    name: Some("Apple".to_string()),
                    price: Some("1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::ProductNotFound("never-issued".to_string()));
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_rejected() {
        let (service, _) = service();
        service.create_product(input("Apple", "30", "Fruits")).await.unwrap();
        let pear = service.create_product(input("Pear", "20", "Fruits")).await.unwrap();
        let pear_id = pear.id.unwrap();

        let err = service
            .update_product(
                &pear_id,
                ProductUpdateInput {
                    name: Some("Apple".to_string()),
                    price: Some("20".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateProductName("Apple".to_string()));

        // Keeping its own name is fine
        let kept = service
            .update_product(
                &pear_id,
                ProductUpdateInput {
                    name: Some("Pear".to_string()),
                    price: Some("21".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(kept.price, 21);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let (service, _) = service();
        let err = service.delete_product("never-issued").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_the_product() {
        let (service, repository) = service();
        let saved = service.create_product(input("Cumin", "8", "Spices")).await.unwrap();
        service.delete_product(saved.id.as_deref().unwrap()).await.unwrap();
        assert!(repository.snapshot().is_empty());
    }

    /// Known limitation: the existence check and the insert are separate
    /// calls, so overlapping creates with one name can both succeed.
    #[tokio::test]
    async fn overlapping_creates_with_same_name_both_succeed() {
        let repository = Arc::new(InMemoryProductRepository::with_lookup_barrier(2));
        let service = ProductService::new(repository.clone());

        let (first, second) = tokio::join!(
            service.create_product(input("Mango", "40", "Fruits")),
            service.create_product(input("Mango", "41", "Fruits")),
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        let names: Vec<_> = repository.snapshot().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Mango".to_string(), "Mango".to_string()]);
    }
}
