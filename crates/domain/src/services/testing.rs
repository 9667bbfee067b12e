//! In-memory repositories for service tests.

use crate::entities::{Product, ProductChanges, Profile, User};
use crate::errors::DomainError;
use crate::repositories::{ProductRepository, ProfileRepository, UserRepository};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

fn next_id() -> String {
    format!("{:024x}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    lookup_barrier: Option<Arc<Barrier>>,
}

impl InMemoryProductRepository {
    /// Name lookups read, then hold their result until `parties` of them
    /// have read.
    pub fn with_lookup_barrier(parties: usize) -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            lookup_barrier: Some(Arc::new(Barrier::new(parties))),
        }
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let found = self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned();

        // Every caller has read before any of them can go on to save
        if let Some(barrier) = &self.lookup_barrier {
            barrier.wait().await;
        }
        Ok(found)
    }

    async fn save(&self, product: &Product) -> Result<Product, DomainError> {
        let mut saved = product.clone();
        saved.id = Some(next_id());
        self.products.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn update(
        &self,
        id: &str,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.lock().unwrap();
        let updated = products
            .iter_mut()
            .find(|p| p.id.as_deref() == Some(id))
            .map(|product| {
                changes.apply_to(product);
                product.clone()
            });
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id.as_deref() != Some(id));
        Ok(products.len() != before)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.products.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<Vec<Profile>>,
}

impl InMemoryProfileRepository {
    pub fn snapshot(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.snapshot())
    }

    async fn save(&self, profile: &Profile) -> Result<Profile, DomainError> {
        let mut saved = profile.clone();
        saved.id = Some(next_id());
        self.profiles.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.id.as_deref() != Some(id));
        Ok(profiles.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut saved = user.clone();
        saved.id = Some(next_id());
        self.users.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

/// Fails every call, standing in for an unreachable store.
pub struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Product>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Product>, DomainError> {
        Err(unavailable())
    }

    async fn save(&self, _product: &Product) -> Result<Product, DomainError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: &str,
        _changes: &ProductChanges,
    ) -> Result<Option<Product>, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &str) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Err(unavailable())
    }
}

#[async_trait]
impl UserRepository for FailingRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
        Err(unavailable())
    }

    async fn save(&self, _user: &User) -> Result<User, DomainError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Err(unavailable())
    }
}

fn unavailable() -> DomainError {
    DomainError::RepositoryError("database is locked".to_string())
}
