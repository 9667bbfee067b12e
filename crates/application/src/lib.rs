use domain::*;
use infrastructure::*;
use std::sync::Arc;
use tracing::info;

/// Admin application - owns the persistence handle and the services built on it
pub struct AdminApp {
    pub product_service: ProductService,
    pub profile_service: ProfileService,
    pub user_service: UserService,
    pub dashboard_service: DashboardService,
    database: Database,
}

impl AdminApp {
    /// Open the database and wire every repository to it.
    pub fn open(database_url: &str) -> Result<Self, DomainError> {
        // Infrastructure layer - database setup
        let database = Database::open(database_url)?;
        let pool = database.get_pool().clone();

        // Create repository implementations
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(SqliteProductRepository::new(pool.clone()));
        let profile_repository: Arc<dyn ProfileRepository> =
            Arc::new(SqliteProfileRepository::new(pool.clone()));
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(pool));

        // Domain services
        let product_service = ProductService::new(product_repository.clone());
        let profile_service = ProfileService::new(profile_repository);
        let user_service = UserService::new(user_repository.clone());
        let dashboard_service = DashboardService::new(user_repository, product_repository);

        Ok(Self {
            product_service,
            profile_service,
            user_service,
            dashboard_service,
            database,
        })
    }

    pub fn database_location(&self) -> &str {
        self.database.location()
    }

    /// Drop every service, then close the database handle.
    pub fn close(self) {
        let AdminApp {
            product_service,
            profile_service,
            user_service,
            dashboard_service,
            database,
        } = self;

        drop((product_service, profile_service, user_service, dashboard_service));
        database.close();
        info!("Admin application closed");
    }
}
