use crate::database::{products, run, SqlitePool};
use async_trait::async_trait;
use common::Category;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use domain::{DomainError, Product, ProductChanges, ProductRepository};

// Database model - separate from domain entity
#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ProductModel {
    id: String,
    name: String,
    price: i64,
    description: String,
    category: String,
    image: Option<String>,
}

#[derive(AsChangeset)]
#[diesel(table_name = products)]
struct ProductChangeset {
    name: Option<String>,
    price: i64,
    description: Option<String>,
    category: Option<String>,
}

impl TryFrom<ProductModel> for Product {
    type Error = DomainError;

    fn try_from(model: ProductModel) -> Result<Self, Self::Error> {
        let category = model.category.parse::<Category>().map_err(|e| {
            DomainError::RepositoryError(format!("Corrupt product {}: {}", model.id, e))
        })?;

        Ok(Product::with_id(
            model.id,
            model.name,
            model.price,
            model.description,
            category,
            model.image,
        ))
    }
}

impl From<&ProductChanges> for ProductChangeset {
    fn from(changes: &ProductChanges) -> Self {
        ProductChangeset {
            name: changes.name.clone(),
            price: changes.price,
            description: changes.description.clone(),
            category: changes.category.map(|c| c.as_str().to_string()),
        }
    }
}

fn into_products(models: Vec<ProductModel>) -> Result<Vec<Product>, DomainError> {
    models.into_iter().map(Product::try_from).collect()
}

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let models = run(&self.pool, |conn| {
            products::table
                .order(sql::<BigInt>("rowid"))
                .select(ProductModel::as_select())
                .load::<ProductModel>(conn)
        })
        .await?;

        into_products(models)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let id = id.to_string();

        let model = run(&self.pool, move |conn| {
            products::table
                .find(id.as_str())
                .select(ProductModel::as_select())
                .first::<ProductModel>(conn)
                .optional()
        })
        .await?;

        model.map(Product::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let name = name.to_string();

        let model = run(&self.pool, move |conn| {
            products::table
                .filter(products::name.eq(name))
                .select(ProductModel::as_select())
                .first::<ProductModel>(conn)
                .optional()
        })
        .await?;

        model.map(Product::try_from).transpose()
    }

    async fn save(&self, product: &Product) -> Result<Product, DomainError> {
        let model = ProductModel {
            id: uuid::Uuid::new_v4().to_string(),
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.as_str().to_string(),
            image: product.image.clone(),
        };

        run(&self.pool, move |conn| {
            diesel::insert_into(products::table)
                .values(&model)
                .execute(conn)?;
            Ok(model)
        })
        .await?
        .try_into()
    }

    async fn update(
        &self,
        id: &str,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, DomainError> {
        let id = id.to_string();
        let changeset = ProductChangeset::from(changes);

        let model = run(&self.pool, move |conn| {
            conn.immediate_transaction(|conn| {
                let affected = diesel::update(products::table.find(id.as_str()))
                    .set(&changeset)
                    .execute(conn)?;

                if affected == 0 {
                    return Ok(None);
                }

                // SQLite has no RETURNING through this path, so re-read
                products::table
                    .find(id.as_str())
                    .select(ProductModel::as_select())
                    .first::<ProductModel>(conn)
                    .optional()
            })
        })
        .await?;

        model.map(Product::try_from).transpose()
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let id = id.to_string();

        let affected = run(&self.pool, move |conn| {
            diesel::delete(products::table.find(id)).execute(conn)
        })
        .await?;

        Ok(affected > 0)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        run(&self.pool, |conn| products::table.count().get_result::<i64>(conn)).await
    }
}
