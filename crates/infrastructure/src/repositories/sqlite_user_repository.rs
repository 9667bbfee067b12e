use crate::database::{run, users, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{DomainError, User, UserRepository};

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct UserModel {
    id: String,
    name: String,
    email: String,
    password_hash: String,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::with_id(model.id, model.name, model.email, model.password_hash)
    }
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.to_string();

        let model = run(&self.pool, move |conn| {
            users::table
                .filter(users::email.eq(email))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(model.map(User::from))
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let model = UserModel {
            id: uuid::Uuid::new_v4().to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        };

        let saved = run(&self.pool, move |conn| {
            diesel::insert_into(users::table)
                .values(&model)
                .execute(conn)?;
            Ok(model)
        })
        .await?;

        Ok(saved.into())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        run(&self.pool, |conn| users::table.count().get_result::<i64>(conn)).await
    }
}
