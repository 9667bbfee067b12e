use crate::database::{profiles, run, SqlitePool};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use domain::{DomainError, Profile, ProfileRepository};

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ProfileModel {
    id: String,
    first_name: String,
    last_name: String,
    gender: String,
    address: String,
    profile_image: Option<String>,
}

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            gender: model.gender,
            address: model.address,
            profile_image: model.profile_image,
        }
    }
}

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        let models = run(&self.pool, |conn| {
            profiles::table
                .order(sql::<BigInt>("rowid"))
                .select(ProfileModel::as_select())
                .load::<ProfileModel>(conn)
        })
        .await?;

        Ok(models.into_iter().map(Profile::from).collect())
    }

    async fn save(&self, profile: &Profile) -> Result<Profile, DomainError> {
        let model = ProfileModel {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            gender: profile.gender.clone(),
            address: profile.address.clone(),
            profile_image: profile.profile_image.clone(),
        };

        let saved = run(&self.pool, move |conn| {
            diesel::insert_into(profiles::table)
                .values(&model)
                .execute(conn)?;
            Ok(model)
        })
        .await?;

        Ok(saved.into())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let id = id.to_string();

        let affected = run(&self.pool, move |conn| {
            diesel::delete(profiles::table.find(id)).execute(conn)
        })
        .await?;

        Ok(affected > 0)
    }
}
