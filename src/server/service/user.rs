use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        data::{
            query::{ListQuery, QueryParams, UserFilter},
            user::UserRepository,
        },
        error::{resource::Resource, Error},
        model::db::UserModel,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, a traveler unless another role is given
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::MalformedInput)` - Empty name or an email without `@`
    /// - `Err(Error::AlreadyExists)` - The email belongs to another user, live or deleted
    pub async fn create(&self, payload: CreateUserDto) -> Result<UserModel, Error> {
        let email = payload.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(Error::MalformedInput(format!("Invalid email: {}", email)));
        }
        if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
            return Err(Error::MalformedInput(
                "first_name and last_name must not be empty".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&email).await? {
            return Err(Error::AlreadyExists(Resource::User));
        }

        let user = user_repo
            .create(entity::user::ActiveModel {
                first_name: ActiveValue::Set(payload.first_name),
                last_name: ActiveValue::Set(payload.last_name),
                email: ActiveValue::Set(email),
                phone: ActiveValue::Set(payload.phone),
                role: ActiveValue::Set(payload.role.unwrap_or(UserRole::Traveler)),
                profile_image: ActiveValue::Set(payload.profile_image),
                bio: ActiveValue::Set(payload.bio),
                is_verified: ActiveValue::Set(false),
                is_active: ActiveValue::Set(true),
                years_of_experience: ActiveValue::Set(payload.years_of_experience),
                average_rating: ActiveValue::Set(0.0),
                total_reviews: ActiveValue::Set(0),
                ..Default::default()
            })
            .await?;

        tracing::info!("Created {} user {}", user.role, user.id);

        Ok(user)
    }

    pub async fn get(&self, user_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(Error::NotFound(Resource::User))
    }

    /// Lists a page of live users, newest first
    pub async fn list(&self, params: &QueryParams) -> Result<Vec<UserModel>, Error> {
        Ok(UserRepository::new(self.db)
            .list(ListQuery::<UserFilter>::from_params(params))
            .await?)
    }

    /// Updates the supplied profile fields of a live user
    pub async fn update(&self, user_id: i32, payload: UpdateUserDto) -> Result<UserModel, Error> {
        let user = self.get(user_id).await?;

        let mut active = user.into_active_model();
        if let Some(first_name) = payload.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = payload.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(phone) = payload.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(profile_image) = payload.profile_image {
            active.profile_image = ActiveValue::Set(Some(profile_image));
        }
        if let Some(bio) = payload.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(years_of_experience) = payload.years_of_experience {
            active.years_of_experience = ActiveValue::Set(Some(years_of_experience));
        }
        if let Some(is_verified) = payload.is_verified {
            active.is_verified = ActiveValue::Set(is_verified);
        }
        if let Some(is_active) = payload.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        Ok(UserRepository::new(self.db).update(active).await?)
    }

    /// Soft-deletes a live user
    ///
    /// Bookings, tours and reviews keep pointing at the deleted user.
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let result = UserRepository::new(self.db).soft_delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(Resource::User));
        }

        Ok(())
    }
}
