use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a live, active user with the given role.
    pub async fn insert_user(
        &self,
        email: &str,
        role: UserRole,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                email: ActiveValue::Set(email.to_string()),
                role: ActiveValue::Set(role),
                is_verified: ActiveValue::Set(true),
                is_active: ActiveValue::Set(true),
                average_rating: ActiveValue::Set(0.0),
                total_reviews: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_traveler(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(email, UserRole::Traveler).await
    }

    pub async fn insert_guide(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(email, UserRole::LocalExpert).await
    }
}
