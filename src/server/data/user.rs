use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::{
    data::query::{ListQuery, UserFilter},
    model::db::UserModel,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user, stamping creation and update timestamps
    pub async fn create(&self, mut user: entity::user::ActiveModel) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();
        user.created_at = ActiveValue::Set(now);
        user.updated_at = ActiveValue::Set(now);

        user.insert(self.db).await
    }

    /// Gets a live user by ID
    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets users by ID including soft-deleted rows
    ///
    /// Used when loading the people referenced by existing bookings, which keep pointing at
    /// their traveler and guide after those accounts are removed.
    pub async fn get_many_including_deleted(
        &self,
        user_ids: Vec<i32>,
    ) -> Result<Vec<UserModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await
    }

    /// Checks whether any user, live or deleted, holds the email
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists live users, newest first
    pub async fn list(&self, query: ListQuery<UserFilter>) -> Result<Vec<UserModel>, DbErr> {
        let select = entity::prelude::User::find()
            .filter(query.filter.condition())
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id);

        query.pagination.apply(select).all(self.db).await
    }

    /// Saves changed fields of a user, stamping the update timestamp
    pub async fn update(&self, mut user: entity::user::ActiveModel) -> Result<UserModel, DbErr> {
        user.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user.update(self.db).await
    }

    /// Soft-deletes a user
    ///
    /// Returns OK regardless of the user existing, to confirm the deletion result
    /// check the [`UpdateResult::rows_affected`] field.
    pub async fn soft_delete(&self, user_id: i32) -> Result<UpdateResult, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .exec(self.db)
            .await
    }
}
