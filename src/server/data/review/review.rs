use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::{
    data::query::{ListQuery, ReviewFilter},
    model::db::ReviewModel,
};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review, stamping creation and update timestamps
    pub async fn create(
        &self,
        mut review: entity::review::ActiveModel,
    ) -> Result<ReviewModel, DbErr> {
        let now = Utc::now().naive_utc();
        review.created_at = ActiveValue::Set(now);
        review.updated_at = ActiveValue::Set(now);

        review.insert(self.db).await
    }

    /// Gets a live review by ID
    pub async fn get(&self, review_id: i32) -> Result<Option<ReviewModel>, DbErr> {
        entity::prelude::Review::find_by_id(review_id)
            .filter(entity::review::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets the live review written for a booking
    pub async fn get_by_booking(&self, booking_id: i32) -> Result<Option<ReviewModel>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::BookingId.eq(booking_id))
            .filter(entity::review::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Lists live reviews matching the filter, newest first
    pub async fn list(&self, query: ListQuery<ReviewFilter>) -> Result<Vec<ReviewModel>, DbErr> {
        let select = entity::prelude::Review::find()
            .filter(query.filter.condition())
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id);

        query.pagination.apply(select).all(self.db).await
    }

    /// Saves changed fields of a review, stamping the update timestamp
    pub async fn update(
        &self,
        mut review: entity::review::ActiveModel,
    ) -> Result<ReviewModel, DbErr> {
        review.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        review.update(self.db).await
    }

    /// Soft-deletes a review
    pub async fn soft_delete(&self, review_id: i32) -> Result<UpdateResult, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Review::update_many()
            .col_expr(entity::review::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::review::Column::UpdatedAt, Expr::value(now))
            .filter(entity::review::Column::Id.eq(review_id))
            .filter(entity::review::Column::DeletedAt.is_null())
            .exec(self.db)
            .await
    }
}
