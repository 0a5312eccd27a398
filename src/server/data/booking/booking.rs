use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::{
    data::query::{BookingFilter, ListQuery},
    model::db::BookingModel,
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new instance of [`BookingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking root, stamping creation and update timestamps
    pub async fn create(
        &self,
        mut booking: entity::booking::ActiveModel,
    ) -> Result<BookingModel, DbErr> {
        let now = Utc::now().naive_utc();
        booking.created_at = ActiveValue::Set(now);
        booking.updated_at = ActiveValue::Set(now);

        booking.insert(self.db).await
    }

    /// Gets a live booking by ID
    pub async fn get(&self, booking_id: i32) -> Result<Option<BookingModel>, DbErr> {
        entity::prelude::Booking::find_by_id(booking_id)
            .filter(entity::booking::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets a live booking by its business reference
    pub async fn get_by_reference(&self, reference: &str) -> Result<Option<BookingModel>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingReference.eq(reference))
            .filter(entity::booking::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Checks whether any booking, live or deleted, holds the reference
    pub async fn reference_exists(&self, reference: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingReference.eq(reference))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists live bookings matching the filter, newest first
    pub async fn list(&self, query: ListQuery<BookingFilter>) -> Result<Vec<BookingModel>, DbErr> {
        let select = entity::prelude::Booking::find()
            .filter(query.filter.condition())
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id);

        query.pagination.apply(select).all(self.db).await
    }

    /// Saves changed fields of a booking, stamping the update timestamp
    pub async fn update(
        &self,
        mut booking: entity::booking::ActiveModel,
    ) -> Result<BookingModel, DbErr> {
        booking.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        booking.update(self.db).await
    }

    /// Soft-deletes a booking root
    ///
    /// Child rows are left in place and become unreachable through the booking. Check
    /// [`UpdateResult::rows_affected`] to confirm a live booking was deleted.
    pub async fn soft_delete(&self, booking_id: i32) -> Result<UpdateResult, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Id.eq(booking_id))
            .filter(entity::booking::Column::DeletedAt.is_null())
            .exec(self.db)
            .await
    }
}
