use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::PaymentModel;

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    /// Creates a new instance of [`PaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a payment, stamping creation and update timestamps
    pub async fn create(
        &self,
        mut payment: entity::payment::ActiveModel,
    ) -> Result<PaymentModel, DbErr> {
        let now = Utc::now().naive_utc();
        payment.created_at = ActiveValue::Set(now);
        payment.updated_at = ActiveValue::Set(now);

        payment.insert(self.db).await
    }

    /// Gets a live payment belonging to the booking
    pub async fn get(
        &self,
        booking_id: i32,
        payment_id: i32,
    ) -> Result<Option<PaymentModel>, DbErr> {
        entity::prelude::Payment::find_by_id(payment_id)
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .filter(entity::payment::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets live payments of a booking, oldest first
    pub async fn get_by_booking(&self, booking_id: i32) -> Result<Vec<PaymentModel>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .filter(entity::payment::Column::DeletedAt.is_null())
            .order_by_asc(entity::payment::Column::CreatedAt)
            .order_by_asc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether any payment, live or deleted, carries the transaction ID
    pub async fn transaction_exists(&self, transaction_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::TransactionId.eq(transaction_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Saves changed fields of a payment, stamping the update timestamp
    pub async fn update(
        &self,
        mut payment: entity::payment::ActiveModel,
    ) -> Result<PaymentModel, DbErr> {
        payment.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        payment.update(self.db).await
    }
}
