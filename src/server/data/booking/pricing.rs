use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::PricingModel;

pub struct PricingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PricingRepository<'a, C> {
    /// Creates a new instance of [`PricingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the pricing record of a booking
    ///
    /// The `booking_id` column is unique, inserting a second record for the same booking
    /// fails with a constraint violation.
    pub async fn create(
        &self,
        mut pricing: entity::booking_pricing::ActiveModel,
    ) -> Result<PricingModel, DbErr> {
        let now = Utc::now().naive_utc();
        pricing.created_at = ActiveValue::Set(now);
        pricing.updated_at = ActiveValue::Set(now);

        pricing.insert(self.db).await
    }

    /// Gets the pricing record of a booking
    pub async fn get_by_booking(&self, booking_id: i32) -> Result<Option<PricingModel>, DbErr> {
        entity::prelude::BookingPricing::find()
            .filter(entity::booking_pricing::Column::BookingId.eq(booking_id))
            .filter(entity::booking_pricing::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets pricing records of several bookings
    pub async fn get_by_bookings(&self, booking_ids: Vec<i32>) -> Result<Vec<PricingModel>, DbErr> {
        if booking_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BookingPricing::find()
            .filter(entity::booking_pricing::Column::BookingId.is_in(booking_ids))
            .filter(entity::booking_pricing::Column::DeletedAt.is_null())
            .all(self.db)
            .await
    }

    /// Saves changed fields of a pricing record, stamping the update timestamp
    pub async fn update(
        &self,
        mut pricing: entity::booking_pricing::ActiveModel,
    ) -> Result<PricingModel, DbErr> {
        pricing.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        pricing.update(self.db).await
    }
}
