use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::HotelDetailsModel;

pub struct HotelDetailsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelDetailsRepository<'a, C> {
    /// Creates a new instance of [`HotelDetailsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the hotel details of a booking
    pub async fn create(
        &self,
        mut hotel: entity::booking_hotel_details::ActiveModel,
    ) -> Result<HotelDetailsModel, DbErr> {
        let now = Utc::now().naive_utc();
        hotel.created_at = ActiveValue::Set(now);
        hotel.updated_at = ActiveValue::Set(now);

        hotel.insert(self.db).await
    }

    /// Gets the hotel details of a booking
    pub async fn get_by_booking(
        &self,
        booking_id: i32,
    ) -> Result<Option<HotelDetailsModel>, DbErr> {
        entity::prelude::BookingHotelDetails::find()
            .filter(entity::booking_hotel_details::Column::BookingId.eq(booking_id))
            .filter(entity::booking_hotel_details::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets hotel details of several bookings
    pub async fn get_by_bookings(
        &self,
        booking_ids: Vec<i32>,
    ) -> Result<Vec<HotelDetailsModel>, DbErr> {
        if booking_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BookingHotelDetails::find()
            .filter(entity::booking_hotel_details::Column::BookingId.is_in(booking_ids))
            .filter(entity::booking_hotel_details::Column::DeletedAt.is_null())
            .all(self.db)
            .await
    }

    /// Saves changed fields of the hotel details, stamping the update timestamp
    pub async fn update(
        &self,
        mut hotel: entity::booking_hotel_details::ActiveModel,
    ) -> Result<HotelDetailsModel, DbErr> {
        hotel.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        hotel.update(self.db).await
    }
}
