use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::booking::{CreateHotelDetailsDto, UpdateHotelDetailsDto},
    server::{
        data::booking::hotel::HotelDetailsRepository,
        error::{resource::Resource, Error},
        model::db::HotelDetailsModel,
        service::booking::find_live_booking,
    },
};

pub struct HotelDetailsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelDetailsService<'a> {
    /// Creates a new instance of [`HotelDetailsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the hotel details of a live booking, at most one per booking
    pub async fn create(
        &self,
        booking_id: i32,
        payload: CreateHotelDetailsDto,
    ) -> Result<HotelDetailsModel, Error> {
        let model = hotel_details_model(booking_id, payload)?;
        let booking = find_live_booking(self.db, booking_id).await?;

        let hotel_repo = HotelDetailsRepository::new(self.db);
        if hotel_repo.get_by_booking(booking.id).await?.is_some() {
            return Err(Error::AlreadyExists(Resource::HotelDetails));
        }

        Ok(hotel_repo.create(model).await?)
    }

    /// Gets the hotel details of a live booking
    pub async fn get(&self, booking_id: i32) -> Result<HotelDetailsModel, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        HotelDetailsRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?
            .ok_or(Error::NotFound(Resource::HotelDetails))
    }

    /// Updates the supplied fields of a live booking's hotel details
    pub async fn update(
        &self,
        booking_id: i32,
        payload: UpdateHotelDetailsDto,
    ) -> Result<HotelDetailsModel, Error> {
        let hotel = self.get(booking_id).await?;

        let mut active = hotel.into_active_model();
        if let Some(hotel_name) = payload.hotel_name {
            if hotel_name.trim().is_empty() {
                return Err(Error::MalformedInput(
                    "hotel_name must not be empty".to_string(),
                ));
            }
            active.hotel_name = ActiveValue::Set(hotel_name);
        }
        if let Some(room_number) = payload.room_number {
            active.room_number = ActiveValue::Set(Some(room_number));
        }
        if let Some(address) = payload.address {
            active.address = ActiveValue::Set(Some(address));
        }

        Ok(HotelDetailsRepository::new(self.db).update(active).await?)
    }
}

pub(crate) fn hotel_details_model(
    booking_id: i32,
    payload: CreateHotelDetailsDto,
) -> Result<entity::booking_hotel_details::ActiveModel, Error> {
    if payload.hotel_name.trim().is_empty() {
        return Err(Error::MalformedInput(
            "hotel_name must not be empty".to_string(),
        ));
    }

    Ok(entity::booking_hotel_details::ActiveModel {
        booking_id: ActiveValue::Set(booking_id),
        hotel_name: ActiveValue::Set(payload.hotel_name),
        room_number: ActiveValue::Set(payload.room_number),
        address: ActiveValue::Set(payload.address),
        ..Default::default()
    })
}
