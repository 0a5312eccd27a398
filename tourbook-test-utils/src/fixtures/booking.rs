use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{error::TestError, fixtures::next_sequence, TestContext};

impl TestContext {
    pub fn booking(&self) -> BookingFixtures<'_> {
        BookingFixtures { setup: self }
    }
}

pub struct BookingFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> BookingFixtures<'a> {
    /// Insert a pending booking for an existing traveler and tour.
    ///
    /// The guide, tour title and traveler contact details are copied from the referenced
    /// rows, the same way bookings are created by the server.
    pub async fn insert_booking(
        &self,
        traveler_id: i32,
        tour_id: i32,
        reference: &str,
    ) -> Result<entity::booking::Model, TestError> {
        self.insert_booking_with_status(traveler_id, tour_id, reference, BookingStatus::Pending)
            .await
    }

    pub async fn insert_booking_with_status(
        &self,
        traveler_id: i32,
        tour_id: i32,
        reference: &str,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, TestError> {
        let traveler = entity::prelude::User::find_by_id(traveler_id)
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {traveler_id}")))?;
        let tour = entity::prelude::Tour::find_by_id(tour_id)
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("tour {tour_id}")))?;

        let now = Utc::now().naive_utc();
        let start_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
        let end_date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default();

        Ok(
            entity::prelude::Booking::insert(entity::booking::ActiveModel {
                booking_reference: ActiveValue::Set(reference.to_string()),
                status: ActiveValue::Set(status),
                traveler_id: ActiveValue::Set(traveler.id),
                traveler_name: ActiveValue::Set(format!(
                    "{} {}",
                    traveler.first_name, traveler.last_name
                )),
                traveler_email: ActiveValue::Set(traveler.email),
                tour_id: ActiveValue::Set(tour.id),
                tour_title: ActiveValue::Set(tour.title),
                guide_id: ActiveValue::Set(tour.guide_id),
                total_participants: ActiveValue::Set(2),
                adult_count: ActiveValue::Set(2),
                child_count: ActiveValue::Set(0),
                start_date: ActiveValue::Set(start_date),
                end_date: ActiveValue::Set(end_date),
                total_price: ActiveValue::Set(200.0),
                currency: ActiveValue::Set("USD".to_string()),
                is_cancelled: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a pending booking along with a fresh traveler, guide and tour.
    pub async fn insert_with_parents(
        &self,
        reference: &str,
    ) -> Result<entity::booking::Model, TestError> {
        let sequence = next_sequence();
        let traveler = self
            .setup
            .user()
            .insert_traveler(&format!("traveler{sequence}@example.com"))
            .await?;
        let guide = self
            .setup
            .user()
            .insert_guide(&format!("guide{sequence}@example.com"))
            .await?;
        let tour = self.setup.tour().insert_tour(guide.id).await?;

        self.insert_booking(traveler.id, tour.id, reference).await
    }

    pub async fn insert_participant(
        &self,
        booking_id: i32,
        name: &str,
    ) -> Result<entity::booking_participant::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::BookingParticipant::insert(
            entity::booking_participant::ActiveModel {
                booking_id: ActiveValue::Set(booking_id),
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
