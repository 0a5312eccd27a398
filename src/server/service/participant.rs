use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::booking::CreateParticipantDto,
    server::{
        data::booking::participant::ParticipantRepository,
        error::{resource::Resource, Error},
        model::db::ParticipantModel,
        service::booking::find_live_booking,
    },
};

pub struct ParticipantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantService<'a> {
    /// Creates a new instance of [`ParticipantService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a participant to a live booking
    pub async fn add(
        &self,
        booking_id: i32,
        payload: CreateParticipantDto,
    ) -> Result<ParticipantModel, Error> {
        let model = participant_model(booking_id, payload)?;
        let booking = find_live_booking(self.db, booking_id).await?;

        let participant = ParticipantRepository::new(self.db).create(model).await?;

        tracing::debug!("Added participant {} to booking {}", participant.id, booking.id);

        Ok(participant)
    }

    /// Gets the participants of a live booking
    pub async fn list(&self, booking_id: i32) -> Result<Vec<ParticipantModel>, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        Ok(ParticipantRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?)
    }

    /// Removes a participant from a live booking
    pub async fn remove(&self, booking_id: i32, participant_id: i32) -> Result<(), Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        let result = ParticipantRepository::new(self.db)
            .soft_delete(booking.id, participant_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(Resource::Participant));
        }

        Ok(())
    }
}

/// Builds a participant row for the booking after checking the payload
pub(crate) fn participant_model(
    booking_id: i32,
    payload: CreateParticipantDto,
) -> Result<entity::booking_participant::ActiveModel, Error> {
    if payload.name.trim().is_empty() {
        return Err(Error::MalformedInput(
            "participant name must not be empty".to_string(),
        ));
    }

    if payload.age.is_some_and(|age| age < 0) {
        return Err(Error::MalformedInput(
            "participant age must not be negative".to_string(),
        ));
    }

    Ok(entity::booking_participant::ActiveModel {
        booking_id: ActiveValue::Set(booking_id),
        name: ActiveValue::Set(payload.name),
        age: ActiveValue::Set(payload.age),
        passport_number: ActiveValue::Set(payload.passport_number),
        ..Default::default()
    })
}
