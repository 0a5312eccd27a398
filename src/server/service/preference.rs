use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::preference::PreferenceRepository, error::Error,
    model::db::PreferenceModel, service::booking::find_live_booking,
};

pub struct PreferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreferenceService<'a> {
    /// Creates a new instance of [`PreferenceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a preference to a live booking
    pub async fn add(&self, booking_id: i32, preference: String) -> Result<PreferenceModel, Error> {
        if preference.trim().is_empty() {
            return Err(Error::MalformedInput(
                "preference must not be empty".to_string(),
            ));
        }

        let booking = find_live_booking(self.db, booking_id).await?;

        Ok(PreferenceRepository::new(self.db)
            .create(booking.id, preference)
            .await?)
    }

    /// Gets the preferences of a live booking
    pub async fn list(&self, booking_id: i32) -> Result<Vec<PreferenceModel>, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        Ok(PreferenceRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?)
    }
}
