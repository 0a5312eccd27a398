use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::PreferenceModel;

pub struct PreferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferenceRepository<'a, C> {
    /// Creates a new instance of [`PreferenceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a preference to a booking
    pub async fn create(
        &self,
        booking_id: i32,
        preference: String,
    ) -> Result<PreferenceModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::booking_preference::ActiveModel {
            booking_id: ActiveValue::Set(booking_id),
            preference: ActiveValue::Set(preference),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets live preferences of a booking in insertion order
    pub async fn get_by_booking(&self, booking_id: i32) -> Result<Vec<PreferenceModel>, DbErr> {
        entity::prelude::BookingPreference::find()
            .filter(entity::booking_preference::Column::BookingId.eq(booking_id))
            .filter(entity::booking_preference::Column::DeletedAt.is_null())
            .order_by_asc(entity::booking_preference::Column::Id)
            .all(self.db)
            .await
    }
}
