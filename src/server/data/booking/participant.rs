use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::model::db::ParticipantModel;

pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    /// Creates a new instance of [`ParticipantRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a participant, stamping creation and update timestamps
    pub async fn create(
        &self,
        mut participant: entity::booking_participant::ActiveModel,
    ) -> Result<ParticipantModel, DbErr> {
        let now = Utc::now().naive_utc();
        participant.created_at = ActiveValue::Set(now);
        participant.updated_at = ActiveValue::Set(now);

        participant.insert(self.db).await
    }

    /// Gets a live participant belonging to the booking
    pub async fn get(
        &self,
        booking_id: i32,
        participant_id: i32,
    ) -> Result<Option<ParticipantModel>, DbErr> {
        entity::prelude::BookingParticipant::find_by_id(participant_id)
            .filter(entity::booking_participant::Column::BookingId.eq(booking_id))
            .filter(entity::booking_participant::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets live participants of a booking in insertion order
    pub async fn get_by_booking(&self, booking_id: i32) -> Result<Vec<ParticipantModel>, DbErr> {
        self.get_by_bookings(vec![booking_id]).await
    }

    /// Gets live participants of several bookings in insertion order
    pub async fn get_by_bookings(
        &self,
        booking_ids: Vec<i32>,
    ) -> Result<Vec<ParticipantModel>, DbErr> {
        if booking_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BookingParticipant::find()
            .filter(entity::booking_participant::Column::BookingId.is_in(booking_ids))
            .filter(entity::booking_participant::Column::DeletedAt.is_null())
            .order_by_asc(entity::booking_participant::Column::Id)
            .all(self.db)
            .await
    }

    /// Soft-deletes a participant of the booking
    pub async fn soft_delete(
        &self,
        booking_id: i32,
        participant_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::BookingParticipant::update_many()
            .col_expr(entity::booking_participant::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::booking_participant::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking_participant::Column::Id.eq(participant_id))
            .filter(entity::booking_participant::Column::BookingId.eq(booking_id))
            .filter(entity::booking_participant::Column::DeletedAt.is_null())
            .exec(self.db)
            .await
    }
}
