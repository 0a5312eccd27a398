use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::TourDestinationModel;

pub struct TourDestinationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TourDestinationRepository<'a, C> {
    /// Creates a new instance of [`TourDestinationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a live destination by ID
    pub async fn get(&self, destination_id: i32) -> Result<Option<TourDestinationModel>, DbErr> {
        entity::prelude::TourDestination::find_by_id(destination_id)
            .filter(entity::tour_destination::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets destinations by ID
    pub async fn get_many(
        &self,
        destination_ids: Vec<i32>,
    ) -> Result<Vec<TourDestinationModel>, DbErr> {
        if destination_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TourDestination::find()
            .filter(entity::tour_destination::Column::Id.is_in(destination_ids))
            .all(self.db)
            .await
    }
}
