use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::{DetailedRatingsModel, ReviewImageModel};

/// Repository for the detailed ratings and images attached to reviews
pub struct ReviewAttachmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewAttachmentRepository<'a, C> {
    /// Creates a new instance of [`ReviewAttachmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the detailed ratings of a review
    pub async fn create_ratings(
        &self,
        mut ratings: entity::review_detailed_ratings::ActiveModel,
    ) -> Result<DetailedRatingsModel, DbErr> {
        let now = Utc::now().naive_utc();
        ratings.created_at = ActiveValue::Set(now);
        ratings.updated_at = ActiveValue::Set(now);

        ratings.insert(self.db).await
    }

    /// Adds an image to a review
    pub async fn create_image(
        &self,
        review_id: i32,
        image_url: String,
    ) -> Result<ReviewImageModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::review_image::ActiveModel {
            review_id: ActiveValue::Set(review_id),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets detailed ratings for the given reviews
    pub async fn ratings_for(
        &self,
        review_ids: Vec<i32>,
    ) -> Result<Vec<DetailedRatingsModel>, DbErr> {
        if review_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ReviewDetailedRatings::find()
            .filter(entity::review_detailed_ratings::Column::ReviewId.is_in(review_ids))
            .filter(entity::review_detailed_ratings::Column::DeletedAt.is_null())
            .all(self.db)
            .await
    }

    /// Gets images for the given reviews in insertion order
    pub async fn images_for(&self, review_ids: Vec<i32>) -> Result<Vec<ReviewImageModel>, DbErr> {
        if review_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ReviewImage::find()
            .filter(entity::review_image::Column::ReviewId.is_in(review_ids))
            .filter(entity::review_image::Column::DeletedAt.is_null())
            .order_by_asc(entity::review_image::Column::Id)
            .all(self.db)
            .await
    }
}
