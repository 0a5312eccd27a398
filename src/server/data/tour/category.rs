use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::TourCategoryModel;

pub struct TourCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TourCategoryRepository<'a, C> {
    /// Creates a new instance of [`TourCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a live category by ID
    pub async fn get(&self, category_id: i32) -> Result<Option<TourCategoryModel>, DbErr> {
        entity::prelude::TourCategory::find_by_id(category_id)
            .filter(entity::tour_category::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets categories by ID
    pub async fn get_many(&self, category_ids: Vec<i32>) -> Result<Vec<TourCategoryModel>, DbErr> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TourCategory::find()
            .filter(entity::tour_category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await
    }
}
