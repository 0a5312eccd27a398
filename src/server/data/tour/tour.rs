use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, UpdateResult,
};

use crate::server::{
    data::query::{ListQuery, TourFilter},
    model::db::TourModel,
};

pub struct TourRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TourRepository<'a, C> {
    /// Creates a new instance of [`TourRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a tour, stamping creation and update timestamps
    pub async fn create(&self, mut tour: entity::tour::ActiveModel) -> Result<TourModel, DbErr> {
        let now = Utc::now().naive_utc();
        tour.created_at = ActiveValue::Set(now);
        tour.updated_at = ActiveValue::Set(now);

        tour.insert(self.db).await
    }

    /// Gets a live tour by ID
    pub async fn get(&self, tour_id: i32) -> Result<Option<TourModel>, DbErr> {
        entity::prelude::Tour::find_by_id(tour_id)
            .filter(entity::tour::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets tours by ID including soft-deleted rows
    pub async fn get_many_including_deleted(
        &self,
        tour_ids: Vec<i32>,
    ) -> Result<Vec<TourModel>, DbErr> {
        if tour_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tour::find()
            .filter(entity::tour::Column::Id.is_in(tour_ids))
            .all(self.db)
            .await
    }

    /// Checks whether any tour, live or deleted, uses the slug
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Tour::find()
            .filter(entity::tour::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists live tours matching the filter in the requested order
    pub async fn list(&self, query: ListQuery<TourFilter>) -> Result<Vec<TourModel>, DbErr> {
        let select = query.filter.order(entity::prelude::Tour::find());
        let select = select.filter(query.filter.condition());

        query.pagination.apply(select).all(self.db).await
    }

    /// Saves changed fields of a tour, stamping the update timestamp
    pub async fn update(&self, mut tour: entity::tour::ActiveModel) -> Result<TourModel, DbErr> {
        tour.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        tour.update(self.db).await
    }

    /// Soft-deletes a tour
    ///
    /// Bookings and reviews referencing the tour are left untouched. Check
    /// [`UpdateResult::rows_affected`] to confirm a live tour was deleted.
    pub async fn soft_delete(&self, tour_id: i32) -> Result<UpdateResult, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Tour::update_many()
            .col_expr(entity::tour::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::tour::Column::UpdatedAt, Expr::value(now))
            .filter(entity::tour::Column::Id.eq(tour_id))
            .filter(entity::tour::Column::DeletedAt.is_null())
            .exec(self.db)
            .await
    }
}
