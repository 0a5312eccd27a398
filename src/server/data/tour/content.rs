use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Itinerary day with its activities and meals, in insertion order.
pub type ItineraryDay = (
    entity::tour_itinerary::Model,
    Vec<entity::tour_itinerary_activity::Model>,
    Vec<entity::tour_itinerary_meal::Model>,
);

/// Repository for the collections owned by a tour: images, itinerary, tags, includes and
/// excludes.
pub struct TourContentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TourContentRepository<'a, C> {
    /// Creates a new instance of [`TourContentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an image to a tour at the given position
    pub async fn create_image(
        &self,
        tour_id: i32,
        position: i32,
        url: String,
        alt: Option<String>,
        caption: Option<String>,
        is_main: bool,
    ) -> Result<entity::tour_image::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::tour_image::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            url: ActiveValue::Set(url),
            alt: ActiveValue::Set(alt),
            caption: ActiveValue::Set(caption),
            is_main: ActiveValue::Set(is_main),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adds a tag to a tour
    pub async fn create_tag(
        &self,
        tour_id: i32,
        tag: String,
    ) -> Result<entity::tour_tag::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::tour_tag::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            tag: ActiveValue::Set(tag),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adds an included item to a tour
    pub async fn create_include(
        &self,
        tour_id: i32,
        item: String,
    ) -> Result<entity::tour_include::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::tour_include::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            item: ActiveValue::Set(item),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adds an excluded item to a tour
    pub async fn create_exclude(
        &self,
        tour_id: i32,
        item: String,
    ) -> Result<entity::tour_exclude::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::tour_exclude::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            item: ActiveValue::Set(item),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Adds an itinerary day with its activities and meals
    pub async fn create_itinerary_day(
        &self,
        tour_id: i32,
        day: i32,
        title: String,
        description: Option<String>,
        activities: Vec<String>,
        meals: Vec<String>,
    ) -> Result<entity::tour_itinerary::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let itinerary = entity::tour_itinerary::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            day: ActiveValue::Set(day),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for activity in activities {
            entity::tour_itinerary_activity::ActiveModel {
                itinerary_id: ActiveValue::Set(itinerary.id),
                activity: ActiveValue::Set(activity),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for meal in meals {
            entity::tour_itinerary_meal::ActiveModel {
                itinerary_id: ActiveValue::Set(itinerary.id),
                meal: ActiveValue::Set(meal),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(itinerary)
    }

    /// Gets live images for the given tours ordered by position
    pub async fn images(&self, tour_ids: Vec<i32>) -> Result<Vec<entity::tour_image::Model>, DbErr> {
        if tour_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TourImage::find()
            .filter(entity::tour_image::Column::TourId.is_in(tour_ids))
            .filter(entity::tour_image::Column::DeletedAt.is_null())
            .order_by_asc(entity::tour_image::Column::Position)
            .order_by_asc(entity::tour_image::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets live tags of a tour
    pub async fn tags(&self, tour_id: i32) -> Result<Vec<entity::tour_tag::Model>, DbErr> {
        entity::prelude::TourTag::find()
            .filter(entity::tour_tag::Column::TourId.eq(tour_id))
            .filter(entity::tour_tag::Column::DeletedAt.is_null())
            .order_by_asc(entity::tour_tag::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets live included items of a tour
    pub async fn includes(&self, tour_id: i32) -> Result<Vec<entity::tour_include::Model>, DbErr> {
        entity::prelude::TourInclude::find()
            .filter(entity::tour_include::Column::TourId.eq(tour_id))
            .filter(entity::tour_include::Column::DeletedAt.is_null())
            .order_by_asc(entity::tour_include::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets live excluded items of a tour
    pub async fn excludes(&self, tour_id: i32) -> Result<Vec<entity::tour_exclude::Model>, DbErr> {
        entity::prelude::TourExclude::find()
            .filter(entity::tour_exclude::Column::TourId.eq(tour_id))
            .filter(entity::tour_exclude::Column::DeletedAt.is_null())
            .order_by_asc(entity::tour_exclude::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the live itinerary of a tour ordered by day, with activities and meals attached
    pub async fn itinerary(&self, tour_id: i32) -> Result<Vec<ItineraryDay>, DbErr> {
        let days = entity::prelude::TourItinerary::find()
            .filter(entity::tour_itinerary::Column::TourId.eq(tour_id))
            .filter(entity::tour_itinerary::Column::DeletedAt.is_null())
            .order_by_asc(entity::tour_itinerary::Column::Day)
            .order_by_asc(entity::tour_itinerary::Column::Id)
            .all(self.db)
            .await?;

        if days.is_empty() {
            return Ok(Vec::new());
        }

        let day_ids: Vec<i32> = days.iter().map(|day| day.id).collect();

        let activities = entity::prelude::TourItineraryActivity::find()
            .filter(entity::tour_itinerary_activity::Column::ItineraryId.is_in(day_ids.clone()))
            .filter(entity::tour_itinerary_activity::Column::DeletedAt.is_null())
            .order_by_asc(entity::tour_itinerary_activity::Column::Id)
            .all(self.db)
            .await?;

        let meals = entity::prelude::TourItineraryMeal::find()
            .filter(entity::tour_itinerary_meal::Column::ItineraryId.is_in(day_ids))
            .filter(entity::tour_itinerary_meal::Column::DeletedAt.is_null())
            .order_by_asc(entity::tour_itinerary_meal::Column::Id)
            .all(self.db)
            .await?;

        let itinerary = days
            .into_iter()
            .map(|day| {
                let day_activities = activities
                    .iter()
                    .filter(|a| a.itinerary_id == day.id)
                    .cloned()
                    .collect();
                let day_meals = meals
                    .iter()
                    .filter(|m| m.itinerary_id == day.id)
                    .cloned()
                    .collect();

                (day, day_activities, day_meals)
            })
            .collect();

        Ok(itinerary)
    }
}
