use chrono::Utc;
use entity::sea_orm_active_enums::DurationUnit;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::next_sequence, TestContext};

impl TestContext {
    pub fn tour(&self) -> TourFixtures<'_> {
        TourFixtures { setup: self }
    }
}

pub struct TourFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TourFixtures<'a> {
    /// Insert a category with a unique name.
    pub async fn insert_category(&self) -> Result<entity::tour_category::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::TourCategory::insert(entity::tour_category::ActiveModel {
                name: ActiveValue::Set(format!("Category {}", next_sequence())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_destination(&self) -> Result<entity::tour_destination::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::TourDestination::insert(entity::tour_destination::ActiveModel {
                city: ActiveValue::Set("Lisbon".to_string()),
                country: ActiveValue::Set("Portugal".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a listed tour priced at 100 per person.
    pub async fn insert_tour(&self, guide_id: i32) -> Result<entity::tour::Model, TestError> {
        self.insert_tour_with_price(guide_id, 100.0).await
    }

    /// Insert a listed tour with its own category and destination.
    pub async fn insert_tour_with_price(
        &self,
        guide_id: i32,
        price: f64,
    ) -> Result<entity::tour::Model, TestError> {
        let category = self.insert_category().await?;
        let destination = self.insert_destination().await?;
        let sequence = next_sequence();
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Tour::insert(entity::tour::ActiveModel {
                title: ActiveValue::Set(format!("Old Town Walk {sequence}")),
                description: ActiveValue::Set("A walk through the old town".to_string()),
                slug: ActiveValue::Set(format!("old-town-walk-{sequence}")),
                category_id: ActiveValue::Set(category.id),
                destination_id: ActiveValue::Set(destination.id),
                guide_id: ActiveValue::Set(guide_id),
                price_amount: ActiveValue::Set(price),
                price_currency: ActiveValue::Set("USD".to_string()),
                price_per_person: ActiveValue::Set(true),
                duration_value: ActiveValue::Set(3),
                duration_unit: ActiveValue::Set(DurationUnit::Hours),
                average_rating: ActiveValue::Set(0.0),
                total_reviews: ActiveValue::Set(0),
                is_active: ActiveValue::Set(true),
                is_listed: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
