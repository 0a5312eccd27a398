use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DurationUnit;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub short_description: Option<String>,
    #[sea_orm(unique)]
    pub slug: String,
    pub category_id: i32,
    pub destination_id: i32,
    pub guide_id: i32,
    #[sea_orm(column_type = "Double")]
    pub price_amount: f64,
    pub price_currency: String,
    pub price_per_person: bool,
    pub duration_value: i32,
    pub duration_unit: DurationUnit,
    pub max_participants: Option<i32>,
    pub min_participants: Option<i32>,
    #[sea_orm(column_type = "Double")]
    pub average_rating: f64,
    pub total_reviews: i32,
    pub is_active: bool,
    pub is_listed: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour_category::Entity",
        from = "Column::CategoryId",
        to = "super::tour_category::Column::Id"
    )]
    TourCategory,
    #[sea_orm(
        belongs_to = "super::tour_destination::Entity",
        from = "Column::DestinationId",
        to = "super::tour_destination::Column::Id"
    )]
    TourDestination,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GuideId",
        to = "super::user::Column::Id"
    )]
    Guide,
}

impl Related<super::tour_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourCategory.def()
    }
}

impl Related<super::tour_destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourDestination.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
