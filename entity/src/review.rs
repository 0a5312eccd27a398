use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tour_id: i32,
    pub guide_id: i32,
    pub booking_id: Option<i32>,
    pub reviewer_id: i32,
    pub reviewer_name: String,
    pub reviewer_image: Option<String>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub rating: i32,
    pub helpful_count: i32,
    pub verified: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub guide_response: Option<String>,
    pub guide_response_date: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour::Entity",
        from = "Column::TourId",
        to = "super::tour::Column::Id"
    )]
    Tour,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GuideId",
        to = "super::user::Column::Id"
    )]
    Guide,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewerId",
        to = "super::user::Column::Id"
    )]
    Reviewer,
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
}

impl ActiveModelBehavior for ActiveModel {}
