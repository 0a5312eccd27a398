use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{BookingStatus, RefundStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub booking_reference: String,
    pub status: BookingStatus,
    pub traveler_id: i32,
    pub traveler_name: String,
    pub traveler_email: String,
    pub traveler_phone: Option<String>,
    pub tour_id: i32,
    pub tour_title: String,
    pub guide_id: i32,
    pub total_participants: i32,
    pub adult_count: i32,
    pub child_count: i32,
    pub start_date: Date,
    pub end_date: Date,
    #[sea_orm(column_type = "Double")]
    pub total_price: f64,
    pub currency: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_requests: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub is_cancelled: bool,
    pub cancelled_at: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cancellation_reason: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub refund_amount: Option<f64>,
    pub refund_status: Option<RefundStatus>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TravelerId",
        to = "super::user::Column::Id"
    )]
    Traveler,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GuideId",
        to = "super::user::Column::Id"
    )]
    Guide,
    #[sea_orm(
        belongs_to = "super::tour::Entity",
        from = "Column::TourId",
        to = "super::tour::Column::Id"
    )]
    Tour,
}

impl Related<super::tour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tour.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
