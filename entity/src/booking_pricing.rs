use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_pricing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub booking_id: i32,
    #[sea_orm(column_type = "Double")]
    pub base_price: f64,
    #[sea_orm(column_type = "Double")]
    pub price_per_person: f64,
    #[sea_orm(column_type = "Double")]
    pub subtotal: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub tax: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub discount_amount: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub discount_percentage: Option<f64>,
    pub discount_code: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub total_price: f64,
    pub currency: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
