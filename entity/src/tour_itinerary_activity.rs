use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour_itinerary_activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub itinerary_id: i32,
    pub activity: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour_itinerary::Entity",
        from = "Column::ItineraryId",
        to = "super::tour_itinerary::Column::Id"
    )]
    TourItinerary,
}

impl Related<super::tour_itinerary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourItinerary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
