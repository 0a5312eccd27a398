use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_tour::Tour;

static IDX_ITINERARY_TOUR_DAY: &str = "idx-tour_itineraries-tour_id-day";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourItinerary::Table)
                    .if_not_exists()
                    .col(pk_auto(TourItinerary::Id))
                    .col(integer(TourItinerary::TourId))
                    .col(integer(TourItinerary::Day))
                    .col(string(TourItinerary::Title))
                    .col(text_null(TourItinerary::Description))
                    .col(timestamp(TourItinerary::CreatedAt))
                    .col(timestamp(TourItinerary::UpdatedAt))
                    .col(timestamp_null(TourItinerary::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tour_itineraries-tour_id")
                            .from(TourItinerary::Table, TourItinerary::TourId)
                            .to(Tour::Table, Tour::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITINERARY_TOUR_DAY)
                    .table(TourItinerary::Table)
                    .col(TourItinerary::TourId)
                    .col(TourItinerary::Day)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourItineraryActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(TourItineraryActivity::Id))
                    .col(integer(TourItineraryActivity::ItineraryId))
                    .col(string(TourItineraryActivity::Activity))
                    .col(timestamp(TourItineraryActivity::CreatedAt))
                    .col(timestamp(TourItineraryActivity::UpdatedAt))
                    .col(timestamp_null(TourItineraryActivity::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tour_itinerary_activities-itinerary_id")
                            .from(
                                TourItineraryActivity::Table,
                                TourItineraryActivity::ItineraryId,
                            )
                            .to(TourItinerary::Table, TourItinerary::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourItineraryMeal::Table)
                    .if_not_exists()
                    .col(pk_auto(TourItineraryMeal::Id))
                    .col(integer(TourItineraryMeal::ItineraryId))
                    .col(string(TourItineraryMeal::Meal))
                    .col(timestamp(TourItineraryMeal::CreatedAt))
                    .col(timestamp(TourItineraryMeal::UpdatedAt))
                    .col(timestamp_null(TourItineraryMeal::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tour_itinerary_meals-itinerary_id")
                            .from(TourItineraryMeal::Table, TourItineraryMeal::ItineraryId)
                            .to(TourItinerary::Table, TourItinerary::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourItineraryMeal::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TourItineraryActivity::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITINERARY_TOUR_DAY)
                    .table(TourItinerary::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(TourItinerary::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TourItinerary {
    #[sea_orm(iden = "tour_itineraries")]
    Table,
    Id,
    TourId,
    Day,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum TourItineraryActivity {
    #[sea_orm(iden = "tour_itinerary_activities")]
    Table,
    Id,
    ItineraryId,
    Activity,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum TourItineraryMeal {
    #[sea_orm(iden = "tour_itinerary_meals")]
    Table,
    Id,
    ItineraryId,
    Meal,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
